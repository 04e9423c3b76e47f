use std::sync::Arc;

use auth::Authenticator;
use daycare_service::config::Config;
use daycare_service::domain::child::service::ChildService;
use daycare_service::domain::classroom::service::ClassroomService;
use daycare_service::domain::identity::service::AuthService;
use daycare_service::domain::teacher::service::TeacherService;
use daycare_service::inbound::http::policy;
use daycare_service::inbound::http::router::create_router;
use daycare_service::inbound::http::router::AppState;
use daycare_service::outbound::repositories::PostgresChildRepository;
use daycare_service::outbound::repositories::PostgresClassroomRepository;
use daycare_service::outbound::repositories::PostgresCredentialStore;
use daycare_service::outbound::repositories::PostgresTeacherRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "daycare_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "daycare-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_lifetime_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    // Signing secret loaded once; shared immutably across all requests.
    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));

    let credential_store = Arc::new(PostgresCredentialStore::new(pg_pool.clone()));
    let teacher_repository = Arc::new(PostgresTeacherRepository::new(pg_pool.clone()));
    let classroom_repository = Arc::new(PostgresClassroomRepository::new(pg_pool.clone()));
    let child_repository = Arc::new(PostgresChildRepository::new(pg_pool));

    let state = AppState {
        auth_service: Arc::new(AuthService::new(
            credential_store,
            authenticator,
            config.jwt.expiration_hours,
        )),
        teacher_service: Arc::new(TeacherService::new(
            teacher_repository.clone(),
            classroom_repository.clone(),
        )),
        classroom_service: Arc::new(ClassroomService::new(
            classroom_repository.clone(),
            teacher_repository,
            child_repository.clone(),
        )),
        child_service: Arc::new(ChildService::new(child_repository, classroom_repository)),
        access_policy: Arc::new(policy::default_policy()),
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    Ok(())
}
