pub mod children;
pub mod classrooms;
pub mod credentials;
pub mod teachers;

pub use children::PostgresChildRepository;
pub use classrooms::PostgresClassroomRepository;
pub use credentials::PostgresCredentialStore;
pub use teachers::PostgresTeacherRepository;
