#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use axum::body::Body;
use axum::http::header;
use axum::http::Method;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use daycare_service::domain::child::errors::ChildError;
use daycare_service::domain::child::models::Child;
use daycare_service::domain::child::models::ChildId;
use daycare_service::domain::child::ports::ChildRepository;
use daycare_service::domain::child::service::ChildService;
use daycare_service::domain::classroom::errors::ClassroomError;
use daycare_service::domain::classroom::models::Classroom;
use daycare_service::domain::classroom::models::ClassroomId;
use daycare_service::domain::classroom::ports::ClassroomRepository;
use daycare_service::domain::classroom::service::ClassroomService;
use daycare_service::domain::identity::errors::AccountError;
use daycare_service::domain::identity::errors::CredentialStoreError;
use daycare_service::domain::identity::models::CredentialRecord;
use daycare_service::domain::identity::models::ROLE_ADMIN;
use daycare_service::domain::identity::models::ROLE_STAFF;
use daycare_service::domain::identity::ports::CredentialStore;
use daycare_service::domain::identity::service::AuthService;
use daycare_service::domain::teacher::errors::TeacherError;
use daycare_service::domain::teacher::models::Teacher;
use daycare_service::domain::teacher::models::TeacherId;
use daycare_service::domain::teacher::ports::TeacherRepository;
use daycare_service::domain::teacher::service::TeacherService;
use daycare_service::inbound::http::policy;
use daycare_service::inbound::http::router::create_router;
use daycare_service::inbound::http::router::AppState;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

/// Signing secret shared by the app under test and token-forging helpers.
pub const JWT_SECRET: &[u8] = b"test-secret-key-for-token-signing-at-least-32-bytes";

pub const ADMIN_USERNAME: &str = "head_of_school";
pub const ADMIN_PASSWORD: &str = "admin_pass_word!";
pub const STAFF_USERNAME: &str = "room_leader";
pub const STAFF_PASSWORD: &str = "staff_pass_word!";

/// In-memory credential store backing the router under test.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    records: Mutex<HashMap<String, CredentialRecord>>,
}

impl InMemoryCredentialStore {
    pub fn remove(&self, username: &str) {
        self.records.lock().unwrap().remove(username);
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn lookup(
        &self,
        subject: &str,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError> {
        Ok(self.records.lock().unwrap().get(subject).cloned())
    }

    async fn create(&self, record: CredentialRecord) -> Result<CredentialRecord, AccountError> {
        let mut records = self.records.lock().unwrap();
        if records.contains_key(&record.username) {
            return Err(AccountError::UsernameAlreadyExists(record.username));
        }
        records.insert(record.username.clone(), record.clone());
        Ok(record)
    }
}

#[derive(Default)]
pub struct InMemoryTeacherRepository {
    teachers: Mutex<HashMap<Uuid, Teacher>>,
}

#[async_trait]
impl TeacherRepository for InMemoryTeacherRepository {
    async fn create(&self, teacher: Teacher) -> Result<Teacher, TeacherError> {
        self.teachers
            .lock()
            .unwrap()
            .insert(teacher.id.0, teacher.clone());
        Ok(teacher)
    }

    async fn find_by_id(&self, id: &TeacherId) -> Result<Option<Teacher>, TeacherError> {
        Ok(self.teachers.lock().unwrap().get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Teacher>, TeacherError> {
        Ok(self.teachers.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, teacher: Teacher) -> Result<Teacher, TeacherError> {
        let mut teachers = self.teachers.lock().unwrap();
        if !teachers.contains_key(&teacher.id.0) {
            return Err(TeacherError::NotFound(teacher.id.to_string()));
        }
        teachers.insert(teacher.id.0, teacher.clone());
        Ok(teacher)
    }

    async fn delete(&self, id: &TeacherId) -> Result<(), TeacherError> {
        self.teachers
            .lock()
            .unwrap()
            .remove(&id.0)
            .map(|_| ())
            .ok_or(TeacherError::NotFound(id.to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryClassroomRepository {
    classrooms: Mutex<HashMap<Uuid, Classroom>>,
}

#[async_trait]
impl ClassroomRepository for InMemoryClassroomRepository {
    async fn create(&self, classroom: Classroom) -> Result<Classroom, ClassroomError> {
        self.classrooms
            .lock()
            .unwrap()
            .insert(classroom.id.0, classroom.clone());
        Ok(classroom)
    }

    async fn find_by_id(&self, id: &ClassroomId) -> Result<Option<Classroom>, ClassroomError> {
        Ok(self.classrooms.lock().unwrap().get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Classroom>, ClassroomError> {
        Ok(self.classrooms.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_teacher(
        &self,
        teacher_id: &TeacherId,
    ) -> Result<Vec<Classroom>, ClassroomError> {
        Ok(self
            .classrooms
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.teacher_id.as_ref() == Some(teacher_id))
            .cloned()
            .collect())
    }

    async fn update(&self, classroom: Classroom) -> Result<Classroom, ClassroomError> {
        let mut classrooms = self.classrooms.lock().unwrap();
        if !classrooms.contains_key(&classroom.id.0) {
            return Err(ClassroomError::NotFound(classroom.id.to_string()));
        }
        classrooms.insert(classroom.id.0, classroom.clone());
        Ok(classroom)
    }

    async fn delete(&self, id: &ClassroomId) -> Result<(), ClassroomError> {
        self.classrooms
            .lock()
            .unwrap()
            .remove(&id.0)
            .map(|_| ())
            .ok_or(ClassroomError::NotFound(id.to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryChildRepository {
    children: Mutex<HashMap<Uuid, Child>>,
}

#[async_trait]
impl ChildRepository for InMemoryChildRepository {
    async fn create(&self, child: Child) -> Result<Child, ChildError> {
        self.children
            .lock()
            .unwrap()
            .insert(child.id.0, child.clone());
        Ok(child)
    }

    async fn find_by_id(&self, id: &ChildId) -> Result<Option<Child>, ChildError> {
        Ok(self.children.lock().unwrap().get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Child>, ChildError> {
        Ok(self.children.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_classroom(
        &self,
        classroom_id: &ClassroomId,
    ) -> Result<Vec<Child>, ChildError> {
        Ok(self
            .children
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.classroom_id.as_ref() == Some(classroom_id))
            .cloned()
            .collect())
    }

    async fn update(&self, child: Child) -> Result<Child, ChildError> {
        let mut children = self.children.lock().unwrap();
        if !children.contains_key(&child.id.0) {
            return Err(ChildError::NotFound(child.id.to_string()));
        }
        children.insert(child.id.0, child.clone());
        Ok(child)
    }

    async fn delete(&self, id: &ChildId) -> Result<(), ChildError> {
        self.children
            .lock()
            .unwrap()
            .remove(&id.0)
            .map(|_| ())
            .ok_or(ChildError::NotFound(id.to_string()))
    }
}

/// Test application driving the full router in-process, with in-memory
/// implementations behind every port.
pub struct TestApp {
    pub router: Router,
    pub credentials: Arc<InMemoryCredentialStore>,
}

impl TestApp {
    /// Build the app with two seeded accounts: an admin and a regular
    /// staff member.
    pub async fn new() -> Self {
        let authenticator = Arc::new(Authenticator::new(JWT_SECRET));
        let credentials = Arc::new(InMemoryCredentialStore::default());

        for (username, password, roles) in [
            (
                ADMIN_USERNAME,
                ADMIN_PASSWORD,
                vec![ROLE_ADMIN.to_string(), ROLE_STAFF.to_string()],
            ),
            (STAFF_USERNAME, STAFF_PASSWORD, vec![ROLE_STAFF.to_string()]),
        ] {
            let password_hash = authenticator
                .hash_password(password)
                .expect("Failed to hash seed password");
            credentials
                .create(CredentialRecord {
                    username: username.to_string(),
                    password_hash,
                    roles,
                })
                .await
                .expect("Failed to seed account");
        }

        let teacher_repository = Arc::new(InMemoryTeacherRepository::default());
        let classroom_repository = Arc::new(InMemoryClassroomRepository::default());
        let child_repository = Arc::new(InMemoryChildRepository::default());

        let state = AppState {
            auth_service: Arc::new(AuthService::new(credentials.clone(), authenticator, 8)),
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

        Self {
            router: create_router(state),
            credentials,
        }
    }

    /// Send one request through the router and return status plus parsed
    /// JSON body (`Null` for empty bodies).
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json).expect("Failed to serialize request body"),
                )),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();
        // Not every endpoint speaks JSON (the health probe is plain text);
        // surface those bodies as strings instead of panicking.
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        (status, json)
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> (StatusCode, serde_json::Value) {
        self.request(Method::GET, path, token, None).await
    }

    pub async fn post(
        &self,
        path: &str,
        token: Option<&str>,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.request(Method::POST, path, token, Some(body)).await
    }

    pub async fn put(
        &self,
        path: &str,
        token: Option<&str>,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.request(Method::PUT, path, token, Some(body)).await
    }

    pub async fn patch(
        &self,
        path: &str,
        token: Option<&str>,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.request(Method::PATCH, path, token, Some(body)).await
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> (StatusCode, serde_json::Value) {
        self.request(Method::DELETE, path, token, None).await
    }

    /// Log in through the API and return the issued token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let (status, body) = self
            .post(
                "/api/auth/login",
                None,
                json!({ "username": username, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["data"]["token"]
            .as_str()
            .expect("Login response missing token")
            .to_string()
    }

    pub async fn admin_token(&self) -> String {
        self.login(ADMIN_USERNAME, ADMIN_PASSWORD).await
    }

    pub async fn staff_token(&self) -> String {
        self.login(STAFF_USERNAME, STAFF_PASSWORD).await
    }
}
