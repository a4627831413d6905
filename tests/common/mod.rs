#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;
use user_crud_core::api::{MemoryUserService, UserService};
use user_crud_core::errors::ApiError;
use user_crud_core::user::{CreateUserDto, UpdateUserDto, User};

pub fn sample_user(id: &str, first: &str, last: &str) -> User {
    User {
        id: id.into(),
        first_name: first.into(),
        last_name: last.into(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        phone_number: "+1 555 123 4567".into(),
    }
}

pub fn sample_users() -> Vec<User> {
    vec![
        sample_user("u1", "Ada", "Lovelace"),
        sample_user("u2", "Alan", "Turing"),
        sample_user("u3", "Grace", "Hopper"),
    ]
}

/// Fails every call with the given HTTP status.
pub struct FailingService {
    pub status: u16,
}

#[async_trait]
impl UserService for FailingService {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        Err(ApiError::from_status(self.status))
    }

    async fn get(&self, _id: &str) -> Result<User, ApiError> {
        Err(ApiError::from_status(self.status))
    }

    async fn create(&self, _dto: &CreateUserDto) -> Result<User, ApiError> {
        Err(ApiError::from_status(self.status))
    }

    async fn update(&self, _id: &str, _dto: &UpdateUserDto) -> Result<User, ApiError> {
        Err(ApiError::from_status(self.status))
    }

    async fn delete(&self, _id: &str) -> Result<(), ApiError> {
        Err(ApiError::from_status(self.status))
    }
}

/// Holds every `list` call until [`GatedService::open`] is called.
pub struct GatedService {
    pub inner: MemoryUserService,
    pub gate: Arc<Notify>,
}

impl GatedService {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            inner: MemoryUserService::with_users(users),
            gate: Arc::new(Notify::new()),
        }
    }

    pub fn open(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl UserService for GatedService {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.gate.notified().await;
        self.inner.list().await
    }

    async fn get(&self, id: &str) -> Result<User, ApiError> {
        self.inner.get(id).await
    }

    async fn create(&self, dto: &CreateUserDto) -> Result<User, ApiError> {
        self.inner.create(dto).await
    }

    async fn update(&self, id: &str, dto: &UpdateUserDto) -> Result<User, ApiError> {
        self.inner.update(id, dto).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.inner.delete(id).await
    }
}
