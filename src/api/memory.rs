use std::sync::Mutex;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::UserService;
use crate::errors::ApiError;
use crate::user::{CreateUserDto, UpdateUserDto, User};

/// In-process user service. Backs the offline shell and the tests.
///
/// Unknown ids fail the same way the REST API does, with a 404 status error.
#[derive(Debug, Default)]
pub struct MemoryUserService {
    users: Mutex<Vec<User>>,
}

impl MemoryUserService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users().clone()
    }

    fn users(&self) -> std::sync::MutexGuard<'_, Vec<User>> {
        self.users.lock().expect("MemoryUserService lock poisoned")
    }
}

#[async_trait]
impl UserService for MemoryUserService {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.snapshot())
    }

    async fn get(&self, id: &str) -> Result<User, ApiError> {
        self.users()
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(|| ApiError::from_status(404))
    }

    async fn create(&self, dto: &CreateUserDto) -> Result<User, ApiError> {
        let user = dto.clone().into_user(Uuid::new_v4().to_string());
        self.users().push(user.clone());
        info!(id = %user.id, "stored user in memory");
        Ok(user)
    }

    async fn update(&self, id: &str, dto: &UpdateUserDto) -> Result<User, ApiError> {
        let mut users = self.users();
        let user = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| ApiError::from_status(404))?;
        user.apply(dto);
        Ok(user.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let mut users = self.users();
        let before = users.len();
        users.retain(|user| user.id != id);
        if users.len() == before {
            return Err(ApiError::from_status(404));
        }
        Ok(())
    }
}
