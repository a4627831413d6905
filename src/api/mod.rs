//! Entity service facade for users.
//!
//! [`UserService`] is the capability the rest of the crate depends on.
//! [`HttpUserService`] maps it onto the REST API, [`MemoryUserService`] keeps
//! everything in process.

pub mod client;
pub mod memory;

use async_trait::async_trait;

pub use client::HttpClient;
pub use memory::MemoryUserService;

use crate::errors::ApiError;
use crate::user::{CreateUserDto, UpdateUserDto, User};

const USERS_ENDPOINT: &str = "/users";

#[async_trait]
pub trait UserService: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, ApiError>;

    async fn get(&self, id: &str) -> Result<User, ApiError>;

    async fn create(&self, dto: &CreateUserDto) -> Result<User, ApiError>;

    async fn update(&self, id: &str, dto: &UpdateUserDto) -> Result<User, ApiError>;

    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

#[async_trait]
impl<S: UserService + ?Sized> UserService for Box<S> {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        (**self).list().await
    }

    async fn get(&self, id: &str) -> Result<User, ApiError> {
        (**self).get(id).await
    }

    async fn create(&self, dto: &CreateUserDto) -> Result<User, ApiError> {
        (**self).create(dto).await
    }

    async fn update(&self, id: &str, dto: &UpdateUserDto) -> Result<User, ApiError> {
        (**self).update(id, dto).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        (**self).delete(id).await
    }
}

/// `GET/POST /users`, `GET/PUT/DELETE /users/{id}`.
#[derive(Debug, Clone)]
pub struct HttpUserService {
    client: HttpClient,
}

impl HttpUserService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    fn item(id: &str) -> String {
        format!("{USERS_ENDPOINT}/{id}")
    }
}

#[async_trait]
impl UserService for HttpUserService {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.client.get(USERS_ENDPOINT).await
    }

    async fn get(&self, id: &str) -> Result<User, ApiError> {
        self.client.get(&Self::item(id)).await
    }

    async fn create(&self, dto: &CreateUserDto) -> Result<User, ApiError> {
        self.client.post(USERS_ENDPOINT, dto).await
    }

    async fn update(&self, id: &str, dto: &UpdateUserDto) -> Result<User, ApiError> {
        self.client.put(&Self::item(id), dto).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&Self::item(id)).await
    }
}
