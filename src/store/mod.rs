//! Authoritative in-memory user list with loading and error flags.
//!
//! Every operation raises `loading`, clears `error`, and lowers `loading` when
//! it completes. A failed operation leaves the list untouched, records a
//! human-readable message and hands the caller `None` or `false`.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{info, warn};

use crate::api::UserService;
use crate::errors::ApiError;
use crate::user::{CreateUserDto, UpdateUserDto, User};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UserStore<S: UserService> {
    service: S,
    state: RwLock<ListState>,
}

impl<S: UserService> UserStore<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: RwLock::new(ListState::default()),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Copy of the current state, safe to take while a request is in flight.
    pub fn snapshot(&self) -> ListState {
        self.read().clone()
    }

    pub fn users(&self) -> Vec<User> {
        self.read().users.clone()
    }

    pub fn find(&self, id: &str) -> Option<User> {
        self.read().users.iter().find(|user| user.id == id).cloned()
    }

    /// True while a request is in flight; submit controls stay disabled.
    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.read().error.clone()
    }

    pub fn clear_error(&self) {
        self.write().error = None;
    }

    pub async fn fetch(&self) {
        self.begin();
        let result = self.service.list().await;
        let mut state = self.write();
        state.loading = false;
        match result {
            Ok(users) => {
                info!(count = users.len(), "loaded users");
                state.users = users;
            }
            Err(err) => record_failure(&mut state, "fetch", err),
        }
    }

    pub async fn add(&self, dto: CreateUserDto) -> Option<User> {
        self.begin();
        let result = self.service.create(&dto).await;
        let mut state = self.write();
        state.loading = false;
        match result {
            Ok(user) => {
                info!(id = %user.id, "created user");
                state.users.push(user.clone());
                Some(user)
            }
            Err(err) => {
                record_failure(&mut state, "create", err);
                None
            }
        }
    }

    /// Replaces the matching row in place. An id missing from the list leaves
    /// the list alone but the updated user is still returned.
    pub async fn edit(&self, id: &str, dto: UpdateUserDto) -> Option<User> {
        self.begin();
        let result = self.service.update(id, &dto).await;
        let mut state = self.write();
        state.loading = false;
        match result {
            Ok(updated) => {
                info!(id, "updated user");
                if let Some(slot) = state.users.iter_mut().find(|user| user.id == id) {
                    *slot = updated.clone();
                }
                Some(updated)
            }
            Err(err) => {
                record_failure(&mut state, "update", err);
                None
            }
        }
    }

    pub async fn remove(&self, id: &str) -> bool {
        self.begin();
        let result = self.service.delete(id).await;
        let mut state = self.write();
        state.loading = false;
        match result {
            Ok(()) => {
                info!(id, "deleted user");
                state.users.retain(|user| user.id != id);
                true
            }
            Err(err) => {
                record_failure(&mut state, "delete", err);
                false
            }
        }
    }

    fn begin(&self) {
        let mut state = self.write();
        state.loading = true;
        state.error = None;
    }

    fn read(&self) -> RwLockReadGuard<'_, ListState> {
        self.state.read().expect("UserStore lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, ListState> {
        self.state.write().expect("UserStore lock poisoned")
    }
}

fn record_failure(state: &mut ListState, operation: &str, err: ApiError) {
    warn!(operation, error = %err, "user operation failed");
    state.error = Some(err.to_string());
}
