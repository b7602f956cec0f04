//! Portal account use-case service.

use crate::model::record::{now_rfc3339, RecordId};
use crate::model::user::{User, UserRole, UserStatus};
use crate::store::backend::StorageBackend;
use crate::store::query::TextFilter;
use crate::store::{RecordStore, StoreResult};

/// Request model for provisioning one account.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Partial update; `None` fields are left as stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

impl UserUpdate {
    fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(status) = self.status {
            user.status = status;
        }
    }
}

/// Account listing filter; set fields AND together.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub email: Option<TextFilter>,
}

impl UserQuery {
    pub fn matches(&self, user: &User) -> bool {
        self.role.map_or(true, |role| user.role == role)
            && self.status.map_or(true, |status| user.status == status)
            && self
                .email
                .as_ref()
                .map_or(true, |filter| filter.matches(&user.email))
    }
}

/// Account facade over the record store.
pub struct UserService<'a, B: StorageBackend> {
    store: &'a mut RecordStore<B>,
}

impl<'a, B: StorageBackend> UserService<'a, B> {
    pub fn new(store: &'a mut RecordStore<B>) -> Self {
        Self { store }
    }

    /// Creates one account with status `active` and no sign-in history.
    pub fn create_user(&mut self, input: NewUser) -> StoreResult<User> {
        self.store.create(User {
            id: 0,
            name: input.name,
            email: input.email,
            role: input.role,
            status: UserStatus::Active,
            last_login_at: None,
            created_at: String::new(),
            updated_at: String::new(),
        })
    }

    pub fn get_user(&self, id: RecordId) -> Option<User> {
        self.store.get::<User>(id).cloned()
    }

    /// First account with the given sign-in email.
    pub fn get_by_email(&self, email: &str) -> Option<User> {
        self.store
            .list::<User>()
            .iter()
            .find(|user| user.email == email)
            .cloned()
    }

    pub fn get_all_users(&self, query: &UserQuery) -> Vec<User> {
        self.store.select(|user| query.matches(user))
    }

    pub fn update_user(&mut self, id: RecordId, patch: UserUpdate) -> StoreResult<Option<User>> {
        self.store.update_with(id, |user| patch.apply(user))
    }

    pub fn delete_user(&mut self, id: RecordId) -> StoreResult<bool> {
        self.store.delete::<User>(id)
    }

    /// Stamps `last_login_at` with the current instant.
    pub fn record_login(&mut self, id: RecordId) -> StoreResult<Option<User>> {
        let now = now_rfc3339();
        self.store
            .update_with(id, |user: &mut User| user.last_login_at = Some(now))
    }
}
