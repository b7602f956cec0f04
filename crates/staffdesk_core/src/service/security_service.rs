//! Account security use-case service: second factors, backup codes,
//! trusted devices.
//!
//! # Responsibility
//! - Manage a user's enrolled second factors and their enabled state.
//! - Generate, list and consume single-use backup codes.
//! - Register and revoke trusted devices.
//!
//! # Invariants
//! - `generate_backup_codes` replaces the user's existing codes wholesale;
//!   used codes are dropped with the rest.
//! - Consuming a code marks it used; it is never deleted, so the audit
//!   trail survives.

use crate::model::record::{now_rfc3339, RecordId};
use crate::model::security::{BackupCode, TrustedDevice, TwoFactorKind, TwoFactorMethod};
use crate::store::backend::StorageBackend;
use crate::store::{RecordStore, StoreResult};
use uuid::Uuid;

/// Request model for enrolling one second factor.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTwoFactorMethod {
    pub user_id: RecordId,
    pub kind: TwoFactorKind,
    pub label: String,
    /// Channel secret: TOTP seed, phone number or email address.
    pub secret: String,
}

/// Request model for registering one trusted device.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrustedDevice {
    pub user_id: RecordId,
    pub device_name: String,
    pub platform: String,
}

/// Security facade over the record store.
pub struct SecurityService<'a, B: StorageBackend> {
    store: &'a mut RecordStore<B>,
}

impl<'a, B: StorageBackend> SecurityService<'a, B> {
    pub fn new(store: &'a mut RecordStore<B>) -> Self {
        Self { store }
    }

    /// Enrolls one second factor, enabled immediately.
    pub fn enroll_method(&mut self, input: NewTwoFactorMethod) -> StoreResult<TwoFactorMethod> {
        self.store.create(TwoFactorMethod {
            id: 0,
            user_id: input.user_id,
            kind: input.kind,
            label: input.label,
            secret: input.secret,
            enabled: true,
            last_used_at: None,
            created_at: String::new(),
            updated_at: String::new(),
        })
    }

    pub fn get_method(&self, id: RecordId) -> Option<TwoFactorMethod> {
        self.store.get::<TwoFactorMethod>(id).cloned()
    }

    pub fn list_methods(&self, user_id: RecordId) -> Vec<TwoFactorMethod> {
        self.store
            .select(|method: &TwoFactorMethod| method.user_id == user_id)
    }

    pub fn set_method_enabled(
        &mut self,
        id: RecordId,
        enabled: bool,
    ) -> StoreResult<Option<TwoFactorMethod>> {
        self.store
            .update_with(id, |method: &mut TwoFactorMethod| method.enabled = enabled)
    }

    pub fn delete_method(&mut self, id: RecordId) -> StoreResult<bool> {
        self.store.delete::<TwoFactorMethod>(id)
    }

    /// Replaces the user's backup codes with `count` fresh ones.
    ///
    /// Codes are short groups of UUID-derived hex, e.g. `3f2a-9c41`.
    pub fn generate_backup_codes(
        &mut self,
        user_id: RecordId,
        count: usize,
    ) -> StoreResult<Vec<BackupCode>> {
        let stale: Vec<RecordId> = self
            .store
            .list::<BackupCode>()
            .iter()
            .filter(|code| code.user_id == user_id)
            .map(|code| code.id)
            .collect();
        for id in stale {
            self.store.delete::<BackupCode>(id)?;
        }

        let mut issued = Vec::with_capacity(count);
        for _ in 0..count {
            issued.push(self.store.create(BackupCode {
                id: 0,
                user_id,
                code: generate_code(),
                used: false,
                used_at: None,
                created_at: String::new(),
                updated_at: String::new(),
            })?);
        }
        Ok(issued)
    }

    pub fn list_backup_codes(&self, user_id: RecordId) -> Vec<BackupCode> {
        self.store
            .select(|code: &BackupCode| code.user_id == user_id)
    }

    /// Marks the first matching unused code as used.
    ///
    /// Returns `Ok(None)` when no unused code matches; a spent code cannot
    /// be consumed again.
    pub fn consume_backup_code(
        &mut self,
        user_id: RecordId,
        code: &str,
    ) -> StoreResult<Option<BackupCode>> {
        let target = self
            .store
            .list::<BackupCode>()
            .iter()
            .find(|candidate| {
                candidate.user_id == user_id && !candidate.used && candidate.code == code
            })
            .map(|candidate| candidate.id);

        let Some(id) = target else {
            return Ok(None);
        };

        let now = now_rfc3339();
        self.store.update_with(id, |record: &mut BackupCode| {
            record.used = true;
            record.used_at = Some(now);
        })
    }

    /// Registers one trusted device with a fresh opaque token.
    pub fn register_trusted_device(
        &mut self,
        input: NewTrustedDevice,
    ) -> StoreResult<TrustedDevice> {
        let now = now_rfc3339();
        self.store.create(TrustedDevice {
            id: 0,
            user_id: input.user_id,
            device_token: Uuid::new_v4().to_string(),
            device_name: input.device_name,
            platform: input.platform,
            last_seen_at: now,
            created_at: String::new(),
            updated_at: String::new(),
        })
    }

    pub fn get_trusted_device(&self, id: RecordId) -> Option<TrustedDevice> {
        self.store.get::<TrustedDevice>(id).cloned()
    }

    pub fn list_trusted_devices(&self, user_id: RecordId) -> Vec<TrustedDevice> {
        self.store
            .select(|device: &TrustedDevice| device.user_id == user_id)
    }

    /// Refreshes `last_seen_at` on one device.
    pub fn touch_trusted_device(&mut self, id: RecordId) -> StoreResult<Option<TrustedDevice>> {
        let now = now_rfc3339();
        self.store
            .update_with(id, |device: &mut TrustedDevice| device.last_seen_at = now)
    }

    /// Forgets one device entirely.
    pub fn revoke_trusted_device(&mut self, id: RecordId) -> StoreResult<bool> {
        self.store.delete::<TrustedDevice>(id)
    }
}

fn generate_code() -> String {
    let raw = Uuid::new_v4().simple().to_string();
    format!("{}-{}", &raw[..4], &raw[4..8])
}
