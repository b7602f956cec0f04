//! Account security models: second factors, backup codes, trusted devices.
//!
//! # Responsibility
//! - Define the records behind the portal's two-factor settings page.
//!
//! # Invariants
//! - All three record kinds hang off a `user_id`; deleting the user does not
//!   cascade (loose references, as everywhere in the store).
//! - A backup code is single-use: once `used` is set it stays set.

use crate::model::record::record_impl;
use crate::model::record::RecordId;
use serde::{Deserialize, Serialize};

/// Supported second-factor channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwoFactorKind {
    Totp,
    Sms,
    Email,
}

/// One enrolled second factor for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoFactorMethod {
    pub id: RecordId,
    pub user_id: RecordId,
    pub kind: TwoFactorKind,
    /// User-facing label, e.g. `"Work phone"`.
    pub label: String,
    /// Channel secret: TOTP seed, phone number or email address.
    pub secret: String,
    pub enabled: bool,
    pub last_used_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

record_impl!(TwoFactorMethod, "two_factor_methods");

/// Single-use recovery code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupCode {
    pub id: RecordId,
    pub user_id: RecordId,
    pub code: String,
    pub used: bool,
    pub used_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

record_impl!(BackupCode, "backup_codes");

/// Device remembered after a successful two-factor challenge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustedDevice {
    pub id: RecordId,
    pub user_id: RecordId,
    /// Opaque token stored in the device cookie; UUID v4 text.
    pub device_token: String,
    pub device_name: String,
    pub platform: String,
    pub last_seen_at: String,
    pub created_at: String,
    pub updated_at: String,
}

record_impl!(TrustedDevice, "trusted_devices");
