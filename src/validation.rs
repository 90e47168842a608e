//! Input validation for usernames, display names and field values.
//!
//! Usernames match `^[a-z]{3}[_a-z0-9]{0,11}[0-9]{3}$`: three leading
//! lowercase letters, up to eleven letters, digits or underscores, then
//! exactly three digits. `alice001`, `bob_smith123` and `crypto_fan_999` are
//! all valid.

use soroban_sdk::{Bytes, String};

use crate::error::RegistryError;

pub const MIN_USERNAME_LENGTH: u32 = 6;
pub const MAX_USERNAME_LENGTH: u32 = 17;

const LEADING_LETTERS: usize = 3;
const TRAILING_DIGITS: usize = 3;

/// Longest accepted display name, in bytes.
pub const MAX_DISPLAY_NAME_LENGTH: u32 = 64;

/// Longest accepted string field value, in bytes.
pub const MAX_FIELD_VALUE_LENGTH: u32 = 256;

/// Most fields a single profile may hold.
pub const MAX_FIELDS: u32 = 16;

/// Returns true if `username` matches the username pattern.
pub fn validate_username(username: &Bytes) -> bool {
    let len = username.len();
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
        return false;
    }

    let mut buf = [0u8; MAX_USERNAME_LENGTH as usize];
    let raw = &mut buf[..len as usize];
    username.copy_into_slice(raw);
    matches_username_pattern(raw)
}

/// Pattern check over raw bytes.
pub fn matches_username_pattern(raw: &[u8]) -> bool {
    let len = raw.len();
    if !(MIN_USERNAME_LENGTH as usize..=MAX_USERNAME_LENGTH as usize).contains(&len) {
        return false;
    }

    let (head, rest) = raw.split_at(LEADING_LETTERS);
    let (middle, tail) = rest.split_at(rest.len() - TRAILING_DIGITS);

    head.iter().all(u8::is_ascii_lowercase)
        && middle
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'_')
        && tail.iter().all(u8::is_ascii_digit)
}

pub fn check_display_name(display_name: &String) -> Result<(), RegistryError> {
    if display_name.len() > MAX_DISPLAY_NAME_LENGTH {
        return Err(RegistryError::InvalidDisplayName);
    }
    Ok(())
}

pub fn check_field_value(value: &String) -> Result<(), RegistryError> {
    if value.len() > MAX_FIELD_VALUE_LENGTH {
        return Err(RegistryError::FieldTooLong);
    }
    Ok(())
}
