//! Error taxonomy surfaced by every registry entry point.

use soroban_sdk::contracterror;

/// Errors returned by the profile registry.
///
/// Codes are part of the contract ABI; never renumber an existing variant.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    /// `init` was already called.
    AlreadyInitialized = 1,
    /// `init` has not been called yet.
    NotInitialized = 2,
    /// Caller is neither the profile owner nor the admin.
    Unauthorized = 3,
    /// Username does not match the required pattern.
    InvalidUsername = 4,
    /// Username belongs to a profile, active or deleted.
    UsernameTaken = 5,
    /// Username is on the admin reserved list.
    UsernameReserved = 6,
    /// No active profile for the targeted identity.
    ProfileNotFound = 7,
    /// Caller already owns an active profile.
    AlreadyRegistered = 8,
    /// Profile is already soft-deleted.
    AlreadyDeleted = 9,
    /// Display name is longer than allowed.
    InvalidDisplayName = 10,
    /// Field value is longer than allowed.
    FieldTooLong = 11,
    /// Profile already holds the maximum number of fields.
    TooManyFields = 12,
    /// Registration fee must not be negative.
    InvalidFee = 13,
    /// Registration is paused by the admin.
    RegistrationsClosed = 14,
    /// Identity was banned by the admin and may not register again.
    Banned = 15,
}
