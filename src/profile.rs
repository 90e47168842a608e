//! The profile record kept for every registered identity.

use soroban_sdk::{contracttype, Address, Bytes, Env, Map, String, Symbol};

use crate::fields::FieldValue;

/// A registered user profile.
///
/// `owner` and `username` never change after registration. Everything else
/// is edited through the registry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    /// Unique validated username.
    pub username: Bytes,

    /// Free-form display name, stored verbatim.
    pub display_name: String,

    /// Identity that controls this profile.
    pub owner: Address,

    /// Named profile fields. Absent keys are unset.
    pub fields: Map<Symbol, FieldValue>,

    /// Ledger timestamp at registration.
    pub created_at: u64,

    /// Ledger timestamp of the last mutation.
    pub updated_at: u64,

    /// Soft deletion flag. The username stays taken either way.
    pub deleted: bool,

    /// Set by an admin ban, together with `deleted`. A banned owner cannot
    /// register again.
    pub banned: bool,
}

impl Profile {
    pub fn new(env: &Env, username: Bytes, display_name: String, owner: Address) -> Self {
        let now = env.ledger().timestamp();
        Self {
            username,
            display_name,
            owner,
            fields: Map::new(env),
            created_at: now,
            updated_at: now,
            deleted: false,
            banned: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.deleted
    }

    /// Stamp the profile as modified at the current ledger time.
    pub fn touch(&mut self, env: &Env) {
        self.updated_at = env.ledger().timestamp();
    }
}
