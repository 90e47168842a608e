//! Capability checks applied on top of the base registry.
//!
//! The registry asks its policy whether a caller may act as admin, may edit
//! a given profile, may register right now, and what a registration costs.
//! [`AdminPolicy`] is the single-admin policy the contract ships with.

use soroban_sdk::Address;

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::profile::Profile;

pub trait RegistryPolicy {
    /// Whether `caller` holds admin rights.
    fn is_admin(&self, caller: &Address) -> bool;

    /// Identity that must authorize code upgrades. `None` disables them.
    fn upgrade_authority(&self) -> Option<Address>;

    fn require_admin(&self, caller: &Address) -> Result<(), RegistryError> {
        if self.is_admin(caller) {
            Ok(())
        } else {
            Err(RegistryError::Unauthorized)
        }
    }

    /// Owner or admin may edit a profile.
    fn authorize_edit(&self, profile: &Profile, caller: &Address) -> Result<(), RegistryError> {
        if profile.owner == *caller || self.is_admin(caller) {
            Ok(())
        } else {
            Err(RegistryError::Unauthorized)
        }
    }

    /// Gate evaluated before any registration checks touch storage.
    fn admit_registration(&self, caller: &Address) -> Result<(), RegistryError>;

    /// Fee a caller owes for registering: token, amount and recipient.
    fn registration_fee(&self, caller: &Address) -> Option<(Address, i128, Address)>;
}

pub struct AdminPolicy {
    config: RegistryConfig,
}

impl AdminPolicy {
    pub fn new(config: RegistryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

impl RegistryPolicy for AdminPolicy {
    fn is_admin(&self, caller: &Address) -> bool {
        self.config.admin == *caller
    }

    fn upgrade_authority(&self) -> Option<Address> {
        Some(self.config.admin.clone())
    }

    fn admit_registration(&self, caller: &Address) -> Result<(), RegistryError> {
        if self.config.registrations_open || self.is_admin(caller) {
            Ok(())
        } else {
            Err(RegistryError::RegistrationsClosed)
        }
    }

    fn registration_fee(&self, caller: &Address) -> Option<(Address, i128, Address)> {
        if self.is_admin(caller) {
            return None;
        }
        self.config
            .fee()
            .map(|(token, amount)| (token, amount, self.config.admin.clone()))
    }
}
