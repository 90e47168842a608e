//! On-ledger registry configuration.

use soroban_sdk::{contracttype, Address};

/// Registry settings, kept in instance storage and changed only through
/// admin operations.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    /// Identity allowed to run admin operations.
    pub admin: Address,

    /// Registration fee in the smallest unit of `fee_token`.
    pub fee_amount: i128,

    /// Token the fee is paid in. No fee is charged while this is `None`.
    pub fee_token: Option<Address>,

    /// When false only the admin may register.
    pub registrations_open: bool,
}

impl RegistryConfig {
    pub fn new(admin: Address) -> Self {
        Self {
            admin,
            fee_amount: 0,
            fee_token: None,
            registrations_open: true,
        }
    }

    /// Token and amount to charge, if a fee is in force.
    pub fn fee(&self) -> Option<(Address, i128)> {
        match &self.fee_token {
            Some(token) if self.fee_amount > 0 => Some((token.clone(), self.fee_amount)),
            _ => None,
        }
    }
}
