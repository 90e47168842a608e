//! # Soroban Profile Registry
//!
//! Network-wide user profiles for Soroban applications. Every identity can
//! claim one validated, unique username, set a display name and attach named
//! fields that other contracts and front ends read back.
//!
//! - Usernames are permanent: deleting a profile keeps its name taken.
//! - Owners edit their own profile; the admin may edit or ban any profile.
//! - The admin can reserve names, charge a registration fee and pause
//!   registration.
//!
//! ## Usage
//!
//! ```rust,ignore
//! client.register(&username, &display_name, &caller);
//!
//! let profile = client.get_by_username(&username);
//! let profile = client.get_by_address(&address);
//!
//! client.set_string_field(&symbol_short!("bio"), &bio_text, &caller);
//! let bio = client.get_field(&address, &symbol_short!("bio"));
//! ```

#![no_std]

mod config;
mod error;
mod events;
mod fields;
mod policy;
mod profile;
mod registry;
mod storage;
mod validation;

pub use config::RegistryConfig;
pub use error::RegistryError;
pub use fields::{standard_fields, FieldValue};
pub use policy::{AdminPolicy, RegistryPolicy};
pub use profile::Profile;
pub use registry::{MAX_RECENT_PAGE, MAX_RECENT_SCAN};
pub use validation::{
    validate_username, MAX_DISPLAY_NAME_LENGTH, MAX_FIELDS, MAX_FIELD_VALUE_LENGTH,
    MAX_USERNAME_LENGTH, MIN_USERNAME_LENGTH,
};

use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, Map, String, Symbol, Vec};

use crate::registry::Registry;

#[contract]
pub struct ProfileRegistryContract;

#[contractimpl]
impl ProfileRegistryContract {
    // ========== Initialization ==========

    /// Set the admin. Must run once before anything else.
    pub fn init(env: Env, admin: Address) -> Result<(), RegistryError> {
        registry::init(&env, &admin)
    }

    pub fn admin(env: Env) -> Result<Address, RegistryError> {
        Ok(Registry::load(&env)?.policy().config().admin.clone())
    }

    pub fn config(env: Env) -> Result<RegistryConfig, RegistryError> {
        Ok(Registry::load(&env)?.policy().config().clone())
    }

    // ========== Registration ==========

    /// Claim `username` for `caller`.
    ///
    /// Usernames are 6-17 characters: three lowercase letters, then
    /// lowercase letters, digits or underscores, ending in three digits.
    pub fn register(
        env: Env,
        username: Bytes,
        display_name: String,
        caller: Address,
    ) -> Result<Profile, RegistryError> {
        Registry::load(&env)?.register(username, display_name, &caller)
    }

    /// True if `username` is well formed, unclaimed and not reserved.
    pub fn is_username_available(env: Env, username: Bytes) -> Result<bool, RegistryError> {
        Ok(Registry::load(&env)?.is_username_available(&username))
    }

    // ========== Queries ==========

    pub fn get_by_username(env: Env, username: Bytes) -> Option<Profile> {
        Registry::load(&env).ok()?.get_by_username(&username)
    }

    pub fn get_by_address(env: Env, address: Address) -> Option<Profile> {
        Registry::load(&env).ok()?.get_by_address(&address)
    }

    pub fn get_field(env: Env, address: Address, field: Symbol) -> Option<FieldValue> {
        Registry::load(&env).ok()?.get_field(&address, field)
    }

    /// The subset of `field_names` set on the profile.
    pub fn get_fields(
        env: Env,
        address: Address,
        field_names: Vec<Symbol>,
    ) -> Map<Symbol, FieldValue> {
        match Registry::load(&env) {
            Ok(registry) => registry.get_fields(&address, field_names),
            Err(_) => Map::new(&env),
        }
    }

    /// Registrations ever made, deleted profiles included.
    pub fn profile_count(env: Env) -> u64 {
        Registry::load(&env).map_or(0, |registry| registry.profile_count())
    }

    /// Newest active profiles first, at most `MAX_RECENT_PAGE` per call.
    /// `offset` counts registrations skipped from the newest.
    pub fn recent_profiles(env: Env, offset: u32, limit: u32) -> Vec<Profile> {
        match Registry::load(&env) {
            Ok(registry) => registry.recent_profiles(offset, limit),
            Err(_) => Vec::new(&env),
        }
    }

    // ========== Profile Updates ==========

    pub fn set_display_name(
        env: Env,
        display_name: String,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Registry::load(&env)?.set_display_name(&caller, display_name, &caller)
    }

    /// Change another identity's display name. Admin only unless
    /// `owner == caller`.
    pub fn set_display_name_for(
        env: Env,
        owner: Address,
        display_name: String,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Registry::load(&env)?.set_display_name(&owner, display_name, &caller)
    }

    pub fn set_string_field(
        env: Env,
        field: Symbol,
        value: String,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Registry::load(&env)?.set_field(&caller, field, FieldValue::StringField(value), &caller)
    }

    /// Set a string field on another identity's profile. Admin only unless
    /// `owner == caller`.
    pub fn set_string_field_for(
        env: Env,
        owner: Address,
        field: Symbol,
        value: String,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Registry::load(&env)?.set_field(&owner, field, FieldValue::StringField(value), &caller)
    }

    pub fn set_int_field(
        env: Env,
        field: Symbol,
        value: i128,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Registry::load(&env)?.set_field(&caller, field, FieldValue::IntField(value), &caller)
    }

    pub fn set_bool_field(
        env: Env,
        field: Symbol,
        value: bool,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Registry::load(&env)?.set_field(&caller, field, FieldValue::BoolField(value), &caller)
    }

    /// Unset a field. Removing a field that is not set succeeds.
    pub fn remove_field(env: Env, field: Symbol, caller: Address) -> Result<(), RegistryError> {
        Registry::load(&env)?.remove_field(&caller, field, &caller)
    }

    // ========== Profile Management ==========

    /// Soft delete the caller's profile.
    ///
    /// The username stays taken. Deleting twice fails with `AlreadyDeleted`.
    pub fn delete_profile(env: Env, caller: Address) -> Result<(), RegistryError> {
        Registry::load(&env)?.delete_profile(&caller)
    }

    // ========== Admin Functions ==========

    pub fn reserve_username(
        env: Env,
        username: Bytes,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Registry::load(&env)?.reserve_username(&username, &caller)
    }

    pub fn unreserve_username(
        env: Env,
        username: Bytes,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Registry::load(&env)?.unreserve_username(&username, &caller)
    }

    /// Charge `amount` of `token` per registration. A zero amount or no
    /// token makes registration free.
    pub fn set_registration_fee(
        env: Env,
        amount: i128,
        token: Option<Address>,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Registry::load(&env)?.set_registration_fee(amount, token, &caller)
    }

    pub fn registration_fee(env: Env) -> Result<i128, RegistryError> {
        Ok(Registry::load(&env)?.policy().config().fee_amount)
    }

    pub fn set_registrations_open(
        env: Env,
        open: bool,
        caller: Address,
    ) -> Result<(), RegistryError> {
        Registry::load(&env)?.set_registrations_open(open, &caller)
    }

    /// Hand admin rights to `new_admin`. Both parties authorize.
    pub fn set_admin(env: Env, new_admin: Address, caller: Address) -> Result<(), RegistryError> {
        Registry::load(&env)?.set_admin(&new_admin, &caller)
    }

    /// Soft delete any profile, even a deleted one, and bar its owner from
    /// registering again (admin only).
    pub fn ban_profile(env: Env, address: Address, caller: Address) -> Result<(), RegistryError> {
        Registry::load(&env)?.ban_profile(&address, &caller)
    }

    /// Replace the contract code (admin only). Stored state is preserved.
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), RegistryError> {
        Registry::load(&env)?.upgrade(new_wasm_hash)
    }
}
