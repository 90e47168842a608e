//! Registry operations.
//!
//! A [`Registry`] borrows the contract environment for the duration of one
//! invocation. It validates everything before the first write, so an
//! operation that returns an error leaves storage untouched.

use soroban_sdk::{log, token, Address, Bytes, BytesN, Env, Map, String, Symbol, Vec};

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::events;
use crate::fields::FieldValue;
use crate::policy::{AdminPolicy, RegistryPolicy};
use crate::profile::Profile;
use crate::storage::{Instance, ProfileTable, RegistrationLog, ReservedTable, UsernameTable};
use crate::validation::{self, MAX_FIELDS};

/// Largest page `recent_profiles` returns.
pub const MAX_RECENT_PAGE: u32 = 25;

/// Most registration log entries one `recent_profiles` call reads.
pub const MAX_RECENT_SCAN: u32 = 4 * MAX_RECENT_PAGE;

pub struct Registry<'a, P: RegistryPolicy> {
    env: &'a Env,
    policy: P,
}

/// Store the initial configuration. Fails if the registry was set up before.
pub fn init(env: &Env, admin: &Address) -> Result<(), RegistryError> {
    let instance = Instance::new(env);
    if instance.config().is_some() {
        return Err(RegistryError::AlreadyInitialized);
    }
    admin.require_auth();

    instance.set_config(&RegistryConfig::new(admin.clone()));
    instance.set_registration_count(0);
    log!(env, "registry initialized", admin.clone());
    Ok(())
}

impl<'a> Registry<'a, AdminPolicy> {
    /// Open the registry with the stored admin policy.
    pub fn load(env: &'a Env) -> Result<Self, RegistryError> {
        let config = Instance::new(env)
            .config()
            .ok_or(RegistryError::NotInitialized)?;
        Ok(Self::with_policy(env, AdminPolicy::new(config)))
    }
}

impl<'a, P: RegistryPolicy> Registry<'a, P> {
    pub fn with_policy(env: &'a Env, policy: P) -> Self {
        Self { env, policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    fn usernames(&self) -> UsernameTable<'a> {
        UsernameTable::new(self.env)
    }

    fn profiles(&self) -> ProfileTable<'a> {
        ProfileTable::new(self.env)
    }

    fn reserved(&self) -> ReservedTable<'a> {
        ReservedTable::new(self.env)
    }

    fn log(&self) -> RegistrationLog<'a> {
        RegistrationLog::new(self.env)
    }

    // ---- registration ----

    pub fn register(
        &self,
        username: Bytes,
        display_name: String,
        caller: &Address,
    ) -> Result<Profile, RegistryError> {
        caller.require_auth();

        if !validation::validate_username(&username) {
            return Err(RegistryError::InvalidUsername);
        }
        validation::check_display_name(&display_name)?;
        self.policy.admit_registration(caller)?;

        if self.usernames().contains(&username) {
            return Err(RegistryError::UsernameTaken);
        }
        if self.reserved().contains(&username) {
            return Err(RegistryError::UsernameReserved);
        }
        let previous = match self.profiles().get(caller) {
            Some(existing) if existing.banned => return Err(RegistryError::Banned),
            Some(existing) if existing.is_active() => {
                return Err(RegistryError::AlreadyRegistered)
            }
            other => other,
        };

        if let Some((fee_token, amount, recipient)) = self.policy.registration_fee(caller) {
            token::TokenClient::new(self.env, &fee_token).transfer(caller, &recipient, &amount);
            log!(self.env, "registration fee paid", caller.clone(), amount);
        }

        if let Some(deleted) = previous {
            self.profiles().retire(&deleted);
        }
        let profile = Profile::new(self.env, username.clone(), display_name, caller.clone());
        self.usernames().insert(&username, caller);
        self.profiles().put(&profile);
        self.log().append(&username);

        log!(self.env, "profile registered", caller.clone(), username.clone());
        events::profile_registered(self.env, caller, &username);
        Ok(profile)
    }

    pub fn is_username_available(&self, username: &Bytes) -> bool {
        validation::validate_username(username)
            && !self.usernames().contains(username)
            && !self.reserved().contains(username)
    }

    // ---- queries ----

    pub fn get_by_username(&self, username: &Bytes) -> Option<Profile> {
        let owner = self.usernames().owner_of(username)?;
        // The owner may have re-registered under another name after deleting
        // this one.
        self.profiles()
            .get_active(&owner)
            .filter(|p| p.username == *username)
    }

    pub fn get_by_address(&self, owner: &Address) -> Option<Profile> {
        self.profiles().get_active(owner)
    }

    pub fn get_field(&self, owner: &Address, field: Symbol) -> Option<FieldValue> {
        self.get_by_address(owner)?.fields.get(field)
    }

    pub fn get_fields(&self, owner: &Address, names: Vec<Symbol>) -> Map<Symbol, FieldValue> {
        let mut found = Map::new(self.env);
        let Some(profile) = self.get_by_address(owner) else {
            return found;
        };
        for name in names.iter() {
            if let Some(value) = profile.fields.get(name.clone()) {
                found.set(name, value);
            }
        }
        found
    }

    pub fn profile_count(&self) -> u64 {
        self.log().len()
    }

    /// Active profiles, newest registration first.
    ///
    /// `offset` skips that many registrations from the newest. At most
    /// `MAX_RECENT_SCAN` log entries are read, so a page may come back short
    /// when many of them were deleted.
    pub fn recent_profiles(&self, offset: u32, limit: u32) -> Vec<Profile> {
        let limit = limit.min(MAX_RECENT_PAGE);
        let log = self.log();
        let mut page = Vec::new(self.env);
        let mut seq = log.len().saturating_sub(offset as u64);
        let mut scanned = 0u32;

        while seq > 0 && page.len() < limit && scanned < MAX_RECENT_SCAN {
            seq -= 1;
            scanned += 1;
            if let Some(profile) = log.get(seq).and_then(|u| self.get_by_username(&u)) {
                page.push_back(profile);
            }
        }
        page
    }

    // ---- profile edits ----

    /// Load `target`'s active profile, check `caller` may edit it, apply
    /// `change` and persist the result.
    fn edit<F>(
        &self,
        target: &Address,
        caller: &Address,
        change: F,
    ) -> Result<Profile, RegistryError>
    where
        F: FnOnce(&mut Profile) -> Result<(), RegistryError>,
    {
        caller.require_auth();

        let mut profile = self
            .profiles()
            .get_active(target)
            .ok_or(RegistryError::ProfileNotFound)?;
        self.policy.authorize_edit(&profile, caller)?;

        change(&mut profile)?;
        profile.touch(self.env);
        self.profiles().put(&profile);
        Ok(profile)
    }

    pub fn set_field(
        &self,
        target: &Address,
        field: Symbol,
        value: FieldValue,
        caller: &Address,
    ) -> Result<(), RegistryError> {
        if let FieldValue::StringField(text) = &value {
            validation::check_field_value(text)?;
        }

        self.edit(target, caller, |profile| {
            if !profile.fields.contains_key(field.clone()) && profile.fields.len() >= MAX_FIELDS {
                return Err(RegistryError::TooManyFields);
            }
            profile.fields.set(field.clone(), value);
            Ok(())
        })?;

        events::field_set(self.env, target, &field);
        Ok(())
    }

    pub fn remove_field(
        &self,
        target: &Address,
        field: Symbol,
        caller: &Address,
    ) -> Result<(), RegistryError> {
        let mut removed = false;
        self.edit(target, caller, |profile| {
            removed = profile.fields.remove(field.clone()).is_some();
            Ok(())
        })?;

        if removed {
            events::field_removed(self.env, target, &field);
        }
        Ok(())
    }

    pub fn set_display_name(
        &self,
        target: &Address,
        display_name: String,
        caller: &Address,
    ) -> Result<(), RegistryError> {
        validation::check_display_name(&display_name)?;
        self.edit(target, caller, |profile| {
            profile.display_name = display_name;
            Ok(())
        })?;

        events::display_name_set(self.env, target);
        Ok(())
    }

    /// Soft delete the caller's profile. The username stays taken.
    pub fn delete_profile(&self, caller: &Address) -> Result<(), RegistryError> {
        caller.require_auth();

        let mut profile = self
            .profiles()
            .get(caller)
            .ok_or(RegistryError::ProfileNotFound)?;
        if profile.deleted {
            return Err(RegistryError::AlreadyDeleted);
        }

        profile.deleted = true;
        profile.touch(self.env);
        self.profiles().put(&profile);

        log!(self.env, "profile deleted", caller.clone());
        events::profile_deleted(self.env, caller, &profile.username);
        Ok(())
    }

    // ---- admin ----

    fn require_admin(&self, caller: &Address) -> Result<(), RegistryError> {
        self.policy.require_admin(caller)?;
        caller.require_auth();
        Ok(())
    }

    fn update_config<F>(&self, caller: &Address, change: F) -> Result<RegistryConfig, RegistryError>
    where
        F: FnOnce(&mut RegistryConfig),
    {
        self.require_admin(caller)?;
        let instance = Instance::new(self.env);
        let mut config = instance.config().ok_or(RegistryError::NotInitialized)?;
        change(&mut config);
        instance.set_config(&config);
        Ok(config)
    }

    pub fn reserve_username(
        &self,
        username: &Bytes,
        caller: &Address,
    ) -> Result<(), RegistryError> {
        self.require_admin(caller)?;
        if !validation::validate_username(username) {
            return Err(RegistryError::InvalidUsername);
        }

        self.reserved().insert(username);
        events::username_reserved(self.env, username);
        Ok(())
    }

    pub fn unreserve_username(
        &self,
        username: &Bytes,
        caller: &Address,
    ) -> Result<(), RegistryError> {
        self.require_admin(caller)?;

        self.reserved().remove(username);
        events::username_unreserved(self.env, username);
        Ok(())
    }

    pub fn set_registration_fee(
        &self,
        amount: i128,
        fee_token: Option<Address>,
        caller: &Address,
    ) -> Result<(), RegistryError> {
        if amount < 0 {
            return Err(RegistryError::InvalidFee);
        }
        self.update_config(caller, |config| {
            config.fee_amount = amount;
            config.fee_token = fee_token.clone();
        })?;

        events::fee_set(self.env, amount, &fee_token);
        Ok(())
    }

    pub fn set_registrations_open(
        &self,
        open: bool,
        caller: &Address,
    ) -> Result<(), RegistryError> {
        self.update_config(caller, |config| config.registrations_open = open)?;
        events::registrations_toggled(self.env, open);
        Ok(())
    }

    pub fn set_admin(&self, new_admin: &Address, caller: &Address) -> Result<(), RegistryError> {
        self.policy.require_admin(caller)?;
        if new_admin != caller {
            new_admin.require_auth();
        }
        self.update_config(caller, |config| config.admin = new_admin.clone())?;

        log!(self.env, "admin changed", caller.clone(), new_admin.clone());
        events::admin_changed(self.env, new_admin);
        Ok(())
    }

    /// Admin soft delete of another identity's profile. Also applies to a
    /// profile its owner already deleted, so the owner cannot come back.
    pub fn ban_profile(&self, owner: &Address, caller: &Address) -> Result<(), RegistryError> {
        self.require_admin(caller)?;

        let mut profile = self
            .profiles()
            .get(owner)
            .ok_or(RegistryError::ProfileNotFound)?;
        if profile.banned {
            return Err(RegistryError::Banned);
        }
        profile.deleted = true;
        profile.banned = true;
        profile.touch(self.env);
        self.profiles().put(&profile);

        log!(self.env, "profile banned", owner.clone());
        events::profile_banned(self.env, owner, &profile.username);
        Ok(())
    }

    /// Swap the contract code in place. Storage is untouched.
    pub fn upgrade(&self, new_wasm_hash: BytesN<32>) -> Result<(), RegistryError> {
        let authority = self
            .policy
            .upgrade_authority()
            .ok_or(RegistryError::Unauthorized)?;
        self.require_admin(&authority)?;

        events::upgraded(self.env, &new_wasm_hash);
        self.env
            .deployer()
            .update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }
}
