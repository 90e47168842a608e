//! Storage keys and the tables the registry keeps on the ledger.
//!
//! Each table wraps one family of keys so that the registry never touches
//! raw storage. Persistent entries get their TTL extended whenever they are
//! written.

use soroban_sdk::{contracttype, Address, Bytes, Env};

use crate::config::RegistryConfig;
use crate::profile::Profile;

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    /// Registry configuration (instance).
    Config,

    /// Number of registrations ever made (instance). Also the length of
    /// the registration log.
    RegistrationCount,

    /// Username to owner. Never removed, which keeps deleted usernames taken.
    Username(Bytes),

    /// Owner to profile.
    Profile(Address),

    /// Usernames blocked by the admin.
    Reserved(Bytes),

    /// Registration log entry: sequence number to username.
    Registration(u64),

    /// Deleted profile replaced by its owner's later registration, keyed by
    /// the old username.
    Retired(Bytes),
}

pub const PROFILE_TTL_THRESHOLD: u32 = 518_400; // ~30 days
pub const PROFILE_TTL_EXTEND: u32 = 2_592_000; // ~150 days

pub const INSTANCE_TTL_THRESHOLD: u32 = 518_400;
pub const INSTANCE_TTL_EXTEND: u32 = 2_592_000;

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PROFILE_TTL_THRESHOLD, PROFILE_TTL_EXTEND);
}

/// Instance-level values: configuration and the registration counter.
pub struct Instance<'a> {
    env: &'a Env,
}

impl<'a> Instance<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    pub fn config(&self) -> Option<RegistryConfig> {
        self.env.storage().instance().get(&DataKey::Config)
    }

    pub fn set_config(&self, config: &RegistryConfig) {
        self.env.storage().instance().set(&DataKey::Config, config);
        self.bump();
    }

    pub fn registration_count(&self) -> u64 {
        self.env
            .storage()
            .instance()
            .get(&DataKey::RegistrationCount)
            .unwrap_or(0)
    }

    pub fn set_registration_count(&self, count: u64) {
        self.env
            .storage()
            .instance()
            .set(&DataKey::RegistrationCount, &count);
        self.bump();
    }

    pub fn bump(&self) {
        self.env
            .storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
    }
}

/// Username index: username to owner address.
pub struct UsernameTable<'a> {
    env: &'a Env,
}

impl<'a> UsernameTable<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    pub fn owner_of(&self, username: &Bytes) -> Option<Address> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Username(username.clone()))
    }

    pub fn contains(&self, username: &Bytes) -> bool {
        self.env
            .storage()
            .persistent()
            .has(&DataKey::Username(username.clone()))
    }

    pub fn insert(&self, username: &Bytes, owner: &Address) {
        let key = DataKey::Username(username.clone());
        self.env.storage().persistent().set(&key, owner);
        bump(self.env, &key);
    }
}

/// Owner index: owner address to profile record.
pub struct ProfileTable<'a> {
    env: &'a Env,
}

impl<'a> ProfileTable<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    /// Returns the stored record, deleted or not.
    pub fn get(&self, owner: &Address) -> Option<Profile> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Profile(owner.clone()))
    }

    pub fn get_active(&self, owner: &Address) -> Option<Profile> {
        self.get(owner).filter(Profile::is_active)
    }

    pub fn put(&self, profile: &Profile) {
        let key = DataKey::Profile(profile.owner.clone());
        self.env.storage().persistent().set(&key, profile);
        bump(self.env, &key);
    }

    /// Keep a deleted record that is about to be replaced in the owner index.
    pub fn retire(&self, profile: &Profile) {
        let key = DataKey::Retired(profile.username.clone());
        self.env.storage().persistent().set(&key, profile);
        bump(self.env, &key);
    }

    pub fn retired(&self, username: &Bytes) -> Option<Profile> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Retired(username.clone()))
    }
}

/// Admin-maintained list of blocked usernames.
pub struct ReservedTable<'a> {
    env: &'a Env,
}

impl<'a> ReservedTable<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    pub fn contains(&self, username: &Bytes) -> bool {
        self.env
            .storage()
            .persistent()
            .has(&DataKey::Reserved(username.clone()))
    }

    pub fn insert(&self, username: &Bytes) {
        let key = DataKey::Reserved(username.clone());
        self.env.storage().persistent().set(&key, &true);
        bump(self.env, &key);
    }

    pub fn remove(&self, username: &Bytes) {
        self.env
            .storage()
            .persistent()
            .remove(&DataKey::Reserved(username.clone()));
    }
}

/// Append-only log of usernames in registration order.
pub struct RegistrationLog<'a> {
    env: &'a Env,
}

impl<'a> RegistrationLog<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    pub fn len(&self) -> u64 {
        Instance::new(self.env).registration_count()
    }

    pub fn append(&self, username: &Bytes) {
        let instance = Instance::new(self.env);
        let seq = instance.registration_count();
        let key = DataKey::Registration(seq);
        self.env.storage().persistent().set(&key, username);
        bump(self.env, &key);
        instance.set_registration_count(seq + 1);
    }

    pub fn get(&self, seq: u64) -> Option<Bytes> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Registration(seq))
    }
}
