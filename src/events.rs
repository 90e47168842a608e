//! Contract events. The first topic names the event; owner-scoped events
//! carry the owner as a second topic so indexers can filter by identity.

use soroban_sdk::{symbol_short, Address, Bytes, BytesN, Env, Symbol};

pub fn profile_registered(env: &Env, owner: &Address, username: &Bytes) {
    env.events()
        .publish((symbol_short!("register"), owner.clone()), username.clone());
}

pub fn field_set(env: &Env, owner: &Address, field: &Symbol) {
    env.events()
        .publish((symbol_short!("field_set"), owner.clone()), field.clone());
}

pub fn field_removed(env: &Env, owner: &Address, field: &Symbol) {
    env.events()
        .publish((symbol_short!("field_del"), owner.clone()), field.clone());
}

pub fn display_name_set(env: &Env, owner: &Address) {
    env.events()
        .publish((symbol_short!("name_set"), owner.clone()), ());
}

pub fn profile_deleted(env: &Env, owner: &Address, username: &Bytes) {
    env.events()
        .publish((symbol_short!("deleted"), owner.clone()), username.clone());
}

pub fn profile_banned(env: &Env, owner: &Address, username: &Bytes) {
    env.events()
        .publish((symbol_short!("banned"), owner.clone()), username.clone());
}

pub fn username_reserved(env: &Env, username: &Bytes) {
    env.events()
        .publish((symbol_short!("reserved"),), username.clone());
}

pub fn username_unreserved(env: &Env, username: &Bytes) {
    env.events()
        .publish((symbol_short!("unreserve"),), username.clone());
}

pub fn fee_set(env: &Env, amount: i128, token: &Option<Address>) {
    env.events()
        .publish((symbol_short!("fee_set"),), (amount, token.clone()));
}

pub fn registrations_toggled(env: &Env, open: bool) {
    env.events().publish((symbol_short!("reg_open"),), open);
}

pub fn admin_changed(env: &Env, new_admin: &Address) {
    env.events()
        .publish((symbol_short!("admin_set"),), new_admin.clone());
}

pub fn upgraded(env: &Env, wasm_hash: &BytesN<32>) {
    env.events()
        .publish((symbol_short!("upgraded"),), wasm_hash.clone());
}
