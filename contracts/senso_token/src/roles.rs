//! # Roles
//!
//! Minter and pauser capability sets. The two sets are independent: holding
//! one never implies the other, and there is no super-role. A member may add
//! new members to its own set; anyone may renounce their own membership.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::events;
use crate::storage;
use crate::types::Role;
use crate::TokenError;

pub fn require_minter(env: &Env, account: &Address) {
    if !storage::has_role(env, Role::Minter, account) {
        panic_with_error!(env, TokenError::NotMinter);
    }
}

pub fn require_pauser(env: &Env, account: &Address) {
    if !storage::has_role(env, Role::Pauser, account) {
        panic_with_error!(env, TokenError::NotPauser);
    }
}

/// Adds `account` to the `role` set. Re-adding an existing member is a no-op
/// and emits nothing.
pub fn grant(env: &Env, role: Role, account: &Address) {
    if storage::has_role(env, role, account) {
        return;
    }
    storage::set_role(env, role, account, true);
    events::role_set(env, role, account);
}

/// Removes `account` from the `role` set; idempotent.
pub fn renounce(env: &Env, role: Role, account: &Address) {
    if !storage::has_role(env, role, account) {
        return;
    }
    storage::set_role(env, role, account, false);
    events::role_del(env, role, account);
}
