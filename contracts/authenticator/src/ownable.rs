//! # Single-Owner Access Control
//!
//! Tracks one privileged owner address, set exactly once at initialization.
//! Every state-mutating entry point (authentication, upgrade, ownership
//! transfer) requires the caller to authorize and to match the stored owner.

use soroban_sdk::{contracttype, Address, Env};

use crate::errors::Error;

/// Storage keys for access control.
#[contracttype]
#[derive(Clone)]
pub enum OwnableKey {
    /// The privileged owner address.
    Owner,
}

/// Whether `initialize` has run. The owner key doubles as the
/// initialization flag since both are written in the same call.
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&OwnableKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OwnableKey::Owner, owner);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&OwnableKey::Owner)
        .ok_or(Error::NotInitialized)
}

/// Require the caller to authorize and match the stored owner.
///
/// This runs before any external call is made, so a reentering collection
/// contract cannot widen its privileges mid-batch.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let owner = get_owner(env)?;
    if *caller != owner {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Move ownership to `new_owner`, returning the previous owner.
///
/// Transferring to the contract's own address is rejected: the contract
/// cannot authorize its own invocations, so every privileged entry point
/// would become permanently unreachable.
pub fn transfer(env: &Env, caller: &Address, new_owner: &Address) -> Result<Address, Error> {
    require_owner(env, caller)?;
    if *new_owner == env.current_contract_address() {
        return Err(Error::InvalidTarget);
    }
    let previous = get_owner(env)?;
    set_owner(env, new_owner);
    Ok(previous)
}
