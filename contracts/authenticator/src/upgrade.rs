//! # Implementation Pointer Management
//!
//! Holds the address of the currently active logic implementation and its
//! version, and swaps them under owner control while leaving the registry
//! and owner storage untouched. The outgoing implementation is retained so
//! an upgrade can be rolled back.
//!
//! Storage-layout compatibility between implementations is a deployment-time
//! obligation of whoever triggers the upgrade; it cannot be verified here.

use soroban_sdk::{contracttype, Address, Env};

use crate::errors::Error;

/// Storage keys for the upgrade controller.
#[contracttype]
#[derive(Clone)]
pub enum UpgradeKey {
    /// Current active implementation address.
    CurrentImplementation,
    /// Previous implementation address, kept for rollback.
    PreviousImplementation,
    /// Current version number, bumped on every upgrade.
    CurrentVersion,
    /// Version number of the previous implementation.
    PreviousVersion,
}

/// Record the initial implementation at version 1. Called once from
/// `initialize`; no previous implementation exists at this point.
pub fn set_initial(env: &Env, implementation: &Address) {
    env.storage()
        .instance()
        .set(&UpgradeKey::CurrentImplementation, implementation);
    env.storage().instance().set(&UpgradeKey::CurrentVersion, &1u32);
}

pub fn get_implementation(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&UpgradeKey::CurrentImplementation)
        .ok_or(Error::NotInitialized)
}

pub fn get_previous_implementation(env: &Env) -> Option<Address> {
    env.storage()
        .instance()
        .get(&UpgradeKey::PreviousImplementation)
}

pub fn get_version(env: &Env) -> Result<u32, Error> {
    env.storage()
        .instance()
        .get(&UpgradeKey::CurrentVersion)
        .ok_or(Error::NotInitialized)
}

/// Swap the pointer to `new_implementation` and return the new version.
///
/// Soroban addresses cannot be null, so the degenerate targets rejected
/// here are the reachable dead ends: the storage holder itself and the
/// implementation that is already active.
pub fn swap(env: &Env, new_implementation: &Address) -> Result<u32, Error> {
    let current = get_implementation(env)?;
    if *new_implementation == env.current_contract_address() || *new_implementation == current {
        return Err(Error::InvalidTarget);
    }
    let version = get_version(env)?;

    env.storage()
        .instance()
        .set(&UpgradeKey::PreviousImplementation, &current);
    env.storage()
        .instance()
        .set(&UpgradeKey::PreviousVersion, &version);

    let new_version = version + 1;
    env.storage()
        .instance()
        .set(&UpgradeKey::CurrentImplementation, new_implementation);
    env.storage()
        .instance()
        .set(&UpgradeKey::CurrentVersion, &new_version);
    Ok(new_version)
}

/// Swap current and previous implementation, returning the reinstated
/// implementation and its version. After a rollback the pre-rollback
/// implementation becomes the new "previous", so a second rollback undoes
/// the first.
pub fn rollback(env: &Env) -> Result<(Address, u32), Error> {
    let previous: Address = env
        .storage()
        .instance()
        .get(&UpgradeKey::PreviousImplementation)
        .ok_or(Error::NoPreviousImplementation)?;
    let previous_version: u32 = env
        .storage()
        .instance()
        .get(&UpgradeKey::PreviousVersion)
        .ok_or(Error::NoPreviousImplementation)?;

    let current = get_implementation(env)?;
    let version = get_version(env)?;

    env.storage()
        .instance()
        .set(&UpgradeKey::CurrentImplementation, &previous);
    env.storage()
        .instance()
        .set(&UpgradeKey::CurrentVersion, &previous_version);
    env.storage()
        .instance()
        .set(&UpgradeKey::PreviousImplementation, &current);
    env.storage()
        .instance()
        .set(&UpgradeKey::PreviousVersion, &version);
    Ok((previous, previous_version))
}
