//! # Authentication Registry
//!
//! Persistent mapping from a token reference to its authentication status,
//! plus the defensive existence probe against external collection contracts.
//!
//! ## Trust Model
//!
//! Collection contracts are arbitrary external code. The probe therefore
//! treats every failure shape the same way:
//! - no contract deployed at the collection address
//! - `owner_of` failing for an unknown id
//! - a reply that does not decode as an address
//!
//! all count as "the token does not exist" and authenticate as `false`.
//! Failures never propagate out of a batch.

use soroban_sdk::{contracttype, Address, Env, U256};

/// Composite key identifying one token in an external collection.
///
/// Equality is structural; the reference is only ever used as a lookup key.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenRef {
    /// Address of the collection contract.
    pub collection: Address,
    /// Token id within the collection.
    pub token_id: U256,
}

/// Storage keys for the authentication registry.
#[contracttype]
#[derive(Clone)]
pub enum RegistryKey {
    /// Authentication status for a token reference.
    Status(TokenRef),
}

/// Ownership query consumed on external collection contracts.
#[soroban_sdk::contractclient(name = "CollectionClient")]
pub trait Erc721Collection {
    fn owner_of(env: Env, token_id: U256) -> Address;
}

/// Last persisted status for a token reference. `false` if never written;
/// absence and `false` are indistinguishable to readers.
pub fn get_status(env: &Env, token: &TokenRef) -> bool {
    env.storage()
        .instance()
        .get(&RegistryKey::Status(token.clone()))
        .unwrap_or(false)
}

/// Persist a status, overwriting any prior value for the same reference.
pub fn set_status(env: &Env, token: &TokenRef, status: bool) {
    env.storage()
        .instance()
        .set(&RegistryKey::Status(token.clone()), &status);
}

/// Ask the collection whether the token resolves to an owner.
///
/// The answer is a snapshot at call time; mint/burn activity on the
/// collection after the call is not reflected until re-authentication.
pub fn probe_exists(env: &Env, token: &TokenRef) -> bool {
    let client = CollectionClient::new(env, &token.collection);
    matches!(client.try_owner_of(&token.token_id), Ok(Ok(_)))
}
