#![no_std]
//! # ERC-721 Collection Mock
//!
//! A minimal ERC-721-style collection contract used as the external
//! collaborator in authenticator tests. `owner_of` fails for ids that were
//! never minted or have been burned, mirroring the revert behavior of real
//! collections, so callers exercise their defensive probe path.
//!
//! This is test tooling, not product scope: no approvals, no metadata, no
//! enumeration.

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env, U256};


#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// `mint` was called for an id that already has an owner.
    TokenAlreadyMinted = 1,
    /// The token id has no owner (never minted or burned).
    NonexistentToken = 2,
    /// `transfer` was called by an account that does not own the token.
    NotTokenOwner = 3,
}

/// Storage keys for the collection.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Owner of a token id.
    TokenOwner(U256),
}

#[contract]
pub struct CollectionMockContract;

#[contractimpl]
impl CollectionMockContract {
    /// Mint `token_id` to `to`. Fails if the id already exists.
    pub fn mint(env: Env, to: Address, token_id: U256) -> Result<(), Error> {
        let key = DataKey::TokenOwner(token_id);
        if env.storage().instance().has(&key) {
            return Err(Error::TokenAlreadyMinted);
        }
        env.storage().instance().set(&key, &to);
        Ok(())
    }

    /// Burn `token_id`. Subsequent `owner_of` calls for the id fail.
    pub fn burn(env: Env, token_id: U256) -> Result<(), Error> {
        let key = DataKey::TokenOwner(token_id);
        if !env.storage().instance().has(&key) {
            return Err(Error::NonexistentToken);
        }
        env.storage().instance().remove(&key);
        Ok(())
    }

    /// Transfer `token_id` from `from` to `to`. `from` must authorize and
    /// own the token.
    pub fn transfer(env: Env, from: Address, to: Address, token_id: U256) -> Result<(), Error> {
        from.require_auth();
        let key = DataKey::TokenOwner(token_id);
        let owner: Address = env
            .storage()
            .instance()
            .get(&key)
            .ok_or(Error::NonexistentToken)?;
        if owner != from {
            return Err(Error::NotTokenOwner);
        }
        env.storage().instance().set(&key, &to);
        Ok(())
    }

    /// Current owner of `token_id`. Fails for nonexistent ids.
    pub fn owner_of(env: Env, token_id: U256) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::TokenOwner(token_id))
            .ok_or(Error::NonexistentToken)
    }

    /// Whether `token_id` currently resolves to an owner.
    pub fn exists(env: Env, token_id: U256) -> bool {
        env.storage().instance().has(&DataKey::TokenOwner(token_id))
    }
}
