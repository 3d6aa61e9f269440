#![no_std]
//! # NFT Authenticator Contract
//!
//! An on-chain authority that records, for tokens in arbitrary external
//! ERC-721-style collections, a boolean "authenticated" status. Writes are
//! restricted to a single owner account; reads are open to anyone. The
//! contract carries an owner-controlled implementation pointer so logic can
//! be upgraded without losing registry or owner storage.
//!
//! ## Call Flow
//!
//! `authenticate_tokens` checks the caller against the stored owner, then
//! probes each referenced collection for the token's current owner and
//! records `true`/`false` per reference, emitting one batched event for the
//! whole call. `upgrade_to` swaps the implementation pointer; all other
//! storage stays as-is across the swap.

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

// ─── Feature modules ───
pub mod errors;
pub mod events;
pub mod ownable;
pub mod registry;
pub mod upgrade;
// ─── End feature modules ───

pub use errors::Error;
pub use events::{OwnershipTransferredEvent, TokensAuthenticatedEvent, UpgradedEvent};
pub use registry::{Erc721Collection, TokenRef};

// ─── Test modules ───
#[cfg(test)]
mod events_test;
#[cfg(test)]
mod ownable_test;
// ─── End test modules ───

#[contract]
pub struct AuthenticatorContract;

#[contractimpl]
impl AuthenticatorContract {
    // ── Initialization ──────────────────────────────────────────────

    /// One-time contract initialization. Sets the owner and the initial
    /// implementation pointer at version 1.
    ///
    /// Must be called before any other entry point. The caller must
    /// authorize as `owner`.
    pub fn initialize(env: Env, owner: Address, implementation: Address) -> Result<(), Error> {
        if ownable::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        ownable::set_owner(&env, &owner);
        upgrade::set_initial(&env, &implementation);
        Ok(())
    }

    // ── Authentication ──────────────────────────────────────────────

    /// Authenticate an ordered batch of token references.
    ///
    /// For each reference the external collection is probed for a current
    /// owner of the token id; the result is persisted as that reference's
    /// new status, overwriting any prior value. A token that no longer
    /// exists downgrades back to `false`. A collection that fails the probe
    /// in any way counts as "does not exist" rather than failing the batch.
    ///
    /// Returns the statuses in input order and emits a single batched
    /// `TokensAuthenticated` event carrying the same list.
    ///
    /// Fails with:
    /// - `Unauthorized` if `operator` is not the owner (checked before any
    ///   external call)
    /// - `EmptyInput` if `tokens` is empty
    pub fn authenticate_tokens(
        env: Env,
        operator: Address,
        tokens: Vec<TokenRef>,
    ) -> Result<Vec<bool>, Error> {
        ownable::require_owner(&env, &operator)?;
        if tokens.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut statuses = Vec::new(&env);
        for token in tokens.iter() {
            let exists = registry::probe_exists(&env, &token);
            registry::set_status(&env, &token, exists);
            statuses.push_back(exists);
        }

        events::emit_tokens_authenticated(&env, &operator, &statuses);
        Ok(statuses)
    }

    /// Last persisted status for a token reference. Open read; returns
    /// `false` for references never authenticated. Makes no external calls.
    pub fn is_authenticated(env: Env, token: TokenRef) -> bool {
        registry::get_status(&env, &token)
    }

    // ── Upgrade ─────────────────────────────────────────────────────

    /// Swap the implementation pointer to `new_implementation`.
    ///
    /// The registry and owner storage are untouched by the swap; layout
    /// compatibility between implementations is the deployer's obligation.
    ///
    /// Fails with `Unauthorized` for non-owners (checked before target
    /// validation) and `InvalidTarget` for the contract's own address or
    /// the already-active implementation.
    pub fn upgrade_to(
        env: Env,
        operator: Address,
        new_implementation: Address,
    ) -> Result<(), Error> {
        ownable::require_owner(&env, &operator)?;
        let version = upgrade::swap(&env, &new_implementation)?;
        events::emit_upgraded(&env, &new_implementation, version);
        Ok(())
    }

    /// Reinstate the previous implementation. Owner only.
    ///
    /// Fails with `NoPreviousImplementation` if the contract has never
    /// been upgraded.
    pub fn rollback(env: Env, operator: Address) -> Result<(), Error> {
        ownable::require_owner(&env, &operator)?;
        let (implementation, version) = upgrade::rollback(&env)?;
        events::emit_upgraded(&env, &implementation, version);
        Ok(())
    }

    // ── Ownership ───────────────────────────────────────────────────

    /// Move ownership to `new_owner`. Owner only.
    ///
    /// Fails with `InvalidTarget` if `new_owner` is the contract itself,
    /// which would leave every privileged entry point unreachable.
    pub fn transfer_ownership(
        env: Env,
        operator: Address,
        new_owner: Address,
    ) -> Result<(), Error> {
        let previous = ownable::transfer(&env, &operator, &new_owner)?;
        events::emit_ownership_transferred(&env, &previous, &new_owner);
        Ok(())
    }

    // ── Read-only queries ───────────────────────────────────────────

    /// Return the contract owner address.
    pub fn get_owner(env: Env) -> Result<Address, Error> {
        ownable::get_owner(&env)
    }

    /// Return the current active implementation address.
    pub fn get_implementation(env: Env) -> Result<Address, Error> {
        upgrade::get_implementation(&env)
    }

    /// Return the previous implementation address, if the contract has
    /// ever been upgraded.
    pub fn get_previous_implementation(env: Env) -> Option<Address> {
        upgrade::get_previous_implementation(&env)
    }

    /// Return the current implementation version.
    pub fn get_version(env: Env) -> Result<u32, Error> {
        upgrade::get_version(&env)
    }

    /// Check if the contract is initialized.
    pub fn is_initialized(env: Env) -> bool {
        ownable::is_initialized(&env)
    }
}
