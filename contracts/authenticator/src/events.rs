//! # Structured Event Emissions
//!
//! Events are the only externally observable log of state changes. Each
//! event pairs a short topic symbol (for indexer filtering) with a typed
//! payload struct.
//!
//! | Event                 | Description                                      |
//! |-----------------------|--------------------------------------------------|
//! | TokensAuthenticated   | One per authentication batch, statuses in order  |
//! | Upgraded              | Implementation pointer changed                   |
//! | OwnershipTransferred  | Owner changed                                    |
//!
//! Authentication is deliberately batched into a single event carrying the
//! full ordered status list rather than one event per token.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

/// Topic for batched authentication outcome events
pub const TOPIC_TOKENS_AUTHENTICATED: Symbol = symbol_short!("auth");
/// Topic for implementation upgrade events
pub const TOPIC_UPGRADED: Symbol = symbol_short!("upgraded");
/// Topic for ownership transfer events
pub const TOPIC_OWNERSHIP_TRANSFERRED: Symbol = symbol_short!("own_xfer");

/// Event data for a completed authentication batch
#[contracttype]
#[derive(Clone, Debug)]
pub struct TokensAuthenticatedEvent {
    /// Owner account that ran the batch
    pub operator: Address,
    /// Statuses in the same order as the submitted token references
    pub statuses: Vec<bool>,
}

/// Event data for an implementation upgrade or rollback
#[contracttype]
#[derive(Clone, Debug)]
pub struct UpgradedEvent {
    /// Implementation address now active
    pub implementation: Address,
    /// Version number now active
    pub version: u32,
}

/// Event data for an ownership transfer
#[contracttype]
#[derive(Clone, Debug)]
pub struct OwnershipTransferredEvent {
    /// Owner before the transfer
    pub previous_owner: Address,
    /// Owner after the transfer
    pub new_owner: Address,
}

/// Emit the single batched outcome event for an authentication call.
pub fn emit_tokens_authenticated(env: &Env, operator: &Address, statuses: &Vec<bool>) {
    let event = TokensAuthenticatedEvent {
        operator: operator.clone(),
        statuses: statuses.clone(),
    };
    env.events()
        .publish((TOPIC_TOKENS_AUTHENTICATED, operator.clone()), event);
}

/// Emit an upgrade event. Also used by rollback, which reinstates a
/// previously active implementation.
pub fn emit_upgraded(env: &Env, implementation: &Address, version: u32) {
    let event = UpgradedEvent {
        implementation: implementation.clone(),
        version,
    };
    env.events().publish((TOPIC_UPGRADED,), event);
}

/// Emit an ownership transfer event.
pub fn emit_ownership_transferred(env: &Env, previous_owner: &Address, new_owner: &Address) {
    let event = OwnershipTransferredEvent {
        previous_owner: previous_owner.clone(),
        new_owner: new_owner.clone(),
    };
    env.events().publish((TOPIC_OWNERSHIP_TRANSFERRED,), event);
}
