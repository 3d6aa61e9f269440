//! Stable error codes surfaced to callers.
//!
//! Every precondition failure aborts the whole invocation with one of these
//! codes and no partial state change. Callers branch on the code, not on
//! message text.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// `initialize` was called a second time.
    AlreadyInitialized = 1,
    /// A gated or stateful entry point was called before `initialize`.
    NotInitialized = 2,
    /// The caller is not the contract owner.
    Unauthorized = 3,
    /// A batch operation was called with zero elements.
    EmptyInput = 4,
    /// A degenerate address was supplied as an upgrade or ownership target.
    InvalidTarget = 5,
    /// `rollback` was called but the contract has never been upgraded.
    NoPreviousImplementation = 6,
}
