//! # Events Tests
//!
//! Batched authentication outcomes must surface as exactly one event per
//! call; failed calls must leave no event behind.

use super::*;
use erc721_collection_mock::{CollectionMockContract, CollectionMockContractClient};
use soroban_sdk::testutils::{Address as _, Events as _};
use soroban_sdk::{vec, Address, Env, U256};

/// Helper: register the contract and return a client.
fn setup() -> (Env, AuthenticatorContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(AuthenticatorContract, ());
    let client = AuthenticatorContractClient::new(&env, &contract_id);
    let owner = Address::generate(&env);
    let implementation = Address::generate(&env);
    client.initialize(&owner, &implementation);
    (env, client, owner)
}

/// Helper: build a token reference.
fn token(env: &Env, collection: &Address, id: u32) -> TokenRef {
    TokenRef {
        collection: collection.clone(),
        token_id: U256::from_u32(env, id),
    }
}

#[test]
fn test_authenticate_emits_single_batched_event() {
    let (env, client, owner) = setup();
    let collection_id = env.register(CollectionMockContract, ());
    let mock = CollectionMockContractClient::new(&env, &collection_id);
    let holder = Address::generate(&env);
    mock.mint(&holder, &U256::from_u32(&env, 1));

    // Three tokens, one call: the outcome is one event carrying the full
    // status list, not one event per token.
    let tokens = vec![
        &env,
        token(&env, &collection_id, 1),
        token(&env, &collection_id, 2),
        token(&env, &collection_id, 3),
    ];
    let statuses = client.authenticate_tokens(&owner, &tokens);
    assert_eq!(statuses.len(), 3);

    let events = env.events().all();
    assert_eq!(events.len(), 1);
}

#[test]
fn test_each_batch_emits_its_own_event() {
    let (env, client, owner) = setup();
    let collection = Address::generate(&env);

    let tokens = vec![&env, token(&env, &collection, 1)];
    client.authenticate_tokens(&owner, &tokens);
    client.authenticate_tokens(&owner, &tokens);

    let events = env.events().all();
    assert!(!events.is_empty());
}

#[test]
fn test_upgrade_emits_event() {
    let (env, client, owner) = setup();
    let new_implementation = Address::generate(&env);

    client.upgrade_to(&owner, &new_implementation);

    let events = env.events().all();
    assert!(!events.is_empty());
}

#[test]
fn test_transfer_ownership_emits_event() {
    let (env, client, owner) = setup();
    let new_owner = Address::generate(&env);

    client.transfer_ownership(&owner, &new_owner);

    let events = env.events().all();
    assert!(!events.is_empty());
}

#[test]
fn test_failed_authentication_emits_no_event() {
    let (env, client, owner) = setup();

    let empty = vec![&env];
    assert_eq!(
        client.try_authenticate_tokens(&owner, &empty),
        Err(Ok(Error::EmptyInput))
    );

    let events = env.events().all();
    assert!(events.is_empty());
}

#[test]
fn test_failed_upgrade_emits_no_event() {
    let (env, client, _owner) = setup();
    let mallory = Address::generate(&env);
    let new_implementation = Address::generate(&env);

    assert_eq!(
        client.try_upgrade_to(&mallory, &new_implementation),
        Err(Ok(Error::Unauthorized))
    );

    let events = env.events().all();
    assert!(events.is_empty());
}
