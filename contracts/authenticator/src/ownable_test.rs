//! # Access Control Tests
//!
//! Ownership transfer and the owner gate shared by every privileged entry
//! point.

use super::*;
use soroban_sdk::testutils::Address as _;
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

/// Helper: a token reference pointing at an address with no contract.
fn dangling_token(env: &Env) -> TokenRef {
    TokenRef {
        collection: Address::generate(env),
        token_id: U256::from_u32(env, 1),
    }
}

#[test]
fn test_transfer_ownership() {
    let (env, client, owner) = setup();
    let new_owner = Address::generate(&env);

    client.transfer_ownership(&owner, &new_owner);
    assert_eq!(client.get_owner(), new_owner);
}

#[test]
fn test_new_owner_gains_write_access_old_owner_loses_it() {
    let (env, client, owner) = setup();
    let new_owner = Address::generate(&env);
    client.transfer_ownership(&owner, &new_owner);

    let tokens = vec![&env, dangling_token(&env)];
    // New owner can run batches.
    assert_eq!(
        client.authenticate_tokens(&new_owner, &tokens),
        vec![&env, false]
    );
    // Old owner is just another account now.
    assert_eq!(
        client.try_authenticate_tokens(&owner, &tokens),
        Err(Ok(Error::Unauthorized))
    );
}

#[test]
fn test_old_owner_cannot_upgrade_after_transfer() {
    let (env, client, owner) = setup();
    let new_owner = Address::generate(&env);
    client.transfer_ownership(&owner, &new_owner);

    let new_implementation = Address::generate(&env);
    assert_eq!(
        client.try_upgrade_to(&owner, &new_implementation),
        Err(Ok(Error::Unauthorized))
    );
}

#[test]
fn test_transfer_ownership_by_non_owner_fails() {
    let (env, client, owner) = setup();
    let mallory = Address::generate(&env);

    assert_eq!(
        client.try_transfer_ownership(&mallory, &mallory),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(client.get_owner(), owner);
}

#[test]
fn test_transfer_ownership_to_contract_itself_rejected() {
    let (_env, client, owner) = setup();
    let contract_address = client.address.clone();

    // The contract cannot authorize its own calls; accepting this target
    // would leave every privileged entry point dead.
    assert_eq!(
        client.try_transfer_ownership(&owner, &contract_address),
        Err(Ok(Error::InvalidTarget))
    );
    assert_eq!(client.get_owner(), owner);
}

#[test]
fn test_transfer_is_repeatable() {
    let (env, client, owner) = setup();
    let second = Address::generate(&env);
    let third = Address::generate(&env);

    client.transfer_ownership(&owner, &second);
    client.transfer_ownership(&second, &third);
    assert_eq!(client.get_owner(), third);
}
