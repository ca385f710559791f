//! Interfaces of the contracts the auction talks to but does not own.

use soroban_sdk::{contractclient, Address, BytesN, Env};

/// Non-fungible registry holding the auctioned asset. Matches the
/// `owner_of` / `transfer_from` shape of the usual Soroban NFT interface.
#[allow(dead_code)]
#[contractclient(name = "AssetRegistryClient")]
pub trait AssetRegistry {
    fn owner_of(env: Env, token_id: u32) -> Address;

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32);
}

/// Fungible token that, besides the plain transfer calls, accepts a signed
/// permit in place of a separate `approve` transaction.
#[allow(dead_code)]
#[contractclient(name = "PermitTokenClient")]
pub trait PermitToken {
    fn nonce(env: Env, owner: Address) -> u64;

    fn permit(
        env: Env,
        owner: Address,
        spender: Address,
        value: i128,
        deadline: u64,
        signature: BytesN<64>,
    );

    fn transfer(env: Env, from: Address, to: Address, amount: i128);

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);
}
