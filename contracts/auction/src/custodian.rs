use soroban_sdk::{contractclient, Address, Env};

/// Ownership registry for the auctioned assets.
///
/// `transfer_from` must trap when `from` does not hold `asset_id` or when
/// `spender` is not allowed to move it; the auction treats that as fatal.
#[allow(dead_code)]
#[contractclient(name = "CustodianClient")]
pub trait AssetCustodian {
    fn owner_of(env: Env, asset_id: u64) -> Address;

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, asset_id: u64);
}
