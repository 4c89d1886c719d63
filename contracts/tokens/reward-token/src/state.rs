use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Uint128};
use cw_storage_plus::{Item, Map};

pub const DECIMALS: u8 = 18;
// Base units in one whole token
pub const TOKEN_UNIT: u128 = 1_000_000_000_000_000_000;

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    pub minter_address: Addr,
    pub token_price: Coin,
    pub tokens_per_unit: Uint128,
    pub max_total_supply: Uint128,
}

#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");
pub const BALANCES: Map<Addr, Uint128> = Map::new("balances");
// Collectible token id -> reward already claimed for it
pub const CLAIMED_UNITS: Map<u32, bool> = Map::new("claimed_units");
