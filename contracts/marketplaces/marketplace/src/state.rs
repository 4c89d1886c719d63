use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub price: Coin,
}

pub const CONFIG: Item<Config> = Item::new("config");
// A token with no entry is still for sale
pub const TOKENS: Map<u64, Addr> = Map::new("tokens");
