use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use whitelist_types::Config;

pub const CONFIG: Item<Config> = Item::new("config");
pub const MEMBERS: Map<Addr, bool> = Map::new("members");
pub const MEMBER_COUNT: Item<u32> = Item::new("member_count");
