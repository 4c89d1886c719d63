use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::{Item, Map};

use minter_types::{Config, SaleWindow};

pub const CONFIG: Item<Config> = Item::new("config");
// Missing until the admin starts the presale
pub const SALE_WINDOW: Item<SaleWindow> = Item::new("sale_window");
pub const MINTED_COUNT: Item<u32> = Item::new("minted_count");
pub const TOKEN_OWNERS: Map<u32, Addr> = Map::new("token_owners");
// Owner and ids of the tokens it holds, ascending. Length is bounded by max_supply
pub const OWNED_TOKENS: Map<Addr, Vec<u32>> = Map::new("owned_tokens");

pub fn last_token_id(store: &dyn Storage) -> StdResult<u32> {
    let minted_count = MINTED_COUNT.may_load(store)?.unwrap_or_default();
    Ok(minted_count)
}

pub fn owned_tokens(store: &dyn Storage, owner: &Addr) -> StdResult<Vec<u32>> {
    let tokens = OWNED_TOKENS.may_load(store, owner.clone())?.unwrap_or_default();
    Ok(tokens)
}

pub fn assign_token(store: &mut dyn Storage, token_id: u32, owner: &Addr) -> StdResult<()> {
    TOKEN_OWNERS.save(store, token_id, owner)?;
    let mut tokens = owned_tokens(store, owner)?;
    if let Err(position) = tokens.binary_search(&token_id) {
        tokens.insert(position, token_id);
    }
    OWNED_TOKENS.save(store, owner.clone(), &tokens)
}

pub fn unassign_token(store: &mut dyn Storage, token_id: u32, owner: &Addr) -> StdResult<()> {
    TOKEN_OWNERS.remove(store, token_id);
    let mut tokens = owned_tokens(store, owner)?;
    tokens.retain(|id| *id != token_id);
    if tokens.is_empty() {
        OWNED_TOKENS.remove(store, owner.clone());
        Ok(())
    } else {
        OWNED_TOKENS.save(store, owner.clone(), &tokens)
    }
}
