use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin};

use crate::sale_window::{SalePhase, SaleWindow};

pub const TOKENS_PAGE_LIMIT: u32 = 100;

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    pub base_uri: String,
    pub whitelist_address: Addr,
    pub max_supply: u32,
    pub mint_price: Coin,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    // Number of units issued so far
    #[returns(u32)]
    MintedCount {},
    #[returns(u32)]
    MaxSupply {},
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u32 },
    #[returns(u32)]
    Balance { owner: String },
    // Ascending ids after `start_after`, at most TOKENS_PAGE_LIMIT per page
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<u32>,
        limit: Option<u32>,
    },
    #[returns(NftInfoResponse)]
    NftInfo { token_id: u32 },
    #[returns(Option<SaleWindow>)]
    SaleWindow {},
    #[returns(SalePhase)]
    Phase {},
    #[returns(bool)]
    IsPaused {},
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<u32>,
}

#[cw_serde]
pub struct NftInfoResponse {
    pub owner: Addr,
    pub token_uri: String,
}
