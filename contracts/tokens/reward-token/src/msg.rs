use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Uint128};

use crate::state::Config;

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub minter_address: String,
    // Price of one whole token
    pub token_price: Coin,
    // Base units credited for every claimed collectible
    pub tokens_per_unit: Uint128,
    // Base units
    pub max_total_supply: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    // Buy `amount` whole tokens, exact payment only
    Purchase { amount: Uint128 },
    Claim {},
    Transfer { recipient: String, amount: Uint128 },
    Withdraw {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Uint128)]
    TokensPerUnit {},
    #[returns(Uint128)]
    MaxTotalSupply {},
    #[returns(Coin)]
    TokenPrice {},
    #[returns(BalanceResponse)]
    Balance { address: String },
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    #[returns(bool)]
    IsClaimed { token_id: u32 },
    #[returns(Config)]
    Config {},
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct TokenInfoResponse {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
}
