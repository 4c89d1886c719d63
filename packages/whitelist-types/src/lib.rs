use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Deps, StdError};

#[cw_serde]
#[derive(QueryResponses)]
pub enum WhitelistQueryMsgs {
    #[returns(IsRegisteredResponse)]
    IsRegistered { address: String },
    // Number of registered addresses
    #[returns(u32)]
    Count {},
    #[returns(u32)]
    MaxRegistered {},
    #[returns(MembersResponse)]
    Members {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(Config)]
    Config {},
}

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    pub max_registered: u32,
}

#[cw_serde]
pub struct IsRegisteredResponse {
    pub is_registered: bool,
}

#[cw_serde]
pub struct MembersResponse {
    pub members: Vec<String>,
}

pub fn check_if_address_is_registered(
    address: &Addr,
    whitelist_address: &Addr,
    deps: Deps,
) -> Result<bool, StdError> {
    let is_registered_res: IsRegisteredResponse = deps.querier.query_wasm_smart(
        whitelist_address,
        &WhitelistQueryMsgs::IsRegistered {
            address: address.to_string(),
        },
    )?;
    Ok(is_registered_res.is_registered)
}

pub fn check_registered_count(whitelist_address: &Addr, deps: Deps) -> Result<u32, StdError> {
    let count: u32 = deps
        .querier
        .query_wasm_smart(whitelist_address, &WhitelistQueryMsgs::Count {})?;
    Ok(count)
}
