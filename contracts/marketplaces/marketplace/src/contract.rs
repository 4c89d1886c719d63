#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coin, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;
use cw_utils::{may_pay, nonpayable};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{Config, CONFIG, TOKENS};

const CONTRACT_NAME: &str = "crates.io:cheesecake-marketplace";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    nonpayable(&info)?;

    if msg.price.amount.is_zero() || msg.price.denom.is_empty() {
        return Err(ContractError::InvalidPrice {});
    }
    let config = Config { price: msg.price };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("price", config.price.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Purchase { token_id } => execute_purchase(deps, env, info, token_id),
    }
}

pub fn execute_purchase(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    token_id: u64,
) -> Result<Response, ContractError> {
    if TOKENS.has(deps.storage, token_id) {
        return Err(ContractError::TokenUnavailable { token_id });
    }
    let config = CONFIG.load(deps.storage)?;
    let sent = may_pay(&info, &config.price.denom)?;
    if sent < config.price.amount {
        return Err(ContractError::InsufficientPayment {
            expected: config.price.amount,
            sent,
        });
    }
    TOKENS.save(deps.storage, token_id, &info.sender)?;

    Ok(Response::new()
        .add_attribute("action", "purchase")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("owner", info.sender)
        .add_attribute("paid", sent.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Price {} => to_json_binary(&query_price(deps, env)?),
        QueryMsg::Available { token_id } => to_json_binary(&query_available(deps, env, token_id)?),
        QueryMsg::Owner { token_id } => to_json_binary(&query_owner(deps, env, token_id)?),
    }
}

fn query_price(deps: Deps, _env: Env) -> StdResult<Coin> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.price)
}

fn query_available(deps: Deps, _env: Env, token_id: u64) -> StdResult<bool> {
    Ok(!TOKENS.has(deps.storage, token_id))
}

fn query_owner(deps: Deps, _env: Env, token_id: u64) -> StdResult<Option<Addr>> {
    TOKENS.may_load(deps.storage, token_id)
}
