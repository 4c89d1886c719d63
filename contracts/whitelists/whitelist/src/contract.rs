#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response, StdResult,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;
use cw_utils::{maybe_addr, nonpayable};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg};
use crate::state::{CONFIG, MEMBERS, MEMBER_COUNT};
use whitelist_types::{Config, IsRegisteredResponse, MembersResponse, WhitelistQueryMsgs};

const CONTRACT_NAME: &str = "crates.io:cheesecake-whitelist";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const PAGINATION_LIMIT: u32 = 100;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    nonpayable(&info)?;

    if msg.max_registered == 0 {
        return Err(ContractError::InvalidMaxRegistered {});
    }

    let config = Config {
        admin: info.sender,
        max_registered: msg.max_registered,
    };
    CONFIG.save(deps.storage, &config)?;
    MEMBER_COUNT.save(deps.storage, &0)?;

    Ok(Response::default()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("max_registered", config.max_registered.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Register {} => execute_register(deps, env, info),
    }
}

pub fn execute_register(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;

    if MEMBERS
        .may_load(deps.storage, info.sender.clone())?
        .unwrap_or(false)
    {
        return Err(ContractError::AlreadyRegistered {});
    }

    let member_count = MEMBER_COUNT.load(deps.storage)?;
    if member_count >= config.max_registered {
        return Err(ContractError::RegistryFull {
            max_registered: config.max_registered,
        });
    }

    MEMBERS.save(deps.storage, info.sender.clone(), &true)?;
    MEMBER_COUNT.save(deps.storage, &(member_count + 1))?;

    Ok(Response::default()
        .add_attribute("action", "register")
        .add_attribute("member", info.sender)
        .add_attribute("member_count", (member_count + 1).to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: WhitelistQueryMsgs) -> StdResult<Binary> {
    match msg {
        WhitelistQueryMsgs::IsRegistered { address } => {
            to_json_binary(&query_is_registered(deps, env, address)?)
        }
        WhitelistQueryMsgs::Count {} => to_json_binary(&query_count(deps, env)?),
        WhitelistQueryMsgs::MaxRegistered {} => to_json_binary(&query_max_registered(deps, env)?),
        WhitelistQueryMsgs::Members { start_after, limit } => {
            to_json_binary(&query_members(deps, env, start_after, limit)?)
        }
        WhitelistQueryMsgs::Config {} => to_json_binary(&query_config(deps, env)?),
    }
}

pub fn query_is_registered(
    deps: Deps,
    _env: Env,
    address: String,
) -> StdResult<IsRegisteredResponse> {
    let address = deps.api.addr_validate(&address)?;
    let is_registered = MEMBERS.may_load(deps.storage, address)?.unwrap_or(false);
    Ok(IsRegisteredResponse { is_registered })
}

pub fn query_count(deps: Deps, _env: Env) -> StdResult<u32> {
    MEMBER_COUNT.load(deps.storage)
}

pub fn query_max_registered(deps: Deps, _env: Env) -> StdResult<u32> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.max_registered)
}

pub fn query_members(
    deps: Deps,
    _env: Env,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<MembersResponse> {
    let start_addr = maybe_addr(deps.api, start_after)?;
    let start = start_addr.map(Bound::exclusive);

    let limit = limit.unwrap_or(PAGINATION_LIMIT).min(PAGINATION_LIMIT);

    let members: Vec<String> = MEMBERS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit as usize)
        .map(|item| {
            let (k, _) = item?;
            Ok(k.to_string())
        })
        .collect::<StdResult<Vec<String>>>()?;

    Ok(MembersResponse { members })
}

pub fn query_config(deps: Deps, _env: Env) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}
