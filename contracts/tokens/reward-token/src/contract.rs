#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Binary, Coin, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Storage, Uint128,
};
use cw2::set_contract_version;
use cw_utils::{may_pay, nonpayable};

use crate::error::ContractError;
use crate::msg::{BalanceResponse, ExecuteMsg, InstantiateMsg, QueryMsg, TokenInfoResponse};
use crate::state::{
    Config, TokenInfo, BALANCES, CLAIMED_UNITS, CONFIG, DECIMALS, TOKEN_INFO, TOKEN_UNIT,
};
use minter_types::{query_balance, query_max_supply, query_owned_tokens};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:cheesecake-reward-token";
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

    if msg.token_price.amount.is_zero() || msg.token_price.denom.is_empty() {
        return Err(ContractError::InvalidTokenPrice {});
    }
    if msg.max_total_supply.is_zero() {
        return Err(ContractError::InvalidMaxSupply {});
    }
    if msg.tokens_per_unit.is_zero() {
        return Err(ContractError::InvalidTokensPerUnit {});
    }
    // If the address is not a minter we wont be able to parse the response
    let minter_address = deps.api.addr_validate(&msg.minter_address)?;
    query_max_supply(&minter_address, deps.as_ref())
        .map_err(|_| ContractError::InvalidMinterAddress {})?;

    let config = Config {
        admin: info.sender,
        minter_address,
        token_price: msg.token_price,
        tokens_per_unit: msg.tokens_per_unit,
        max_total_supply: msg.max_total_supply,
    };
    CONFIG.save(deps.storage, &config)?;

    let token_info = TokenInfo {
        name: msg.name,
        symbol: msg.symbol,
        decimals: DECIMALS,
        total_supply: Uint128::zero(),
    };
    TOKEN_INFO.save(deps.storage, &token_info)?;

    let res = Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("minter_address", config.minter_address)
        .add_attribute("symbol", token_info.symbol)
        .add_attribute("token_price", config.token_price.to_string())
        .add_attribute("tokens_per_unit", config.tokens_per_unit.to_string())
        .add_attribute("max_total_supply", config.max_total_supply.to_string());
    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Purchase { amount } => execute_purchase(deps, env, info, amount),
        ExecuteMsg::Claim {} => execute_claim(deps, env, info),
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, env, info, recipient, amount)
        }
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
    }
}

/// Credits `amount` base units to `recipient`, keeping the total supply under the cap.
fn mint_base_units(
    storage: &mut dyn Storage,
    config: &Config,
    recipient: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let mut token_info = TOKEN_INFO.load(storage)?;
    let total_supply = token_info.total_supply.checked_add(amount)?;
    if total_supply > config.max_total_supply {
        return Err(ContractError::SupplyExceeded {});
    }
    token_info.total_supply = total_supply;
    TOKEN_INFO.save(storage, &token_info)?;

    let balance = BALANCES
        .may_load(storage, recipient.clone())?
        .unwrap_or_default()
        .checked_add(amount)?;
    BALANCES.save(storage, recipient.clone(), &balance)?;
    Ok(balance)
}

pub fn execute_purchase(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {});
    }
    let config = CONFIG.load(deps.storage)?;

    // Exact amount must be paid
    let expected = config.token_price.amount.checked_mul(amount)?;
    let sent = may_pay(&info, &config.token_price.denom)?;
    if sent != expected {
        return Err(ContractError::IncorrectPayment { expected, sent });
    }

    let base_units = amount.checked_mul(Uint128::new(TOKEN_UNIT))?;
    let balance = mint_base_units(deps.storage, &config, &info.sender, base_units)?;

    let res = Response::new()
        .add_attribute("action", "purchase")
        .add_attribute("recipient", info.sender)
        .add_attribute("amount", base_units.to_string())
        .add_attribute("balance", balance.to_string());
    Ok(res)
}

pub fn execute_claim(deps: DepsMut, _env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;

    let held = query_balance(&config.minter_address, &info.sender, deps.as_ref())?;
    if held == 0 {
        return Err(ContractError::NoCollectibleOwned {});
    }

    // Claims are tracked per token id so a transferred token can not be claimed twice
    let owned_tokens = query_owned_tokens(&config.minter_address, &info.sender, deps.as_ref())?;
    let mut claimed_now: Vec<u32> = Vec::new();
    for token_id in owned_tokens {
        let claimed = CLAIMED_UNITS
            .may_load(deps.storage, token_id)?
            .unwrap_or(false);
        if !claimed {
            CLAIMED_UNITS.save(deps.storage, token_id, &true)?;
            claimed_now.push(token_id);
        }
    }
    if claimed_now.is_empty() {
        return Err(ContractError::AllUnitsAlreadyClaimed {});
    }

    let reward = config
        .tokens_per_unit
        .checked_mul(Uint128::from(claimed_now.len() as u128))?;
    let balance = mint_base_units(deps.storage, &config, &info.sender, reward)?;

    let res = Response::new()
        .add_attribute("action", "claim")
        .add_attribute("recipient", info.sender)
        .add_attribute(
            "claimed_units",
            claimed_now
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<String>>()
                .join(","),
        )
        .add_attribute("amount", reward.to_string())
        .add_attribute("balance", balance.to_string());
    Ok(res)
}

pub fn execute_transfer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {});
    }
    let recipient = deps.api.addr_validate(&recipient)?;

    let sender_balance = BALANCES
        .may_load(deps.storage, info.sender.clone())?
        .unwrap_or_default();
    if sender_balance < amount {
        return Err(ContractError::InsufficientBalance {
            balance: sender_balance,
            required: amount,
        });
    }
    BALANCES.save(
        deps.storage,
        info.sender.clone(),
        &sender_balance.checked_sub(amount)?,
    )?;
    BALANCES.update(
        deps.storage,
        recipient.clone(),
        |balance| -> StdResult<_> { Ok(balance.unwrap_or_default().checked_add(amount)?) },
    )?;

    let res = Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string());
    Ok(res)
}

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    // Check if sender is admin
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {});
    }
    nonpayable(&info)?;

    let balance = deps.querier.query_all_balances(&env.contract.address)?;
    let withdrawn = balance
        .iter()
        .map(|coin| coin.to_string())
        .collect::<Vec<String>>()
        .join(",");

    let mut res = Response::new()
        .add_attribute("action", "withdraw")
        .add_attribute("recipient", config.admin.clone());
    if !balance.is_empty() {
        res = res.add_attribute("amount", withdrawn).add_message(BankMsg::Send {
            to_address: config.admin.into_string(),
            amount: balance,
        });
    }
    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::TokensPerUnit {} => to_json_binary(&query_tokens_per_unit(deps, env)?),
        QueryMsg::MaxTotalSupply {} => to_json_binary(&query_max_total_supply(deps, env)?),
        QueryMsg::TokenPrice {} => to_json_binary(&query_token_price(deps, env)?),
        QueryMsg::Balance { address } => to_json_binary(&query_token_balance(deps, env, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps, env)?),
        QueryMsg::IsClaimed { token_id } => to_json_binary(&query_is_claimed(deps, env, token_id)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps, env)?),
    }
}

fn query_tokens_per_unit(deps: Deps, _env: Env) -> StdResult<Uint128> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.tokens_per_unit)
}

fn query_max_total_supply(deps: Deps, _env: Env) -> StdResult<Uint128> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.max_total_supply)
}

fn query_token_price(deps: Deps, _env: Env) -> StdResult<Coin> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.token_price)
}

fn query_token_balance(deps: Deps, _env: Env, address: String) -> StdResult<BalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    let balance = BALANCES.may_load(deps.storage, address)?.unwrap_or_default();
    Ok(BalanceResponse { balance })
}

fn query_token_info(deps: Deps, _env: Env) -> StdResult<TokenInfoResponse> {
    let token_info = TOKEN_INFO.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: token_info.name,
        symbol: token_info.symbol,
        decimals: token_info.decimals,
        total_supply: token_info.total_supply,
    })
}

fn query_is_claimed(deps: Deps, _env: Env, token_id: u32) -> StdResult<bool> {
    let claimed = CLAIMED_UNITS
        .may_load(deps.storage, token_id)?
        .unwrap_or(false);
    Ok(claimed)
}

fn query_config(deps: Deps, _env: Env) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}
