#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, BankMsg, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;
use cw_utils::{may_pay, nonpayable};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg};
use crate::state::{
    assign_token, last_token_id, owned_tokens, unassign_token, CONFIG, MINTED_COUNT, SALE_WINDOW,
    TOKEN_OWNERS,
};
use minter_types::{
    sale_window::sale_phase, Config, NftInfoResponse, OwnerOfResponse, QueryMsg, SalePhase,
    SaleWindow, TokensResponse, TOKENS_PAGE_LIMIT,
};
use pauser::PauseState;
use whitelist_types::{check_if_address_is_registered, check_registered_count};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:cheesecake-minter";
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

    if msg.max_supply == 0 {
        return Err(ContractError::InvalidMaxSupply {});
    }
    if msg.mint_price.amount.is_zero() || msg.mint_price.denom.is_empty() {
        return Err(ContractError::InvalidMintPrice {});
    }
    // If the address is not a whitelist we wont be able to parse the response
    let whitelist_address = deps.api.addr_validate(&msg.whitelist_address)?;
    check_registered_count(&whitelist_address, deps.as_ref())
        .map_err(|_| ContractError::InvalidWhitelistAddress {})?;

    let config = Config {
        admin: info.sender,
        base_uri: msg.base_uri,
        whitelist_address,
        max_supply: msg.max_supply,
        mint_price: msg.mint_price,
    };
    CONFIG.save(deps.storage, &config)?;
    MINTED_COUNT.save(deps.storage, &0)?;

    let pause_state = PauseState::default();
    pause_state.set_paused(deps.storage, false)?;

    let res = Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("whitelist_address", config.whitelist_address)
        .add_attribute("max_supply", config.max_supply.to_string())
        .add_attribute("mint_price", config.mint_price.to_string());
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
        ExecuteMsg::StartPresale { duration } => execute_start_presale(deps, env, info, duration),
        ExecuteMsg::PresaleMint {} => execute_presale_mint(deps, env, info),
        ExecuteMsg::Mint {} => execute_mint(deps, env, info),
        ExecuteMsg::SetPaused { paused } => execute_set_paused(deps, env, info, paused),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
        ExecuteMsg::TransferNft {
            recipient,
            token_id,
        } => execute_transfer_nft(deps, env, info, recipient, token_id),
    }
}

pub fn execute_start_presale(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    duration: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    // Check if sender is admin
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {});
    }
    nonpayable(&info)?;
    // The window can only be opened once
    if SALE_WINDOW.may_load(deps.storage)?.is_some() {
        return Err(ContractError::PresaleAlreadyStarted {});
    }
    let window = SaleWindow::new(env.block.time, duration)?;
    SALE_WINDOW.save(deps.storage, &window)?;

    let res = Response::new()
        .add_attribute("action", "start_presale")
        .add_attribute("start_time", window.start_time.to_string())
        .add_attribute("end_time", window.end_time().to_string());
    Ok(res)
}

pub fn execute_presale_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let pause_state = PauseState::default();
    pause_state.error_if_paused(deps.storage)?;

    let window = SALE_WINDOW.may_load(deps.storage)?;
    if sale_phase(window.as_ref(), env.block.time) != SalePhase::Presale {
        return Err(ContractError::PresaleNotRunning {});
    }

    let config = CONFIG.load(deps.storage)?;
    let is_registered =
        check_if_address_is_registered(&info.sender, &config.whitelist_address, deps.as_ref())?;
    if !is_registered {
        return Err(ContractError::NotWhitelisted {});
    }

    mint_to_sender(deps, info, config, "presale_mint")
}

pub fn execute_mint(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let pause_state = PauseState::default();
    pause_state.error_if_paused(deps.storage)?;

    // Public minting opens once the presale window has elapsed
    let window = SALE_WINDOW.may_load(deps.storage)?;
    if sale_phase(window.as_ref(), env.block.time) != SalePhase::Public {
        return Err(ContractError::PresaleNotEnded {});
    }

    let config = CONFIG.load(deps.storage)?;
    mint_to_sender(deps, info, config, "mint")
}

fn mint_to_sender(
    deps: DepsMut,
    info: MessageInfo,
    config: Config,
    action: &str,
) -> Result<Response, ContractError> {
    // Check the payment, anything above the price stays in the contract
    let amount = may_pay(&info, &config.mint_price.denom)?;
    if amount < config.mint_price.amount {
        return Err(ContractError::InsufficientPayment {
            expected: config.mint_price.amount,
            sent: amount,
        });
    }

    let minted_count = last_token_id(deps.storage)?;
    if minted_count >= config.max_supply {
        return Err(ContractError::SupplyExhausted {});
    }
    let token_id = minted_count + 1;

    MINTED_COUNT.save(deps.storage, &token_id)?;
    assign_token(deps.storage, token_id, &info.sender)?;

    let res = Response::new()
        .add_attribute("action", action)
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("recipient", info.sender)
        .add_attribute("paid", amount.to_string());
    Ok(res)
}

pub fn execute_set_paused(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    // Check if sender is admin
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {});
    }
    nonpayable(&info)?;

    let pause_state = PauseState::default();
    pause_state.set_paused(deps.storage, paused)?;

    let res = Response::new()
        .add_attribute("action", "set_paused")
        .add_attribute("paused", paused.to_string());
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

pub fn execute_transfer_nft(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    recipient: String,
    token_id: u32,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let owner = TOKEN_OWNERS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })?;
    if owner != info.sender {
        return Err(ContractError::NotTokenOwner {});
    }
    let recipient = deps.api.addr_validate(&recipient)?;

    unassign_token(deps.storage, token_id, &owner)?;
    assign_token(deps.storage, token_id, &recipient)?;

    let res = Response::new()
        .add_attribute("action", "transfer_nft")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("sender", owner)
        .add_attribute("recipient", recipient);
    Ok(res)
}

// Implement Queries
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps, env)?),
        QueryMsg::MintedCount {} => to_json_binary(&query_minted_count(deps, env)?),
        QueryMsg::MaxSupply {} => to_json_binary(&query_max_supply(deps, env)?),
        QueryMsg::OwnerOf { token_id } => to_json_binary(&query_owner_of(deps, env, token_id)?),
        QueryMsg::Balance { owner } => to_json_binary(&query_balance(deps, env, owner)?),
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => to_json_binary(&query_tokens(deps, env, owner, start_after, limit)?),
        QueryMsg::NftInfo { token_id } => to_json_binary(&query_nft_info(deps, env, token_id)?),
        QueryMsg::SaleWindow {} => to_json_binary(&query_sale_window(deps, env)?),
        QueryMsg::Phase {} => to_json_binary(&query_phase(deps, env)?),
        QueryMsg::IsPaused {} => to_json_binary(&query_is_paused(deps, env)?),
    }
}

fn query_config(deps: Deps, _env: Env) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config)
}

fn query_minted_count(deps: Deps, _env: Env) -> Result<u32, ContractError> {
    let minted_count = last_token_id(deps.storage)?;
    Ok(minted_count)
}

fn query_max_supply(deps: Deps, _env: Env) -> Result<u32, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.max_supply)
}

fn query_owner_of(deps: Deps, _env: Env, token_id: u32) -> Result<OwnerOfResponse, ContractError> {
    let owner = TOKEN_OWNERS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })?;
    Ok(OwnerOfResponse { owner })
}

fn query_balance(deps: Deps, _env: Env, owner: String) -> Result<u32, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;
    let tokens = owned_tokens(deps.storage, &owner)?;
    Ok(tokens.len() as u32)
}

fn query_tokens(
    deps: Deps,
    _env: Env,
    owner: String,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> Result<TokensResponse, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(TOKENS_PAGE_LIMIT).min(TOKENS_PAGE_LIMIT);

    let tokens: Vec<u32> = owned_tokens(deps.storage, &owner)?
        .into_iter()
        .filter(|token_id| start_after.map_or(true, |start| *token_id > start))
        .take(limit as usize)
        .collect();
    Ok(TokensResponse { tokens })
}

fn query_nft_info(deps: Deps, _env: Env, token_id: u32) -> Result<NftInfoResponse, ContractError> {
    let owner = TOKEN_OWNERS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })?;
    let config = CONFIG.load(deps.storage)?;
    Ok(NftInfoResponse {
        owner,
        token_uri: format!("{}{}", config.base_uri, token_id),
    })
}

fn query_sale_window(deps: Deps, _env: Env) -> Result<Option<SaleWindow>, ContractError> {
    let window = SALE_WINDOW.may_load(deps.storage)?;
    Ok(window)
}

fn query_phase(deps: Deps, env: Env) -> Result<SalePhase, ContractError> {
    let window = SALE_WINDOW.may_load(deps.storage)?;
    Ok(sale_phase(window.as_ref(), env.block.time))
}

fn query_is_paused(deps: Deps, _env: Env) -> Result<bool, ContractError> {
    let pause_state = PauseState::default();
    let is_paused = pause_state.is_paused(deps.storage)?;
    Ok(is_paused)
}
