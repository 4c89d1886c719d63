use cosmwasm_std::{Addr, Deps, StdError};

use crate::msg::{QueryMsg, TokensResponse, TOKENS_PAGE_LIMIT};

/// Every token owned by `owner`, reading the minter page by page.
pub fn query_owned_tokens(
    minter_address: &Addr,
    owner: &Addr,
    deps: Deps,
) -> Result<Vec<u32>, StdError> {
    let mut tokens: Vec<u32> = Vec::new();
    loop {
        let page: TokensResponse = deps.querier.query_wasm_smart(
            minter_address,
            &QueryMsg::Tokens {
                owner: owner.to_string(),
                start_after: tokens.last().copied(),
                limit: Some(TOKENS_PAGE_LIMIT),
            },
        )?;
        let last_page = page.tokens.len() < TOKENS_PAGE_LIMIT as usize;
        tokens.extend(page.tokens);
        if last_page {
            return Ok(tokens);
        }
    }
}

pub fn query_balance(minter_address: &Addr, owner: &Addr, deps: Deps) -> Result<u32, StdError> {
    let balance: u32 = deps.querier.query_wasm_smart(
        minter_address,
        &QueryMsg::Balance {
            owner: owner.to_string(),
        },
    )?;
    Ok(balance)
}

// Used to make sure an address actually points to a minter
pub fn query_max_supply(minter_address: &Addr, deps: Deps) -> Result<u32, StdError> {
    let max_supply: u32 = deps
        .querier
        .query_wasm_smart(minter_address, &QueryMsg::MaxSupply {})?;
    Ok(max_supply)
}
