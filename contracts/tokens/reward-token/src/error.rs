use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Payment error")]
    PaymentError(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Invalid token price")]
    InvalidTokenPrice {},

    #[error("Invalid max supply")]
    InvalidMaxSupply {},

    #[error("Invalid tokens per unit")]
    InvalidTokensPerUnit {},

    #[error("Invalid minter address")]
    InvalidMinterAddress {},

    #[error("Invalid amount")]
    InvalidAmount {},

    #[error("Incorrect payment amount")]
    IncorrectPayment { expected: Uint128, sent: Uint128 },

    #[error("Max total supply exceeded")]
    SupplyExceeded {},

    #[error("Sender owns no collectible")]
    NoCollectibleOwned {},

    #[error("Rewards already claimed for every owned collectible")]
    AllUnitsAlreadyClaimed {},

    #[error("Insufficient balance")]
    InsufficientBalance { balance: Uint128, required: Uint128 },
}

impl From<ContractError> for StdError {
    fn from(err: ContractError) -> StdError {
        StdError::generic_err(err.to_string())
    }
}
