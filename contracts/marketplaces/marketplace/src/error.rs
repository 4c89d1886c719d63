use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Payment error")]
    PaymentError(#[from] PaymentError),

    #[error("Invalid price")]
    InvalidPrice {},

    #[error("Token is not available")]
    TokenUnavailable { token_id: u64 },

    #[error("Insufficient payment")]
    InsufficientPayment { expected: Uint128, sent: Uint128 },
}

impl From<ContractError> for StdError {
    fn from(err: ContractError) -> StdError {
        StdError::generic_err(err.to_string())
    }
}
