use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use minter_types::SaleWindowError;
use pauser::PauseError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Pause(#[from] PauseError),

    #[error(transparent)]
    SaleWindow(#[from] SaleWindowError),

    #[error("Payment error")]
    PaymentError(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Invalid max supply")]
    InvalidMaxSupply {},

    #[error("Invalid mint price")]
    InvalidMintPrice {},

    #[error("Invalid whitelist address")]
    InvalidWhitelistAddress {},

    #[error("Presale has already been started")]
    PresaleAlreadyStarted {},

    #[error("Presale is not running")]
    PresaleNotRunning {},

    #[error("Presale has not ended")]
    PresaleNotEnded {},

    #[error("Address is not whitelisted")]
    NotWhitelisted {},

    #[error("Insufficient payment")]
    InsufficientPayment { expected: Uint128, sent: Uint128 },

    #[error("Max supply reached")]
    SupplyExhausted {},

    #[error("Token not found")]
    TokenNotFound { token_id: u32 },

    #[error("Sender does not own the token")]
    NotTokenOwner {},
}

impl From<ContractError> for StdError {
    fn from(err: ContractError) -> StdError {
        StdError::generic_err(err.to_string())
    }
}
