use cosmwasm_std::{StdError, Storage};
use cw_storage_plus::Item;
use thiserror::Error;

pub const PAUSED_KEY: &str = "paused";

#[derive(Error, Debug, PartialEq)]
pub enum PauseError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error("contract is paused")]
    Paused {},
}

pub struct PauseState<'a> {
    pub paused: Item<'a, bool>,
}

impl<'a> PauseState<'a> {
    /// Creates a pause flag stored under the provided key.
    pub const fn new(key: &'a str) -> Self {
        PauseState {
            paused: Item::new(key),
        }
    }

    /// Authorization is the caller's responsibility; this only stores the flag.
    pub fn set_paused(&self, storage: &mut dyn Storage, paused: bool) -> Result<(), PauseError> {
        self.paused.save(storage, &paused)?;
        Ok(())
    }

    /// Errors if the flag is set, does nothing otherwise.
    pub fn error_if_paused(&self, storage: &dyn Storage) -> Result<(), PauseError> {
        if self.is_paused(storage)? {
            Err(PauseError::Paused {})
        } else {
            Ok(())
        }
    }

    // Missing flag reads as unpaused
    pub fn is_paused(&self, storage: &dyn Storage) -> Result<bool, PauseError> {
        let is_paused = self.paused.may_load(storage)?.unwrap_or(false);
        Ok(is_paused)
    }
}

impl Default for PauseState<'static> {
    fn default() -> Self {
        PauseState::new(PAUSED_KEY)
    }
}
