use cosmwasm_schema::cw_serde;
use cosmwasm_std::Timestamp;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SaleWindowError {
    #[error("Invalid presale duration")]
    InvalidDuration {},
}

#[cw_serde]
pub enum SalePhase {
    NotStarted,
    Presale,
    Public,
}

/// Presale window `[start_time, start_time + duration)`.
///
/// Public sale begins at the first instant not covered by the window, so the
/// end boundary itself already belongs to the public sale.
#[cw_serde]
pub struct SaleWindow {
    pub start_time: Timestamp,
    // Seconds
    pub duration: u64,
}

impl SaleWindow {
    pub fn new(start_time: Timestamp, duration: u64) -> Result<Self, SaleWindowError> {
        if duration == 0 {
            return Err(SaleWindowError::InvalidDuration {});
        }
        // End time must fit in nanoseconds
        duration
            .checked_mul(1_000_000_000)
            .and_then(|nanos| start_time.nanos().checked_add(nanos))
            .ok_or(SaleWindowError::InvalidDuration {})?;
        Ok(SaleWindow {
            start_time,
            duration,
        })
    }

    pub fn end_time(&self) -> Timestamp {
        self.start_time.plus_seconds(self.duration)
    }

    pub fn phase(&self, now: Timestamp) -> SalePhase {
        if now < self.start_time {
            SalePhase::NotStarted
        } else if now < self.end_time() {
            SalePhase::Presale
        } else {
            SalePhase::Public
        }
    }
}

/// Phase for an optional window; no window means the sale has not started.
pub fn sale_phase(window: Option<&SaleWindow>, now: Timestamp) -> SalePhase {
    match window {
        Some(window) => window.phase(now),
        None => SalePhase::NotStarted,
    }
}
