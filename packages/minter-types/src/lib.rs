pub mod msg;
pub mod sale_window;
pub mod utils;

pub use msg::*;
pub use sale_window::{SalePhase, SaleWindow, SaleWindowError};
pub use utils::*;
