//! Application state module

mod app_state;
mod forms;
mod patient;
mod session;

pub use app_state::*;
pub use forms::*;
pub use patient::*;
