//! Application state module

mod app_state;
mod contact;

pub use app_state::*;
pub use contact::*;
