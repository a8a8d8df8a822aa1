#![no_std]

mod errors;
pub mod storage;
mod contract;
mod dependencies;
mod events;

pub use contract::*;
pub use errors::ControllerError;
