#![warn(clippy::all, clippy::cargo)]

mod cell;
mod config;
mod error;
mod generation;
pub mod patterns;
mod utils;

pub use cell::Cell;
pub use config::Config;
pub use error::{LifeError, Result};
pub use generation::Generation;
pub use utils::Record;
