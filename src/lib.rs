#![cfg_attr(not(feature = "std"), no_std)]
//! Single-player coordinate battleship: random ship placement around fixed
//! islands, a select-and-fire game session and a cell-to-latitude/longitude
//! mapper.

extern crate alloc;

mod bitboard;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod coordinates;
#[cfg(feature = "std")]
mod logging;
mod placement;
pub mod prelude;
mod session;
mod ship;

pub use bitboard::{BitBoardError, BitGrid, Mask};
pub use common::*;
pub use config::*;
pub use coordinates::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use placement::generate;
pub use session::*;
pub use ship::*;
