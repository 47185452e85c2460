#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;

pub use crate::core::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env};
pub use player::*;
