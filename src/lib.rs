#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod coords;
mod drag;
mod game;
#[cfg(feature = "std")]
mod logging;
mod moves;
mod pilot;
#[cfg(feature = "std")]
mod pilot_cli;
mod pilot_random;
pub mod protocol;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod transport;
#[cfg(feature = "std")]
mod view;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coords::*;
pub use drag::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use moves::*;
pub use pilot::*;
#[cfg(feature = "std")]
pub use pilot_cli::*;
pub use pilot_random::*;
pub use protocol::*;
#[cfg(feature = "std")]
pub use session::*;
#[cfg(feature = "std")]
pub use transport::tcp::TcpTransport;
#[cfg(feature = "std")]
pub use view::*;
