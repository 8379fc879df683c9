//! Interactive session layer
//!
//! This module holds the presentation side of meterbook: the per-session
//! state (who is logged in), the console abstraction and the numbered menu
//! loop that drives the services.

pub mod console;
pub mod menu;
pub mod session;

pub use console::Console;
pub use menu::run_menu;
pub use session::Session;
