//! UI Components

pub mod action_buttons;
pub mod navbar;

pub use action_buttons::{ConnectButton, RedeemButton};
pub use navbar::Navbar;
