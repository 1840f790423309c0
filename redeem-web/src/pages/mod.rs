//! Page modules

pub mod redeem;

pub use redeem::RedeemPage;
