//! # Shared Library
//!
//! Plain Rust helpers used by the redeem web client. Nothing in here depends on
//! wasm or the browser, so it can be unit tested natively.
//!
//! ## Structure
//!
//! - **[`chain`]**: Network descriptions and block explorer links
//!   - **[`chain::POLYGON_MUMBAI`]**: Network the silver card contract lives on
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Usage
//!
//! ```rust
//! use shared::chain::POLYGON_MUMBAI;
//! use shared::utils::truncate_address;
//!
//! let account = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
//! assert_eq!(truncate_address(account), "0x5aAe...eAed");
//! assert_eq!(
//!     POLYGON_MUMBAI.address_url(account),
//!     "https://mumbai.polygonscan.com/address/0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
//! );
//! ```

pub mod chain;
pub mod utils;

pub use chain::*;
pub use utils::*;
