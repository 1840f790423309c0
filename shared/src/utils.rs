//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for formatting EVM account addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with default parameters
//!
//! The `0x` prefix is not counted, so `format_address(addr, 4, 4)` keeps four
//! hex digits on each side.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
//! let formatted = format_address(address, 4, 4);
//! assert_eq!(formatted, "0x5aAe...eAed");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len`
/// characters after the optional `0x` prefix.
///
/// If the address is too short to truncate, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
/// assert_eq!(format_address(addr, 4, 4), "0x5aAe...eAed");
/// assert_eq!(format_address(addr, 6, 4), "0x5aAeb6...eAed");
/// assert_eq!(format_address("0xABC", 4, 4), "0xABC");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let (hex_prefix, digits) = match address.strip_prefix("0x") {
        Some(rest) => ("0x", rest),
        None => ("", address),
    };

    // Addresses are ASCII hex, but fall back untouched on anything else so
    // slicing can never land inside a multi-byte character.
    if !digits.is_ascii() || digits.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    let head = &digits[..prefix_len];
    let tail = &digits[digits.len() - suffix_len..];

    format!("{}{}...{}", hex_prefix, head, tail)
}

/// Format a wallet address with default 4-character prefix and suffix.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x456ba3CB23b103Fa3925FA1E48E3075646F3de3C";
/// assert_eq!(truncate_address(addr), "0x456b...de3C");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}
