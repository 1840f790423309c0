//! # Formatting Utilities
//!
//! Number formatting for values read from the chain. For account addresses,
//! use [`shared::utils::format_address`] or [`shared::utils::truncate_address`].

use alloy_primitives::U256;

/// Insert thousands separators into a string of decimal digits.
///
/// ```rust
/// use redeem_web::utils::format::group_digits;
///
/// assert_eq!(group_digits("1234567"), "1,234,567");
/// assert_eq!(group_digits("100"), "100");
/// ```
pub fn group_digits(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    result.chars().rev().collect()
}

/// Format an on-chain count for display (e.g. `12000` -> `"12,000"`).
///
/// ```rust
/// use alloy_primitives::U256;
/// use redeem_web::utils::format::format_count;
///
/// assert_eq!(format_count(U256::from(3)), "3");
/// assert_eq!(format_count(U256::from(12_000)), "12,000");
/// ```
pub fn format_count(count: U256) -> String {
    group_digits(&count.to_string())
}
