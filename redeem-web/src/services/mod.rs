//! Wallet and contract services

pub mod contract;
pub mod ethereum;
pub mod provider;

#[cfg(test)]
pub(crate) mod mock;
