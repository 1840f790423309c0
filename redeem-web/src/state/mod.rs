//! Application state: the connection machine and its Leptos context

pub mod machine;
pub mod redeem;
