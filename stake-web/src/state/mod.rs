//! Reactive state shared across the page

pub mod staking;
pub mod wallet;
