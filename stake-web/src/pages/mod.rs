//! Page modules

pub mod stake;

pub use stake::StakePage;
