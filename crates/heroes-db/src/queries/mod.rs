//! Database query modules.

pub mod heroes;
pub mod teams;
