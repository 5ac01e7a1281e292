//! Command implementations.

pub mod check;
pub mod list;
pub mod show;
pub mod theme;
