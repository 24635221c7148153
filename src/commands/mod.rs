//! Command implementations for the FPL watchlist CLI

pub mod health;
pub mod scout;
pub mod show;
