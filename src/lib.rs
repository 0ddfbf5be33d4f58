//! PayNow SIMCard Wallet library
//!
//! Localization core for the wallet's site and dashboard, plus the local
//! record store behind the demo dashboard.

pub mod core;
pub mod db;
pub mod i18n;
