//! Merit-order production planning for a fleet of power plants.

#[cfg(feature = "api")]
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
/// Merit order, load allocation, validation, and plan summary.
pub mod plan;
