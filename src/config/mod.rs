// src/config/mod.rs
// DOCUMENTATION: Configuration module organization
// PURPOSE: Re-export configuration components

pub mod cli;
pub mod env;

pub use cli::Cli;
pub use env::Config;
