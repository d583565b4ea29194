//! Pokedex - A command-line explorer for the PokeAPI creature catalog
//!
//! Pages through location listings, explores encounters, catches
//! creatures, and inspects the catch record. Every response from the
//! remote catalog is held in a TTL-bounded in-memory cache reaped by a
//! background task.

pub mod api;
pub mod cache;
pub mod commands;
pub mod config;
pub mod dex;
pub mod error;
pub mod models;

pub use api::ApiClient;
pub use cache::Cache;
pub use config::Config;
pub use dex::Dex;
pub use error::{PokedexError, Result};
