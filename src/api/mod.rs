//! API Module
//!
//! HTTP client for the remote creature catalog, with the response cache
//! sitting between the request methods and the network.

pub mod client;

pub use client::ApiClient;
