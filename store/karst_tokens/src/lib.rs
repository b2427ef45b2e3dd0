//! Karst Tokens - Token Definitions and Lookup
//!
//! This crate contains the token vocabulary for the Karst store:
//! - `Token` records pairing a numeric id with a name
//! - `TokenRegistry` for dual-indexed lookup during batch loads
//!
//! Registries are filled in bulk and then read heavily; loads accept
//! whatever the store hands over, without cross-checking the two
//! indexes against each other. A registry is a plain value: loading
//! takes `&mut`, lookups take `&self`, and interleaving the two across
//! threads is the embedder's problem.

mod registry;
mod token;

pub use registry::TokenRegistry;
pub use token::Token;
