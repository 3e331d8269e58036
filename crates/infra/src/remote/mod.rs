//! Remote table-store access for Vendora
//!
//! This module provides HTTP-based access to the hosted platform's
//! row-oriented query interface:
//! - SupabaseClient: PostgREST-style reads and partial row updates
//! - Port adapters implementing the core repository traits
//! - RemoteError: error classification with retry metadata
//!
//! All network interaction is delegated to the shared [`crate::http`]
//! client; the hosted session is consumed implicitly through the configured
//! API key.

pub mod client;
mod errors;
pub mod locations;
pub mod visits;

pub use client::{SupabaseClient, SupabaseClientConfig};
pub use errors::{RemoteError, RemoteErrorCategory};
pub use locations::SupabaseLocationRepository;
pub use visits::SupabaseVisitRepository;
