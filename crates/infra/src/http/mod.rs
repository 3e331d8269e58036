//! HTTP plumbing shared by remote-store clients.

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
