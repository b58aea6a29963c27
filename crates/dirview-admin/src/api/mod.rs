//! Settings API client

mod client;
pub mod types;

pub use client::*;
