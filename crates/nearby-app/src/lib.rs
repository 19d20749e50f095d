// Rust guideline compliant 2026-10-19

//! Listing services for the proximity service directory.
//!
//! This crate provides the pieces a listing screen drives: criteria
//! filtering, ordering, the per-category listing engine, the one-shot
//! device location request and tracing setup.

pub mod directory;
pub mod error;
pub mod filter;
pub mod location;
pub mod parse;
pub mod sort;
pub mod telemetry;

pub use directory::{Directory, ListingCard, ListingQuery};
pub use error::{AppError, ErrorCode, Result};
pub use filter::{apply, apply_with_threshold, FilterCriteria};
pub use location::{
    location_request, LocationOutcome, LocationRequest, LocationResolver, LocationUnavailable,
};
pub use parse::{parse_category, parse_sort_key};
pub use sort::order;
pub use telemetry::{init_tracing, init_tracing_from_config};
