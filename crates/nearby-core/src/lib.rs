// Rust guideline compliant 2026-10-19

//! Nearby Core Library
//!
//! This crate provides the foundational components of the proximity service
//! directory engine:
//! - Data models (ServiceEntity, Coordinate, Category, SortKey)
//! - Great-circle distance
//! - Id-keyed lookup tables with tiered fallback resolution
//! - Bounded carousel navigation
//! - Call and directions gates
//! - Per-category catalogs, candidate snapshots and session context
//! - Error types and result handling

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod gate;
pub mod geo;
pub mod lookup;
pub mod models;
pub mod snapshot;

pub use carousel::{CarouselState, PositionChanged};
pub use catalog::{Catalog, CategoryTables};
pub use config::Config;
pub use context::{ContextStore, LocationFix, SessionContext};
pub use error::{Error, Result};
pub use gate::ActionGate;
pub use geo::{distance_km, EARTH_RADIUS_KM};
pub use lookup::{resolve, LookupTable, ResolutionTier, Resolver};
pub use models::{Category, Coordinate, ServiceEntity, SortKey};
