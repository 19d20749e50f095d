// Rust guideline compliant 2026-10-19

//! Parsers for user-facing selector values.

use crate::error::{AppError, Result};
use nearby_core::{Category, SortKey};

/// Parses a category name such as `blood-bank` or `Nursing`.
///
/// # Errors
///
/// Returns an error if the category is unknown.
pub fn parse_category(value: &str) -> Result<Category> {
    let normalized = value.trim().to_lowercase().replace('-', "_");
    Category::ALL
        .into_iter()
        .find(|category| category.as_str() == normalized)
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid category: {}", value)))
}

/// Parses a sort selector (`distance`, `price` or `rating`).
///
/// # Errors
///
/// Returns an error if the sort key is unknown.
pub fn parse_sort_key(value: &str) -> Result<SortKey> {
    match value.trim().to_lowercase().as_str() {
        "distance" | "nearest" => Ok(SortKey::Distance),
        "price" | "cheapest" => Ok(SortKey::Price),
        "rating" | "top_rated" | "top-rated" => Ok(SortKey::Rating),
        _ => Err(AppError::InvalidInput(format!("Invalid sort key: {}", value))),
    }
}
