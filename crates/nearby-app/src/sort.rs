// Rust guideline compliant 2026-10-19

//! Ordering of candidate lists.

use nearby_core::{ServiceEntity, SortKey};
use std::cmp::Ordering;

/// Returns a new list ordered by `key`; the input is left untouched.
///
/// The sort is stable, so equal-key candidates keep their relative order and
/// re-sorting an ordered list changes nothing.
///
/// - `Distance`: ascending, unknown distance last
/// - `Price`: ascending, unknown price last
/// - `Rating`: descending, ties by descending rating count, unrated last
pub fn order(candidates: &[ServiceEntity], key: SortKey) -> Vec<ServiceEntity> {
    let mut ordered = candidates.to_vec();
    match key {
        SortKey::Distance => ordered.sort_by(|a, b| ascending(a.distance_km, b.distance_km)),
        SortKey::Price => ordered.sort_by(|a, b| ascending(a.price, b.price)),
        SortKey::Rating => ordered.sort_by(|a, b| {
            descending(a.rating_value, b.rating_value)
                .then_with(|| descending_count(a.rating_count, b.rating_count))
        }),
    }
    tracing::debug!(candidates = ordered.len(), ?key, "candidates ordered");
    ordered
}

/// Ascending with `None` last.
fn ascending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Descending with `None` last.
fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn descending_count(a: Option<u32>, b: Option<u32>) -> Ordering {
    descending(a.map(f64::from), b.map(f64::from))
}
