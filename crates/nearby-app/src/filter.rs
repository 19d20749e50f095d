// Rust guideline compliant 2026-10-19

//! Criteria filtering for candidate lists.

use nearby_core::{distance_km, Coordinate, ServiceEntity};
use rayon::prelude::*;

/// Candidate count at which filtering runs in parallel by default.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1_000;

/// User-supplied criteria. An absent field imposes no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterCriteria {
    /// Where distances are measured from.
    pub origin: Option<Coordinate>,
    /// Maximum distance from `origin`.
    pub radius_km: Option<f64>,
    /// Maximum price.
    pub max_price: Option<f64>,
    /// Minimum years of experience.
    pub min_experience_years: Option<u32>,
}

impl FilterCriteria {
    /// Returns true when no field constrains the candidates.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.radius_km.is_none() && self.max_price.is_none() && self.min_experience_years.is_none()
    }
}

/// Filters candidates against the criteria.
///
/// All present criteria must hold. A candidate missing the attribute a
/// criterion needs is excluded. Output keeps input order; when an origin is
/// given, retained candidates without a precomputed distance carry the
/// derived one.
///
/// # Arguments
///
/// * `candidates` - Candidate snapshot, left untouched
/// * `criteria` - Criteria to apply
///
/// # Returns
///
/// The retained candidates, in input order.
pub fn apply(candidates: &[ServiceEntity], criteria: &FilterCriteria) -> Vec<ServiceEntity> {
    apply_with_threshold(candidates, criteria, DEFAULT_PARALLEL_THRESHOLD)
}

/// Same as [`apply`] with an explicit parallel threshold.
pub fn apply_with_threshold(
    candidates: &[ServiceEntity],
    criteria: &FilterCriteria,
    parallel_threshold: usize,
) -> Vec<ServiceEntity> {
    let origin = criteria.origin.filter(|origin| match origin.validate() {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring invalid filter origin");
            false
        }
    });

    let evaluate = |entity: &ServiceEntity| -> Option<ServiceEntity> {
        let distance = supplied_distance(entity).or_else(|| derived_distance(entity, origin));

        if let Some(radius) = criteria.radius_km {
            match distance {
                Some(d) if d <= radius => {}
                _ => return None,
            }
        }

        if let Some(max_price) = criteria.max_price {
            match entity.price {
                Some(price) if price <= max_price => {}
                _ => return None,
            }
        }

        if let Some(min_years) = criteria.min_experience_years {
            match entity.experience_years {
                Some(years) if years >= min_years => {}
                _ => return None,
            }
        }

        let mut retained = entity.clone();
        retained.distance_km = distance;
        Some(retained)
    };

    let retained: Vec<ServiceEntity> = if candidates.len() >= parallel_threshold {
        candidates.par_iter().filter_map(evaluate).collect()
    } else {
        candidates.iter().filter_map(evaluate).collect()
    };

    tracing::debug!(
        candidates = candidates.len(),
        retained = retained.len(),
        "filter applied"
    );
    retained
}

/// A supplied distance that is negative or not finite counts as unknown.
fn supplied_distance(entity: &ServiceEntity) -> Option<f64> {
    let distance = entity.distance_km?;
    if distance.is_finite() && distance >= 0.0 {
        Some(distance)
    } else {
        tracing::warn!(id = %entity.id, distance, "ignoring unusable supplied distance");
        None
    }
}

fn derived_distance(entity: &ServiceEntity, origin: Option<Coordinate>) -> Option<f64> {
    let origin = origin?;
    let coordinate = entity.coordinate()?;
    match distance_km(origin, coordinate) {
        Ok(d) => Some(d),
        Err(e) => {
            tracing::warn!(id = %entity.id, error = %e, "excluding entity with invalid coordinate");
            None
        }
    }
}
