// Rust guideline compliant 2026-10-19

//! One-shot device location request.
//!
//! The device location service answers exactly once, either with a
//! coordinate or with the reason it could not produce one. Retrying is the
//! caller's business.

use crate::filter::FilterCriteria;
use chrono::{DateTime, Utc};
use nearby_core::{Coordinate, SessionContext};
use std::fmt;
use tokio::sync::oneshot;

/// Why no coordinate was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationUnavailable {
    /// The user denied the location permission.
    PermissionDenied,
    /// The device could not obtain a fix in time.
    Timeout,
    /// The provider reported a coordinate outside the valid range.
    InvalidCoordinate,
    /// The provider went away without answering.
    Abandoned,
    /// Any other provider failure.
    Other(String),
}

impl fmt::Display for LocationUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationUnavailable::PermissionDenied => f.write_str("permission denied"),
            LocationUnavailable::Timeout => f.write_str("timed out"),
            LocationUnavailable::InvalidCoordinate => f.write_str("invalid coordinate"),
            LocationUnavailable::Abandoned => f.write_str("request abandoned"),
            LocationUnavailable::Other(reason) => f.write_str(reason),
        }
    }
}

/// Result of a location request.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationOutcome {
    /// The device reported a coordinate.
    Coordinate(Coordinate),
    /// No coordinate is available.
    Unavailable(LocationUnavailable),
}

impl LocationOutcome {
    /// Returns the coordinate on success.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            LocationOutcome::Coordinate(coordinate) => Some(*coordinate),
            LocationOutcome::Unavailable(_) => None,
        }
    }

    /// Returns criteria with `origin` set from this outcome.
    ///
    /// A failed request leaves the criteria unchanged.
    #[must_use]
    pub fn apply_to(&self, criteria: FilterCriteria) -> FilterCriteria {
        match self.coordinate() {
            Some(origin) => FilterCriteria {
                origin: Some(origin),
                ..criteria
            },
            None => criteria,
        }
    }

    /// Caches a successful fix in the session context.
    ///
    /// # Returns
    ///
    /// True if the context was updated.
    pub fn record_in(&self, context: &mut SessionContext, captured_at: DateTime<Utc>) -> bool {
        match self.coordinate() {
            Some(coordinate) => context.record_fix(coordinate, captured_at).is_ok(),
            None => false,
        }
    }
}

/// Provider side of a location request. Answering consumes it.
#[derive(Debug)]
pub struct LocationResolver {
    sender: oneshot::Sender<LocationOutcome>,
}

impl LocationResolver {
    /// Answers with a coordinate.
    ///
    /// An out-of-range coordinate is reported as unavailable.
    pub fn succeed(self, coordinate: Coordinate) {
        let outcome = match coordinate.validate() {
            Ok(()) => LocationOutcome::Coordinate(coordinate),
            Err(e) => {
                tracing::warn!(error = %e, "location provider returned invalid coordinate");
                LocationOutcome::Unavailable(LocationUnavailable::InvalidCoordinate)
            }
        };
        self.send(outcome);
    }

    /// Answers with a failure reason.
    pub fn fail(self, reason: LocationUnavailable) {
        self.send(LocationOutcome::Unavailable(reason));
    }

    fn send(self, outcome: LocationOutcome) {
        if self.sender.send(outcome).is_err() {
            tracing::debug!("location request dropped before it was answered");
        }
    }
}

/// Consumer side of a location request.
#[derive(Debug)]
pub struct LocationRequest {
    receiver: oneshot::Receiver<LocationOutcome>,
}

impl LocationRequest {
    /// Waits for the single answer.
    ///
    /// A resolver dropped without answering yields `Abandoned`.
    pub async fn outcome(self) -> LocationOutcome {
        let outcome = self
            .receiver
            .await
            .unwrap_or(LocationOutcome::Unavailable(LocationUnavailable::Abandoned));
        if let LocationOutcome::Unavailable(reason) = &outcome {
            tracing::info!(%reason, "device location unavailable");
        }
        outcome
    }

    /// Returns the answer if it has already arrived, without waiting.
    ///
    /// # Returns
    ///
    /// `Ok(outcome)` once answered, `Err(self)` while still pending.
    pub fn try_outcome(mut self) -> std::result::Result<LocationOutcome, Self> {
        match self.receiver.try_recv() {
            Ok(outcome) => Ok(outcome),
            Err(oneshot::error::TryRecvError::Empty) => Err(self),
            Err(oneshot::error::TryRecvError::Closed) => Ok(LocationOutcome::Unavailable(
                LocationUnavailable::Abandoned,
            )),
        }
    }
}

/// Creates a linked resolver/request pair.
///
/// Hand the resolver to the device location service and await the request.
#[must_use]
pub fn location_request() -> (LocationResolver, LocationRequest) {
    let (sender, receiver) = oneshot::channel();
    (LocationResolver { sender }, LocationRequest { receiver })
}
