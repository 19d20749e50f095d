// Rust guideline compliant 2026-10-19

//! Gates and URI builders for the call and directions actions.
//!
//! The rendering layer checks `can_call` / `can_navigate` before showing an
//! affordance. Asking for a target while its gate is closed is a wiring bug
//! and yields `PreconditionViolated`.

use crate::lookup::Resolver;
use crate::{Error, Result, ServiceEntity};
use url::Url;

/// Decides whether contact actions are available for an entity.
#[derive(Debug, Clone)]
pub struct ActionGate<'a> {
    phones: Resolver<'a, String>,
    maps_base_url: Url,
}

impl<'a> ActionGate<'a> {
    /// Creates a gate over a category's phone resolver.
    ///
    /// # Arguments
    ///
    /// * `phones` - Resolver over the category phone table
    /// * `maps_base_url` - Base URL for directions links
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `maps_base_url` does not parse.
    pub fn new(phones: Resolver<'a, String>, maps_base_url: &str) -> Result<Self> {
        let maps_base_url = Url::parse(maps_base_url).map_err(|e| {
            Error::InvalidConfig(format!("Invalid maps base URL {}: {}", maps_base_url, e))
        })?;
        Ok(Self {
            phones,
            maps_base_url,
        })
    }

    /// Returns the dialable phone number for the entity, if any.
    #[must_use]
    pub fn phone(&self, entity: &ServiceEntity) -> Option<String> {
        self.phones
            .resolve(&entity.id)
            .map(|raw| dialable(raw))
            .filter(|digits| !digits.is_empty() && digits != "+")
    }

    /// Whether a phone number resolves for the entity.
    #[must_use]
    pub fn can_call(&self, entity: &ServiceEntity) -> bool {
        self.phone(entity).is_some()
    }

    /// Builds the `tel:` URI for the entity.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionViolated` wrapping `NoContactInfo` if `can_call` is false.
    pub fn call_target(&self, entity: &ServiceEntity) -> Result<Url> {
        let Some(number) = self.phone(entity) else {
            tracing::error!(id = %entity.id, "call target requested without contact info");
            return Err(Error::PreconditionViolated(Box::new(Error::NoContactInfo(
                entity.id.clone(),
            ))));
        };

        Url::parse(&format!("tel:{}", number))
            .map_err(|e| Error::InvalidEntity(format!("Unusable phone for {}: {}", entity.id, e)))
    }

    /// Whether the entity has both latitude and longitude.
    #[must_use]
    pub fn can_navigate(&self, entity: &ServiceEntity) -> bool {
        entity.coordinate().is_some()
    }

    /// Builds the map-directions URL for the entity.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionViolated` wrapping `NoCoordinate` if `can_navigate`
    /// is false, or `InvalidCoordinate` if the coordinate is out of range.
    pub fn directions_target(&self, entity: &ServiceEntity) -> Result<Url> {
        let Some(coordinate) = entity.coordinate() else {
            tracing::error!(id = %entity.id, "directions requested without coordinate");
            return Err(Error::PreconditionViolated(Box::new(Error::NoCoordinate(
                entity.id.clone(),
            ))));
        };
        coordinate.validate()?;

        let mut url = self.maps_base_url.clone();
        url.query_pairs_mut()
            .append_pair("api", "1")
            .append_pair(
                "destination",
                &format!("{},{}", coordinate.latitude, coordinate.longitude),
            );
        Ok(url)
    }
}

/// Keeps the digits of a phone number and a leading `+`.
fn dialable(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut out = String::with_capacity(trimmed.len());
    if trimmed.starts_with('+') {
        out.push('+');
    }
    out.extend(trimmed.chars().filter(char::is_ascii_digit));
    out
}
