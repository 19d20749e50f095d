// Rust guideline compliant 2026-10-19

//! Core data models for the directory engine.

use serde::{Deserialize, Serialize};

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, within [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, within [-180, 180].
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a validated coordinate.
    ///
    /// # Arguments
    ///
    /// * `latitude` - Latitude in degrees
    /// * `longitude` - Longitude in degrees
    ///
    /// # Returns
    ///
    /// The coordinate if both components are finite and in range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinate` if either component is out of range or not finite.
    pub fn new(latitude: f64, longitude: f64) -> crate::Result<Self> {
        let coordinate = Self {
            latitude,
            longitude,
        };
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Checks that latitude and longitude are finite and in range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinate` describing the offending values.
    pub fn validate(&self) -> crate::Result<()> {
        let lat_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        let lon_ok = self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);
        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(crate::Error::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

/// Service category a listing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Hospitals.
    Hospital,
    /// Clinics.
    Clinic,
    /// Dental practices.
    Dental,
    /// Ambulance services.
    Ambulance,
    /// Blood banks.
    BloodBank,
    /// Home nursing services.
    Nursing,
    /// Photocopy and print shops.
    Photocopy,
    /// Tradespeople matched on the worker screen.
    Worker,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 8] = [
        Category::Hospital,
        Category::Clinic,
        Category::Dental,
        Category::Ambulance,
        Category::BloodBank,
        Category::Nursing,
        Category::Photocopy,
        Category::Worker,
    ];

    /// Returns the snake_case name used in catalog files.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hospital => "hospital",
            Category::Clinic => "clinic",
            Category::Dental => "dental",
            Category::Ambulance => "ambulance",
            Category::BloodBank => "blood_bank",
            Category::Nursing => "nursing",
            Category::Photocopy => "photocopy",
            Category::Worker => "worker",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key a candidate list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Nearest first.
    #[default]
    Distance,
    /// Cheapest first.
    Price,
    /// Best rated first.
    Rating,
}

/// One discoverable service provider.
///
/// Entities are read-only snapshots supplied by the data source. The engine
/// never mutates a caller's entity; derived values are placed on copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntity {
    /// Stable identifier, unique within the category.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Category the listing belongs to.
    pub category: Category,
    /// Latitude in degrees, if known.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude in degrees, if known.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Distance from the user, precomputed or derived.
    #[serde(default)]
    pub distance_km: Option<f64>,
    /// Average rating.
    #[serde(default)]
    pub rating_value: Option<f64>,
    /// Number of ratings behind `rating_value`.
    #[serde(default)]
    pub rating_count: Option<u32>,
    /// Whether the provider is open right now.
    #[serde(default)]
    pub open_now: Option<bool>,
    /// Description attached inline by the data source.
    #[serde(default)]
    pub raw_description: Option<String>,
    /// Price of the service.
    #[serde(default)]
    pub price: Option<f64>,
    /// Years of experience (workers).
    #[serde(default)]
    pub experience_years: Option<u32>,
}

impl ServiceEntity {
    /// Creates an entity with only its identity fields set.
    ///
    /// # Arguments
    ///
    /// * `id` - Stable identifier
    /// * `title` - Display title
    /// * `category` - Category of the listing
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            latitude: None,
            longitude: None,
            distance_km: None,
            rating_value: None,
            rating_count: None,
            open_now: None,
            raw_description: None,
            price: None,
            experience_years: None,
        }
    }

    /// Returns the coordinate when both latitude and longitude are defined.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinate {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }

    /// Validates the entity data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - ID is empty
    /// - Title is empty
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.trim().is_empty() {
            return Err(crate::Error::InvalidEntity(
                "ID cannot be empty".to_string(),
            ));
        }

        if self.title.trim().is_empty() {
            return Err(crate::Error::InvalidEntity(format!(
                "Title cannot be empty for {}",
                self.id
            )));
        }

        Ok(())
    }
}
