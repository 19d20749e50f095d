// Rust guideline compliant 2026-10-19

//! Session context passed explicitly to the screens that need it.
//!
//! Holds what would otherwise be ambient global state: the first-time-user
//! flag, the last known device coordinate and the user's listing
//! preferences. Loading and saving happen only at the UI edge through
//! `ContextStore`.

use crate::{Coordinate, Error, Result, SortKey};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A coordinate reported by the device, with its capture time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    /// Reported coordinate.
    pub coordinate: Coordinate,
    /// When the coordinate was captured.
    pub captured_at: DateTime<Utc>,
}

impl LocationFix {
    /// Age of the fix relative to `now`.
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.captured_at
    }
}

/// Per-user session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    /// True until the user finishes onboarding.
    #[serde(default = "default_first_time_user")]
    pub first_time_user: bool,
    /// Most recent successful device fix.
    #[serde(default)]
    pub last_known: Option<LocationFix>,
    /// Radius the user picked, overriding the configured default.
    #[serde(default)]
    pub preferred_radius_km: Option<f64>,
    /// Sort key the user picked, overriding the configured default.
    #[serde(default)]
    pub preferred_sort: Option<SortKey>,
}

fn default_first_time_user() -> bool {
    true
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            first_time_user: default_first_time_user(),
            last_known: None,
            preferred_radius_km: None,
            preferred_sort: None,
        }
    }
}

impl SessionContext {
    /// Records a successful device fix.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinate` if the coordinate is out of range.
    pub fn record_fix(&mut self, coordinate: Coordinate, captured_at: DateTime<Utc>) -> Result<()> {
        coordinate.validate()?;
        self.last_known = Some(LocationFix {
            coordinate,
            captured_at,
        });
        Ok(())
    }

    /// Returns the cached coordinate if it is no older than `max_age`.
    #[must_use]
    pub fn fresh_coordinate(&self, now: DateTime<Utc>, max_age: Duration) -> Option<Coordinate> {
        self.last_known
            .filter(|fix| fix.age(now) <= max_age)
            .map(|fix| fix.coordinate)
    }

    /// Marks onboarding as finished.
    pub fn complete_onboarding(&mut self) {
        self.first_time_user = false;
    }

    /// Checks stored preferences for consistency.
    ///
    /// # Errors
    ///
    /// Returns `InvalidContext` if a preference is out of range.
    pub fn validate(&self) -> Result<()> {
        if let Some(radius) = self.preferred_radius_km {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(Error::InvalidContext(format!(
                    "preferred_radius_km must be greater than 0, got {}",
                    radius
                )));
            }
        }

        if let Some(fix) = &self.last_known {
            fix.coordinate.validate()?;
        }

        Ok(())
    }
}

/// File-backed load/save boundary for `SessionContext`.
#[derive(Debug, Clone)]
pub struct ContextStore {
    path: PathBuf,
}

impl ContextStore {
    /// Creates a store backed by `path`.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the context, or the default one if no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds invalid values.
    pub fn load(&self) -> Result<SessionContext> {
        if !self.path.exists() {
            return Ok(SessionContext::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let context: SessionContext = serde_json::from_str(&content)
            .map_err(|e| Error::InvalidContext(format!("{}: {}", self.path.display(), e)))?;
        context.validate()?;
        Ok(context)
    }

    /// Saves the context atomically under an exclusive file lock.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The context holds invalid values
    /// - The lock cannot be acquired
    /// - The file cannot be written or renamed into place
    pub fn save(&self, context: &SessionContext) -> Result<()> {
        context.validate()?;
        self.with_lock(|| {
            use std::io::Write;

            let temp_path = self.path.with_extension("json.tmp");
            {
                let mut file = std::fs::File::create(&temp_path)?;
                file.write_all(serde_json::to_string_pretty(context)?.as_bytes())?;
                file.sync_all()?;
            }
            std::fs::rename(&temp_path, &self.path)?;
            Ok(())
        })
    }

    fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();
        let _ = lock_file.unlock();
        result
    }
}
