// Rust guideline compliant 2026-10-19

//! Id-keyed display-fact tables and tiered resolution.
//!
//! A lookup never fails. It answers from the exact id, then from the
//! category's default entity, then from an inline value the caller already
//! holds, and otherwise reports absence.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from entity id to one display fact (phone, images, description).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupTable<T> {
    entries: HashMap<String, T>,
}

impl<T> Default for LookupTable<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> LookupTable<T> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the fact for `id`.
    pub fn insert(&mut self, id: impl Into<String>, value: T) {
        self.entries.insert(id.into(), value);
    }

    /// Returns the fact stored under exactly `id`.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.get(id)
    }

    /// Returns true if `id` has an entry.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for LookupTable<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Which step of the fallback chain produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionTier {
    /// The entity's own id matched.
    Exact,
    /// The category default entity matched.
    FallbackEntity,
    /// The caller's inline value was used.
    InlineValue,
}

/// Resolves a display fact for `id` through the fallback chain.
///
/// # Arguments
///
/// * `id` - Entity id to look up
/// * `table` - Table to search
/// * `fallback_id` - Category default entity id, tried second
/// * `fallback_value` - Inline default, used when no table entry matches
///
/// # Returns
///
/// The first defined value, or `None`.
pub fn resolve<'a, T>(
    id: &str,
    table: &'a LookupTable<T>,
    fallback_id: Option<&str>,
    fallback_value: Option<&'a T>,
) -> Option<&'a T> {
    resolve_with_tier(id, table, fallback_id, fallback_value).map(|(value, _)| value)
}

fn resolve_with_tier<'a, T>(
    id: &str,
    table: &'a LookupTable<T>,
    fallback_id: Option<&str>,
    fallback_value: Option<&'a T>,
) -> Option<(&'a T, ResolutionTier)> {
    if let Some(value) = table.get(id) {
        return Some((value, ResolutionTier::Exact));
    }

    if let Some(value) = fallback_id.and_then(|fid| table.get(fid)) {
        return Some((value, ResolutionTier::FallbackEntity));
    }

    fallback_value.map(|value| (value, ResolutionTier::InlineValue))
}

/// A resolver bound to one table and its category default entity.
///
/// Built once per table and reused for every lookup against it.
#[derive(Debug)]
pub struct Resolver<'a, T> {
    table: &'a LookupTable<T>,
    fallback_id: Option<&'a str>,
}

impl<'a, T> Clone for Resolver<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Resolver<'a, T> {}

impl<'a, T> Resolver<'a, T> {
    /// Creates a resolver over `table` with an optional default entity.
    ///
    /// # Arguments
    ///
    /// * `table` - Table to resolve against
    /// * `fallback_id` - Category default entity id
    pub fn new(table: &'a LookupTable<T>, fallback_id: Option<&'a str>) -> Self {
        Self { table, fallback_id }
    }

    /// Resolves `id` without an inline default.
    pub fn resolve(&self, id: &str) -> Option<&'a T> {
        resolve(id, self.table, self.fallback_id, None)
    }

    /// Resolves `id`, falling back to `inline` when the table has nothing.
    pub fn resolve_or<'b>(&self, id: &str, inline: Option<&'b T>) -> Option<&'b T>
    where
        'a: 'b,
    {
        resolve(id, self.table, self.fallback_id, inline)
    }

    /// Reports which tier would answer for `id`.
    pub fn tier(&self, id: &str, inline: Option<&T>) -> Option<ResolutionTier> {
        let resolved = resolve_with_tier(id, self.table, self.fallback_id, inline);
        if let Some((_, tier)) = resolved {
            tracing::trace!(id, ?tier, "resolved display fact");
        }
        resolved.map(|(_, tier)| tier)
    }

    /// Returns the bound table.
    #[must_use]
    pub fn table(&self) -> &'a LookupTable<T> {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images() -> LookupTable<Vec<String>> {
        [
            ("centre_1", vec!["c1a.jpg".to_string(), "c1b.jpg".to_string()]),
            ("centre_3", vec!["c3.jpg".to_string()]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_exact_match_wins_over_fallback() {
        let table = images();
        let resolver = Resolver::new(&table, Some("centre_1"));
        assert_eq!(resolver.resolve("centre_3").map(Vec::len), Some(1));
        assert_eq!(resolver.tier("centre_3", None), Some(ResolutionTier::Exact));
    }

    #[test]
    fn test_default_entity_before_inline_value() {
        let table = images();
        let inline = vec!["inline.jpg".to_string()];
        let resolver = Resolver::new(&table, Some("centre_1"));
        let resolved = resolver.resolve_or("centre_9", Some(&inline)).unwrap();
        assert_eq!(resolved[0], "c1a.jpg");
    }

    #[test]
    fn test_inline_value_when_default_entity_missing() {
        let table = images();
        let inline = vec!["inline.jpg".to_string()];
        let resolver = Resolver::new(&table, Some("centre_404"));
        assert_eq!(
            resolver.tier("centre_9", Some(&inline)),
            Some(ResolutionTier::InlineValue)
        );
    }

    #[test]
    fn test_absent_without_any_fallback() {
        let table = images();
        assert!(resolve("centre_9", &table, None, None).is_none());
    }
}
