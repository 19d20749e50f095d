// Rust guideline compliant 2026-10-19

//! Category listing engine.
//!
//! One `Directory` serves every category: it is parameterized by the
//! category's lookup tables and runs filter, sort and per-card resolution.

use crate::error::Result;
use crate::filter::{apply_with_threshold, FilterCriteria};
use crate::sort::order;
use nearby_core::lookup::Resolver;
use nearby_core::{
    ActionGate, CarouselState, Catalog, Category, CategoryTables, Config, Coordinate,
    SessionContext, ServiceEntity, SortKey,
};

/// Everything the rendering layer needs for one listing card.
#[derive(Debug)]
pub struct ListingCard {
    /// The listed entity, with derived distance when available.
    pub entity: ServiceEntity,
    /// Dialable phone number, present exactly when `can_call` is true.
    pub phone: Option<String>,
    /// Image sequence shown in the card gallery.
    pub images: Vec<String>,
    /// Description text.
    pub description: Option<String>,
    /// Gallery cursor owned by this card.
    pub carousel: CarouselState,
    /// Whether the call affordance is enabled.
    pub can_call: bool,
    /// Whether the directions affordance is enabled.
    pub can_navigate: bool,
}

impl ListingCard {
    /// Image at the carousel's current position.
    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.carousel
            .current_index()
            .and_then(|index| self.images.get(index))
            .map(String::as_str)
    }
}

/// What a listing screen asks for: criteria plus sort key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListingQuery {
    /// Filter criteria.
    pub criteria: FilterCriteria,
    /// Sort key.
    pub sort: SortKey,
}

impl ListingQuery {
    /// Builds the query a screen opens with.
    ///
    /// The session's preferences win over configured defaults. The radius is
    /// only applied when an origin is known; without one, every candidate
    /// lacking a precomputed distance would be excluded.
    ///
    /// # Arguments
    ///
    /// * `context` - Session context holding user preferences
    /// * `config` - Configured defaults
    /// * `origin` - User coordinate, if one was obtained
    pub fn initial(context: &SessionContext, config: &Config, origin: Option<Coordinate>) -> Self {
        let radius = context
            .preferred_radius_km
            .unwrap_or(config.default_radius_km);
        Self {
            criteria: FilterCriteria {
                origin,
                radius_km: origin.map(|_| radius),
                ..FilterCriteria::default()
            },
            sort: context.preferred_sort.unwrap_or(config.default_sort),
        }
    }
}

/// Listing engine for one category.
#[derive(Debug, Clone)]
pub struct Directory<'a> {
    category: Category,
    images: Resolver<'a, Vec<String>>,
    descriptions: Resolver<'a, String>,
    gate: ActionGate<'a>,
    parallel_threshold: usize,
}

impl<'a> Directory<'a> {
    /// Creates a directory over a category's tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured maps base URL is invalid.
    pub fn new(category: Category, tables: &'a CategoryTables, config: &Config) -> Result<Self> {
        Ok(Self {
            category,
            images: tables.image_resolver(),
            descriptions: tables.description_resolver(),
            gate: ActionGate::new(tables.phone_resolver(), &config.maps_base_url)?,
            parallel_threshold: config.parallel_threshold,
        })
    }

    /// Creates a directory for `category` from a catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured maps base URL is invalid.
    pub fn from_catalog(catalog: &'a Catalog, category: Category, config: &Config) -> Result<Self> {
        Self::new(category, catalog.tables(category), config)
    }

    /// Category this directory serves.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Call and directions gate for this category.
    #[must_use]
    pub fn gate(&self) -> &ActionGate<'a> {
        &self.gate
    }

    /// Resolves display data for one entity and opens its carousel.
    pub fn card(&self, entity: ServiceEntity) -> ListingCard {
        let images = self.images.resolve(&entity.id).cloned().unwrap_or_default();
        let description = self
            .descriptions
            .resolve_or(&entity.id, entity.raw_description.as_ref())
            .cloned();
        let phone = self.gate.phone(&entity);

        ListingCard {
            can_call: phone.is_some(),
            can_navigate: self.gate.can_navigate(&entity),
            carousel: CarouselState::new(images.len()),
            phone,
            images,
            description,
            entity,
        }
    }

    /// Filters, orders and resolves a candidate snapshot.
    ///
    /// Candidates of other categories are skipped.
    ///
    /// # Arguments
    ///
    /// * `candidates` - Candidate snapshot, left untouched
    /// * `criteria` - Filter criteria
    /// * `sort` - Sort key
    ///
    /// # Returns
    ///
    /// One card per retained candidate, in sorted order.
    pub fn listings(
        &self,
        candidates: &[ServiceEntity],
        criteria: &FilterCriteria,
        sort: SortKey,
    ) -> Vec<ListingCard> {
        let in_category: Vec<ServiceEntity> = candidates
            .iter()
            .filter(|entity| entity.category == self.category)
            .cloned()
            .collect();
        if in_category.len() != candidates.len() {
            tracing::debug!(
                category = %self.category,
                skipped = candidates.len() - in_category.len(),
                "skipping candidates of other categories"
            );
        }

        let filtered = apply_with_threshold(&in_category, criteria, self.parallel_threshold);
        order(&filtered, sort)
            .into_iter()
            .map(|entity| self.card(entity))
            .collect()
    }

    /// Runs [`Directory::listings`] for a prepared query.
    pub fn run(&self, candidates: &[ServiceEntity], query: &ListingQuery) -> Vec<ListingCard> {
        self.listings(candidates, &query.criteria, query.sort)
    }
}
