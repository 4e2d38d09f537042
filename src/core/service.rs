use crate::core::geo::distance_km;
use crate::core::store::ReportStore;
use crate::domain::model::{
    Report, ReportDraft, MAX_DESCRIPTION_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_TYPE_LEN,
};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use crate::utils::validation::{validate_email, validate_range, validate_text};

/// Orchestrates validated creation, listing, radius queries and name sorting
/// against the report store.
pub struct ReportService<S: Storage> {
    store: ReportStore<S>,
}

impl<S: Storage> ReportService<S> {
    pub fn new(store: ReportStore<S>) -> Self {
        Self { store }
    }

    /// Validates every field of `draft` in order (name, email, type,
    /// description, latitude, longitude), short-circuiting on the first
    /// failure. On success the report is appended and the store persisted.
    ///
    /// A failed save still leaves the report in memory; disk and memory may
    /// diverge until the next successful save.
    pub fn create_report(&mut self, draft: ReportDraft) -> Result<()> {
        validate_text("name", &draft.name, MAX_NAME_LEN)?;
        validate_text("email", &draft.email, MAX_EMAIL_LEN)?;
        validate_email("email", &draft.email)?;
        validate_text("disaster type", &draft.disaster_type, MAX_TYPE_LEN)?;
        validate_text("description", &draft.description, MAX_DESCRIPTION_LEN)?;
        validate_range("latitude", draft.latitude, -90.0, 90.0)?;
        validate_range("longitude", draft.longitude, -180.0, 180.0)?;

        self.store.append(Report {
            name: draft.name,
            email: draft.email,
            disaster_type: draft.disaster_type,
            description: draft.description,
            latitude: draft.latitude,
            longitude: draft.longitude,
        });
        tracing::info!("registered report #{}", self.store.len());
        self.store.save()
    }

    /// All reports in store order (registration order, or the sorted order
    /// after a name sort).
    pub fn list_all(&self) -> &[Report] {
        self.store.reports()
    }

    /// Reports within `radius_km` of the query point (inclusive boundary),
    /// paired with their distance, in store order.
    pub fn query_by_radius(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> Result<Vec<(&Report, f64)>> {
        validate_range("latitude", latitude, -90.0, 90.0)?;
        validate_range("longitude", longitude, -180.0, 180.0)?;

        Ok(self
            .store
            .reports()
            .iter()
            .map(|r| (r, distance_km(latitude, longitude, r.latitude, r.longitude)))
            .filter(|(_, d)| *d <= radius_km)
            .collect())
    }

    /// Stable name sort of the whole store, persisted afterwards.
    pub fn sort_by_name(&mut self) -> Result<()> {
        self.store.sort_by_name();
        tracing::info!("sorted {} reports by name", self.store.len());
        self.store.save()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
