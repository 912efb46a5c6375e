//! Filter option service
//!
//! Lists the distinct values clients can offer in filter dropdowns.

use roster_core::stats::{FilterOptions, OptionField};
use tracing::{instrument, warn};

use super::context::ServiceContext;

/// Filter option service
pub struct FilterOptionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FilterOptionService<'a> {
    /// Create a new FilterOptionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Distinct factions, provinces, positions and birthplaces
    ///
    /// A field whose query fails comes back as an empty list.
    #[instrument(skip(self))]
    pub async fn get_filter_options(&self) -> FilterOptions {
        let (factions, provinces, positions, birthplaces) = tokio::join!(
            self.values(OptionField::Faction),
            self.values(OptionField::Province),
            self.values(OptionField::Position),
            self.values(OptionField::Birthplace),
        );

        FilterOptions {
            factions,
            provinces,
            positions,
            birthplaces,
        }
    }

    async fn values(&self, field: OptionField) -> Vec<String> {
        self.ctx
            .member_repo()
            .distinct_values(field)
            .await
            .unwrap_or_else(|e| {
                warn!(field = %field, error = %e, "Filter option query failed; returning it empty");
                Vec::new()
            })
    }
}
