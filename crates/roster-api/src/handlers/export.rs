//! Export handlers

use axum::extract::State;
use roster_service::{ExportService, CSV_CONTENT_TYPE, CSV_FILENAME};
use tracing::info;

use crate::response::{ApiResult, CsvAttachment};
use crate::state::AppState;

/// Download every member as CSV
///
/// GET /api/export/csv
pub async fn export_csv(State(state): State<AppState>) -> ApiResult<CsvAttachment> {
    let body = ExportService::new(state.service_context()).export_csv().await?;
    info!(bytes = body.len(), "CSV export served");

    Ok(CsvAttachment {
        filename: CSV_FILENAME,
        content_type: CSV_CONTENT_TYPE,
        body,
    })
}
