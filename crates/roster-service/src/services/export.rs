//! Export service
//!
//! Full-table CSV export. Present text fields are quoted, numeric fields are
//! written bare and absent values are left empty.

use roster_core::entities::MemberRecord;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Header row of the export
pub const CSV_HEADER: &str =
    "id,province_id,name,birthplace,birth_date,position,faction,address,remarks,age,province";

/// Content type the HTTP layer serves the export with
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Download filename suggested to clients
pub const CSV_FILENAME: &str = "members.csv";

/// Export service
pub struct ExportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ExportService<'a> {
    /// Create a new ExportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every member, ordered by ID ascending
    #[instrument(skip(self))]
    pub async fn export_all(&self) -> ServiceResult<Vec<MemberRecord>> {
        let rows = self.ctx.member_repo().find_all().await?;
        info!(rows = rows.len(), "Export prepared");
        Ok(rows)
    }

    /// Export every member as CSV text
    pub async fn export_csv(&self) -> ServiceResult<String> {
        let rows = self.export_all().await?;
        Ok(Self::render_csv(&rows))
    }

    /// Render rows as CSV with a header line; every line ends with `\n`
    pub fn render_csv(rows: &[MemberRecord]) -> String {
        let mut out = String::with_capacity(CSV_HEADER.len() + 1 + rows.len() * 128);
        out.push_str(CSV_HEADER);
        out.push('\n');

        for row in rows {
            let fields = [
                row.id.to_string(),
                number_field(row.province_id),
                text_field(row.name.as_deref()),
                text_field(row.birthplace.as_deref()),
                text_field(row.birth_date.as_deref()),
                text_field(row.position.as_deref()),
                text_field(row.faction.as_deref()),
                text_field(row.address.as_deref()),
                text_field(row.remarks.as_deref()),
                number_field(row.age),
                text_field(row.province.as_deref()),
            ];
            out.push_str(&fields.join(","));
            out.push('\n');
        }

        out
    }
}

/// Quoted with inner quotes doubled; absent values are empty
fn text_field(value: Option<&str>) -> String {
    match value {
        Some(v) => {
            let mut quoted = String::with_capacity(v.len() + 2);
            quoted.push('"');
            quoted.push_str(&v.replace('"', "\"\""));
            quoted.push('"');
            quoted
        }
        None => String::new(),
    }
}

fn number_field(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
