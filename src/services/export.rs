//! Spreadsheet export of the user directory.
//!
//! Only the record-to-row mapping lives here; the `.xlsx` encoding is
//! delegated to `rust_xlsxwriter`.

use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Format, Workbook};

use crate::config::{EXPORT_COLUMNS, EXPORT_DATE_FORMAT, EXPORT_MISSING_DATE, EXPORT_SHEET_NAME};
use crate::domain::UserRecord;
use crate::errors::{AppError, AppResult};

/// Header row, in column order.
pub fn header_row() -> [&'static str; 4] {
    EXPORT_COLUMNS.map(|(header, _)| header)
}

/// One data row: Name, Email, Phone, Date Added.
pub fn export_row(record: &UserRecord) -> [String; 4] {
    [
        record.name.clone(),
        record.email.clone(),
        record.phone.clone(),
        format_date_added(record.created_at),
    ]
}

/// "Date Added" cell text, or "N/A" without a timestamp.
pub fn format_date_added(created_at: Option<DateTime<Utc>>) -> String {
    created_at
        .map(|ts| ts.format(EXPORT_DATE_FORMAT).to_string())
        .unwrap_or_else(|| EXPORT_MISSING_DATE.to_string())
}

/// Build the workbook for `records` (already in display order).
///
/// # Errors
/// `AppError::Export` if the workbook cannot be assembled or serialized.
pub fn build_workbook(records: &[UserRecord]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(EXPORT_SHEET_NAME)?;

        for (col, (header, width)) in (0u16..).zip(EXPORT_COLUMNS) {
            worksheet.set_column_width(col, width)?;
            worksheet.write_string_with_format(0, col, header, &bold)?;
        }

        for (index, record) in records.iter().enumerate() {
            let row = u32::try_from(index + 1)
                .map_err(|_| AppError::export("Too many records for one worksheet"))?;

            for (col, value) in (0u16..).zip(export_row(record)) {
                worksheet.write_string(row, col, value)?;
            }
        }
    }

    let buffer = workbook.save_to_buffer()?;
    tracing::debug!(rows = records.len(), bytes = buffer.len(), "Workbook assembled");
    Ok(buffer)
}
