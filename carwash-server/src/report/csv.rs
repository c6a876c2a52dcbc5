//! CSV rendering for the daily report
//!
//! Fixed column order; timestamps as local wall-clock text in the business
//! timezone; amounts as bare two-decimal magnitudes. The optional summary
//! block (blank line, then total cars and total revenue) matches the layout
//! cashiers already know from the old reports.

use chrono_tz::Tz;

use crate::utils::AppResult;
use crate::utils::error::AppError;
use crate::utils::time::format_local;

use super::{DailyReport, format_cell, format_display};

/// Fixed export column order
pub const COLUMNS: [&str; 7] = [
    "Car Name",
    "Plate Number",
    "Washer",
    "Cashier",
    "Payment Amount (₱)",
    "Start Time",
    "Completion Time",
];

/// Render the report as CSV bytes
pub fn render(report: &DailyReport, tz: Tz, with_summary: bool) -> AppResult<Vec<u8>> {
    // flexible: the summary block rows are shorter than the data rows
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    writer
        .write_record(COLUMNS)
        .map_err(|e| AppError::persistence(format!("CSV write failed: {}", e)))?;

    for car in &report.cars {
        let amount = car.payment_amount.map(format_cell).unwrap_or_default();
        let completion = car
            .completion_time
            .map(|t| format_local(t, tz))
            .unwrap_or_default();
        writer
            .write_record([
                car.car_name.as_str(),
                car.plate_number.as_str(),
                car.washer_name.as_str(),
                car.cashier_name.as_deref().unwrap_or(""),
                amount.as_str(),
                format_local(car.timestamp, tz).as_str(),
                completion.as_str(),
            ])
            .map_err(|e| AppError::persistence(format!("CSV write failed: {}", e)))?;
    }

    if with_summary {
        writer
            .write_record([""])
            .and_then(|_| writer.write_record(["TOTAL CARS:", &report.total_cars().to_string()]))
            .and_then(|_| {
                writer.write_record(["TOTAL REVENUE:", &format_display(report.total_revenue)])
            })
            .map_err(|e| AppError::persistence(format!("CSV write failed: {}", e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::persistence(format!("CSV flush failed: {}", e)))
}
