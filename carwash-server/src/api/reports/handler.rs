//! Daily Report Handlers
//!
//! Streams the day's finished cars as a CSV attachment. An empty selection
//! is a distinct "nothing to export" error, never a headers-only file.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use http::header;
use serde::Deserialize;

use crate::core::ServerState;
use crate::report::{DailyReport, csv};
use crate::utils::time::{business_today, parse_date};
use crate::utils::{AppError, AppResult};

/// Query params for the daily export
#[derive(Debug, Deserialize)]
pub struct DailyQuery {
    /// YYYY-MM-DD; defaults to today in the business timezone
    pub date: Option<String>,
    /// Append the totals block; defaults to true
    pub summary: Option<bool>,
}

/// GET /api/reports/daily - export finished cars for one day as CSV
pub async fn daily(
    State(state): State<ServerState>,
    Query(query): Query<DailyQuery>,
) -> AppResult<Response> {
    let tz = state.config.timezone;
    let date = match &query.date {
        Some(raw) => parse_date(raw)?,
        None => business_today(tz),
    };
    let with_summary = query.summary.unwrap_or(true);

    let finished = state.registry.finished_on(date, tz);
    let report = DailyReport::build(date, finished).ok_or(AppError::NothingToExport(date))?;

    let body = csv::render(&report, tz, with_summary)?;

    tracing::info!(
        date = %date,
        cars = report.total_cars(),
        revenue = %report.total_revenue,
        "Daily report exported"
    );

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", report.filename()),
        ),
    ];
    Ok((headers, body).into_response())
}
