//! Daily report building
//!
//! Selects the day's finished cars and carries the totals the rendering
//! layer needs. Amounts follow one rule throughout: spreadsheet cells get
//! the bare two-decimal magnitude (`150.00`, sortable), display strings get
//! the currency glyph (`₱150.00`).

pub mod csv;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use shared::Car;

/// Currency glyph used in display strings (never in data cells)
pub const CURRENCY: &str = "₱";

/// One day's finished cars plus totals
#[derive(Debug, Clone)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub cars: Vec<Car>,
    pub total_revenue: Decimal,
}

impl DailyReport {
    /// Build a report from an already-selected set of finished cars
    ///
    /// `None` when the selection is empty: an empty day produces a
    /// "nothing to export" signal upstream, never an empty file.
    pub fn build(date: NaiveDate, cars: Vec<Car>) -> Option<Self> {
        if cars.is_empty() {
            return None;
        }
        let total_revenue = cars.iter().filter_map(|c| c.payment_amount).sum();
        Some(Self {
            date,
            cars,
            total_revenue,
        })
    }

    pub fn total_cars(&self) -> usize {
        self.cars.len()
    }

    /// Download filename for this report
    pub fn filename(&self) -> String {
        format!("carwash_daily_report_{}.csv", self.date.format("%Y-%m-%d"))
    }
}

/// Bare numeric magnitude with two decimals, for data cells
pub fn format_cell(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

/// Currency-glyph rendering, for display strings and totals
pub fn format_display(amount: Decimal) -> String {
    format!("{}{:.2}", CURRENCY, amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::CarStatus;

    fn finished(amount: Decimal) -> Car {
        let mut car = Car::new("Vios", "ABC-1", None, "Ana");
        car.status = CarStatus::Finished;
        car.cashier_name = Some("Ben".into());
        car.payment_amount = Some(amount);
        car.completion_time = Some(car.timestamp);
        car
    }

    #[test]
    fn empty_selection_builds_no_report() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert!(DailyReport::build(date, vec![]).is_none());
    }

    #[test]
    fn totals_sum_to_the_cent() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let report = DailyReport::build(
            date,
            vec![
                finished(Decimal::new(15000, 2)),
                finished(Decimal::new(9950, 2)),
            ],
        )
        .unwrap();
        assert_eq!(report.total_cars(), 2);
        assert_eq!(report.total_revenue, Decimal::new(24950, 2));
        assert_eq!(report.filename(), "carwash_daily_report_2025-03-01.csv");
    }

    #[test]
    fn cell_and_display_renderings_differ_only_by_glyph() {
        let amount = Decimal::new(1505, 1); // 150.5
        assert_eq!(format_cell(amount), "150.50");
        assert_eq!(format_display(amount), "₱150.50");
    }
}
