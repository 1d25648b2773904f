//! Report aggregation
//!
//! Turns the in-memory expense collection plus a [`ReportRequest`] into a
//! [`ReportResult`]. All three report kinds share one result shape so a
//! single rendering path can consume any of them.
//!
//! The evaluation date is an explicit argument rather than read from the
//! clock, keeping the comparisons deterministic and testable.

use chrono::{Datelike, NaiveDate};

use crate::dates;
use crate::error::{Error, Result};
use crate::models::{Expense, ReportKind, ReportRequest, ReportResult};

/// Generate a report from the full expense collection.
pub fn generate(expenses: &[Expense], request: &ReportRequest, today: NaiveDate) -> Result<ReportResult> {
    match request.kind {
        ReportKind::Category => {
            let start = request
                .start_date
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .ok_or(Error::MissingDateRange)?;
            let end = request
                .end_date
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .ok_or(Error::MissingDateRange)?;
            category_report(expenses, request.category.as_deref(), start, end)
        }
        ReportKind::MonthComparison => Ok(month_comparison(expenses, today)),
        ReportKind::YearComparison => Ok(year_comparison(expenses, today)),
    }
}

/// Category report: filter by category and inclusive date range, group the
/// survivors by calendar month of the local date components.
///
/// Month groups keep first-encountered order, not calendar order. That
/// matches the observed behavior of the reference system and is preserved
/// deliberately; see DESIGN.md.
pub fn category_report(
    expenses: &[Expense],
    category: Option<&str>,
    start_date: &str,
    end_date: &str,
) -> Result<ReportResult> {
    let start = dates::parse(start_date)?;
    let end = dates::parse(end_date)?;

    let filter_category = category.filter(|c| *c != "all");

    let mut groups: Vec<(String, f64)> = Vec::new();
    let mut total = 0.0;

    for expense in expenses {
        if let Some(wanted) = filter_category {
            if expense.category != wanted {
                continue;
            }
        }
        if expense.date < start || expense.date > end {
            continue;
        }

        let month = dates::month_abbrev(expense.date.month());
        match groups.iter_mut().find(|(label, _)| label == month) {
            Some((_, sum)) => *sum += expense.amount,
            None => groups.push((month.to_string(), expense.amount)),
        }
        total += expense.amount;
    }

    let (labels, values) = groups.into_iter().unzip();

    Ok(ReportResult {
        kind: ReportKind::Category,
        labels,
        values,
        total: Some(total),
        current_label: None,
        previous_label: None,
        current_total: None,
        previous_total: None,
        difference: None,
        percentage_change: None,
    })
}

/// Month-over-month comparison, evaluated at `today`.
///
/// The previous month rolls the year boundary: January's previous month
/// is December of the prior year.
pub fn month_comparison(expenses: &[Expense], today: NaiveDate) -> ReportResult {
    let current = (today.year(), today.month());
    let previous = if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    };

    let sum_for = |(year, month): (i32, u32)| -> f64 {
        expenses
            .iter()
            .filter(|e| e.date.year() == year && e.date.month() == month)
            .map(|e| e.amount)
            .sum()
    };

    let current_total = sum_for(current);
    let previous_total = sum_for(previous);

    comparison_result(
        ReportKind::MonthComparison,
        vec!["Current Month".into(), "Previous Month".into()],
        format!("{} {}", dates::month_name(current.1), current.0),
        format!("{} {}", dates::month_name(previous.1), previous.0),
        current_total,
        previous_total,
    )
}

/// Year-over-year comparison, evaluated at `today`.
pub fn year_comparison(expenses: &[Expense], today: NaiveDate) -> ReportResult {
    let current_year = today.year();
    let previous_year = current_year - 1;

    let sum_for = |year: i32| -> f64 {
        expenses
            .iter()
            .filter(|e| e.date.year() == year)
            .map(|e| e.amount)
            .sum()
    };

    comparison_result(
        ReportKind::YearComparison,
        vec!["Current Year".into(), "Previous Year".into()],
        current_year.to_string(),
        previous_year.to_string(),
        sum_for(current_year),
        sum_for(previous_year),
    )
}

fn comparison_result(
    kind: ReportKind,
    labels: Vec<String>,
    current_label: String,
    previous_label: String,
    current_total: f64,
    previous_total: f64,
) -> ReportResult {
    let difference = current_total - previous_total;
    // Defined as exactly zero when there is nothing to compare against.
    let percentage_change = if previous_total == 0.0 {
        0.0
    } else {
        (difference / previous_total) * 100.0
    };

    ReportResult {
        kind,
        values: vec![current_total, previous_total],
        labels,
        total: None,
        current_label: Some(current_label),
        previous_label: Some(previous_label),
        current_total: Some(current_total),
        previous_total: Some(previous_total),
        difference: Some(difference),
        percentage_change: Some(percentage_change),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: i64, category: &str, amount: f64, date: &str) -> Expense {
        Expense {
            id,
            category: category.into(),
            amount,
            date: dates::parse(date).unwrap(),
        }
    }

    /// Twelve expenses, six of them "Food" across distinct 2023 months.
    fn fixture() -> Vec<Expense> {
        vec![
            expense(1, "Food", 12.0, "2023-09-10"),
            expense(2, "Clothing", 45.0, "2023-10-17"),
            expense(3, "Food", 18.0, "2023-10-27"),
            expense(4, "Rent", 167.0, "2023-03-15"),
            expense(5, "Food", 9.5, "2023-04-30"),
            expense(6, "Cosmetic", 88.0, "2023-01-03"),
            expense(7, "Food", 11.0, "2023-11-11"),
            expense(8, "Clothing", 33.0, "2022-08-09"),
            expense(9, "Food", 24.0, "2023-08-09"),
            expense(10, "Other", 99.0, "2023-08-08"),
            expense(11, "Cosmetic", 7.0, "2022-03-19"),
            expense(12, "Food", 14.0, "2023-12-12"),
        ]
    }

    #[test]
    fn category_report_sums_matching_expenses() {
        let result =
            category_report(&fixture(), Some("Food"), "2023-01-01", "2023-12-31").unwrap();

        assert_eq!(result.total, Some(12.0 + 18.0 + 9.5 + 11.0 + 24.0 + 14.0));
        assert_eq!(result.labels.len(), result.values.len());
        assert_eq!(result.labels.len(), 6);
    }

    #[test]
    fn category_report_groups_in_first_encountered_order() {
        let result =
            category_report(&fixture(), Some("Food"), "2023-01-01", "2023-12-31").unwrap();
        // Iteration order of the fixture, not calendar order
        assert_eq!(result.labels, ["Sep", "Oct", "Apr", "Nov", "Aug", "Dec"]);
    }

    #[test]
    fn category_report_all_categories() {
        let result = category_report(&fixture(), Some("all"), "2023-01-01", "2023-12-31").unwrap();
        let expected: f64 = fixture()
            .iter()
            .filter(|e| e.date.year() == 2023)
            .map(|e| e.amount)
            .sum();
        assert_eq!(result.total, Some(expected));
    }

    #[test]
    fn category_report_range_is_inclusive() {
        let result =
            category_report(&fixture(), Some("Food"), "2023-09-10", "2023-09-10").unwrap();
        assert_eq!(result.total, Some(12.0));
    }

    #[test]
    fn category_report_empty_set_is_not_an_error() {
        let result = category_report(&[], Some("Food"), "2023-01-01", "2023-12-31").unwrap();
        assert!(result.labels.is_empty());
        assert!(result.values.is_empty());
        assert_eq!(result.total, Some(0.0));
    }

    #[test]
    fn generate_requires_both_bounds_for_category() {
        let request = ReportRequest {
            kind: ReportKind::Category,
            category: Some("Food".into()),
            start_date: Some("2023-01-01".into()),
            end_date: None,
        };
        let today = dates::parse("2023-11-15").unwrap();
        assert!(matches!(
            generate(&fixture(), &request, today),
            Err(Error::MissingDateRange)
        ));

        let request = ReportRequest {
            kind: ReportKind::Category,
            category: Some("Food".into()),
            start_date: Some("".into()),
            end_date: Some("2023-12-31".into()),
        };
        assert!(matches!(
            generate(&fixture(), &request, today),
            Err(Error::MissingDateRange)
        ));
    }

    #[test]
    fn month_comparison_totals() {
        let today = dates::parse("2023-11-15").unwrap();
        let result = month_comparison(&fixture(), today);

        // November 2023: 11.0; October 2023: 45.0 + 18.0
        assert_eq!(result.current_total, Some(11.0));
        assert_eq!(result.previous_total, Some(63.0));
        assert_eq!(result.difference, Some(11.0 - 63.0));
        assert_eq!(result.labels, ["Current Month", "Previous Month"]);
        assert_eq!(result.values, [11.0, 63.0]);
        assert_eq!(result.current_label.as_deref(), Some("November 2023"));
        assert_eq!(result.previous_label.as_deref(), Some("October 2023"));
    }

    #[test]
    fn month_comparison_rolls_year_boundary() {
        let expenses = vec![
            expense(1, "Food", 10.0, "2024-01-05"),
            expense(2, "Food", 40.0, "2023-12-20"),
        ];
        let today = dates::parse("2024-01-15").unwrap();
        let result = month_comparison(&expenses, today);

        assert_eq!(result.current_total, Some(10.0));
        assert_eq!(result.previous_total, Some(40.0));
        assert_eq!(result.previous_label.as_deref(), Some("December 2023"));
    }

    #[test]
    fn percentage_change_is_zero_when_previous_is_zero() {
        let expenses = vec![expense(1, "Food", 50.0, "2023-11-02")];
        let today = dates::parse("2023-11-15").unwrap();
        let result = month_comparison(&expenses, today);

        assert_eq!(result.previous_total, Some(0.0));
        assert_eq!(result.percentage_change, Some(0.0));
    }

    #[test]
    fn year_comparison_totals() {
        let today = dates::parse("2023-11-15").unwrap();
        let result = year_comparison(&fixture(), today);

        let current: f64 = fixture()
            .iter()
            .filter(|e| e.date.year() == 2023)
            .map(|e| e.amount)
            .sum();
        let previous: f64 = fixture()
            .iter()
            .filter(|e| e.date.year() == 2022)
            .map(|e| e.amount)
            .sum();

        assert_eq!(result.current_total, Some(current));
        assert_eq!(result.previous_total, Some(previous));
        assert_eq!(result.current_label.as_deref(), Some("2023"));
        assert_eq!(result.previous_label.as_deref(), Some("2022"));
        let change = (current - previous) / previous * 100.0;
        assert!((result.percentage_change.unwrap() - change).abs() < 1e-9);
    }

    #[test]
    fn generate_dispatches_on_kind() {
        let today = dates::parse("2023-11-15").unwrap();
        let request = ReportRequest::comparison(ReportKind::YearComparison);
        let result = generate(&fixture(), &request, today).unwrap();
        assert_eq!(result.kind, ReportKind::YearComparison);
    }
}
