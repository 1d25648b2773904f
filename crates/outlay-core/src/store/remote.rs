//! Remote REST store

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::dates;
use crate::error::{Error, Result};
use crate::models::{Expense, NewExpense, ReportRequest, ReportResult};
use crate::reports;

/// Client for a remote expense API.
///
/// Wire dates are tolerated in any supported format; unparseable ones
/// collapse to the sentinel date instead of failing the whole fetch.
pub struct RemoteStore {
    client: reqwest::Client,
    base_url: String,
}

/// An expense as some servers send it: raw date text, possibly no id.
#[derive(Debug, Deserialize)]
struct WireExpense {
    #[serde(default)]
    id: Option<i64>,
    category: String,
    amount: f64,
    date: String,
}

impl WireExpense {
    fn into_expense(self, fallback_id: i64) -> Expense {
        Expense {
            id: self.id.unwrap_or(fallback_id),
            category: self.category,
            amount: self.amount,
            date: dates::parse_or_sentinel(&self.date),
        }
    }
}

/// The report endpoint answers in one of two shapes: a finished
/// aggregation, or the raw matching expenses for the client to aggregate
/// itself. Both are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReportResponse {
    Aggregated(ReportResult),
    Raw { expenses: Vec<WireExpense> },
}

impl RemoteStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL for one category, with the name percent-encoded as a path
    /// segment so `/`, spaces, and `#` survive the trip.
    fn category_url(&self, name: &str) -> Result<String> {
        let mut url = reqwest::Url::parse(&self.url("/api/categories"))
            .map_err(|e| Error::RemoteUnavailable(format!("invalid base url: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| Error::RemoteUnavailable("base url cannot carry paths".into()))?
            .push(name);
        Ok(url.into())
    }

    /// Map a non-success status to an error before deserializing.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RemoteUnavailable(format!("{status}: {body}")));
        }
        Ok(response)
    }

    pub async fn list_expenses(&self) -> Result<Vec<Expense>> {
        let response = self.client.get(self.url("/api/expenses")).send().await?;
        let wire: Vec<WireExpense> = Self::check(response).await?.json().await?;
        debug!(count = wire.len(), "fetched remote expenses");
        Ok(wire
            .into_iter()
            .enumerate()
            .map(|(i, w)| w.into_expense(i as i64 + 1))
            .collect())
    }

    pub async fn add_expense(&self, new: &NewExpense) -> Result<Expense> {
        let response = self
            .client
            .post(self.url("/api/expenses"))
            .json(new)
            .send()
            .await?;
        let wire: WireExpense = Self::check(response).await?.json().await?;
        Ok(wire.into_expense(0))
    }

    pub async fn delete_expense(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/expenses/{id}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn list_categories(&self) -> Result<Vec<String>> {
        let response = self.client.get(self.url("/api/categories")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn add_category(&self, name: &str) -> Result<()> {
        let response = self
            .client
            .post(self.url("/api/categories"))
            .json(&serde_json::json!({ "category": name }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn delete_category(&self, name: &str) -> Result<()> {
        let response = self.client.delete(self.category_url(name)?).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Request a report. When the server answers with raw expenses
    /// instead of a finished aggregation, the aggregation runs here.
    pub async fn generate_report(
        &self,
        request: &ReportRequest,
        today: NaiveDate,
    ) -> Result<ReportResult> {
        let response = self
            .client
            .post(self.url("/api/reports"))
            .json(request)
            .send()
            .await?;
        let parsed: ReportResponse = Self::check(response).await?.json().await?;
        match parsed {
            ReportResponse::Aggregated(result) => Ok(result),
            ReportResponse::Raw { expenses } => {
                debug!(count = expenses.len(), "aggregating raw report response");
                let expenses: Vec<Expense> = expenses
                    .into_iter()
                    .enumerate()
                    .map(|(i, w)| w.into_expense(i as i64 + 1))
                    .collect();
                reports::generate(&expenses, request, today)
            }
        }
    }
}
