use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use replay_core::DailyClose;

use crate::error::{FetchError, FetchResult};
use crate::HistorySource;

#[derive(Debug, Clone, Serialize)]
struct HistoryRequest<'a> {
    #[serde(rename = "stockSymbol")]
    stock_symbol: &'a str,
    period: &'a str,
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Close")]
    close: f64,
}

/// The endpoint answers with either an ordered row array or an error object;
/// the error object also rides on a 404 status.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HistoryResponse {
    Rows(Vec<HistoryRow>),
    Failure { error: String },
}

#[derive(Clone)]
pub struct HistoryClient {
    client: reqwest::Client,
    base_url: String,
}

impl HistoryClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    /// Fetch daily closes for `symbol` over `period` (e.g. "1y").
    pub async fn daily_closes(&self, symbol: &str, period: &str) -> FetchResult<Vec<DailyClose>> {
        let response = self
            .client
            .post(format!("{}/api/historical_data", self.base_url))
            .json(&HistoryRequest {
                stock_symbol: symbol,
                period,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        decode_history(status, &body)
    }
}

fn decode_history(status: StatusCode, body: &str) -> FetchResult<Vec<DailyClose>> {
    match serde_json::from_str::<HistoryResponse>(body) {
        Ok(HistoryResponse::Rows(rows)) if status.is_success() => Ok(rows
            .into_iter()
            .map(|row| DailyClose {
                date: row.date,
                close: row.close,
            })
            .collect()),
        Ok(HistoryResponse::Failure { error }) => Err(FetchError::Upstream(error)),
        Ok(HistoryResponse::Rows(_)) => Err(FetchError::Status(status)),
        Err(err) if status.is_success() => Err(FetchError::InvalidResponse(err)),
        Err(_) => Err(FetchError::Status(status)),
    }
}

#[async_trait]
impl HistorySource for HistoryClient {
    async fn fetch_closes(&self, symbol: &str, period: &str) -> FetchResult<Vec<DailyClose>> {
        self.daily_closes(symbol, period).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_row_array() {
        let body = r#"[{"Date":"2024-01-02","Close":185.64},{"Date":"2024-01-03","Close":184.25}]"#;
        let rows = decode_history(StatusCode::OK, body).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "2024-01-02");
        assert_eq!(rows[0].close, 185.64);
    }

    #[test]
    fn test_error_object_wins_regardless_of_status() {
        let body = r#"{"error":"Could not fetch historical data"}"#;
        for status in [StatusCode::OK, StatusCode::NOT_FOUND] {
            let err = decode_history(status, body).unwrap_err();
            assert!(
                matches!(err, FetchError::Upstream(msg) if msg == "Could not fetch historical data")
            );
        }
    }

    #[test]
    fn test_undecodable_body_maps_to_status_or_parse_error() {
        assert!(matches!(
            decode_history(StatusCode::INTERNAL_SERVER_ERROR, "oops"),
            Err(FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR))
        ));
        assert!(matches!(
            decode_history(StatusCode::OK, "oops"),
            Err(FetchError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_empty_array_is_an_empty_table() {
        assert!(decode_history(StatusCode::OK, "[]").unwrap().is_empty());
    }
}
