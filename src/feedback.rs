//! Client for the remote feedback store: a SheetDB-style spreadsheet HTTP
//! API holding one flat row per feedback submission.
//!
//! The store is external and unauthenticated. Its contract:
//! - `GET <base>?sheet=Sheet1` returns a JSON array of row objects
//! - `POST <base>` with body `{ "data": [row] }` appends a row
//! - `DELETE <base>/timestamp/<urlencoded-timestamp>` removes the row whose
//!   timestamp matches exactly (the timestamp is the de facto primary key)
//!
//! When the configured base URL is still the placeholder the store runs in
//! development mode: fetches answer with generated sample rows, writes and
//! deletes succeed without touching the network, and a warning is logged.

use crate::config::{AppConfig, PLACEHOLDER_SHEETDB_URL};
use crate::downloader::Exportable;
use crate::query::Record;
use chrono::{Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed feedback category enumeration (the `"all"` sentinel is a
/// filter value only and never stored in a row)
pub const FEEDBACK_CATEGORIES: [&str; 4] = ["general", "bug", "feature", "content"];

/// Literal stored when the submitter left the email field blank
pub const EMAIL_NOT_PROVIDED: &str = "Not provided";

/// One feedback row as stored in the spreadsheet
///
/// All fields are text on the wire; the rating is a text-encoded integer
/// 1–5 and stays text end to end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRow {
    pub name: String,
    pub rating: String,
    pub category: String,
    pub message: String,
    pub email: String,
    pub timestamp: String,
}

impl Record for FeedbackRow {
    fn category(&self) -> &str {
        &self.category
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.message, &self.email]
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "name" => Some(self.name.clone()),
            "rating" => Some(self.rating.clone()),
            "category" => Some(self.category.clone()),
            "message" => Some(self.message.clone()),
            "email" => Some(self.email.clone()),
            "timestamp" => Some(self.timestamp.clone()),
            _ => None,
        }
    }

    // The rating is single-digit, so textual comparison orders it correctly
    // and matches the stored representation.
}

impl Exportable for FeedbackRow {
    fn field_names() -> &'static [&'static str] {
        &["name", "rating", "category", "message", "email", "timestamp"]
    }

    fn field_values(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.rating.clone(),
            self.category.clone(),
            self.message.clone(),
            self.email.clone(),
            self.timestamp.clone(),
        ]
    }
}

/// A feedback form submission, before validation
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackSubmission {
    pub name: String,
    pub rating: u8,
    #[serde(default)]
    pub category: String,
    pub message: String,
    #[serde(default)]
    pub email: String,
}

/// Validation failures for a feedback submission
///
/// Raised entirely client-side, before any network call; each message names
/// the field that is missing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please rate your experience before submitting!")]
    MissingRating,
    #[error("Please enter your name!")]
    MissingName,
    #[error("Please provide some feedback message!")]
    MissingMessage,
}

impl FeedbackSubmission {
    /// Validate the submission and turn it into a storable row
    ///
    /// Checks rating (present and 1–5), name and message. The email is
    /// optional and replaced by the `"Not provided"` literal when blank;
    /// the category defaults to `general`; the timestamp is stamped here
    /// in ISO-8601 with millisecond precision.
    pub fn into_row(self) -> Result<FeedbackRow, ValidationError> {
        if self.rating == 0 || self.rating > 5 {
            return Err(ValidationError::MissingRating);
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::MissingMessage);
        }

        let category = if self.category.is_empty() {
            "general".to_string()
        } else {
            self.category
        };
        let email = if self.email.trim().is_empty() {
            EMAIL_NOT_PROVIDED.to_string()
        } else {
            self.email
        };

        Ok(FeedbackRow {
            name: self.name,
            rating: self.rating.to_string(),
            category,
            message: self.message,
            email,
            timestamp: Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        })
    }
}

/// Failures talking to the remote store
///
/// Every variant is retryable from the caller's point of view: a failed
/// fetch leaves previously loaded rows in place, a failed delete leaves the
/// store untouched.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Error fetching data: {0}")]
    FetchStatus(u16),
    #[error("Error deleting entry: {status} - {body}")]
    DeleteStatus { status: u16, body: String },
    #[error("Network response error ({status}): {body}")]
    SubmitStatus { status: u16, body: String },
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// HTTP client for the feedback spreadsheet
pub struct FeedbackStore {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct AppendBody<'a> {
    data: [&'a FeedbackRow; 1],
}

impl FeedbackStore {
    pub fn new(config: &AppConfig) -> FeedbackStore {
        FeedbackStore {
            base_url: config.sheetdb_api_url.clone(),
            client: reqwest::Client::new(),
        }
    }

    /// Whether a real store URL has been configured
    ///
    /// The placeholder default is the development-mode sentinel: the client
    /// substitutes mock behavior instead of failing.
    pub fn is_configured(&self) -> bool {
        self.base_url != PLACEHOLDER_SHEETDB_URL
    }

    /// Fetch every row of the sheet
    pub async fn fetch_all(&self) -> Result<Vec<FeedbackRow>, StoreError> {
        if !self.is_configured() {
            log::warn!("Using mock data. Configure the SheetDB API URL for real data.");
            return Ok(mock_rows());
        }

        let url = format!("{}?sheet=Sheet1", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(StoreError::FetchStatus(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }

    /// Append one row to the sheet
    pub async fn submit(&self, row: &FeedbackRow) -> Result<(), StoreError> {
        if !self.is_configured() {
            log::warn!(
                "SheetDB API URL not configured; simulating a successful submission in development mode."
            );
            return Ok(());
        }

        let response = self
            .client
            .post(&self.base_url)
            .json(&AppendBody { data: [row] })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::SubmitStatus { status, body });
        }

        Ok(())
    }

    /// Delete the row whose timestamp field matches exactly
    pub async fn delete_by_timestamp(&self, timestamp: &str) -> Result<(), StoreError> {
        if !self.is_configured() {
            log::warn!("Using mock deletion. Configure the SheetDB API URL for real deletion.");
            return Ok(());
        }

        let url = format!(
            "{}/timestamp/{}",
            self.base_url,
            urlencoding::encode(timestamp)
        );
        log::debug!("delete url: {}", url);

        let response = self.client.delete(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::DeleteStatus { status, body });
        }

        Ok(())
    }
}

/// Sample rows for development mode, shaped like real submissions
pub fn mock_rows() -> Vec<FeedbackRow> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    (0..10)
        .map(|i| {
            let category = FEEDBACK_CATEGORIES[rng.gen_range(0..FEEDBACK_CATEGORIES.len())];
            let email = if i % 3 == 0 {
                format!("user{}@example.com", i + 1)
            } else {
                EMAIL_NOT_PROVIDED.to_string()
            };

            FeedbackRow {
                name: format!("Test User {}", i + 1),
                rating: rng.gen_range(1..=5).to_string(),
                category: category.to_string(),
                message: format!(
                    "This is a sample feedback message {}. It's just for testing purposes.",
                    i + 1
                ),
                email,
                timestamp: (now - Duration::days(i as i64))
                    .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                    .to_string(),
            }
        })
        .collect()
}
