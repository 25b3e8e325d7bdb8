//! Dictionary lookups against the public definition API, plus the small
//! locally persisted history of recent searches.

use crate::config::AppConfig;
use crate::prefs::{PreferenceStore, RECENT_SEARCHES};
use crate::query::Record;
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of recent searches kept
pub const RECENT_SEARCH_CAP: usize = 5;

/// One dictionary entry returned by the definition API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionEntry {
    pub word: String,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    #[serde(default, rename = "sourceUrls")]
    pub source_urls: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

/// Lookup failures
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The API answered 404 for the term
    #[error("\"{term}\" ka matlab nahi mila. Spelling sahi se likh bhai!")]
    NotFound { term: String },

    /// Any other non-success status
    #[error("Failed to fetch definition")]
    Failed(u16),

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

const FUNNY_NO_RESULTS: [&str; 6] = [
    "Abe yaar, dhang se type kar! English aati hai ya nahi?",
    "Kya likha hai tune? Samajh nahi aa raha!",
    "Dictionary me dhang se dekh, ye kya bakwas likha hai?",
    "Spelling galat hai, class 2 wali spelling mistake mat kar!",
    "Itna bhi nahi aata? Exam me fail ho jayega pakka!",
    "Aajkal ke bacche, basic words bhi nahi aate!",
];

/// One of the canned no-result quips, picked at random
pub fn random_funny_message() -> &'static str {
    let idx = rand::thread_rng().gen_range(0..FUNNY_NO_RESULTS.len());
    FUNNY_NO_RESULTS[idx]
}

/// First definition of the first meaning, the text snippeted into the
/// recent-search history
pub fn first_definition(entries: &[DefinitionEntry]) -> Option<String> {
    let meaning = entries.first()?.meanings.first()?;
    Some(
        meaning
            .definitions
            .first()
            .map(|d| d.definition.clone())
            .unwrap_or_else(|| "No definition found".to_string()),
    )
}

/// HTTP client for the definition API
pub struct DictionaryClient {
    base_url: String,
    client: reqwest::Client,
}

impl DictionaryClient {
    pub fn new(config: &AppConfig) -> DictionaryClient {
        DictionaryClient {
            base_url: config.dictionary_api_url.clone(),
            client: reqwest::Client::new(),
        }
    }

    /// Look up an English term
    ///
    /// A blank term short-circuits to an empty result. A 404 becomes
    /// [`DictionaryError::NotFound`]; any other failure status becomes the
    /// generic [`DictionaryError::Failed`].
    pub async fn lookup(&self, term: &str) -> Result<Vec<DefinitionEntry>, DictionaryError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/{}", self.base_url, urlencoding::encode(term));
        let response = self.client.get(&url).send().await?;

        match response.status().as_u16() {
            200..=299 => Ok(response.json().await?),
            404 => Err(DictionaryError::NotFound {
                term: term.to_string(),
            }),
            status => Err(DictionaryError::Failed(status)),
        }
    }
}

/// One remembered dictionary lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentSearch {
    pub term: String,
    pub timestamp: String,
    pub snippet: String,
}

impl Record for RecentSearch {
    fn category(&self) -> &str {
        // Recent searches have no categorical field; only the "all"
        // sentinel matches them.
        ""
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.term, &self.snippet]
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "term" => Some(self.term.clone()),
            "timestamp" => Some(self.timestamp.clone()),
            "snippet" => Some(self.snippet.clone()),
            _ => None,
        }
    }
}

/// Bounded, deduplicated history of successful lookups
///
/// Capped at [`RECENT_SEARCH_CAP`] entries, newest first; recording a term
/// that is already present moves it to the front instead of duplicating it.
/// The list is loaded from the preference store once at construction and
/// written back after every change.
pub struct RecentSearches<S: PreferenceStore> {
    store: S,
    entries: Vec<RecentSearch>,
}

impl<S: PreferenceStore> RecentSearches<S> {
    pub fn load(store: S) -> RecentSearches<S> {
        let entries = store
            .get(RECENT_SEARCHES)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default();

        RecentSearches { store, entries }
    }

    pub fn list(&self) -> &[RecentSearch] {
        &self.entries
    }

    /// Record a successful lookup
    ///
    /// The snippet is the definition cut to 100 characters with a trailing
    /// ellipsis, mirroring what the list view displays.
    pub fn record(&mut self, term: &str, definition: &str) -> Result<(), String> {
        let snippet: String = definition.chars().take(100).collect();
        let entry = RecentSearch {
            term: term.to_string(),
            timestamp: Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            snippet: format!("{}...", snippet),
        };

        self.entries.retain(|s| s.term != term);
        self.entries.insert(0, entry);
        self.entries.truncate(RECENT_SEARCH_CAP);

        let json = serde_json::to_string(&self.entries)
            .map_err(|_| "Failed to serialize recent searches".to_string())?;
        self.store.set(RECENT_SEARCHES, &json)
    }
}
