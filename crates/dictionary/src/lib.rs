use dictionary_api::get_entries;
use url::Url;

mod dictionary;
mod dictionary_api;

pub use dictionary::{Phonetic, Word, WordDefinition, WordMeaning};
pub use reqwest::StatusCode;

/// Base address of the free dictionary API, English entries.
pub const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary API: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("unexpected dictionary response: {0}")]
    Deserialize(#[source] serde_json::Error),
    #[error("dictionary API answered with status {0}")]
    Status(StatusCode),
    #[error("dictionary API returned no entries")]
    EmptyResponse,
    #[error(transparent)]
    NotFound(NotFoundError),
    #[error("invalid dictionary API url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl DictionaryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DictionaryError::NotFound(_))
    }
}

/// The API's explanation of a failed lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{title}: {message}")]
pub struct NotFoundError {
    pub title: String,
    pub message: String,
}

impl NotFoundError {
    pub fn for_word(word: &str) -> Self {
        Self {
            title: "No Definitions Found".to_owned(),
            message: format!("No definitions were found for {word:?}."),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dictionary {
    client: reqwest::Client,
    base_url: Url,
}

impl Dictionary {
    /// Client for the public API at [`DEFAULT_API_URL`].
    pub fn new() -> Result<Self, DictionaryError> {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Points the client at another deployment of the API.
    pub fn with_base_url(base_url: &str) -> Result<Self, DictionaryError> {
        let invalid = |reason: String| DictionaryError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason,
        };
        let parsed = Url::parse(base_url).map_err(|error| invalid(error.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("url cannot hold path segments".to_owned()));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Every entry the API knows for `word`, in the order it sent them.
    pub async fn get_entries(&self, word: &str) -> Result<Vec<Word>, DictionaryError> {
        get_entries(&self.client, &self.base_url, word).await
    }

    /// The first entry for `word`.
    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        self.get_entries(word)
            .await?
            .into_iter()
            .next()
            .ok_or(DictionaryError::EmptyResponse)
    }
}
