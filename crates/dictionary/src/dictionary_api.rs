use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use crate::{DictionaryError, NotFoundError, Word};

/// Body the API sends along with a 404.
#[derive(Deserialize)]
struct NotFoundBody {
    title: String,
    message: String,
}

/// `<base>/<word>`, with the word as a single encoded path segment.
pub(crate) fn entry_url(base: &Url, word: &str) -> Url {
    let mut url = base.clone();
    // base urls are checked to be hierarchical when the client is built
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(word);
    }
    url
}

pub(crate) async fn get_entries(
    client: &reqwest::Client,
    base: &Url,
    word: &str,
) -> Result<Vec<Word>, DictionaryError> {
    let url = entry_url(base, word);
    tracing::debug!(%url, "requesting dictionary entries");
    let res = client
        .get(url)
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    let status = res.status();
    if status == StatusCode::NOT_FOUND {
        // the status alone decides; the explanation is optional
        let body = res.text().await.unwrap_or_default();
        return Err(DictionaryError::NotFound(not_found(word, &body)));
    }
    if !status.is_success() {
        tracing::debug!(%status, "dictionary API refused the lookup");
        return Err(DictionaryError::Status(status));
    }
    let body = res.text().await.map_err(DictionaryError::Fetch)?;
    serde_json::from_str(&body).map_err(DictionaryError::Deserialize)
}

fn not_found(word: &str, body: &str) -> NotFoundError {
    match serde_json::from_str::<NotFoundBody>(body) {
        Ok(body) => NotFoundError {
            title: body.title,
            message: body.message,
        },
        Err(_) => NotFoundError::for_word(word),
    }
}
