use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use dictionary::{Dictionary, DictionaryError, Word};

use crate::audio::AudioPlayer;
use crate::surface::Surface;
use crate::view::{render, Action, WordView};

/// Source of dictionary entries.
#[async_trait]
pub trait Lookup: Send + Sync {
    async fn lookup(&self, word: &str) -> Result<Vec<Word>, DictionaryError>;
}

#[async_trait]
impl Lookup for Dictionary {
    async fn lookup(&self, word: &str) -> Result<Vec<Word>, DictionaryError> {
        self.get_entries(word).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Please enter a word")]
    EmptyInput,
    #[error("Word not found")]
    NotFound,
    #[error("Something went wrong")]
    Other,
}

impl From<&DictionaryError> for LookupError {
    fn from(error: &DictionaryError) -> Self {
        if error.is_not_found() {
            LookupError::NotFound
        } else {
            LookupError::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LookupState {
    #[default]
    Idle,
    Loading,
    Success(WordView),
    Error(LookupError),
}

/// Drives one lookup session: reads what the user asked for, fetches it and
/// puts the result on the surface.
///
/// Submissions may overlap. Each one is numbered and only the most recently
/// submitted is allowed to update the state, so a slow answer to an older
/// question never replaces a newer one.
pub struct LookupController<L, S, A> {
    lookup: L,
    surface: S,
    audio: A,
    state: Mutex<LookupState>,
    generation: AtomicU64,
}

impl<L: Lookup, S: Surface, A: AudioPlayer> LookupController<L, S, A> {
    pub fn new(lookup: L, surface: S, audio: A) -> Self {
        Self {
            lookup,
            surface,
            audio,
            state: Mutex::new(LookupState::Idle),
            generation: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> LookupState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub async fn submit(&self, raw_input: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let word = raw_input.trim();
        if word.is_empty() {
            self.fail(LookupError::EmptyInput);
            return;
        }

        self.set_state(LookupState::Loading);
        self.surface.show_loading();
        tracing::debug!(word, generation, "looking up word");

        let outcome = match self.lookup.lookup(word).await {
            Ok(entries) => match entries.into_iter().next() {
                Some(entry) => Ok(render(&entry)),
                None => {
                    tracing::warn!(word, "dictionary returned an empty entry list");
                    Err(LookupError::Other)
                }
            },
            Err(error) => {
                tracing::debug!(word, "lookup failed: {error}");
                Err(LookupError::from(&error))
            }
        };

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(word, generation, "discarding superseded lookup");
            return;
        }
        match outcome {
            Ok(view) => {
                self.surface.hide_loading();
                self.surface.show_result(&view);
                self.set_state(LookupState::Success(view));
            }
            Err(error) => self.fail(error),
        }
    }

    pub fn play_audio(&self, url: &str) {
        tracing::debug!(url, "playing pronunciation");
        self.audio.play(url);
    }

    pub async fn activate(&self, action: &Action) {
        match action {
            Action::Search(term) => self.submit(term).await,
            Action::PlayAudio(url) => self.play_audio(url),
        }
    }

    /// The `number`-th selectable term of the displayed result, from 1.
    pub fn action(&self, number: usize) -> Option<Action> {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match &*state {
            LookupState::Success(view) => view.actions().nth(number.checked_sub(1)?).cloned(),
            _ => None,
        }
    }

    /// The pronunciation of the displayed result.
    pub fn audio(&self) -> Option<Action> {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match &*state {
            LookupState::Success(view) => view.audio.clone(),
            _ => None,
        }
    }

    fn fail(&self, error: LookupError) {
        self.surface.hide_loading();
        self.surface.show_error(&error.to_string());
        self.set_state(LookupState::Error(error));
    }

    fn set_state(&self, state: LookupState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }
}
