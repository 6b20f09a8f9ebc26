use serde::Deserialize;

/// One entry returned by the dictionary API.
///
/// The API may answer with several entries for the same spelling (heteronyms),
/// each of them deserializes into its own `Word`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Word {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<WordMeaning>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMeaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<WordDefinition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WordDefinition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

impl Word {
    /// The phonetic spelling to show next to the word.
    ///
    /// Prefers the entry level `phonetic`, then the first variant with text.
    pub fn display_phonetic(&self) -> Option<&str> {
        non_empty(&self.phonetic).or_else(|| {
            self.phonetics
                .iter()
                .find_map(|phonetic| non_empty(&phonetic.text))
        })
    }

    /// First pronunciation recording among the phonetic variants.
    pub fn audio_url(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .find_map(|phonetic| non_empty(&phonetic.audio))
    }
}
