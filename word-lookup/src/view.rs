use dictionary::{Word, WordMeaning};

pub const MAX_DEFINITIONS: usize = 3;
pub const MAX_RELATED_TERMS: usize = 5;

/// Something the user can trigger from a rendered result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Look the term up as if it had been typed in.
    Search(String),
    PlayAudio(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordView {
    pub word: String,
    pub phonetic: Option<String>,
    pub audio: Option<Action>,
    pub meanings: Vec<MeaningView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeaningView {
    pub part_of_speech: String,
    pub definitions: Vec<DefinitionView>,
    pub synonyms: Option<TagBlock>,
    pub antonyms: Option<TagBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionView {
    /// Starts at 1.
    pub number: usize,
    pub text: String,
    pub example: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBlock {
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub term: String,
    pub action: Action,
}

impl WordView {
    /// Selectable terms in the order they are displayed.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.meanings.iter().flat_map(|meaning| {
            meaning
                .synonyms
                .iter()
                .chain(meaning.antonyms.iter())
                .flat_map(|block| block.tags.iter().map(|tag| &tag.action))
        })
    }
}

pub fn render(word: &Word) -> WordView {
    WordView {
        word: word.word.clone(),
        phonetic: word.display_phonetic().map(str::to_owned),
        audio: word
            .audio_url()
            .map(|url| Action::PlayAudio(url.to_owned())),
        meanings: word.meanings.iter().map(render_meaning).collect(),
    }
}

fn render_meaning(meaning: &WordMeaning) -> MeaningView {
    let definitions = meaning
        .definitions
        .iter()
        .take(MAX_DEFINITIONS)
        .enumerate()
        .map(|(index, definition)| DefinitionView {
            number: index + 1,
            text: definition.definition.clone(),
            example: definition.example.clone(),
        })
        .collect();
    MeaningView {
        part_of_speech: meaning.part_of_speech.clone(),
        definitions,
        synonyms: tag_block(&meaning.synonyms),
        antonyms: tag_block(&meaning.antonyms),
    }
}

fn tag_block(terms: &[String]) -> Option<TagBlock> {
    if terms.is_empty() {
        return None;
    }
    let tags = terms
        .iter()
        .take(MAX_RELATED_TERMS)
        .map(|term| Tag {
            term: term.clone(),
            action: Action::Search(term.clone()),
        })
        .collect();
    Some(TagBlock { tags })
}
