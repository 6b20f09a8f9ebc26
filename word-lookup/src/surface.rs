use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::view::{TagBlock, WordView};

/// Where the controller puts its output.
pub trait Surface: Send + Sync {
    /// Clears the previous result and shows the loading indicator.
    fn show_loading(&self);
    fn hide_loading(&self);
    fn show_result(&self, view: &WordView);
    fn show_error(&self, message: &str);
}

/// Line oriented surface for an interactive terminal.
pub struct TerminalSurface<W> {
    out: Mutex<W>,
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            spinner: Mutex::new(None),
        }
    }

    #[cfg(test)]
    pub fn spinner(&self) -> Option<ProgressBar> {
        self.spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(error) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!("failed to write to the terminal: {error}");
        }
    }
}

impl<W: Write + Send> Surface for TerminalSurface<W> {
    fn show_loading(&self) {
        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message("Searching...");
        let previous = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(bar);
        if let Some(previous) = previous {
            previous.finish_and_clear();
        }
    }

    fn hide_loading(&self) {
        let bar = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(bar) = bar {
            bar.finish_and_clear();
        }
    }

    fn show_result(&self, view: &WordView) {
        self.write(&format_view(view));
    }

    fn show_error(&self, message: &str) {
        self.write(&format!("! {message}\n"));
    }
}

/// Plain text rendering of a result.
///
/// Synonyms and antonyms are prefixed with `[n]`, numbered across the whole
/// view in the same order as [`WordView::actions`].
pub fn format_view(view: &WordView) -> String {
    let mut text = String::new();
    text.push_str(&view.word);
    if let Some(phonetic) = &view.phonetic {
        let _ = write!(text, "  {phonetic}");
    }
    if view.audio.is_some() {
        text.push_str("  [play]");
    }
    text.push('\n');

    let mut tag_number = 0;
    for meaning in &view.meanings {
        let _ = writeln!(text, "\n{}", meaning.part_of_speech);
        for definition in &meaning.definitions {
            let _ = writeln!(text, "  {}. {}", definition.number, definition.text);
            if let Some(example) = &definition.example {
                let _ = writeln!(text, "     \"{example}\"");
            }
        }
        format_tags(&mut text, "Synonyms", &meaning.synonyms, &mut tag_number);
        format_tags(&mut text, "Antonyms", &meaning.antonyms, &mut tag_number);
    }
    text
}

fn format_tags(text: &mut String, label: &str, block: &Option<TagBlock>, tag_number: &mut usize) {
    let Some(block) = block else {
        return;
    };
    let _ = write!(text, "  {label}:");
    for tag in &block.tags {
        *tag_number += 1;
        let _ = write!(text, " [{}] {}", tag_number, tag.term);
    }
    text.push('\n');
}
