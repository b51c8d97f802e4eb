//! Lyrics metadata
//!
//! Optional descriptive header attached when a document is exported in
//! "lyrics" mode: title and singer plus three freeform classical-music
//! fields (raag, taal, beat).

use serde::{Deserialize, Serialize};

/// Order of header fields is fixed; empty fields are omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricsMetadata {
    pub title: String,
    pub singer: String,
    #[serde(default)]
    pub raag: Option<String>,
    #[serde(default)]
    pub taal: Option<String>,
    #[serde(default)]
    pub beat: Option<String>,
}

impl LyricsMetadata {
    pub fn new(title: impl Into<String>, singer: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            singer: singer.into(),
            ..Default::default()
        }
    }

    pub fn with_raag(mut self, raag: impl Into<String>) -> Self {
        self.raag = Some(raag.into());
        self
    }

    pub fn with_taal(mut self, taal: impl Into<String>) -> Self {
        self.taal = Some(taal.into());
        self
    }

    pub fn with_beat(mut self, beat: impl Into<String>) -> Self {
        self.beat = Some(beat.into());
        self
    }

    /// Present fields as `(label, value)` pairs in fixed order:
    /// Title, Singer, Raag, Taal, Beat. Empty values are skipped.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("Title", Some(self.title.as_str())),
            ("Singer", Some(self.singer.as_str())),
            ("Raag", self.raag.as_deref()),
            ("Taal", self.taal.as_deref()),
            ("Beat", self.beat.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .filter(|v| !v.is_empty())
                .map(|v| (label, v))
        })
        .collect()
    }

    /// Present fields formatted as `"Label: value"` lines
    pub fn header_lines(&self) -> Vec<String> {
        self.fields()
            .into_iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect()
    }

    /// The full header block: one line per present field, then a blank line.
    /// Empty when no field is present.
    pub fn header_block(&self) -> String {
        let lines = self.header_lines();
        if lines.is_empty() {
            return String::new();
        }
        let mut block = lines.join("\n");
        block.push_str("\n\n");
        block
    }
}
