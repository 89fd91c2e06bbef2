//! Question/answer pairs and the bounded set served to answer engines.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Fewest valid entries a set may hold. Smaller collections are absent.
pub const FAQ_MIN: usize = 3;

/// Most entries a set may hold. Larger collections are truncated.
pub const FAQ_MAX: usize = 10;

/// A single question with its answer. Both are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Result<Self> {
        let question = question.into();
        let answer = answer.into();
        if question.is_empty() {
            return Err(Error::EmptyField("question"));
        }
        if answer.is_empty() {
            return Err(Error::EmptyField("answer"));
        }
        Ok(Self { question, answer })
    }

    /// Reads an entry from a loosely-typed item.
    ///
    /// Returns `None` unless both `question` and `answer` are non-empty
    /// strings. Any other keys on the item are ignored.
    pub fn from_raw(item: &Value) -> Option<Self> {
        let question = item.get("question")?.as_str()?;
        let answer = item.get("answer")?.as_str()?;
        Self::new(question, answer).ok()
    }
}

/// Between [`FAQ_MIN`] and [`FAQ_MAX`] valid entries, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FaqSet(Vec<FaqEntry>);

impl FaqSet {
    /// Keeps the first [`FAQ_MAX`] entries; `None` if fewer than [`FAQ_MIN`].
    pub fn from_entries(entries: impl IntoIterator<Item = FaqEntry>) -> Option<Self> {
        let entries: Vec<FaqEntry> = entries.into_iter().take(FAQ_MAX).collect();
        if entries.len() < FAQ_MIN {
            return None;
        }
        Some(Self(entries))
    }

    /// Filters raw items down to valid entries, then bounds the result.
    pub fn from_raw<'a>(items: impl IntoIterator<Item = &'a Value>) -> Option<Self> {
        Self::from_entries(items.into_iter().filter_map(FaqEntry::from_raw))
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<FaqEntry> {
        self.0
    }
}

impl AsRef<[FaqEntry]> for FaqSet {
    fn as_ref(&self) -> &[FaqEntry] {
        &self.0
    }
}
