use crate::models::Usage;
use crate::openai::types::TextResponseContent;
use crate::prompt::strip_blank_lines;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use std::fmt;

/// One generated completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answer {
    text: String,
    finish_reason: String,
}

impl Answer {
    /// Trims the text and drops whitespace-only lines. Missing values become `""`.
    pub fn new(text: Option<&str>, finish_reason: Option<&str>) -> Self {
        Self {
            text: text.map(|t| strip_blank_lines(t.trim())).unwrap_or_default(),
            finish_reason: finish_reason.map(str::trim).unwrap_or_default().to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn finish_reason(&self) -> &str {
        &self.finish_reason
    }

    /// Text with a line break after every period.
    pub fn format(&self) -> String {
        self.text.replace('.', ".\n")
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Completions returned for one text request, ordered by choice index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextResponse {
    created: i64,
    answers: Vec<Answer>,
    model: String,
    usage: Usage,
}

impl TextResponse {
    pub fn new(created: i64, answers: Vec<Answer>, model: String, usage: Usage) -> Self {
        Self {
            created,
            answers,
            model,
            usage,
        }
    }

    /// Place every choice at its reported index.
    ///
    /// Indices must cover `0..choices.len()` exactly once; anything else is an
    /// [`Error::Integrity`]. A payload without choices gives an empty response.
    pub fn generate(content: TextResponseContent) -> Result<Self> {
        let choices = content.choices.unwrap_or_default();
        let count = choices.len();
        let mut slots: Vec<Option<Answer>> = vec![None; count];

        for choice in choices {
            let slot = usize::try_from(choice.index)
                .ok()
                .and_then(|index| slots.get_mut(index))
                .ok_or_else(|| {
                    Error::Integrity(format!(
                        "choice index {} out of range for {} choices",
                        choice.index, count
                    ))
                })?;
            if slot.is_some() {
                return Err(Error::Integrity(format!(
                    "duplicate choice index {}",
                    choice.index
                )));
            }
            *slot = Some(Answer::new(
                choice.text.as_deref(),
                choice.finish_reason.as_deref(),
            ));
        }

        // Every index is in range and unique, so every slot is filled.
        let answers = slots.into_iter().flatten().collect();

        Ok(Self::new(
            content.created,
            answers,
            content.model.unwrap_or_default(),
            content.usage.unwrap_or_default(),
        ))
    }

    /// Creation time as epoch seconds.
    pub fn created(&self) -> i64 {
        self.created
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created, 0)
    }

    /// Text of the first answer.
    pub fn response(&self) -> Option<&str> {
        self.answers.first().map(Answer::text)
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Answer> {
        self.answers.iter()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// True for soft failures (non-2xx status) and for payloads without choices.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn usage(&self) -> &Usage {
        &self.usage
    }

    /// Answers followed by the model name and token usage.
    pub fn output(&self) -> String {
        format!("{}{}\n{}", self, self.model, self.usage)
    }
}

impl<'a> IntoIterator for &'a TextResponse {
    type Item = &'a Answer;
    type IntoIter = std::slice::Iter<'a, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TextResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for answer in &self.answers {
            writeln!(f, "{}", answer)?;
        }
        Ok(())
    }
}
