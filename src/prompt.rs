//! Ordered prompt container
//!
//! A single string may carry several prompts joined by [`Prompt::SPLIT`].
//! Index 0 is the primary prompt; the order here is the order of the
//! `index` field on generated choices.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prompt {
    prompts: Vec<String>,
}

impl Prompt {
    /// Reserved token separating prompts inside one string.
    pub const SPLIT: &'static str = "<prompt_split>";

    /// Split `text` on [`Prompt::SPLIT`]. Text without the token yields one prompt.
    pub fn from_delimited(text: &str) -> Self {
        Self {
            prompts: split_by_token(text),
        }
    }

    pub fn from_string(text: impl AsRef<str>) -> Self {
        Self::from_delimited(text.as_ref())
    }

    pub fn from_list<I, S>(prompts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prompts: prompts.into_iter().map(Into::into).collect(),
        }
    }

    /// Split `text` the same way as [`Prompt::from_delimited`] and push the
    /// segments after the existing prompts.
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.prompts.extend(split_by_token(text));
        self
    }

    /// First prompt, or `""` when there are none.
    pub fn primary(&self) -> &str {
        self.prompts.first().map(String::as_str).unwrap_or_default()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.prompts
    }

    pub fn to_list(&self) -> Vec<String> {
        self.prompts.clone()
    }

    pub fn into_list(self) -> Vec<String> {
        self.prompts
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.prompts.iter()
    }
}

impl From<&str> for Prompt {
    fn from(text: &str) -> Self {
        Self::from_delimited(text)
    }
}

impl From<String> for Prompt {
    fn from(text: String) -> Self {
        Self::from_delimited(&text)
    }
}

impl From<Vec<String>> for Prompt {
    fn from(prompts: Vec<String>) -> Self {
        Self { prompts }
    }
}

impl<S: Into<String>> FromIterator<S> for Prompt {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_list(iter)
    }
}

impl<'a> IntoIterator for &'a Prompt {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prompts.join(Self::SPLIT))
    }
}

fn split_by_token(text: &str) -> Vec<String> {
    text.split(Prompt::SPLIT).map(strip_blank_lines).collect()
}

/// Drop lines that are empty or whitespace only. Other lines are kept as-is.
///
/// The kept lines are rejoined with `\n`, so `\r\n` endings become `\n` and a
/// trailing newline is dropped.
pub(crate) fn strip_blank_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
