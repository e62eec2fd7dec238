use std::fmt;

use serde::Serialize;

use crate::ArticleError;

/// The user-supplied topic that drives every generated section.
///
/// The text is kept exactly as entered; the only rule is that it must
/// contain something other than whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Keyword(String);

impl Keyword {
    pub fn parse(input: &str) -> Result<Self, ArticleError> {
        if input.trim().is_empty() {
            return Err(ArticleError::EmptyKeyword);
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
