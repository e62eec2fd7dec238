use std::fmt;

use serde::Serialize;

/// One kind of content the completion service is asked for.
/// Declaration order is call order and concatenation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Structure,
    Title,
    Cta,
    Hashtags,
    Seo,
}

impl Capability {
    pub const ALL: [Capability; 5] = [
        Capability::Structure,
        Capability::Title,
        Capability::Cta,
        Capability::Hashtags,
        Capability::Seo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Structure => "structure",
            Capability::Title => "title",
            Capability::Cta => "cta",
            Capability::Hashtags => "hashtags",
            Capability::Seo => "seo",
        }
    }

    /// Heading placed above this capability's result in the combined text.
    /// The outline itself is not given one.
    pub fn section_heading(&self) -> Option<&'static str> {
        match self {
            Capability::Structure => None,
            Capability::Title => Some("📝 タイトル案"),
            Capability::Cta => Some("📢 CTA文"),
            Capability::Hashtags => Some("🔖 ハッシュタグ"),
            Capability::Seo => Some("🧠 SEO情報"),
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully assembled instruction for one capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptRequest {
    pub capability: Capability,
    pub text: String,
}

impl PromptRequest {
    pub fn new(capability: Capability, text: impl Into<String>) -> Self {
        Self {
            capability,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_structure_has_no_heading() {
        for cap in Capability::ALL {
            assert_eq!(cap.section_heading().is_none(), cap == Capability::Structure);
        }
    }

    #[test]
    fn all_is_sorted() {
        let mut sorted = Capability::ALL;
        sorted.sort();
        assert_eq!(sorted, Capability::ALL);
    }
}
