use std::borrow::Cow;

use regex::Regex;

/// Primitive an enum type is exposed as outside its declaring contract.
pub const ENUM_PRIMITIVE: &str = "uint8";

/// Rewrites enum type names to [`ENUM_PRIMITIVE`].
///
/// Names only match as whole words, so `StateMachine` is left alone when
/// `State` is an enum.
#[derive(Debug)]
pub struct EnumSubstitution {
    pattern: Option<Regex>,
}

impl EnumSubstitution {
    pub fn new<'a, I>(names: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let alternatives: Vec<String> = names
            .into_iter()
            .filter(|name| !name.is_empty())
            .map(regex::escape)
            .collect();

        if alternatives.is_empty() {
            return Ok(Self::identity());
        }

        let pattern = Regex::new(&format!(r"\b(?:{})\b", alternatives.join("|")))?;
        Ok(EnumSubstitution {
            pattern: Some(pattern),
        })
    }

    pub fn identity() -> Self {
        EnumSubstitution { pattern: None }
    }

    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.pattern {
            Some(pattern) => pattern.replace_all(text, ENUM_PRIMITIVE),
            None => Cow::Borrowed(text),
        }
    }
}
