//! Directive parsing: extracting dependency declarations from unit text.
//!
//! A directive occupies its own line. Parsing yields the captured targets in
//! order of appearance (duplicates kept) and the body with every directive
//! line removed, trailing newline included.

use std::fmt;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use neuter_util::errors::NeuterError;

/// `require('x')` / `require("x")`, optionally followed by `;`.
pub const REQUIRE_PATTERN: &str =
    r#"^[ \t]*require\(['"]([^'"]*)['"]\)[ \t]*;?[ \t]*(?:\r?\n|\z)"#;

/// `minispade.require('x')`, optionally followed by `;`.
pub const MINISPADE_PATTERN: &str =
    r#"^[ \t]*minispade\.require\(['"]([^'"]*)['"]\)[ \t]*;?[ \t]*(?:\r?\n|\z)"#;

/// Sprockets-style `//= require x`.
pub const SPROCKETS_PATTERN: &str = r#"^[ \t]*//=[ \t]*require[ \t]+(\S+)[ \t]*(?:\r?\n|\z)"#;

/// Built-in directive syntaxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectivePreset {
    #[default]
    Require,
    Minispade,
    Sprockets,
}

impl DirectivePreset {
    pub fn pattern(self) -> &'static str {
        match self {
            DirectivePreset::Require => REQUIRE_PATTERN,
            DirectivePreset::Minispade => MINISPADE_PATTERN,
            DirectivePreset::Sprockets => SPROCKETS_PATTERN,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "require" => Some(DirectivePreset::Require),
            "minispade" => Some(DirectivePreset::Minispade),
            "sprockets" => Some(DirectivePreset::Sprockets),
            _ => None,
        }
    }
}

impl fmt::Display for DirectivePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DirectivePreset::Require => "require",
            DirectivePreset::Minispade => "minispade",
            DirectivePreset::Sprockets => "sprockets",
        };
        f.write_str(name)
    }
}

/// Result of parsing one unit body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUnit {
    /// Raw targets, in order of appearance. Duplicates are preserved.
    pub declarations: Vec<String>,
    /// The body with every matched directive removed.
    pub stripped: String,
}

/// A compiled directive pattern with exactly one capture group.
#[derive(Debug, Clone)]
pub struct DirectiveParser {
    regex: Regex,
}

impl DirectiveParser {
    /// Compile a custom pattern. `^` and `$` anchor at line boundaries.
    pub fn new(pattern: &str) -> Result<Self, NeuterError> {
        let regex = RegexBuilder::new(pattern)
            .multi_line(true)
            .build()
            .map_err(|e| NeuterError::InvalidDirective {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;

        // Group 0 is the whole match.
        let groups = regex.captures_len() - 1;
        if groups != 1 {
            return Err(NeuterError::InvalidDirective {
                pattern: pattern.to_string(),
                message: format!("expected 1 capture group, found {groups}"),
            });
        }

        Ok(Self { regex })
    }

    pub fn from_preset(preset: DirectivePreset) -> Self {
        Self::new(preset.pattern()).expect("valid built-in pattern")
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Targets declared in `body`, in order of appearance.
    pub fn declarations(&self, body: &str) -> Vec<String> {
        self.regex
            .captures_iter(body)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// `body` with every directive removed.
    pub fn strip(&self, body: &str) -> String {
        self.regex.replace_all(body, "").into_owned()
    }

    pub fn parse(&self, body: &str) -> ParsedUnit {
        ParsedUnit {
            declarations: self.declarations(body),
            stripped: self.strip(body),
        }
    }
}

impl Default for DirectiveParser {
    fn default() -> Self {
        Self::from_preset(DirectivePreset::Require)
    }
}
