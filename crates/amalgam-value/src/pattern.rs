//! Pattern-matching leaf: a compiled regular expression with its source.

use regex::{Regex, RegexBuilder};
use std::fmt;

use crate::error::ValueError;

/// Flags applied when compiling a [`Pattern`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PatternFlags {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
    pub ignore_whitespace: bool,
}

/// A regular-expression value: the original source, the flags it was
/// compiled with, and the compiled matcher.
///
/// Equality is by source and flags. Cloning yields a fresh instance with the
/// same source and flags, which is how the engine duplicates pattern leaves.
#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    flags: PatternFlags,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern with default flags.
    pub fn new(source: &str) -> Result<Pattern, ValueError> {
        Pattern::with_flags(source, PatternFlags::default())
    }

    /// Compile a pattern with the given flags.
    pub fn with_flags(source: &str, flags: PatternFlags) -> Result<Pattern, ValueError> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(flags.case_insensitive)
            .multi_line(flags.multi_line)
            .dot_matches_new_line(flags.dot_matches_new_line)
            .ignore_whitespace(flags.ignore_whitespace)
            .build()?;
        Ok(Pattern {
            source: source.to_string(),
            flags,
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The compiled matcher.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Pattern) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.source)?;
        if self.flags.case_insensitive {
            write!(f, "i")?;
        }
        if self.flags.multi_line {
            write!(f, "m")?;
        }
        if self.flags.dot_matches_new_line {
            write!(f, "s")?;
        }
        if self.flags.ignore_whitespace {
            write!(f, "x")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_matches() {
        let pattern = Pattern::new(r"^\d+$").unwrap();
        assert!(pattern.is_match("12345"));
        assert!(!pattern.is_match("12a45"));
    }

    #[test]
    fn test_pattern_flags_apply() {
        let flags = PatternFlags {
            case_insensitive: true,
            ..PatternFlags::default()
        };
        let pattern = Pattern::with_flags("hello", flags).unwrap();
        assert!(pattern.is_match("HELLO world"));
    }

    #[test]
    fn test_pattern_equality_by_source_and_flags() {
        let a = Pattern::new("a+").unwrap();
        let b = Pattern::new("a+").unwrap();
        let c = Pattern::with_flags(
            "a+",
            PatternFlags {
                case_insensitive: true,
                ..PatternFlags::default()
            },
        )
        .unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_pattern_clone_is_equal() {
        let original = Pattern::new("x.y").unwrap();
        let copy = original.clone();
        assert_eq!(original, copy);
        assert_eq!(copy.source(), "x.y");
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        assert!(Pattern::new("(unclosed").is_err());
    }

    #[test]
    fn test_pattern_display() {
        let flags = PatternFlags {
            case_insensitive: true,
            multi_line: true,
            ..PatternFlags::default()
        };
        let pattern = Pattern::with_flags("a|b", flags).unwrap();
        assert_eq!(pattern.to_string(), "/a|b/im");
    }
}
