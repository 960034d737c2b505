use std::{fmt, str::FromStr};

/// Number of digits in the numeric segment of a Doc-ID.
pub const NUMBER_DIGITS: usize = 4;

/// A Doc-ID linking a documented behaviour to the code that implements it.
///
/// Format:
/// `{PROJECT}-{AREA}-{NNNN}-{SUFFIX}`, where:
/// - `PROJECT` and `AREA` are non-empty uppercase alphabetic segments
/// - `NNNN` is exactly four ASCII digits (`0000` is allowed)
/// - `SUFFIX` is a single uppercase letter
///
/// Examples: `ABC-DEF-0001-A`, `AUTH-LOGIN-0042-Z`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocId {
    project: String,
    area: String,
    number: u16,
    suffix: char,
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}-{}-{:0width$}-{}",
            self.project,
            self.area,
            self.number,
            self.suffix,
            width = NUMBER_DIGITS
        )
    }
}

impl serde::Serialize for DocId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Errors that can occur while parsing a Doc-ID.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Wrong number of dash-separated segments.
    #[error("Invalid Doc-ID format '{0}': expected PROJECT-AREA-NNNN-X")]
    Syntax(String),

    /// A letter segment is empty or not uppercase ASCII.
    #[error("Invalid segment '{segment}' in Doc-ID '{id}': expected uppercase letters (A-Z)")]
    Segment {
        /// The full identifier being parsed.
        id: String,
        /// The offending segment.
        segment: String,
    },

    /// The numeric segment is not exactly four ASCII digits.
    #[error("Invalid number '{number}' in Doc-ID '{id}': expected exactly 4 digits")]
    Number {
        /// The full identifier being parsed.
        id: String,
        /// The offending segment.
        number: String,
    },

    /// The suffix is not a single uppercase letter.
    #[error("Invalid suffix '{suffix}' in Doc-ID '{id}': expected a single letter (A-Z)")]
    Suffix {
        /// The full identifier being parsed.
        id: String,
        /// The offending segment.
        suffix: String,
    },
}

fn is_letters(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_ascii_uppercase())
}

impl FromStr for DocId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        let [project, area, number, suffix] = parts.as_slice() else {
            return Err(Error::Syntax(s.to_string()));
        };

        for segment in [project, area] {
            if !is_letters(segment) {
                return Err(Error::Segment {
                    id: s.to_string(),
                    segment: (*segment).to_string(),
                });
            }
        }

        if number.len() != NUMBER_DIGITS || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::Number {
                id: s.to_string(),
                number: (*number).to_string(),
            });
        }
        let parsed_number = number.parse().map_err(|_| Error::Number {
            id: s.to_string(),
            number: (*number).to_string(),
        })?;

        let mut suffix_chars = suffix.chars();
        let suffix_char = match (suffix_chars.next(), suffix_chars.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => c,
            _ => {
                return Err(Error::Suffix {
                    id: s.to_string(),
                    suffix: (*suffix).to_string(),
                });
            }
        };

        Ok(Self {
            project: (*project).to_string(),
            area: (*area).to_string(),
            number: parsed_number,
            suffix: suffix_char,
        })
    }
}

impl TryFrom<&str> for DocId {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
