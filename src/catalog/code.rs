//! Course code parsing.
//!
//! A course code is a run of uppercase subject letters followed by a
//! four digit course number, e.g. `CS2110` or `ARTH4101`. The first digit
//! of the number is the course level.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

static CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<subject>[A-Z]+)(?P<number>[0-9]{4})$").unwrap()
});

/// A validated course code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseCode {
    code: String,
    subject_len: usize,
}

impl CourseCode {
    /// Parse a course code, rejecting anything that fails the format check.
    pub fn parse(raw: &str) -> Result<Self> {
        let caps = CODE_REGEX
            .captures(raw)
            .ok_or_else(|| PlannerError::MalformedCourseCode {
                code: raw.to_string(),
            })?;
        let subject_len = caps["subject"].len();
        Ok(Self {
            code: raw.to_string(),
            subject_len,
        })
    }

    /// Parse user input, trimming whitespace and upper-casing first.
    ///
    /// Accepts `cs 2110` and `cs2110` as `CS2110`.
    pub fn parse_lenient(raw: &str) -> Result<Self> {
        let normalized: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        Self::parse(&normalized).map_err(|_| PlannerError::MalformedCourseCode {
            code: raw.to_string(),
        })
    }

    /// The full code, e.g. `CS2110`.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// The subject prefix, e.g. `CS`.
    pub fn subject(&self) -> &str {
        &self.code[..self.subject_len]
    }

    /// The four digit number as written, e.g. `2110`.
    pub fn number_str(&self) -> &str {
        &self.code[self.subject_len..]
    }

    /// The numeric course number.
    pub fn number(&self) -> u16 {
        // Four ASCII digits always fit.
        self.number_str().parse().unwrap_or(0)
    }

    /// The course level (first digit of the number).
    pub fn level(&self) -> u8 {
        self.number_str()
            .bytes()
            .next()
            .map(|b| b - b'0')
            .unwrap_or(0)
    }

    /// Match the number against a pattern of digits and `*` wildcards.
    ///
    /// `4**1` matches `4121` and `4991` but not `4120`. Patterns of the wrong
    /// length never match.
    pub fn number_matches(&self, pattern: &str) -> bool {
        let number = self.number_str();
        pattern.len() == number.len()
            && pattern
                .chars()
                .zip(number.chars())
                .all(|(p, n)| p == '*' || p == n)
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for CourseCode {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CourseCode {
    type Error = PlannerError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CourseCode> for String {
    fn from(code: CourseCode) -> Self {
        code.code
    }
}

impl AsRef<str> for CourseCode {
    fn as_ref(&self) -> &str {
        &self.code
    }
}
