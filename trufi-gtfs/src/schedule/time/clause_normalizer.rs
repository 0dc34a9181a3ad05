use crate::GtfsBuildError;
use regex::{Captures, Regex};

/// tidies hand-written opening hours like `"Mo - Fr 6:5 -22: 00"` into
/// `"Mo-Fr 06:05-22:00"` and splits them into clauses on `;`.
#[derive(Debug, Clone)]
pub struct ClauseNormalizer {
    around_dash: Regex,
    around_colon: Regex,
    split_digits: Regex,
    digits: Regex,
    spaces: Regex,
}

impl ClauseNormalizer {
    pub fn new() -> Result<ClauseNormalizer, GtfsBuildError> {
        Ok(ClauseNormalizer {
            around_dash: compile_pattern(r"\s*-\s*")?,
            around_colon: compile_pattern(r"\s*:\s*")?,
            split_digits: compile_pattern(r"\d( +\d)+")?,
            digits: compile_pattern(r"\d+")?,
            spaces: compile_pattern(r" +")?,
        })
    }

    /// normalized, non-blank clauses of an opening hours expression.
    pub fn clauses(&self, opening_hours: &str) -> Vec<String> {
        opening_hours
            .split(';')
            .map(|clause| self.normalize(clause))
            .filter(|clause| !clause.is_empty())
            .collect()
    }

    /// normalizes a single clause. well formed clauses pass through unchanged.
    pub fn normalize(&self, clause: &str) -> String {
        let s = clause.trim();
        let s = self.around_dash.replace_all(s, "-");
        let s = self.around_colon.replace_all(&s, ":");
        let s = self
            .split_digits
            .replace_all(&s, |caps: &Captures| caps[0].replace(' ', ""));
        let s = self.digits.replace_all(&s, |caps: &Captures| {
            let token = &caps[0];
            if token.len() == 1 {
                format!("0{token}")
            } else {
                token.to_string()
            }
        });
        self.spaces.replace_all(&s, " ").to_string()
    }
}

pub(crate) fn compile_pattern(pattern: &str) -> Result<Regex, GtfsBuildError> {
    Regex::new(pattern).map_err(|e| GtfsBuildError::PatternError {
        pattern: String::from(pattern),
        source: e,
    })
}
