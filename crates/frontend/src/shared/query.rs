//! Query string construction for the analytics API.
//!
//! Only present values are emitted, in insertion order, each key and value
//! percent-encoded.

use contracts::shared::FilterState;
use std::fmt::Display;

pub const PARAM_START_DATE: &str = "data_inicio";
pub const PARAM_END_DATE: &str = "data_fim";

/// Separator between tokens of a list parameter.
pub const LIST_DELIMITER: char = ',';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for `QueryBuilder::new().filters(filter)`.
    pub fn from_filters(filter: &FilterState) -> Self {
        Self::new().filters(filter)
    }

    pub fn param(mut self, key: &str, value: impl Display) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Add `key=value` only when the value is present.
    pub fn optional<T: Display>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    /// Join tokens with [`LIST_DELIMITER`] into a single value. An empty
    /// list adds nothing.
    pub fn list<S: AsRef<str>>(self, key: &str, tokens: &[S]) -> Self {
        if tokens.is_empty() {
            return self;
        }
        let joined = tokens
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<_>>()
            .join(&LIST_DELIMITER.to_string());
        self.param(key, joined)
    }

    /// Add the date bounds as ISO dates (`YYYY-MM-DD`).
    pub fn filters(self, filter: &FilterState) -> Self {
        self.optional(PARAM_START_DATE, filter.start_date)
            .optional(PARAM_END_DATE, filter.end_date)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render as `k1=v1&k2=v2`, without a leading `?`.
    pub fn build(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Append the query to a path, adding `?` only when there is something to append.
pub fn with_query(path: &str, query: &QueryBuilder) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.build())
    }
}
