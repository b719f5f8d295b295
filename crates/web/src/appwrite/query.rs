//! Query primitives for document listings.
//!
//! The document store accepts queries as JSON strings passed in repeated
//! `queries[]` parameters, e.g.
//! `{"method":"equal","attribute":"accountId","values":["acct_1"]}`.

use serde_json::json;

/// A single query primitive for a document listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Equality filter on one attribute.
    Equal { attribute: String, value: String },
    /// Field projection limiting which attributes are returned. System
    /// fields (`$id` and friends) are always included by the store.
    Select(Vec<String>),
    /// Maximum number of documents in the window.
    Limit(u64),
    /// Starting position of the window.
    Offset(u64),
}

impl Query {
    /// Equality filter on `attribute`.
    pub fn equal(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Equal {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Field projection selecting the given attributes.
    pub fn select<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Select(fields.into_iter().map(Into::into).collect())
    }

    /// Window size.
    #[must_use]
    pub const fn limit(limit: u64) -> Self {
        Self::Limit(limit)
    }

    /// Window starting position.
    #[must_use]
    pub const fn offset(offset: u64) -> Self {
        Self::Offset(offset)
    }

    /// Serialize to the wire form expected by the `queries[]` parameter.
    #[must_use]
    pub fn to_wire(&self) -> String {
        let value = match self {
            Self::Equal { attribute, value } => json!({
                "method": "equal",
                "attribute": attribute,
                "values": [value],
            }),
            Self::Select(fields) => json!({
                "method": "select",
                "values": fields,
            }),
            Self::Limit(limit) => json!({
                "method": "limit",
                "values": [limit],
            }),
            Self::Offset(offset) => json!({
                "method": "offset",
                "values": [offset],
            }),
        };
        value.to_string()
    }
}
