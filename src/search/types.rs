//! Search request and response types.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parameters of one page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest<'a> {
    pub keyword: &'a str,
    /// `hl`
    pub language: &'a str,
    /// `gl`
    pub country: &'a str,
    pub location: Option<&'a str>,
    /// Zero-based `start`
    pub offset: u32,
    /// `num`
    pub count: u32,
}

/// One organic result entry. Only the link is needed for ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OrganicResult {
    /// Missing and `null` links are both `""`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
}

/// One page of organic results in rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    pub results: Vec<OrganicResult>,
}

impl SearchPage {
    pub fn from_links<I, S>(links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            results: links
                .into_iter()
                .map(|link| OrganicResult { link: link.into() })
                .collect(),
        }
    }
}

/// SerpApi JSON body. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct SerpResponse {
    /// `Some` whenever the key is present, even as `null`
    #[serde(default, deserialize_with = "present")]
    pub error: Option<Value>,
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,
}

impl SerpResponse {
    /// Human-readable message of a present `error` field.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|error| match error {
            Value::String(message) => message.clone(),
            Value::Null => "Search API returned an error".to_string(),
            other => other.to_string(),
        })
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}
