//! Structural inspection of the probe response.
//!
//! The response body is treated as an untyped JSON document. Only the
//! presence of `data.items` and of `insight_contents` on the first item
//! are examined; no schema is enforced.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ProbeError, Result};

use super::client::ProbeResponse;

/// Field looked for on the first insight.
pub const CONTENTS_FIELD: &str = "insight_contents";

/// Maximum number of characters kept when dumping an unexpected document.
pub const DUMP_LIMIT: usize = 500;

/// Outcome of inspecting a probe response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Inspection {
    /// The API answered with a status other than 200.
    ApiError { status: u16, body: String },
    /// The API answered 200 with a JSON object.
    Document {
        /// Top-level keys, in document order.
        keys: Vec<String>,
        /// What was found under `data.items`.
        shape: Shape,
    },
}

/// Shape of a 200 response document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// `data.items` is missing or not an array.
    Unexpected {
        /// Pretty-printed document, cut at [`DUMP_LIMIT`] characters.
        dump: String,
    },
    /// `data.items` is an array.
    Insights {
        /// Number of records returned.
        count: usize,
        /// The first record, if there is one.
        first: Option<FirstInsight>,
    },
}

/// Summary of the first insight record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FirstInsight {
    /// Keys of the record, in document order.
    pub keys: Vec<String>,
    /// Value of `insight_contents`, when present.
    pub insight_contents: Option<Value>,
}

impl Inspection {
    /// Whether the first insight carries `insight_contents`.
    pub fn has_insight_contents(&self) -> bool {
        matches!(
            self,
            Self::Document {
                shape: Shape::Insights {
                    first: Some(FirstInsight {
                        insight_contents: Some(_),
                        ..
                    }),
                    ..
                },
                ..
            }
        )
    }
}

/// Inspect a raw response.
///
/// Any status other than 200 is reported as-is without parsing the body.
/// A 200 body that is not JSON is an error.
pub fn inspect(response: &ProbeResponse) -> Result<Inspection> {
    if response.status != 200 {
        return Ok(Inspection::ApiError {
            status: response.status,
            body: response.body.clone(),
        });
    }

    let document: Value = serde_json::from_str(&response.body)?;
    inspect_document(&document)
}

/// Inspect a parsed 200 response document.
pub fn inspect_document(document: &Value) -> Result<Inspection> {
    let root = document.as_object().ok_or(ProbeError::NotAnObject)?;
    let keys = root.keys().cloned().collect();

    let items = root
        .get("data")
        .and_then(|data| data.get("items"))
        .and_then(Value::as_array);

    let shape = match items {
        Some(items) => Shape::Insights {
            count: items.len(),
            first: items.first().map(first_insight).transpose()?,
        },
        None => Shape::Unexpected {
            dump: truncate_dump(document)?,
        },
    };

    Ok(Inspection::Document { keys, shape })
}

fn first_insight(item: &Value) -> Result<FirstInsight> {
    let record = item.as_object().ok_or_else(|| ProbeError::MalformedInsight {
        found: item.to_string(),
    })?;

    Ok(FirstInsight {
        keys: record.keys().cloned().collect(),
        insight_contents: record.get(CONTENTS_FIELD).cloned(),
    })
}

/// Pretty-print a document and keep at most [`DUMP_LIMIT`] characters.
pub fn truncate_dump(document: &Value) -> Result<String> {
    let pretty = serde_json::to_string_pretty(document)?;
    Ok(pretty.chars().take(DUMP_LIMIT).collect())
}
