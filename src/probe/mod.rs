//! Insights API probe.
//!
//! This module provides:
//! - [`ProbeConfig`] and [`QueryParams`] describing the single request
//! - [`ApiProbe`] for sending it with a bounded timeout
//! - [`inspect`] for classifying the response shape
//! - [`report`] for turning an inspection into diagnostic lines
//!
//! # Example
//!
//! ```
//! use insight_probe::probe::{inspect_document, Inspection, Shape};
//! use serde_json::json;
//!
//! let doc = json!({ "data": { "items": [{ "insight_contents": "x" }] } });
//! let inspection = inspect_document(&doc).unwrap();
//! assert!(inspection.has_insight_contents());
//! assert!(matches!(
//!     inspection,
//!     Inspection::Document { shape: Shape::Insights { count: 1, .. }, .. }
//! ));
//! ```

pub mod client;
pub mod config;
pub mod inspect;
pub mod report;

pub use client::{ApiProbe, ProbeResponse};
pub use config::{ProbeConfig, QueryParams, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, DEFAULT_USER_ID};
pub use inspect::{
    inspect, inspect_document, truncate_dump, FirstInsight, Inspection, Shape, CONTENTS_FIELD,
    DUMP_LIMIT,
};
pub use report::ProbeReport;
