//! Diagnostic output for a probe run.
//!
//! Text output is written line by line through a [`UserInterface`]:
//! informational lines via `message`, verdict lines via `success`/`error`.
//! [`ProbeReport`] is the machine-readable counterpart used by `--json`.

use serde::Serialize;
use serde_json::Value;

use crate::ui::{Marker, UserInterface};

use super::client::ProbeResponse;
use super::config::{ProbeConfig, QueryParams};
use super::inspect::{Inspection, Shape, CONTENTS_FIELD};

/// Print the request that is about to be sent.
pub fn announce(config: &ProbeConfig, ui: &mut dyn UserInterface) {
    ui.message(&Marker::Probe.format(&format!("Testing API endpoint: {}", config.endpoint)));
    ui.message(&Marker::Detail.format(&format!("Parameters: {}", config.params)));

    if ui.output_mode().shows_details() {
        if let Ok(url) = config.request_url() {
            ui.message(&Marker::Detail.format(&format!("Request URL: {}", url)));
        }
        ui.message(&Marker::Timing.format(&format!(
            "Timeout: {}s",
            config.timeout.as_secs_f64()
        )));
    }
}

/// Print the status line, plus transport details in verbose mode.
pub fn render_status(response: &ProbeResponse, ui: &mut dyn UserInterface) {
    ui.message(&Marker::Status.format(&format!("Status Code: {}", response.status)));

    if ui.output_mode().shows_details() {
        ui.message(&Marker::Timing.format(&format!(
            "Response time: {}ms",
            response.elapsed.as_millis()
        )));
        if let Some(content_type) = &response.content_type {
            ui.message(&Marker::Detail.format(&format!("Content-Type: {}", content_type)));
        }
    }
}

/// Print the inspection verdict.
pub fn render_inspection(inspection: &Inspection, ui: &mut dyn UserInterface) {
    let (keys, shape) = match inspection {
        Inspection::ApiError { status, body } => {
            ui.error(&Marker::Failed.format(&format!("API Error: {}", status)));
            ui.message(&Marker::Detail.format(&format!("Response: {}", body)));
            return;
        }
        Inspection::Document { keys, shape } => (keys, shape),
    };

    ui.success(&Marker::Success.format("API Response received"));
    ui.message(&Marker::Keys.format(&format!("Response keys: {}", key_list(keys))));

    match shape {
        Shape::Unexpected { dump } => {
            ui.error(&Marker::Failed.format("Unexpected response structure"));
            ui.message(&Marker::Detail.format(&format!("Full response: {}...", dump)));
        }
        Shape::Insights { count, first } => {
            ui.message(&Marker::Count.format(&format!("Found {} insights", count)));

            let Some(first) = first else {
                ui.error(&Marker::Failed.format("No insights found in response"));
                return;
            };

            ui.message(&Marker::Inspect.format(&format!(
                "First insight keys: {}",
                key_list(&first.keys)
            )));

            match &first.insight_contents {
                Some(value) => {
                    ui.success(
                        &Marker::Success.format(&format!("{} field found!", CONTENTS_FIELD)),
                    );
                    ui.message(&Marker::Detail.format(&format!(
                        "{}: {}",
                        CONTENTS_FIELD,
                        display_value(value)
                    )));
                }
                None => {
                    ui.error(
                        &Marker::Failed.format(&format!("{} field NOT found", CONTENTS_FIELD)),
                    );
                    ui.message(&Marker::Inspect.format(&format!(
                        "Available fields: {}",
                        key_list(&first.keys)
                    )));
                }
            }
        }
    }
}

/// Print a failure caught anywhere during the probe.
pub fn render_failure(description: &str, ui: &mut dyn UserInterface) {
    ui.error(&Marker::Failed.format(&format!("Error testing API: {}", description)));
}

/// Render keys as `['a', 'b']`.
fn key_list(keys: &[String]) -> String {
    let quoted: Vec<String> = keys.iter().map(|key| format!("'{}'", key)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Strings are shown raw; everything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Machine-readable summary of a probe run.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    /// Endpoint that was probed.
    pub endpoint: String,
    /// Query parameters sent.
    pub params: QueryParams,
    /// HTTP status, when a response arrived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Response time in milliseconds, when a response arrived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<u64>,
    /// Inspection verdict, when the response could be inspected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspection: Option<Inspection>,
    /// Failure description, when the probe failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeReport {
    /// Create an empty report for `config`.
    pub fn new(config: &ProbeConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            params: config.params.clone(),
            status: None,
            elapsed_ms: None,
            inspection: None,
            error: None,
        }
    }

    /// Whether the first insight carried `insight_contents`.
    pub fn confirmed(&self) -> bool {
        self.error.is_none()
            && self
                .inspection
                .as_ref()
                .is_some_and(Inspection::has_insight_contents)
    }
}
