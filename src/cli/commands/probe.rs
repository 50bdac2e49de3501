//! Probe command implementation.
//!
//! Sends the request, inspects the response, and reports the result.
//! Every failure is reported as output; only `--strict` turns a missing
//! field or a failure into a non-zero exit code.

use tracing::debug;

use crate::error::{error_chain, Result};
use crate::probe::{inspect, report, ApiProbe, ProbeConfig, ProbeReport};
use crate::ui::UserInterface;

use super::command::{Command, CommandResult};

/// How the result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One diagnostic line per finding.
    #[default]
    Text,
    /// A single pretty-printed JSON report.
    Json,
}

/// The probe command implementation.
pub struct ProbeCommand {
    config: ProbeConfig,
    format: ReportFormat,
    strict: bool,
}

impl ProbeCommand {
    /// Create a new probe command.
    pub fn new(config: ProbeConfig, format: ReportFormat, strict: bool) -> Self {
        Self {
            config,
            format,
            strict,
        }
    }

    fn is_text(&self) -> bool {
        self.format == ReportFormat::Text
    }

    fn run(&self, ui: &mut dyn UserInterface, summary: &mut ProbeReport) -> Result<()> {
        let probe = ApiProbe::new(self.config.clone())?;

        let mut spinner = ui.start_spinner("Waiting for response...");
        let response = match probe.send() {
            Ok(response) => {
                spinner.finish_success(&format!(
                    "Response in {}ms",
                    response.elapsed.as_millis()
                ));
                response
            }
            Err(e) => {
                spinner.finish_error("Request failed");
                return Err(e);
            }
        };

        summary.status = Some(response.status);
        summary.elapsed_ms = Some(response.elapsed.as_millis() as u64);
        if self.is_text() {
            report::render_status(&response, ui);
        }

        let inspection = inspect(&response)?;
        debug!(
            confirmed = inspection.has_insight_contents(),
            "Response inspected"
        );
        if self.is_text() {
            report::render_inspection(&inspection, ui);
        }
        summary.inspection = Some(inspection);

        Ok(())
    }
}

impl Command for ProbeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut summary = ProbeReport::new(&self.config);

        if self.is_text() {
            report::announce(&self.config, ui);
        }

        if let Err(err) = self.run(ui, &mut summary) {
            let description = error_chain(&err);
            debug!(timeout = err.is_timeout(), error = %description, "Probe failed");
            if self.is_text() {
                report::render_failure(&description, ui);
            }
            summary.error = Some(description);
        }

        if self.format == ReportFormat::Json {
            ui.message(&serde_json::to_string_pretty(&summary)?);
        }

        if self.strict && !summary.confirmed() {
            return Ok(CommandResult::failure(1));
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, SpinnerStatus};
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    const PATH: &str = "/api/v1/insights/";

    fn command_for(server: &MockServer) -> ProbeCommand {
        ProbeCommand::new(
            ProbeConfig::new(server.url(PATH)),
            ReportFormat::Text,
            false,
        )
    }

    fn serve_json(server: &MockServer, body: serde_json::Value) {
        server.mock(|when, then| {
            when.method(GET).path(PATH);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(body);
        });
    }

    #[test]
    fn reports_insight_contents_value() {
        let server = MockServer::start();
        serve_json(
            &server,
            json!({ "data": { "items": [{ "insight_contents": "x" }] } }),
        );

        let mut ui = MockUI::new();
        let result = command_for(&server).execute(&mut ui).unwrap();

        assert_eq!(result, CommandResult::success());
        assert!(ui.has_success("✅ insight_contents field found!"));
        assert!(ui.has_message("📋 insight_contents: x"));
    }

    #[test]
    fn full_transcript_for_found_field() {
        let server = MockServer::start();
        serve_json(
            &server,
            json!({ "data": { "items": [{ "insight_contents": "x" }] } }),
        );
        let command = command_for(&server);

        let mut ui = MockUI::new();
        command.execute(&mut ui).unwrap();

        let expected = vec![
            format!("🧪 Testing API endpoint: {}", server.url(PATH)),
            "📋 Parameters: {'page': 1, 'limit': 5, 'user_id': 'be91dade-1872-444d-b0e7-185ff7e0545a', 'include_tags': 'true'}".to_string(),
            "📡 Status Code: 200".to_string(),
            "✅ API Response received".to_string(),
            "📊 Response keys: ['data']".to_string(),
            "📦 Found 1 insights".to_string(),
            "🔍 First insight keys: ['insight_contents']".to_string(),
            "✅ insight_contents field found!".to_string(),
            "📋 insight_contents: x".to_string(),
        ];
        assert_eq!(ui.lines(), expected.as_slice());
    }

    #[test]
    fn reports_missing_field_with_available_keys() {
        let server = MockServer::start();
        serve_json(&server, json!({ "data": { "items": [{ "foo": 1 }] } }));

        let mut ui = MockUI::new();
        let result = command_for(&server).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_error("❌ insight_contents field NOT found"));
        assert!(ui.has_message("🔍 Available fields: ['foo']"));
    }

    #[test]
    fn reports_no_insights_for_empty_items() {
        let server = MockServer::start();
        serve_json(&server, json!({ "data": { "items": [] } }));

        let mut ui = MockUI::new();
        let result = command_for(&server).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("📦 Found 0 insights"));
        assert!(ui.has_error("❌ No insights found in response"));
        assert!(!ui.has_message("First insight keys"));
    }

    #[test]
    fn reports_unexpected_structure_with_truncated_dump() {
        let server = MockServer::start();
        serve_json(
            &server,
            json!({ "error": "maintenance", "detail": "z".repeat(1000) }),
        );

        let mut ui = MockUI::new();
        let result = command_for(&server).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("📊 Response keys: ['error', 'detail']"));
        assert!(ui.has_error("❌ Unexpected response structure"));

        let line = ui
            .messages()
            .iter()
            .find(|m| m.starts_with("📋 Full response: "))
            .unwrap();
        let dump = line.trim_start_matches("📋 Full response: ");
        assert!(dump.ends_with("..."));
        assert_eq!(dump.chars().count(), 500 + 3);
    }

    #[test]
    fn reports_api_error_status_and_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path(PATH);
            then.status(500).body("server error");
        });

        let mut ui = MockUI::new();
        let result = command_for(&server).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("📡 Status Code: 500"));
        assert!(ui.has_error("❌ API Error: 500"));
        assert!(ui.has_message("📋 Response: server error"));
        assert!(!ui.has_success("API Response received"));
    }

    #[test]
    fn reports_timeout_without_failing() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path(PATH);
            then.status(200)
                .body("{}")
                .delay(Duration::from_secs(2));
        });

        let config =
            ProbeConfig::new(server.url(PATH)).with_timeout(Duration::from_millis(200));
        let command = ProbeCommand::new(config, ReportFormat::Text, false);

        let mut ui = MockUI::new();
        let result = command.execute(&mut ui).unwrap();

        assert_eq!(result, CommandResult::success());
        assert_eq!(ui.errors().len(), 1);
        assert!(ui.errors()[0].starts_with("❌ Error testing API: "));
        assert!(
            ui.errors()[0].to_lowercase().contains("timed out"),
            "error should describe the timeout: {}",
            ui.errors()[0]
        );
        assert!(!ui.has_message("Status Code"));
    }

    #[test]
    fn reports_invalid_json_after_status_line() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path(PATH);
            then.status(200).body("<html>maintenance</html>");
        });

        let mut ui = MockUI::new();
        let result = command_for(&server).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("📡 Status Code: 200"));
        assert!(ui.has_error("❌ Error testing API: Response body is not valid JSON"));
        assert!(!ui.has_success("API Response received"));
    }

    #[test]
    fn reports_non_object_first_item() {
        let server = MockServer::start();
        serve_json(&server, json!({ "data": { "items": ["just a string"] } }));

        let mut ui = MockUI::new();
        command_for(&server).execute(&mut ui).unwrap();

        assert!(ui.has_error("Error testing API: First insight is not a JSON object"));
    }

    #[test]
    fn spinner_finishes_with_response_time() {
        let server = MockServer::start();
        serve_json(&server, json!({ "data": { "items": [] } }));

        let mut ui = MockUI::new();
        command_for(&server).execute(&mut ui).unwrap();

        let spinners = ui.spinners();
        assert_eq!(spinners.len(), 1);
        assert_eq!(spinners[0].status(), Some(SpinnerStatus::Success));
        assert!(spinners[0].finish_message().unwrap().starts_with("Response in"));
    }

    #[test]
    fn spinner_finishes_with_error_on_transport_failure() {
        let config = ProbeConfig::new("http://127.0.0.1:1/api/v1/insights/")
            .with_timeout(Duration::from_secs(2));
        let command = ProbeCommand::new(config, ReportFormat::Text, false);

        let mut ui = MockUI::new();
        let result = command.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_error("❌ Error testing API: "));
        assert_eq!(ui.spinners()[0].status(), Some(SpinnerStatus::Error));
    }

    #[test]
    fn strict_fails_when_field_missing() {
        let server = MockServer::start();
        serve_json(&server, json!({ "data": { "items": [{ "foo": 1 }] } }));

        let command = ProbeCommand::new(
            ProbeConfig::new(server.url(PATH)),
            ReportFormat::Text,
            true,
        );
        let mut ui = MockUI::new();

        assert_eq!(command.execute(&mut ui).unwrap(), CommandResult::failure(1));
    }

    #[test]
    fn strict_succeeds_when_field_found() {
        let server = MockServer::start();
        serve_json(
            &server,
            json!({ "data": { "items": [{ "insight_contents": [] }] } }),
        );

        let command = ProbeCommand::new(
            ProbeConfig::new(server.url(PATH)),
            ReportFormat::Text,
            true,
        );
        let mut ui = MockUI::new();

        assert_eq!(command.execute(&mut ui).unwrap(), CommandResult::success());
    }

    #[test]
    fn json_format_prints_single_report() {
        let server = MockServer::start();
        serve_json(
            &server,
            json!({ "data": { "items": [{ "id": 7, "insight_contents": "x" }] } }),
        );

        let command = ProbeCommand::new(
            ProbeConfig::new(server.url(PATH)),
            ReportFormat::Json,
            false,
        );
        let mut ui = MockUI::new();
        command.execute(&mut ui).unwrap();

        assert_eq!(ui.lines().len(), 1);
        let report: serde_json::Value = serde_json::from_str(&ui.lines()[0]).unwrap();
        assert_eq!(report["endpoint"], server.url(PATH));
        assert_eq!(report["status"], 200);
        assert_eq!(report["inspection"]["outcome"], "document");
        assert_eq!(report["inspection"]["shape"]["count"], 1);
        assert_eq!(
            report["inspection"]["shape"]["first"]["insight_contents"],
            "x"
        );
        assert!(report.get("error").is_none());
    }

    #[test]
    fn json_format_reports_failure() {
        let config = ProbeConfig::new("http://127.0.0.1:1/api/v1/insights/")
            .with_timeout(Duration::from_secs(2));
        let command = ProbeCommand::new(config, ReportFormat::Json, false);

        let mut ui = MockUI::new();
        command.execute(&mut ui).unwrap();

        let report: serde_json::Value = serde_json::from_str(&ui.lines()[0]).unwrap();
        assert!(report["error"].is_string());
        assert!(report.get("inspection").is_none());
    }
}
