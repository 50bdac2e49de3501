//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Every flag defaults to the
//! fixed request, so running with no arguments probes the production API.

use clap::Parser;
use std::time::Duration;

use crate::cli::commands::ReportFormat;
use crate::probe::{ProbeConfig, QueryParams, DEFAULT_ENDPOINT, DEFAULT_USER_ID};
use crate::ui::OutputMode;

/// Check whether the insights API returns `insight_contents`.
#[derive(Debug, Parser)]
#[command(name = "insight-probe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Insights endpoint to probe
    #[arg(long, env = "INSIGHT_PROBE_URL", default_value = DEFAULT_ENDPOINT)]
    pub url: String,

    /// User whose insights are listed
    #[arg(long, env = "INSIGHT_PROBE_USER_ID", default_value = DEFAULT_USER_ID)]
    pub user_id: String,

    /// Page number to request
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Number of insights per page
    #[arg(long, default_value_t = 5)]
    pub limit: u32,

    /// Send include_tags=false
    #[arg(long)]
    pub no_tags: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub timeout: u64,

    /// Print a JSON report instead of diagnostic lines
    #[arg(long)]
    pub json: bool,

    /// Exit with status 1 unless insight_contents is found
    #[arg(long)]
    pub strict: bool,

    /// Show request and response details
    #[arg(short, long)]
    pub verbose: bool,

    /// Only show verdict lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Build the probe configuration from the parsed flags.
    pub fn probe_config(&self) -> ProbeConfig {
        ProbeConfig::new(self.url.clone())
            .with_params(QueryParams {
                page: self.page,
                limit: self.limit,
                user_id: self.user_id.clone(),
                include_tags: !self.no_tags,
            })
            .with_timeout(Duration::from_secs(self.timeout))
    }

    /// Output mode selected by `--verbose`/`--quiet`.
    ///
    /// `--json` always prints its report, so it ignores both.
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            return OutputMode::Normal;
        }
        OutputMode::from_flags(self.verbose, self.quiet)
    }

    /// Report format selected by `--json`.
    pub fn report_format(&self) -> ReportFormat {
        if self.json {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["insight-probe"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn explicit_flags_build_config() {
        let cli = parse(&[
            "--url",
            "http://localhost:9000/insights/",
            "--user-id",
            "u-1",
            "--page",
            "2",
            "--limit",
            "20",
            "--no-tags",
            "--timeout",
            "3",
        ]);
        let config = cli.probe_config();

        assert_eq!(config.endpoint, "http://localhost:9000/insights/");
        assert_eq!(
            config.params,
            QueryParams {
                page: 2,
                limit: 20,
                user_id: "u-1".to_string(),
                include_tags: false,
            }
        );
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn default_numeric_flags_match_fixed_request() {
        let cli = parse(&[]);
        let config = cli.probe_config();

        assert_eq!(config.params.page, 1);
        assert_eq!(config.params.limit, 5);
        assert!(config.params.include_tags);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!cli.json);
        assert!(!cli.strict);
    }

    #[test]
    fn output_mode_flags() {
        assert_eq!(parse(&[]).output_mode(), OutputMode::Normal);
        assert_eq!(parse(&["-v"]).output_mode(), OutputMode::Verbose);
        assert_eq!(parse(&["--quiet"]).output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn json_ignores_quiet() {
        let cli = parse(&["--json", "--quiet"]);
        assert_eq!(cli.output_mode(), OutputMode::Normal);
        assert_eq!(cli.report_format(), ReportFormat::Json);
    }

    #[test]
    fn text_is_default_format() {
        assert_eq!(parse(&[]).report_format(), ReportFormat::Text);
    }

    #[test]
    fn rejects_non_numeric_page() {
        let result = Cli::try_parse_from(["insight-probe", "--page", "first"]);
        assert!(result.is_err());
    }
}
