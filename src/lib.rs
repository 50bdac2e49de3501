//! insight-probe - check the shape of the insights API response.
//!
//! The probe sends one GET request to the insights endpoint, inspects the
//! JSON body, and reports whether the first insight carries an
//! `insight_contents` field. Every failure is reported as text.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Request configuration, HTTP call, inspection, and reporting
//! - [`ui`] - Terminal output and the test double used by the test suite
//!
//! # Example
//!
//! ```
//! use insight_probe::probe::{inspect, report, ProbeResponse};
//! use insight_probe::ui::MockUI;
//!
//! let response = ProbeResponse::new(200, r#"{"data": {"items": []}}"#);
//! let inspection = inspect(&response).unwrap();
//!
//! let mut ui = MockUI::new();
//! report::render_inspection(&inspection, &mut ui);
//! assert!(ui.has_error("No insights found in response"));
//! ```

pub mod cli;
pub mod error;
pub mod probe;
pub mod ui;

pub use error::{ProbeError, Result};
