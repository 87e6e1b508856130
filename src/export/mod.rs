//! Salary breakdown export.
//!
//! A [`SalaryBreakdown`] is rendered as JSON, copyable plain text, or a
//! printable HTML page.

mod breakdown;
mod format;
mod html;
mod text;

pub use breakdown::{ProjectBreakdown, SalaryBreakdown};
pub use format::{format_hours, format_money, round_money};
pub use html::render_html;
pub use text::render_text;

use serde::{Deserialize, Serialize};

use crate::error::{SalaryError, SalaryResult};

/// Output format for a rendered breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Plain text for copying.
    Text,
    /// Standalone printable HTML.
    Html,
}

impl ExportFormat {
    /// The HTTP content type for this format.
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Text => "text/plain; charset=utf-8",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }
}

/// Renders a breakdown in the requested format.
pub fn render(breakdown: &SalaryBreakdown, format: ExportFormat) -> SalaryResult<String> {
    match format {
        ExportFormat::Json => {
            serde_json::to_string_pretty(breakdown).map_err(|e| SalaryError::ExportError {
                message: e.to_string(),
            })
        }
        ExportFormat::Text => Ok(render_text(breakdown)),
        ExportFormat::Html => Ok(render_html(breakdown)),
    }
}
