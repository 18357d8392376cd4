//! JSON output formatting.

use anyhow::Result;
use serde::Serialize;

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a formatter; `pretty` indents the output.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serializes any value.
    pub fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        let out = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(out)
    }
}
