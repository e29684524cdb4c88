//! JSON output formatting for machine-readable reports.

use serde::Serialize;

/// JSON output formatter
pub struct JsonOutput;

impl JsonOutput {
    /// Format data as a pretty-printed JSON string
    pub fn format<T: Serialize + ?Sized>(data: &T) -> String {
        serde_json::to_string_pretty(data)
            .unwrap_or_else(|e| format!("{{\n  \"error\": \"{}\"\n}}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct TestData {
        name: String,
        entries: usize,
    }

    #[test]
    fn test_format_pretty() {
        let data = TestData {
            name: "assets".to_string(),
            entries: 42,
        };
        let output = JsonOutput::format(&data);

        assert!(output.contains("\"name\": \"assets\""));
        assert!(output.contains("\"entries\": 42"));
        assert!(output.contains('\n'));
    }
}
