//! JSON reporter
//!
//! Outputs the full Verdict as pretty-printed JSON. Useful for machine
//! consumption, piping to jq, or further processing.

use crate::models::Verdict;
use anyhow::Result;

/// Render a verdict as JSON
pub fn render(verdict: &Verdict) -> Result<String> {
    Ok(serde_json::to_string_pretty(verdict)?)
}

/// Render a verdict as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact(verdict: &Verdict) -> Result<String> {
    Ok(serde_json::to_string(verdict)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_verdict;

    #[test]
    fn test_json_render_valid() {
        let verdict = test_verdict();
        let json_str = render(&verdict).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["is_fraud"], true);
        assert_eq!(parsed["risk_level"], "HIGH");
        assert_eq!(parsed["details"]["type"], "SMS");
    }

    #[test]
    fn test_json_render_compact() {
        let verdict = test_verdict();
        let json_str = render_compact(&verdict).expect("render compact JSON");
        assert!(!json_str.contains('\n'));
        let _: serde_json::Value = serde_json::from_str(&json_str).expect("parse compact JSON");
    }
}
