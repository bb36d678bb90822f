//! Success response body.

/// Render the metric body exactly as `{"count":N}` (no whitespace).
pub fn count_body(degrees: u16) -> String {
    format!("{{\"count\":{degrees}}}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn body_has_no_whitespace() {
        assert_eq!(count_body(179), r#"{"count":179}"#);
        assert_eq!(count_body(0), r#"{"count":0}"#);
    }

    #[test]
    fn body_is_valid_json() {
        let v: serde_json::Value = serde_json::from_str(&count_body(359)).unwrap();
        assert_eq!(v["count"], 359);
    }
}
