//! Access gate: shared secret + optional source-IP allow-check.

use std::net::IpAddr;

use crate::settings::Settings;

/// Decide whether a request may receive the metric.
///
/// Both checks must pass:
/// - IP: when `settings.ip` is non-empty, `client_ip` must be present, parse
///   as an IP address and equal it exactly. Without an IP filter any client IP
///   is accepted, including unparseable or missing ones.
/// - Key: `provided_key` must equal `settings.key` as optional strings, so an
///   unset stored key never matches an empty provided one.
///
/// Mistyped stored `key` or `ip` values reject every request.
pub fn authorize(settings: &Settings, provided_key: Option<&str>, client_ip: Option<&str>) -> bool {
    ip_allowed(settings, client_ip) && settings.key_matches(provided_key)
}

fn ip_allowed(settings: &Settings, client_ip: Option<&str>) -> bool {
    if settings.ip_rejects_all() {
        return false;
    }
    let Some(allowed) = settings.ip_filter() else {
        return true;
    };

    match client_ip {
        Some(ip) if ip.parse::<IpAddr>().is_ok() => ip == allowed,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(key: Option<&str>, ip: Option<&str>) -> Settings {
        Settings {
            key: key.map(str::to_owned),
            ip: ip.map(str::to_owned),
            ..Settings::default()
        }
    }

    #[test]
    fn key_match_without_ip_filter() {
        let s = settings(Some("abc"), None);
        assert!(authorize(&s, Some("abc"), Some("9.9.9.9")));
        assert!(authorize(&s, Some("abc"), Some("not-an-ip")));
        assert!(authorize(&s, Some("abc"), None));
    }

    #[test]
    fn key_mismatch_rejects() {
        let s = settings(Some("abc"), None);
        assert!(!authorize(&s, Some("xyz"), Some("1.2.3.4")));
        assert!(!authorize(&s, None, Some("1.2.3.4")));
        assert!(!authorize(&s, Some("ABC"), None));
    }

    #[test]
    fn ip_filter_requires_exact_match() {
        let s = settings(Some("abc"), Some("1.2.3.4"));
        assert!(authorize(&s, Some("abc"), Some("1.2.3.4")));
        assert!(!authorize(&s, Some("abc"), Some("9.9.9.9")));
        assert!(!authorize(&s, Some("xyz"), Some("1.2.3.4")));
    }

    #[test]
    fn ip_filter_rejects_unresolved_client() {
        let s = settings(Some("abc"), Some("1.2.3.4"));
        assert!(!authorize(&s, Some("abc"), None));
        assert!(!authorize(&s, Some("abc"), Some("1.2.3.4, 5.6.7.8")));
    }

    #[test]
    fn ip_filter_compares_text_not_address() {
        let s = settings(Some("k"), Some("::1"));
        assert!(authorize(&s, Some("k"), Some("::1")));
        assert!(!authorize(&s, Some("k"), Some("0:0:0:0:0:0:0:1")));
    }

    #[test]
    fn empty_ip_is_no_filter() {
        let s = settings(Some("abc"), Some(""));
        assert!(authorize(&s, Some("abc"), None));
    }

    #[test]
    fn unset_key_does_not_match_empty_key() {
        let s = settings(None, None);
        assert!(!authorize(&s, Some(""), None));
        assert!(!authorize(&s, Some("anything"), None));
        // both unset compares equal; operators must configure a key
        assert!(authorize(&s, None, None));
    }

    #[test]
    fn mistyped_stored_fields_reject_silently() {
        let s = Settings::decode(r#"{"key":"abc","ip":1234}"#);
        assert!(!authorize(&s, Some("abc"), Some("1.2.3.4")));
        assert!(!authorize(&s, Some("abc"), None));

        let s = Settings::decode(r#"{"key":["abc"]}"#);
        assert!(!authorize(&s, None, None));
        assert!(!authorize(&s, Some("abc"), None));
    }
}
