use percent_encoding::percent_decode_str;

/// Extract one cookie from a raw `Cookie`-header-style string, the way a
/// browser reads `document.cookie`: split on `;`, trim, match `name=`,
/// percent-decode the value. First match wins.
#[must_use]
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    for part in cookies.split(';') {
        let part = part.trim();
        if let Some(value) = part.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')) {
            return Some(percent_decode_str(value).decode_utf8_lossy().into_owned());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_a_cookie_among_several() {
        let cookies = "sessionid=xyz; csrftoken=abc123; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("abc123"));
    }

    #[test]
    fn tolerates_whitespace_and_ordering() {
        let cookies = "  csrftoken=abc123 ;sessionid=xyz";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("abc123"));
        assert_eq!(cookie_value(cookies, "sessionid").as_deref(), Some("xyz"));
    }

    #[test]
    fn name_must_match_exactly() {
        // "xcsrftoken" is a different cookie, not a suffix match.
        let cookies = "xcsrftoken=wrong; csrftoken=right";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("right"));
    }

    #[test]
    fn percent_encoded_values_are_decoded() {
        let cookies = "csrftoken=a%20b%3Dc";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("a b=c"));
    }

    #[test]
    fn missing_cookie_is_none() {
        assert_eq!(cookie_value("", "csrftoken"), None);
        assert_eq!(cookie_value("sessionid=xyz", "csrftoken"), None);
    }

    #[test]
    fn empty_value_is_allowed() {
        assert_eq!(cookie_value("csrftoken=", "csrftoken").as_deref(), Some(""));
    }
}
