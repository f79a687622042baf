//! Website-to-domain normalization
//!
//! Both lookup input and the stored `website` column go through the same
//! normalization (the SQL side via the indexed expression in the schema):
//! strip a leading protocol, a leading `www.`, and anything from the first
//! path or query separator, then lowercase and trim.

/// Extract a bare domain from a website string
///
/// Returns an empty string when nothing remains, which callers treat as an
/// invalid domain.
pub fn extract_domain(website: &str) -> String {
    let s = website.trim();
    let s = s
        .strip_prefix("http://")
        .or_else(|| s.strip_prefix("https://"))
        .unwrap_or(s);
    let s = s.strip_prefix("www.").unwrap_or(s);
    let s = s.split(['/', '?']).next().unwrap_or("");
    s.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_domain_passes_through() {
        assert_eq!(extract_domain("example.com"), "example.com");
    }

    #[test]
    fn lowercases_input() {
        assert_eq!(extract_domain("Example.COM"), "example.com");
    }

    #[test]
    fn strips_protocol_and_www() {
        assert_eq!(extract_domain("https://www.example.com"), "example.com");
        assert_eq!(extract_domain("http://example.com"), "example.com");
        assert_eq!(extract_domain("www.example.com"), "example.com");
    }

    #[test]
    fn strips_path_and_query() {
        assert_eq!(extract_domain("example.com/about"), "example.com");
        assert_eq!(extract_domain("example.com?utm=1"), "example.com");
        assert_eq!(
            extract_domain("https://www.example.com/contact?lang=de"),
            "example.com"
        );
    }

    #[test]
    fn keeps_inner_www_label() {
        // Only a leading www. is stripped, not one inside the host
        assert_eq!(extract_domain("shop.www-parts.de"), "shop.www-parts.de");
    }

    #[test]
    fn idempotent() {
        let once = extract_domain("HTTPS://WWW.Example.com/x");
        assert_eq!(extract_domain(&once), once);
    }

    #[test]
    fn empty_and_whitespace_yield_empty() {
        assert_eq!(extract_domain(""), "");
        assert_eq!(extract_domain("   "), "");
        assert_eq!(extract_domain("https://"), "");
        assert_eq!(extract_domain("/path/only"), "");
    }
}
