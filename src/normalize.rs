use url::Url;

/// Resolve `reference` against an already parsed base URL.
///
/// Returns `None` when the reference cannot be resolved or the result has no
/// host (`data:`, `about:` and similar), so every returned URL is absolute.
pub fn resolve(reference: &str, base: &Url) -> Option<Url> {
    match base.join(reference) {
        Ok(url) if url.host_str().is_some() => Some(url),
        Ok(url) => {
            ::log::trace!("Dropping host-less URL: {}", url);
            None
        }
        Err(e) => {
            ::log::trace!("Could not resolve {:?} against {}: {}", reference, base, e);
            None
        }
    }
}

/// Resolve a possibly-relative reference against a base URL string and
/// return the canonical serialization, or `None` if either side is invalid.
pub fn normalize(reference: &str, base: &str) -> Option<String> {
    let base = Url::parse(base).ok()?;
    resolve(reference, &base).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_relative() {
        assert_eq!(
            normalize("/about", "https://example.com").as_deref(),
            Some("https://example.com/about")
        );
    }

    #[test]
    fn test_path_relative() {
        assert_eq!(
            normalize("logo.png", "https://example.com/blog/post").as_deref(),
            Some("https://example.com/blog/logo.png")
        );
        assert_eq!(
            normalize("../up", "https://example.com/a/b/c").as_deref(),
            Some("https://example.com/a/up")
        );
    }

    #[test]
    fn test_absolute_reference_is_canonicalized() {
        assert_eq!(
            normalize("HTTPS://Google.com", "https://example.com").as_deref(),
            Some("https://google.com/")
        );
        assert_eq!(
            normalize("http://example.com:80/x", "https://example.com").as_deref(),
            Some("http://example.com/x")
        );
    }

    #[test]
    fn test_protocol_relative() {
        assert_eq!(
            normalize("//cdn.example.net/app.js", "https://example.com/").as_deref(),
            Some("https://cdn.example.net/app.js")
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(normalize("not a url", ""), None);
        assert_eq!(normalize("/about", "not a url"), None);
        assert_eq!(normalize("http://[::1", "https://example.com"), None);
    }

    #[test]
    fn test_hostless_results_are_invalid() {
        assert_eq!(
            normalize("data:image/png;base64,AAAA", "https://example.com"),
            None
        );
        assert_eq!(normalize("about:blank", "https://example.com"), None);
    }
}
