// Favicon URL derivation from a link's host
use url::Url;

pub const DEFAULT_FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";

const FAVICON_SIZE: u32 = 32;

#[derive(Debug, Clone)]
pub struct FaviconResolver {
    service_url: String,
}

impl FaviconResolver {
    pub fn new(service_url: impl Into<String>) -> Self {
        let service_url: String = service_url.into();
        Self {
            service_url: service_url.trim_end_matches(['/', '?']).to_string(),
        }
    }

    /// Favicon URL for the host of `link_url`, or `None` when the URL cannot
    /// be parsed or has no host
    pub fn resolve(&self, link_url: &str) -> Option<String> {
        let parsed = Url::parse(link_url.trim()).ok()?;
        let host = parsed.host_str().filter(|h| !h.is_empty())?;
        Some(format!(
            "{}?domain={}&sz={}",
            self.service_url,
            urlencoding::encode(host),
            FAVICON_SIZE
        ))
    }
}

impl Default for FaviconResolver {
    fn default() -> Self {
        Self::new(DEFAULT_FAVICON_SERVICE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_host() {
        let resolver = FaviconResolver::default();
        assert_eq!(
            resolver.resolve("https://docs.rs/axum/latest/axum/").as_deref(),
            Some("https://www.google.com/s2/favicons?domain=docs.rs&sz=32")
        );
    }

    #[test]
    fn test_resolve_skips_unparsable_and_hostless_urls() {
        let resolver = FaviconResolver::default();
        assert_eq!(resolver.resolve("not a url"), None);
        assert_eq!(resolver.resolve("docs.rs/axum"), None);
        assert_eq!(resolver.resolve("mailto:someone@example.com"), None);
    }

    #[test]
    fn test_custom_service_url_is_normalized() {
        let resolver = FaviconResolver::new("http://icons.local/fetch/");
        assert_eq!(
            resolver.resolve("http://example.com:8080/path").as_deref(),
            Some("http://icons.local/fetch?domain=example.com&sz=32")
        );
    }
}
