//! Media URL resolution against the CMS origin

/// Absolute (`http…`) and protocol-relative (`//…`) URLs pass through; anything
/// else is treated as a path on the CMS origin.
pub fn resolve_media_url(origin: &str, url: Option<&str>) -> Option<String> {
    let url = url.filter(|u| !u.is_empty())?;

    if url.starts_with("http") || url.starts_with("//") {
        return Some(url.to_string());
    }

    Some(format!("{}{}", origin, url))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaResolver {
    origin: String,
}

impl MediaResolver {
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn resolve(&self, url: Option<&str>) -> Option<String> {
        resolve_media_url(&self.origin, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:1337";

    #[test]
    fn test_absolute_urls_unchanged() {
        assert_eq!(
            resolve_media_url(BASE, Some("https://x/y.png")).as_deref(),
            Some("https://x/y.png")
        );
        assert_eq!(
            resolve_media_url(BASE, Some("http://x/y.png")).as_deref(),
            Some("http://x/y.png")
        );
    }

    #[test]
    fn test_protocol_relative_unchanged() {
        assert_eq!(resolve_media_url(BASE, Some("//x/y.png")).as_deref(), Some("//x/y.png"));
    }

    #[test]
    fn test_relative_path_prefixed() {
        assert_eq!(
            resolve_media_url(BASE, Some("/uploads/a.png")).as_deref(),
            Some("http://localhost:1337/uploads/a.png")
        );
    }

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(resolve_media_url(BASE, None), None);
        assert_eq!(resolve_media_url(BASE, Some("")), None);
    }

    #[test]
    fn test_resolver_trims_origin() {
        let resolver = MediaResolver::new("https://cms.example.com/");
        assert_eq!(resolver.origin(), "https://cms.example.com");
        assert_eq!(
            resolver.resolve(Some("/uploads/b.jpg")).as_deref(),
            Some("https://cms.example.com/uploads/b.jpg")
        );
    }
}
