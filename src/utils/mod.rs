//! Utility functions and helpers.

pub mod http;

use url::Url;

/// Short display name for an image URL: the last path segment, falling back
/// to the whole URL. Used only in log lines.
pub fn image_basename(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| {
            u.path_segments()
                .and_then(|mut segments| segments.next_back().map(str::to_string))
        })
        .filter(|segment| !segment.is_empty())
        .unwrap_or_else(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_basename() {
        assert_eq!(
            image_basename("https://im.example.com/renditions/abc-123.png"),
            "abc-123.png"
        );
        assert_eq!(image_basename("https://im.example.com/abc"), "abc");
    }

    #[test]
    fn test_image_basename_fallback() {
        assert_eq!(image_basename("not a url"), "not a url");
        assert_eq!(
            image_basename("https://im.example.com/"),
            "https://im.example.com/"
        );
    }
}
