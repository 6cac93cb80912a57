// src/services/markup.rs

//! Image-set reference extraction from article body markup.

use scraper::{Html, Selector};

use crate::error::{AppError, Result};

/// Elements whose `type` marks them as an image set, e.g.
/// `<ft-content type=".../content/ImageSet" url="...">`.
const IMAGE_SET_SELECTOR: &str = r#"ft-content[type*="/ImageSet"]"#;

/// Extract image-set reference URLs from article body markup, in document
/// order. An article with no image sets yields an empty list, not an error.
pub fn extract_image_set_refs(body_markup: &str) -> Result<Vec<String>> {
    let selector = Selector::parse(IMAGE_SET_SELECTOR)
        .map_err(|e| AppError::selector(IMAGE_SET_SELECTOR, format!("{e:?}")))?;

    let document = Html::parse_document(body_markup);
    let refs = document
        .select(&selector)
        .filter_map(|element| element.value().attr("url"))
        .map(str::to_string)
        .collect();

    Ok(refs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_image_set_refs_in_order() {
        let body = r#"<body>
            <p>Intro</p>
            <ft-content type="http://www.ft.com/ontology/content/ImageSet"
                        url="http://api.example.com/content/set-1"></ft-content>
            <p>More text</p>
            <ft-content type="http://www.ft.com/ontology/content/ImageSet"
                        url="http://api.example.com/content/set-2"></ft-content>
        </body>"#;

        let refs = extract_image_set_refs(body).unwrap();
        assert_eq!(
            refs,
            vec![
                "http://api.example.com/content/set-1",
                "http://api.example.com/content/set-2"
            ]
        );
    }

    #[test]
    fn test_ignores_other_content_types() {
        let body = r#"<body>
            <ft-content type="http://www.ft.com/ontology/content/Video"
                        url="http://api.example.com/content/video-1"></ft-content>
        </body>"#;
        assert!(extract_image_set_refs(body).unwrap().is_empty());
    }

    #[test]
    fn test_no_image_sets_is_empty_not_error() {
        assert!(extract_image_set_refs("<body><p>plain</p></body>")
            .unwrap()
            .is_empty());
        assert!(extract_image_set_refs("").unwrap().is_empty());
    }

    #[test]
    fn test_missing_url_attribute_is_skipped() {
        let body = r#"<body>
            <ft-content type="x/ImageSet"></ft-content>
            <ft-content type="x/ImageSet" url="http://api.example.com/content/set-1"></ft-content>
        </body>"#;
        let refs = extract_image_set_refs(body).unwrap();
        assert_eq!(refs, vec!["http://api.example.com/content/set-1"]);
    }
}
