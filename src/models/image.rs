//! Image-set and binary image data structures.

use serde::Deserialize;

/// Image-set document: a named collection of renditions of one image.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageSet {
    #[serde(default)]
    pub members: Vec<ImageSetMemberRef>,
}

/// One rendition reference inside an image-set document.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageSetMemberRef {
    /// API URL of the member document
    pub id: String,
}

/// Image-set member document, resolved to its binary download URL.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMember {
    pub binary_url: String,
}

/// A downloaded binary image. Discarded as soon as stamp detection on it
/// finishes; never written to durable storage.
#[derive(Debug, Clone)]
pub struct ImageBinary {
    pub uri: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_set_members_parse() {
        let json = r#"{"members": [{"id": "http://api/content/m1"}, {"id": "http://api/content/m2"}]}"#;
        let set: ImageSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.members.len(), 2);
        assert_eq!(set.members[0].id, "http://api/content/m1");
    }

    #[test]
    fn test_image_member_binary_url_rename() {
        let member: ImageMember =
            serde_json::from_str(r#"{"binaryUrl": "https://im.example.com/abc.png"}"#).unwrap();
        assert_eq!(member.binary_url, "https://im.example.com/abc.png");
    }
}
