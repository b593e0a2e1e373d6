//! Bundled placeholder image manifest, looked up by stable id.

use once_cell::sync::Lazy;
use serde::Deserialize;

pub const QUESTION_IMAGE_ID: &str = "love-question";
pub const SUCCESS_IMAGE_ID: &str = "success-celebration";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderImage {
    pub id: String,
    pub image_url: String,
    pub description: String,
    pub image_hint: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Manifest {
    placeholder_images: Vec<PlaceholderImage>,
}

static MANIFEST: Lazy<Vec<PlaceholderImage>> = Lazy::new(|| {
    match serde_json::from_str::<Manifest>(include_str!("../assets/placeholder-images.json")) {
        Ok(manifest) => manifest.placeholder_images,
        Err(err) => {
            // Degrade to an empty table; screens render without images.
            gloo_console::error!(format!("placeholder manifest is malformed: {err}"));
            Vec::new()
        }
    }
});

/// Find a placeholder image by id. Screens render without the image when the
/// id is unknown.
pub fn find(id: &str) -> Option<&'static PlaceholderImage> {
    MANIFEST.iter().find(|image| image.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn both_screens_have_a_placeholder() {
        let question = find(QUESTION_IMAGE_ID).unwrap();
        assert_eq!(question.width, 300);
        assert_eq!(question.height, 375);
        assert!(question.image_url.starts_with("https://"));
        let success = find(SUCCESS_IMAGE_ID).unwrap();
        assert_eq!(success.width, 400);
        assert_eq!(success.height, 500);
        assert!(!success.description.is_empty());
        // Both hints ride along as the data-ai-hint attribute.
        assert!(!question.image_hint.is_empty());
        assert!(!success.image_hint.is_empty());
    }

    #[test]
    fn unknown_ids_miss_gracefully() {
        assert_eq!(find("galentine"), None);
    }
}
