//! Patch Metadata Form
//!
//! Field handling and validation behind the edit-metadata modal.

use crate::models::PatchMetadata;

/// Tag choices offered for both the primary and secondary tag
pub const TAG_OPTIONS: &[&str] = &[
    "synth",
    "sequencer",
    "drum machine",
    "sampler",
    "effect",
    "glitch",
    "utility",
    "modulation",
];

/// Largest accepted cover image
pub const MAX_IMAGE_BYTES: u64 = 500 * 1024;

pub const IMAGE_MIME: &str = "image/jpeg";

pub const MISSING_TAG: &str = "Please select at least one tag.";
pub const INVALID_IMAGE: &str = "Please select a valid JPG image.";
pub const IMAGE_TOO_LARGE: &str = "Image must be 500kb or smaller.";

/// Reserved characters hint shown next to the name field
pub const NAME_HINT: &str = "Reserved characters: /[:/?#[@!$&'()*+,;= -]/";

/// Split a stored "primary, secondary" tag string
pub fn split_tags(tags: Option<&str>) -> (String, String) {
    let Some(tags) = tags else {
        return (String::new(), String::new());
    };
    let mut parts = tags.split(", ");
    let primary = parts.next().unwrap_or("").to_string();
    let secondary = parts.next().unwrap_or("").to_string();
    (primary, secondary)
}

/// Join the non-empty tags with ", "
pub fn combine_tags(primary: &str, secondary: &str) -> String {
    [primary, secondary]
        .into_iter()
        .filter(|tag| !tag.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Current contents of the modal's fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataForm {
    pub name: String,
    pub primary_tag: String,
    pub secondary_tag: String,
    pub description: String,
}

/// Validated fields ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct PatchUpdate {
    pub name: String,
    pub tags: String,
    pub description: String,
}

impl MetadataForm {
    pub fn from_metadata(meta: &PatchMetadata) -> Self {
        let (primary_tag, secondary_tag) = split_tags(meta.tags.as_deref());
        Self {
            name: meta.name.clone(),
            primary_tag,
            secondary_tag,
            description: meta.description.clone(),
        }
    }

    /// Requires at least one tag; the message is user-facing
    pub fn validate(&self) -> Result<PatchUpdate, &'static str> {
        if self.primary_tag.is_empty() && self.secondary_tag.is_empty() {
            return Err(MISSING_TAG);
        }
        Ok(PatchUpdate {
            name: self.name.clone(),
            tags: combine_tags(&self.primary_tag, &self.secondary_tag),
            description: self.description.clone(),
        })
    }
}

/// Cover image picked in the modal, already read into memory
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Accept only JPEG files within the size limit
pub fn check_image(mime: &str, size: u64) -> Result<(), &'static str> {
    if mime != IMAGE_MIME {
        return Err(INVALID_IMAGE);
    }
    if size > MAX_IMAGE_BYTES {
        return Err(IMAGE_TOO_LARGE);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags() {
        assert_eq!(split_tags(Some("synth, glitch")), ("synth".into(), "glitch".into()));
        assert_eq!(split_tags(Some("effect")), ("effect".into(), String::new()));
        assert_eq!(split_tags(None), (String::new(), String::new()));
    }

    #[test]
    fn test_combine_tags_skips_empty() {
        assert_eq!(combine_tags("synth", "glitch"), "synth, glitch");
        assert_eq!(combine_tags("", "glitch"), "glitch");
        assert_eq!(combine_tags("synth", ""), "synth");
    }

    #[test]
    fn test_validate_requires_a_tag() {
        let form = MetadataForm {
            name: "Wobble".into(),
            ..MetadataForm::default()
        };
        assert_eq!(form.validate(), Err(MISSING_TAG));
    }

    #[test]
    fn test_validate_builds_update() {
        let meta = PatchMetadata {
            name: "Wobble".into(),
            tags: Some("sampler, utility".into()),
            description: "Grainy".into(),
        };
        let update = MetadataForm::from_metadata(&meta).validate().unwrap();
        assert_eq!(update.tags, "sampler, utility");
        assert_eq!(update.name, "Wobble");
        assert_eq!(update.description, "Grainy");
    }

    #[test]
    fn test_check_image() {
        assert_eq!(check_image("image/png", 10), Err(INVALID_IMAGE));
        assert_eq!(check_image(IMAGE_MIME, MAX_IMAGE_BYTES + 1), Err(IMAGE_TOO_LARGE));
        assert_eq!(check_image(IMAGE_MIME, MAX_IMAGE_BYTES), Ok(()));
    }
}
