//! Project card hover lift and the image preview dialog.

/// Card transform while the pointer is over it
pub const CARD_HOVER_TRANSFORM: &str = "translateY(-10px) scale(1.02)";
/// Card transform at rest
pub const CARD_REST_TRANSFORM: &str = "translateY(0) scale(1)";

/// Transform for a project card given its hover state
pub fn card_transform(hovered: bool) -> &'static str {
    if hovered {
        CARD_HOVER_TRANSFORM
    } else {
        CARD_REST_TRANSFORM
    }
}

/// Image shown in the project preview dialog
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagePreview {
    pub title: String,
    pub image_url: String,
}

impl ImagePreview {
    pub fn new(title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image_url: image_url.into(),
        }
    }

    /// Alt text mirrors the title
    pub fn alt(&self) -> &str {
        &self.title
    }
}
