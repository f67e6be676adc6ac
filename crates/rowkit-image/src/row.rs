//! Image row state.

use serde::{Deserialize, Serialize};

use crate::document::IdentityDocumentType;
use crate::source::SourceTypes;

/// Handle to an image held by the host; pixels never pass through this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef {
    pub id: String,
    pub width: u32,
    pub height: u32,
}

impl ImageRef {
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }
}

/// Visual style of an action-sheet entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStyle {
    #[default]
    Default,
    Cancel,
    Destructive,
}

/// Whether the row offers to clear its image, and how the entry looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearAction {
    No,
    Yes(ActionStyle),
}

impl Default for ClearAction {
    fn default() -> Self {
        Self::Yes(ActionStyle::Destructive)
    }
}

/// A form row whose value is an image picked from one of `source_types`.
#[derive(Debug, Clone, Default)]
pub struct ImageRow {
    tag: Option<String>,
    pub title: Option<String>,
    pub value: Option<ImageRef>,
    pub image_url: Option<String>,
    pub source_types: SourceTypes,
    pub clear_action: ClearAction,
    pub view_only: bool,
    pub has_on_click_alert_box: bool,
    pub disabled: bool,
    pub image_type: Option<IdentityDocumentType>,
}

impl ImageRow {
    pub fn new(tag: Option<&str>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    #[must_use]
    pub fn with_source_types(mut self, source_types: SourceTypes) -> Self {
        self.source_types = source_types;
        self
    }

    #[must_use]
    pub fn with_clear_action(mut self, clear_action: ClearAction) -> Self {
        self.clear_action = clear_action;
        self
    }

    #[must_use]
    pub fn with_view_only(mut self, view_only: bool) -> Self {
        self.view_only = view_only;
        self
    }

    #[must_use]
    pub fn with_alert_box(mut self, enable: bool) -> Self {
        self.has_on_click_alert_box = enable;
        self
    }

    #[must_use]
    pub fn with_image_type(mut self, image_type: IdentityDocumentType) -> Self {
        self.image_type = Some(image_type);
        self
    }

    /// Stores the image returned by a picker.
    pub fn set_image(&mut self, image: ImageRef, url: Option<String>) {
        self.value = Some(image);
        self.image_url = url;
    }

    pub fn clear(&mut self) {
        self.value = None;
        self.image_url = None;
    }

    pub fn has_image(&self) -> bool {
        self.value.is_some()
    }
}
