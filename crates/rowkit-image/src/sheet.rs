//! Planning what happens when an image row is tapped.
//!
//! The row offers the sources that are both configured and available on the
//! device, a watermarked preview of the current image, and a clear entry.
//! A sheet that would hold a single source entry is skipped and that source
//! is picked directly.

use tracing::debug;

use crate::row::{ActionStyle, ClearAction, ImageRef, ImageRow};
use crate::source::{ImageSource, SourceTypes};

/// Text stamped across previewed images.
pub const WATERMARK_TEXT: &str = "WATERMARK_TEXT";
pub const VIEW_IMAGE_TITLE: &str = "VIEW_IMAGE_TITLE";
pub const CLEAR_PHOTO_TITLE: &str = "CLEAR_PHOTO_TITLE";
pub const CANCEL_TITLE: &str = "CANCEL";

/// Produces a watermarked copy of an image. Rendering belongs to the host.
pub trait Watermark {
    fn apply(&self, text: &str, image: &ImageRef) -> Option<ImageRef>;
}

impl<F> Watermark for F
where
    F: Fn(&str, &ImageRef) -> Option<ImageRef>,
{
    fn apply(&self, text: &str, image: &ImageRef) -> Option<ImageRef> {
        self(text, image)
    }
}

/// One entry of the source action sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetAction {
    Source(ImageSource),
    ViewImage(ImageRef),
    ClearPhoto(ActionStyle),
    Cancel,
}

impl SheetAction {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Source(source) => source.localized_key(),
            Self::ViewImage(_) => VIEW_IMAGE_TITLE,
            Self::ClearPhoto(_) => CLEAR_PHOTO_TITLE,
            Self::Cancel => CANCEL_TITLE,
        }
    }

    pub fn style(&self) -> ActionStyle {
        match self {
            Self::ClearPhoto(style) => *style,
            Self::Cancel => ActionStyle::Cancel,
            Self::Source(_) | Self::ViewImage(_) => ActionStyle::Default,
        }
    }
}

/// Outcome of tapping an image row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionPlan {
    /// The row is disabled; nothing happens.
    Disabled,
    /// No configured source is available; present the default picker.
    PresentDefault,
    /// Only one source would be listed; go straight to it.
    Direct(ImageSource),
    /// Show the action sheet. The last entry is always [`SheetAction::Cancel`].
    Sheet(Vec<SheetAction>),
}

impl ImageRow {
    /// Plans the reaction to a tap given the sources `available` on the device.
    pub fn plan_selection(&self, available: SourceTypes, watermark: &dyn Watermark) -> SelectionPlan {
        if self.disabled {
            return SelectionPlan::Disabled;
        }

        let allowed = self.source_types.intersection(available);
        if allowed.is_empty() {
            debug!(
                configured = ?self.source_types,
                ?available,
                "No configured image source available"
            );
            return SelectionPlan::PresentDefault;
        }

        let mut actions = Vec::new();
        if !self.view_only {
            actions.extend(allowed.sources().map(SheetAction::Source));
        }

        if let Some(preview) = self
            .value
            .as_ref()
            .and_then(|image| watermark.apply(WATERMARK_TEXT, image))
        {
            actions.push(SheetAction::ViewImage(preview));
        }

        if let ClearAction::Yes(style) = self.clear_action
            && self.value.is_some()
            && !self.view_only
        {
            actions.push(SheetAction::ClearPhoto(style));
        }

        if !self.view_only
            && let [SheetAction::Source(source)] = actions.as_slice()
        {
            return SelectionPlan::Direct(*source);
        }

        actions.push(SheetAction::Cancel);
        SelectionPlan::Sheet(actions)
    }
}
