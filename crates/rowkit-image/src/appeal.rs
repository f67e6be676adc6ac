//! Appeal acknowledgement gate in front of picking or clearing an image.
//!
//! Rows with `has_on_click_alert_box` ask the user to confirm before a
//! source is opened or the image is removed. Confirming a removal also
//! notifies the row's action handler with no value.

use tracing::{debug, info};

use crate::row::{ImageRef, ImageRow};
use crate::sheet::SheetAction;
use crate::source::ImageSource;

pub const APPEAL_TITLE: &str = "GENDER_ACK_TITLE_ACKNOWLEDGEMENT";
pub const APPEAL_MESSAGE: &str = "POIV_UNAPPEAL_ACKNOWLEDGEMENT";
pub const APPEAL_CONFIRM: &str = "I_CONFIRM";
pub const APPEAL_CANCEL: &str = "CANCEL";

/// Confirmation the user must give before the row proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppealPrompt {
    /// Source to open on confirmation; `None` means the image is cleared.
    pub source: Option<ImageSource>,
}

impl AppealPrompt {
    pub fn title(&self) -> &'static str {
        APPEAL_TITLE
    }

    pub fn message(&self) -> &'static str {
        APPEAL_MESSAGE
    }

    /// Titles of the (cancel, confirm) buttons.
    pub fn buttons(&self) -> [&'static str; 2] {
        [APPEAL_CANCEL, APPEAL_CONFIRM]
    }
}

/// What the host has to do after the row handled a choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// Present the picker for this source.
    PresentPicker(ImageSource),
    /// Ask for acknowledgement first.
    Appeal(AppealPrompt),
    /// The image was removed. `notify_action` asks the host to call the
    /// row's action handler with no value.
    Cleared { notify_action: bool },
    /// Show this (watermarked) image.
    ShowImage(ImageRef),
    /// Nothing to do.
    Dismissed,
}

impl ImageRow {
    /// Handles a picked sheet entry, or a direct source from the plan.
    pub fn choose(&mut self, action: SheetAction) -> ChoiceOutcome {
        match action {
            SheetAction::Source(source) => self.open_source(source),
            SheetAction::ViewImage(image) => ChoiceOutcome::ShowImage(image),
            SheetAction::ClearPhoto(_) if self.has_on_click_alert_box => {
                ChoiceOutcome::Appeal(AppealPrompt { source: None })
            }
            SheetAction::ClearPhoto(_) => {
                self.clear();
                ChoiceOutcome::Cleared {
                    notify_action: false,
                }
            }
            SheetAction::Cancel => ChoiceOutcome::Dismissed,
        }
    }

    /// Opens `source`, passing through the appeal gate when enabled.
    pub fn open_source(&self, source: ImageSource) -> ChoiceOutcome {
        if self.disabled {
            return ChoiceOutcome::Dismissed;
        }
        if self.has_on_click_alert_box {
            ChoiceOutcome::Appeal(AppealPrompt {
                source: Some(source),
            })
        } else {
            ChoiceOutcome::PresentPicker(source)
        }
    }

    /// The user acknowledged `prompt`.
    pub fn confirm_appeal(&mut self, prompt: AppealPrompt) -> ChoiceOutcome {
        match prompt.source {
            Some(source) if self.disabled => {
                debug!(?source, "Appeal confirmed on a disabled row");
                ChoiceOutcome::Dismissed
            }
            Some(source) => ChoiceOutcome::PresentPicker(source),
            None => {
                info!(tag = self.tag(), "Image cleared after appeal acknowledgement");
                self.clear();
                ChoiceOutcome::Cleared {
                    notify_action: true,
                }
            }
        }
    }

    /// The user backed out of `prompt`; the row is left as it was.
    pub fn cancel_appeal(&self, prompt: AppealPrompt) -> ChoiceOutcome {
        debug!(?prompt, "Appeal cancelled");
        ChoiceOutcome::Dismissed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::ActionStyle;

    fn row_with_image(alert: bool) -> ImageRow {
        let mut row = ImageRow::new(Some("back")).with_alert_box(alert);
        row.set_image(ImageRef::new("img", 1, 1), Some("file:///img".into()));
        row
    }

    #[test]
    fn source_without_gate_presents_picker() {
        let mut row = row_with_image(false);
        assert_eq!(
            row.choose(SheetAction::Source(ImageSource::Camera)),
            ChoiceOutcome::PresentPicker(ImageSource::Camera)
        );
    }

    #[test]
    fn gated_source_needs_confirmation() {
        let mut row = row_with_image(true);
        let ChoiceOutcome::Appeal(prompt) = row.choose(SheetAction::Source(ImageSource::PhotoLibrary))
        else {
            panic!("expected appeal prompt");
        };
        assert_eq!(prompt.title(), APPEAL_TITLE);
        assert_eq!(prompt.buttons(), ["CANCEL", "I_CONFIRM"]);
        assert_eq!(
            row.confirm_appeal(prompt),
            ChoiceOutcome::PresentPicker(ImageSource::PhotoLibrary)
        );
        assert!(row.has_image());
    }

    #[test]
    fn clear_without_gate_is_silent() {
        let mut row = row_with_image(false);
        assert_eq!(
            row.choose(SheetAction::ClearPhoto(ActionStyle::Destructive)),
            ChoiceOutcome::Cleared {
                notify_action: false
            }
        );
        assert!(!row.has_image());
        assert!(row.image_url.is_none());
    }

    #[test]
    fn gated_clear_notifies_after_confirmation() {
        let mut row = row_with_image(true);
        let outcome = row.choose(SheetAction::ClearPhoto(ActionStyle::Destructive));
        assert_eq!(outcome, ChoiceOutcome::Appeal(AppealPrompt { source: None }));
        assert!(row.has_image());

        assert_eq!(
            row.confirm_appeal(AppealPrompt { source: None }),
            ChoiceOutcome::Cleared {
                notify_action: true
            }
        );
        assert!(!row.has_image());
    }

    #[test]
    fn cancelled_appeal_keeps_image() {
        let row = row_with_image(true);
        assert_eq!(
            row.cancel_appeal(AppealPrompt { source: None }),
            ChoiceOutcome::Dismissed
        );
        assert!(row.has_image());
    }

    #[test]
    fn disabled_row_never_opens_a_picker() {
        let mut row = row_with_image(true);
        row.disabled = true;
        assert_eq!(
            row.open_source(ImageSource::Camera),
            ChoiceOutcome::Dismissed
        );
        assert_eq!(
            row.confirm_appeal(AppealPrompt {
                source: Some(ImageSource::Camera)
            }),
            ChoiceOutcome::Dismissed
        );
    }
}
