#![deny(unsafe_code)]

pub mod appeal;
pub mod document;
pub mod error;
pub mod row;
pub mod sheet;
pub mod source;

pub use crate::appeal::{AppealPrompt, ChoiceOutcome};
pub use crate::document::{IdentityDocumentType, KeyboardKind};
pub use crate::error::ImageRowError;
pub use crate::row::{ActionStyle, ClearAction, ImageRef, ImageRow};
pub use crate::sheet::{SelectionPlan, SheetAction, Watermark};
pub use crate::source::{ImageSource, SourceTypes};
