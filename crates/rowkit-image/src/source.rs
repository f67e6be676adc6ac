//! Image sources an image row can offer.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// A single place an image can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    PhotoLibrary,
    Camera,
    SavedPhotosAlbum,
}

impl ImageSource {
    /// Order in which sources are listed in the action sheet.
    pub const PRESENTATION_ORDER: [ImageSource; 3] = [
        ImageSource::Camera,
        ImageSource::PhotoLibrary,
        ImageSource::SavedPhotosAlbum,
    ];

    pub fn flag(self) -> SourceTypes {
        match self {
            Self::PhotoLibrary => SourceTypes::PHOTO_LIBRARY,
            Self::Camera => SourceTypes::CAMERA,
            Self::SavedPhotosAlbum => SourceTypes::SAVED_PHOTOS_ALBUM,
        }
    }

    /// Localization key of the action-sheet entry.
    pub fn localized_key(self) -> &'static str {
        match self {
            Self::Camera => "TAKE_PHOTO_TEXT",
            Self::PhotoLibrary => "PHOTO_LIBRARY_TEXT",
            Self::SavedPhotosAlbum => "SAVED_PHOTOS_TEXT",
        }
    }
}

bitflags! {
    /// Set of [`ImageSource`] values; bit `n` is the picker source with raw value `n`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SourceTypes: u8 {
        const PHOTO_LIBRARY = 1 << 0;
        const CAMERA = 1 << 1;
        const SAVED_PHOTOS_ALBUM = 1 << 2;
    }
}

impl Default for SourceTypes {
    fn default() -> Self {
        Self::all()
    }
}

impl SourceTypes {
    /// Member sources in presentation order.
    pub fn sources(self) -> impl Iterator<Item = ImageSource> {
        ImageSource::PRESENTATION_ORDER
            .into_iter()
            .filter(move |source| self.contains(source.flag()))
    }

    /// The only member, when exactly one source is set.
    pub fn single_source(self) -> Option<ImageSource> {
        let mut sources = self.sources();
        match (sources.next(), sources.next()) {
            (Some(source), None) => Some(source),
            _ => None,
        }
    }

    /// Localization key when the set names exactly one source.
    pub fn localized_key(self) -> Option<&'static str> {
        self.single_source().map(ImageSource::localized_key)
    }
}

impl From<ImageSource> for SourceTypes {
    fn from(source: ImageSource) -> Self {
        source.flag()
    }
}

impl FromIterator<ImageSource> for SourceTypes {
    fn from_iter<I: IntoIterator<Item = ImageSource>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, source| set | source.flag())
    }
}
