//! Identity document types captured by image rows.

use std::fmt;
use std::str::FromStr;

use rowkit_model::SearchItem;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ImageRowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IdentityDocumentType {
    #[serde(rename = "NRIC")]
    Nric,
    #[serde(rename = "PP")]
    Passport,
    #[serde(rename = "BC")]
    BirthCert,
    #[serde(rename = "FBC")]
    ForeignBirthCert,
    #[serde(rename = "FID")]
    ForeignId,
    #[serde(rename = "PR")]
    PermanentResident,
    #[serde(rename = "COY")]
    Company,
}

/// Keyboard layout suited to typing a document number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardKind {
    NumberPad,
    AsciiCapable,
    AsciiCapableNumberPad,
}

const ID_DIGITS: &str = "1234567890-";

impl IdentityDocumentType {
    pub const ID_OPTIONS: [IdentityDocumentType; 6] = [
        Self::BirthCert,
        Self::ForeignBirthCert,
        Self::ForeignId,
        Self::Nric,
        Self::Passport,
        Self::PermanentResident,
    ];

    pub const THIRD_PARTY_PAYOR_OPTIONS: [IdentityDocumentType; 7] = [
        Self::BirthCert,
        Self::ForeignBirthCert,
        Self::Company,
        Self::ForeignId,
        Self::Nric,
        Self::Passport,
        Self::PermanentResident,
    ];

    const ALL: [IdentityDocumentType; 7] = Self::THIRD_PARTY_PAYOR_OPTIONS;

    pub fn code(self) -> &'static str {
        match self {
            Self::Nric => "NRIC",
            Self::Passport => "PP",
            Self::BirthCert => "BC",
            Self::ForeignBirthCert => "FBC",
            Self::ForeignId => "FID",
            Self::PermanentResident => "PR",
            Self::Company => "COY",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Company => "COMPANY REGISTRATION NO.",
            Self::Nric => "NEW IDENTIFICATION NO.",
            Self::Passport => "PASSPORT",
            Self::BirthCert => "BIRTH CERTIFICATE",
            Self::ForeignBirthCert => "FOREIGN BIRTH CERTIFICATE",
            Self::ForeignId => "FOREIGN IDENTIFICATION NO.",
            Self::PermanentResident => "PERMANENT RESIDENT",
        }
    }

    /// Looks a type up by its description, ignoring case.
    pub fn from_description(description: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.description().eq_ignore_ascii_case(description.trim()))
    }

    pub fn keyboard(self) -> KeyboardKind {
        match self {
            Self::Nric => KeyboardKind::NumberPad,
            Self::Passport | Self::BirthCert => KeyboardKind::AsciiCapable,
            _ => KeyboardKind::AsciiCapableNumberPad,
        }
    }

    /// True when `c` may appear in a document number of this type.
    pub fn allows_char(self, c: char) -> bool {
        match self {
            Self::Nric => ID_DIGITS.contains(c),
            _ => c.is_ascii_alphabetic() || ID_DIGITS.contains(c),
        }
    }

    pub fn is_valid_number(self, number: &str) -> bool {
        !number.is_empty() && number.chars().all(|c| self.allows_char(c))
    }

    /// Whether the back of the document has to be captured as well.
    pub fn requires_back_id(self) -> bool {
        !matches!(
            self,
            Self::BirthCert | Self::ForeignBirthCert | Self::Passport
        )
    }

    pub fn is_foreigner(self) -> bool {
        matches!(
            self,
            Self::Passport | Self::ForeignBirthCert | Self::ForeignId | Self::PermanentResident
        )
    }
}

impl fmt::Display for IdentityDocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for IdentityDocumentType {
    type Err = ImageRowError;

    /// Parses the document code, ignoring case.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let code = raw.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or(ImageRowError::UnknownDocumentType { code })
    }
}

impl<'de> Deserialize<'de> for IdentityDocumentType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl SearchItem for IdentityDocumentType {
    fn matches_search_query(&self, query: &str) -> bool {
        let query = query.to_uppercase();
        self.code().contains(&query) || self.description().contains(&query)
    }

    /// Scopes are "LOCAL" and "FOREIGN".
    fn matches_scope(&self, scope: &str) -> bool {
        if scope.eq_ignore_ascii_case("FOREIGN") {
            self.is_foreigner()
        } else if scope.eq_ignore_ascii_case("LOCAL") {
            !self.is_foreigner()
        } else {
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_lookup_ignores_case() {
        assert_eq!(
            IdentityDocumentType::from_description("passport"),
            Some(IdentityDocumentType::Passport)
        );
        assert_eq!(
            IdentityDocumentType::from_description("Company Registration No."),
            Some(IdentityDocumentType::Company)
        );
        assert_eq!(IdentityDocumentType::from_description("licence"), None);
    }

    #[test]
    fn decodes_upper_cased_codes() {
        let kind: IdentityDocumentType = serde_json::from_str("\"fbc\"").expect("decode");
        assert_eq!(kind, IdentityDocumentType::ForeignBirthCert);
        assert!(serde_json::from_str::<IdentityDocumentType>("\"XX\"").is_err());
        assert_eq!(
            serde_json::to_string(&IdentityDocumentType::Company).expect("encode"),
            "\"COY\""
        );
    }

    #[test]
    fn back_id_and_foreigner_flags() {
        assert!(IdentityDocumentType::Nric.requires_back_id());
        assert!(!IdentityDocumentType::Passport.requires_back_id());
        assert!(IdentityDocumentType::PermanentResident.is_foreigner());
        assert!(!IdentityDocumentType::Company.is_foreigner());
    }

    #[test]
    fn nric_accepts_digits_and_dashes_only() {
        assert!(IdentityDocumentType::Nric.is_valid_number("900101-14-5678"));
        assert!(!IdentityDocumentType::Nric.is_valid_number("A1234"));
        assert!(IdentityDocumentType::Passport.is_valid_number("A1234567"));
        assert!(!IdentityDocumentType::Passport.is_valid_number(""));
        assert_eq!(
            IdentityDocumentType::Nric.keyboard(),
            KeyboardKind::NumberPad
        );
    }

    #[test]
    fn searchable_by_code_description_and_scope() {
        assert!(IdentityDocumentType::BirthCert.matches_search_query("birth"));
        assert!(IdentityDocumentType::ForeignId.matches_search_query("fid"));
        assert!(IdentityDocumentType::ForeignId.matches_scope("foreign"));
        assert!(!IdentityDocumentType::Nric.matches_scope("FOREIGN"));
        assert!(IdentityDocumentType::Nric.matches_scope("LOCAL"));
    }
}
