//! User profile record and its display view.
//!
//! The record is an opaque JSON document with camelCase keys, as stored by
//! the profile editor. All fields are optional. The avatar is carried as an
//! opaque string (typically a data URL) and never inspected.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sudba_time::CalendarDate;
use sudba_zodiac::{ZodiacSign, horoscope_for_name, sign_for_date};
use tracing::{debug, warn};

use crate::chart::{BirthChart, birth_chart};
use crate::error::SudbaError;

/// Placeholder for empty fields in the view.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Stored profile record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    pub name: Option<String>,
    /// `YYYY-MM-DD`.
    pub birth_date: Option<String>,
    /// English sign name.
    pub zodiac_sign: Option<String>,
    pub city: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

/// Display-ready profile with placeholders filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub name: String,
    /// `DD.MM.YYYY`, or the raw text if it is not a valid date.
    pub birth_date: String,
    pub zodiac_sign: String,
    pub city: String,
    pub email: String,
    pub bio: String,
    pub has_avatar: bool,
    /// `None` when no sign is stored.
    pub horoscope: Option<&'static str>,
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn or_placeholder(field: &Option<String>) -> String {
    non_empty(field).unwrap_or(NOT_SPECIFIED).to_string()
}

impl UserProfile {
    pub fn from_json(text: &str) -> Result<Self, SudbaError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, SudbaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a profile document from disk.
    pub fn load(path: &Path) -> Result<Self, SudbaError> {
        let text = std::fs::read_to_string(path).map_err(|source| SudbaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Write the profile document to disk.
    pub fn save(&self, path: &Path) -> Result<(), SudbaError> {
        let text = self.to_json()?;
        std::fs::write(path, text).map_err(|source| SudbaError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parsed birth date, `None` if the field is empty.
    pub fn parsed_birth_date(&self) -> Result<Option<CalendarDate>, SudbaError> {
        non_empty(&self.birth_date)
            .map(|s| s.parse::<CalendarDate>().map_err(SudbaError::from))
            .transpose()
    }

    /// Fill `zodiac_sign` from the birth date.
    ///
    /// Leaves the stored sign untouched when the birth date is missing or
    /// does not parse.
    pub fn resolve_zodiac(&mut self) -> Option<ZodiacSign> {
        let date = match self.parsed_birth_date() {
            Ok(date) => date?,
            Err(e) => {
                warn!(error = %e, "zodiac sign kept, birth date unreadable");
                return None;
            }
        };
        let sign = sign_for_date(&date);
        if non_empty(&self.zodiac_sign) != Some(sign.name()) {
            debug!(%date, %sign, "zodiac sign resolved from birth date");
        }
        self.zodiac_sign = Some(sign.name().to_string());
        Some(sign)
    }

    /// Birth chart for the stored birth date.
    pub fn reading(&self) -> Result<BirthChart, SudbaError> {
        let date = self.parsed_birth_date()?.ok_or(SudbaError::MissingBirthDate)?;
        Ok(birth_chart(&date))
    }

    /// Display view with placeholders.
    pub fn view(&self) -> ProfileView {
        let birth_date = match self.parsed_birth_date() {
            Ok(Some(d)) => d.to_dotted(),
            Ok(None) => NOT_SPECIFIED.to_string(),
            Err(e) => {
                warn!(error = %e, "birth date shown unformatted");
                or_placeholder(&self.birth_date)
            }
        };
        ProfileView {
            name: or_placeholder(&self.name),
            birth_date,
            zodiac_sign: or_placeholder(&self.zodiac_sign),
            city: or_placeholder(&self.city),
            email: or_placeholder(&self.email),
            bio: or_placeholder(&self.bio),
            has_avatar: non_empty(&self.avatar).is_some(),
            horoscope: horoscope_for_name(non_empty(&self.zodiac_sign)),
        }
    }
}
