//! Values derived from an alert: display timestamp, deep link, make/model text.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Locale, Offset, Utc};

use crate::error::SettingsError;

/// Turn an ANPR make/model label into display text: `honda_jazz` -> `HONDA JAZZ`.
pub fn normalize_make_model(raw: &str) -> String {
    raw.replace('_', " ").to_uppercase()
}

/// How alert epochs are rendered for humans.
#[derive(Debug, Clone)]
pub struct TimestampFormat {
    offset: FixedOffset,
    locale: Locale,
    pattern: String,
}

impl TimestampFormat {
    /// Long date/time in the style of `Friday, 1 January 2021 10:00:00 AM`.
    pub const DEFAULT_PATTERN: &'static str = "%A, %-d %B %Y %-I:%M:%S %p";
    pub const DEFAULT_LOCALE: &'static str = "en_AU";

    pub fn new(
        utc_offset_hours: i32,
        locale: &str,
        pattern: impl Into<String>,
    ) -> Result<Self, SettingsError> {
        let offset = utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or(SettingsError::OffsetOutOfRange(utc_offset_hours))?;
        let locale = Locale::try_from(locale)
            .map_err(|_| SettingsError::UnknownLocale(locale.to_string()))?;
        let pattern = pattern.into();

        // A bad item would make Display fail at render time.
        if StrftimeItems::new_with_locale(&pattern, locale).any(|item| matches!(item, Item::Error)) {
            return Err(SettingsError::InvalidPattern(pattern));
        }

        Ok(Self {
            offset,
            locale,
            pattern,
        })
    }

    /// Render Unix milliseconds. `None` when the value is outside chrono's range.
    pub fn render(&self, epoch_ms: i64) -> Option<String> {
        let utc = DateTime::<Utc>::from_timestamp_millis(epoch_ms)?;
        Some(
            utc.with_timezone(&self.offset)
                .format_localized(&self.pattern, self.locale)
                .to_string(),
        )
    }
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self {
            offset: Utc.fix(),
            locale: Locale::en_AU,
            pattern: Self::DEFAULT_PATTERN.to_string(),
        }
    }
}

/// Builds links that open an alert in the external viewer.
#[derive(Debug, Clone)]
pub struct ViewerLink {
    base_url: String,
}

impl ViewerLink {
    pub const DEFAULT_BASE_URL: &'static str =
        "https://cloud.openalpr.com/search/#search_type=alert";

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Both values are percent-encoded; plain alphanumerics pass through unchanged.
    pub fn build(&self, alert_list_id: &str, plate: &str) -> String {
        format!(
            "{}&alertlist={}&plate_number={}",
            self.base_url,
            urlencoding::encode(alert_list_id),
            urlencoding::encode(plate)
        )
    }
}

impl Default for ViewerLink {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}
