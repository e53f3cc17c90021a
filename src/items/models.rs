use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::days::DisplayOption;

/// A tracked event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub details: String,
    /// Event date, milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(default)]
    pub color_tag: Option<ColorTag>,
    #[serde(default)]
    pub display_option: DisplayOption,
}

impl Item {
    pub fn new(title: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id: 0,
            title: title.into(),
            details: String::new(),
            timestamp,
            color_tag: None,
            display_option: DisplayOption::default(),
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    pub fn with_color(mut self, color: ColorTag) -> Self {
        self.color_tag = Some(color);
        self
    }

    pub fn with_display_option(mut self, option: DisplayOption) -> Self {
        self.display_option = option;
        self
    }

    /// The item's own option, or `fallback` when it still has the default.
    pub fn effective_display_option(&self, fallback: DisplayOption) -> DisplayOption {
        if self.display_option == DisplayOption::default() {
            fallback
        } else {
            self.display_option
        }
    }

    /// Case-insensitive substring match on title and details.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) || self.details.to_lowercase().contains(&query)
    }

    /// Same event apart from id and colour.
    pub fn same_event(&self, other: &Item) -> bool {
        self.title == other.title
            && self.details == other.details
            && self.timestamp == other.timestamp
            && self.display_option == other.display_option
    }
}

/// RGB colour label, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorTag(u32);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid colour {0:?}, expected #RRGGBB")]
pub struct ParseColorError(pub String);

impl ColorTag {
    /// Keeps the low 24 bits, dropping any alpha channel.
    pub fn from_rgb(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }
}

impl FromStr for ColorTag {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_string()));
        }
        u32::from_str_radix(hex, 16)
            .map(ColorTag)
            .map_err(|_| ParseColorError(s.to_string()))
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl Serialize for ColorTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ColorTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// List order by event timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[serde(alias = "asc")]
    Ascending,
    /// Newest first.
    #[default]
    #[serde(alias = "desc")]
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order {0:?}, expected asc or desc")]
pub struct ParseSortOrderError(pub String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(ParseSortOrderError(s.to_string())),
        }
    }
}

impl SortOrder {
    pub fn sort(&self, items: &mut [Item]) {
        match self {
            SortOrder::Ascending => items.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
            SortOrder::Descending => items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        }
    }
}
