//! Localized words for day, month and year counts.
//!
//! Formatting code never picks words itself. It asks a [`ResourceProvider`]
//! for "5 days" or "today", and the provider decides the grammatical form
//! using the plural rule of its language.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Days,
    Months,
    Years,
}

/// Fixed, non-counted strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Today,
    /// Prefix for events still ahead.
    Remaining,
    /// Prefix for events already behind.
    Elapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    One,
    Few,
    Many,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralRule {
    /// Russian, Ukrainian, Belarusian: one / few / many.
    Slavic,
    /// English and similar: one / other.
    English,
}

impl PluralRule {
    /// Category for a whole quantity. The sign is ignored.
    pub fn category(&self, quantity: i64) -> PluralCategory {
        let n = quantity.unsigned_abs();
        match self {
            PluralRule::Slavic => {
                let last_two = n % 100;
                let last = n % 10;
                if (11..=19).contains(&last_two) {
                    PluralCategory::Many
                } else if last == 1 {
                    PluralCategory::One
                } else if (2..=4).contains(&last) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            PluralRule::English => {
                if n == 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
        }
    }
}

/// Source of localized strings consumed by the duration formatter.
pub trait ResourceProvider {
    /// Count with its correctly inflected unit word, e.g. "2 дня".
    fn resolve(&self, quantity: i64, unit: UnitKind) -> String;

    fn text(&self, key: TextKey) -> String;
}

impl<R: ResourceProvider + ?Sized> ResourceProvider for &R {
    fn resolve(&self, quantity: i64, unit: UnitKind) -> String {
        (**self).resolve(quantity, unit)
    }

    fn text(&self, key: TextKey) -> String {
        (**self).text(key)
    }
}

impl<R: ResourceProvider + ?Sized> ResourceProvider for Box<R> {
    fn resolve(&self, quantity: i64, unit: UnitKind) -> String {
        (**self).resolve(quantity, unit)
    }

    fn text(&self, key: TextKey) -> String {
        (**self).text(key)
    }
}

/// Deterministic Russian provider with the Slavic rule hard-coded.
///
/// Needs no locale data, which makes it the provider of choice in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubResourceProvider;

impl ResourceProvider for StubResourceProvider {
    fn resolve(&self, quantity: i64, unit: UnitKind) -> String {
        let category = PluralRule::Slavic.category(quantity);
        let word = match (unit, category) {
            (UnitKind::Days, PluralCategory::One) => "день",
            (UnitKind::Days, PluralCategory::Few) => "дня",
            (UnitKind::Days, _) => "дней",
            (UnitKind::Months, PluralCategory::One) => "месяц",
            (UnitKind::Months, PluralCategory::Few) => "месяца",
            (UnitKind::Months, _) => "месяцев",
            (UnitKind::Years, PluralCategory::One) => "год",
            (UnitKind::Years, PluralCategory::Few) => "года",
            (UnitKind::Years, _) => "лет",
        };
        format!("{quantity} {word}")
    }

    fn text(&self, key: TextKey) -> String {
        match key {
            TextKey::Today => "Сегодня",
            TextKey::Remaining => "осталось",
            TextKey::Elapsed => "прошло",
        }
        .to_string()
    }
}

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error(
        "no built-in resources for locale {0:?}, expected one of: {expected}",
        expected = LocaleResources::BUILT_IN.join(", ")
    )]
    UnknownLocale(String),
    #[error("failed to read resource file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse resource bundle")]
    Parse(#[from] toml::de::Error),
}

/// Word forms of one unit. Missing forms fall back towards `one`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UnitForms {
    pub one: String,
    #[serde(default)]
    pub few: Option<String>,
    #[serde(default)]
    pub many: Option<String>,
    #[serde(default)]
    pub other: Option<String>,
}

impl UnitForms {
    fn slavic(one: &str, few: &str, many: &str) -> Self {
        Self {
            one: one.to_string(),
            few: Some(few.to_string()),
            many: Some(many.to_string()),
            other: None,
        }
    }

    fn english(one: &str, other: &str) -> Self {
        Self {
            one: one.to_string(),
            few: None,
            many: None,
            other: Some(other.to_string()),
        }
    }

    pub fn select(&self, category: PluralCategory) -> &str {
        let chosen = match category {
            PluralCategory::One => None,
            PluralCategory::Few => self.few.as_ref().or(self.other.as_ref()),
            PluralCategory::Many => self.many.as_ref().or(self.other.as_ref()),
            PluralCategory::Other => self.other.as_ref().or(self.many.as_ref()),
        };
        chosen.unwrap_or(&self.one)
    }
}

/// Everything one language needs, loadable from TOML:
///
/// ```toml
/// rule = "slavic"
/// today = "Сегодня"
/// remaining = "осталось"
/// elapsed = "прошло"
///
/// [days]
/// one = "день"
/// few = "дня"
/// many = "дней"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocaleBundle {
    pub rule: PluralRule,
    pub today: String,
    pub remaining: String,
    pub elapsed: String,
    pub days: UnitForms,
    pub months: UnitForms,
    pub years: UnitForms,
}

impl LocaleBundle {
    fn russian() -> Self {
        Self {
            rule: PluralRule::Slavic,
            today: "Сегодня".into(),
            remaining: "осталось".into(),
            elapsed: "прошло".into(),
            days: UnitForms::slavic("день", "дня", "дней"),
            months: UnitForms::slavic("месяц", "месяца", "месяцев"),
            years: UnitForms::slavic("год", "года", "лет"),
        }
    }

    fn ukrainian() -> Self {
        Self {
            rule: PluralRule::Slavic,
            today: "Сьогодні".into(),
            remaining: "залишилось".into(),
            elapsed: "минуло".into(),
            days: UnitForms::slavic("день", "дні", "днів"),
            months: UnitForms::slavic("місяць", "місяці", "місяців"),
            years: UnitForms::slavic("рік", "роки", "років"),
        }
    }

    fn english() -> Self {
        Self {
            rule: PluralRule::English,
            today: "Today".into(),
            remaining: "remaining".into(),
            elapsed: "elapsed".into(),
            days: UnitForms::english("day", "days"),
            months: UnitForms::english("month", "months"),
            years: UnitForms::english("year", "years"),
        }
    }

    fn forms(&self, unit: UnitKind) -> &UnitForms {
        match unit {
            UnitKind::Days => &self.days,
            UnitKind::Months => &self.months,
            UnitKind::Years => &self.years,
        }
    }
}

/// Provider backed by a language bundle, built-in or loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleResources {
    bundle: LocaleBundle,
}

impl LocaleResources {
    pub const BUILT_IN: [&'static str; 3] = ["ru", "uk", "en"];

    pub fn new(bundle: LocaleBundle) -> Self {
        Self { bundle }
    }

    /// Built-in bundle for a language tag such as `ru`, `uk-UA` or `en_US`.
    pub fn for_locale(tag: &str) -> Result<Self, ResourceError> {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        let bundle = match language.as_str() {
            "ru" => LocaleBundle::russian(),
            "uk" => LocaleBundle::ukrainian(),
            "en" => LocaleBundle::english(),
            _ => return Err(ResourceError::UnknownLocale(tag.to_string())),
        };
        debug!(locale = tag, "Using built-in locale resources");
        Ok(Self::new(bundle))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ResourceError> {
        let bundle: LocaleBundle = toml::from_str(content)?;
        Ok(Self::new(bundle))
    }

    pub fn from_path(path: &Path) -> Result<Self, ResourceError> {
        let content = std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let resources = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "Loaded locale resources from file");
        Ok(resources)
    }

    pub fn rule(&self) -> PluralRule {
        self.bundle.rule
    }
}

impl ResourceProvider for LocaleResources {
    fn resolve(&self, quantity: i64, unit: UnitKind) -> String {
        let category = self.bundle.rule.category(quantity);
        let word = self.bundle.forms(unit).select(category);
        format!("{quantity} {word}")
    }

    fn text(&self, key: TextKey) -> String {
        match key {
            TextKey::Today => self.bundle.today.clone(),
            TextKey::Remaining => self.bundle.remaining.clone(),
            TextKey::Elapsed => self.bundle.elapsed.clone(),
        }
    }
}
