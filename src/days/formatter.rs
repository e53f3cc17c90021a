use tracing::debug;

use crate::days::display::DisplayOption;
use crate::days::period::{DaysDifference, Period};
use crate::days::plural::{ResourceProvider, TextKey, UnitKind};

const MONTHS_IN_YEAR: i64 = 12;

/// Turns periods into display text using a [`ResourceProvider`] for words.
#[derive(Debug, Clone)]
pub struct DurationFormatter<R> {
    resources: R,
}

impl<R: ResourceProvider> DurationFormatter<R> {
    pub fn new(resources: R) -> Self {
        Self { resources }
    }

    pub fn format_days(&self, days: i64) -> String {
        self.resources.resolve(days, UnitKind::Days)
    }

    pub fn format_months(&self, months: i64) -> String {
        self.resources.resolve(months, UnitKind::Months)
    }

    pub fn format_years(&self, years: i64) -> String {
        self.resources.resolve(years, UnitKind::Years)
    }

    /// Compose the text for a calculated period.
    ///
    /// `total_days` drives `Day` output, since `period.days` excludes the days
    /// absorbed by years and months. With `show_minus` unset a future event
    /// (`total_days < 0`) is shown with absolute values.
    pub fn format(
        &self,
        period: &Period,
        option: DisplayOption,
        total_days: i64,
        show_minus: bool,
    ) -> String {
        let absolute = !show_minus && total_days < 0;
        let shown = |value: i64| if absolute { value.abs() } else { value };

        match option {
            DisplayOption::Day => self.format_days(shown(total_days)),
            DisplayOption::MonthDay => {
                let months =
                    i64::from(period.years) * MONTHS_IN_YEAR + i64::from(period.months);
                let components = self.components(
                    None,
                    Some(shown(months)),
                    Some(shown(i64::from(period.days))),
                );
                join_components(&components)
            }
            DisplayOption::YearMonthDay => {
                let components = self.components(
                    Some(shown(i64::from(period.years))),
                    Some(shown(i64::from(period.months))),
                    Some(shown(i64::from(period.days))),
                );
                join_components(&components)
            }
        }
    }

    /// Text for a full comparison result: "today" or the composed period.
    pub fn format_difference(
        &self,
        difference: &DaysDifference,
        option: DisplayOption,
        show_minus: bool,
    ) -> String {
        match difference {
            DaysDifference::Today { .. } => self.resources.text(TextKey::Today),
            DaysDifference::Calculated {
                period, total_days, ..
            } => {
                let total_days = if show_minus {
                    *total_days
                } else {
                    total_days.abs()
                };
                self.format(period, option, total_days, show_minus)
            }
        }
    }

    /// Detail text with a "remaining"/"elapsed" prefix and no minus sign.
    pub fn analysis_text(&self, difference: &DaysDifference, option: DisplayOption) -> String {
        match difference {
            DaysDifference::Today { .. } => self.resources.text(TextKey::Today),
            DaysDifference::Calculated { total_days, .. } => {
                let prefix = if *total_days < 0 {
                    self.resources.text(TextKey::Remaining)
                } else {
                    self.resources.text(TextKey::Elapsed)
                };
                let body = self.format_difference(difference, option, false);
                format!("{prefix} {body}")
            }
        }
    }

    // Zero-valued components are dropped; order is years, months, days.
    fn components(
        &self,
        years: Option<i64>,
        months: Option<i64>,
        days: Option<i64>,
    ) -> Vec<String> {
        let mut components = Vec::with_capacity(3);
        if let Some(years) = years.filter(|&v| v != 0) {
            components.push(self.format_years(years));
        }
        if let Some(months) = months.filter(|&v| v != 0) {
            components.push(self.format_months(months));
        }
        if let Some(days) = days.filter(|&v| v != 0) {
            components.push(self.format_days(days));
        }
        components
    }
}

/// Join phrases with single spaces. No phrases yields an empty string.
pub fn join_components(components: &[String]) -> String {
    if components.is_empty() {
        debug!("All period components are zero, nothing to show");
    }
    components.join(" ")
}
