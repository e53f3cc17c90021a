use chrono::{NaiveDate, TimeZone};

use crate::app::state::ListState;
use crate::days::{
    DaysDifference, DisplayOption, DurationFormatter, ResourceProvider, difference_for_timestamp,
};
use crate::items::Item;
use crate::util::time::{DATE_FORMAT, date_from_millis};

/// Renders items as plain text lines relative to a fixed "today".
pub struct ItemView<'a, R, Tz: TimeZone> {
    pub formatter: &'a DurationFormatter<R>,
    pub today: NaiveDate,
    pub tz: Tz,
    pub default_option: DisplayOption,
    pub show_minus: bool,
}

impl<R: ResourceProvider, Tz: TimeZone> ItemView<'_, R, Tz> {
    pub fn difference(&self, item: &Item) -> DaysDifference {
        difference_for_timestamp(item.timestamp, self.today, &self.tz)
    }

    /// Day count text for list rows, e.g. "5 дней" or "1 год 2 месяца".
    pub fn days_text(&self, item: &Item) -> String {
        let option = item.effective_display_option(self.default_option);
        self.formatter
            .format_difference(&self.difference(item), option, self.show_minus)
    }

    /// Prefixed text for the detail view, e.g. "осталось 7 дней".
    pub fn analysis_text(&self, item: &Item) -> String {
        let option = item.effective_display_option(self.default_option);
        self.formatter.analysis_text(&self.difference(item), option)
    }

    fn event_date(&self, item: &Item) -> String {
        date_from_millis(item.timestamp, &self.tz)
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| "????-??-??".to_string())
    }

    pub fn render_row(&self, item: &Item) -> String {
        let color = item
            .color_tag
            .map(|c| format!(" {c}"))
            .unwrap_or_default();
        format!(
            "{:>4}  {}  {}{}  {}",
            item.id,
            self.event_date(item),
            item.title,
            color,
            self.days_text(item)
        )
    }

    pub fn render_list(&self, state: &ListState) -> Vec<String> {
        state
            .visible_items()
            .iter()
            .map(|item| self.render_row(item))
            .collect()
    }

    pub fn render_detail(&self, item: &Item) -> Vec<String> {
        let mut lines = vec![format!("{} ({})", item.title, self.event_date(item))];
        if !item.details.is_empty() {
            lines.push(item.details.clone());
        }
        if let Some(color) = item.color_tag {
            lines.push(format!("color: {color}"));
        }
        lines.push(format!("display: {}", item.display_option));
        lines.push(self.analysis_text(item));
        lines
    }
}
