pub mod display;
pub mod formatter;
pub mod period;
pub mod plural;

pub use display::DisplayOption;
pub use formatter::DurationFormatter;
pub use period::{DaysDifference, Period, compute_period, difference_for_timestamp};
pub use plural::{LocaleResources, ResourceProvider, StubResourceProvider};
