use chrono::NaiveDate;
use dayscount::days::formatter::join_components;
use dayscount::days::{
    DaysDifference, DisplayOption, DurationFormatter, LocaleResources, Period,
    StubResourceProvider, compute_period,
};

fn stub() -> DurationFormatter<StubResourceProvider> {
    DurationFormatter::new(StubResourceProvider)
}

fn english() -> DurationFormatter<LocaleResources> {
    DurationFormatter::new(LocaleResources::for_locale("en").unwrap())
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// --- Single phrases ---

#[test]
fn test_days_phrase_slavic_forms() {
    let f = stub();
    assert_eq!(f.format_days(1), "1 день");
    assert_eq!(f.format_days(2), "2 дня");
    assert_eq!(f.format_days(4), "4 дня");
    assert_eq!(f.format_days(5), "5 дней");
    assert_eq!(f.format_days(0), "0 дней");
}

#[test]
fn test_days_phrase_teens_take_many_form() {
    let f = stub();
    assert_eq!(f.format_days(11), "11 дней");
    assert_eq!(f.format_days(12), "12 дней");
    assert_eq!(f.format_days(14), "14 дней");
    assert_eq!(f.format_days(111), "111 дней");
    assert_eq!(f.format_days(112), "112 дней");
}

#[test]
fn test_days_phrase_follows_last_digit_after_teens() {
    let f = stub();
    assert_eq!(f.format_days(21), "21 день");
    assert_eq!(f.format_days(22), "22 дня");
    assert_eq!(f.format_days(101), "101 день");
    assert_eq!(f.format_days(365), "365 дней");
}

#[test]
fn test_months_and_years_phrases() {
    let f = stub();
    assert_eq!(f.format_months(1), "1 месяц");
    assert_eq!(f.format_months(2), "2 месяца");
    assert_eq!(f.format_months(14), "14 месяцев");
    assert_eq!(f.format_years(1), "1 год");
    assert_eq!(f.format_years(3), "3 года");
    assert_eq!(f.format_years(5), "5 лет");
    assert_eq!(f.format_years(21), "21 год");
}

#[test]
fn test_negative_quantity_keeps_sign_and_form() {
    let f = stub();
    assert_eq!(f.format_days(-1), "-1 день");
    assert_eq!(f.format_days(-5), "-5 дней");
}

// --- Day option ---

#[test]
fn test_day_option_uses_total_days() {
    let period = Period::new(1, 0, 0);
    assert_eq!(stub().format(&period, DisplayOption::Day, 365, true), "365 дней");
}

#[test]
fn test_day_option_hundred_days_before() {
    let difference = compute_period(d(2024, 1, 1), d(2024, 4, 10));
    assert_eq!(
        stub().format_difference(&difference, DisplayOption::Day, true),
        "100 дней"
    );
}

#[test]
fn test_day_option_future_with_minus() {
    let period = Period::new(0, 0, 5);
    assert_eq!(stub().format(&period, DisplayOption::Day, -5, true), "-5 дней");
}

#[test]
fn test_day_option_future_without_minus() {
    let period = Period::new(0, 0, 5);
    assert_eq!(stub().format(&period, DisplayOption::Day, -5, false), "5 дней");
}

// --- MonthDay option ---

#[test]
fn test_month_day_folds_years_into_months() {
    let period = Period::new(1, 2, 0);
    assert_eq!(stub().format(&period, DisplayOption::MonthDay, 425, true), "14 месяцев");
}

#[test]
fn test_month_day_with_days() {
    let f = stub();
    assert_eq!(
        f.format(&Period::new(4, 0, 10), DisplayOption::MonthDay, 1471, true),
        "48 месяцев 10 дней"
    );
    assert_eq!(
        f.format(&Period::new(0, 2, 5), DisplayOption::MonthDay, 64, true),
        "2 месяца 5 дней"
    );
}

#[test]
fn test_month_day_days_only() {
    let period = Period::new(0, 0, 21);
    assert_eq!(stub().format(&period, DisplayOption::MonthDay, 21, true), "21 день");
}

#[test]
fn test_month_day_future_is_unsigned() {
    let difference = compute_period(d(2025, 5, 20), d(2024, 3, 15));
    assert_eq!(
        stub().format_difference(&difference, DisplayOption::MonthDay, true),
        "14 месяцев 5 дней"
    );
}

// --- YearMonthDay option ---

#[test]
fn test_year_month_day_all_components() {
    let difference = compute_period(d(2022, 1, 10), d(2023, 3, 15));
    assert_eq!(
        stub().format_difference(&difference, DisplayOption::YearMonthDay, true),
        "1 год 2 месяца 5 дней"
    );
}

#[test]
fn test_year_month_day_skips_zero_months() {
    let period = Period::new(4, 0, 10);
    assert_eq!(
        stub().format(&period, DisplayOption::YearMonthDay, 1471, true),
        "4 года 10 дней"
    );
}

#[test]
fn test_year_month_day_single_component() {
    let f = stub();
    assert_eq!(f.format(&Period::new(1, 0, 0), DisplayOption::YearMonthDay, 365, true), "1 год");
    assert_eq!(
        f.format(&Period::new(0, 5, 0), DisplayOption::YearMonthDay, 151, true),
        "5 месяцев"
    );
}

// --- Degenerate cases ---

#[test]
fn test_all_zero_period_gives_empty_string() {
    let f = stub();
    let empty = Period::default();
    assert_eq!(f.format(&empty, DisplayOption::MonthDay, 0, true), "");
    assert_eq!(f.format(&empty, DisplayOption::YearMonthDay, 0, true), "");
}

#[test]
fn test_join_components() {
    assert_eq!(join_components(&[]), "");
    assert_eq!(join_components(&["1 год".to_string()]), "1 год");
    assert_eq!(
        join_components(&["1 год".to_string(), "2 дня".to_string()]),
        "1 год 2 дня"
    );
}

// --- Differences and analysis text ---

#[test]
fn test_today_text() {
    let today = DaysDifference::Today { timestamp: 0 };
    for option in DisplayOption::ALL {
        assert_eq!(stub().format_difference(&today, option, true), "Сегодня");
    }
    assert_eq!(stub().analysis_text(&today, DisplayOption::Day), "Сегодня");
}

#[test]
fn test_difference_without_minus_is_absolute() {
    let difference = compute_period(d(2024, 3, 17), d(2024, 3, 10));
    assert_eq!(
        stub().format_difference(&difference, DisplayOption::Day, false),
        "7 дней"
    );
    assert_eq!(
        stub().format_difference(&difference, DisplayOption::Day, true),
        "-7 дней"
    );
}

#[test]
fn test_analysis_text_future() {
    let difference = compute_period(d(2024, 3, 17), d(2024, 3, 10));
    assert_eq!(
        stub().analysis_text(&difference, DisplayOption::Day),
        "осталось 7 дней"
    );
}

#[test]
fn test_analysis_text_past() {
    let difference = compute_period(d(2023, 1, 20), d(2024, 3, 20));
    assert_eq!(
        stub().analysis_text(&difference, DisplayOption::YearMonthDay),
        "прошло 1 год 2 месяца"
    );
}

// --- Other locales ---

#[test]
fn test_english_phrases() {
    let f = english();
    assert_eq!(f.format_days(1), "1 day");
    assert_eq!(f.format_days(0), "0 days");
    assert_eq!(f.format_days(11), "11 days");
    assert_eq!(f.format_days(21), "21 days");
    assert_eq!(f.format_months(1), "1 month");
    assert_eq!(f.format_years(2), "2 years");
}

#[test]
fn test_english_composite() {
    let difference = compute_period(d(2022, 1, 10), d(2023, 3, 15));
    assert_eq!(
        english().format_difference(&difference, DisplayOption::YearMonthDay, true),
        "1 year 2 months 5 days"
    );
    assert_eq!(
        english().analysis_text(&difference, DisplayOption::MonthDay),
        "elapsed 14 months 5 days"
    );
}

#[test]
fn test_russian_bundle_matches_stub() {
    let bundle = DurationFormatter::new(LocaleResources::for_locale("ru").unwrap());
    let stub = stub();
    for n in [0, 1, 2, 5, 11, 12, 19, 21, 22, 25, 100, 101, 104, 111, 1001] {
        assert_eq!(bundle.format_days(n), stub.format_days(n));
        assert_eq!(bundle.format_months(n), stub.format_months(n));
        assert_eq!(bundle.format_years(n), stub.format_years(n));
    }
}

#[test]
fn test_ukrainian_phrases() {
    let f = DurationFormatter::new(LocaleResources::for_locale("uk-UA").unwrap());
    assert_eq!(f.format_days(1), "1 день");
    assert_eq!(f.format_days(3), "3 дні");
    assert_eq!(f.format_days(5), "5 днів");
    assert_eq!(f.format_years(2), "2 роки");
    assert_eq!(f.format_years(12), "12 років");
}
