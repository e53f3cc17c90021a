use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};

use dayscount::app::state::ListState;
use dayscount::app::view::ItemView;
use dayscount::days::{DisplayOption, DurationFormatter, ResourceProvider, compute_period};
use dayscount::items::{ColorTag, Item, ItemStore, SortOrder, backup};
use dayscount::util::config::AppConfig;
use dayscount::util::time::{millis_from_date, parse_date, today};

#[derive(Parser, Debug)]
#[command(name = "dayscount", version, about = "Count days since and until events")]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured locale (ru, uk, en)
    #[arg(short, long)]
    locale: Option<String>,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List events with their day counts
    List {
        /// Only show events whose title or details contain this text
        #[arg(short, long)]
        search: Option<String>,
        /// asc or desc by event date
        #[arg(long)]
        sort: Option<SortOrder>,
    },
    /// Show one event in detail
    Show { id: u64 },
    /// Add an event
    Add(ItemArgs),
    /// Change an event
    Edit {
        id: u64,
        #[command(flatten)]
        args: ItemArgs,
    },
    /// Delete an event
    Remove { id: u64 },
    /// Compare a date against today without storing anything
    Between {
        /// Event date, YYYY-MM-DD
        date: String,
        /// Reference date instead of today, YYYY-MM-DD
        #[arg(long)]
        today: Option<String>,
        /// day, monthDay or yearMonthDay
        #[arg(long)]
        display: Option<String>,
        /// Keep the minus sign for future dates, overriding the config
        #[arg(long)]
        show_minus: bool,
        /// Drop the minus sign for future dates, overriding the config
        #[arg(long, conflicts_with = "show_minus")]
        hide_minus: bool,
    },
    /// Write all events to a backup file
    Export { path: PathBuf },
    /// Add events from a backup file, skipping duplicates
    Import { path: PathBuf },
}

#[derive(Args, Debug)]
struct ItemArgs {
    #[arg(long)]
    title: Option<String>,
    /// Event date, YYYY-MM-DD
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    details: Option<String>,
    /// Colour label, #RRGGBB
    #[arg(long)]
    color: Option<ColorTag>,
    /// day, monthDay or yearMonthDay
    #[arg(long)]
    display: Option<DisplayOption>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(locale) = cli.locale {
        config.display.locale = locale;
        config.display.resources = None;
    }

    let _guard = setup_logging(&config, cli.debug)?;

    info!("dayscount starting");

    let formatter = DurationFormatter::new(config.resources()?);
    let store = ItemStore::new(config.data_dir());
    let view = ItemView {
        formatter: &formatter,
        today: today(),
        tz: Local,
        default_option: config.display.default_option,
        show_minus: config.display.show_minus,
    };

    match cli.command {
        Command::List { search, sort } => {
            let state = ListState::new(store.list()?, sort.unwrap_or(config.list.sort_order))
                .with_search(search.unwrap_or_default());
            let lines = view.render_list(&state);
            if lines.is_empty() {
                println!("No events.");
            }
            for line in lines {
                println!("{line}");
            }
        }
        Command::Show { id } => {
            for line in view.render_detail(&store.get(id)?) {
                println!("{line}");
            }
        }
        Command::Add(args) => {
            let Some(title) = args.title.clone() else {
                bail!("--title is required");
            };
            let Some(date) = args.date.as_deref() else {
                bail!("--date is required");
            };
            let mut item = Item::new(title, timestamp_for(parse_date(date)?)?);
            apply_args(&mut item, args)?;
            let id = store.insert(item)?;
            println!("Added event {id}");
        }
        Command::Edit { id, args } => {
            let mut item = store.get(id)?;
            apply_args(&mut item, args)?;
            store.update(item)?;
            println!("Updated event {id}");
        }
        Command::Remove { id } => {
            store.delete(id)?;
            println!("Removed event {id}");
        }
        Command::Between {
            date,
            today: reference,
            display,
            show_minus,
            hide_minus,
        } => {
            let event = parse_date(&date)?;
            let reference = match reference {
                Some(value) => parse_date(&value)?,
                None => view.today,
            };
            let option = display
                .map(|raw| DisplayOption::parse_or_default(&raw))
                .unwrap_or(config.display.default_option);
            let show_minus = minus_override(show_minus, hide_minus)
                .unwrap_or(config.display.show_minus);
            println!(
                "{}",
                between_text(&formatter, event, reference, option, show_minus)
            );
        }
        Command::Export { path } => {
            let count = backup::export(&store, &path)?;
            println!("Exported {count} events to {}", path.display());
        }
        Command::Import { path } => {
            let count = backup::import(&store, &path)?;
            println!("Imported {count} events from {}", path.display());
        }
    }

    Ok(())
}

fn between_text<R: ResourceProvider>(
    formatter: &DurationFormatter<R>,
    event: NaiveDate,
    reference: NaiveDate,
    option: DisplayOption,
    show_minus: bool,
) -> String {
    let difference = compute_period(event, reference);
    debug!(?difference, "Computed difference");
    formatter.format_difference(&difference, option, show_minus)
}

fn minus_override(show: bool, hide: bool) -> Option<bool> {
    match (show, hide) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn timestamp_for(date: NaiveDate) -> Result<i64> {
    millis_from_date(date, &Local).with_context(|| format!("Date {date} has no local midnight"))
}

fn apply_args(item: &mut Item, args: ItemArgs) -> Result<()> {
    if let Some(title) = args.title {
        item.title = title;
    }
    if let Some(date) = args.date {
        item.timestamp = timestamp_for(parse_date(&date)?)?;
    }
    if let Some(details) = args.details {
        item.details = details;
    }
    if let Some(color) = args.color {
        item.color_tag = Some(color);
    }
    if let Some(display) = args.display {
        item.display_option = display;
    }
    Ok(())
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "dayscount.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("dayscount=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
