use clap::{Parser, Subcommand};
use cohort_core::{
    CohortError, DisplayOptions, Event, EventFilter, EventStatus, Member, MemberFilter, Paginator,
    Role, Settings, info_text, load_records, page_bar_text, page_controls, sample_events,
    sample_members, visible_page_numbers,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cohort-cli")]
#[command(about = "Browse community program lists one page at a time")]
struct Cli {
    /// Settings file (defaults to settings.json in the user config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct PageArgs {
    /// Page to show (clamped to the last page)
    #[arg(short, long, default_value = "1")]
    page: usize,
    /// Items per page (overrides settings)
    #[arg(long)]
    per_page: Option<usize>,
    /// Number of page buttons in the page bar (overrides settings)
    #[arg(long)]
    window: Option<usize>,
    /// Case-insensitive search text
    #[arg(short, long, default_value = "")]
    search: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List events
    Events {
        /// JSON file with an array of events
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Number of generated demo events when no file is given
        #[arg(long, default_value = "47")]
        sample: usize,
        /// Only show events with this status
        #[arg(long)]
        status: Option<EventStatus>,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// List members
    Members {
        /// JSON file with an array of members
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Number of generated demo members when no file is given
        #[arg(long, default_value = "23")]
        sample: usize,
        /// Only show members with this role
        #[arg(long)]
        role: Option<Role>,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Print the page numbers a page bar would show
    Pages {
        #[arg(long)]
        total: usize,
        #[arg(long, default_value = "1")]
        current: usize,
        #[arg(long, default_value = "5")]
        window: usize,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CohortError> {
    let settings = match &cli.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::load_or_default(),
    };

    match cli.command {
        Commands::Events {
            file,
            sample,
            status,
            paging,
        } => {
            let events: Vec<Event> = match file {
                Some(path) => load_records(&path)?,
                None => sample_events(sample),
            };
            let filter = EventFilter {
                search: paging.search.clone(),
                status,
            };
            let visible = filter.apply(&events);
            print_page(&visible, &paging, &settings, "events", |event| {
                format!(
                    "#{:<4} {:<34} {:<16} {:<10} {:>3}/{:<3} {}",
                    event.id,
                    event.title,
                    event.location,
                    event.status.to_string(),
                    event.attendee_count,
                    event.capacity,
                    event.starts_at.date()
                )
            })
        }
        Commands::Members {
            file,
            sample,
            role,
            paging,
        } => {
            let members: Vec<Member> = match file {
                Some(path) => load_records(&path)?,
                None => sample_members(sample),
            };
            let filter = MemberFilter {
                search: paging.search.clone(),
                role,
            };
            let visible = filter.apply(&members);
            print_page(&visible, &paging, &settings, "members", |member| {
                format!(
                    "#{:<4} {:<20} {:<28} {}",
                    member.id,
                    member.name,
                    member.email,
                    member.role.to_string()
                )
            })
        }
        Commands::Pages {
            total,
            current,
            window,
        } => {
            println!("{}", page_numbers_line(current, total, window)?);
            Ok(())
        }
    }
}

fn page_numbers_line(current: usize, total: usize, window: usize) -> Result<String, CohortError> {
    DisplayOptions {
        max_pages_to_show: window,
        ..Default::default()
    }
    .validate()?;

    let numbers: Vec<String> = visible_page_numbers(current, total, window)
        .map(|n| n.to_string())
        .collect();
    Ok(numbers.join(" "))
}

fn print_page<T>(
    items: &[&T],
    paging: &PageArgs,
    settings: &Settings,
    item_name: &str,
    format_row: impl Fn(&T) -> String,
) -> Result<(), CohortError> {
    let display = DisplayOptions {
        max_pages_to_show: paging.window.unwrap_or(settings.display.max_pages_to_show),
        ..settings.display.clone()
    }
    .with_item_name(item_name);
    display.validate()?;

    let mut paginator = Paginator::new(paging.per_page.unwrap_or(settings.items_per_page))?;
    paginator.go_to(paging.page);
    let window = paginator.evaluate(items);
    if window.current_page != paging.page {
        log::info!(
            "Page {} is out of range, showing page {}",
            paging.page,
            window.current_page
        );
    }

    for item in window.current_items.iter().copied() {
        println!("{}", format_row(item));
    }
    if let Some(info) = info_text(&window, &display) {
        println!("\n{}", info);
    }
    let controls = page_controls(window.current_page, window.total_pages, display.max_pages_to_show);
    if !controls.is_empty() {
        println!("{}", page_bar_text(&controls));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_numbers_line() {
        assert_eq!(page_numbers_line(10, 12, 5).unwrap(), "8 9 10 11 12");
        assert_eq!(page_numbers_line(1, 3, 5).unwrap(), "1 2 3");
        assert_eq!(page_numbers_line(usize::MAX, 100, 5).unwrap(), "96 97 98 99 100");
    }

    #[test]
    fn test_zero_window_is_rejected() {
        assert!(matches!(
            page_numbers_line(1, 12, 0),
            Err(CohortError::InvalidDisplay(_))
        ));
    }

    #[test]
    fn test_cli_arguments_parse() {
        let cli = Cli::try_parse_from(["cohort-cli", "pages", "--total", "12", "--window", "0"])
            .unwrap();
        match cli.command {
            Commands::Pages {
                total,
                current,
                window,
            } => {
                assert_eq!((total, current, window), (12, 1, 0));
                assert!(page_numbers_line(current, total, window).is_err());
            }
            _ => panic!("expected the pages subcommand"),
        }

        assert!(Cli::try_parse_from(["cohort-cli", "events", "--status", "postponed"]).is_err());
    }
}
