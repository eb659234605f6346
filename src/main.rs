use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use moodcal::application::{
    EventDispatcher, Reply, Session, ShowCalendarService, ShowOptions,
};
use moodcal::cli::output::help_text;
use moodcal::cli::{render_month, render_palette, render_tally, render_year, Cli, Commands};
use moodcal::domain::month::parse_month;
use moodcal::domain::{MoodCalendar, MoodId, Year};
use moodcal::error::{MoodcalError, Result};
use moodcal::infrastructure::{init_logger, Config};
use std::io::{self, BufRead, IsTerminal, Write};

fn main() {
    let cli = Cli::parse();

    let _logger = match init_logger() {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: {}", e);
            None
        }
    };

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    let color = !cli.no_color && config.use_color();
    let year = resolve_year(cli.year.as_deref(), &config)?;

    match cli.command {
        Some(Commands::Show {
            month,
            random,
            seed,
            mood,
            paint,
            stats,
        }) => {
            let month = month.as_deref().map(parse_month).transpose()?;
            let options = ShowOptions {
                randomize: random,
                seed,
                mood: mood.as_deref().map(str::parse::<MoodId>).transpose()?,
                paint: paint
                    .iter()
                    .map(|d| parse_date(d))
                    .collect::<Result<Vec<_>>>()?,
            };

            let dispatcher = ShowCalendarService::execute(year, &options)?;
            let calendar = dispatcher.calendar();
            match month {
                Some(m) => print!("{}", render_month(&calendar.month_view(m), year.get(), color)),
                None => print!("{}", render_year(calendar, color)),
            }
            if stats {
                println!();
                print!("{}", render_tally(&calendar.tally()));
            }
            Ok(())
        }
        Some(Commands::Palette) => {
            print!("{}", render_palette(config.mood, color));
            Ok(())
        }
        Some(Commands::Interactive) | None => interactive(year, config.mood, color),
    }
}

fn resolve_year(arg: Option<&str>, config: &Config) -> Result<Year> {
    if let Some(input) = arg {
        return input.parse();
    }
    match config.start_year()? {
        Some(year) => Ok(year),
        None => Year::new(Local::now().year()),
    }
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| MoodcalError::InvalidDate(input.to_string()))
}

fn interactive(year: Year, mood: Option<MoodId>, color: bool) -> Result<()> {
    let mut calendar = MoodCalendar::new(year);
    calendar.set_current_mood(mood);
    let mut session = Session::new(EventDispatcher::new(calendar));

    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let mut stdout = io::stdout();

    print!("{}", render_year(session.dispatcher().calendar(), color));
    if prompt {
        println!("\nType 'help' for commands.");
    }

    loop {
        if prompt {
            print!("> ");
            stdout.flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let reply = match session.execute_line(&line) {
            Ok(reply) => reply,
            Err(e) => {
                eprintln!("Error: {}", e.display_with_suggestions());
                continue;
            }
        };

        let calendar = session.dispatcher().calendar();
        match reply {
            Reply::Year => print!("{}", render_year(calendar, color)),
            Reply::Month(m) => print!(
                "{}",
                render_month(&calendar.month_view(m), calendar.year().get(), color)
            ),
            Reply::Palette => print!("{}", render_palette(calendar.current_mood(), color)),
            Reply::Stats => print!("{}", render_tally(&calendar.tally())),
            Reply::Help => print!("{}", help_text()),
            Reply::Unchanged => match calendar.current_mood() {
                None => println!("No mood selected; use 'mood <name>' first"),
                Some(_) => println!("Nothing to paint"),
            },
            Reply::Quit => break,
        }
    }

    Ok(())
}
