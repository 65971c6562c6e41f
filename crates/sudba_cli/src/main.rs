mod logger;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use sudba_config::MAX_OUTLOOK_DAYS;
use sudba_rs::{
    BirthChart, CalendarDate, DayOutlook, HOROSCOPE_UNAVAILABLE, LunarReport, ProfileView,
    SudbaConfig, SudbaError, Timestamp, UserProfile, ZodiacSign, birth_chart, horoscope,
    lunar_report, outlook, sign_for,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "sudba", about = "Numerology matrix, lunar calendar and zodiac CLI")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Debug logging for sudba crates
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Destiny matrix for a birth date
    Matrix {
        /// Birth date (YYYY-MM-DD)
        date: CalendarDate,
    },
    /// Lunar report for an instant
    Moon {
        /// UTC instant (RFC 3339), default now
        #[arg(long)]
        at: Option<Timestamp>,
    },
    /// Multi-day lunar forecast strip
    Outlook {
        /// Start instant (RFC 3339), default now
        #[arg(long)]
        at: Option<Timestamp>,
        /// Number of days, default from config
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_OUTLOOK_DAYS as i64))]
        days: Option<u32>,
    },
    /// Zodiac sign for a day and month
    Zodiac {
        /// Day of month (1-31)
        day: u32,
        /// Month (1-12)
        month: u32,
    },
    /// Daily horoscope for a sign name
    Horoscope {
        /// English sign name, e.g. Leo
        sign: String,
    },
    /// Show a stored profile with its sign and matrix
    Profile {
        /// Profile JSON file
        path: PathBuf,
        /// Write the resolved zodiac sign back to the file
        #[arg(long)]
        save: bool,
    },
    /// Recompute the lunar report on an interval
    Watch {
        /// Seconds between reports, default from config
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,
        /// Stop after this many reports (0 = run forever)
        #[arg(long, default_value = "0")]
        count: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match SudbaConfig::load_or_default(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    logger::init_cli_logger(&config.logging.filter, cli.verbose);

    if let Err(e) = run(cli.command, &config, cli.json) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Commands, config: &SudbaConfig, json: bool) -> Result<(), SudbaError> {
    match command {
        Commands::Matrix { date } => {
            let chart = birth_chart(&date);
            if json {
                print_json(&chart)?;
            } else {
                print_chart(&chart);
            }
        }

        Commands::Moon { at } => {
            let report = lunar_report(at.unwrap_or_else(Timestamp::now));
            if json {
                print_json(&report)?;
            } else {
                print_report(&report);
            }
        }

        Commands::Outlook { at, days } => {
            let days = days.unwrap_or(config.lunar.outlook_days);
            let strip = outlook(at.unwrap_or_else(Timestamp::now), days);
            if json {
                print_json(&strip)?;
            } else {
                for day in &strip {
                    print_outlook_day(day);
                }
            }
        }

        Commands::Zodiac { day, month } => {
            let sign = sign_for(day, month);
            if json {
                print_json(&sign)?;
            } else {
                match sign {
                    Some(s) => println!("{s}"),
                    None => println!("unknown sign"),
                }
            }
        }

        Commands::Horoscope { sign } => {
            let text = match ZodiacSign::from_name(&sign) {
                Some(s) => horoscope(s),
                None => {
                    warn!(sign = %sign, "unrecognized sign name");
                    HOROSCOPE_UNAVAILABLE
                }
            };
            if json {
                print_json(&text)?;
            } else {
                println!("{text}");
            }
        }

        Commands::Profile { path, save } => {
            let mut profile = UserProfile::load(&path)?;
            profile.resolve_zodiac();
            let view = profile.view();
            let chart = match profile.reading() {
                Ok(chart) => Some(chart),
                Err(SudbaError::MissingBirthDate | SudbaError::Time(_)) => None,
                Err(e) => return Err(e),
            };
            if save {
                profile.save(&path)?;
                info!(path = %path.display(), "profile saved");
            }
            if json {
                #[derive(Serialize)]
                struct ProfileOutput<'a> {
                    profile: &'a ProfileView,
                    chart: Option<&'a BirthChart>,
                }
                print_json(&ProfileOutput {
                    profile: &view,
                    chart: chart.as_ref(),
                })?;
            } else {
                println!("Name:        {}", view.name);
                println!("Birth date:  {}", view.birth_date);
                println!("Zodiac sign: {}", view.zodiac_sign);
                println!("City:        {}", view.city);
                println!("Email:       {}", view.email);
                println!("About:       {}", view.bio);
                println!("Avatar:      {}", if view.has_avatar { "yes" } else { "no" });
                if let Some(text) = view.horoscope {
                    println!("Horoscope:   {text}");
                }
                if let Some(chart) = &chart {
                    println!();
                    print_matrix(chart);
                }
            }
        }

        Commands::Watch { interval, count } => {
            let period = interval
                .map(std::time::Duration::from_secs)
                .unwrap_or_else(|| config.refresh_interval());
            info!(interval_secs = period.as_secs(), "watching the moon");
            let mut tick: u64 = 0;
            loop {
                let report = lunar_report(Timestamp::now());
                tick += 1;
                info!(
                    tick,
                    phase = %report.sample.phase,
                    lunar_day = report.sample.lunar_day,
                    "lunar report refreshed"
                );
                if json {
                    print_json(&report)?;
                } else {
                    print_report(&report);
                    println!();
                }
                if count != 0 && tick >= count {
                    break;
                }
                std::thread::sleep(period);
            }
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), SudbaError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_instant(ts: Timestamp) -> String {
    match ts.to_datetime() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => format!("{} ms", ts.as_unix_millis()),
    }
}

fn print_matrix(chart: &BirthChart) {
    let m = &chart.matrix;
    let rows = [
        ("Destiny", m.destiny),
        ("Character", m.character),
        ("Heart", m.heart),
        ("First", m.additional.first),
        ("Second", m.additional.second),
        ("Third", m.additional.third),
        ("Fourth", m.additional.fourth),
    ];
    for (label, reading) in rows {
        println!("{label:<10} {:>2}  {}", reading.number, reading.meaning);
    }
    println!();
    for row in chart.grid.rows() {
        println!("{:>3} {:>3} {:>3}", row[0], row[1], row[2]);
    }
}

fn print_chart(chart: &BirthChart) {
    println!("{} ({})", chart.date.to_dotted(), chart.sign);
    println!("{}", chart.horoscope);
    println!();
    print_matrix(chart);
}

fn print_report(report: &LunarReport) {
    let s = &report.sample;
    println!("{}", format_instant(report.at));
    println!(
        "{} - lunar day {} - age {:.2} d - {}% lit",
        s.phase, s.lunar_day, s.age_days, s.illumination_percent
    );
    println!("{}", report.description);
    println!("Forecast: {}", report.forecast);
    println!("Favorable:");
    for item in &report.recommendations.favorable {
        println!("  + {item}");
    }
    println!("Unfavorable:");
    for item in &report.recommendations.unfavorable {
        println!("  - {item}");
    }
}

fn print_outlook_day(day: &DayOutlook) {
    let s = &day.sample;
    println!(
        "+{} {}  {:<15} day {:>2}  {:>3}%  {}",
        day.day_offset,
        format_instant(day.at),
        s.phase.name(),
        s.lunar_day,
        s.illumination_percent,
        day.forecast
    );
}
