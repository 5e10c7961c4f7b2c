use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use ganzhi_rs::{
    DailyDivinationRecord, Engine, EngineConfig, Gender, Zodiac, chart_for_date, compatibility,
    elements_for_date, lunar_date, zodiac_from_name,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(name = "ganzhi", about = "Sexagenary calendar and almanac CLI")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four-pillar chart for a birth date
    Chart {
        /// Date (YYYY-MM-DD)
        date: NaiveDate,
        /// Hour of day, 0-23
        #[arg(long)]
        hour: Option<u32>,
    },
    /// Five-element balance and day-master strength
    Elements {
        /// Date (YYYY-MM-DD)
        date: NaiveDate,
        /// Hour of day, 0-23
        #[arg(long)]
        hour: Option<u32>,
    },
    /// Lunar month/day label
    Lunar {
        /// Date (YYYY-MM-DD)
        date: NaiveDate,
    },
    /// Daily almanac; defaults to today
    Almanac {
        /// Date (YYYY-MM-DD)
        date: Option<NaiveDate>,
        /// Also list the twelve double-hours
        #[arg(long)]
        hours: bool,
    },
    /// Zodiac pair compatibility
    Compat {
        /// First sign (e.g. 龙 or Dragon)
        #[arg(value_parser = parse_zodiac)]
        a: Zodiac,
        /// Second sign
        #[arg(value_parser = parse_zodiac)]
        b: Zodiac,
    },
    /// Peach-blossom periods
    Peach {
        /// Birth date (YYYY-MM-DD)
        date: NaiveDate,
        /// male or female
        #[arg(long, value_parser = parse_gender)]
        gender: Gender,
    },
}

fn parse_zodiac(s: &str) -> Result<Zodiac, String> {
    zodiac_from_name(s).map_err(|e| e.to_string())
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    Gender::from_name(s).ok_or_else(|| format!("expected male or female, got {s}"))
}

fn load_engine(path: Option<&PathBuf>) -> Result<Engine, Box<dyn Error>> {
    let engine = match path {
        Some(p) => Engine::from_config_file(p)?,
        None => {
            tracing::debug!("no config file given, using defaults");
            Engine::new(EngineConfig::default())?
        }
    };
    Ok(engine)
}

fn print_almanac(rec: &DailyDivinationRecord, hours: bool) {
    let deities: Vec<&str> = rec.auspicious_deities.iter().map(|d| d.name()).collect();
    let suitable: Vec<&str> = rec.suitable.iter().map(|a| a.name()).collect();
    let avoid: Vec<&str> = rec.avoid.iter().map(|a| a.name()).collect();

    println!("{}  {}日", rec.date, rec.day_pillar);
    println!("冲{}  煞{}", rec.clash.name(), rec.taboo_direction.name());
    println!(
        "吉神: {}  凶神: {}",
        deities.join(" "),
        rec.inauspicious_deity.name()
    );
    println!("宜: {}", suitable.join(" "));
    println!("忌: {}", avoid.join(" "));
    println!("运势: {}", rec.luck_score);
    if hours {
        for h in &rec.hours {
            println!("  {}时 {}", h.pillar, if h.auspicious { "吉" } else { "凶" });
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Chart { date, hour } => {
            let chart = chart_for_date(date, hour)?;
            println!("{chart}");
            println!("生肖: {}", chart.zodiac().name());
        }

        Commands::Elements { date, hour } => {
            let (chart, analysis) = elements_for_date(date, hour)?;
            println!("{chart}");
            for (element, count) in analysis.tally.iter() {
                println!("  {} {}", element.name(), count);
            }
            println!(
                "日主 {} ({}) {}",
                chart.day.stem.name(),
                analysis.day_master.name(),
                analysis.strength.name()
            );
            let names = |v: &[ganzhi_rs::Element]| {
                v.iter().map(|e| e.name()).collect::<Vec<_>>().join(" ")
            };
            println!("喜: {}", names(&analysis.favorable));
            println!("忌: {}", names(&analysis.unfavorable));
        }

        Commands::Lunar { date } => {
            let lunar = lunar_date(date)?;
            match lunar.source {
                ganzhi_rs::LunarSource::Table => println!("{lunar}"),
                ganzhi_rs::LunarSource::Approximate => println!("{lunar} (approximate)"),
            }
        }

        Commands::Almanac { date, hours } => {
            let mut engine = load_engine(cli.config.as_ref())?;
            let rec = match date {
                Some(d) => engine.daily_divination(d),
                None => engine.today(),
            };
            print_almanac(rec, hours);
        }

        Commands::Compat { a, b } => {
            let result = compatibility(a, b);
            println!(
                "{} {}: {} ({}, {})",
                a.name(),
                b.name(),
                result.score,
                result.relation.name(),
                result.tier.name()
            );
            println!(
                "  感情 {}  沟通 {}  家庭 {}",
                result.sub_scores.emotion,
                result.sub_scores.communication,
                result.sub_scores.family
            );
        }

        Commands::Peach { date, gender } => {
            let engine = load_engine(cli.config.as_ref())?;
            let periods = engine.peach_periods(date.year(), date.month(), date.day(), gender);
            if periods.is_empty() {
                println!("No significant periods");
            }
            for p in &periods {
                println!("{:>3} ({}) {:>2} {}", p.age, p.year, p.strength, p.kind.name());
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
