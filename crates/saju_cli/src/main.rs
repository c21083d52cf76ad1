mod config;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use saju_base::{ALL_STEMS, HeavenlyStem, ten_god};
use saju_calendar::{parse_birth_date, parse_time_label, solar_term_position};
use saju_chart::{
    BirthInput, calculate_chart, daeun_timeline, day_pillar, hour_pillar, month_pillar, year_pillar,
};

use crate::config::{OutputFormat, SajuConfig};
use crate::render::ChartReport;

#[derive(Parser)]
#[command(name = "saju", about = "Four Pillars (사주) chart calculator")]
struct Cli {
    /// Config file (defaults to ./saju.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart for a birth record
    Chart {
        /// Birth date (YYYY-MM-DD, YYYY/MM/DD, YYYYMMDD or an RFC 3339 timestamp)
        #[arg(long)]
        date: String,
        /// Birth time: HH:MM or a period name such as 자시 / 子時
        #[arg(long)]
        time: Option<String>,
        /// Treat the date as lunar (fixed +30 day shift)
        #[arg(long)]
        lunar: bool,
        /// Reference date for age (default: config, then today)
        #[arg(long)]
        as_of: Option<String>,
        /// Output format (default: config, then text)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Also list this many major cycles from age 10
        #[arg(long)]
        cycles: Option<usize>,
    },
    /// Year pillar for a sexagenary year
    Year {
        /// Sexagenary year (the calendar year from 입춘 on)
        year: i32,
    },
    /// Day pillar and sexagenary day number
    Day {
        /// Solar date
        date: String,
    },
    /// Solar-term month and month pillar for a date
    Month {
        /// Solar date
        date: String,
    },
    /// Hour pillar for a birth time and day stem
    Hour {
        /// Birth time: HH:MM or a period name
        #[arg(long)]
        time: String,
        /// Day stem: index 0-9, 갑..계, 甲..癸 or Gap..Gye
        #[arg(long)]
        day_stem: String,
    },
    /// Ten-gods relation of one stem to a day stem
    TenGod {
        /// Day stem
        day: String,
        /// Other stem
        other: String,
    },
    /// List the ten heavenly stems
    Stems,
    /// List the twelve earthly branches
    Branches,
    /// List the twelve two-hour periods
    Periods,
}

/// Stem by index, native glyph, classical glyph or romanized name.
fn parse_stem(s: &str) -> Result<HeavenlyStem> {
    let s = s.trim();
    if let Ok(i) = s.parse::<u8>() {
        return HeavenlyStem::from_index(i).ok_or_else(|| anyhow!("stem index out of range: {i} (0-9)"));
    }
    ALL_STEMS
        .into_iter()
        .find(|st| st.hangul() == s || st.hanja() == s || st.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| anyhow!("unknown stem: {s}"))
}

fn parse_date_arg(s: &str) -> Result<NaiveDate> {
    parse_birth_date(s).with_context(|| format!("bad date argument {s:?}"))
}

fn run(cli: Cli, cfg: &SajuConfig) -> Result<()> {
    match cli.command {
        Commands::Chart {
            date,
            time,
            lunar,
            as_of,
            format,
            cycles,
        } => {
            let input = BirthInput::parse(&date, time.as_deref(), lunar)?;
            let as_of = match as_of {
                Some(s) => parse_date_arg(&s)?,
                None => cfg
                    .chart
                    .as_of
                    .unwrap_or_else(|| chrono::Local::now().date_naive()),
            };
            tracing::debug!(%as_of, lunar, "calculating chart");
            let chart = calculate_chart(&input, as_of)?;
            let cycles = cycles.unwrap_or(cfg.chart.daeun_cycles);
            let timeline = daeun_timeline(chart.month().pillar(), chart.daeun().current_age, cycles);

            match format.unwrap_or(cfg.output.format) {
                OutputFormat::Text => print!("{}", render::chart_text(&chart, &timeline)),
                OutputFormat::Json => {
                    let report = ChartReport {
                        chart: &chart,
                        daeun_timeline: timeline,
                    };
                    println!("{}", render::to_json(&report, cfg.output.pretty)?);
                }
            }
        }

        Commands::Year { year } => {
            let p = year_pillar(year);
            println!(
                "{year}: {} ({})  {}띠 ({})",
                p.hangul(),
                p.hanja(),
                p.branch.animal(),
                p.branch.animal_name()
            );
        }

        Commands::Day { date } => {
            let date = parse_date_arg(&date)?;
            let d = day_pillar(date);
            println!(
                "{date}: {} ({})  day number {}",
                d.pillar.hangul(),
                d.pillar.hanja(),
                d.day_number
            );
        }

        Commands::Month { date } => {
            let date = parse_date_arg(&date)?;
            let pos = solar_term_position(date);
            let year = year_pillar(pos.sexagenary_year);
            let month = month_pillar(pos.month_index, year.stem);
            println!(
                "{date}: {} ({}) month, index {} of sexagenary year {} ({})",
                pos.term.hangul(),
                pos.term.hanja(),
                pos.month_index,
                pos.sexagenary_year,
                year.hangul()
            );
            println!("  Month pillar: {} ({})", month.hangul(), month.hanja());
        }

        Commands::Hour { time, day_stem } => {
            let day = parse_stem(&day_stem)?;
            let hour = parse_time_label(&time).ok_or_else(|| anyhow!("unrecognized birth time: {time}"))?;
            let p = hour_pillar(hour.hour, day);
            println!("{} ({})", p.hangul(), p.hanja());
        }

        Commands::TenGod { day, other } => {
            let day = parse_stem(&day)?;
            let other = parse_stem(&other)?;
            let tg = ten_god(day, other);
            println!("{other} → {day}: {} ({}, {})", tg.hangul(), tg.hanja(), tg.name());
        }

        Commands::Stems => print!("{}", render::stems_table()),
        Commands::Branches => print!("{}", render::branches_table()),
        Commands::Periods => print!("{}", render::periods_table()),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let cfg = SajuConfig::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
    logging::init_logger(cli.verbose, cfg.log.level.as_deref());

    if let Err(e) = run(cli, &cfg) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
