use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use kundali_base::{ayanamsha_deg, deg_to_dms, rashi_from_longitude};
use kundali_chart::{ChartResult, compute_natal_chart};
use kundali_config::KundaliConfig;
use kundali_time::{Instant, LocalDateTime, UtcOffset};

#[derive(Parser)]
#[command(name = "kundali", about = "Sidereal natal chart calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Natal chart for a birth date, time and place
    Chart {
        /// Local birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local birth time (hh:mm or hh:mm:ss)
        #[arg(long)]
        time: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
        /// UTC offset of the local clock in hours (e.g. 5.5, -4)
        #[arg(long, allow_hyphen_values = true)]
        tz: Option<f64>,
        /// Print the chart as JSON
        #[arg(long)]
        json: bool,
        /// Path to kundali.toml
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Ayanamsha at a Julian Day
    Ayanamsha {
        /// Julian Day (UT)
        #[arg(long)]
        jd: f64,
    },
    /// Julian Day of a civil date and time
    Jd {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time (hh:mm or hh:mm:ss)
        #[arg(long)]
        time: String,
        /// UTC offset in hours (default 0)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        tz: f64,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_hyphen_values = true)]
        deg: f64,
    },
}

fn parse_local(date: &str, time: &str) -> Result<LocalDateTime> {
    format!("{}T{}", date.trim(), time.trim())
        .parse()
        .with_context(|| format!("bad date/time '{date} {time}'"))
}

/// Birth place and offset: command line first, then config.
fn resolve_place(
    lat: Option<f64>,
    lon: Option<f64>,
    tz: Option<f64>,
    config: &KundaliConfig,
) -> Result<(f64, f64, f64)> {
    let defaults = config.location;
    let lat = lat
        .or(defaults.latitude)
        .ok_or_else(|| anyhow!("latitude required (--lat or [location] latitude)"))?;
    let lon = lon
        .or(defaults.longitude)
        .ok_or_else(|| anyhow!("longitude required (--lon or [location] longitude)"))?;
    let tz = tz
        .or(defaults.utc_offset)
        .ok_or_else(|| anyhow!("UTC offset required (--tz or [location] utc_offset)"))?;
    Ok((lat, lon, tz))
}

fn print_chart(chart: &ChartResult) -> Result<()> {
    let dms = deg_to_dms(chart.ayanamsha())?;
    println!("Birth (UTC): {}", chart.birth_utc());
    println!(
        "Location:    {:.4}, {:.4} (UTC{:+})",
        chart.latitude(),
        chart.longitude(),
        chart.utc_offset().hours()
    );
    println!("JD:          {:.6}", chart.jd());
    println!(
        "Ayanamsha:   {:.6} deg ({dms}) {}",
        chart.ayanamsha(),
        chart.ayanamsha_label()
    );
    println!();
    println!(
        "{:<2} {:<10} {:<22} {:<14} {:<14} {}",
        "", "Graha", "Rashi", "Position", "Bhava", "Strength"
    );
    for pos in chart.iter() {
        let strength = chart.strength(pos.body);
        let rashi = pos.rashi.rashi;
        println!(
            "{:<2} {:<10} {:<22} {:<14} {:<14} {}, {}",
            pos.body.symbol(),
            pos.body.sanskrit_name(),
            format!("{} ({})", rashi.name(), rashi.western_name()),
            pos.rashi.dms.to_string(),
            pos.bhava.to_string(),
            strength.dignity.name(),
            strength.house_class.name()
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Chart {
            date,
            time,
            lat,
            lon,
            tz,
            json,
            config,
        } => {
            let config = kundali_config::load(config.as_deref()).context("loading config")?;
            let local = parse_local(&date, &time)?;
            let (lat, lon, tz) = resolve_place(lat, lon, tz, &config)?;
            log::info!("chart for {local} at {lat}, {lon} (UTC{tz:+})");

            let chart = compute_natal_chart(&local, lat, lon, tz)?;
            if json || config.output.json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print_chart(&chart)?;
            }
        }

        Commands::Ayanamsha { jd } => {
            if !jd.is_finite() {
                return Err(anyhow!("Julian Day must be finite"));
            }
            let aya = ayanamsha_deg(jd);
            println!("{:.6} deg ({})", aya, deg_to_dms(aya)?);
        }

        Commands::Jd { date, time, tz } => {
            let local = parse_local(&date, &time)?;
            let offset = UtcOffset::new(tz)?;
            let instant = Instant::from_local(&local, offset)?;
            println!("UTC: {}", instant.utc());
            println!("JD:  {:.6}", instant.jd());
        }

        Commands::Rashi { lon } => {
            if !lon.is_finite() {
                return Err(anyhow!("longitude must be finite"));
            }
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}) - {} ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms,
                info.degrees_in_rashi
            );
        }

        Commands::Dms { deg } => {
            let d = deg_to_dms(deg).with_context(|| format!("cannot convert {deg} to DMS"))?;
            println!("{} deg {} min {:.2} sec", d.degrees, d.minutes, d.seconds);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
