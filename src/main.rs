use std::{io, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use bestbikeday::{
    BikeDayConfig, BikeDayError, ConditionDescriber, DailyForecast, DailyWeatherResponse,
    RideScoreEngine, ScoreBreakdown, ScoreRating, WeatherObservation, best_day, logging,
};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

/// Rate how ride-friendly a day's weather is for cycling
#[derive(Debug, Parser)]
#[command(name = "bestbikeday", version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a single day
    Score {
        /// Maximum temperature in °C (omit if unknown)
        #[arg(long, allow_negative_numbers = true)]
        max_temp: Option<f64>,
        /// Minimum temperature in °C (omit if unknown)
        #[arg(long, allow_negative_numbers = true)]
        min_temp: Option<f64>,
        /// Precipitation probability in percent
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        precip: i32,
        /// Maximum wind speed in km/h (omit if unknown)
        #[arg(long, allow_negative_numbers = true)]
        wind: Option<f64>,
        /// WMO weather code
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        code: i32,
        /// Print every intermediate value of the score
        #[arg(long)]
        explain: bool,
    },
    /// Describe a WMO weather code
    Describe {
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },
    /// Score an Open-Meteo daily forecast document
    Forecast {
        /// JSON file to read, or `-` for stdin
        #[arg(long, short)]
        input: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if let Some(err) = err.downcast_ref::<BikeDayError>() {
                eprintln!("{}", err.user_message());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = BikeDayConfig::load_from_path(cli.config.clone())
        .with_context(|| "Failed to load configuration")?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    logging::init(&config.logging)?;
    debug!(?config, "Configuration loaded");

    match cli.command {
        Command::Score {
            max_temp,
            min_temp,
            precip,
            wind,
            code,
            explain,
        } => {
            let observation = WeatherObservation {
                max_temp_c: max_temp.unwrap_or(f64::NAN),
                min_temp_c: min_temp.unwrap_or(f64::NAN),
                precipitation_chance: precip,
                max_wind_speed_kph: wind.unwrap_or(f64::NAN),
                weather_code: code,
            };
            run_score(&observation, explain, &config)
        }
        Command::Describe { code } => {
            println!("{}", ConditionDescriber::describe(code));
            Ok(())
        }
        Command::Forecast { input } => run_forecast(&input, &config),
    }
}

fn run_score(
    observation: &WeatherObservation,
    explain: bool,
    config: &BikeDayConfig,
) -> Result<()> {
    let breakdown = RideScoreEngine::breakdown(observation);
    let description = ConditionDescriber::describe(observation.weather_code);

    if config.output.format == "json" {
        let value = serde_json::json!({
            "observation": observation,
            "condition_description": description,
            "ride_score": breakdown.score,
            "rating": ScoreRating::from_score(breakdown.score),
            "breakdown": explain.then_some(breakdown),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!(
        "Ride score: {} ({})",
        breakdown.score,
        ScoreRating::from_score(breakdown.score)
    );
    println!("Conditions: {description}");
    if explain {
        print_breakdown(&breakdown);
    }
    Ok(())
}

fn print_breakdown(breakdown: &ScoreBreakdown) {
    println!();
    println!("  Temperature comfort    {:.3}", breakdown.temperature_comfort);
    println!("  Rain severity          {:.3}", breakdown.rain_severity);
    println!("  Wind comfort           {:.3}", breakdown.wind_comfort);
    println!("  Condition suitability  {:.3}", breakdown.condition_suitability);
    println!("  Modifier               {:.3}", breakdown.modifier);
    println!("  Blended                {:.3}", breakdown.blended);
    println!(
        "  Severity penalty       {:.3} (code {:.3}, rain {:.3}, wind {:.3})",
        breakdown.severity_penalty,
        breakdown.code_penalty,
        breakdown.rain_penalty,
        breakdown.wind_penalty
    );
    println!("  Adjusted               {:.3}", breakdown.adjusted);
}

fn run_forecast(input: &str, config: &BikeDayConfig) -> Result<()> {
    let response = if input == "-" {
        DailyWeatherResponse::from_reader(io::stdin().lock())
    } else {
        DailyWeatherResponse::from_path(input)
    };
    let response = response.with_context(|| format!("Failed to read forecast from {input}"))?;

    let mut days = response
        .to_daily_forecasts()
        .with_context(|| format!("Failed to score forecast from {input}"))?;
    days.truncate(config.output.forecast_days as usize);
    info!(days = days.len(), timezone = %response.timezone, "Scored forecast");

    if config.output.format == "json" {
        println!("{}", serde_json::to_string_pretty(&days)?);
        return Ok(());
    }

    print_forecast_table(&response, &days);
    Ok(())
}

fn print_forecast_table(response: &DailyWeatherResponse, days: &[DailyForecast]) {
    println!(
        "Forecast for {:.2}, {:.2} ({})",
        response.latitude, response.longitude, response.timezone
    );
    println!();

    if days.is_empty() {
        println!("No forecast days available");
        return;
    }

    let best = best_day(days).map(|day| day.date);
    for day in days {
        let marker = if Some(day.date) == best { "*" } else { " " };
        println!(
            "{marker} {} {:<9} {:>3} {:<8} {:<17} rain {:>4}  wind {:>10}  {}",
            day.date,
            day.day_name(),
            day.ride_score,
            day.rating().to_string(),
            day.observation.format_temperature_range(),
            day.observation.format_precipitation(),
            day.observation.format_wind(),
            day.condition_description
        );
    }

    if let Some(best) = best_day(days) {
        println!();
        println!(
            "Best day to ride: {} {} (score {})",
            best.day_name(),
            best.date,
            best.ride_score
        );
    }
}
