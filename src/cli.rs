use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use tetraktys::generator::constants::{MAX_ATTEMPTS, MAX_TERMS};
use tetraktys::{Generator, GeneratorConfig};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Tetraktys - Write integers using only the digit 4
#[derive(Parser, Debug)]
#[command(name = "tetraktys")]
#[command(about = "Generate LaTeX expressions built from fours that evaluate to an integer")]
#[command(version)]
pub struct CliArgs {
    /// Integer to express (first of the range with --to)
    #[arg(allow_negative_numbers = true)]
    pub target: i64,

    /// Express every integer from TARGET up to this value
    #[arg(long, allow_negative_numbers = true)]
    pub to: Option<i64>,

    /// Seed for tie-breaking (default: current time in milliseconds)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Maximum number of top-level terms
    #[arg(long, default_value_t = MAX_TERMS)]
    pub max_terms: usize,

    /// Rounds over the strategies before falling back
    #[arg(long, default_value_t = MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub start: i64,
    pub end: Option<i64>,
    pub seed: u64,
    pub generator: GeneratorConfig,
    pub log_level: LogLevel,
}

fn clock_seed() -> Result<u64> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("System clock is before the Unix epoch")?;
    u64::try_from(elapsed.as_millis()).context("Timestamp does not fit in a seed")
}

impl CliConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let seed = match args.seed {
            Some(seed) => seed,
            None => clock_seed()?,
        };

        let generator = GeneratorConfig {
            max_terms: args.max_terms,
            max_attempts: args.attempts,
            ..GeneratorConfig::default()
        };
        generator
            .validate()
            .context("Invalid generator settings")?;

        Ok(CliConfig {
            start: args.target,
            end: args.to,
            seed,
            generator,
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let generator = Generator::new(config.generator).context("Invalid generator settings")?;
    debug!("Using seed {}", config.seed);

    match config.end {
        None => {
            info!("Generating expression for {}", config.start);
            let result = generator.generate(config.start, config.seed);
            println!("{}", result);
        }
        Some(end) => {
            info!("Generating expressions for {}..={}", config.start, end);
            let results = generator
                .generate_range(config.start..=end, config.seed)
                .context("Invalid range")?;
            for result in results {
                println!("{} = {}", result.value, result);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(target: i64) -> CliArgs {
        CliArgs {
            target,
            to: None,
            seed: Some(7),
            max_terms: MAX_TERMS,
            attempts: MAX_ATTEMPTS,
            log_level: LogLevel::Warn,
        }
    }

    #[test]
    fn test_cli_args_parsing() {
        let parsed = CliArgs::try_parse_from(["tetraktys", "-27", "--to", "30", "--seed", "5"]);
        assert!(parsed.is_ok());
        if let Ok(parsed) = parsed {
            assert_eq!(parsed.target, -27);
            assert_eq!(parsed.to, Some(30));
            assert_eq!(parsed.seed, Some(5));
            assert_eq!(parsed.max_terms, 4);
            assert_eq!(parsed.attempts, 50);
            assert!(matches!(parsed.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_rejects_non_integer_target() {
        assert!(CliArgs::try_parse_from(["tetraktys", "4.5"]).is_err());
        assert!(CliArgs::try_parse_from(["tetraktys"]).is_err());
    }

    #[test]
    fn test_config_keeps_explicit_seed() {
        let config = CliConfig::from_args(args(8));
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.seed, 7);
            assert_eq!(config.start, 8);
            assert_eq!(config.end, None);
            assert_eq!(config.generator, GeneratorConfig::default());
        }
    }

    #[test]
    fn test_config_defaults_seed_to_clock() {
        let mut a = args(8);
        a.seed = None;
        let config = CliConfig::from_args(a);
        assert!(matches!(config, Ok(c) if c.seed > 0));
    }

    #[test]
    fn test_config_rejects_bad_budget() {
        let mut a = args(8);
        a.max_terms = 0;
        assert!(CliConfig::from_args(a).is_err());

        let mut a = args(8);
        a.attempts = 0;
        assert!(CliConfig::from_args(a).is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
