use clap::{Parser as ClapParser, Subcommand};
use cmini_check::config::{Config, ReportFormat};
use cmini_check::driver::{check, load_source};
use cmini_check::error::{CompilerError, ParseError};
use cmini_check::lexer::Lexer;
use cmini_check::report::Report;
use log::warn;
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(ClapParser)]
#[command(author, version, about = "Grammar checker for a small C-like language")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format for the verdict
    #[arg(long, global = true, value_enum)]
    format: Option<ReportFormat>,

    /// Log each grammar rule as it is entered
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log every token as it is consumed
    #[arg(long, global = true)]
    trace: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a source file (or the sample program when no path is given)
    Check {
        path: Option<PathBuf>,
    },
    /// Print the token stream of a source file
    Tokens {
        path: Option<PathBuf>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a config file with defaults
    Init,
    /// Print the config file location
    Path,
}

fn init_logging(cli: &Cli, config: &Config) {
    let level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn print_report(report: &Report, format: ReportFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        ReportFormat::Text => println!("{}", report),
        ReportFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn print_tokens(path: Option<&Path>, config: &Config) -> Result<(), CompilerError> {
    let (_, source_code) = load_source(path, config)?;
    let tokens = Lexer::new(&source_code).tokenize().map_err(ParseError::from)?;
    for token in tokens {
        println!("{}:{}\t{}\t{:?}", token.line, token.position, token.kind, token.lexeme());
    }
    Ok(())
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = Config::load()?;
    init_logging(&cli, &config);

    if let Ok(value) = env::var("CMINI_FORMAT") {
        if config.apply_format_override(&value).is_err() {
            warn!("Ignoring unknown CMINI_FORMAT value {:?}", value);
        }
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    match &cli.command {
        None => {
            let report = check(None, &config);
            print_report(&report, config.format)?;
            return Ok(ExitCode::from(report.exit_status()));
        }
        Some(Commands::Check { path }) => {
            let report = check(path.as_deref(), &config);
            print_report(&report, config.format)?;
            return Ok(ExitCode::from(report.exit_status()));
        }
        Some(Commands::Tokens { path }) => {
            if let Err(e) = print_tokens(path.as_deref(), &config) {
                println!("{}", e);
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => {
                println!("Environment: {}", Config::env_name());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigCommands::Init => {
                let config_path = Config::get_config_path();
                if config_path.exists() {
                    println!("Config file already exists at: {}", config_path.display());
                } else {
                    Config::default().save_to(&config_path)?;
                    println!("Initialized new config file at: {}", config_path.display());
                }
            }
            ConfigCommands::Path => {
                println!("{}", Config::get_config_path().display());
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}

