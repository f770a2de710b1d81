use anyhow::{Result, ensure};
use clap::{Parser, ValueEnum};
use dotenvy::dotenv;
use log::debug;
use std::fmt;
use std::path::PathBuf;
use tokio::io::BufReader;

use liftgen::logging::set_log_level;
use liftgen::store::DEFAULT_STORE_PATH;
use liftgen::{Catalogue, Session};

#[derive(Parser, Debug)]
#[command(version, about = "liftgen - random workout generator", long_about = None)]
struct Args {
    /// JSON file holding registered users and their history
    #[arg(short, long, env = "LIFTGEN_STORE", default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,
    /// Skip login; workouts are not recorded and nothing is saved
    #[arg(short, long)]
    guest: bool,
    #[arg(short, long, env = "LIFTGEN_LOG", default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Off => write!(f, "off"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();
    let level = args.log_level.to_string();
    ensure!(set_log_level(&level), "unsupported log level '{}'", level);
    debug!("{:?}", args);

    let input = BufReader::new(tokio::io::stdin());
    let output = std::io::stdout();

    let mut session = if args.guest {
        Session::guest(Catalogue::builtin(), input, output)
    } else {
        Session::open(&args.store, Catalogue::builtin(), input, output).await?
    };
    session.run().await
}
