//! TestNinja CLI
//!
//! Runs the exercises from the command line.
//!
//! # Usage
//!
//! ```bash
//! testninja fizzbuzz 15
//! testninja demerit 90
//! testninja odd 9
//! testninja stack a b c
//! testninja statement 1 "Ada Lovelace" --date 2020-12-12
//! testninja video-title --file video.json
//! testninja installer acme setup-1.2
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use testninja::constants::{APP_NAME, APP_VERSION, STATEMENTS_DIR_NAME};
use testninja::fundamentals::{calculate_demerit_points, fizzbuzz, math, Stack};
use testninja::mocking::{
    FsFileReader, FsStatementGenerator, InMemoryVideoRepository, InstallerHelper,
    SimFileDownloader, StatementGenerator, VideoService,
};
use testninja::Settings;

// =============================================================================
// CLI
// =============================================================================

/// TestNinja - unit testing exercises
#[derive(Parser, Debug)]
#[command(name = APP_NAME)]
#[command(about = "Run the TestNinja exercises")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the FizzBuzz output for every number from 1 to N
    Fizzbuzz {
        /// Last number
        upto: u32,
    },
    /// Demerit points for a speed in km/h
    Demerit {
        /// Speed in km/h
        #[arg(allow_hyphen_values = true)]
        speed: i32,
    },
    /// Odd numbers up to a limit
    Odd {
        /// Inclusive limit
        #[arg(allow_hyphen_values = true)]
        limit: i32,
    },
    /// Push the items onto a stack, then pop them all
    Stack {
        /// Items to push, bottom first
        items: Vec<String>,
    },
    /// Write a housekeeper statement into the data directory
    Statement {
        /// Housekeeper object id
        oid: u64,
        /// Housekeeper full name
        full_name: String,
        /// Statement date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Read the title from a video file
    VideoTitle {
        /// Video file (defaults to TESTNINJA_VIDEO_FILE or video.txt)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Download a customer installer into the data directory (simulated)
    Installer {
        /// Customer name
        customer: String,
        /// Installer name
        installer: String,
    },
}

// =============================================================================
// Main
// =============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Initialize logging
    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("{} v{}", APP_NAME, APP_VERSION);

    let settings = Settings::from_env()?;
    tracing::debug!(?settings, "Loaded settings");

    match cli.command {
        Commands::Fizzbuzz { upto } => {
            for number in 1..=upto {
                println!("{}", fizzbuzz::output(number));
            }
        }
        Commands::Demerit { speed } => {
            let points = calculate_demerit_points(speed)?;
            println!("{}", points);
        }
        Commands::Odd { limit } => {
            let odd: Vec<String> = math::odd_numbers(limit).map(|n| n.to_string()).collect();
            println!("{}", odd.join(" "));
        }
        Commands::Stack { items } => {
            let mut stack: Stack<String> = Stack::with_capacity(items.len());
            for item in items {
                stack.push(item)?;
            }
            tracing::debug!(count = stack.count(), "Pushed items");

            while !stack.is_empty() {
                println!("{}", stack.pop()?);
            }
        }
        Commands::Statement {
            oid,
            full_name,
            date,
        } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let generator = FsStatementGenerator::new(settings.data_dir.join(STATEMENTS_DIR_NAME));
            match generator.save_statement(oid, &full_name, date).await? {
                Some(filename) => println!("{}", filename),
                None => anyhow::bail!("no statement produced for {}", oid),
            }
        }
        Commands::VideoTitle { file } => {
            let path = file.unwrap_or(settings.video_file);
            let service = VideoService::new(
                Arc::new(FsFileReader),
                Arc::new(InMemoryVideoRepository::default()),
                path,
            );
            println!("{}", service.read_video_title().await?);
        }
        Commands::Installer {
            customer,
            installer,
        } => {
            let helper = InstallerHelper::new(
                Arc::new(SimFileDownloader::new()),
                settings.download_base_url.as_str(),
                settings.data_dir.join(&installer),
            );
            let url = helper.installer_url(&customer, &installer)?;
            if helper.download_installer(&customer, &installer).await? {
                println!("{}", url);
            } else {
                anyhow::bail!("download failed: {}", url);
            }
        }
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
