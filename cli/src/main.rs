//! # Folio Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Entry point for the `folio` CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers in the `folio` library
//!
//! ## Examples
//!
//! ```bash
//! # Ask the assistant a question
//! folio ask what are your skills
//!
//! # Build and preview the site with increased verbosity
//! folio -v build && folio -vv srv
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the matching command handler
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use folio::commands;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    about = "💼 Folio: portfolio site builder with a keyword FAQ assistant",
    long_about = "Build and preview Manish Sahu's portfolio site, and query its FAQ assistant\n\
                  from the terminal.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Answer one question with the FAQ assistant.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Chat with the FAQ assistant on the terminal.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// List the assistant's keyword rules in evaluation order.
    #[command(alias = "t")]
    Topics(commands::topics::TopicsArgs),
    /// Render the portfolio site into the output directory.
    #[command(alias = "b")]
    Build(commands::build::BuildArgs),
    /// Serve the built site with the assistant and contact endpoints.
    Srv(commands::srv::SrvArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Ask(args) => commands::ask::handle_ask(args).await,
        Commands::Chat(args) => commands::chat::handle_chat(args).await,
        Commands::Topics(args) => commands::topics::handle_topics(args).await,
        Commands::Build(args) => commands::build::handle_build(args).await,
        Commands::Srv(args) => commands::srv::handle_srv(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
