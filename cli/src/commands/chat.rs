//! # Folio Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `folio chat` is a line-oriented version of the page's chat widget. Each
//! input line is sent to a `ChatLog` and the answer is printed. Blank lines are
//! ignored. The session ends on `exit`, `quit` or end of input.
//!
//! With `--transcript FILE` the whole conversation is written to FILE as JSON
//! when the session ends.
//!
use crate::assistant::{ChatLog, EMPTY_LOG_PLACEHOLDER};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::borrow::Cow;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const PROMPT: &str = "you> ";

#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Write the conversation to this file as JSON on exit.
    #[arg(long, value_name = "FILE")]
    pub transcript: Option<PathBuf>,
}

pub async fn handle_chat(args: ChatArgs) -> Result<()> {
    info!("Starting interactive chat session");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut log = ChatLog::new();
    let session = run_chat(stdin.lock(), stdout.lock(), &mut log);
    info!("Chat session ended after {} messages", log.len());

    // Answered turns are saved even when the session ended on an I/O error.
    if let Some(path) = args.transcript {
        write_transcript(&log, &path)?;
    }
    session
}

fn write_transcript(log: &ChatLog, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(log.messages())
        .context("Failed to serialize chat transcript")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write transcript to '{}'", path.display()))?;
    info!("Transcript written to {}", path.display());
    Ok(())
}

/// Drives one session over any byte source and sink, appending to `log`.
///
/// Lines that are not valid UTF-8 are decoded lossily and still answered.
pub fn run_chat<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    log: &mut ChatLog,
) -> Result<()> {
    writeln!(output, "{}", EMPTY_LOG_PLACEHOLDER)?;
    writeln!(output, "(type 'exit' to leave)")?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read chat input")?;
        if read == 0 {
            writeln!(output)?;
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            warn!("Chat input was not valid UTF-8, bytes were replaced");
        }
        let line = line.trim_end_matches(['\n', '\r']);

        let command = line.trim();
        if command.eq_ignore_ascii_case("exit") || command.eq_ignore_ascii_case("quit") {
            debug!("Chat exit requested");
            break;
        }

        if let Some(reply) = log.send(line) {
            writeln!(output, "folio> {}", reply.text)?;
        }
    }
    Ok(())
}
