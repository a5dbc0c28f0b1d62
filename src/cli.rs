// src/cli.rs
use std::{env, io::BufRead, path::PathBuf};

use crate::{
    clip::{self, ClipSink, StdoutSink},
    config::consts::CONFIRM_MESSAGE,
    config::options::DocSource,
    progress::Progress,
    scrape,
};

pub struct Params {
    pub source: Option<DocSource>,
    pub yes: bool,
}

impl Params {
    pub fn new() -> Self {
        Self { source: None, yes: false }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;
    run_with(params)
}

pub fn run_with(params: Params) -> Result<(), Box<dyn std::error::Error>> {
    let source = params
        .source
        .ok_or("Specify --file <path> or --page <name>")?;

    // Confirm before anything runs: cancel means no scrape and no output.
    let stdin = std::io::stdin();
    if !confirmed(stdin.lock(), params.yes) {
        eprintln!("Canceled.");
        return Ok(());
    }

    let mut prog = CliProgress;
    let records = scrape::run(&source, Some(&mut prog))?;

    let text = clip::to_clip_string(&records);
    StdoutSink.write(&text)?;
    eprintln!("{} record(s) copied out.", records.len());
    Ok(())
}

/// Terminal stand-in for the agree/cancel prompt. Anything but an explicit
/// yes counts as cancel.
pub fn confirmed(input: impl BufRead, yes_flag: bool) -> bool {
    if yes_flag {
        return true;
    }
    eprint!("{} [y/N] ", CONFIRM_MESSAGE);
    match input.lines().next() {
        Some(Ok(line)) => matches!(line.trim(), "y" | "Y" | "yes"),
        _ => false,
    }
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-f" | "--file" => {
                let v = args.next().ok_or("Missing value for --file")?;
                params.source = Some(DocSource::File(PathBuf::from(v)));
            }
            "-p" | "--page" => {
                let v = args.next().ok_or("Missing value for --page")?;
                params.source = Some(DocSource::Page(v));
            }
            "-y" | "--yes" => params.yes = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(())
}

struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

// ── Tests ──
