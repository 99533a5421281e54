//! Hero banner demo: animates a typewriter prompt on the current terminal line.
//!
//! ```text
//! cargo run --example hero_banner -- --config banner.toml --seed 7
//! ```
//!
//! Press `q`, `Esc` or `Ctrl-C` to quit.

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, terminal,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::prelude::*;
use typecycler::{
    CyclerActor, CyclerConfig, Driver, RandomSource, SeededRandom, TerminalTarget, TextCycler,
    ThreadRandom,
};

#[derive(Parser, Debug)]
#[command(name = "hero_banner", about = "Typewriter banner demo", version)]
struct Opts {
    /// TOML file with prefix, phrases, timing and glitch settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed the glitch RNG for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Opts::parse();
    init_tracing();

    let config = match &opts.config {
        Some(path) => CyclerConfig::load(path)?,
        None => CyclerConfig::default(),
    };
    let random: Box<dyn RandomSource + Send> = match opts.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    let cycler = TextCycler::from_config(&config, random)?;

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let actor = CyclerActor::spawn(Driver::new(cycler, TerminalTarget::stdout()));
    let result = match actor {
        Ok(actor) => {
            let waited = wait_for_quit();
            actor.dispose();
            waited
        }
        Err(err) => Err(err),
    };

    let _ = execute!(stdout, cursor::Show);
    let _ = terminal::disable_raw_mode();
    let _ = writeln!(stdout);
    result.map_err(Into::into)
}

/// Block until the user asks to quit.
fn wait_for_quit() -> io::Result<()> {
    loop {
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(())
                }
                _ => {}
            }
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(io::stderr))
        .try_init();
}
