// bigcalc: arbitrary-precision integer calculator

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use bigcalc::interpreter::engine::Calculator;
use bigcalc::logging::{self, BoxError, LogTarget};
use bigcalc::repl;
use bigcalc::transcript::DEFAULT_TRANSCRIPT_LIMIT;
use bigcalc::ui::App;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read lines from stdin and print replies instead of starting the TUI
    #[arg(short, long)]
    plain: bool,

    /// Write log events to this file (the TUI logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Number of transcript entries kept in the TUI
    #[arg(long, default_value_t = DEFAULT_TRANSCRIPT_LIMIT)]
    history_limit: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    let plain = cli.plain || !io::stdin().is_terminal();

    let log_target = match (&cli.log_file, plain) {
        (Some(path), _) => LogTarget::File(path),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::Disabled,
    };
    logging::init(log_target, cli.verbose)?;

    let mut calculator = Calculator::with_transcript_limit(cli.history_limit);

    if plain {
        tracing::debug!("starting in plain mode");
        repl::run(&mut calculator, io::stdin().lock(), io::stdout().lock())?;
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(calculator);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }
    if let Some(message) = app.exit_message {
        println!("{}", message);
    }

    Ok(())
}
