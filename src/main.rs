// heapstep: step-by-step heap sort with narrated history

use std::fs::File;
use std::io;
use std::sync::Mutex;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use heapstep::cli::Cli;
use heapstep::history::StepRecord;
use heapstep::sift::engine::format_values;
use heapstep::sift::{HeapOrder, SiftEngine, SiftError};
use heapstep::ui::App;

/// Logs go to `--log-file` when given, to stderr in headless mode, and
/// nowhere otherwise so the alternate screen stays clean.
fn init_logging(cli: &Cli) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = &cli.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if cli.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn print_record(record: &StepRecord<i64>) {
    println!(
        "[{:>3}] {:<8} [{}]",
        record.index,
        record.phase.to_string(),
        format_values(&record.values)
    );
    for line in &record.narrative {
        println!("      {}", line);
    }
}

/// Run to completion without a terminal UI, printing every record
fn run_headless(mut engine: SiftEngine<i64>, order: HeapOrder) -> Result<(), SiftError> {
    print_record(engine.start(order));
    loop {
        match engine.step() {
            Ok(record) => print_record(record),
            Err(SiftError::NothingToDo) => break,
            Err(e) => return Err(e),
        }
    }
    info!(steps = engine.history().len(), "headless run complete");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    init_logging(&cli)?;

    let mut engine = SiftEngine::new(cli.initial_values());
    info!(len = engine.len(), "engine created");

    if cli.headless {
        run_headless(engine, cli.order.unwrap_or(HeapOrder::Max))?;
        return Ok(());
    }

    if let Some(order) = cli.order {
        engine.start(order);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(engine, cli.interval());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
