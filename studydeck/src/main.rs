use std::fs::File;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use studydeck::{reducer, Action, AppState, Catalog, Ui, View};
use studydeck_core::{process_raw_event, spawn_event_poller, EventKind, Listeners, Store};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewArg {
    Courses,
    Universities,
}

impl From<ViewArg> for View {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Courses => View::Courses,
            ViewArg::Universities => View::Universities,
        }
    }
}

/// Browse study-abroad courses and universities in the terminal.
#[derive(Debug, Parser)]
#[command(name = "studydeck", version, about)]
struct Args {
    /// View to open on
    #[arg(long, value_enum, default_value = "courses")]
    view: ViewArg,

    /// Directory with countries.json, courses.json and universities.json;
    /// defaults to the embedded catalog
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Append logs to this file (filtered via RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &PathBuf) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    // Load and validate before touching the terminal so parse errors print
    // to a normal screen
    let catalog = match &args.data_dir {
        Some(dir) => Catalog::load_dir(dir),
        None => Catalog::load_embedded(),
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("studydeck: {err}");
            std::process::exit(1);
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, catalog, args.view.into()).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    catalog: Catalog,
    view: View,
) -> io::Result<()> {
    let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();
    let poller = spawn_event_poller(
        raw_tx,
        Duration::from_millis(10),
        Duration::from_millis(10),
        cancel.clone(),
    );

    let mut store = Store::new(AppState::new(catalog, view), reducer);
    let mut ui = Ui::new();
    let mut listeners: Listeners<Action, _> = Listeners::new();
    Ui::mount_listeners(store.state().view, &mut listeners);

    terminal.draw(|frame| ui.render(frame, store.state()))?;

    while let Some(raw) = raw_rx.recv().await {
        let event = process_raw_event(raw);
        let mut render = matches!(event, EventKind::Resize(..));

        let mut actions = ui.map_event(&event, store.state());
        actions.extend(listeners.notify(&event, &ui.ctx));

        let view_before = store.state().view;
        for action in actions {
            render |= store.dispatch(action);
        }
        if store.state().quit {
            break;
        }
        if store.state().view != view_before {
            Ui::mount_listeners(store.state().view, &mut listeners);
        }
        if render {
            terminal.draw(|frame| ui.render(frame, store.state()))?;
        }
    }

    cancel.cancel();
    let _ = poller.await;
    Ok(())
}
