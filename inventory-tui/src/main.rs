//! Inventory TUI
//!
//! ```sh
//! # Interactive UI against a local service
//! inventory --api-url http://localhost:8000
//!
//! # Without a backend
//! inventory --demo
//!
//! # One-off listing
//! inventory list --category Tools --from 2025-01-01
//! ```

use std::cell::RefCell;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use inventory_client::{ClientConfig, HttpInventoryClient, InventoryApi, MemoryInventory};
use inventory_dispatch::{EffectRuntime, TracingMiddleware};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use inventory_tui::cli::{self, Cli, Command};
use inventory_tui::state::TICK_RATE_MS;
use inventory_tui::{handle_effect, logging, reducer, Action, AppState, InventoryUi};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::init(&args.log_file)?;

    let api: Arc<dyn InventoryApi> = if args.demo {
        info!("Using the built-in demo inventory");
        Arc::new(MemoryInventory::demo())
    } else {
        let config = ClientConfig::new(&args.api_url);
        info!(base_url = %config.base_url, "Using inventory service");
        Arc::new(HttpInventoryClient::new(config).context("building HTTP client")?)
    };

    match args.command.unwrap_or(Command::Tui) {
        Command::Tui => run_tui(api).await,
        Command::List {
            category,
            from,
            to,
            json,
        } => {
            let report = cli::list_report(
                api.as_ref(),
                category.as_deref(),
                from.as_deref(),
                to.as_deref(),
                json,
            )
            .await?;
            print!("{report}");
            Ok(())
        }
        Command::Categories => {
            print!("{}", cli::categories_report(api.as_ref()).await);
            Ok(())
        }
    }
}

async fn run_tui(api: Arc<dyn InventoryApi>) -> anyhow::Result<()> {
    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, api).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.context("running the UI")
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    api: Arc<dyn InventoryApi>,
) -> io::Result<()> {
    let mut runtime = EffectRuntime::new(AppState::default(), reducer, TracingMiddleware::new())
        .with_tick_rate(Duration::from_millis(TICK_RATE_MS));
    runtime.enqueue(Action::AppStarted);

    let ui = RefCell::new(InventoryUi::new());

    runtime
        .run(
            terminal,
            |frame, area, state| ui.borrow_mut().render(frame, area, state),
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, Action::Quit),
            |effect, ctx| handle_effect(&api, effect, ctx),
        )
        .await
}
