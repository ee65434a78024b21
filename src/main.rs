mod app;
mod catalog;
mod cli;
mod config;
mod export;
mod form;
mod input;
mod logging;
mod strategy;
mod templates;
mod ui;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{DefaultTerminal, Terminal};
use tracing::{debug, info, warn};

use crate::app::{App, SessionInfo};
use crate::catalog::{Catalog, Phase, Project};
use crate::cli::{Cli, Commands};
use crate::config::{Config, ConfigLoadStatus, LoadedConfig};
use crate::export::SystemClipboard;
use crate::strategy::{Renderer, StrategyKind};

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();

    // Initialize logging before anything else
    let (session, reload_handle, _guard) = match logging::init() {
        Ok(ctx) => (
            SessionInfo {
                session_id: Some(ctx.session_id),
                log_directory: Some(ctx.log_directory),
                logging_error: None,
            },
            Some(ctx.reload_handle),
            Some(ctx._guard),
        ),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            (
                SessionInfo {
                    logging_error: Some(e.message),
                    ..SessionInfo::default()
                },
                None,
                None,
            )
        }
    };

    let loaded_config = config::load_config(cli.config.as_deref());
    debug!(
        config_path = %loaded_config.config_path.display(),
        project_config_path = ?loaded_config.project_config_path,
        status = ?loaded_config.status,
        "config_loaded"
    );
    if let ConfigLoadStatus::Error(ref reason) = loaded_config.status {
        warn!(reason = %reason, "config_defaults_used");
    }

    if let Some(ref handle) = reload_handle
        && let Err(e) = logging::update_log_level(handle, &loaded_config.config.logging.level)
    {
        warn!(error = %e, "log_level_update_failed");
    }

    if let Some(ref log_dir) = session.log_directory {
        logging::cleanup_old_logs(log_dir);
    }

    let catalog = Catalog::builtin();
    let session_id = session.session_id.clone();

    let result = match cli.command {
        None | Some(Commands::Tui) => run_tui(&catalog, &loaded_config, session),
        Some(Commands::Render {
            strategy,
            phase,
            project,
            concept,
            save,
        }) => {
            let request = RenderRequest {
                kind: strategy,
                phase: phase.as_deref(),
                project: project.as_deref(),
                concept: &concept,
                save,
            };
            let mut stdout = io::stdout().lock();
            run_render(&mut stdout, &catalog, &loaded_config.config, &request).map(|saved| {
                if let Some(path) = saved {
                    eprintln!("🎭 Plan sauvé: {}", path.display());
                }
            })
        }
        Some(Commands::Catalog) => print_catalog(&mut io::stdout().lock(), &catalog),
    };

    if let Some(sid) = session_id {
        info!(
            session_id = %sid,
            duration_secs = start_time.elapsed().as_secs_f64(),
            "session_end"
        );
    }

    result
}

fn run_tui(catalog: &Catalog, loaded_config: &LoadedConfig, session: SessionInfo) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(ratatui::backend::CrosstermBackend::new(stdout))?;

    let app = App::new(
        Renderer::new(catalog),
        &loaded_config.config,
        Box::new(SystemClipboard),
        session,
    );
    let result = run_app(terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;

    result
}

fn run_app(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    info!(
        phase = app.form.phase.id(),
        project = app.form.project.id(),
        output_dir = %app.output_dir.display(),
        "tui_started"
    );

    while !app.should_quit {
        terminal.draw(|f| ui::draw_ui(f, &mut app))?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }

        let notice_open = app.notice.is_some();
        let action = match crossterm::event::read()? {
            Event::Key(key) => input::map_key(key, app.form.focus, notice_open),
            Event::Mouse(mouse) => input::map_mouse(mouse, notice_open),
            // Resize is picked up by the next draw
            _ => None,
        };

        if let Some(action) = action {
            app.apply(action);
        }
    }

    Ok(())
}

/// Arguments of the `render` subcommand.
struct RenderRequest<'a> {
    kind: StrategyKind,
    phase: Option<&'a str>,
    project: Option<&'a str>,
    concept: &'a str,
    save: bool,
}

/// Write the requested strategy to `out`, falling back to the configured
/// phase and project. Returns the plan file path when `save` is set.
fn run_render(
    out: &mut impl Write,
    catalog: &Catalog,
    config: &Config,
    request: &RenderRequest,
) -> Result<Option<PathBuf>> {
    let phase = request.phase.unwrap_or(&config.defaults.phase);
    let project = request.project.unwrap_or(&config.defaults.project);
    let kind = request.kind;

    let document = Renderer::new(catalog).render(kind, phase, project, request.concept);
    info!(strategy = kind.id(), phase, project, "strategy_rendered");

    out.write_all(document.as_bytes())?;
    out.flush()?;

    if !request.save {
        return Ok(None);
    }
    let path = export::save_plan(
        &config.output_directory(),
        &document,
        Local::now().naive_local(),
    )
    .context("Erreur sauvegarde")?;
    Ok(Some(path))
}

fn print_catalog(out: &mut impl Write, catalog: &Catalog) -> Result<()> {
    writeln!(out, "Phases:")?;
    for phase in Phase::ALL {
        if catalog.has_profile(phase) {
            writeln!(out, "  {}", phase.id())?;
        } else {
            writeln!(
                out,
                "  {} (uses the {} profile)",
                phase.id(),
                catalog.lookup_phase(phase.id()).phase.id()
            )?;
        }
    }

    writeln!(out, "Projects:")?;
    for project in Project::ALL {
        writeln!(out, "  {}", project.id())?;
    }

    Ok(())
}
