//! Command-line crossword client.
//!
//! Loads a puzzle document, applies cell edits, optionally submits or clears
//! the answers, and prints the resulting grid and clues.

use std::{path::PathBuf, sync::Arc, time::Duration};

use clap::Parser;
use crossword_app::{
    CrosswordApp,
    action::Action,
    backend::FileBackend,
    state::{CrossingPolicy, Settings},
    ui::game_screen,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct CellEdit {
    row: usize,
    col: usize,
    value: String,
}

fn parse_cell_edit(s: &str) -> Result<CellEdit, String> {
    let (coord, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ROW,COL=VALUE, got {s:?}"))?;
    let (row, col) = coord
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {coord:?}"))?;
    Ok(CellEdit {
        row: row.trim().parse().map_err(|e| format!("bad row {row:?}: {e}"))?,
        col: col.trim().parse().map_err(|e| format!("bad column {col:?}: {e}"))?,
        value: value.to_owned(),
    })
}

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Puzzle document (JSON with `id` and `puzzleData`).
    #[arg(long, env = "CROSSWORD_PUZZLE")]
    puzzle: PathBuf,
    /// Cell edit as ROW,COL=VALUE; may be repeated.
    #[arg(long = "set", value_name = "ROW,COL=VALUE", value_parser = parse_cell_edit)]
    edits: Vec<CellEdit>,
    /// Submit the grid's answers after applying edits.
    #[arg(long, conflicts_with = "clear")]
    submit: bool,
    /// Reset every answer to placeholders.
    #[arg(long)]
    clear: bool,
    /// Refuse puzzles whose crossing words disagree.
    #[arg(long)]
    strict_crossings: bool,
    /// Milliseconds between polls for background work.
    #[arg(long, default_value_t = 5)]
    poll_interval_ms: u64,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let settings = Settings {
        crossing_policy: if args.strict_crossings {
            CrossingPolicy::Strict
        } else {
            CrossingPolicy::Overwrite
        },
    };
    let poll_interval = Duration::from_millis(args.poll_interval_ms);
    let backend = FileBackend::new(args.puzzle);
    log::info!("using puzzle document {}", backend.path().display());
    let mut app = CrosswordApp::new(Arc::new(backend), settings);

    app.dispatch(Action::Reload);
    app.run_until_idle(poll_interval);

    for CellEdit { row, col, value } in args.edits {
        app.dispatch(Action::SetCellValue { row, col, value });
    }
    app.run_until_idle(poll_interval);

    if !app.state().errors().is_empty() && (args.clear || args.submit) {
        log::error!("not sending answers: earlier steps failed");
    } else if args.clear {
        app.dispatch(Action::Clear);
    } else if args.submit {
        app.dispatch(Action::Submit);
    }
    app.run_until_idle(poll_interval);

    print!("{}", game_screen::render(&app.game_screen_vm()));

    let errors = app.state().errors();
    if !errors.is_empty() {
        for error in errors {
            log::error!("{error}");
        }
        std::process::exit(1);
    }
}
