//! CLI implementation for `armemus boards` command

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::output::{print_detail, print_info, print_json};
use crate::config::defaults::NO_BOARD_LABEL;
use crate::core::board::{Board, BoardFamily};
use crate::core::global_config::GlobalConfig;
use crate::infra::dirs::ArmemusDirs;

#[derive(Serialize)]
struct BoardRow<'a> {
    index: usize,
    name: &'a str,
    family: BoardFamily,
    extension: &'static str,
}

impl<'a> BoardRow<'a> {
    fn new(index: usize, board: &'a Board) -> Self {
        Self {
            index,
            name: &board.name,
            family: board.family,
            extension: board.family.main_source_ext(),
        }
    }
}

/// Execute the boards command
pub fn execute() -> Result<()> {
    let config = GlobalConfig::load(&ArmemusDirs::new())
        .with_context(|| "Failed to load global configuration")?;
    let catalog = config.catalog();

    let rows: Vec<BoardRow> = catalog
        .entries()
        .iter()
        .enumerate()
        .map(|(i, board)| BoardRow::new(i + 1, board))
        .collect();

    if print_json(&rows)? {
        return Ok(());
    }

    print_info("Boards:");
    print_detail(&format!("0) {NO_BOARD_LABEL}"));
    for row in &rows {
        print_detail(&format!(
            "{}) {} ({}, main source {})",
            row.index, row.name, row.family, row.extension
        ));
    }
    Ok(())
}
