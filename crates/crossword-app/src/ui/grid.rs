use std::{fmt, str::FromStr};

use crossword_core::Orientation;

/// Identifier of a rendered cell, `cell-{row}-{col}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell-{}-{}", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("malformed cell id")]
pub struct CellIdParseError;

impl FromStr for CellId {
    type Err = CellIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix("cell-").ok_or(CellIdParseError)?;
        let (row, col) = rest.split_once('-').ok_or(CellIdParseError)?;
        Ok(Self {
            row: row.parse().map_err(|_| CellIdParseError)?,
            col: col.parse().map_err(|_| CellIdParseError)?,
        })
    }
}

/// Display props of one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub id: CellId,
    pub is_empty: bool,
    pub orientation: Option<Orientation>,
    pub letter: Option<char>,
    pub value: Option<String>,
    pub position_in_word: Option<usize>,
    pub word_nbr: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridViewModel {
    pub rows: Vec<Vec<GridCell>>,
}

/// Renders the grid as text, one line per row.
///
/// Cells outside any word are `#`, unanswered letters `.`, answered letters
/// show the first character of their value.
#[must_use]
pub fn render(vm: &GridViewModel) -> String {
    let mut out = String::new();
    for row in &vm.rows {
        for cell in row {
            let ch = if cell.is_empty {
                '#'
            } else {
                cell.value
                    .as_deref()
                    .and_then(|value| value.chars().next())
                    .unwrap_or('.')
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
