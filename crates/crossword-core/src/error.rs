/// Errors raised while mapping a word placement onto the grid.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    /// A letter of the word falls outside the fixed grid.
    #[display("word {word_nbr} leaves the grid at x={x}, y={y}")]
    OutOfBounds {
        /// Number of the offending word.
        word_nbr: u32,
        /// Column the letter would occupy.
        x: i64,
        /// Row the letter would occupy.
        y: i64,
    },
    /// The orientation string is neither `across` nor `down`.
    #[display("invalid word orientation: {value:?}")]
    InvalidOrientation {
        /// The rejected orientation string.
        value: String,
    },
}

/// Errors raised by single-cell edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The coordinate lies outside the grid.
    #[display("cell ({row}, {col}) is outside the grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The coordinate holds no letter and cannot take input.
    #[display("cell ({row}, {col}) is not part of any word")]
    EmptyCell {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// Errors raised while encoding the grid back into answers.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SubmissionError {
    /// The placement path could not be walked on the grid.
    #[display("invalid placement: {_0}")]
    Placement(#[from] PlacementError),
    /// The encoded answer does not have one character per letter.
    #[display("word {word_nbr}: encoded {actual} characters, expected {expected}")]
    Mismatch {
        /// Number of the offending word.
        word_nbr: u32,
        /// Letter count of the word.
        expected: usize,
        /// Character count of the encoded answer.
        actual: usize,
    },
}
