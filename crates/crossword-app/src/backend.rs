//! Puzzle data sources.
//!
//! A backend hands out the current puzzle and accepts answer submissions. Calls
//! are blocking; the app runs them on the background worker.

use std::{
    fmt::Debug,
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::async_work::puzzle_dto::{PuzzleDto, WordPlacementDto};

/// Errors returned by backends.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum BackendError {
    #[display("I/O error: {_0}")]
    Io(#[from] io::Error),
    #[display("malformed puzzle document: {_0}")]
    Json(#[from] serde_json::Error),
    #[display("unknown puzzle {actual:?} (current puzzle is {expected:?})")]
    UnknownPuzzle { expected: String, actual: String },
    #[display("backend state is poisoned")]
    Poisoned,
}

/// A source and sink of puzzle data.
pub trait PuzzleBackend: Debug + Send + Sync {
    /// Fetches the current puzzle.
    fn fetch_puzzle(&self) -> Result<PuzzleDto, BackendError>;

    /// Stores a submission for `puzzle_id`.
    fn submit_puzzle(
        &self,
        puzzle_id: &str,
        submission: &[WordPlacementDto],
    ) -> Result<(), BackendError>;
}

/// Backend storing a single puzzle as a JSON document on disk.
///
/// A submission rewrites the document's placements, so the next fetch returns
/// the submitted answers. The new document is written next to the old one and
/// renamed over it, so an interrupted write leaves the old document intact.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn replace_document(&self, text: &str) -> io::Result<()> {
        let staging = self.staging_path();
        if let Err(err) = fs::write(&staging, text).and_then(|()| fs::rename(&staging, &self.path)) {
            let _ = fs::remove_file(&staging);
            return Err(err);
        }
        Ok(())
    }
}

impl PuzzleBackend for FileBackend {
    fn fetch_puzzle(&self) -> Result<PuzzleDto, BackendError> {
        let text = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn submit_puzzle(
        &self,
        puzzle_id: &str,
        submission: &[WordPlacementDto],
    ) -> Result<(), BackendError> {
        let mut puzzle = self.fetch_puzzle()?;
        check_puzzle_id(&puzzle, puzzle_id)?;
        puzzle.puzzle_data = submission.to_vec();

        let mut text = serde_json::to_string_pretty(&puzzle)?;
        text.push('\n');
        self.replace_document(&text)?;
        Ok(())
    }
}

/// In-process backend holding one puzzle.
#[derive(Debug)]
pub struct MemoryBackend {
    puzzle: Mutex<PuzzleDto>,
    submissions: Mutex<Vec<(String, Vec<WordPlacementDto>)>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new(puzzle: PuzzleDto) -> Self {
        Self {
            puzzle: Mutex::new(puzzle),
            submissions: Mutex::new(vec![]),
        }
    }

    /// Returns every accepted submission in arrival order.
    pub fn submissions(&self) -> Result<Vec<(String, Vec<WordPlacementDto>)>, BackendError> {
        Ok(self
            .submissions
            .lock()
            .map_err(|_| BackendError::Poisoned)?
            .clone())
    }
}

impl PuzzleBackend for MemoryBackend {
    fn fetch_puzzle(&self) -> Result<PuzzleDto, BackendError> {
        Ok(self
            .puzzle
            .lock()
            .map_err(|_| BackendError::Poisoned)?
            .clone())
    }

    fn submit_puzzle(
        &self,
        puzzle_id: &str,
        submission: &[WordPlacementDto],
    ) -> Result<(), BackendError> {
        let mut puzzle = self.puzzle.lock().map_err(|_| BackendError::Poisoned)?;
        check_puzzle_id(&puzzle, puzzle_id)?;
        puzzle.puzzle_data = submission.to_vec();
        self.submissions
            .lock()
            .map_err(|_| BackendError::Poisoned)?
            .push((puzzle_id.to_owned(), submission.to_vec()));
        Ok(())
    }
}

fn check_puzzle_id(puzzle: &PuzzleDto, puzzle_id: &str) -> Result<(), BackendError> {
    if puzzle.id == puzzle_id {
        Ok(())
    } else {
        Err(BackendError::UnknownPuzzle {
            expected: puzzle.id.clone(),
            actual: puzzle_id.to_owned(),
        })
    }
}
