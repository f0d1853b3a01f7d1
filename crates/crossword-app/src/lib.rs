//! Shared library module for the crossword app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod action_handler;
pub mod action_type;
pub mod app;
pub mod async_work;
pub mod backend;
pub mod state;
pub mod ui;
pub mod view_model_builder;

pub use app::CrosswordApp;
