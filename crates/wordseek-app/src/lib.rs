//! Shared library module for the Wordseek app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub(crate) mod action;
pub mod app;
pub mod payload;
pub(crate) mod state;
pub(crate) mod ui;
pub(crate) mod view_model_builder;

pub use self::{app::WordseekApp, payload::PuzzleSource};
