//! Core crate exports for the `picsift` search surfaces.
//!
//! The state core (focus, selection, popovers, surfaces and the shell) is
//! independent of the terminal. [`tui`] renders it with ratatui and drives it
//! from crossterm events.

pub mod app_dirs;
pub mod catalog;
pub mod criteria;
pub mod element;
pub mod event;
pub mod focus;
pub mod logging;
pub mod popover;
pub mod selection;
pub mod shell;
pub mod suggest;
pub mod surfaces;
pub mod timer;
pub mod tui;

pub use criteria::FilterCriteria;
pub use shell::{SearchShell, ShellOptions, ShellOutcome};
pub use tui::{SessionOutcome, Theme, run};
