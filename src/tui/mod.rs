//! Terminal front end for the search shell.
//!
//! Rendering records a hit map each frame; mouse events are resolved against
//! the map from the previous frame and handed to the shell as element events.

mod hitmap;
pub mod input;
pub mod render;
mod runtime;
pub mod theme;

pub use hitmap::{HitMap, point_in_rect};
pub use runtime::{SessionOutcome, run};
pub use theme::Theme;
