//! Focus and visibility state for single-line text inputs.
//!
//! [`FocusState::derive`] turns a handful of booleans into the visual state of
//! an input. [`FocusField`] owns those booleans together with the text and the
//! timers that debounce blur, restore the caret and return focus after a clear.

mod field;
mod state;

pub use field::{FieldConfig, FieldEvents, FocusField};
pub use state::{FocusFlags, FocusState, Layer, Presentation};
