//! The three interactive surfaces: the inline search box, the advanced search
//! modal and the people view.
//!
//! Surfaces never talk to each other. They report intent through their
//! [`Outbox`] and the shell decides what to do with it.

mod advanced;
mod people_view;
mod search_box;
mod signal;

pub use advanced::AdvancedSearchModal;
pub use people_view::PeopleViewModal;
pub use search_box::{PLACEHOLDER, SearchBox};
pub use signal::{FocusChange, Outbox, Signal};
