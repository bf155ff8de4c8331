//! Selection sets for people and tags, plus the chip arithmetic used when
//! rendering them.

mod chips;
mod people;
mod tags;

pub use chips::{CHIP_OVERFLOW_LIMIT, ChipOverflow, chip_width, fits_single_row};
pub use people::PeopleSelection;
pub use tags::{TAG_LABEL_LIMIT, TagList, chip_label};
