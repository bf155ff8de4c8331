//! Auxiliary pickers of the advanced search modal.
//!
//! Only one popover is open at a time. Opening another closes the current
//! one and reports it, so the owner can collapse whatever fed it. An open
//! popover listens for pointer-downs outside its boundary; a closed one has no
//! listener at all.

use tracing::debug;

use crate::element::Region;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Popover {
	Date,
	Camera,
	TagSuggestions,
	LocationSuggestions,
}

impl Popover {
	pub const ALL: [Popover; 4] = [
		Popover::Date,
		Popover::Camera,
		Popover::TagSuggestions,
		Popover::LocationSuggestions,
	];

	/// Pointer-downs inside this region do not close the popover.
	#[must_use]
	pub fn boundary(self) -> Region {
		match self {
			Popover::Date => Region::DatePicker,
			Popover::Camera => Region::Camera,
			Popover::TagSuggestions => Region::Tags,
			Popover::LocationSuggestions => Region::Location,
		}
	}
}

/// An outside-click listener registered by an open popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutsideClick {
	pub popover: Popover,
	pub boundary: Region,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopoverGroup {
	open: Option<Popover>,
}

impl PopoverGroup {
	/// Open `popover`, returning the sibling it displaced.
	pub fn open(&mut self, popover: Popover) -> Option<Popover> {
		let previous = self.open.replace(popover);
		if previous != Some(popover) {
			debug!(?popover, displaced = ?previous, "popover open");
		}
		previous.filter(|sibling| *sibling != popover)
	}

	/// Flip `popover`. Returns the sibling displaced when it opened.
	pub fn toggle(&mut self, popover: Popover) -> Option<Popover> {
		if self.is_open(popover) {
			self.close(popover);
			None
		} else {
			self.open(popover)
		}
	}

	pub fn close(&mut self, popover: Popover) -> bool {
		if self.open == Some(popover) {
			debug!(?popover, "popover close");
			self.open = None;
			true
		} else {
			false
		}
	}

	pub fn close_all(&mut self) -> Option<Popover> {
		self.open.take()
	}

	#[must_use]
	pub fn is_open(&self, popover: Popover) -> bool {
		self.open == Some(popover)
	}

	#[must_use]
	pub fn current(&self) -> Option<Popover> {
		self.open
	}

	/// Listeners currently registered; empty when everything is closed.
	pub fn listeners(&self) -> impl Iterator<Item = OutsideClick> + '_ {
		self.open.into_iter().map(|popover| OutsideClick {
			popover,
			boundary: popover.boundary(),
		})
	}

	/// Deliver a pointer-down. `target` is the region under the pointer, or
	/// `None` when it landed on nothing at all.
	///
	/// Returns the popover closed because the press fell outside it.
	pub fn pointer_down(&mut self, target: Option<Region>) -> Option<Popover> {
		let listener = self.listeners().next()?;
		if target == Some(listener.boundary) {
			return None;
		}
		self.close(listener.popover);
		Some(listener.popover)
	}
}
