use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::signal::{Outbox, Signal};
use crate::catalog::{Person, ROSTER};
use crate::element::Element;
use crate::selection::PeopleSelection;

/// Full-screen people picker.
#[derive(Debug, Default)]
pub struct PeopleViewModal {
	open: bool,
	/// Roster order for the current opening.
	order: Vec<Person>,
	selection: PeopleSelection,
	outbox: Outbox,
}

impl PeopleViewModal {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Closed to open. The roster is shuffled exactly once here, never per
	/// render, so one opening keeps one order.
	pub fn open<R: Rng + ?Sized>(&mut self, rng: &mut R) {
		let mut order = ROSTER.to_vec();
		order.shuffle(rng);
		self.order = order;
		self.selection.clear();
		self.open = true;
		debug!(roster = self.order.len(), "people view open");
	}

	/// Open to closed. The selection never outlives an opening.
	pub fn close(&mut self) {
		self.open = false;
		self.selection.clear();
	}

	#[must_use]
	pub fn roster(&self) -> &[Person] {
		&self.order
	}

	#[must_use]
	pub fn selection(&self) -> &PeopleSelection {
		&self.selection
	}

	/// Apply stays disabled until someone is picked.
	#[must_use]
	pub fn can_apply(&self) -> bool {
		!self.selection.is_empty()
	}

	pub(crate) fn outbox(&mut self) -> &mut Outbox {
		&mut self.outbox
	}

	pub(crate) fn click(&mut self, element: Element) {
		match element {
			Element::PeopleOverlay | Element::PeopleBack => self.outbox.emit(Signal::Close),
			Element::RosterPerson(index) => {
				if let Some(person) = self.order.get(index) {
					self.selection.toggle(person.name);
				}
			}
			Element::PeopleApply => self.apply(),
			_ => {}
		}
	}

	pub(crate) fn apply(&mut self) {
		if !self.can_apply() {
			return;
		}
		self.outbox
			.emit(Signal::SelectPeople(self.selection.to_vec()));
		self.outbox.emit(Signal::Close);
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn names(view: &PeopleViewModal) -> Vec<&'static str> {
		view.roster().iter().map(|person| person.name).collect()
	}

	#[test]
	fn seeded_shuffle_is_reproducible() {
		let mut first = PeopleViewModal::new();
		let mut second = PeopleViewModal::new();
		first.open(&mut StdRng::seed_from_u64(7));
		second.open(&mut StdRng::seed_from_u64(7));
		assert_eq!(names(&first), names(&second));
		assert_eq!(first.roster().len(), ROSTER.len());
	}

	#[test]
	fn shuffle_is_a_permutation_of_the_roster() {
		let mut view = PeopleViewModal::new();
		view.open(&mut StdRng::seed_from_u64(42));
		let mut shuffled = names(&view);
		let mut original: Vec<_> = ROSTER.iter().map(|person| person.name).collect();
		shuffled.sort_unstable();
		original.sort_unstable();
		assert_eq!(shuffled, original);
	}

	#[test]
	fn order_is_stable_within_one_opening() {
		let mut view = PeopleViewModal::new();
		view.open(&mut StdRng::seed_from_u64(3));
		let before = names(&view);
		view.click(Element::RosterPerson(5));
		view.click(Element::RosterPerson(9));
		assert_eq!(names(&view), before);
	}

	#[test]
	fn apply_is_disabled_without_selection() {
		let mut view = PeopleViewModal::new();
		view.open(&mut StdRng::seed_from_u64(1));
		view.click(Element::PeopleApply);
		assert!(view.outbox().drain_signals().is_empty());

		view.click(Element::RosterPerson(0));
		let picked = view.roster()[0].name.to_string();
		view.click(Element::PeopleApply);
		assert_eq!(
			view.outbox().drain_signals(),
			[Signal::SelectPeople(vec![picked]), Signal::Close]
		);
	}

	#[test]
	fn closing_forgets_the_selection() {
		let mut view = PeopleViewModal::new();
		view.open(&mut StdRng::seed_from_u64(1));
		view.click(Element::RosterPerson(0));
		view.close();
		assert!(view.selection().is_empty());
		assert!(!view.is_open());
	}
}
