//! Pointer hit testing against the areas recorded during the last draw.

use ratatui::layout::Rect;

use crate::element::Element;

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}

/// Element areas in paint order. Later entries sit on top.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
	targets: Vec<(Rect, Element)>,
}

impl HitMap {
	pub fn clear(&mut self) {
		self.targets.clear();
	}

	pub fn push(&mut self, area: Rect, element: Element) {
		if area.width > 0 && area.height > 0 {
			self.targets.push((area, element));
		}
	}

	/// The top-most element under the pointer.
	#[must_use]
	pub fn hit(&self, column: u16, row: u16) -> Option<Element> {
		self.targets
			.iter()
			.rev()
			.find(|(area, _)| point_in_rect(column, row, *area))
			.map(|(_, element)| *element)
	}

	/// Where `element` was drawn, if it was.
	#[must_use]
	pub fn area_of(&self, element: Element) -> Option<Rect> {
		self.targets
			.iter()
			.rev()
			.find(|(_, candidate)| *candidate == element)
			.map(|(area, _)| *area)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_sized_areas_never_hit() {
		assert!(!point_in_rect(0, 0, Rect::new(0, 0, 0, 4)));
		assert!(point_in_rect(3, 1, Rect::new(2, 1, 2, 1)));
		assert!(!point_in_rect(4, 1, Rect::new(2, 1, 2, 1)));
	}

	#[test]
	fn later_areas_win() {
		let mut hits = HitMap::default();
		hits.push(Rect::new(0, 0, 20, 10), Element::ModalOverlay);
		hits.push(Rect::new(5, 2, 10, 4), Element::ModalBody);
		hits.push(Rect::new(6, 3, 3, 1), Element::ModalClose);

		assert_eq!(hits.hit(7, 3), Some(Element::ModalClose));
		assert_eq!(hits.hit(12, 4), Some(Element::ModalBody));
		assert_eq!(hits.hit(1, 1), Some(Element::ModalOverlay));
		assert_eq!(hits.hit(30, 1), None);
	}

	#[test]
	fn empty_areas_are_not_recorded() {
		let mut hits = HitMap::default();
		hits.push(Rect::new(0, 0, 0, 0), Element::SearchInput);
		assert_eq!(hits.hit(0, 0), None);
		assert_eq!(hits.area_of(Element::SearchInput), None);
	}
}
