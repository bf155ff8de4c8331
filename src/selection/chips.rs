use unicode_width::UnicodeWidthStr;

/// Chips shown inline before the rest collapse into a `+N` chip.
pub const CHIP_OVERFLOW_LIMIT: usize = 2;

/// Cells a chip occupies around its label: one space of padding on each side
/// plus the close glyph and its separator.
const CHIP_CHROME: u16 = 4;
/// Cells between neighbouring chips.
const CHIP_GAP: u16 = 1;

/// Split of a selection into visible chips and the collapsed remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipOverflow<'a> {
	pub visible: &'a [String],
	pub hidden: usize,
}

impl<'a> ChipOverflow<'a> {
	#[must_use]
	pub fn split(items: &'a [String], limit: usize) -> Self {
		let shown = items.len().min(limit);
		Self {
			visible: &items[..shown],
			hidden: items.len() - shown,
		}
	}

	/// Text of the overflow chip, if one is needed.
	#[must_use]
	pub fn overflow_label(&self) -> Option<String> {
		(self.hidden > 0).then(|| format!("+{}", self.hidden))
	}
}

/// Display width of a chip holding `label`.
#[must_use]
pub fn chip_width(label: &str) -> u16 {
	let text = u16::try_from(label.width()).unwrap_or(u16::MAX);
	text.saturating_add(CHIP_CHROME)
}

/// Whether the chips wrap onto a single line of `available` cells.
///
/// An empty row counts as a single row.
#[must_use]
pub fn fits_single_row<'a, I>(labels: I, available: u16) -> bool
where
	I: IntoIterator<Item = &'a str>,
{
	let mut used: u16 = 0;
	for (index, label) in labels.into_iter().enumerate() {
		let gap = if index == 0 { 0 } else { CHIP_GAP };
		used = used.saturating_add(gap).saturating_add(chip_width(label));
		if used > available {
			return false;
		}
	}
	true
}

#[cfg(test)]
mod tests {
	use super::*;

	fn names(count: usize) -> Vec<String> {
		(0..count).map(|i| format!("person {i}")).collect()
	}

	#[test]
	fn small_selections_have_no_overflow_chip() {
		let people = names(2);
		let split = ChipOverflow::split(&people, CHIP_OVERFLOW_LIMIT);
		assert_eq!(split.visible.len(), 2);
		assert_eq!(split.overflow_label(), None);
	}

	#[test]
	fn large_selections_render_two_chips_and_overflow() {
		for count in 3..8 {
			let people = names(count);
			let split = ChipOverflow::split(&people, CHIP_OVERFLOW_LIMIT);
			assert_eq!(split.visible, &people[..2]);
			assert_eq!(split.hidden, count - 2);
			assert_eq!(split.overflow_label(), Some(format!("+{}", count - 2)));
		}
	}

	#[test]
	fn single_row_measurement_accounts_for_chrome_and_gaps() {
		// "beach" -> 9 cells, "holiday" -> 11 cells, one gap.
		assert!(fits_single_row(["beach", "holiday"], 21));
		assert!(!fits_single_row(["beach", "holiday"], 20));
		assert!(fits_single_row(std::iter::empty(), 0));
	}

	#[test]
	fn wide_glyphs_count_double() {
		assert_eq!(chip_width("海滩"), 8);
	}
}
