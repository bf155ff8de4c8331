use ratatui::layout::Rect;
use ratatui::widgets::{Block, Widget};

use super::{Canvas, InputView, Pen};
use crate::catalog::FEATURED_PEOPLE;
use crate::element::Element;
use crate::selection::{CHIP_OVERFLOW_LIMIT, ChipOverflow};
use crate::shell::SearchShell;
use crate::surfaces::PLACEHOLDER;

const HELP: &str = "Tab focus · Enter search · Esc cancel";
const BOX_HEIGHT: u16 = 3;

pub(super) fn render(canvas: &mut Canvas<'_>, area: Rect, shell: &SearchShell) {
	if area.height < BOX_HEIGHT {
		return;
	}
	let search = shell.search_box();
	let theme = *canvas.theme;

	let frame = Rect::new(area.x, area.y, area.width, BOX_HEIGHT);
	let block = Block::bordered()
		.title(" picsift ")
		.border_style(theme.input_border(search.query().state()));
	let inner = block.inner(frame);
	block.render(frame, canvas.buf);

	if let Some(mut pen) = Pen::row(inner, 0) {
		canvas.hits.push(pen.rest(), Element::SearchInput);
		let chips = ChipOverflow::split(shell.people().as_slice(), CHIP_OVERFLOW_LIMIT);
		for (index, person) in chips.visible.iter().enumerate() {
			canvas.chip(&mut pen, person, Element::PersonChipClose(index));
		}
		if let Some(label) = chips.overflow_label() {
			canvas.chip(&mut pen, &label, Element::OverflowChipClose);
		}
		canvas.input(
			&mut pen,
			InputView {
				field: search.query(),
				clear: Element::SearchClear,
				display: Element::SearchDisplayText,
				placeholder: PLACEHOLDER,
				live: shell.live_focus() == Some(Element::SearchInput),
			},
		);
	}

	let below = Rect::new(
		area.x,
		area.y + BOX_HEIGHT,
		area.width,
		area.height - BOX_HEIGHT,
	);
	if search.dropdown_visible() {
		dropdown(canvas, below, shell);
	}

	if let Some(mut pen) = Pen::row(area, area.height - 1)
		&& area.height > BOX_HEIGHT
	{
		canvas.put(&mut pen, HELP, theme.muted);
	}
}

fn dropdown(canvas: &mut Canvas<'_>, area: Rect, shell: &SearchShell) {
	let search = shell.search_box();
	let theme = *canvas.theme;
	let recent = search.recent_searches();
	let rows = u16::try_from(recent.len().max(1))
		.unwrap_or(u16::MAX)
		.saturating_add(8);
	let height = rows.min(area.height.saturating_sub(1));
	if height < 3 {
		return;
	}

	let frame = Rect::new(area.x, area.y, area.width, height);
	let inner = canvas.panel(frame, "", theme.border_focus);
	let mut row = 0;

	if let Some(mut pen) = Pen::row(inner, row) {
		pen.gap(1);
		if !recent.is_empty() {
			canvas.target_right(&mut pen, "Clear all ", theme.accent, Element::RecentClearAll);
		}
		canvas.put(&mut pen, "Recent searches", theme.muted);
	}
	row += 1;
	for (index, text) in recent.iter().enumerate() {
		if let Some(mut pen) = Pen::row(inner, row) {
			pen.gap(1);
			canvas.target_right(&mut pen, "✕ ", theme.muted, Element::RecentSearchRemove(index));
			canvas.put(&mut pen, "↺ ", theme.muted);
			canvas.target(&mut pen, text, theme.text, Element::RecentSearch(index));
		}
		row += 1;
	}
	if recent.is_empty()
		&& let Some(mut pen) = Pen::row(inner, row)
	{
		pen.gap(1);
		canvas.put(&mut pen, "No recent searches", theme.muted);
		row += 1;
	}

	row += 1;
	if let Some(mut pen) = Pen::row(inner, row) {
		pen.gap(1);
		canvas.target_right(&mut pen, "See all ", theme.accent, Element::SeeAllPeople);
		canvas.put(&mut pen, "People", theme.muted);
	}
	row += 1;
	if let Some(mut pen) = Pen::row(inner, row) {
		pen.gap(1);
		for (index, person) in FEATURED_PEOPLE.iter().enumerate() {
			if !pen.fits(person.name) {
				break;
			}
			let style = theme.option(shell.people().contains(person.name));
			canvas.target(&mut pen, person.name, style, Element::SuggestedPerson(index));
			pen.gap(2);
		}
	}

	row += 2;
	if let Some(mut pen) = Pen::row(inner, row) {
		pen.gap(1);
		let style = theme.button(search.can_search());
		canvas.target_right(&mut pen, "[ Search ] ", style, Element::DropdownSearchButton);
		canvas.target(&mut pen, "Advanced filters", theme.accent, Element::AdvancedFiltersLink);
	}
}
