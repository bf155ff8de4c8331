use ratatui::layout::Rect;

use super::{Canvas, Pen};
use crate::element::Element;
use crate::shell::SearchShell;

const CELL_WIDTH: u16 = 26;

pub(super) fn render(canvas: &mut Canvas<'_>, area: Rect, shell: &SearchShell) {
	let view = shell.people_view();
	let theme = *canvas.theme;

	canvas.buf.set_style(area, theme.overlay);
	canvas.hits.push(area, Element::PeopleOverlay);

	let panel = Rect::new(
		area.x.saturating_add(2),
		area.y.saturating_add(1),
		area.width.saturating_sub(4),
		area.height.saturating_sub(2),
	);
	let inner = canvas.panel(panel, " People ", theme.border);
	canvas.hits.push(panel, Element::PeopleBody);

	if let Some(mut pen) = Pen::row(inner, 0) {
		pen.gap(1);
		let apply = format!("[ Apply ({}) ] ", view.selection().len());
		canvas.target_right(&mut pen, &apply, theme.button(view.can_apply()), Element::PeopleApply);
		canvas.target(&mut pen, "‹ Back", theme.accent, Element::PeopleBack);
	}

	let grid = Rect::new(
		inner.x.saturating_add(1),
		inner.y.saturating_add(2),
		inner.width.saturating_sub(2),
		inner.height.saturating_sub(2),
	);
	let columns = usize::from((grid.width / CELL_WIDTH).max(1));
	for (index, person) in view.roster().iter().enumerate() {
		let (Ok(row), Ok(column)) = (u16::try_from(index / columns), u16::try_from(index % columns))
		else {
			break;
		};
		let Some(mut pen) = Pen::row(grid, row) else {
			break;
		};
		pen.gap(column.saturating_mul(CELL_WIDTH));
		pen.right = pen.right.min(pen.x.saturating_add(CELL_WIDTH - 1));
		let chosen = view.selection().contains(person.name);
		let mark = if chosen { "[x] " } else { "[ ] " };
		let text = format!("{mark}{}", person.name);
		canvas.target(&mut pen, &text, theme.option(chosen), Element::RosterPerson(index));
	}
}
