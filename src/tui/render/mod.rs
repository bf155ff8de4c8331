//! Drawing the shell into a buffer.
//!
//! Every clickable piece is recorded in a [`HitMap`] while it is painted, in
//! paint order, so whatever is drawn last is what the pointer hits.

mod advanced;
mod people;
mod search_box;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear, Widget};
use unicode_width::UnicodeWidthStr;

use super::hitmap::HitMap;
use super::theme::Theme;
use crate::element::Element;
use crate::focus::{FocusField, Layer};
use crate::shell::SearchShell;

pub const CLEAR_GLYPH: &str = "✕";

/// Draw the whole shell into the frame and place the terminal cursor.
pub fn draw(frame: &mut Frame, shell: &SearchShell, theme: &Theme, hits: &mut HitMap) {
	let area = frame.area();
	if let Some(cursor) = render(area, frame.buffer_mut(), shell, theme, hits) {
		frame.set_cursor_position(cursor);
	}
}

/// Paint every open surface into `buf`, bottom first.
///
/// Returns the cursor position of the input holding live focus.
pub fn render(
	area: Rect,
	buf: &mut Buffer,
	shell: &SearchShell,
	theme: &Theme,
	hits: &mut HitMap,
) -> Option<Position> {
	hits.clear();
	let mut canvas = Canvas {
		buf,
		hits,
		theme,
		cursor: None,
	};
	search_box::render(&mut canvas, area, shell);
	if shell.advanced().is_open() {
		advanced::render(&mut canvas, area, shell);
	}
	if shell.people_view().is_open() {
		people::render(&mut canvas, area, shell);
	}
	canvas.cursor
}

/// Write position on a single row, advancing left to right.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Pen {
	x: u16,
	y: u16,
	right: u16,
}

impl Pen {
	pub(crate) fn row(area: Rect, offset: u16) -> Option<Self> {
		(offset < area.height).then(|| Self {
			x: area.x,
			y: area.y + offset,
			right: area.right(),
		})
	}

	pub(crate) fn remaining(&self) -> u16 {
		self.right.saturating_sub(self.x)
	}

	pub(crate) fn gap(&mut self, cells: u16) {
		self.x = self.x.saturating_add(cells).min(self.right);
	}

	pub(crate) fn fits(&self, text: &str) -> bool {
		text.width() <= usize::from(self.remaining())
	}

	/// The unwritten rest of the row.
	pub(crate) fn rest(&self) -> Rect {
		Rect::new(self.x, self.y, self.remaining(), 1)
	}
}

pub(crate) struct Canvas<'a> {
	pub(crate) buf: &'a mut Buffer,
	pub(crate) hits: &'a mut HitMap,
	pub(crate) theme: &'a Theme,
	pub(crate) cursor: Option<Position>,
}

impl Canvas<'_> {
	/// Write `text` at the pen and advance it. Returns the cells written.
	pub(crate) fn put(&mut self, pen: &mut Pen, text: &str, style: Style) -> Rect {
		let available = pen.remaining();
		if available == 0 || text.is_empty() {
			return Rect::new(pen.x, pen.y, 0, 0);
		}
		let (end, _) = self
			.buf
			.set_stringn(pen.x, pen.y, text, usize::from(available), style);
		let written = Rect::new(pen.x, pen.y, end.saturating_sub(pen.x), 1);
		pen.x = end.min(pen.right);
		written
	}

	/// Write `text` as a clickable target.
	pub(crate) fn target(
		&mut self,
		pen: &mut Pen,
		text: &str,
		style: Style,
		element: Element,
	) -> Rect {
		let area = self.put(pen, text, style);
		self.hits.push(area, element);
		area
	}

	/// Write `text` flush against the right end of the row and shrink the row
	/// so later writes stop a cell short of it.
	pub(crate) fn target_right(
		&mut self,
		pen: &mut Pen,
		text: &str,
		style: Style,
		element: Element,
	) -> Rect {
		let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
		if width > pen.remaining() {
			return Rect::new(pen.right, pen.y, 0, 0);
		}
		let mut tail = Pen {
			x: pen.right - width,
			y: pen.y,
			right: pen.right,
		};
		let area = self.target(&mut tail, text, style, element);
		pen.right = area.x.saturating_sub(1).max(pen.x);
		area
	}

	/// A chip with a close control. The whole chip is drawn in the chip
	/// style; only the close glyph is a target.
	pub(crate) fn chip(&mut self, pen: &mut Pen, label: &str, close: Element) {
		let style = self.theme.chip;
		self.put(pen, &format!(" {label} "), style);
		self.target(pen, CLEAR_GLYPH, style, close);
		self.put(pen, " ", style);
		pen.gap(1);
	}

	/// Clear `area`, frame it and return the inner area.
	pub(crate) fn panel(&mut self, area: Rect, title: &str, border: Style) -> Rect {
		Clear.render(area, self.buf);
		let block = Block::bordered()
			.title(title.to_string())
			.border_style(border)
			.style(self.theme.panel);
		let inner = block.inner(area);
		block.render(area, self.buf);
		inner
	}

	/// One text input: the native layer, its committed-text layer and its
	/// clear control, on the rest of the pen's row.
	pub(crate) fn input(&mut self, pen: &mut Pen, view: InputView<'_>) {
		let InputView {
			field,
			clear,
			display,
			placeholder,
			live,
		} = view;
		let presentation = field.presentation();
		let theme = *self.theme;

		self.hits.push(pen.rest(), field.id());
		if presentation.show_clear {
			self.target_right(pen, CLEAR_GLYPH, theme.muted, clear);
		}

		let width = usize::from(pen.remaining());
		match presentation.layer {
			Layer::NativeInput => {
				let chars: Vec<char> = field.text().chars().collect();
				let caret = presentation.caret.unwrap_or(chars.len()).min(chars.len());
				let start = caret.saturating_sub(width.saturating_sub(1));
				let visible: String = chars[start..].iter().collect();
				let before: String = chars[start..caret].iter().collect();
				let origin = pen.x;
				self.put(pen, &visible, theme.text);
				if live {
					let offset = u16::try_from(before.width()).unwrap_or(u16::MAX);
					self.cursor = Some(Position::new(origin.saturating_add(offset), pen.y));
				}
			}
			Layer::DisplayText => {
				self.target(pen, field.text(), theme.text, display);
			}
			Layer::Placeholder if field.text().is_empty() => {
				self.put(pen, placeholder, theme.muted);
			}
			Layer::Placeholder => {
				self.put(pen, field.text(), theme.muted);
			}
		}
	}

	/// A popup list anchored under (or, without room, over) `anchor`.
	///
	/// `body` claims the popup's blank cells so presses there stay inside it.
	pub(crate) fn menu(
		&mut self,
		anchor: Rect,
		bounds: Rect,
		items: &[MenuItem<'_>],
		body: Option<Element>,
	) -> Option<Rect> {
		if items.is_empty() {
			return None;
		}
		let width = items
			.iter()
			.map(|item| item.label.width())
			.max()
			.unwrap_or(0)
			.saturating_add(4);
		let width = u16::try_from(width).unwrap_or(u16::MAX);
		let height = u16::try_from(items.len())
			.unwrap_or(u16::MAX)
			.saturating_add(2);
		let area = popup_area(anchor, bounds, width, height)?;

		let border = self.theme.border_focus;
		let inner = self.panel(area, "", border);
		if let Some(body) = body {
			self.hits.push(area, body);
		}
		for (offset, item) in items.iter().enumerate() {
			let Ok(offset) = u16::try_from(offset) else {
				break;
			};
			let Some(mut pen) = Pen::row(inner, offset) else {
				break;
			};
			pen.gap(1);
			let style = self.theme.option(item.chosen);
			self.target(&mut pen, item.label, style, item.element);
		}
		Some(area)
	}
}

/// Place a `width` x `height` popup under `anchor`, or over it when there is
/// more room above. The popup is clipped to `bounds`.
pub(crate) fn popup_area(anchor: Rect, bounds: Rect, width: u16, height: u16) -> Option<Rect> {
	let width = width.min(bounds.right().saturating_sub(anchor.x));
	let below = bounds.bottom().saturating_sub(anchor.bottom());
	let above = anchor.y.saturating_sub(bounds.y);
	let (y, height) = if below >= height || below >= above {
		(anchor.bottom(), height.min(below))
	} else {
		let height = height.min(above);
		(anchor.y - height, height)
	};
	(height >= 3 && width >= 5).then(|| Rect::new(anchor.x, y, width, height))
}

pub(crate) struct InputView<'a> {
	pub(crate) field: &'a FocusField,
	pub(crate) clear: Element,
	pub(crate) display: Element,
	pub(crate) placeholder: &'a str,
	/// Whether this input holds live focus and gets the terminal cursor.
	pub(crate) live: bool,
}

pub(crate) struct MenuItem<'a> {
	pub(crate) label: &'a str,
	pub(crate) element: Element,
	pub(crate) chosen: bool,
}
