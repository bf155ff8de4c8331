use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use super::{Canvas, InputView, MenuItem, Pen, popup_area};
use crate::catalog::{CAMERAS, FEATURED_PEOPLE};
use crate::criteria::{DatePreset, FileType, MediaType, SearchScope};
use crate::element::Element;
use crate::popover::Popover;
use crate::selection::{chip_label, chip_width, fits_single_row};
use crate::shell::SearchShell;
use crate::surfaces::AdvancedSearchModal;

const LABEL_WIDTH: u16 = 10;
const PANEL_WIDTH: u16 = 80;
const PANEL_HEIGHT: u16 = 22;
const QUERY_PLACEHOLDER: &str = "Search by content, people or places";
const LOCATION_PLACEHOLDER: &str = "Add a location";
const TAGS_PLACEHOLDER: &str = "Add a tag";
/// Narrowest tags input that still shares a row with the chips.
const TAGS_INPUT_MIN: u16 = 16;

/// Sequential rows of the panel body.
struct Rows {
	area: Rect,
	next: u16,
}

impl Rows {
	fn line(&mut self) -> Option<Pen> {
		let pen = Pen::row(self.area, self.next);
		self.next = self.next.saturating_add(1);
		pen
	}

	fn skip(&mut self) {
		self.next = self.next.saturating_add(1);
	}
}

/// Where the popovers hang from.
#[derive(Default)]
struct Anchors {
	date: Option<Rect>,
	location: Option<Rect>,
	camera: Option<Rect>,
	tags: Option<Rect>,
}

pub(super) fn render(canvas: &mut Canvas<'_>, area: Rect, shell: &SearchShell) {
	let modal = shell.advanced();
	let theme = *canvas.theme;

	canvas.buf.set_style(area, theme.overlay);
	canvas.hits.push(area, Element::ModalOverlay);

	let panel = centered(area, PANEL_WIDTH, PANEL_HEIGHT);
	let inner = canvas.panel(panel, " Advanced search ", theme.border);
	canvas.hits.push(panel, Element::ModalBody);
	if panel.width > 6 {
		let mut close = Pen {
			x: panel.right() - 5,
			y: panel.y,
			right: panel.right() - 1,
		};
		canvas.target(&mut close, " ✕ ", theme.muted, Element::ModalClose);
	}

	let body = Rect::new(
		inner.x.saturating_add(1),
		inner.y,
		inner.width.saturating_sub(2),
		inner.height,
	);
	let mut rows = Rows { area: body, next: 0 };
	let anchors = body_rows(canvas, &mut rows, shell);

	rows.skip();
	if let Some(mut pen) = rows.line() {
		let style = theme.button(modal.can_search());
		canvas.target_right(&mut pen, "[ Search ]", style, Element::ModalSearchButton);
		canvas.target(&mut pen, "Clear all", theme.accent, Element::ClearAll);
	}

	popovers(canvas, area, modal, &anchors);
}

fn body_rows(canvas: &mut Canvas<'_>, rows: &mut Rows, shell: &SearchShell) -> Anchors {
	let modal = shell.advanced();
	let facets = modal.facets();
	let theme = *canvas.theme;
	let live = shell.live_focus();
	let mut anchors = Anchors::default();

	if let Some(mut pen) = rows.line() {
		label(canvas, &mut pen, "Search");
		canvas.input(
			&mut pen,
			InputView {
				field: modal.query(),
				clear: Element::ModalSearchClear,
				display: Element::ModalSearchDisplayText,
				placeholder: QUERY_PLACEHOLDER,
				live: live == Some(Element::ModalSearchInput),
			},
		);
	}
	rows.skip();

	if let Some(mut pen) = rows.line() {
		label(canvas, &mut pen, "Type");
		for media in MediaType::ALL {
			let style = theme.option(facets.media_type == media);
			canvas.target(&mut pen, media.label(), style, Element::MediaType(media));
			pen.gap(2);
		}
	}

	if let Some(mut pen) = rows.line() {
		label(canvas, &mut pen, "People");
		let people = modal.people().as_slice();
		if people.is_empty() {
			canvas.put(&mut pen, "Anyone", theme.muted);
		}
		for (index, person) in people.iter().enumerate() {
			if !flow_cells(rows, &mut pen, chip_width(person)) {
				break;
			}
			canvas.chip(&mut pen, person, Element::ModalPersonChipClose(index));
		}
	}
	if let Some(mut pen) = rows.line() {
		pen.gap(LABEL_WIDTH);
		for (index, person) in FEATURED_PEOPLE.iter().enumerate() {
			if !pen.fits(person.name) {
				break;
			}
			let style = theme.option(modal.people().contains(person.name));
			canvas.target(&mut pen, person.name, style, Element::ModalPerson(index));
			pen.gap(2);
		}
		if pen.fits("See all") {
			canvas.target(&mut pen, "See all", theme.accent, Element::ModalSeeAllPeople);
		}
	}

	if let Some(mut pen) = rows.line() {
		label(canvas, &mut pen, "Date");
		let text = format!("[ {} ▾ ]", facets.date.label());
		anchors.date = Some(canvas.target(&mut pen, &text, theme.text, Element::DateInput));
	}

	if let Some(mut pen) = rows.line() {
		label(canvas, &mut pen, "Location");
		anchors.location = Some(pen.rest());
		canvas.input(
			&mut pen,
			InputView {
				field: modal.location_input(),
				clear: Element::LocationClear,
				display: Element::LocationDisplayText,
				placeholder: LOCATION_PLACEHOLDER,
				live: live == Some(Element::LocationInput),
			},
		);
	}

	if let Some(mut pen) = rows.line() {
		label(canvas, &mut pen, "Camera");
		let text = format!("[ {} ▾ ]", facets.camera);
		anchors.camera = Some(canvas.target(&mut pen, &text, theme.text, Element::CameraInput));
	}

	if let Some(mut pen) = rows.line() {
		label(canvas, &mut pen, "Files");
		let style = theme.option(facets.file_type == FileType::All);
		canvas.target(&mut pen, "All", style, Element::FileTypeAll);
		pen.gap(1);
		for (index, ext) in modal.offered_file_types().iter().enumerate() {
			if !flow(rows, &mut pen, ext) {
				break;
			}
			let style = theme.option(facets.file_type.label() == *ext);
			canvas.target(&mut pen, ext, style, Element::FileType(index));
			pen.gap(1);
		}
		let more = if modal.file_types_expanded() { "less" } else { "more" };
		if flow(rows, &mut pen, more) {
			canvas.target(&mut pen, more, theme.accent, Element::FileTypesMore);
		}
	}

	if let Some(mut pen) = rows.line() {
		label(canvas, &mut pen, "Scope");
		for scope in SearchScope::ALL {
			if !flow(rows, &mut pen, scope.label()) {
				break;
			}
			let style = theme.option(facets.scope == scope);
			canvas.target(&mut pen, scope.label(), style, Element::Scope(scope));
			pen.gap(2);
		}
	}

	if let Some(mut pen) = rows.line() {
		label(canvas, &mut pen, "Tags");
		let labels: Vec<String> = modal.tags().iter().map(chip_label).collect();
		let room = pen.remaining().saturating_sub(TAGS_INPUT_MIN);
		let single_row = fits_single_row(labels.iter().map(String::as_str), room);
		for (index, text) in labels.iter().enumerate() {
			if !flow_cells(rows, &mut pen, chip_width(text)) {
				break;
			}
			canvas.chip(&mut pen, text, Element::TagChipClose(index));
		}
		if !single_row && let Some(mut next) = rows.line() {
			next.gap(LABEL_WIDTH);
			pen = next;
		}
		anchors.tags = Some(pen.rest());
		canvas.input(
			&mut pen,
			InputView {
				field: modal.tags_input(),
				clear: Element::TagsClear,
				display: Element::TagsInput,
				placeholder: TAGS_PLACEHOLDER,
				live: live == Some(Element::TagsInput),
			},
		);
	}

	anchors
}

fn popovers(canvas: &mut Canvas<'_>, bounds: Rect, modal: &AdvancedSearchModal, anchors: &Anchors) {
	let facets = modal.facets();
	match modal.popovers().current() {
		Some(Popover::Date) => {
			if let Some(anchor) = anchors.date {
				date_picker(canvas, anchor, bounds, modal);
			}
		}
		Some(Popover::Camera) => {
			let items: Vec<MenuItem<'_>> = CAMERAS
				.iter()
				.enumerate()
				.map(|(index, camera)| MenuItem {
					label: camera,
					element: Element::CameraOption(index),
					chosen: facets.camera == *camera,
				})
				.collect();
			if let Some(anchor) = anchors.camera {
				canvas.menu(anchor, bounds, &items, Some(Element::CameraMenu));
			}
		}
		Some(Popover::LocationSuggestions) => {
			let suggestions = modal.location_suggestions();
			let items: Vec<MenuItem<'_>> = suggestions
				.iter()
				.enumerate()
				.map(|(index, location)| MenuItem {
					label: location,
					element: Element::LocationSuggestion(index),
					chosen: false,
				})
				.collect();
			if let Some(anchor) = anchors.location {
				canvas.menu(anchor, bounds, &items, None);
			}
		}
		Some(Popover::TagSuggestions) => {
			let suggestions = modal.tag_suggestions();
			let items: Vec<MenuItem<'_>> = suggestions
				.iter()
				.enumerate()
				.map(|(index, tag)| MenuItem {
					label: tag,
					element: Element::TagSuggestion(index),
					chosen: false,
				})
				.collect();
			if let Some(anchor) = anchors.tags {
				canvas.menu(anchor, bounds, &items, None);
			}
		}
		None => {}
	}
}

fn date_picker(canvas: &mut Canvas<'_>, anchor: Rect, bounds: Rect, modal: &AdvancedSearchModal) {
	let theme = *canvas.theme;
	let facets = modal.facets();
	let height = u16::try_from(DatePreset::ALL.len()).unwrap_or(u16::MAX) + 4;
	let Some(area) = popup_area(anchor, bounds, 28, height) else {
		return;
	};
	let inner = canvas.panel(area, "", theme.border_focus);
	canvas.hits.push(area, Element::DatePanel);

	let mut rows = Rows {
		area: Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height),
		next: 0,
	};
	if let Some(mut pen) = rows.line() {
		canvas.target(&mut pen, "‹", theme.accent, Element::DatePrevMonth);
		canvas.put(&mut pen, &format!(" {} ", facets.calendar), theme.text);
		canvas.target(&mut pen, "›", theme.accent, Element::DateNextMonth);
	}
	for preset in DatePreset::ALL {
		let Some(mut pen) = rows.line() else {
			break;
		};
		let chosen = facets.date == preset;
		let marker = if chosen { "● " } else { "  " };
		let text = format!("{marker}{}", preset.label());
		canvas.target(&mut pen, &text, theme.option(chosen), Element::DatePreset(preset));
	}
	if let Some(mut pen) = rows.line() {
		canvas.target(&mut pen, "Apply", theme.accent, Element::DateApply);
		pen.gap(2);
		canvas.target(&mut pen, "Cancel", theme.muted, Element::DateCancel);
	}
}

fn label(canvas: &mut Canvas<'_>, pen: &mut Pen, text: &str) {
	let muted = canvas.theme.muted;
	let start = pen.x;
	canvas.put(pen, text, muted);
	pen.x = start;
	pen.gap(LABEL_WIDTH);
}

/// Move the pen to the next row when `text` does not fit on this one.
/// Returns `false` once the body has no rows left.
fn flow(rows: &mut Rows, pen: &mut Pen, text: &str) -> bool {
	flow_cells(rows, pen, u16::try_from(text.width()).unwrap_or(u16::MAX))
}

/// [`flow`] for something `cells` wide, such as a chip.
fn flow_cells(rows: &mut Rows, pen: &mut Pen, cells: u16) -> bool {
	if cells <= pen.remaining() {
		return true;
	}
	match rows.line() {
		Some(mut next) => {
			next.gap(LABEL_WIDTH);
			*pen = next;
			cells <= pen.remaining()
		}
		None => false,
	}
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(area.width.saturating_sub(2));
	let height = height.min(area.height.saturating_sub(2));
	Rect::new(
		area.x + (area.width - width) / 2,
		area.y + (area.height - height) / 2,
		width,
		height,
	)
}
