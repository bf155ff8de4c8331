//! Terminal session runtime and event loop.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use serde::Serialize;
use tracing::{debug, info};

use super::hitmap::HitMap;
use super::input::{PointerTracker, is_interrupt, map_key};
use super::render::draw;
use super::theme::Theme;
use crate::criteria::FilterCriteria;
use crate::event::UiEvent;
use crate::shell::{SearchShell, ShellOutcome};

/// What the user did with the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
	/// `true` when the session ended with a search.
	pub accepted: bool,
	pub criteria: FilterCriteria,
}

impl SessionOutcome {
	fn from_shell(outcome: ShellOutcome, shell: &SearchShell) -> Self {
		match outcome {
			ShellOutcome::Searched(criteria) => Self {
				accepted: true,
				criteria,
			},
			ShellOutcome::Cancelled => Self {
				accepted: false,
				criteria: shell.criteria(),
			},
		}
	}
}

/// Take over the terminal and pump events into `shell` until the session ends.
pub fn run(mut shell: SearchShell, theme: Theme) -> Result<SessionOutcome> {
	let mut terminal = ratatui::init();
	terminal.clear()?;
	execute!(stdout(), EnableMouseCapture)?;

	let (event_tx, event_rx) = mpsc::channel();
	let event_loop_running = Arc::new(AtomicBool::new(true));
	let event_loop_flag = Arc::clone(&event_loop_running);

	let event_thread = thread::spawn(move || -> Result<()> {
		while event_loop_flag.load(Ordering::Relaxed) {
			if event::poll(Duration::from_millis(50))? {
				let event = event::read()?;
				if event_tx.send(event).is_err() {
					break;
				}
			}
		}
		Ok(())
	});

	let mut pending_events = VecDeque::new();
	let mut pointer = PointerTracker::default();
	let mut hits = HitMap::default();
	info!("session started");

	let result: Result<SessionOutcome> = 'event_loop: loop {
		loop {
			match event_rx.try_recv() {
				Ok(event) => pending_events.push_back(event),
				Err(mpsc::TryRecvError::Empty) => break,
				Err(mpsc::TryRecvError::Disconnected) => {
					break 'event_loop Err(anyhow!("input event channel disconnected"));
				}
			}
		}

		let mut maybe_outcome = None;
		while let Some(event) = pending_events.pop_front() {
			let ui_events = match event {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if is_interrupt(key) {
						maybe_outcome = Some(shell.cancel());
						break;
					}
					map_key(key).map(UiEvent::Key).into_iter().collect()
				}
				Event::Mouse(mouse) => pointer.mouse(mouse, &hits),
				_ => Vec::new(),
			};
			for ui_event in ui_events {
				if let Some(outcome) = shell.handle(ui_event, Instant::now()) {
					maybe_outcome = Some(outcome);
					break;
				}
			}
			if maybe_outcome.is_some() {
				break;
			}
		}

		if maybe_outcome.is_none()
			&& shell
				.next_deadline()
				.is_some_and(|deadline| deadline <= Instant::now())
		{
			maybe_outcome = shell.handle(UiEvent::Tick, Instant::now());
		}

		if let Some(outcome) = maybe_outcome {
			break Ok(SessionOutcome::from_shell(outcome, &shell));
		}

		terminal.draw(|frame| draw(frame, &shell, &theme, &mut hits))?;

		thread::sleep(Duration::from_millis(16));
	};

	ratatui::restore();
	execute!(stdout(), DisableMouseCapture)?;

	event_loop_running.store(false, Ordering::Relaxed);
	match event_thread.join() {
		Ok(join_result) => join_result?,
		Err(err) => std::panic::resume_unwind(err),
	}

	if let Ok(outcome) = &result {
		debug!(accepted = outcome.accepted, "session finished");
	}
	result
}
