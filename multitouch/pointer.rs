//! Two-contact emulation for desktops without a touch screen.
//!
//! Dragging with the left button is one contact. Pressing the right button pins a second,
//! stationary contact where the cursor is, so dragging the left button around it pinches
//! and rotates.

use crate::{
	graph::NodeHandle,
	math::Vector2,
	touch::{Contact, ContactSource, Phase, TouchSet}
};

#[derive(Copy, Clone, Debug)]
struct Slot {
	id: u64,
	location: Vector2,
	previous_location: Vector2,
	phase: Phase
}

pub struct PointerEmulator {
	frame: NodeHandle,
	window_height: f32,
	cursor: Vector2,
	drag: Option<Slot>,
	pivot: Option<Slot>,
	ended: Vec<Slot>,
	next_id: u64
}

impl PointerEmulator {
	/// Contacts are reported in `frame`, whose origin is the bottom left corner of the
	/// window and whose y axis points up.
	pub fn new(frame: NodeHandle, window_height: f32) -> Self {
		Self {
			frame,
			window_height,
			cursor: Vector2::new(0.0, 0.0),
			drag: None,
			pivot: None,
			ended: vec![],
			next_id: 0
		}
	}

	/// `window_height` is in screen coordinates, like cursor positions, not framebuffer pixels.
	pub fn set_window_height(&mut self, window_height: f32) {
		self.window_height = window_height;
	}

	pub fn cursor(&self) -> Vector2 {
		self.cursor
	}

	/// Feeds one window event. Returns true when the event changed a contact.
	pub fn handle_event(&mut self, event: &glfw::WindowEvent) -> bool {
		match *event {
			glfw::WindowEvent::CursorPos(x, y) => {
				self.cursor = Vector2::new(x as f32, self.window_height - y as f32);

				match &mut self.drag {
					Some(slot) if slot.phase.is_active() => {
						slot.location = self.cursor;
						true
					},
					_ => false
				}
			},
			glfw::WindowEvent::Size(_, height) => {
				self.window_height = height as f32;
				false
			},
			glfw::WindowEvent::MouseButton(glfw::MouseButton::Button1, action, _) => {
				press_or_release(&mut self.drag, action, self.cursor, &mut self.next_id, &mut self.ended)
			},
			glfw::WindowEvent::MouseButton(glfw::MouseButton::Button2, action, _) => {
				press_or_release(&mut self.pivot, action, self.cursor, &mut self.next_id, &mut self.ended)
			},
			_ => false
		}
	}

	/// The contacts since the last call, pivot first so the gesture is anchored on it.
	/// Ended contacts are reported once and then forgotten.
	pub fn touches(&mut self) -> TouchSet {
		let mut touches = TouchSet::new();
		report(&mut self.pivot, self.frame, &mut touches);
		report(&mut self.drag, self.frame, &mut touches);

		for slot in self.ended.drain(..) {
			report(&mut Some(slot), self.frame, &mut touches);
		}

		touches
	}
}

fn report(slot: &mut Option<Slot>, frame: NodeHandle, touches: &mut TouchSet) {
	let current = match slot {
		Some(current) => current,
		None => return
	};

	let phase = match current.phase {
		Phase::Began | Phase::Ended | Phase::Cancelled => current.phase,
		_ if current.location == current.previous_location => Phase::Stationary,
		_ => Phase::Moved
	};

	touches.push(Contact {
		id: current.id,
		source: ContactSource::Pointer,
		phase,
		frame,
		location: current.location,
		previous_location: current.previous_location
	});

	current.previous_location = current.location;
	current.phase = Phase::Stationary;

	if !phase.is_active() {
		*slot = None;
	}
}

/// A press replaces the slot. Whatever was in it is queued in `ended` so it is still reported once.
fn press_or_release(slot: &mut Option<Slot>, action: glfw::Action, cursor: Vector2, next_id: &mut u64, ended: &mut Vec<Slot>) -> bool {
	match action {
		glfw::Action::Press => {
			if let Some(mut previous) = slot.take() {
				if previous.phase.is_active() {
					previous.phase = Phase::Cancelled;
				}

				ended.push(previous);
			}

			*next_id += 1;
			*slot = Some(Slot {
				id: *next_id,
				location: cursor,
				previous_location: cursor,
				phase: Phase::Began
			});
			true
		},
		glfw::Action::Release => match slot {
			Some(current) => {
				current.phase = Phase::Ended;
				true
			},
			None => false
		},
		glfw::Action::Repeat => false
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{Graph, Node};
	use glfw::{Action, Modifiers, MouseButton, WindowEvent};

	fn emulator() -> PointerEmulator {
		let frame = Graph::new().add(Node::new("window"));
		PointerEmulator::new(frame, 100.0)
	}

	fn button(button: MouseButton, action: Action) -> WindowEvent {
		WindowEvent::MouseButton(button, action, Modifiers::empty())
	}

	#[test]
	fn cursor_y_is_flipped() {
		let mut emulator = emulator();
		assert!(!emulator.handle_event(&WindowEvent::CursorPos(10.0, 30.0)));
		assert_eq!(emulator.cursor(), Vector2::new(10.0, 70.0));
	}

	#[test]
	fn drag_lifecycle() {
		let mut emulator = emulator();
		emulator.handle_event(&WindowEvent::CursorPos(10.0, 90.0));
		assert!(emulator.handle_event(&button(MouseButton::Button1, Action::Press)));

		let touches = emulator.touches();
		let contact = touches.iter().next().unwrap();
		assert_eq!(touches.len(), 1);
		assert_eq!(contact.phase, Phase::Began);
		assert_eq!(contact.source, ContactSource::Pointer);

		assert!(emulator.handle_event(&WindowEvent::CursorPos(15.0, 80.0)));
		let touches = emulator.touches();
		let contact = touches.iter().next().unwrap();
		assert_eq!(contact.phase, Phase::Moved);
		assert_eq!(contact.previous_location, Vector2::new(10.0, 10.0));
		assert_eq!(contact.location, Vector2::new(15.0, 20.0));

		let touches = emulator.touches();
		assert_eq!(touches.iter().next().unwrap().phase, Phase::Stationary);

		emulator.handle_event(&button(MouseButton::Button1, Action::Release));
		let touches = emulator.touches();
		assert_eq!(touches.iter().next().unwrap().phase, Phase::Ended);
		assert!(emulator.touches().is_empty());
	}

	#[test]
	fn pivot_comes_first() {
		let mut emulator = emulator();
		emulator.handle_event(&WindowEvent::CursorPos(50.0, 50.0));
		emulator.handle_event(&button(MouseButton::Button2, Action::Press));
		emulator.handle_event(&WindowEvent::CursorPos(60.0, 50.0));
		emulator.handle_event(&button(MouseButton::Button1, Action::Press));
		emulator.touches();

		emulator.handle_event(&WindowEvent::CursorPos(50.0, 40.0));
		let touches = emulator.touches();
		let contacts: Vec<_> = touches.iter().collect();

		assert_eq!(contacts.len(), 2);
		assert_eq!(contacts[0].phase, Phase::Stationary);
		assert_eq!(contacts[0].location, Vector2::new(50.0, 50.0));
		assert_eq!(contacts[1].phase, Phase::Moved);
		assert_eq!(contacts[1].location, Vector2::new(50.0, 60.0));
		assert_ne!(contacts[0].id, contacts[1].id);
	}

	#[test]
	fn framebuffer_size_does_not_move_cursor() {
		let mut emulator = emulator();
		emulator.handle_event(&WindowEvent::FramebufferSize(400, 200));
		emulator.handle_event(&WindowEvent::CursorPos(10.0, 30.0));
		assert_eq!(emulator.cursor(), Vector2::new(10.0, 70.0));

		emulator.handle_event(&WindowEvent::Size(200, 120));
		emulator.handle_event(&WindowEvent::CursorPos(10.0, 30.0));
		assert_eq!(emulator.cursor(), Vector2::new(10.0, 90.0));
	}

	#[test]
	fn ended_contact_survives_quick_press() {
		let mut emulator = emulator();
		emulator.handle_event(&button(MouseButton::Button1, Action::Press));
		let first = emulator.touches().iter().next().unwrap().id;

		emulator.handle_event(&button(MouseButton::Button1, Action::Release));
		emulator.handle_event(&button(MouseButton::Button1, Action::Press));

		let touches = emulator.touches();
		let contacts: Vec<_> = touches.iter().collect();
		assert_eq!(contacts.len(), 2);
		assert_eq!(contacts[0].phase, Phase::Began);
		assert_ne!(contacts[0].id, first);
		assert_eq!(contacts[1].phase, Phase::Ended);
		assert_eq!(contacts[1].id, first);

		let touches = emulator.touches();
		assert_eq!(touches.len(), 1);
		assert_eq!(touches.iter().next().unwrap().phase, Phase::Stationary);
	}

	#[test]
	fn release_without_press() {
		let mut emulator = emulator();
		assert!(!emulator.handle_event(&button(MouseButton::Button2, Action::Release)));
		assert!(emulator.touches().is_empty());
	}
}
