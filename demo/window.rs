use std::sync::mpsc::Receiver;

pub struct Window {
	pub glfw: glfw::Glfw,
	pub glfw_window: glfw::Window,
	pub events: Receiver<(f64, glfw::WindowEvent)>
}

impl Window {
	pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
		let mut glfw = glfw::init(glfw::FAIL_ON_ERRORS).map_err(|err| format!("failed to initialise glfw: {:?}", err))?;
		glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));

		let (mut glfw_window, events) = glfw.create_window(width, height, title, glfw::WindowMode::Windowed)
			.ok_or_else(|| "failed to create window".to_owned())?;

		glfw_window.set_size_polling(true);
		glfw_window.set_key_polling(true);
		glfw_window.set_cursor_pos_polling(true);
		glfw_window.set_mouse_button_polling(true);

		Ok(Self {
			glfw,
			glfw_window,
			events
		})
	}

	/// Blocks for input and hands each batch of events to `frame` until the window closes.
	pub fn main_loop<F>(&mut self, mut frame: F) where
		F: FnMut(&[glfw::WindowEvent])
	{
		while !self.glfw_window.should_close() {
			self.glfw.wait_events();

			let mut events = vec![];

			for (_, event) in glfw::flush_messages(&self.events) {
				match event {
					glfw::WindowEvent::Key(glfw::Key::Escape, _, glfw::Action::Press, _) => {
						self.glfw_window.set_should_close(true);
					},
					event => events.push(event)
				}
			}

			frame(&events);
		}
	}
}
