use std::error::Error;
use multitouch::{
	math::Vector2,
	resolver,
	AdapterConfig,
	CapabilityMask,
	Graph,
	InputMode,
	Node,
	PointerEmulator,
	TouchAdapter,
	Transform2D,
	Transformable
};

mod window;
use window::Window;

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	if let Err(err) = run() {
		log::error!("{}", err);
	}
}

fn run() -> Result<(), Box<dyn Error>> {
	let mut window = Window::new("Multitouch", WIDTH, HEIGHT)?;

	let mut graph = Graph::new();
	let scene = graph.add(Node::new("scene"));
	let table = graph.add_to(scene, Node::with_transform("table", Transform2D::from(Vector2::new(640.0, 360.0), 0.3, Vector2::from_scalar(1.5))))?;
	let card = graph.add_to(table, Node::with_transform("card", Transform2D::from(Vector2::new(40.0, -20.0), 0.0, Vector2::new(1.0, 1.4))))?;

	// glfw reports no touch screen, so mouse contacts drive the adapter
	let adapter = TouchAdapter::new(AdapterConfig { input: InputMode::Pointer });
	let mut emulator = PointerEmulator::new(scene, HEIGHT as f32);
	let mut target = Transformable::new(card);

	log::info!("left drag moves, right click pins a pivot, 0-3 pick capabilities, T toggles touch, P prints the cursor in card space");

	window.main_loop(|events| {
		for event in events {
			match event {
				glfw::WindowEvent::Key(key, _, glfw::Action::Press, _) => {
					let capabilities = match key {
						glfw::Key::Num0 => Some(CapabilityMask::FIXED),
						glfw::Key::Num1 => Some(CapabilityMask::MOVABLE),
						glfw::Key::Num2 => Some(CapabilityMask::SCALABLE | CapabilityMask::ROTATABLE),
						glfw::Key::Num3 => Some(CapabilityMask::TRANSFORMABLE),
						glfw::Key::T => {
							target.touchable = !target.touchable;
							log::info!("touchable: {}", target.touchable);
							None
						},
						glfw::Key::P => {
							match resolver::convert(&graph, &emulator.cursor(), scene, card) {
								Ok(point) => log::info!("cursor in card space: ({:.1}, {:.1})", point.x, point.y),
								Err(err) => log::warn!("{}", err)
							}
							None
						},
						_ => None
					};

					if let Some(capabilities) = capabilities {
						target.capabilities = capabilities;
						log::info!("capabilities: {:?}", capabilities);
					}
				},
				event => {
					emulator.handle_event(event);
				}
			}
		}

		let touches = emulator.touches();

		if touches.is_empty() {
			return;
		}

		if let Some(transform) = adapter.dispatch(&mut graph, &target, &touches) {
			log::info!("card at ({:.1}, {:.1}), rotation {:.3}, scale ({:.2}, {:.2})",
				transform.position.x,
				transform.position.y,
				transform.rotation,
				transform.scale.x,
				transform.scale.y);
		}
	});

	Ok(())
}
