use std::iter::FromIterator;
use crate::{
	estimator::{self, TransformResult},
	graph::{Graph, NodeHandle},
	math::Vector2,
	resolver,
	EstimateError,
	Transform2D,
	Transformable,
	TransformError
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
	Began,
	Moved,
	Stationary,
	Ended,
	Cancelled
}

impl Phase {
	pub fn is_active(&self) -> bool {
		matches!(self, Phase::Began | Phase::Moved | Phase::Stationary)
	}
}

/// Where a contact came from. Pointer contacts are synthesised from a mouse.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContactSource {
	Touch,
	Pointer
}

/// A single touch location, together with where it was on the previous update.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
	pub id: u64,
	pub source: ContactSource,
	pub phase: Phase,
	/// Frame both locations are expressed in.
	pub frame: NodeHandle,
	pub location: Vector2,
	pub previous_location: Vector2
}

impl Contact {
	pub fn new(id: u64, source: ContactSource, frame: NodeHandle, previous_location: Vector2, location: Vector2) -> Self {
		let phase = if previous_location == location { Phase::Stationary } else { Phase::Moved };

		Self {
			id,
			source,
			phase,
			frame,
			location,
			previous_location
		}
	}

	pub fn with_phase(self, phase: Phase) -> Self {
		Self { phase, ..self }
	}
}

/// Contacts in the order the host delivered them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchSet {
	contacts: Vec<Contact>
}

impl TouchSet {
	pub fn new() -> Self {
		Self {
			contacts: vec![]
		}
	}

	pub fn push(&mut self, contact: Contact) {
		self.contacts.push(contact);
	}

	pub fn len(&self) -> usize {
		self.contacts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contacts.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<Contact> {
		self.contacts.iter()
	}

	pub fn active(&self) -> impl Iterator<Item = &Contact> {
		self.contacts.iter().filter(|contact| contact.phase.is_active())
	}
}

impl FromIterator<Contact> for TouchSet {
	fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
		Self {
			contacts: iter.into_iter().collect()
		}
	}
}

impl<'a> IntoIterator for &'a TouchSet {
	type Item = &'a Contact;
	type IntoIter = std::slice::Iter<'a, Contact>;

	fn into_iter(self) -> Self::IntoIter {
		self.contacts.iter()
	}
}

/// Which kind of contacts the adapter reacts to. Picked once when the host is set up,
/// depending on what input the host has.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputMode {
	Touch,
	Pointer,
	Disabled
}

impl InputMode {
	pub fn accepts(&self, source: ContactSource) -> bool {
		match self {
			InputMode::Touch => source == ContactSource::Touch,
			InputMode::Pointer => source == ContactSource::Pointer,
			InputMode::Disabled => false
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdapterConfig {
	pub input: InputMode
}

impl Default for AdapterConfig {
	fn default() -> Self {
		Self {
			input: InputMode::Touch
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
	InputDisabled,
	NotTouchable,
	/// The capability mask lets nothing through.
	Inert
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Update {
	Applied {
		result: TransformResult,
		transform: Transform2D
	},
	Skipped(SkipReason)
}

/// Turns touch updates into node transforms.
pub struct TouchAdapter {
	config: AdapterConfig
}

impl TouchAdapter {
	pub const MAX_CONTACTS: usize = 2;

	pub fn new(config: AdapterConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &AdapterConfig {
		&self.config
	}

	/// Applies one touch update to `target`. The node is only written once every contact has
	/// been resolved and the estimate succeeded; on error it is left as it was.
	pub fn handle(&self, graph: &mut Graph, target: &Transformable, touches: &TouchSet) -> Result<Update, TransformError> {
		if self.config.input == InputMode::Disabled {
			return Ok(Update::Skipped(SkipReason::InputDisabled));
		}

		if !target.is_touchable() {
			return Ok(Update::Skipped(SkipReason::NotTouchable));
		}

		if target.capabilities.is_inert() {
			return Ok(Update::Skipped(SkipReason::Inert));
		}

		let input = self.config.input;
		let contacts: Vec<&Contact> = touches.active()
			.filter(|contact| input.accepts(contact.source))
			.take(Self::MAX_CONTACTS)
			.collect();

		let (result, anchor) = match contacts.as_slice() {
			[] => return Err(EstimateError::InsufficientPoints {
				required: 1,
				found: 0
			}.into()),
			[contact] => {
				let (before, after) = resolve(graph, contact, target.node())?;
				(estimator::estimate_translation(&before, &after)?, before)
			},
			[first, second, ..] => {
				let (b0, a0) = resolve(graph, first, target.node())?;
				let (b1, a1) = resolve(graph, second, target.node())?;
				(estimator::estimate(&b0, &b1, &a0, &a1)?, b0)
			}
		};

		let transform = target.apply(graph, &result, &anchor)?;
		log::trace!("node {} moved to {:?} by {:?}", target.node(), transform, result);

		Ok(Update::Applied { result, transform })
	}

	/// [`Self::handle`] for use straight from an event callback: errors are logged and dropped.
	pub fn dispatch(&self, graph: &mut Graph, target: &Transformable, touches: &TouchSet) -> Option<Transform2D> {
		match self.handle(graph, target, touches) {
			Ok(Update::Applied { transform, .. }) => Some(transform),
			Ok(Update::Skipped(reason)) => {
				log::trace!("touch update for node {} skipped: {:?}", target.node(), reason);
				None
			},
			Err(err) => {
				log::debug!("touch update for node {} ignored: {}", target.node(), err);
				None
			}
		}
	}
}

fn resolve(graph: &Graph, contact: &Contact, node: NodeHandle) -> Result<(Vector2, Vector2), TransformError> {
	let before = resolver::convert_to_parent(graph, &contact.previous_location, contact.frame, node)?;
	let after = resolver::convert_to_parent(graph, &contact.location, contact.frame, node)?;
	Ok((before, after))
}
