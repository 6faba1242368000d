use std::{
	fmt,
	hash::{Hash, Hasher},
	marker::PhantomData
};

/// Generational index into a [`Pool`]. A handle outlives the payload it names: once the
/// payload is removed, the slot's generation moves on and the stale handle stops resolving.
pub struct Handle<T> {
	type_marker: PhantomData<fn() -> T>,
	index: usize,
	generation: u32
}

impl<T> Handle<T> {
	pub fn index(&self) -> usize {
		self.index
	}

	pub fn generation(&self) -> u32 {
		self.generation
	}
}

impl<T> Clone for Handle<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
	fn eq(&self, other: &Self) -> bool {
		self.index == other.index && self.generation == other.generation
	}
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.index.hash(state);
		self.generation.hash(state);
	}
}

impl<T> fmt::Debug for Handle<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Handle({}v{})", self.index, self.generation)
	}
}

impl<T> fmt::Display for Handle<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{{ index: {} generation: {} }}", self.index, self.generation)
	}
}

struct Record<T> {
	generation: u32,
	payload: Option<T>
}

pub struct Pool<T> {
	records: Vec<Record<T>>,
	vacant_records: Vec<usize>
}

impl<T> Default for Pool<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Pool<T> {
	pub fn new() -> Self {
		Self {
			records: vec![],
			vacant_records: vec![]
		}
	}

	pub fn add(&mut self, payload: T) -> Handle<T> {
		if let Some(index) = self.vacant_records.pop() {
			let record = &mut self.records[index];
			record.generation = record.generation.wrapping_add(1);
			record.payload = Some(payload);

			Handle {
				type_marker: PhantomData,
				generation: record.generation,
				index
			}
		}
		else {
			self.records.push(Record {
				generation: 0,
				payload: Some(payload)
			});

			Handle {
				type_marker: PhantomData,
				generation: 0,
				index: self.records.len() - 1
			}
		}
	}

	pub fn contains(&self, handle: &Handle<T>) -> bool {
		self.get(handle).is_some()
	}

	pub fn remove(&mut self, handle: &Handle<T>) -> Option<T> {
		let record = self.records.get_mut(handle.index)?;

		if record.generation != handle.generation {
			return None;
		}

		let payload = record.payload.take()?;
		self.vacant_records.push(handle.index);
		Some(payload)
	}

	pub fn get(&self, handle: &Handle<T>) -> Option<&T> {
		self.records.get(handle.index)
			.filter(|record| record.generation == handle.generation)
			.and_then(|record| record.payload.as_ref())
	}

	pub fn get_mut(&mut self, handle: &Handle<T>) -> Option<&mut T> {
		self.records.get_mut(handle.index)
			.filter(|record| record.generation == handle.generation)
			.and_then(|record| record.payload.as_mut())
	}

	pub fn present_len(&self) -> usize {
		self.records.len() - self.vacant_records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.present_len() == 0
	}

	pub fn iter(&self) -> impl Iterator<Item = (Handle<T>, &T)> {
		self.records.iter().enumerate().filter_map(|(index, record)| {
			record.payload.as_ref().map(|payload| (Handle {
				type_marker: PhantomData,
				index,
				generation: record.generation
			}, payload))
		})
	}
}
