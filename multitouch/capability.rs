bitflags::bitflags! {
	/// Which parts of a gesture transform a node accepts.
	#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
	#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
	pub struct CapabilityMask: u8 {
		const MOVABLE = 1 << 0;
		const SCALABLE = 1 << 1;
		const ROTATABLE = 1 << 2;
		/// Moves, scales and rotates.
		const TRANSFORMABLE = 1 << 3;
		/// Ignores gestures. Overrides every other flag.
		const FIXED = 1 << 5;
	}
}

impl CapabilityMask {
	#[inline]
	pub fn is_fixed(&self) -> bool {
		self.contains(Self::FIXED)
	}

	#[inline]
	pub fn can_move(&self) -> bool {
		!self.is_fixed() && self.intersects(Self::MOVABLE | Self::TRANSFORMABLE)
	}

	#[inline]
	pub fn can_scale(&self) -> bool {
		!self.is_fixed() && self.intersects(Self::SCALABLE | Self::TRANSFORMABLE)
	}

	#[inline]
	pub fn can_rotate(&self) -> bool {
		!self.is_fixed() && self.intersects(Self::ROTATABLE | Self::TRANSFORMABLE)
	}

	/// True when no gesture could change the node.
	pub fn is_inert(&self) -> bool {
		!(self.can_move() || self.can_scale() || self.can_rotate())
	}
}

impl Default for CapabilityMask {
	fn default() -> Self {
		Self::TRANSFORMABLE
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_transforms_everything() {
		let mask = CapabilityMask::default();
		assert!(mask.can_move() && mask.can_scale() && mask.can_rotate());
	}

	#[test]
	fn fixed_overrides() {
		let mask = CapabilityMask::FIXED | CapabilityMask::TRANSFORMABLE | CapabilityMask::MOVABLE;
		assert!(!mask.can_move());
		assert!(!mask.can_scale());
		assert!(!mask.can_rotate());
		assert!(mask.is_inert());
	}

	#[test]
	fn individual_flags() {
		let mask = CapabilityMask::MOVABLE | CapabilityMask::ROTATABLE;
		assert!(mask.can_move());
		assert!(!mask.can_scale());
		assert!(mask.can_rotate());
		assert!(!mask.is_inert());
	}

	#[test]
	fn empty_is_inert() {
		assert!(CapabilityMask::empty().is_inert());
	}

	#[test]
	fn bit_values() {
		assert_eq!(CapabilityMask::MOVABLE.bits(), 1);
		assert_eq!(CapabilityMask::SCALABLE.bits(), 2);
		assert_eq!(CapabilityMask::ROTATABLE.bits(), 4);
		assert_eq!(CapabilityMask::TRANSFORMABLE.bits(), 8);
		assert_eq!(CapabilityMask::FIXED.bits(), 32);
	}
}
