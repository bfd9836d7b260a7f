use std::any::{Any, TypeId};
use std::fmt;

/// A runtime descriptor for a concrete type.
///
/// Used where a value arrives as `&dyn Any` and has to be tested against a
/// declared generic parameter. Comparison is by [`TypeId`]; the name is only
/// for diagnostics and is not guaranteed stable across compiler versions.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
	id: TypeId,
	name: &'static str,
}

impl TypeDescriptor {
	/// Returns the descriptor for `T`.
	pub fn of<T: Any + ?Sized>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: std::any::type_name::<T>(),
		}
	}

	/// Returns the type id.
	pub fn id(&self) -> TypeId {
		self.id
	}

	/// Returns the diagnostic type name.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns true if `value` is an instance of the described type.
	#[inline]
	pub fn matches(&self, value: &dyn Any) -> bool {
		value.type_id() == self.id
	}

	/// Returns true if this descriptor describes `T`.
	#[inline]
	pub fn is<T: Any + ?Sized>(&self) -> bool {
		self.id == TypeId::of::<T>()
	}
}

impl PartialEq for TypeDescriptor {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TypeDescriptor {}

impl fmt::Debug for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("TypeDescriptor").field(&self.name).finish()
	}
}

impl fmt::Display for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}
