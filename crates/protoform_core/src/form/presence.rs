use prost_reflect::{DynamicMessage, FieldDescriptor, Value};

/// Explicit-versus-default state of one singular field.
///
/// `DefaultShown` becomes `Explicit` only through [`Presence::should_commit`];
/// nothing in the renderer moves a field back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
	/// No explicit value and no declared default: the field is not rendered.
	Absent,
	/// No explicit value; the declared default is displayed.
	DefaultShown,
	/// The message carries an explicit value.
	Explicit,
}

impl Presence {
	/// Compute the presence of `field` in `message`.
	pub fn of(message: &DynamicMessage, field: &FieldDescriptor) -> Self {
		if message.has_field(field) {
			Self::Explicit
		} else if has_declared_default(field) {
			Self::DefaultShown
		} else {
			Self::Absent
		}
	}

	/// Value a widget starts from, or `None` when the field is not rendered.
	pub fn shown_value(self, message: &DynamicMessage, field: &FieldDescriptor) -> Option<Value> {
		match self {
			Self::Absent => None,
			Self::DefaultShown => Some(Value::default_value_for_field(field)),
			Self::Explicit => Some(message.get_field(field).into_owned()),
		}
	}

	/// Whether an edited value must be written back.
	///
	/// `shown` is the value the widget started from, which for
	/// [`Presence::DefaultShown`] is the declared default. Floats compare by
	/// bit pattern, so a `nan` default left alone is not an edit.
	pub fn should_commit(self, edited: &Value, shown: &Value) -> bool {
		match self {
			Self::Absent => false,
			Self::DefaultShown => !same_value(edited, shown),
			Self::Explicit => true,
		}
	}
}

fn same_value(edited: &Value, shown: &Value) -> bool {
	match (edited, shown) {
		(Value::F32(edited), Value::F32(shown)) => edited.to_bits() == shown.to_bits() || (edited.is_nan() && shown.is_nan()),
		(Value::F64(edited), Value::F64(shown)) => edited.to_bits() == shown.to_bits() || (edited.is_nan() && shown.is_nan()),
		_ => edited == shown,
	}
}

/// Whether the field declares an explicit `[default = ...]`.
pub fn has_declared_default(field: &FieldDescriptor) -> bool {
	field.field_descriptor_proto().default_value.is_some()
}
