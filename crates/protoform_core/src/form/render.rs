use prost_reflect::{DynamicMessage, FieldDescriptor, ReflectMessage};

use crate::form::nested::render_nested;
use crate::form::repeated::render_repeated_stub;
use crate::form::scalar::{render_enum, render_scalar};
use crate::form::{FieldKind, RenderOptions, Surface};

/// Render `message` as one widget group per field, in declaration order,
/// committing edits back into `message` before returning.
///
/// Safe to call every frame with the same message. Fields with neither an
/// explicit value nor a declared default are skipped, and nested messages
/// recurse up to [`RenderOptions::max_depth`].
pub fn render_message<S: Surface>(surface: &mut S, message: &mut DynamicMessage, options: &RenderOptions) {
	render_fields(surface, message, options, 0);
}

pub(crate) fn render_fields<S: Surface>(surface: &mut S, message: &mut DynamicMessage, options: &RenderOptions, depth: u32) {
	let descriptor = message.descriptor();
	for field in descriptor.fields() {
		render_field(surface, message, &field, options, depth);
	}
}

fn render_field<S: Surface>(surface: &mut S, message: &mut DynamicMessage, field: &FieldDescriptor, options: &RenderOptions, depth: u32) {
	match FieldKind::of(field) {
		FieldKind::Scalar(kind) => render_scalar(surface, message, field, kind),
		FieldKind::Enum(enum_desc) => render_enum(surface, message, field, &enum_desc),
		FieldKind::Message(_) => render_nested(surface, message, field, options, depth),
		FieldKind::Repeated => render_repeated_stub(surface, field),
	}
}
