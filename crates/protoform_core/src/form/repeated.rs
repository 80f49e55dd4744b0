use prost_reflect::FieldDescriptor;

use crate::form::Surface;

/// Placeholder section for list and map fields. Elements are never read or written.
pub(crate) fn render_repeated_stub<S: Surface>(surface: &mut S, field: &FieldDescriptor) {
	surface.section(field.name(), &mut |_: &mut S| {});
}
