use prost_reflect::{DynamicMessage, FieldDescriptor};
use tracing::warn;

use crate::form::render::render_fields;
use crate::form::{RenderOptions, Surface};

/// Render a singular message field behind a collapsible section.
///
/// The sub-message is created on first expansion and then stays present;
/// a collapsed section never touches it.
pub(crate) fn render_nested<S: Surface>(surface: &mut S, message: &mut DynamicMessage, field: &FieldDescriptor, options: &RenderOptions, depth: u32) {
	let child_depth = depth + 1;
	surface.section(field.name(), &mut |surface: &mut S| {
		if child_depth >= options.max_depth {
			warn!(field = field.full_name(), max_depth = options.max_depth, "nested message depth limit reached");
			return;
		}
		let Some(child) = message.get_field_mut(field).as_message_mut() else {
			return;
		};
		render_fields(surface, child, options, child_depth);
	});
}
