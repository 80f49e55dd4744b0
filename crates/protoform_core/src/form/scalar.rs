use prost_reflect::{DynamicMessage, EnumDescriptor, FieldDescriptor, Value};
use tracing::{debug, trace};

use crate::form::{Presence, ScalarKind, Surface, resolve_enum_value};

/// Render one singular scalar field and commit the widget result.
pub(crate) fn render_scalar<S: Surface>(surface: &mut S, message: &mut DynamicMessage, field: &FieldDescriptor, kind: ScalarKind) {
	let presence = Presence::of(message, field);
	let Some(shown) = presence.shown_value(message, field) else {
		return;
	};

	let Some(edited) = edit_scalar(surface, field.name(), kind, &shown) else {
		return;
	};
	commit(message, field, presence, edited, &shown);
}

/// Render one singular enum field as its member's fully-qualified name.
///
/// Text that names no member is dropped and the message keeps its prior state.
pub(crate) fn render_enum<S: Surface>(surface: &mut S, message: &mut DynamicMessage, field: &FieldDescriptor, enum_desc: &EnumDescriptor) {
	let presence = Presence::of(message, field);
	let Some(shown) = presence.shown_value(message, field) else {
		return;
	};
	let Some(number) = shown.as_enum_number() else {
		return;
	};

	let text = enum_desc
		.get_value(number)
		.map(|value| value.full_name().to_owned())
		.unwrap_or_else(|| number.to_string());
	let text = until_nul(surface.input_text(field.name(), text));

	let Some(resolved) = resolve_enum_value(enum_desc, &text) else {
		debug!(field = field.full_name(), text = %text, "discarding enum text that names no member");
		return;
	};
	commit(message, field, presence, Value::EnumNumber(resolved.number()), &shown);
}

fn commit(message: &mut DynamicMessage, field: &FieldDescriptor, presence: Presence, edited: Value, shown: &Value) {
	if !presence.should_commit(&edited, shown) {
		return;
	}
	if presence == Presence::DefaultShown {
		debug!(field = field.full_name(), value = ?edited, "edit promotes default field to explicit");
	}
	message.set_field(field, edited);
}

fn edit_scalar<S: Surface>(surface: &mut S, label: &str, kind: ScalarKind, shown: &Value) -> Option<Value> {
	let edited = match kind {
		ScalarKind::Int32 => {
			let value = shown.as_i32()?;
			Value::I32(saturate(surface.input_int(label, i64::from(value)), i32::MIN, i32::MAX))
		}
		ScalarKind::Int64 => Value::I64(surface.input_int(label, shown.as_i64()?)),
		ScalarKind::UInt32 => {
			let value = shown.as_u32()?;
			Value::U32(saturate(surface.input_int(label, i64::from(value)), u32::MIN, u32::MAX))
		}
		ScalarKind::UInt64 => {
			let value = shown.as_u64()?;
			let wide = i64::try_from(value).unwrap_or(i64::MAX);
			let edited = surface.input_int(label, wide);
			// values above i64::MAX only survive when the widget leaves them alone
			if edited == wide { Value::U64(value) } else { Value::U64(saturate(edited, u64::MIN, u64::MAX)) }
		}
		ScalarKind::Float => Value::F32(surface.input_f32(label, shown.as_f32()?)),
		ScalarKind::Double => Value::F64(surface.input_f64(label, shown.as_f64()?)),
		ScalarKind::Bool => Value::Bool(surface.checkbox(label, shown.as_bool()?)),
		ScalarKind::String => Value::String(until_nul(surface.input_text(label, shown.as_str()?.to_owned()))),
		ScalarKind::Bytes => {
			// a NUL cut would rewrite the payload, so those stay hidden too
			let Some(text) = std::str::from_utf8(shown.as_bytes()?).ok().filter(|text| !text.contains('\0')) else {
				trace!(field = label, "skipping bytes field that is not plain text");
				return None;
			};
			let edited = until_nul(surface.input_text(label, text.to_owned()));
			Value::Bytes(edited.into_bytes().into())
		}
	};
	Some(edited)
}

fn saturate<T: TryFrom<i64>>(value: i64, low: T, high: T) -> T {
	T::try_from(value).unwrap_or(if value < 0 { low } else { high })
}

/// Cut text at its first NUL, for toolkits that hand back C-style buffers.
fn until_nul(mut text: String) -> String {
	if let Some(end) = text.find('\0') {
		text.truncate(end);
	}
	text
}

#[cfg(test)]
mod tests;
