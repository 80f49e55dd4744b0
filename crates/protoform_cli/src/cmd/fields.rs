use std::path::PathBuf;

use protoform::form::{FieldKind, find_message, has_declared_default, load_descriptor_pool};
use protoform::prost_reflect::{Cardinality, FieldDescriptor, Kind};
use serde::Serialize;

use crate::cmd::util::emit_json;

#[derive(Serialize)]
struct FieldsJson {
	message: String,
	fields: Vec<FieldJson>,
}

#[derive(Serialize)]
struct FieldJson {
	number: u32,
	name: String,
	kind: String,
	cardinality: &'static str,
	default: Option<String>,
	codec: &'static str,
}

/// List the fields of `message` in declaration order.
pub fn run(descriptor_set: PathBuf, message: String, json: bool) -> protoform::form::Result<()> {
	let pool = load_descriptor_pool(&descriptor_set)?;
	let descriptor = find_message(&pool, &message)?;
	let fields: Vec<FieldJson> = descriptor.fields().map(|field| describe(&field)).collect();

	if json {
		return emit_json(&FieldsJson {
			message: descriptor.full_name().to_owned(),
			fields,
		});
	}

	println!("descriptor_set: {}", descriptor_set.display());
	println!("message: {}", descriptor.full_name());
	println!("field_count: {}", fields.len());
	for field in &fields {
		let default = field.default.as_deref().map(|value| format!(" default={value}")).unwrap_or_default();
		println!(
			"  {:>3} {} {} {} [{}]{default}",
			field.number, field.cardinality, field.kind, field.name, field.codec
		);
	}

	Ok(())
}

fn describe(field: &FieldDescriptor) -> FieldJson {
	FieldJson {
		number: field.number(),
		name: field.name().to_owned(),
		kind: kind_label(&field.kind()),
		cardinality: match field.cardinality() {
			Cardinality::Optional => "optional",
			Cardinality::Required => "required",
			Cardinality::Repeated => "repeated",
		},
		default: has_declared_default(field).then(|| field.field_descriptor_proto().default_value().to_owned()),
		codec: FieldKind::of(field).codec_name(),
	}
}

fn kind_label(kind: &Kind) -> String {
	match kind {
		Kind::Message(desc) => desc.full_name().to_owned(),
		Kind::Enum(desc) => desc.full_name().to_owned(),
		other => format!("{other:?}").to_lowercase(),
	}
}
