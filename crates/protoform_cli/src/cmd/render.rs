use std::path::PathBuf;

use protoform::form::{
	RenderOptions, ScriptedSurface, UnappliedEdit, WidgetRecord, find_message, load_descriptor_pool, load_message, message_to_json, parse_edit_spec,
	render_message,
};
use protoform::prost_reflect::DynamicMessage;
use serde::Serialize;
use tracing::warn;

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub descriptor_set: PathBuf,
	#[arg(long)]
	pub message: String,
	/// Starting value (`.json`, `.bin`, `.binpb`, `.pb`); empty message when omitted.
	#[arg(long)]
	pub input: Option<PathBuf>,
	/// Section path to expand, e.g. `inner` or `inner.child`.
	#[arg(long = "expand")]
	pub expand: Vec<String>,
	#[arg(long)]
	pub expand_all: bool,
	/// Widget edit as `path=value`.
	#[arg(long = "set")]
	pub edits: Vec<String>,
	#[arg(long)]
	pub max_depth: Option<u32>,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct RenderJson {
	message: String,
	widgets: Vec<WidgetJson>,
	unapplied: Vec<UnappliedJson>,
	value: serde_json::Value,
}

#[derive(Serialize)]
struct WidgetJson {
	path: String,
	depth: usize,
	kind: &'static str,
	shown: String,
	applied: Option<String>,
}

#[derive(Serialize)]
struct UnappliedJson {
	path: String,
	value: String,
	reason: &'static str,
}

/// Render one pass of `message` through a scripted surface.
pub fn run(args: Args) -> protoform::form::Result<()> {
	let Args {
		descriptor_set,
		message,
		input,
		expand,
		expand_all,
		edits,
		max_depth,
		json,
	} = args;

	let pool = load_descriptor_pool(&descriptor_set)?;
	let descriptor = find_message(&pool, &message)?;
	let mut value = match &input {
		Some(path) => load_message(descriptor.clone(), path)?,
		None => DynamicMessage::new(descriptor.clone()),
	};

	let mut surface = ScriptedSurface::new();
	if expand_all {
		surface = surface.expand_all();
	}
	for path in expand {
		surface.set_expanded(path, true);
	}
	for spec in &edits {
		let (path, text) = parse_edit_spec(spec)?;
		surface.queue_edit(path, text);
	}

	let mut options = RenderOptions::default();
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}

	render_message(&mut surface, &mut value, &options);

	let unapplied = surface.unapplied();
	for edit in &unapplied {
		warn!(path = %edit.path, value = %edit.value, reason = edit.reason.as_str(), "edit not applied");
	}

	if json {
		return emit_json(&RenderJson {
			message: descriptor.full_name().to_owned(),
			widgets: surface.records().iter().map(widget_json).collect(),
			unapplied: unapplied.iter().map(unapplied_json).collect(),
			value: message_to_json(&value)?,
		});
	}

	println!("message: {}", descriptor.full_name());
	if let Some(path) = &input {
		println!("input: {}", path.display());
	}
	println!("widgets:");
	for record in surface.records() {
		print_record(record);
	}
	for edit in &unapplied {
		println!("unapplied: {}={} ({})", edit.path, edit.value, edit.reason.as_str());
	}
	println!("value: {}", serde_json::to_string(&message_to_json(&value)?)?);

	Ok(())
}

fn print_record(record: &WidgetRecord) {
	let pad = "  ".repeat(record.depth + 1);
	let label = record.path.rsplit('.').next().unwrap_or(&record.path);
	match &record.applied {
		Some(applied) => println!("{pad}{label} [{}] = {} -> {applied}", record.kind.as_str(), record.shown),
		None => println!("{pad}{label} [{}] = {}", record.kind.as_str(), record.shown),
	}
}

fn widget_json(record: &WidgetRecord) -> WidgetJson {
	WidgetJson {
		path: record.path.clone(),
		depth: record.depth,
		kind: record.kind.as_str(),
		shown: record.shown.clone(),
		applied: record.applied.clone(),
	}
}

fn unapplied_json(edit: &UnappliedEdit) -> UnappliedJson {
	UnappliedJson {
		path: edit.path.clone(),
		value: edit.value.clone(),
		reason: edit.reason.as_str(),
	}
}
