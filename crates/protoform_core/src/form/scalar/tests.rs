use prost_reflect::{DynamicMessage, Kind, Value};
use protoform_testkit::demo_message;

use crate::form::{RenderOptions, ScriptedSurface, WidgetKind, render_message};

fn config() -> DynamicMessage {
	DynamicMessage::new(demo_message("demo.Config"))
}

fn render(message: &mut DynamicMessage, surface: &mut ScriptedSurface) {
	render_message(surface, message, &RenderOptions::default());
}

fn mode_full_name(name: &str) -> String {
	let field = demo_message("demo.Config").get_field_by_name("mode").expect("mode exists");
	let Kind::Enum(desc) = field.kind() else {
		panic!("mode should be an enum field");
	};
	desc.get_value_by_name(name).expect("member exists").full_name().to_owned()
}

#[test]
fn defaults_are_shown_with_kind_specific_widgets() {
	let mut message = config();
	let mut surface = ScriptedSurface::new();
	render(&mut message, &mut surface);

	let expect = [
		("level", WidgetKind::Int, "10"),
		("offset", WidgetKind::Int, "-5"),
		("port", WidgetKind::Int, "8080"),
		("budget", WidgetKind::Int, "1"),
		("ratio", WidgetKind::Float, "0.5"),
		("scale", WidgetKind::Double, "2.5"),
		("enabled", WidgetKind::Checkbox, "true"),
		("title", WidgetKind::Text, "untitled"),
	];
	for (path, kind, shown) in expect {
		let record = surface.find(path).unwrap_or_else(|| panic!("widget for {path}"));
		assert_eq!(record.kind, kind, "{path}");
		assert_eq!(record.shown, shown, "{path}");
	}
	assert_eq!(surface.find("mode").expect("mode widget").shown, mode_full_name("MODE_A"));
}

#[test]
fn unedited_defaults_stay_unset() {
	let mut message = config();
	let mut surface = ScriptedSurface::new();
	for _ in 0..3 {
		render(&mut message, &mut surface);
	}

	for name in ["level", "offset", "port", "budget", "ratio", "scale", "enabled", "title", "mode"] {
		assert!(!message.has_field_by_name(name), "{name} should stay on its default");
	}
}

#[test]
fn edits_equal_to_default_do_not_materialize() {
	let mut message = config();
	let mut surface = ScriptedSurface::new().edit("level", "10").edit("title", "untitled").edit("enabled", "true");
	render(&mut message, &mut surface);

	assert!(!message.has_field_by_name("level"));
	assert!(!message.has_field_by_name("title"));
	assert!(!message.has_field_by_name("enabled"));
	assert!(surface.unapplied().is_empty());
}

#[test]
fn edits_differing_from_default_become_explicit() {
	let mut message = config();
	let mut surface = ScriptedSurface::new()
		.edit("level", "11")
		.edit("offset", "-9000000000")
		.edit("port", "9090")
		.edit("ratio", "0.25")
		.edit("scale", "-1.5")
		.edit("enabled", "false")
		.edit("title", "primary");
	render(&mut message, &mut surface);

	let get = |name: &str| message.get_field_by_name(name).expect("field exists").into_owned();
	assert_eq!(get("level"), Value::I32(11));
	assert_eq!(get("offset"), Value::I64(-9_000_000_000));
	assert_eq!(get("port"), Value::U32(9090));
	assert_eq!(get("ratio"), Value::F32(0.25));
	assert_eq!(get("scale"), Value::F64(-1.5));
	assert_eq!(get("enabled"), Value::Bool(false));
	assert_eq!(get("title"), Value::String("primary".to_owned()));
	for name in ["level", "offset", "port", "ratio", "scale", "enabled", "title"] {
		assert!(message.has_field_by_name(name), "{name} should be explicit");
	}
}

#[test]
fn integer_edits_saturate_to_target_width() {
	let mut message = config();
	message.set_field_by_name("plain", Value::I32(1));
	let mut surface = ScriptedSurface::new().edit("plain", "99999999999").edit("port", "-3").edit("budget", "-4");
	render(&mut message, &mut surface);

	assert_eq!(message.get_field_by_name("plain").expect("plain").into_owned(), Value::I32(i32::MAX));
	assert_eq!(message.get_field_by_name("port").expect("port").into_owned(), Value::U32(0));
	assert_eq!(message.get_field_by_name("budget").expect("budget").into_owned(), Value::U64(0));
}

#[test]
fn unedited_u64_above_i64_range_survives() {
	let mut message = config();
	message.set_field_by_name("budget", Value::U64(u64::MAX));
	let mut surface = ScriptedSurface::new();
	render(&mut message, &mut surface);

	assert_eq!(surface.find("budget").expect("budget widget").shown, i64::MAX.to_string());
	assert_eq!(message.get_field_by_name("budget").expect("budget").into_owned(), Value::U64(u64::MAX));
}

#[test]
fn text_is_cut_at_first_nul() {
	let mut message = config();
	let mut surface = ScriptedSurface::new().edit("title", "short\0garbage left in buffer");
	render(&mut message, &mut surface);

	assert_eq!(message.get_field_by_name("title").expect("title").into_owned(), Value::String("short".to_owned()));
}

#[test]
fn long_text_is_kept_whole() {
	let long = "x".repeat(4096);
	let mut message = config();
	let mut surface = ScriptedSurface::new().edit("title", long.clone());
	render(&mut message, &mut surface);

	assert_eq!(message.get_field_by_name("title").expect("title").into_owned(), Value::String(long));
}

#[test]
fn enum_round_trip_is_idempotent() {
	let mut message = config();
	message.set_field_by_name("mode", Value::EnumNumber(2));
	let mut surface = ScriptedSurface::new();
	render(&mut message, &mut surface);

	let shown = surface.find("mode").expect("mode widget").shown.clone();
	assert_eq!(shown, mode_full_name("MODE_C"));

	let mut surface = ScriptedSurface::new().edit("mode", shown);
	render(&mut message, &mut surface);
	assert_eq!(message.get_field_by_name("mode").expect("mode").into_owned(), Value::EnumNumber(2));
}

#[test]
fn enum_edit_by_full_name_becomes_explicit() {
	let mut message = config();
	let mut surface = ScriptedSurface::new().edit("mode", mode_full_name("MODE_B"));
	render(&mut message, &mut surface);

	assert!(message.has_field_by_name("mode"));
	assert_eq!(message.get_field_by_name("mode").expect("mode").into_owned(), Value::EnumNumber(1));
}

#[test]
fn invalid_enum_names_never_reach_the_message() {
	let mut message = config();
	for text in ["zzz", "MODE_B", ""] {
		let mut surface = ScriptedSurface::new().edit("mode", text);
		render(&mut message, &mut surface);
		assert!(!message.has_field_by_name("mode"), "{text:?} should be discarded");
	}

	message.set_field_by_name("mode", Value::EnumNumber(2));
	let mut surface = ScriptedSurface::new().edit("mode", "zzz");
	render(&mut message, &mut surface);
	assert_eq!(message.get_field_by_name("mode").expect("mode").into_owned(), Value::EnumNumber(2));
}

#[test]
fn unknown_enum_number_is_shown_as_number_and_kept() {
	let mut message = config();
	message.set_field_by_name("mode", Value::EnumNumber(42));
	let mut surface = ScriptedSurface::new();
	render(&mut message, &mut surface);

	assert_eq!(surface.find("mode").expect("mode widget").shown, "42");
	assert_eq!(message.get_field_by_name("mode").expect("mode").into_owned(), Value::EnumNumber(42));
}

#[test]
fn text_bytes_are_edited_as_text() {
	let mut message = config();
	message.set_field_by_name("blob", Value::Bytes(b"raw".to_vec().into()));
	let mut surface = ScriptedSurface::new().edit("blob", "changed");
	render(&mut message, &mut surface);

	let record = surface.find("blob").expect("blob widget");
	assert_eq!(record.kind, WidgetKind::Text);
	assert_eq!(record.shown, "raw");
	assert_eq!(message.get_field_by_name("blob").expect("blob").into_owned(), Value::Bytes(b"changed".to_vec().into()));
}

#[test]
fn binary_bytes_are_skipped_and_kept() {
	for payload in [vec![0xff, 0xfe, 0x00], b"nul\0inside".to_vec()] {
		let mut message = config();
		message.set_field_by_name("blob", Value::Bytes(payload.clone().into()));
		let mut surface = ScriptedSurface::new().edit("blob", "changed");
		render(&mut message, &mut surface);

		assert!(surface.find("blob").is_none());
		assert_eq!(message.get_field_by_name("blob").expect("blob").into_owned(), Value::Bytes(payload.into()));
	}
}

#[test]
fn special_float_defaults_stay_implicit() {
	let mut message = DynamicMessage::new(demo_message("demo.Limits"));
	let mut surface = ScriptedSurface::new();
	for _ in 0..3 {
		render(&mut message, &mut surface);
	}

	assert_eq!(surface.find("floor").expect("floor widget").shown, "-inf");
	assert_eq!(surface.find("ceiling").expect("ceiling widget").shown, "inf");
	assert_eq!(surface.find("fallback").expect("fallback widget").shown, "NaN");
	assert_eq!(surface.find("tag").expect("tag widget").shown, "v1");
	for name in ["floor", "ceiling", "fallback", "tag"] {
		assert!(!message.has_field_by_name(name), "{name} should stay on its default");
	}
}

#[test]
fn nan_default_is_promoted_only_by_a_real_edit() {
	let mut message = DynamicMessage::new(demo_message("demo.Limits"));
	let mut surface = ScriptedSurface::new().edit("fallback", "NaN").edit("ceiling", "inf");
	render(&mut message, &mut surface);
	assert!(!message.has_field_by_name("fallback"));
	assert!(!message.has_field_by_name("ceiling"));

	let mut surface = ScriptedSurface::new().edit("fallback", "1.5").edit("floor", "0");
	render(&mut message, &mut surface);
	assert_eq!(message.get_field_by_name("fallback").expect("fallback").into_owned(), Value::F64(1.5));
	assert_eq!(message.get_field_by_name("floor").expect("floor").into_owned(), Value::F32(0.0));
}

#[test]
fn implicit_presence_zero_values_are_skipped() {
	let mut message = DynamicMessage::new(demo_message("counter.Counter"));
	let mut surface = ScriptedSurface::new();
	render(&mut message, &mut surface);
	assert!(surface.records().is_empty());

	message.set_field_by_name("hits", Value::I32(4));
	let mut surface = ScriptedSurface::new().edit("hits", "6");
	render(&mut message, &mut surface);
	assert_eq!(surface.find("hits").expect("hits widget").shown, "4");
	assert_eq!(message.get_field_by_name("hits").expect("hits").into_owned(), Value::I32(6));
	assert!(surface.find("label").is_none());
}
