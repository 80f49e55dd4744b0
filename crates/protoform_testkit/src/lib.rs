//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use prost::Message;
use prost_reflect::{DescriptorPool, MessageDescriptor};
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileDescriptorSet};

static DESCRIPTOR_SET_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Directory generated fixtures are written to.
pub fn fixture_dir() -> PathBuf {
	target_dir().join("protoform-fixtures")
}

/// Descriptor set covering every field kind the renderer dispatches on.
///
/// `demo.proto` (proto2):
///
/// ```text
/// enum Mode { MODE_A = 0; MODE_B = 1; MODE_C = 2; }
/// message Inner { optional int32 count = 1 [default = 3]; optional string note = 2; }
/// message Config {
///   optional int32 plain = 1;
///   optional int32 level = 2 [default = 10];
///   optional sint64 offset = 3 [default = -5];
///   optional uint32 port = 4 [default = 8080];
///   optional fixed64 budget = 5 [default = 1];
///   optional float ratio = 6 [default = 0.5];
///   optional double scale = 7 [default = 2.5];
///   optional bool enabled = 8 [default = true];
///   optional string title = 9 [default = "untitled"];
///   optional Mode mode = 10 [default = MODE_A];
///   optional Inner inner = 11;
///   repeated int32 samples = 12;
///   optional bytes blob = 13;
/// }
/// message Sparse { optional int32 a = 1; optional string b = 2; optional Mode c = 3; optional bool d = 4; }
/// message Node { optional string name = 1 [default = "node"]; optional Node child = 2; }
/// message Limits {
///   optional float floor = 1 [default = -inf];
///   optional double ceiling = 2 [default = inf];
///   optional double fallback = 3 [default = nan];
///   optional bytes tag = 4 [default = "v1"];
/// }
/// ```
///
/// `counter.proto` (proto3, package `counter`):
///
/// ```text
/// message Counter { int32 hits = 1; string label = 2; }
/// ```
pub fn demo_descriptor_set() -> FileDescriptorSet {
	FileDescriptorSet {
		file: vec![demo_file(), counter_file()],
	}
}

/// Build a pool from [`demo_descriptor_set`].
pub fn demo_pool() -> DescriptorPool {
	DescriptorPool::from_file_descriptor_set(demo_descriptor_set()).expect("demo descriptors are valid")
}

/// Look up a message type from the demo pool by full name.
pub fn demo_message(name: &str) -> MessageDescriptor {
	demo_pool().get_message_by_name(name).expect("demo message exists")
}

/// Write the encoded demo descriptor set once per process and return its path.
pub fn write_demo_descriptor_set() -> PathBuf {
	DESCRIPTOR_SET_PATH
		.get_or_init(|| write_fixture("demo.binpb", &demo_descriptor_set().encode_to_vec()))
		.clone()
}

/// Write bytes into the fixture directory and return the final path.
///
/// The file is written under a process-unique name first and renamed into
/// place, so concurrent test binaries never observe a partial file.
pub fn write_fixture(name: &str, contents: &[u8]) -> PathBuf {
	let dir = fixture_dir();
	std::fs::create_dir_all(&dir).expect("fixture dir is creatable");

	let path = dir.join(name);
	let staging = dir.join(format!(".{name}.{}", std::process::id()));
	std::fs::write(&staging, contents).expect("fixture is writable");
	std::fs::rename(&staging, &path).expect("fixture rename succeeds");
	path
}

fn demo_file() -> FileDescriptorProto {
	FileDescriptorProto {
		name: Some("demo.proto".to_owned()),
		package: Some("demo".to_owned()),
		syntax: Some("proto2".to_owned()),
		enum_type: vec![EnumDescriptorProto {
			name: Some("Mode".to_owned()),
			value: ["MODE_A", "MODE_B", "MODE_C"]
				.iter()
				.zip(0..)
				.map(|(name, number)| EnumValueDescriptorProto {
					name: Some((*name).to_owned()),
					number: Some(number),
					..Default::default()
				})
				.collect(),
			..Default::default()
		}],
		message_type: vec![
			message(
				"Inner",
				vec![field("count", 1, Type::Int32).with_default("3"), field("note", 2, Type::String)],
			),
			message(
				"Config",
				vec![
					field("plain", 1, Type::Int32),
					field("level", 2, Type::Int32).with_default("10"),
					field("offset", 3, Type::Sint64).with_default("-5"),
					field("port", 4, Type::Uint32).with_default("8080"),
					field("budget", 5, Type::Fixed64).with_default("1"),
					field("ratio", 6, Type::Float).with_default("0.5"),
					field("scale", 7, Type::Double).with_default("2.5"),
					field("enabled", 8, Type::Bool).with_default("true"),
					field("title", 9, Type::String).with_default("untitled"),
					field("mode", 10, Type::Enum).with_type_name(".demo.Mode").with_default("MODE_A"),
					field("inner", 11, Type::Message).with_type_name(".demo.Inner"),
					field("samples", 12, Type::Int32).repeated(),
					field("blob", 13, Type::Bytes),
				],
			),
			message(
				"Sparse",
				vec![
					field("a", 1, Type::Int32),
					field("b", 2, Type::String),
					field("c", 3, Type::Enum).with_type_name(".demo.Mode"),
					field("d", 4, Type::Bool),
				],
			),
			message(
				"Node",
				vec![
					field("name", 1, Type::String).with_default("node"),
					field("child", 2, Type::Message).with_type_name(".demo.Node"),
				],
			),
			message(
				"Limits",
				vec![
					field("floor", 1, Type::Float).with_default("-inf"),
					field("ceiling", 2, Type::Double).with_default("inf"),
					field("fallback", 3, Type::Double).with_default("nan"),
					field("tag", 4, Type::Bytes).with_default("v1"),
				],
			),
		],
		..Default::default()
	}
}

fn counter_file() -> FileDescriptorProto {
	FileDescriptorProto {
		name: Some("counter.proto".to_owned()),
		package: Some("counter".to_owned()),
		syntax: Some("proto3".to_owned()),
		message_type: vec![message("Counter", vec![field("hits", 1, Type::Int32), field("label", 2, Type::String)])],
		..Default::default()
	}
}

fn message(name: &str, fields: Vec<FieldDescriptorProto>) -> DescriptorProto {
	DescriptorProto {
		name: Some(name.to_owned()),
		field: fields,
		..Default::default()
	}
}

fn field(name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
	FieldDescriptorProto {
		name: Some(name.to_owned()),
		number: Some(number),
		label: Some(Label::Optional as i32),
		r#type: Some(ty as i32),
		..Default::default()
	}
}

trait FieldExt {
	fn with_default(self, value: &str) -> Self;
	fn with_type_name(self, type_name: &str) -> Self;
	fn repeated(self) -> Self;
}

impl FieldExt for FieldDescriptorProto {
	fn with_default(mut self, value: &str) -> Self {
		self.default_value = Some(value.to_owned());
		self
	}

	fn with_type_name(mut self, type_name: &str) -> Self {
		self.type_name = Some(type_name.to_owned());
		self
	}

	fn repeated(mut self) -> Self {
		self.label = Some(Label::Repeated as i32);
		self
	}
}
