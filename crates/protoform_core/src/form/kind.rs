use prost_reflect::{EnumDescriptor, FieldDescriptor, Kind, MessageDescriptor};

/// Scalar widget families after collapsing protobuf wire encodings.
///
/// `sint32`/`sfixed32` render as [`ScalarKind::Int32`], `fixed64` as
/// [`ScalarKind::UInt64`], and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
	/// Signed 32-bit integer.
	Int32,
	/// Signed 64-bit integer.
	Int64,
	/// Unsigned 32-bit integer.
	UInt32,
	/// Unsigned 64-bit integer.
	UInt64,
	/// Single-precision float.
	Float,
	/// Double-precision float.
	Double,
	/// Boolean.
	Bool,
	/// UTF-8 string.
	String,
	/// Byte string, edited as text while it holds UTF-8 without NULs.
	Bytes,
}

/// How one field is dispatched by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
	/// Singular scalar value.
	Scalar(ScalarKind),
	/// Singular enum value, edited by member name.
	Enum(EnumDescriptor),
	/// Singular nested message.
	Message(MessageDescriptor),
	/// List or map field; shown as an inert placeholder.
	Repeated,
}

impl FieldKind {
	/// Classify a field descriptor.
	pub fn of(field: &FieldDescriptor) -> Self {
		if field.is_list() || field.is_map() {
			return Self::Repeated;
		}

		match field.kind() {
			Kind::Int32 | Kind::Sint32 | Kind::Sfixed32 => Self::Scalar(ScalarKind::Int32),
			Kind::Int64 | Kind::Sint64 | Kind::Sfixed64 => Self::Scalar(ScalarKind::Int64),
			Kind::Uint32 | Kind::Fixed32 => Self::Scalar(ScalarKind::UInt32),
			Kind::Uint64 | Kind::Fixed64 => Self::Scalar(ScalarKind::UInt64),
			Kind::Float => Self::Scalar(ScalarKind::Float),
			Kind::Double => Self::Scalar(ScalarKind::Double),
			Kind::Bool => Self::Scalar(ScalarKind::Bool),
			Kind::String => Self::Scalar(ScalarKind::String),
			Kind::Bytes => Self::Scalar(ScalarKind::Bytes),
			Kind::Enum(desc) => Self::Enum(desc),
			Kind::Message(desc) => Self::Message(desc),
		}
	}

	/// Short label naming the codec that handles this kind.
	pub fn codec_name(&self) -> &'static str {
		match self {
			Self::Scalar(_) => "scalar",
			Self::Enum(_) => "enum",
			Self::Message(_) => "message",
			Self::Repeated => "repeated",
		}
	}
}

impl ScalarKind {
	/// Stable lowercase name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Int32 => "int32",
			Self::Int64 => "int64",
			Self::UInt32 => "uint32",
			Self::UInt64 => "uint64",
			Self::Float => "float",
			Self::Double => "double",
			Self::Bool => "bool",
			Self::String => "string",
			Self::Bytes => "bytes",
		}
	}
}
