use std::path::PathBuf;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, FormError>;

/// Errors produced while loading schemas and message values, or parsing edit scripts.
///
/// Rendering itself never fails; see [`crate::form::render_message`].
#[derive(Debug, Error)]
pub enum FormError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Encoded descriptor set could not be decoded or linked.
	#[error("descriptor set: {0}")]
	Descriptor(#[from] prost_reflect::DescriptorError),
	/// Requested message type is not in the descriptor pool.
	#[error("message type not found: {name}")]
	MessageNotFound {
		/// Requested fully-qualified message name.
		name: String,
	},
	/// Binary message payload failed to decode.
	#[error("protobuf decode: {0}")]
	Decode(#[from] prost::DecodeError),
	/// JSON message payload failed to parse or serialize.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Edit script entry was not of the form `path=value`.
	#[error("invalid edit (expected path=value): {spec}")]
	InvalidEditSpec {
		/// Original user-provided edit text.
		spec: String,
	},
	/// Message input file extension is not recognized.
	#[error("unknown input format for {} (expected .json, .bin, .binpb or .pb)", .path.display())]
	UnknownInputFormat {
		/// Offending input path.
		path: PathBuf,
	},
}
