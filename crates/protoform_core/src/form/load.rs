use std::path::Path;

use prost_reflect::{DescriptorPool, DynamicMessage, MessageDescriptor};

use crate::form::{FormError, Result};

/// Read an encoded `FileDescriptorSet`, as written by
/// `protoc --include_imports --descriptor_set_out`.
pub fn load_descriptor_pool(path: impl AsRef<Path>) -> Result<DescriptorPool> {
	let bytes = std::fs::read(path.as_ref())?;
	Ok(DescriptorPool::decode(bytes.as_slice())?)
}

/// Look up a message type by fully-qualified name; a leading `.` is accepted.
pub fn find_message(pool: &DescriptorPool, name: &str) -> Result<MessageDescriptor> {
	let name = name.strip_prefix('.').unwrap_or(name);
	pool.get_message_by_name(name)
		.ok_or_else(|| FormError::MessageNotFound { name: name.to_owned() })
}

/// Load a message value from `.json` (protobuf JSON mapping) or
/// `.bin`/`.binpb`/`.pb` (binary wire format).
pub fn load_message(descriptor: MessageDescriptor, path: impl AsRef<Path>) -> Result<DynamicMessage> {
	let path = path.as_ref();
	match path.extension().and_then(|ext| ext.to_str()) {
		Some("json") => message_from_json(descriptor, &std::fs::read_to_string(path)?),
		Some("bin" | "binpb" | "pb") => {
			let bytes = std::fs::read(path)?;
			Ok(DynamicMessage::decode(descriptor, bytes.as_slice())?)
		}
		_ => Err(FormError::UnknownInputFormat { path: path.to_owned() }),
	}
}

/// Parse a message from protobuf JSON text, rejecting trailing input.
pub fn message_from_json(descriptor: MessageDescriptor, text: &str) -> Result<DynamicMessage> {
	let mut deserializer = serde_json::Deserializer::from_str(text);
	let message = DynamicMessage::deserialize(descriptor, &mut deserializer)?;
	deserializer.end()?;
	Ok(message)
}

/// Convert a message to its protobuf JSON value.
pub fn message_to_json(message: &DynamicMessage) -> Result<serde_json::Value> {
	Ok(serde_json::to_value(message)?)
}
