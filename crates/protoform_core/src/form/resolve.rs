use prost_reflect::{EnumDescriptor, EnumValueDescriptor};

/// Find the member of `enum_desc` whose fully-qualified name equals `name`.
///
/// Exact comparison only; short names such as `MODE_B` do not match
/// `demo.MODE_B`.
pub fn resolve_enum_value(enum_desc: &EnumDescriptor, name: &str) -> Option<EnumValueDescriptor> {
	enum_desc.values().find(|value| value.full_name() == name)
}

#[cfg(test)]
mod tests;
