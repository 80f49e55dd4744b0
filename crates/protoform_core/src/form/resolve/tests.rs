use prost_reflect::Kind;
use protoform_testkit::demo_message;

use crate::form::resolve_enum_value;

fn mode_enum() -> prost_reflect::EnumDescriptor {
	let field = demo_message("demo.Config").get_field_by_name("mode").expect("mode exists");
	let Kind::Enum(desc) = field.kind() else {
		panic!("mode should be an enum field");
	};
	desc
}

#[test]
fn full_name_resolves_to_member() {
	let modes = mode_enum();
	let expected = modes.get_value_by_name("MODE_B").expect("MODE_B exists");

	let resolved = resolve_enum_value(&modes, expected.full_name()).expect("full name resolves");
	assert_eq!(resolved.number(), 1);
	assert_eq!(resolved.name(), "MODE_B");
}

#[test]
fn short_partial_and_unknown_names_do_not_resolve() {
	let modes = mode_enum();

	assert!(resolve_enum_value(&modes, "MODE_B").is_none());
	assert!(resolve_enum_value(&modes, "demo.MODE").is_none());
	assert!(resolve_enum_value(&modes, "zzz").is_none());
	assert!(resolve_enum_value(&modes, "").is_none());
}
