#[cfg(feature = "egui")]
mod egui_ui;
mod error;
mod kind;
mod load;
mod nested;
mod options;
mod presence;
mod render;
mod repeated;
mod resolve;
mod scalar;
mod script;
mod surface;

/// Error and result aliases.
pub use error::{FormError, Result};
/// Closed field-kind classification used for widget dispatch.
pub use kind::{FieldKind, ScalarKind};
/// Descriptor pool and message loading helpers.
pub use load::{find_message, load_descriptor_pool, load_message, message_from_json, message_to_json};
/// Render limits.
pub use options::RenderOptions;
/// Per-field explicit/default presence model.
pub use presence::{Presence, has_declared_default};
/// Reflective render entry point.
pub use render::render_message;
/// Enum member lookup by fully-qualified name.
pub use resolve::resolve_enum_value;
/// Headless scripted surface and its records.
pub use script::{ScriptedSurface, UnappliedEdit, UnappliedReason, WidgetKind, WidgetRecord, parse_edit_spec};
/// Widget contract consumed by the codecs.
pub use surface::Surface;
