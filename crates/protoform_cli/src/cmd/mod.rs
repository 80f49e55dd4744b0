/// Message schema listing command.
pub mod fields;
/// Stderr log subscriber setup.
pub mod logging;
/// Scripted render pass command.
pub mod render;
pub(crate) mod util;
