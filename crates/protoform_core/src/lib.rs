//! Public library API for rendering protobuf messages as editable forms.

/// Descriptor-driven field dispatch, widget codecs, surfaces, and loading helpers.
pub mod form;

pub use prost_reflect;

#[cfg(feature = "egui")]
pub use egui;
