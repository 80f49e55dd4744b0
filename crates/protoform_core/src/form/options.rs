/// Runtime limits for reflective rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
	/// Maximum nested message depth; the root message is depth 0.
	///
	/// A nested field whose sub-message would sit at this depth still draws its
	/// section, but the body stays empty and the sub-message is left untouched.
	pub max_depth: u32,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self { max_depth: 16 }
	}
}

impl RenderOptions {
	/// Preset for small panels and self-referential schemas.
	pub fn shallow() -> Self {
		Self { max_depth: 4 }
	}
}
