/// Immediate-mode widget contract consumed by the field codecs.
///
/// Every value widget takes a label and the current value and returns the
/// value after this frame's interaction, edited or not. Implementations own
/// layout, ids, and styling.
pub trait Surface {
	/// Collapsible section labelled `label`.
	///
	/// `body` runs, nested one level under the section, only while expanded.
	/// Returns whether the section is expanded this frame.
	fn section(&mut self, label: &str, body: &mut dyn FnMut(&mut Self)) -> bool;

	/// Integer spinner. All integer kinds are funneled through `i64`.
	fn input_int(&mut self, label: &str, value: i64) -> i64;

	/// Single-precision numeric input.
	fn input_f32(&mut self, label: &str, value: f32) -> f32;

	/// Double-precision numeric input.
	fn input_f64(&mut self, label: &str, value: f64) -> f64;

	/// Checkbox.
	fn checkbox(&mut self, label: &str, value: bool) -> bool;

	/// Single-line text box of unbounded length.
	fn input_text(&mut self, label: &str, value: String) -> String;
}
