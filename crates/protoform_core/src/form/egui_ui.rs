use egui::{CollapsingHeader, DragValue, Ui};

use crate::form::Surface;

/// Widgets are laid out as `[widget] label` rows, as in classic immediate-mode inspectors.
impl Surface for Ui {
	fn section(&mut self, label: &str, body: &mut dyn FnMut(&mut Self)) -> bool {
		CollapsingHeader::new(label).show(self, |ui| body(ui)).body_returned.is_some()
	}

	fn input_int(&mut self, label: &str, mut value: i64) -> i64 {
		self.horizontal(|ui| {
			ui.add(DragValue::new(&mut value));
			ui.label(label);
		});
		value
	}

	fn input_f32(&mut self, label: &str, mut value: f32) -> f32 {
		self.horizontal(|ui| {
			ui.add(DragValue::new(&mut value).speed(0.01));
			ui.label(label);
		});
		value
	}

	fn input_f64(&mut self, label: &str, mut value: f64) -> f64 {
		self.horizontal(|ui| {
			ui.add(DragValue::new(&mut value).speed(0.01));
			ui.label(label);
		});
		value
	}

	fn checkbox(&mut self, label: &str, mut value: bool) -> bool {
		Ui::checkbox(self, &mut value, label);
		value
	}

	fn input_text(&mut self, label: &str, mut value: String) -> String {
		self.horizontal(|ui| {
			ui.text_edit_singleline(&mut value);
			ui.label(label);
		});
		value
	}
}
