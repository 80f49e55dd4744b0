use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::str::FromStr;

use crate::form::{FormError, Result, Surface};

/// Widget family drawn by a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
	/// Collapsible section.
	Section,
	/// Integer spinner.
	Int,
	/// `f32` input.
	Float,
	/// `f64` input.
	Double,
	/// Checkbox.
	Checkbox,
	/// Single-line text.
	Text,
}

impl WidgetKind {
	/// Stable lowercase name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Section => "section",
			Self::Int => "int",
			Self::Float => "float",
			Self::Double => "double",
			Self::Checkbox => "checkbox",
			Self::Text => "text",
		}
	}
}

/// One widget drawn during a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetRecord {
	/// Dotted path of labels from the root, e.g. `inner.count`.
	pub path: String,
	/// Number of enclosing expanded sections.
	pub depth: usize,
	/// Widget family.
	pub kind: WidgetKind,
	/// Value handed to the widget, or `expanded`/`collapsed` for sections.
	pub shown: String,
	/// Edit text applied to this widget, if any.
	pub applied: Option<String>,
}

/// Why a queued edit did not reach a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnappliedReason {
	/// No widget with that path was drawn.
	NotRendered,
	/// The widget was drawn but the text does not parse as its value type.
	Unparseable,
}

impl UnappliedReason {
	/// Stable lowercase name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::NotRendered => "not_rendered",
			Self::Unparseable => "unparseable",
		}
	}
}

/// Queued edit that was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnappliedEdit {
	/// Target widget path.
	pub path: String,
	/// Edit text.
	pub value: String,
	/// Drop reason.
	pub reason: UnappliedReason,
}

/// Headless [`Surface`] driven by a script of expansions and edits.
///
/// Sections expand when their dotted path was registered with
/// [`ScriptedSurface::expand`] (or always, after
/// [`ScriptedSurface::expand_all`]). Each queued edit is consumed by the first
/// widget drawn at its path. Every widget is recorded in draw order.
#[derive(Debug, Default)]
pub struct ScriptedSurface {
	expanded: HashSet<String>,
	expand_all: bool,
	edits: HashMap<String, String>,
	rejected: Vec<UnappliedEdit>,
	stack: Vec<String>,
	records: Vec<WidgetRecord>,
}

impl ScriptedSurface {
	/// Create a surface with every section collapsed and no edits.
	pub fn new() -> Self {
		Self::default()
	}

	/// Expand the section at `path`.
	pub fn expand(mut self, path: impl Into<String>) -> Self {
		self.set_expanded(path, true);
		self
	}

	/// Expand every section.
	pub fn expand_all(mut self) -> Self {
		self.expand_all = true;
		self
	}

	/// Queue an edit for the widget at `path`.
	pub fn edit(mut self, path: impl Into<String>, value: impl Into<String>) -> Self {
		self.queue_edit(path, value);
		self
	}

	/// Toggle expansion of the section at `path` between frames.
	pub fn set_expanded(&mut self, path: impl Into<String>, expanded: bool) {
		let path = path.into();
		if expanded {
			self.expanded.insert(path);
		} else {
			self.expanded.remove(&path);
		}
	}

	/// Queue an edit for the next frame that draws `path`.
	pub fn queue_edit(&mut self, path: impl Into<String>, value: impl Into<String>) {
		self.edits.insert(path.into(), value.into());
	}

	/// Widgets drawn so far, in draw order.
	pub fn records(&self) -> &[WidgetRecord] {
		&self.records
	}

	/// Drain recorded widgets, e.g. between frames.
	pub fn take_records(&mut self) -> Vec<WidgetRecord> {
		std::mem::take(&mut self.records)
	}

	/// Most recent widget drawn at `path`.
	pub fn find(&self, path: &str) -> Option<&WidgetRecord> {
		self.records.iter().rev().find(|record| record.path == path)
	}

	/// Edits rejected so far plus edits still waiting for a widget, sorted by path.
	pub fn unapplied(&self) -> Vec<UnappliedEdit> {
		let mut out = self.rejected.clone();
		out.extend(self.edits.iter().map(|(path, value)| UnappliedEdit {
			path: path.clone(),
			value: value.clone(),
			reason: UnappliedReason::NotRendered,
		}));
		out.sort_by(|left, right| left.path.cmp(&right.path));
		out
	}

	fn path_for(&self, label: &str) -> String {
		if self.stack.is_empty() {
			label.to_owned()
		} else {
			format!("{}.{label}", self.stack.join("."))
		}
	}

	fn value_widget<T: Display + FromStr>(&mut self, label: &str, kind: WidgetKind, value: T) -> T {
		let path = self.path_for(label);
		let shown = value.to_string();
		let mut out = value;
		let mut applied = None;

		if let Some(text) = self.edits.remove(&path) {
			match text.parse::<T>() {
				Ok(parsed) => {
					out = parsed;
					applied = Some(text);
				}
				Err(_) => self.rejected.push(UnappliedEdit {
					path: path.clone(),
					value: text,
					reason: UnappliedReason::Unparseable,
				}),
			}
		}

		self.records.push(WidgetRecord {
			path,
			depth: self.stack.len(),
			kind,
			shown,
			applied,
		});
		out
	}
}

impl Surface for ScriptedSurface {
	fn section(&mut self, label: &str, body: &mut dyn FnMut(&mut Self)) -> bool {
		let path = self.path_for(label);
		let expanded = self.expand_all || self.expanded.contains(&path);
		self.records.push(WidgetRecord {
			path,
			depth: self.stack.len(),
			kind: WidgetKind::Section,
			shown: if expanded { "expanded" } else { "collapsed" }.to_owned(),
			applied: None,
		});

		if expanded {
			self.stack.push(label.to_owned());
			body(self);
			self.stack.pop();
		}
		expanded
	}

	fn input_int(&mut self, label: &str, value: i64) -> i64 {
		self.value_widget(label, WidgetKind::Int, value)
	}

	fn input_f32(&mut self, label: &str, value: f32) -> f32 {
		self.value_widget(label, WidgetKind::Float, value)
	}

	fn input_f64(&mut self, label: &str, value: f64) -> f64 {
		self.value_widget(label, WidgetKind::Double, value)
	}

	fn checkbox(&mut self, label: &str, value: bool) -> bool {
		self.value_widget(label, WidgetKind::Checkbox, value)
	}

	fn input_text(&mut self, label: &str, value: String) -> String {
		self.value_widget(label, WidgetKind::Text, value)
	}
}

/// Split a `path=value` edit at its first `=`.
///
/// The value may be empty or contain further `=` characters; the path may not
/// be empty.
pub fn parse_edit_spec(spec: &str) -> Result<(String, String)> {
	match spec.split_once('=') {
		Some((path, value)) if !path.trim().is_empty() => Ok((path.trim().to_owned(), value.to_owned())),
		_ => Err(FormError::InvalidEditSpec { spec: spec.to_owned() }),
	}
}
