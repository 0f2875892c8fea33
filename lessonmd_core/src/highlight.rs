use std::iter::FusedIterator;

use crate::patterns::IMAGE_LITERAL_BACKTICK;
use crate::patterns::IMAGE_LITERAL_TRIPLE_QUOTE;

/// A line containing this marker is dropped and the line after it is
/// highlighted.
pub const HIGHLIGHT_MARKER: &str = "@highlight";

/// The style hook a renderer attaches to highlighted runs.
pub const HIGHLIGHT_LINE_CLASS: &str = "highlight-line";

/// A run of code produced by [`highlight`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightSegment {
	/// Plain text, including its trailing newline.
	Text(String),
	/// A single line to be rendered with [`HIGHLIGHT_LINE_CLASS`]. Carries no
	/// trailing newline.
	Highlighted(String),
}

impl HighlightSegment {
	pub fn text(&self) -> &str {
		match self {
			Self::Text(text) | Self::Highlighted(text) => text,
		}
	}

	pub fn is_highlighted(&self) -> bool {
		matches!(self, Self::Highlighted(_))
	}

	/// The style class for this run, if it needs one.
	pub fn class_name(&self) -> Option<&'static str> {
		self.is_highlighted().then_some(HIGHLIGHT_LINE_CLASS)
	}
}

/// Returns true if the code contains any highlight directive.
pub fn has_highlight(text: impl AsRef<str>) -> bool {
	text.as_ref().contains(HIGHLIGHT_MARKER)
}

/// Collapse multi-line image literals (`img("""...""")` and ``img(`...`)``)
/// so they don't interfere with line based highlighting.
pub fn collapse_image_literals(text: impl AsRef<str>) -> String {
	let collapsed = IMAGE_LITERAL_TRIPLE_QUOTE.replace_all(text.as_ref(), r#"""" """"#);
	IMAGE_LITERAL_BACKTICK
		.replace_all(&collapsed, "img` `")
		.into_owned()
}

/// Split the text content of a rendered code block into plain and
/// highlighted runs.
///
/// Without any `@highlight` marker the whole text is yielded unchanged as a
/// single [`HighlightSegment::Text`].
pub fn highlight(text: impl AsRef<str>) -> Highlight {
	let text = text.as_ref();
	if has_highlight(text) {
		Highlight {
			source: collapse_image_literals(text),
			offset: Some(0),
			passthrough: false,
		}
	} else {
		Highlight {
			source: text.to_string(),
			offset: Some(0),
			passthrough: true,
		}
	}
}

/// Lazy iterator over the [`HighlightSegment`]s of a code block.
#[derive(Debug, Clone)]
pub struct Highlight {
	source: String,
	/// Byte offset of the next unread line. `None` once exhausted.
	offset: Option<usize>,
	passthrough: bool,
}

impl Highlight {
	fn take_line(&mut self) -> Option<(usize, usize)> {
		let start = self.offset?;
		match self.source[start..].find('\n') {
			Some(len) => {
				self.offset = Some(start + len + 1);
				Some((start, start + len))
			}
			None => {
				self.offset = None;
				Some((start, self.source.len()))
			}
		}
	}
}

impl Iterator for Highlight {
	type Item = HighlightSegment;

	fn next(&mut self) -> Option<Self::Item> {
		if self.passthrough {
			self.offset.take()?;
			return Some(HighlightSegment::Text(std::mem::take(&mut self.source)));
		}

		let (start, end) = self.take_line()?;
		if self.source[start..end].contains(HIGHLIGHT_MARKER) {
			// A trailing marker has no line to highlight.
			let (start, end) = self.take_line()?;
			return Some(HighlightSegment::Highlighted(
				self.source[start..end].to_string(),
			));
		}

		Some(HighlightSegment::Text(format!(
			"{}\n",
			&self.source[start..end]
		)))
	}
}

impl FusedIterator for Highlight {}
