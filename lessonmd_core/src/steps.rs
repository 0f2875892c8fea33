use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

use crate::TutorialError;
use crate::TutorialResult;
use crate::patterns::HIDDEN_SNIPPET;
use crate::patterns::HINT_TEXT;
use crate::patterns::LEGACY_STEP_HEADING;
use crate::patterns::STEP_HEADING;

/// The first line of a placeholder document served for a missing tutorial.
pub const NOT_FOUND_MARKER: &str = "# Not found";

/// The heading convention used to delimit steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthoringStyle {
	/// Steps start with `## Step title`.
	Current,
	/// Steps start with `### Step title`. Only used when the document has no
	/// `##` step headings at all.
	Legacy,
}

impl AuthoringStyle {
	fn heading_pattern(self) -> &'static Regex {
		match self {
			Self::Current => &STEP_HEADING,
			Self::Legacy => &LEGACY_STEP_HEADING,
		}
	}
}

impl std::fmt::Display for AuthoringStyle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Current => write!(f, "##"),
			Self::Legacy => write!(f, "###"),
		}
	}
}

/// Flags read from the inline markers on a step heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepFlags {
	/// `@fullscreen` or `@unplugged`.
	pub fullscreen: bool,
	/// `@unplugged`: an offline activity, always shown fullscreen.
	pub unplugged: bool,
	/// `@tutorialCompleted`.
	pub tutorial_completed: bool,
}

impl StepFlags {
	/// Read the flags from the text that follows the heading marker.
	pub fn from_heading(heading: &str) -> Self {
		let unplugged = heading.contains("@unplugged");
		Self {
			fullscreen: unplugged || heading.contains("@fullscreen"),
			unplugged,
			tutorial_completed: heading.contains("@tutorialCompleted"),
		}
	}
}

/// A single step of a tutorial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialStepInfo {
	pub fullscreen: bool,
	pub unplugged: bool,
	pub tutorial_completed: bool,
	/// The instructions shown before the learner asks for a hint: the first
	/// line of the step, or everything before the first code fence or image.
	pub header_content_md: String,
	/// The full trimmed step body.
	pub content_md: String,
	/// The hint, with authoring-only fences removed.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub block_solution: Option<String>,
	pub has_hint: bool,
}

impl TutorialStepInfo {
	fn from_fragment(fragment: &str, flags: StepFlags) -> Self {
		let content_md = fragment.trim();
		let mut header_content_md = content_md.split('\n').next().unwrap_or_default();
		let mut block_solution = None;

		if let Some((instructions, hint)) = extract_hint(content_md) {
			header_content_md = instructions;
			let visible = strip_hidden_snippets(hint);
			if !visible.trim().is_empty() {
				block_solution = Some(visible);
			}
		}

		Self {
			fullscreen: flags.fullscreen,
			unplugged: flags.unplugged,
			tutorial_completed: flags.tutorial_completed,
			header_content_md: header_content_md.to_string(),
			content_md: content_md.to_string(),
			has_hint: block_solution.is_some(),
			block_solution,
		}
	}

	/// The heading flags of this step.
	pub fn flags(&self) -> StepFlags {
		StepFlags {
			fullscreen: self.fullscreen,
			unplugged: self.unplugged,
			tutorial_completed: self.tutorial_completed,
		}
	}
}

/// Split the document into step bodies. The first fragment is the preamble
/// before the first step heading.
pub fn split_steps(content: &str) -> (Vec<&str>, AuthoringStyle) {
	let fragments: Vec<&str> = STEP_HEADING.split(content).collect();
	if fragments.len() > 1 {
		return (fragments, AuthoringStyle::Current);
	}

	(
		LEGACY_STEP_HEADING.split(content).collect(),
		AuthoringStyle::Legacy,
	)
}

/// Read the flags of every step heading of the given style, in document
/// order.
pub fn collect_step_flags(content: impl AsRef<str>, style: AuthoringStyle) -> Vec<StepFlags> {
	style
		.heading_pattern()
		.captures_iter(content.as_ref())
		.map(|captures| StepFlags::from_heading(captures.get(1).map_or("", |m| m.as_str())))
		.collect()
}

/// Split trimmed step content into the instructions and the hint. The hint
/// starts at the first code fence or image; both parts must be present.
pub fn extract_hint(content: &str) -> Option<(&str, &str)> {
	let captures = HINT_TEXT.captures(content)?;
	let instructions = captures.get(1)?.as_str();
	let hint = captures.get(2)?.as_str();

	Some((instructions, hint))
}

/// Remove `filterblocks`, `package`, `ghost`, `config` and `template` fences.
pub fn strip_hidden_snippets(text: &str) -> String {
	HIDDEN_SNIPPET.replace_all(text, "").into_owned()
}

/// Segment a tutorial document into steps, or return `None` when the
/// document has no steps or is a "Not found" placeholder.
pub fn parse_tutorial_steps(content: impl AsRef<str>) -> Option<Vec<TutorialStepInfo>> {
	try_parse_tutorial_steps(content)
		.inspect_err(|e| tracing::debug!("{e}"))
		.ok()
}

/// Like [`parse_tutorial_steps`] but reports why segmentation failed.
pub fn try_parse_tutorial_steps(content: impl AsRef<str>) -> TutorialResult<Vec<TutorialStepInfo>> {
	let content = content.as_ref();
	let (fragments, style) = split_steps(content);

	if fragments
		.first()
		.is_some_and(|preamble| preamble.starts_with(NOT_FOUND_MARKER))
	{
		return Err(TutorialError::NotFound);
	}

	let flags = collect_step_flags(content, style);
	let bodies = fragments.get(1..).unwrap_or_default();
	if bodies.is_empty() {
		return Err(TutorialError::NoSteps);
	}

	tracing::trace!(%style, steps = bodies.len(), "segmented tutorial");

	pair_steps(bodies, flags)
}

/// Pair step bodies with the heading flags read by a separate scan. The
/// pairing is positional, so both lists must have the same length.
pub fn pair_steps(bodies: &[&str], flags: Vec<StepFlags>) -> TutorialResult<Vec<TutorialStepInfo>> {
	if bodies.len() != flags.len() {
		return Err(TutorialError::StepCountMismatch {
			fragments: bodies.len(),
			headings: flags.len(),
		});
	}

	Ok(bodies
		.iter()
		.zip(flags)
		.map(|(body, flags)| TutorialStepInfo::from_fragment(body, flags))
		.collect())
}
