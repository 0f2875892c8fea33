use serde::Deserialize;
use serde::Serialize;

use crate::CodeSummary;
use crate::EditorKind;
use crate::FenceTag;
use crate::TutorialResult;
use crate::TutorialStepInfo;
use crate::collect_code;
use crate::patterns::TITLE;
use crate::try_parse_tutorial_steps;

/// A diagnostic produced during parsing. These are issues that don't prevent
/// parsing from completing but indicate problems in the source content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseDiagnostic {
	/// A code fence implied a different editor than the one already fixed by
	/// an earlier fence. Its code was dropped.
	AmbiguousEditor {
		expected: EditorKind,
		found: EditorKind,
		tag: FenceTag,
		/// Zero-based position of the fence among all collected fences.
		index: usize,
	},
}

impl std::fmt::Display for ParseDiagnostic {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::AmbiguousEditor {
				expected,
				found,
				tag,
				index,
			} => {
				write!(
					f,
					"tutorial ambiguous: `{tag}` fence #{} targets the {found} editor but the \
					 tutorial already targets {expected}",
					index + 1
				)
			}
		}
	}
}

/// A parsed tutorial, ready for the lesson player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialInfo {
	/// The editor the tutorial's code targets.
	pub editor: EditorKind,
	/// The text of the single `#` heading.
	pub title: Option<String>,
	/// The steps, in document order. Never empty.
	pub steps: Vec<TutorialStepInfo>,
	/// Every contributing fence body wrapped in `{ ... }`, in document order.
	pub code: String,
	/// The body of the last `template` fence.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub template_code: Option<String>,
	/// Non-fatal findings from code collection.
	#[serde(skip)]
	pub diagnostics: Vec<ParseDiagnostic>,
}

/// Extract the tutorial title from the first `# Title` line.
pub fn parse_tutorial_title(content: impl AsRef<str>) -> Option<String> {
	TITLE
		.captures(content.as_ref())
		.and_then(|captures| captures.get(1))
		.map(|title| title.as_str().trim().to_string())
}

/// Parse a tutorial document. Returns `None` when no tutorial is available:
/// the document has no steps or is a "Not found" placeholder.
pub fn parse_tutorial(content: impl AsRef<str>) -> Option<TutorialInfo> {
	try_parse_tutorial(content)
		.inspect_err(|e| tracing::debug!("{e}"))
		.ok()
}

/// Like [`parse_tutorial`] but reports why no tutorial could be produced.
pub fn try_parse_tutorial(content: impl AsRef<str>) -> TutorialResult<TutorialInfo> {
	let content = content.as_ref();
	let steps = try_parse_tutorial_steps(content)?;
	let title = parse_tutorial_title(content);
	let CodeSummary {
		code,
		editor,
		template_code,
		diagnostics,
	} = collect_code(content);

	Ok(TutorialInfo {
		editor,
		title,
		steps,
		code,
		template_code,
		diagnostics,
	})
}
