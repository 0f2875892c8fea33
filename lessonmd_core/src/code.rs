use crate::EditorInference;
use crate::EditorKind;
use crate::FenceTag;
use crate::ParseDiagnostic;
use crate::patterns::CODE_FENCE;
use crate::patterns::LINE_TERMINATOR_RUN;

/// Code collected from every recognised fence in a tutorial, together with
/// the editor the fences imply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeSummary {
	/// One `{ ... }` wrapped fragment per contributing fence, in document
	/// order.
	pub code: String,
	/// The inferred editor. [`EditorKind::Blocks`] when no fence constrained
	/// it.
	pub editor: EditorKind,
	/// The body of the last `template` fence, if any.
	pub template_code: Option<String>,
	/// Fences that were dropped because they disagreed with the editor.
	pub diagnostics: Vec<ParseDiagnostic>,
}

/// Scan the whole document for code fences, aggregate their bodies and infer
/// the tutorial editor.
///
/// The first fence that implies an editor fixes it. A later fence implying a
/// different editor is reported as [`ParseDiagnostic::AmbiguousEditor`] and
/// its body is left out of the aggregated code.
pub fn collect_code(content: impl AsRef<str>) -> CodeSummary {
	// Blank lines between fences would otherwise break the single-pass
	// pattern.
	let normalized = LINE_TERMINATOR_RUN.replace_all(content.as_ref(), "\n");
	let mut inference = EditorInference::new();
	let mut summary = CodeSummary::default();

	for (index, captures) in CODE_FENCE.captures_iter(&normalized).enumerate() {
		let body = captures.get(2).map_or("", |m| m.as_str());
		let tag = captures.get(1).and_then(|m| FenceTag::parse(m.as_str()));
		tracing::trace!(index, ?tag, "collecting tutorial code fence");

		if let Some(tag) = tag {
			if let Some(kind) = EditorKind::from_fence_tag(tag) {
				if !inference.propose(kind) {
					let expected = inference.current().unwrap_or_default();
					tracing::debug!(
						%expected,
						found = %kind,
						%tag,
						"tutorial ambiguous: contains snippets of different types"
					);
					summary.diagnostics.push(ParseDiagnostic::AmbiguousEditor {
						expected,
						found: kind,
						tag,
						index,
					});
					continue;
				}
			}

			if tag == FenceTag::Template {
				summary.template_code = Some(body.to_string());
			}
		}

		push_fragment(&mut summary.code, body);
	}

	summary.editor = inference.resolve();
	summary
}

fn push_fragment(code: &mut String, body: &str) {
	code.push_str("\n { \n ");
	code.push_str(body);
	code.push_str("\n } \n");
}
