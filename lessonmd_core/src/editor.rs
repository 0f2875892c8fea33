use serde::Deserialize;
use serde::Serialize;

/// The coding surface a tutorial's example code targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorKind {
	/// The drag-and-drop blocks editor. Tutorials that never say otherwise
	/// are blocks tutorials.
	#[default]
	Blocks,
	/// The python text editor (`spy` fences).
	Python,
	/// The javascript / typescript text editor.
	JavaScript,
}

impl EditorKind {
	/// The project name the player uses for this editor.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Blocks => "blocks",
			Self::Python => "python",
			Self::JavaScript => "javascript",
		}
	}

	/// The editor implied by a recognised fence tag, or `None` when the tag
	/// does not constrain the editor.
	pub fn from_fence_tag(tag: FenceTag) -> Option<Self> {
		match tag {
			FenceTag::Block | FenceTag::Blocks | FenceTag::FilterBlocks => Some(Self::Blocks),
			FenceTag::Spy => Some(Self::Python),
			FenceTag::TypeScript | FenceTag::Ts | FenceTag::JavaScript | FenceTag::Js => {
				Some(Self::JavaScript)
			}
			FenceTag::Sim | FenceTag::Ghost | FenceTag::Template => None,
		}
	}
}

impl std::fmt::Display for EditorKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A code fence tag that the code collector recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FenceTag {
	Sim,
	Block,
	Blocks,
	FilterBlocks,
	Spy,
	Ghost,
	TypeScript,
	Ts,
	Js,
	JavaScript,
	Template,
}

impl FenceTag {
	/// Parse a fence tag. Matching is exact: `Blocks` is not `blocks`.
	pub fn parse(tag: &str) -> Option<Self> {
		let tag = match tag {
			"sim" => Self::Sim,
			"block" => Self::Block,
			"blocks" => Self::Blocks,
			"filterblocks" => Self::FilterBlocks,
			"spy" => Self::Spy,
			"ghost" => Self::Ghost,
			"typescript" => Self::TypeScript,
			"ts" => Self::Ts,
			"js" => Self::Js,
			"javascript" => Self::JavaScript,
			"template" => Self::Template,
			_ => return None,
		};

		Some(tag)
	}
}

impl std::fmt::Display for FenceTag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Sim => write!(f, "sim"),
			Self::Block => write!(f, "block"),
			Self::Blocks => write!(f, "blocks"),
			Self::FilterBlocks => write!(f, "filterblocks"),
			Self::Spy => write!(f, "spy"),
			Self::Ghost => write!(f, "ghost"),
			Self::TypeScript => write!(f, "typescript"),
			Self::Ts => write!(f, "ts"),
			Self::Js => write!(f, "js"),
			Self::JavaScript => write!(f, "javascript"),
			Self::Template => write!(f, "template"),
		}
	}
}

/// Accumulates editor proposals from code fences. The first proposal fixes
/// the editor; any later proposal for a different editor is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorInference {
	editor: Option<EditorKind>,
}

impl EditorInference {
	pub fn new() -> Self {
		Self::default()
	}

	/// Propose `kind` as the tutorial's editor. Returns `false` when a
	/// different editor was already fixed.
	pub fn propose(&mut self, kind: EditorKind) -> bool {
		match self.editor {
			Some(current) if current != kind => false,
			_ => {
				self.editor = Some(kind);
				true
			}
		}
	}

	/// The editor fixed so far, if any.
	pub fn current(&self) -> Option<EditorKind> {
		self.editor
	}

	/// The inferred editor, defaulting to [`EditorKind::Blocks`].
	pub fn resolve(self) -> EditorKind {
		self.editor.unwrap_or_default()
	}
}
