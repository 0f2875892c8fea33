//! `lessonmd_core` turns the markdown of a step-by-step coding tutorial into
//! the typed record consumed by the lesson player.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Tutorial markdown
//!   → Title extractor (the single `# Title` heading)
//!   → Step segmenter (`##` step headings, `###` for legacy tutorials; heading flags; hint split)
//!   → Code collector (fenced code blocks → aggregated code + inferred editor + template)
//!   → Assembler (TutorialInfo, or nothing when no tutorial is available)
//! ```
//!
//! Two independent passes are used later by renderers:
//!
//! - [`highlight`] — splits a rendered code block into plain and highlighted
//!   runs according to `@highlight` directives.
//! - [`patch_arcade_snippets`] — upgrades the legacy `enum SpriteKind`
//!   declaration in example code for the targets that need it.
//!
//! [`config`] loads the target platform and patch settings from
//! `lessonmd.toml`.
//!
//! ## Document Conventions
//!
//! ````markdown
//! # Tutorial title
//!
//! ## Build a sprite @fullscreen
//!
//! Drag a block into the workspace.
//!
//! ```blocks
//! let mySprite = sprites.create(img`.`)
//! ```
//!
//! ## Go outside @unplugged
//! ````
//!
//! ## Quick Start
//!
//! ```rust
//! use lessonmd_core::EditorKind;
//! use lessonmd_core::parse_tutorial;
//!
//! let tutorial = parse_tutorial("# Hello\n## Step one\nDo it\n## Step two\nDone").unwrap();
//! assert_eq!(tutorial.title.as_deref(), Some("Hello"));
//! assert_eq!(tutorial.steps.len(), 2);
//! assert_eq!(tutorial.editor, EditorKind::Blocks);
//! ```

pub use code::*;
pub use config::LessonConfig;
pub use editor::*;
pub use error::*;
pub use highlight::*;
pub use parser::*;
pub use patch::*;
pub use steps::*;

mod code;
pub mod config;
mod editor;
#[allow(unused_assignments)]
mod error;
mod highlight;
mod parser;
mod patch;
pub(crate) mod patterns;
mod steps;

#[cfg(test)]
mod __fixtures;
