//! Compiled patterns for the tutorial markdown conventions.
//!
//! The document format is consumed bit-exact by the lesson player, so these
//! expressions are the single source of truth for every marker the parser
//! recognises.

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
	Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern `{pattern}`: {e}"))
}

/// The tutorial title: a single `#` followed by a non-`#` character.
pub(crate) static TITLE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^#[^#](.*)$"));

/// A step heading in the current authoring convention (`## Step`).
pub(crate) static STEP_HEADING: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^##[^#](.*)$"));

/// A step heading in the legacy authoring convention (`### Step`).
pub(crate) static LEGACY_STEP_HEADING: LazyLock<Regex> =
	LazyLock::new(|| compile(r"(?m)^###[^#](.*)$"));

/// Splits step content into the instructions and everything from the first
/// code fence or image onward.
pub(crate) static HINT_TEXT: LazyLock<Regex> =
	LazyLock::new(|| compile(r"(?m)(^[\s\S]*?\S)\s*((```|!\[[\s\S]+?\]\(\S+?\))[\s\S]*)"));

/// Authoring-only fences that are never shown to the learner.
pub(crate) static HIDDEN_SNIPPET: LazyLock<Regex> = LazyLock::new(|| {
	compile(r"(?im)```(filterblocks|package|ghost|config|template)\s*\n([\s\S]*?)\n```")
});

/// Fences whose body is collected as tutorial code. The tag is optional.
pub(crate) static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
	compile(
		r"(?im)```(sim|block|blocks|filterblocks|spy|ghost|typescript|ts|js|javascript|template)?\s*\n([\s\S]*?)\n```",
	)
});

/// Runs of line terminators, collapsed before fence scanning.
pub(crate) static LINE_TERMINATOR_RUN: LazyLock<Regex> =
	LazyLock::new(|| compile(r"[\n\r\x{2028}\x{2029}]+"));

/// A multi-line python image literal: `img("""...""")`. The body spans `\n`
/// but stops at any other line terminator.
pub(crate) static IMAGE_LITERAL_TRIPLE_QUOTE: LazyLock<Regex> = LazyLock::new(|| {
	compile(r#"img\s*\(\s*"{3}[^\r\x{2028}\x{2029}]*"{3}\s*\)"#)
});

/// A multi-line javascript image literal: ``img(`...`)``.
pub(crate) static IMAGE_LITERAL_BACKTICK: LazyLock<Regex> =
	LazyLock::new(|| compile(r"img\s*\(\s*`[^\r\x{2028}\x{2029}]*`\s*\)"));

/// The legacy `enum SpriteKind { ... }` declaration.
pub(crate) static SPRITE_KIND_ENUM: LazyLock<Regex> =
	LazyLock::new(|| compile(r"enum\s+SpriteKind\s*\{([^}]+)\}"));

/// Separators between names inside the `SpriteKind` enum body.
pub(crate) static SPRITE_KIND_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| compile(r"[\s,]+"));
