use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Inspect how tutorial markdown is understood by the lesson player.",
	long_about = "lessonmd parses step-by-step tutorial markdown into the steps, hints, code and \
	              editor the lesson player uses.\n\nQuick start:\n  lessonmd parse tutorial.md    \
	              Show the parsed steps\n  lessonmd patch snippet.md     Upgrade legacy snippets\n  \
	              lessonmd highlight code.ts    Show highlighted lines"
)]
pub struct LessonCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Directory to look for `lessonmd.toml` in. Defaults to the current
	/// directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Parse a tutorial and print its steps.
	///
	/// Exits with status code 1 when the document does not describe a
	/// tutorial: it has no step headings or is a `# Not found` placeholder.
	Parse {
		/// The tutorial markdown file.
		file: PathBuf,

		/// Output format. Use `text` for a human-readable summary or `json`
		/// for the record consumed by the lesson player.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Upgrade legacy `enum SpriteKind` declarations in a snippet.
	///
	/// Only snippets for the `arcade` and `pxt-32` targets are rewritten. The
	/// target comes from `--target` or from `lessonmd.toml`.
	Patch {
		/// The snippet or markdown file.
		file: PathBuf,

		/// Target platform identifier. Overrides the configured target.
		#[arg(long, short)]
		target: Option<String>,

		/// Print a line diff between the input and the patched snippet
		/// instead of the patched snippet.
		#[arg(long, default_value_t = false)]
		diff: bool,
	},
	/// Show which lines of a code block are highlighted by `@highlight`.
	///
	/// Highlighted lines are prefixed with `> `.
	Highlight {
		/// The code file.
		file: PathBuf,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
