use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use lessonmd_cli::Commands;
use lessonmd_cli::LessonCli;
use lessonmd_cli::OutputFormat;
use lessonmd_core::HighlightSegment;
use lessonmd_core::LessonConfig;
use lessonmd_core::TutorialError;
use lessonmd_core::TutorialInfo;
use lessonmd_core::TutorialStepInfo;
use lessonmd_core::highlight;
use lessonmd_core::patch_arcade_snippets;
use lessonmd_core::try_parse_tutorial;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = LessonCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Parse { file, format }) => run_parse(file, *format),
		Some(Commands::Patch { file, target, diff }) => {
			run_patch(&args, file, target.as_deref(), *diff)
		}
		Some(Commands::Highlight { file }) => run_highlight(file),
		None => {
			eprintln!("No subcommand specified. Run `lessonmd --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<TutorialError>() {
			Ok(tutorial_err) => {
				let report: miette::Report = (*tutorial_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn init_tracing(verbose: bool) {
	let default_directive = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(color_enabled())
		.init();
}

fn resolve_root(args: &LessonCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn read_input(file: &Path) -> Result<String, Box<dyn std::error::Error>> {
	std::fs::read_to_string(file).map_err(|e| format!("failed to read {}: {e}", file.display()).into())
}

fn print_field(label: &str, value: impl std::fmt::Display) {
	println!("{label:<12} {value}");
}

fn run_parse(file: &Path, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
	let content = read_input(file)?;
	let tutorial = match try_parse_tutorial(&content) {
		Ok(tutorial) => tutorial,
		Err(e @ TutorialError::Io(_)) => return Err(e.into()),
		Err(e) => {
			eprintln!(
				"{} no tutorial available in {}: {e}",
				colored!("error:", red),
				file.display()
			);
			process::exit(1);
		}
	};

	for diagnostic in &tutorial.diagnostics {
		eprintln!("{} {diagnostic}", colored!("warning:", yellow));
	}

	match format {
		OutputFormat::Json => {
			println!("{}", serde_json::to_string_pretty(&tutorial)?);
		}
		OutputFormat::Text => print_tutorial(&tutorial),
	}

	Ok(())
}

fn print_tutorial(tutorial: &TutorialInfo) {
	print_field("Title", tutorial.title.as_deref().unwrap_or("(none)"));
	print_field("Editor", tutorial.editor);
	print_field("Steps", tutorial.steps.len());
	print_field(
		"Template",
		if tutorial.template_code.is_some() {
			"yes"
		} else {
			"no"
		},
	);
	println!();

	for (index, step) in tutorial.steps.iter().enumerate() {
		let header = step.header_content_md.lines().next().unwrap_or_default();
		let markers = step_markers(step);
		let markers = if markers.is_empty() {
			String::new()
		} else {
			format!(" [{}]", markers.join(", "))
		};
		let hint = if step.has_hint {
			format!(" {}", colored!("(hint)", green))
		} else {
			String::new()
		};

		println!(
			"{} {header}{markers}{hint}",
			colored!(format!("{:>3}.", index + 1), bold)
		);
	}
}

fn step_markers(step: &TutorialStepInfo) -> Vec<&'static str> {
	let mut markers = Vec::new();
	if step.unplugged {
		markers.push("unplugged");
	} else if step.fullscreen {
		markers.push("fullscreen");
	}
	if step.tutorial_completed {
		markers.push("completed");
	}
	markers
}

fn run_patch(
	args: &LessonCli,
	file: &Path,
	target: Option<&str>,
	show_diff: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = LessonConfig::load(&root)?.unwrap_or_default();
	let content = read_input(file)?;

	let patched = match config.patch_target(target) {
		Some(target_id) => patch_arcade_snippets(target_id, &content),
		None => {
			tracing::debug!("no target configured; leaving snippet unchanged");
			content.clone()
		}
	};

	if !show_diff {
		print!("{patched}");
		return Ok(());
	}

	if patched == content {
		println!("Snippet is already up to date.");
	} else {
		print_diff(&content, &patched);
	}

	Ok(())
}

fn run_highlight(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
	let content = read_input(file)?;
	for segment in highlight(&content) {
		match segment {
			HighlightSegment::Text(text) => print!("{text}"),
			HighlightSegment::Highlighted(line) => {
				println!("{}", colored!(format!("> {line}"), bold));
			}
		}
	}

	Ok(())
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				print!("{}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				print!("{}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				print!(" {change}");
			}
		}
	}
}
