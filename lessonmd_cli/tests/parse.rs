mod common;

use clap::CommandFactory;
use clap::Parser;
use lessonmd_cli::Commands;
use lessonmd_cli::LessonCli;
use lessonmd_cli::OutputFormat;
use lessonmd_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;
use serde_json::Value;

const TUTORIAL: &str = "# Build a game\n\n## Make a sprite @fullscreen\n\nAdd a \
                        sprite.\n\n```blocks\nlet mySprite = sprites.create(img`.`)\n```\n\n## \
                        Go outside @unplugged\n\nPlay tag.\n";

#[test]
fn cli_definition_is_valid() {
	LessonCli::command().debug_assert();
}

#[test]
fn parse_subcommand_defaults_to_text() {
	let cli = LessonCli::parse_from(["lessonmd", "parse", "tutorial.md"]);
	assert!(matches!(
		cli.command,
		Some(Commands::Parse {
			format: OutputFormat::Text,
			..
		})
	));
}

#[test]
fn parse_prints_step_summary() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("tutorial.md");
	std::fs::write(&file, TUTORIAL)?;

	let mut cmd = common::lessonmd_cmd();
	cmd.arg("parse")
		.arg(&file)
		.assert()
		.success()
		.stdout(predicates::str::contains("Build a game"))
		.stdout(predicates::str::contains("blocks"))
		.stdout(predicates::str::contains("Add a sprite. [fullscreen] (hint)"))
		.stdout(predicates::str::contains("Play tag. [unplugged]"));

	Ok(())
}

#[test]
fn parse_prints_json_record() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("tutorial.md");
	std::fs::write(&file, TUTORIAL)?;

	let mut cmd = common::lessonmd_cmd();
	let output = cmd
		.arg("parse")
		.arg(&file)
		.arg("--format")
		.arg("json")
		.output()?;
	assert!(output.status.success());

	let value: Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(value["editor"], "blocks");
	assert_eq!(value["title"], "Build a game");
	assert_eq!(value["steps"].as_array().map(Vec::len), Some(2));
	assert_eq!(value["steps"][1]["unplugged"], true);
	assert_eq!(value["steps"][1]["fullscreen"], true);

	Ok(())
}

#[test]
fn parse_warns_about_ambiguous_editor() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("tutorial.md");
	std::fs::write(
		&file,
		"# Mixed\n## One\n```blocks\nlet a = 1\n```\n## Two\n```spy\nb = 2\n```\n",
	)?;

	let mut cmd = common::lessonmd_cmd();
	cmd.arg("parse")
		.arg(&file)
		.assert()
		.success()
		.stderr(predicates::str::contains("warning:").and(predicates::str::contains(
			"tutorial ambiguous",
		)));

	Ok(())
}

#[test]
fn parse_not_found_placeholder_exits_with_one() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("missing.md");
	std::fs::write(&file, "# Not found\n\nNothing here.\n")?;

	let mut cmd = common::lessonmd_cmd();
	cmd.arg("parse")
		.arg(&file)
		.assert()
		.code(1)
		.stderr(predicates::str::contains("no tutorial available"));

	Ok(())
}

#[test]
fn parse_document_without_steps_exits_with_one() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("notes.md");
	std::fs::write(&file, "# Notes\n\nNo steps at all.\n")?;

	let mut cmd = common::lessonmd_cmd();
	cmd.arg("parse")
		.arg(&file)
		.assert()
		.code(1)
		.stderr(predicates::str::contains("no tutorial steps found"));

	Ok(())
}

#[test]
fn parse_missing_file_exits_with_two() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let mut cmd = common::lessonmd_cmd();
	cmd.arg("parse")
		.arg(tmp.path().join("nope.md"))
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to read"));

	Ok(())
}

#[test]
fn no_subcommand_exits_with_one() {
	let mut cmd = common::lessonmd_cmd();
	cmd.assert()
		.code(1)
		.stderr(predicates::str::contains("No subcommand specified"));
}
