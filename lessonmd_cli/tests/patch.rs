mod common;

use lessonmd_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;
use rstest::rstest;

const SNIPPET: &str = "enum SpriteKind {\n    Player,\n    Coin\n}\nlet x = 1\n";

#[rstest]
#[case::arcade("arcade")]
#[case::pxt_32("pxt-32")]
fn patch_rewrites_for_gated_targets(#[case] target: &str) -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("snippet.ts");
	std::fs::write(&file, SNIPPET)?;

	let mut cmd = common::lessonmd_cmd();
	cmd.arg("--path")
		.arg(tmp.path())
		.arg("patch")
		.arg(&file)
		.arg("--target")
		.arg(target)
		.assert()
		.success()
		.stdout(predicates::str::contains(
			"namespace SpriteKind {\n    export const Coin = SpriteKind.create()\n}",
		))
		.stdout(predicates::str::contains("enum").not());

	Ok(())
}

#[test]
fn patch_uses_configured_target() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("snippet.ts");
	std::fs::write(&file, SNIPPET)?;
	std::fs::write(tmp.path().join("lessonmd.toml"), "target = \"arcade\"\n")?;

	let mut cmd = common::lessonmd_cmd();
	cmd.arg("--path")
		.arg(tmp.path())
		.arg("patch")
		.arg(&file)
		.assert()
		.success()
		.stdout(predicates::str::contains("export const Coin"));

	Ok(())
}

#[test]
fn patch_leaves_other_targets_unchanged() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("snippet.ts");
	std::fs::write(&file, SNIPPET)?;

	let mut cmd = common::lessonmd_cmd();
	cmd.arg("--path")
		.arg(tmp.path())
		.arg("patch")
		.arg(&file)
		.arg("--target")
		.arg("microbit")
		.assert()
		.success()
		.stdout(SNIPPET);

	Ok(())
}

#[test]
fn patch_respects_disabled_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("snippet.ts");
	std::fs::write(&file, SNIPPET)?;
	std::fs::write(
		tmp.path().join("lessonmd.toml"),
		"target = \"arcade\"\n\n[patch]\nenabled = false\n",
	)?;

	let mut cmd = common::lessonmd_cmd();
	cmd.arg("--path")
		.arg(tmp.path())
		.arg("patch")
		.arg(&file)
		.assert()
		.success()
		.stdout(SNIPPET);

	Ok(())
}

#[test]
fn patch_diff_shows_changed_lines() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("snippet.ts");
	std::fs::write(&file, SNIPPET)?;

	let mut cmd = common::lessonmd_cmd();
	cmd.arg("--path")
		.arg(tmp.path())
		.arg("patch")
		.arg(&file)
		.arg("--target")
		.arg("arcade")
		.arg("--diff")
		.assert()
		.success()
		.stdout(predicates::str::contains("-enum SpriteKind {"))
		.stdout(predicates::str::contains("+namespace SpriteKind {"))
		.stdout(predicates::str::contains(" let x = 1"));

	Ok(())
}

#[test]
fn patch_diff_reports_up_to_date_snippet() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("snippet.ts");
	std::fs::write(&file, "let x = 1\n")?;

	let mut cmd = common::lessonmd_cmd();
	cmd.arg("--path")
		.arg(tmp.path())
		.arg("patch")
		.arg(&file)
		.arg("--target")
		.arg("arcade")
		.arg("--diff")
		.assert()
		.success()
		.stdout(predicates::str::contains("already up to date"));

	Ok(())
}

#[test]
fn patch_reports_invalid_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("snippet.ts");
	std::fs::write(&file, SNIPPET)?;
	std::fs::write(tmp.path().join("lessonmd.toml"), "target = [\n")?;

	let mut cmd = common::lessonmd_cmd();
	cmd.arg("--path")
		.arg(tmp.path())
		.arg("patch")
		.arg(&file)
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to parse config file"));

	Ok(())
}
