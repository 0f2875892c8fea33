use regex::NoExpand;

use crate::patterns::SPRITE_KIND_ENUM;
use crate::patterns::SPRITE_KIND_SEPARATOR;

/// Target platforms whose snippets still need the `SpriteKind` upgrade.
pub const PATCHED_TARGETS: [&str; 2] = ["arcade", "pxt-32"];

/// Sprite kinds the runtime already declares.
pub const BUILTIN_SPRITE_KINDS: [&str; 4] = ["Player", "Projectile", "Enemy", "Food"];

/// Returns true if snippets for `target_id` are patched at all.
pub fn is_patched_target(target_id: &str) -> bool {
	PATCHED_TARGETS.contains(&target_id)
}

/// Upgrade a legacy `enum SpriteKind { ... }` declaration in a js snippet
/// (or markdown containing js snippets) to the `namespace SpriteKind` form.
///
/// ```text
/// enum SpriteKind { Player, Coin }
/// ```
///
/// becomes
///
/// ```text
/// namespace SpriteKind {
///     export const Coin = SpriteKind.create()
/// }
/// ```
///
/// Built-in kinds are dropped; when nothing is left the declaration is
/// removed. Removing a declaration can join the text around it into a new
/// one, so the rewrite is repeated until no declaration remains. Input for
/// any other target, or without the enum, is returned unchanged.
pub fn patch_arcade_snippets(target_id: &str, input: impl AsRef<str>) -> String {
	let input = input.as_ref();
	if !is_patched_target(target_id) {
		return input.to_string();
	}

	let mut patched = input.to_string();
	while let Some(next) = replace_sprite_kind_enums(&patched) {
		patched = next;
	}

	patched
}

/// A single rewrite pass. Every declaration is replaced with the namespace
/// built from the first one. Returns `None` when there is nothing to
/// replace.
///
/// A pass that emits a namespace never creates a new declaration, and a pass
/// that removes declarations shortens the text, so repeating it terminates.
fn replace_sprite_kind_enums(input: &str) -> Option<String> {
	let captures = SPRITE_KIND_ENUM.captures(input)?;
	let names = custom_sprite_kinds(captures.get(1).map_or("", |m| m.as_str()));
	tracing::trace!(?names, "patching legacy SpriteKind enum");
	let replacement = if names.is_empty() {
		String::new()
	} else {
		sprite_kind_namespace(&names)
	};

	Some(
		SPRITE_KIND_ENUM
			.replace_all(input, NoExpand(&replacement))
			.into_owned(),
	)
}

/// The names declared in an enum body that are not built in.
fn custom_sprite_kinds(body: &str) -> Vec<&str> {
	SPRITE_KIND_SEPARATOR
		.split(body)
		.map(str::trim)
		.filter(|name| name.chars().any(|c| c.is_ascii_alphabetic()))
		.filter(|name| !BUILTIN_SPRITE_KINDS.contains(name))
		.collect()
}

fn sprite_kind_namespace(names: &[&str]) -> String {
	let exports = names
		.iter()
		.map(|name| format!("    export const {name} = SpriteKind.create()"))
		.collect::<Vec<_>>()
		.join("\n");

	format!("\nnamespace SpriteKind {{\n{exports}\n}}\n")
}
