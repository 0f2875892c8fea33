use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::TutorialError;
use crate::TutorialResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"lessonmd.toml",
	".lessonmd.toml",
	".config/lessonmd.toml",
];

/// Configuration loaded from a `lessonmd.toml` file.
///
/// ```toml
/// target = "arcade"
///
/// [patch]
/// enabled = true
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct LessonConfig {
	/// Identifier of the target platform the tutorials are written for. Gates
	/// snippet patching.
	#[serde(default)]
	pub target: Option<String>,
	/// Snippet patching configuration.
	#[serde(default)]
	pub patch: PatchConfig,
}

/// Controls rewriting of legacy snippets.
///
/// ```toml
/// [patch]
/// enabled = false
/// ```
#[derive(Debug, Deserialize)]
pub struct PatchConfig {
	/// When false, snippets are never rewritten regardless of the target.
	#[serde(default = "default_patch_enabled")]
	pub enabled: bool,
}

impl Default for PatchConfig {
	fn default() -> Self {
		Self {
			enabled: default_patch_enabled(),
		}
	}
}

fn default_patch_enabled() -> bool {
	true
}

impl LessonConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> TutorialResult<Option<LessonConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::from_toml(&content)?;
		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	/// Parse a config from TOML source.
	pub fn from_toml(content: &str) -> TutorialResult<LessonConfig> {
		toml::from_str(content).map_err(|e| TutorialError::ConfigParse(e.to_string()))
	}

	/// The configured target platform identifier.
	pub fn target_id(&self) -> Option<&str> {
		self.target.as_deref()
	}

	/// The target to patch snippets for, preferring `override_target` over
	/// the configured one. `None` when patching is disabled or no target is
	/// known.
	pub fn patch_target<'a>(&'a self, override_target: Option<&'a str>) -> Option<&'a str> {
		if !self.patch.enabled {
			return None;
		}

		override_target.or(self.target_id())
	}
}
