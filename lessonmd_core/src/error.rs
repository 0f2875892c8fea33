use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum TutorialError {
	#[error(transparent)]
	#[diagnostic(code(lessonmd::io_error))]
	Io(#[from] std::io::Error),

	#[error("tutorial not found")]
	#[diagnostic(
		code(lessonmd::not_found),
		help("the document is a `# Not found` placeholder for a missing tutorial")
	)]
	NotFound,

	#[error("no tutorial steps found")]
	#[diagnostic(
		code(lessonmd::no_steps),
		help("start each step with a `## Step title` heading (or `###` for legacy tutorials)")
	)]
	NoSteps,

	#[error("found {fragments} step bodies but {headings} step headings")]
	#[diagnostic(
		code(lessonmd::step_count_mismatch),
		help("check that every step heading is on its own line")
	)]
	StepCountMismatch { fragments: usize, headings: usize },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(lessonmd::config_parse),
		help("check that lessonmd.toml is valid TOML with a `target` key and/or a [patch] section")
	)]
	ConfigParse(String),
}

pub type TutorialResult<T> = Result<T, TutorialError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
