//! Validates and pretty prints the generated source
use std::{
	io::Write,
	process::{
		Command,
		Stdio,
	},
};

use tracing::debug;

use crate::error::{GenError, GenResult};

/// How the generated source is laid out before printing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatStyle {
	/// prettyplease, no external tools needed
	#[default]
	Pretty,
	/// the `rustfmt` binary on the PATH
	Rustfmt,
	/// syntax checked but otherwise left as emitted
	Ugly,
}

/// Parses `source` as a Rust file and lays it out according to `style`
///
/// Source that does not parse is always a [`GenError::Format`], whatever the style.
pub fn format_rust(source: &str, style: FormatStyle) -> GenResult<String> {
	let file = syn::parse_file(source).map_err(|e| GenError::format(e.to_string()))?;
	debug!(items = file.items.len(), ?style, "parsed generated source");

	match style {
		FormatStyle::Pretty => Ok(prettyplease::unparse(&file)),
		FormatStyle::Rustfmt => rustfmt(source),
		FormatStyle::Ugly => Ok(source.to_owned()),
	}
}

fn rustfmt(value: &str) -> GenResult<String> {
	let mut proc = Command::new("rustfmt").arg("--emit=stdout")
		.arg("--edition=2021")
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.map_err(|e| GenError::format(format!("failed to spawn rustfmt: {}", e)))?;

	{
		let stdin = proc.stdin.as_mut()
			.ok_or_else(|| GenError::format("rustfmt stdin was not captured"))?;
		stdin.write_all(value.as_bytes())
			.map_err(|e| GenError::format(format!("failed to write to rustfmt: {}", e)))?;
	}

	let output = proc.wait_with_output()
		.map_err(|e| GenError::format(format!("rustfmt did not finish: {}", e)))?;
	if !output.status.success() {
		return Err(GenError::format(format!(
			"rustfmt exited with {}: {}",
			output.status,
			String::from_utf8_lossy(&output.stderr).trim(),
		)));
	}
	String::from_utf8(output.stdout)
		.map_err(|e| GenError::format(format!("rustfmt produced invalid UTF-8: {}", e)))
}
