use anyhow::{Context, Result};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Merge config files, `SPARKBOARD__*` variables and CLI flags, then resolve
/// the `[browse]` and `[dataset]` sections.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let merged = build_config(cli)?;
	let mut raw: RawConfig = merged
		.try_deserialize()
		.context("failed to deserialize configuration")?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::env;
	use std::io::Write;

	use clap::Parser;
	use tempfile::NamedTempFile;

	use super::super::lock_env;
	use super::*;

	const PAGE_SIZE_ENV: &str = "SPARKBOARD__BROWSE__PAGE_SIZE";

	fn with_page_size_env<R>(value: &str, run: impl FnOnce() -> R) -> R {
		let _guard = lock_env();
		// SAFETY: environment access in this crate's tests is serialized by `lock_env`.
		unsafe {
			env::set_var(PAGE_SIZE_ENV, value);
		}
		let result = run();
		// SAFETY: as above.
		unsafe {
			env::remove_var(PAGE_SIZE_ENV);
		}
		result
	}

	#[test]
	fn malformed_value_keeps_its_key_in_the_error_chain() {
		let _guard = lock_env();
		let mut file = NamedTempFile::with_suffix(".toml").expect("temp file");
		writeln!(file, "[browse]\npage_size = \"x\"").expect("write");
		let path = file.path().display().to_string();
		let cli = CliArgs::parse_from(["sparkboard", "--no-config", "--config", path.as_str()]);

		let err = load(&cli).unwrap_err();
		assert_eq!(err.to_string(), "failed to deserialize configuration");
		assert!(err.chain().count() > 1);
		assert!(format!("{err:#}").contains("page_size"));
	}

	#[test]
	fn environment_variable_sets_page_size() {
		let cli = CliArgs::parse_from(["sparkboard", "--no-config"]);
		let resolved = with_page_size_env("7", || load(&cli)).expect("config loads");
		assert_eq!(resolved.page_size, 7);
	}

	#[test]
	fn cli_flag_beats_environment_variable() {
		let cli = CliArgs::parse_from(["sparkboard", "--no-config", "--page-size", "3"]);
		let resolved = with_page_size_env("7", || load(&cli)).expect("config loads");
		assert_eq!(resolved.page_size, 3);
	}

	#[test]
	fn zero_from_environment_names_the_variable() {
		let cli = CliArgs::parse_from(["sparkboard", "--no-config"]);
		let err = with_page_size_env("0", || load(&cli)).unwrap_err();
		assert!(
			err.to_string()
				.contains("environment variable `SPARKBOARD__BROWSE__PAGE_SIZE`")
		);
	}
}
