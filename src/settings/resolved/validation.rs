use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.page_size == 0 {
		return Err(ConfigError::invalid(
			"browse.page_size",
			config.page_size.to_string(),
			sources.source_for_page_size(),
			"must be greater than zero",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use sparkboard::catalog::DatasetSource;

	use super::super::SettingSource;
	use super::*;

	fn config(page_size: usize) -> ResolvedConfig {
		ResolvedConfig {
			page_size,
			debounce: Duration::from_millis(300),
			projects: DatasetSource::Bundled,
			founders: DatasetSource::Bundled,
		}
	}

	#[test]
	fn validation_rejects_zero_page_size() {
		let sources = ConfigSources {
			page_size: Some(SettingSource::Environment("SPARKBOARD__BROWSE__PAGE_SIZE")),
		};

		let err = validate(&config(0), &sources).unwrap_err();
		assert!(matches!(err.key, "browse.page_size"));
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_accepts_positive_page_size() {
		assert!(validate(&config(1), &ConfigSources::default()).is_ok());
	}
}
