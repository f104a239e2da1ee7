use sparkboard::catalog::DatasetSource;

use super::super::util::display_path;
use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	vec![
		"Effective configuration:".to_string(),
		format!("  Page size: {}", config.page_size),
		format!("  Search debounce: {}ms", config.debounce.as_millis()),
		format!("  Projects dataset: {}", describe(&config.projects)),
		format!("  Founders dataset: {}", describe(&config.founders)),
	]
}

fn describe(source: &DatasetSource) -> String {
	match source {
		DatasetSource::Bundled => source.to_string(),
		DatasetSource::File(path) => display_path(path),
	}
}
