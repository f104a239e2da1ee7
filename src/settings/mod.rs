//! Configuration loading and resolution.
//!
//! `load` merges config files, environment variables and CLI flags into a
//! [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;

/// Serializes tests that read or write `SPARKBOARD__*` variables.
#[cfg(test)]
fn lock_env() -> std::sync::MutexGuard<'static, ()> {
	static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
	ENV_LOCK
		.lock()
		.unwrap_or_else(std::sync::PoisonError::into_inner)
}
