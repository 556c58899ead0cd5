use log::{Level, Log, Metadata, Record};
use wasm_bindgen::JsValue;

pub struct Config {
	level: Level,
	/// Label each line with the log target instead of the source module path.
	prefer_target: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			level: Level::Debug,
			prefer_target: false,
		}
	}
}

impl Config {
	pub fn with_level(mut self, level: Level) -> Self {
		self.level = level;
		self
	}

	pub fn prefer_target(mut self) -> Self {
		self.prefer_target = true;
		self
	}
}

struct ConsoleLogger {
	config: Config,
}

impl ConsoleLogger {
	fn label<'r>(&self, record: &'r Record) -> &'r str {
		match (self.config.prefer_target, record.module_path()) {
			(false, Some(module)) => module,
			_ => record.target(),
		}
	}
}

impl Log for ConsoleLogger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= self.config.level
	}

	fn log(&self, record: &Record) {
		if !self.enabled(record.metadata()) {
			return;
		}
		let line = JsValue::from(format!("[{:>5}] {}: {}", record.level(), self.label(record), record.args()));
		match record.level() {
			Level::Error => web_sys::console::error_1(&line),
			Level::Warn => web_sys::console::warn_1(&line),
			Level::Info => web_sys::console::info_1(&line),
			Level::Debug => web_sys::console::log_1(&line),
			Level::Trace => web_sys::console::debug_1(&line),
		}
	}

	fn flush(&self) {}
}

/// Routes the `log` macros to the browser console. Only the first call has any effect.
pub fn init(config: Config) {
	let max_level = config.level.to_level_filter();
	if log::set_boxed_logger(Box::new(ConsoleLogger { config })).is_ok() {
		log::set_max_level(max_level);
	}
}
