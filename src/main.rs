use token_relay::logging;

fn main() {
	console_error_panic_hook::set_once();
	logging::wasm::init(
		logging::wasm::Config::default()
			.with_level(logging::Level::Info)
			.prefer_target(),
	);
	token_relay::web::start();
}
