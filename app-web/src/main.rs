use datebook::Config;
use wasm_bindgen::throw_str;

pub fn main() {
    console_error_panic_hook::set_once();

    let config = Config::from_document();
    let max_level = config
        .as_ref()
        .map(Config::max_level)
        .unwrap_or(tracing::Level::INFO);
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(max_level)
            .build(),
    );

    let config = config.unwrap_or_else(|err| {
        tracing::warn!("invalid configuration, using defaults: {err}");
        Config::default()
    });

    match datebook::start(&config) {
        Ok(mounted) => tracing::info!(
            selector = %mounted.selector,
            components = ?mounted.manifest.components,
            "application started"
        ),
        Err(err) => {
            tracing::error!("failed to start application: {err}");
            throw_str(&err.to_string());
        }
    }
}
