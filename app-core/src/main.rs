#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> eframe::Result<()> {
    use app_core::{load_config, ProximityApp, APP_NAME};
    use eframe::{run_native, NativeOptions};
    use ip_proximity::{ApiClient, HttpBackend};
    use tokio::runtime::Handle;

    env_logger::init();

    let config = load_config();
    log::info!("using API at {}", config.api_base);

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([1280., 800.]),
        ..Default::default()
    };

    let runtime = Handle::current();
    run_native(
        APP_NAME,
        native_options,
        Box::new(move |cc| {
            let backend = HttpBackend::new(ApiClient::new(config), runtime)
                .with_repaint(cc.egui_ctx.clone());
            Ok(Box::new(ProximityApp::new(cc, backend)))
        }),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
