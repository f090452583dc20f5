#![cfg(target_arch = "wasm32")]
use app_core::{load_config, ProximityApp};
use ip_proximity::{ApiClient, HttpBackend};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

const CANVAS_ID: &str = "the_canvas_id";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        if let Err(err) = run().await {
            log::error!("failed to start the visualizer: {err:?}");
        }
    });
    Ok(())
}

#[wasm_bindgen]
pub async fn run() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("canvas with id 'the_canvas_id' not found"))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("failed to cast to HtmlCanvasElement"))?;

    let config = load_config();
    log::info!("using API at {}", config.api_base);

    let web_options = eframe::WebOptions::default();
    eframe::WebRunner::new()
        .start(
            canvas,
            web_options,
            Box::new(move |cc| {
                let backend =
                    HttpBackend::new(ApiClient::new(config)).with_repaint(cc.egui_ctx.clone());
                Ok::<Box<dyn eframe::App>, _>(Box::new(ProximityApp::new(cc, backend)))
            }),
        )
        .await?;
    Ok(())
}
