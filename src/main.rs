// src/main.rs
//
// Coquille graphique de calculatrice_rpn : tout le calcul vit dans `noyau`.
// Natif : subscriber tracing puis fenêtre eframe. wasm32 : démarrage sur
// <canvas id="the_canvas_id">, sans journalisation.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice RPN";

/* ------------------------ Journalisation (natif) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    use tracing_subscriber::{
        filter::{LevelFilter, Targets},
        fmt::Layer,
        prelude::*,
    };

    tracing_subscriber::registry()
        .with(
            Layer::new().with_writer(std::io::stdout).with_filter(
                Targets::new()
                    .with_default(LevelFilter::INFO)
                    .with_target("calculatrice_rpn", LevelFilter::DEBUG),
            ),
        )
        .init();
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    init_logging();
    tracing::info!("démarrage {TITRE_APP}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([520.0, 640.0])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(TITRE_APP, options, Box::new(|_cc| Ok(creer_app())))
}

/// Même état initial en natif et en web.
fn creer_app() -> Box<dyn eframe::App> {
    Box::<AppCalc>::default()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{creer_app, TITRE_APP};

    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::HtmlCanvasElement;

    const CANVAS_ID: &str = "the_canvas_id";

    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), JsValue> {
        let canvas = canvas_de_la_page()?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(creer_app())),
            )
            .await
    }

    /// Renomme l’onglet au passage.
    fn canvas_de_la_page() -> Result<HtmlCanvasElement, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("page sans document"))?;
        document.set_title(TITRE_APP);

        document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("pas de <canvas id=\"the_canvas_id\">"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("the_canvas_id n’est pas un <canvas>"))
    }
}
