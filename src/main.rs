// src/main.rs
//
// Calculatrice RPN : point d’entrée natif
// ---------------------------------------
// - journalisation : env_logger (filtre via RUST_LOG)
// - réglages       : CALC_PROFONDEUR_MAX (profondeur d’imbrication)
// - fenêtre        : eframe::run_native

use eframe::egui;

use calculatrice_rpn::Reglages;

mod app;

use app::AppCalc;

const TITRE_APP: &str = "Calculatrice RPN";

fn main() -> eframe::Result<()> {
    env_logger::init();

    let reglages = Reglages::depuis_env();
    log::info!(
        "démarrage, imbrication max {} niveaux",
        reglages.profondeur_max()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([460.0, 640.0])
            .with_min_inner_size([380.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::avec_reglages(reglages)))),
    )
}
