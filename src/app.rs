// src/app.rs
//
// État (etat.rs) + vue egui (vue.rs) de la calculatrice.

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Échap = bouton "C" ; Entrée reste dans la vue (focus du champ)
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.clear_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| self.ui(ui));
    }
}
