// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Boutons constantes / fonctions générés depuis les tables du noyau

use eframe::egui;

use calculatrice_rpn::noyau::{evaluate_detailed, tables, Limites};

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: ((2*(5+3))+4)*(300/100), cos(3+2), 2^3^2")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
            self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for s in ["(", ")", "+", "-", "*", "/", "^"] {
                self.bouton_insert(ui, s, s);
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(4.0);

        ui.horizontal_wrapped(|ui| {
            for nom in tables::noms_fonctions() {
                let insert = format!("{}(", nom.to_ascii_lowercase());
                self.bouton_insert(ui, &nom.to_ascii_lowercase(), &insert);
            }
        });

        ui.horizontal_wrapped(|ui| {
            for nom in tables::noms_constantes() {
                self.bouton_insert(ui, nom, nom);
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_rpn")
            .num_columns(3)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in ["789", "456", "123", "0."] {
                    for touche in ligne.chars() {
                        let t = touche.to_string();
                        self.bouton_insert(ui, &t, &t);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => {
                    self.entree.pop();
                }
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.entree.push_str(to_insert);
            self.focus_entree = true;
        }
    }

    /// Évalue l’entrée via le noyau, puis dépose résultat/démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        match evaluate_detailed(&self.entree, &Limites::default()) {
            Ok(ev) => self.set_resultat(ev.valeur, ev.demarche),
            Err(e) => {
                tracing::debug!(entree = %self.entree, erreur = %e, "évaluation refusée");
                self.set_erreur(e.to_string());
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
