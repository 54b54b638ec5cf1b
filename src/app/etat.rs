//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

use calculatrice_rpn::noyau::Demarche;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,

    // --- démarche (jetons infixes + RPN) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Choix UX : on CONSERVE le dernier résultat, la démarche n’est plus fiable.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    pub fn set_resultat(&mut self, valeur: f64, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = format_valeur(valeur);
        self.demarche = demarche;
        self.focus_entree = true;
    }
}

/// Entiers sans ".0", le reste tel que Rust l’affiche (plus court aller-retour).
fn format_valeur(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}
