//! Réglages du noyau.
//!
//! Une seule borne aujourd’hui : la profondeur d’imbrication des arguments de fonction
//! (chaque `COS(...)` relance le pipeline complet sur son argument).

/// Profondeur par défaut : largement au-dessus d’un usage humain.
const PROFONDEUR_DEFAUT: usize = 64;

/// Plafond absolu : chaque niveau consomme plusieurs cadres de pile natifs.
const PROFONDEUR_MAX: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limites {
    // nombre maximal de niveaux `F(G(H(...)))` acceptés, jamais au-delà de PROFONDEUR_MAX
    profondeur_max: usize,
}

impl Default for Limites {
    fn default() -> Self {
        Self {
            profondeur_max: PROFONDEUR_DEFAUT,
        }
    }
}

impl Limites {
    /// Valeur ramenée dans `0..=256`.
    pub fn avec_profondeur(profondeur_max: usize) -> Self {
        Self {
            profondeur_max: profondeur_max.min(PROFONDEUR_MAX),
        }
    }

    pub fn profondeur_max(&self) -> usize {
        self.profondeur_max
    }
}
