//! Tables fixes du noyau : opérateurs, constantes, fonctions.
//!
//! Construites une fois (statiques / `LazyLock`), jamais modifiées ensuite :
//! plusieurs évaluations concurrentes peuvent les lire sans verrou.

use std::collections::HashMap;
use std::f64::consts;
use std::sync::LazyLock;

pub type FonctionUnaire = fn(f64) -> f64;

/// Métadonnées d’un opérateur binaire.
#[derive(Clone, Copy, Debug)]
pub struct Operateur {
    pub symbole: char,
    pub precedence: u8,
    pub assoc_droite: bool,
    pub appliquer: fn(f64, f64) -> f64,
}

static OPERATEURS: [Operateur; 5] = [
    Operateur {
        symbole: '^',
        precedence: 4,
        assoc_droite: true,
        appliquer: f64::powf,
    },
    Operateur {
        symbole: '*',
        precedence: 3,
        assoc_droite: false,
        appliquer: |x, y| x * y,
    },
    Operateur {
        symbole: '/',
        precedence: 3,
        assoc_droite: false,
        appliquer: |x, y| x / y,
    },
    Operateur {
        symbole: '+',
        precedence: 2,
        assoc_droite: false,
        appliquer: |x, y| x + y,
    },
    Operateur {
        symbole: '-',
        precedence: 2,
        assoc_droite: false,
        appliquer: |x, y| x - y,
    },
];

pub fn operateur(symbole: char) -> Option<&'static Operateur> {
    OPERATEURS.iter().find(|op| op.symbole == symbole)
}

/* ------------------------ Constantes ------------------------ */

const PHI: f64 = 1.618_033_988_749_895;

static CONSTANTES: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    HashMap::from([
        ("E", consts::E),
        ("PI", consts::PI),
        ("PHI", PHI),
        ("SQRT2", consts::SQRT_2),
        ("SQRTE", 1.648_721_270_700_128_2),
        ("SQRTPI", 1.772_453_850_905_516),
        ("SQRTPHI", 1.272_019_649_514_069),
        ("LN2", consts::LN_2),
        ("LN10", consts::LN_10),
        ("LOG2E", consts::LOG2_E),
        ("LOG10E", consts::LOG10_E),
    ])
});

/// Nom attendu en MAJUSCULES (le scanner normalise).
pub fn constante(nom: &str) -> Option<f64> {
    CONSTANTES.get(nom).copied()
}

/* ------------------------ Fonctions (unaires) ------------------------ */

static FONCTIONS: LazyLock<HashMap<&'static str, FonctionUnaire>> = LazyLock::new(|| {
    let table: [(&'static str, FonctionUnaire); 12] = [
        ("LN", f64::ln),
        ("ABS", f64::abs),
        ("COS", f64::cos),
        ("SIN", f64::sin),
        ("TAN", f64::tan),
        ("ACOS", f64::acos),
        ("ASIN", f64::asin),
        ("ATAN", f64::atan),
        ("SQRT", f64::sqrt),
        ("CBRT", f64::cbrt),
        ("CEIL", f64::ceil),
        ("FLOOR", f64::floor),
    ];
    HashMap::from(table)
});

pub fn fonction(nom: &str) -> Option<FonctionUnaire> {
    FONCTIONS.get(nom).copied()
}

/// Noms triés (pour l’UI).
pub fn noms_constantes() -> Vec<&'static str> {
    let mut noms: Vec<_> = CONSTANTES.keys().copied().collect();
    noms.sort_unstable();
    noms
}

pub fn noms_fonctions() -> Vec<&'static str> {
    let mut noms: Vec<_> = FONCTIONS.keys().copied().collect();
    noms.sort_unstable();
    noms
}
