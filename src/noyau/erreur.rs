// src/noyau/erreur.rs
//
// Taxonomie d’erreurs du noyau.
// Toute étape retourne la PREMIÈRE erreur rencontrée ; aucune valeur partielle ne remonte.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// Caractère hors alphabet (lexème impossible).
    #[error("caractère inattendu: '{character}' (position {position})")]
    InvalidCharacter { character: char, position: usize },

    /// Compteur de parenthèses non nul (positif = '(' non fermées).
    #[error("parenthèses déséquilibrées ({count:+})")]
    UnbalancedParentheses { count: i32 },

    /// Constante ou fonction absente des tables.
    #[error("identifiant inconnu: {name}")]
    UnknownIdentifier { name: String },

    #[error("nombre invalide: {text:?}")]
    MalformedNumber { text: String },

    /// Un opérateur binaire n’a pas trouvé ses deux opérandes.
    #[error("opérande manquant pour '{operator}'")]
    MissingOperand { operator: char },

    /// Plusieurs valeurs restent sur la pile en fin d’évaluation.
    #[error("expression invalide: {count} valeurs sans opérateur")]
    SurplusOperands { count: usize },

    #[error("résultat vide")]
    EmptyResult,

    #[error("imbrication de fonctions trop profonde (limite {limit})")]
    NestingTooDeep { limit: usize },
}

pub type Result<T> = std::result::Result<T, EvaluationError>;
