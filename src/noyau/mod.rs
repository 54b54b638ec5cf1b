//! Noyau d’évaluation flottante
//!
//! Organisation interne :
//! - jetons.rs   : Token / TokenKind + formatage
//! - scanner.rs  : caractères -> jetons (à la demande)
//! - parser.rs   : jetons -> liste infixe (moins unaire, un jeton rendu au plus)
//! - rpn.rs      : shunting-yard (infixe -> RPN) + équilibre des parenthèses
//! - tables.rs   : opérateurs, constantes, fonctions (lecture seule)
//! - eval.rs     : pile d’opérandes + récursion sur les arguments de fonction
//! - erreur.rs   : taxonomie d’erreurs
//! - limites.rs  : réglages (profondeur d’imbrication)

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod limites;
pub mod parser;
pub mod rpn;
pub mod scanner;
pub mod tables;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::EvaluationError;
pub use eval::{evaluate, evaluate_detailed, evaluate_postfix, evaluate_with, Demarche, Evaluation};
pub use jetons::{Token, TokenKind};
pub use limites::Limites;
