//! Calculatrice RPN — noyau réutilisable.
//!
//! `evaluate("2+3*4") == Ok(14.0)` : scanner -> parser -> shunting-yard -> pile RPN.
//! Le binaire (egui) n’est qu’une coquille autour de ce point d’entrée.

pub mod noyau;

pub use noyau::{evaluate, evaluate_with, EvaluationError, Limites};
