// src/noyau/jetons.rs

use std::fmt;

/// Catégorie d’un jeton.
///
/// Les quatre étapes (scanner, parser, rpn, eval) font un `match` sur cette étiquette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    LParen,
    RParen,
    // Nom sans parenthèse : PI, E, SQRT2...
    Constant,
    // Nom + argument capturé tel quel : "COS(3+2)"
    Function,
    Operator,
    Whitespace,
}

/// Jeton immuable : catégorie + texte (jamais vide, lexicalement valide pour sa catégorie).
///
/// Exception assumée : un `Number` peut porter un texte mal formé ("1.2.3") ;
/// l’erreur n’apparaît qu’à la conversion en flottant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    // index (en caractères) du premier caractère dans l’entrée de l’utilisateur
    position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            position: 0,
        }
    }

    pub(crate) fn avec_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Symbole d’un opérateur ('+', '-', ...). None pour les autres catégories.
    pub fn operator_symbol(&self) -> Option<char> {
        if self.kind != TokenKind::Operator {
            return None;
        }
        self.text.chars().next()
    }

    /// Moins unaire : "-" collé devant le texte d’un nombre ; le jeton commence au signe.
    pub(crate) fn negate_number(self, position_signe: usize) -> Self {
        debug_assert_eq!(self.kind, TokenKind::Number);
        Self {
            kind: TokenKind::Number,
            text: format!("-{}", self.text),
            position: position_signe,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Format utilitaire (traces / “démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::text)
        .collect::<Vec<_>>()
        .join(" ")
}
