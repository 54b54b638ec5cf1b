// src/noyau/parser.rs
//
// Scanner -> liste infixe (sans Whitespace) + résolution du moins unaire.
//
// Moins unaire : un '-' devient signe du nombre qui suit si
//   - rien n’a encore été émis, ou
//   - le dernier jeton émis est un Operator ou un LParen,
// ET le jeton suivant est un Number. Sinon le '-' reste binaire et le jeton suivant
// est “rendu” (un seul emplacement suffit).

use tracing::trace;

use super::erreur::Result;
use super::jetons::{Token, TokenKind};
use super::scanner::Scanner;

pub struct Parser<I: Iterator<Item = char>> {
    scanner: Scanner<I>,
    rendu: Option<Token>,
}

impl<'a> Parser<std::str::Chars<'a>> {
    pub fn new(texte: &'a str) -> Self {
        Self::from_scanner(Scanner::new(texte))
    }

    /// Positions des jetons et des erreurs comptées à partir de `decalage`.
    pub fn avec_decalage(texte: &'a str, decalage: usize) -> Self {
        Self::from_scanner(Scanner::avec_decalage(texte, decalage))
    }
}

impl<I: Iterator<Item = char>> Parser<I> {
    pub fn from_scanner(scanner: Scanner<I>) -> Self {
        Self {
            scanner,
            rendu: None,
        }
    }

    fn scan(&mut self) -> Result<Option<Token>> {
        if let Some(tok) = self.rendu.take() {
            return Ok(Some(tok));
        }
        self.scanner.next_token()
    }

    fn unscan(&mut self, tok: Token) {
        debug_assert!(self.rendu.is_none(), "un seul jeton peut être rendu");
        self.rendu = Some(tok);
    }

    fn scan_ignore_whitespace(&mut self) -> Result<Option<Token>> {
        loop {
            match self.scan()? {
                Some(tok) if tok.is(TokenKind::Whitespace) => continue,
                autre => return Ok(autre),
            }
        }
    }

    /// Consomme toute la source et retourne la liste infixe.
    pub fn parse(mut self) -> Result<Vec<Token>> {
        let mut out: Vec<Token> = Vec::new();

        while let Some(tok) = self.scan_ignore_whitespace()? {
            if tok.operator_symbol() != Some('-') {
                out.push(tok);
                continue;
            }

            let position_unaire = match out.last() {
                None => true,
                Some(dernier) => {
                    dernier.is(TokenKind::Operator) || dernier.is(TokenKind::LParen)
                }
            };

            match self.scan_ignore_whitespace()? {
                Some(suivant) if position_unaire && suivant.is(TokenKind::Number) => {
                    let signe = suivant.negate_number(tok.position());
                    trace!(nombre = %signe, "moins unaire fusionné");
                    out.push(signe);
                }
                Some(suivant) => {
                    out.push(tok);
                    self.unscan(suivant);
                }
                None => out.push(tok),
            }
        }

        Ok(out)
    }
}

/// Raccourci : texte -> liste infixe.
pub fn parse(texte: &str) -> Result<Vec<Token>> {
    Parser::new(texte).parse()
}
