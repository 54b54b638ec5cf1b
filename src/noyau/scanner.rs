// src/noyau/scanner.rs
//
// Lecture caractère par caractère -> jetons classés, à la demande.
//
// Règles (sur le prochain caractère non consommé) :
// - chiffre      : suite gloutonne de chiffres et de '.' -> Number (pas de contrôle du nombre de '.')
// - lettre       : mot [A-Z0-9]* ; un '(' au milieu du mot capture tout jusqu’à la ')' appariée
//                  -> Function si le texte contient une parenthèse, sinon Constant (en MAJUSCULES)
// - + - * / ^    : Operator (un caractère)
// - espace       : suite gloutonne -> Whitespace
// - ( )          : LParen / RParen
// - autre        : erreur
//
// La séquence n’est PAS rejouable : pour relire, recréer un Scanner sur la même source.

use std::str::Chars;

use super::erreur::{EvaluationError, Result};
use super::jetons::{Token, TokenKind};

pub struct Scanner<I: Iterator<Item = char>> {
    source: I,
    // lookahead d’un caractère (lu puis “rendu”)
    rendu: Option<char>,
    // index du prochain caractère à lire, compté depuis le début de l’entrée utilisateur
    position: usize,
}

impl<'a> Scanner<Chars<'a>> {
    pub fn new(texte: &'a str) -> Self {
        Self::from_chars(texte.chars())
    }

    /// `texte` commence à l’index `decalage` de l’entrée (argument de fonction).
    pub fn avec_decalage(texte: &'a str, decalage: usize) -> Self {
        let mut s = Self::from_chars(texte.chars());
        s.position = decalage;
        s
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn from_chars(source: I) -> Self {
        Self {
            source,
            rendu: None,
            position: 0,
        }
    }

    fn read(&mut self) -> Option<char> {
        let c = self.rendu.take().or_else(|| self.source.next());
        if c.is_some() {
            self.position += 1;
        }
        c
    }

    fn unread(&mut self, c: char) {
        debug_assert!(self.rendu.is_none(), "un seul caractère peut être rendu");
        self.rendu = Some(c);
        self.position -= 1;
    }

    /// Prochain jeton, `Ok(None)` en fin de source.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        let debut = self.position;
        let Some(c) = self.read() else {
            return Ok(None);
        };

        let tok = match c {
            '(' => Token::new(TokenKind::LParen, "("),
            ')' => Token::new(TokenKind::RParen, ")"),
            '+' | '-' | '*' | '/' | '^' => Token::new(TokenKind::Operator, c.to_string()),
            _ if c.is_ascii_digit() => {
                let texte = self.scan_tant_que(c, |x| x.is_ascii_digit() || x == '.');
                Token::new(TokenKind::Number, texte)
            }
            _ if c.is_ascii_alphabetic() => self.scan_word(c)?,
            _ if est_espace(c) => {
                let texte = self.scan_tant_que(c, est_espace);
                Token::new(TokenKind::Whitespace, texte)
            }
            _ => {
                return Err(EvaluationError::InvalidCharacter {
                    character: c,
                    position: debut,
                })
            }
        };

        Ok(Some(tok.avec_position(debut)))
    }

    /// Consomme `premier` puis tout ce qui satisfait `garder` ; rend le premier refusé.
    fn scan_tant_que(&mut self, premier: char, garder: impl Fn(char) -> bool) -> String {
        let mut buf = String::new();
        buf.push(premier);

        while let Some(c) = self.read() {
            if !garder(c) {
                self.unread(c);
                break;
            }
            buf.push(c);
        }

        buf
    }

    fn scan_word(&mut self, premier: char) -> Result<Token> {
        let mut buf = String::new();
        buf.push(premier);

        while let Some(c) = self.read() {
            if c == '(' {
                buf.push(c);
                self.capture_argument(&mut buf)?;
            } else if c.is_ascii_alphanumeric() {
                buf.push(c);
            } else {
                self.unread(c);
                break;
            }
        }

        let texte = buf.to_ascii_uppercase();
        let kind = if texte.contains(['(', ')']) {
            TokenKind::Function
        } else {
            TokenKind::Constant
        };

        Ok(Token::new(kind, texte))
    }

    /// Le '(' ouvrant est déjà dans `buf` : copie tout jusqu’à la ')' appariée incluse.
    fn capture_argument(&mut self, buf: &mut String) -> Result<()> {
        let mut profondeur: i32 = 1;

        while profondeur > 0 {
            let Some(c) = self.read() else {
                return Err(EvaluationError::UnbalancedParentheses { count: profondeur });
            };
            match c {
                '(' => profondeur += 1,
                ')' => profondeur -= 1,
                _ => {}
            }
            buf.push(c);
        }

        Ok(())
    }
}

/// Seuls espace, tabulation et saut de ligne séparent les jetons.
fn est_espace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

impl<I: Iterator<Item = char>> Iterator for Scanner<I> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
