// src/noyau/rpn.rs
//
// Shunting-yard : liste infixe -> RPN (postfix)
//
// Règles:
// - Number / Constant / Function : sortie directe (une fonction porte déjà son argument)
// - Operator v : dépile le sommet t tant que
//     (prec(v) <= prec(t) et v associatif à gauche) ou (prec(v) < prec(t) et v à droite)
//   sans jamais traverser un '('
// - '(' : compteur +1, empilé
// - ')' : compteur -1, dépile jusqu’au '(' (jeté, jamais émis)
// - fin : la pile est vidée dans la sortie, sommet d’abord
//
// NOTE:
// - Le compteur de parenthèses est vérifié à la fin seulement ; la sortie partielle
//   n’est jamais rendue en cas d’erreur.

use super::erreur::{EvaluationError, Result};
use super::jetons::{Token, TokenKind};
use super::tables::operateur;

fn precedence(t: &Token) -> u8 {
    t.operator_symbol()
        .and_then(operateur)
        .map_or(0, |op| op.precedence)
}

fn is_right_associative(t: &Token) -> bool {
    t.operator_symbol()
        .and_then(operateur)
        .is_some_and(|op| op.assoc_droite)
}

/// Convertit une liste infixe en RPN (notation polonaise inversée).
///
/// Exemple:
///   infixe: 2 + 3 * 4
///   rpn:    2 3 4 * +
pub fn reorder(infix: Vec<Token>) -> Result<Vec<Token>> {
    let mut out: Vec<Token> = Vec::with_capacity(infix.len());
    let mut ops: Vec<Token> = Vec::new();

    // +1 par '(' , -1 par ')'
    let mut equilibre: i32 = 0;

    for tok in infix {
        match tok.kind() {
            TokenKind::Number | TokenKind::Constant | TokenKind::Function => out.push(tok),

            TokenKind::Operator => {
                let p_tok = precedence(&tok);
                let droite = is_right_associative(&tok);

                while let Some(top) = ops.last() {
                    if top.is(TokenKind::LParen) {
                        break;
                    }

                    let p_top = precedence(top);
                    let doit_pop = if droite { p_tok < p_top } else { p_tok <= p_top };
                    if !doit_pop {
                        break;
                    }

                    out.extend(ops.pop());
                }

                ops.push(tok);
            }

            TokenKind::LParen => {
                equilibre += 1;
                ops.push(tok);
            }

            TokenKind::RParen => {
                equilibre -= 1;
                while let Some(top) = ops.pop() {
                    if top.is(TokenKind::LParen) {
                        break;
                    }
                    out.push(top);
                }
            }

            // le parser les a déjà retirés
            TokenKind::Whitespace => {}
        }
    }

    // vide la pile ops (ordre de dépilement)
    while let Some(op) = ops.pop() {
        out.push(op);
    }

    if equilibre != 0 {
        return Err(EvaluationError::UnbalancedParentheses { count: equilibre });
    }

    Ok(out)
}
