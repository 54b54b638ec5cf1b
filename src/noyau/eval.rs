//! Noyau — évaluation (pipeline réel)
//!
//! texte -> parser (infixe, moins unaire) -> shunting-yard (RPN) -> pile d’opérandes -> f64
//!
//! Une fonction `NOM(ARGS)` relance le pipeline complet sur `ARGS`, avec un état neuf
//! (nouvelles listes, nouvelles piles). Seule la profondeur est transmise.

use tracing::{debug, trace};

use super::erreur::{EvaluationError, Result};
use super::jetons::{format_tokens, Token, TokenKind};
use super::limites::Limites;
use super::parser::{parse, Parser};
use super::rpn::reorder;
use super::tables::{constante, fonction, operateur};

/// Trace lisible du pipeline (panneau “Démarche” de l’UI).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub demarche: Demarche,
}

/// API publique : évalue une expression avec les limites par défaut.
pub fn evaluate(texte: &str) -> Result<f64> {
    evaluate_with(texte, &Limites::default())
}

pub fn evaluate_with(texte: &str, limites: &Limites) -> Result<f64> {
    let valeur = resoudre(texte, limites, 0, 0)?;
    debug!(expression = texte, valeur, "évaluation terminée");
    Ok(valeur)
}

/// Comme `evaluate_with`, mais garde les listes infixe et RPN formatées.
pub fn evaluate_detailed(texte: &str, limites: &Limites) -> Result<Evaluation> {
    let infixe = parse(texte)?;
    let jetons = format_tokens(&infixe);

    let postfixe = reorder(infixe)?;
    let rpn = format_tokens(&postfixe);

    let valeur = evaluer_postfixe(&postfixe, limites, 0)?;
    debug!(expression = texte, %rpn, valeur, "évaluation détaillée terminée");

    Ok(Evaluation {
        valeur,
        demarche: Demarche { jetons, rpn },
    })
}

/// Évalue une liste déjà en RPN (limites par défaut pour les arguments de fonction).
pub fn evaluate_postfix(postfix: &[Token]) -> Result<f64> {
    evaluer_postfixe(postfix, &Limites::default(), 0)
}

/* ------------------------ Pipeline ------------------------ */

/// `decalage` : index (en caractères) de `texte` dans l’entrée de l’utilisateur.
fn resoudre(texte: &str, limites: &Limites, profondeur: usize, decalage: usize) -> Result<f64> {
    let infixe = Parser::avec_decalage(texte, decalage).parse()?;
    debug!(profondeur, jetons = infixe.len(), "liste infixe");

    let postfixe = reorder(infixe)?;
    debug!(profondeur, rpn = %format_tokens(&postfixe), "liste postfixe");

    evaluer_postfixe(&postfixe, limites, profondeur)
}

fn evaluer_postfixe(postfix: &[Token], limites: &Limites, profondeur: usize) -> Result<f64> {
    let mut pile: Vec<f64> = Vec::with_capacity(postfix.len());

    for tok in postfix {
        match tok.kind() {
            TokenKind::Number => pile.push(parse_nombre(tok.text())?),

            TokenKind::Constant => {
                let v = constante(tok.text()).ok_or_else(|| EvaluationError::UnknownIdentifier {
                    name: tok.text().to_string(),
                })?;
                pile.push(v);
            }

            TokenKind::Function => pile.push(resoudre_fonction(tok, limites, profondeur)?),

            TokenKind::Operator => {
                let symbole = tok.operator_symbol().unwrap_or('?');
                let op = operateur(symbole).ok_or_else(|| EvaluationError::UnknownIdentifier {
                    name: tok.text().to_string(),
                })?;

                // sommet = opérande de droite
                let manque = EvaluationError::MissingOperand { operator: symbole };
                let y = pile.pop().ok_or_else(|| manque.clone())?;
                let x = pile.pop().ok_or(manque)?;

                pile.push((op.appliquer)(x, y));
            }

            // Un '(' ou ')' ne survit au shunting-yard que si l’équilibre est faux.
            TokenKind::LParen => return Err(EvaluationError::UnbalancedParentheses { count: 1 }),
            TokenKind::RParen => return Err(EvaluationError::UnbalancedParentheses { count: -1 }),

            TokenKind::Whitespace => {}
        }
    }

    match pile.len() {
        0 => Err(EvaluationError::EmptyResult),
        1 => Ok(pile[0]),
        n => Err(EvaluationError::SurplusOperands { count: n }),
    }
}

/// `NOM(ARGS)` : coupe au premier '(' et à la ')' qui lui répond.
fn resoudre_fonction(tok: &Token, limites: &Limites, profondeur: usize) -> Result<f64> {
    let texte = tok.text();
    let inconnu = || EvaluationError::UnknownIdentifier {
        name: texte.to_string(),
    };

    let ouvre = texte.find('(').ok_or_else(inconnu)?;
    let ferme = parenthese_appariee(texte, ouvre).ok_or_else(inconnu)?;
    if ferme + 1 != texte.len() {
        // "COS(1)X", "COS(1)X(2)" : rien n’est accepté après l’argument
        return Err(inconnu());
    }

    let nom = &texte[..ouvre];
    let f = fonction(nom).ok_or_else(|| EvaluationError::UnknownIdentifier {
        name: nom.to_string(),
    })?;

    let brut = &texte[ouvre + 1..ferme];
    let args = brut.trim_matches([' ', '\t', '\n']);
    let x = if est_litteral(args) {
        parse_nombre(args)?
    } else {
        let suivante = profondeur + 1;
        if suivante > limites.profondeur_max() {
            return Err(EvaluationError::NestingTooDeep {
                limit: limites.profondeur_max(),
            });
        }
        // ASCII jusqu’à l’argument : octets = caractères
        let ecartes = brut.len() - brut.trim_start_matches([' ', '\t', '\n']).len();
        let decalage = tok.position() + ouvre + 1 + ecartes;
        trace!(fonction = nom, argument = args, profondeur = suivante, "argument composé");
        resoudre(args, limites, suivante, decalage)?
    };

    Ok(f(x))
}

/// Index (en octets) de la ')' qui ferme le '(' situé en `ouvre`.
fn parenthese_appariee(texte: &str, ouvre: usize) -> Option<usize> {
    let mut profondeur = 0usize;
    for (i, c) in texte[ouvre..].char_indices() {
        match c {
            '(' => profondeur += 1,
            ')' => {
                profondeur -= 1;
                if profondeur == 0 {
                    return Some(ouvre + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Argument “nombre seul” : chiffres et points uniquement (pas de relance du pipeline).
fn est_litteral(args: &str) -> bool {
    !args.is_empty() && args.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn parse_nombre(texte: &str) -> Result<f64> {
    texte
        .parse::<f64>()
        .map_err(|_| EvaluationError::MalformedNumber {
            text: texte.to_string(),
        })
}
