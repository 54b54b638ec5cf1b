//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - expressions bien formées : Ok, et même résultat (bit à bit) à chaque appel
//! - expressions abîmées : Ok ou Err, jamais de panique

use std::time::{Duration, Instant};

use super::erreur::EvaluationError;
use super::{evaluate, evaluate_with, Limites};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

const CONSTANTES: [&str; 4] = ["pi", "E", "phi", "sqrt2"];
const FONCTIONS: [&str; 6] = ["cos", "sin", "abs", "atan", "floor", "cbrt"];
const OPERATEURS: [char; 5] = ['+', '-', '*', '/', '^'];

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(100);
    let n = if rng.coin() {
        format!("{entier}.{}", rng.pick(100))
    } else {
        format!("{entier}")
    };
    // moins unaire ponctuel
    if rng.pick(4) == 0 {
        format!("-{n}")
    } else {
        n
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(4) {
        0 => CONSTANTES[rng.pick(CONSTANTES.len() as u32) as usize].to_string(),
        _ => gen_nombre(rng),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(6) {
        0 => gen_atom(rng),
        1 => format!("({})", gen_expr(rng, depth - 1)),
        2 => {
            let f = FONCTIONS[rng.pick(FONCTIONS.len() as u32) as usize];
            format!("{f}({})", gen_expr(rng, depth - 1))
        }
        _ => {
            let op = OPERATEURS[rng.pick(OPERATEURS.len() as u32) as usize];
            // espaces autour de l’opérateur : le moins unaire reste lisible
            format!(
                "{} {op} {}",
                gen_expr(rng, depth - 1),
                gen_expr(rng, depth - 1)
            )
        }
    }
}

/// Abîme une expression : insertion, suppression ou doublement d’un caractère.
fn abime(rng: &mut Rng, expr: &str) -> String {
    const POISON: [char; 8] = ['(', ')', '+', '*', '.', '$', 'x', ' '];

    let mut chars: Vec<char> = expr.chars().collect();
    if chars.is_empty() {
        return POISON[rng.pick(POISON.len() as u32) as usize].to_string();
    }

    let i = rng.pick(chars.len() as u32) as usize;
    match rng.pick(3) {
        0 => chars.insert(i, POISON[rng.pick(POISON.len() as u32) as usize]),
        1 => {
            chars.remove(i);
        }
        _ => {
            let c = chars[i];
            chars.insert(i, c);
        }
    }
    chars.into_iter().collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bien_formees_deterministes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties
    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let a = evaluate(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        let b = evaluate(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert_eq!(a.to_bits(), b.to_bits(), "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_expressions_abimees_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let saine = gen_expr(&mut rng, 3);
        let expr = abime(&mut rng, &saine);

        // l’erreur doit être identique d’un appel à l’autre
        match (evaluate(&expr), evaluate(&expr)) {
            (Ok(a), Ok(b)) => {
                assert_eq!(a.to_bits(), b.to_bits(), "expr={expr:?}");
                seen_ok += 1;
            }
            (Err(a), Err(b)) => {
                assert_eq!(a, b, "expr={expr:?}");
                seen_err += 1;
            }
            (a, b) => panic!("expr={expr:?} résultats divergents: {a:?} / {b:?}"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 0, "aucun succès: fuzz trop destructeur");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_somme_longue_sans_recursion() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // 2000 termes : le pipeline est itératif hors arguments de fonction
    let expr = vec!["0.5"; 2000].join("+");
    budget(t0, max);

    assert_eq!(evaluate(&expr), Ok(1000.0));
}

#[test]
fn fuzz_safe_imbrication_profonde_bornee() {
    let mut expr = "1".to_string();
    for _ in 0..200 {
        expr = format!("abs({expr}*1)");
    }

    assert_eq!(
        evaluate(&expr),
        Err(EvaluationError::NestingTooDeep { limit: 64 })
    );
    assert_eq!(evaluate_with(&expr, &Limites::avec_profondeur(256)), Ok(1.0));
}

#[test]
fn fuzz_safe_limite_demandee_trop_haute_plafonnee() {
    let mut expr = "1".to_string();
    for _ in 0..2000 {
        expr = format!("abs({expr}+0)");
    }

    // 100000 niveaux demandés : ramené au plafond, erreur propre au lieu d’un débordement de pile
    assert_eq!(
        evaluate_with(&expr, &Limites::avec_profondeur(100_000)),
        Err(EvaluationError::NestingTooDeep { limit: 256 })
    );
}
