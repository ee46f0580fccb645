//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : jamais de panique ; un succès est toujours fini
//! - oracle : les expressions générées portent leur valeur attendue (même
//!   arithmétique f64), ce qui vérifie aussi l’aller-retour des littéraux

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::{evaluer, evaluer_avec, ErreurCalc, Reglages};

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
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération avec oracle ------------------------ */

/// Expression + valeur attendue (`None` si une division par zéro survient).
type Cas = (String, Option<f64>);

fn div(a: f64, b: f64) -> Option<f64> {
    if b == 0.0 {
        None
    } else {
        Some(a / b)
    }
}

fn gen_chiffre(rng: &mut Rng) -> Cas {
    let d = rng.pick(10);
    (d.to_string(), Some(d as f64))
}

/// Toujours "atomique" : un chiffre ou un bloc entre parenthèses.
fn gen_expr(rng: &mut Rng, depth: usize) -> Cas {
    if depth == 0 || rng.pick(4) == 0 {
        return gen_chiffre(rng);
    }

    let (a, va) = gen_expr(rng, depth - 1);
    let (b, vb) = gen_expr(rng, depth - 1);

    let (texte, valeur) = match rng.pick(7) {
        0 => (format!("{a}+{b}"), va.zip(vb).map(|(x, y)| x + y)),
        1 => (format!("{a}-{b}"), va.zip(vb).map(|(x, y)| x - y)),
        2 => (format!("{a}*{b}"), va.zip(vb).map(|(x, y)| x * y)),
        3 => (format!("{a}/{b}"), va.zip(vb).and_then(|(x, y)| div(x, y))),
        // chaînes non parenthésées : précédence + associativité
        4 => {
            let (c, vc) = gen_expr(rng, depth - 1);
            let v = match (va, vb, vc) {
                (Some(x), Some(y), Some(z)) => Some(x + y * z),
                _ => None,
            };
            (format!("{a}+{b}*{c}"), v)
        }
        5 => {
            let (c, vc) = gen_expr(rng, depth - 1);
            let v = match (va, vb, vc) {
                (Some(x), Some(y), Some(z)) => div(y, z).map(|q| x - q),
                _ => None,
            };
            (format!("{a}-{b}/{c}"), v)
        }
        _ => {
            let (c, vc) = gen_expr(rng, depth - 1);
            let v = match (va, vb, vc) {
                (Some(x), Some(y), Some(z)) => div(x, y).and_then(|q| div(q, z)),
                _ => None,
            };
            (format!("{a}/{b}/{c}"), v)
        }
    };

    (format!("({texte})"), valeur)
}

fn gen_bruit(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: &[u8] = b"0123456789+-*/()";
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char)
        .collect()
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_oracle() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 5);
        match (evaluer(&expr), attendu) {
            (Ok(x), Some(v)) => {
                assert_eq!(x, v, "expr={expr:?}");
                seen_ok += 1;
            }
            (Err(ErreurCalc::DivisionParZero), None) => seen_err += 1,
            (obtenu, attendu) => {
                panic!("expr={expr:?} obtenu={obtenu:?} attendu={attendu:?}")
            }
        }
    }

    // Un mix des deux, sinon le fuzz ne balaye rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune division par zéro vue");
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..2000 {
        budget(t0, max);

        let longueur = rng.pick(24) as usize;
        let expr = gen_bruit(&mut rng, longueur);
        if let Ok(x) = evaluer(&expr) {
            assert!(x.is_finite(), "expr={expr:?} x={x}");
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let expr = somme_balancee("1", 800);
    let x = evaluer(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(x, 800.0);
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);
    for _ in 0..50 {
        let (ea, _) = gen_expr(&mut a, 4);
        let (eb, _) = gen_expr(&mut b, 4);
        assert_eq!(ea, eb);
        assert_eq!(evaluer(&ea), evaluer(&eb));
    }
}

proptest! {
    #[test]
    fn prop_jamais_de_panique(expr in "[0-9+*/()-]{0,24}") {
        if let Ok(x) = evaluer_avec(&expr, &Reglages::default().avec_profondeur_max(8)) {
            prop_assert!(x.is_finite());
        }
    }

    #[test]
    fn prop_chiffre_entre_parentheses(d in 0u32..10, n in 1usize..20) {
        let expr = format!("{}{d}{}", "(".repeat(n), ")".repeat(n));
        prop_assert_eq!(evaluer(&expr), Ok(d as f64));
    }
}
