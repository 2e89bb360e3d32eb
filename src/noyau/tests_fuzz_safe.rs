//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - expressions générées avec leur valeur attendue (entiers, + - *, moins unaire)
//! - chaînes “sales” : jamais de panique, Ok => valeur finie

use std::time::{Duration, Instant};

use super::{evaluate, solve_linear, solve_quadratic, EvalError};

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
    /// Entier dans [-m, m].
    fn entier(&mut self, m: i32) -> i32 {
        self.pick((2 * m + 1) as u32) as i32 - m
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// somme := produit (('+'|'-') produit)*
fn gen_somme(rng: &mut Rng, prof: u32) -> (String, f64) {
    let (mut s, mut v) = gen_produit(rng, prof);
    for _ in 0..rng.pick(3) {
        let (t, tv) = gen_produit(rng, prof);
        if rng.coin() {
            s = format!("{s}+{t}");
            v += tv;
        } else {
            s = format!("{s}-{t}");
            v -= tv;
        }
    }
    (s, v)
}

/// produit := atome ('*' atome)*
fn gen_produit(rng: &mut Rng, prof: u32) -> (String, f64) {
    let (mut s, mut v) = gen_atome(rng, prof);
    for _ in 0..rng.pick(3) {
        let (t, tv) = gen_atome(rng, prof);
        // multiplication implicite de temps en temps : "2(…)"
        if t.starts_with('(') && s.ends_with(|c: char| c.is_ascii_digit()) && rng.coin() {
            s = format!("{s}{t}");
        } else {
            s = format!("{s}*{t}");
        }
        v *= tv;
    }
    (s, v)
}

/// atome := entier | '(' somme ')' | '-' atome
fn gen_atome(rng: &mut Rng, prof: u32) -> (String, f64) {
    if prof == 0 {
        let k = rng.pick(10);
        return (k.to_string(), k as f64);
    }
    match rng.pick(4) {
        0 | 1 => {
            let k = rng.pick(10);
            (k.to_string(), k as f64)
        }
        2 => {
            let (s, v) = gen_somme(rng, prof - 1);
            (format!("({s})"), v)
        }
        _ => {
            let (s, v) = gen_atome(rng, prof - 1);
            (format!("-{s}"), -v)
        }
    }
}

/// Chaîne “sale” : mélange de caractères valides et invalides.
fn gen_bruit(rng: &mut Rng) -> String {
    const MORCEAUX: [&str; 22] = [
        "1", "2.5", "0", "+", "-", "*", "/", "^", "(", ")", "pi", "e", "sin", "sqrt", "log2",
        "x", "$", ".", " ", "**", "√", "phi",
    ];
    let n = 1 + rng.pick(12);
    (0..n)
        .map(|_| MORCEAUX[rng.pick(MORCEAUX.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_valeurs_attendues() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let (expr, attendu) = gen_somme(&mut rng, 3);
        let v = evaluate(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert_eq!(v, attendu, "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_bruit_sans_panique_et_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let expr = gen_bruit(&mut rng);
        let r1 = evaluate(&expr);
        let r2 = evaluate(&expr);

        // Même entrée => même sortie (NaN exclu : Ok(v) est toujours fini)
        assert_eq!(r1, r2, "expr={expr:?}");

        match r1 {
            Ok(v) => {
                assert!(v.is_finite(), "expr={expr:?} v={v}");
                seen_ok += 1;
            }
            Err(e) => {
                assert!(!e.to_string().is_empty());
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 0, "aucun succès: fuzz trop “sale”");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_moins_unaire_tres_profond() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let n = 100_000;

    // nombre pair de moins : 2*5
    let expr = format!("2*{}5", "-".repeat(n));
    assert_eq!(evaluate(&expr), Ok(10.0));
    budget(t0, max);

    // 1*-(1*-( … 1 … )) : (-1)^n
    let expr = format!("{}1{}", "1*-(".repeat(n), ")".repeat(n));
    assert_eq!(evaluate(&expr), Ok(1.0));
    budget(t0, max);

    // impair + puissance enchaînée
    let expr = format!("2*{}2^2", "-".repeat(n + 1));
    assert_eq!(evaluate(&expr), Ok(-8.0));
    budget(t0, max);
}

#[test]
fn fuzz_safe_division_par_zero_jamais_infinie() {
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..100 {
        let (num, _) = gen_somme(&mut rng, 2);
        let expr = format!("({num})/(0)");
        assert_eq!(evaluate(&expr), Err(EvalError::DivisionByZero), "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_lineaire_aller_retour() {
    let mut rng = Rng::new(0x11_u64);

    for _ in 0..200 {
        let a = loop {
            let a = rng.entier(20);
            if a != 0 {
                break a as f64;
            }
        };
        let b = rng.entier(50) as f64;
        let c = rng.entier(50) as f64;

        let eq = format!("{a}x + {b} = {c}");
        let s = solve_linear(&eq).unwrap_or_else(|e| panic!("eq={eq:?} err={e}"));
        assert_eq!(s.valeur, (c - b) / a, "eq={eq:?}");
        assert_eq!(s.etapes.len(), 4);
    }
}

#[test]
fn fuzz_safe_quadratique_coherence() {
    let mut rng = Rng::new(0xABCDEF_u64);

    for _ in 0..300 {
        let a = loop {
            let a = rng.entier(9);
            if a != 0 {
                break a as f64;
            }
        };
        let b = rng.entier(15) as f64;
        let c = rng.entier(15) as f64;

        let s = solve_quadratic(a, b, c).unwrap();
        let delta = b * b - 4.0 * a * c;

        let attendu = match delta {
            d if d < 0.0 => 0,
            d if d == 0.0 => 1,
            _ => 2,
        };
        assert_eq!(s.racines.len(), attendu, "a={a} b={b} c={c}");

        // étapes : équation, Δ, cas, puis une ligne par racine
        assert_eq!(s.etapes.len(), 3 + s.racines.len());

        for r in &s.racines {
            let residu = a * r * r + b * r + c;
            assert!(residu.abs() < 1e-9 * (1.0 + b.abs() * r.abs() + c.abs() + a.abs() * r * r));
        }
    }
}
