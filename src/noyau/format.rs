// src/noyau/format.rs
//
// Affichage des nombres dans la démarche (étapes, forme factorisée, jetons).
// - jamais de "-0"
// - termes signés : "2x - 3" plutôt que "2x + -3"
// - lecture exacte : 2.3333333333333335 -> 7/3 (fraction proche, petit dénominateur)

use num_rational::Rational64;
use num_traits::Zero;

/// Plus grand dénominateur accepté pour la lecture exacte.
pub const DENOMINATEUR_MAX: i64 = 1000;

/// Écart relatif toléré entre la valeur et sa fraction.
pub const TOLERANCE_FRACTION: f64 = 1e-12;

/// Au-delà (ou en deçà), les nombres s’écrivent en notation scientifique.
pub const NOTATION_SCIENTIFIQUE_MAX: f64 = 1e15;
pub const NOTATION_SCIENTIFIQUE_MIN: f64 = 1e-6;

/// Nombre “affichable” : entiers sans ".0", pas de -0, ∞ explicite.
pub fn format_nombre(v: f64) -> String {
    if v.is_zero() {
        return "0".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "∞".into() } else { "-∞".into() };
    }
    if v.abs() >= NOTATION_SCIENTIFIQUE_MAX || v.abs() < NOTATION_SCIENTIFIQUE_MIN {
        return format!("{v:e}");
    }
    format!("{v}")
}

/// Terme additif signé : " + 3", " - 3".
pub fn format_terme(v: f64) -> String {
    if v < 0.0 {
        format!(" - {}", format_nombre(-v))
    } else {
        format!(" + {}", format_nombre(v))
    }
}

/// Facteur (x - r) : "x-3", "x+3".
pub fn format_x_moins(r: f64, espaces: bool) -> String {
    let (signe, abs) = if r < 0.0 { ('+', -r) } else { ('-', r) };
    if espaces {
        format!("x {signe} {}", format_nombre(abs))
    } else {
        format!("x{signe}{}", format_nombre(abs))
    }
}

/// Fraction p/q (q ≤ `denominateur_max`, q > 1) égale à `v` à la tolérance près.
///
/// Fractions continues : on s’arrête au premier convergent assez proche,
/// ou dès que le dénominateur dépasse la borne.
pub fn fraction_proche(v: f64, denominateur_max: i64) -> Option<Rational64> {
    if !v.is_finite() || v.fract().is_zero() {
        return None;
    }

    let signe: i64 = if v < 0.0 { -1 } else { 1 };
    let x = v.abs();
    if x >= (i64::MAX / 4) as f64 {
        return None;
    }

    // convergents h/k (h₋₂ = 0, h₋₁ = 1 ; k₋₂ = 1, k₋₁ = 0)
    let (mut h0, mut h1) = (0i64, 1i64);
    let (mut k0, mut k1) = (1i64, 0i64);
    let mut reste = x;

    for _ in 0..40 {
        let a = reste.floor();
        let a_i = a as i64;

        let h2 = a_i.checked_mul(h1)?.checked_add(h0)?;
        let k2 = a_i.checked_mul(k1)?.checked_add(k0)?;
        if k2 > denominateur_max {
            return None;
        }
        (h0, h1, k0, k1) = (h1, h2, k1, k2);

        let approx = h1 as f64 / k1 as f64;
        if (approx - x).abs() <= TOLERANCE_FRACTION * x.max(1.0) {
            return (k1 > 1).then(|| Rational64::new(signe * h1, k1));
        }

        let frac = reste - a;
        if frac <= f64::EPSILON {
            return None;
        }
        reste = 1.0 / frac;
    }

    None
}

/// Suffixe de lecture exacte pour une étape : " (= 7/3)" ou rien.
pub fn lecture_exacte(v: f64) -> String {
    match fraction_proche(v, DENOMINATEUR_MAX) {
        Some(r) => format!(" (= {r})"),
        None => String::new(),
    }
}
