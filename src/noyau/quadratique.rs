//! Noyau — équation du second degré `ax² + bx + c = 0`
//!
//! Δ = b² - 4ac, racines réelles seulement :
//! - Δ < 0 : aucune
//! - Δ = 0 : -b/(2a)
//! - Δ > 0 : (-b + √Δ)/(2a) puis (-b - √Δ)/(2a), dans cet ordre
//!
//! Les étapes et la forme factorisée sont rendues à partir de Δ et des
//! racines déjà calculées.

use tracing::debug;

use super::erreurs::SolveError;
use super::format::{format_nombre, format_terme, format_x_moins};

/// Texte fixe quand aucune racine réelle n’existe.
pub const NON_FACTORISABLE: &str = "Non factorisable dans ℝ (aucune racine réelle)";

#[derive(Clone, Debug, PartialEq)]
pub struct SolutionQuadratique {
    /// 0, 1 ou 2 racines.
    pub racines: Vec<f64>,
    pub discriminant: f64,
    pub etapes: Vec<String>,
    pub forme_factorisee: String,
}

pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Result<SolutionQuadratique, SolveError> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Err(SolveError::NonFiniteCoefficient);
    }
    if a == 0.0 {
        return Err(SolveError::DegenerateLeadingCoefficient);
    }

    // 1) Calcul
    let delta = b * b - 4.0 * a * c;
    let deux_a = 2.0 * a;
    if !delta.is_finite() {
        return Err(SolveError::NonFiniteResult);
    }
    let racines = calculer_racines(b, deux_a, delta);
    if racines.iter().any(|r| !r.is_finite()) {
        return Err(SolveError::NonFiniteResult);
    }
    debug!(a, b, c, delta, racines = racines.len(), "équation du second degré");

    // 2) Étapes
    let (fa, fb, fc, fd) = (
        format_nombre(a),
        format_nombre(b),
        format_nombre(c),
        format_nombre(delta),
    );
    let moins_b = format_nombre(-b);

    let mut etapes = vec![
        format!("Équation : {fa}x²{}x{} = 0", format_terme(b), format_terme(c)),
        format!("Discriminant : Δ = b² - 4ac = ({fb})² - 4({fa})({fc}) = {fd}"),
    ];

    match racines.as_slice() {
        [] => etapes.push("Δ < 0 : aucune solution réelle".into()),
        [r] => {
            etapes.push("Δ = 0 : une solution (racine double)".into());
            etapes.push(format!(
                "x = -b/(2a) = {moins_b}/(2×{fa}) = {}",
                format_nombre(*r)
            ));
        }
        [r1, r2, ..] => {
            etapes.push("Δ > 0 : deux solutions".into());
            etapes.push(format!(
                "x₁ = (-b + √Δ)/(2a) = ({moins_b} + √{fd})/(2×{fa}) = {}",
                format_nombre(*r1)
            ));
            etapes.push(format!(
                "x₂ = (-b - √Δ)/(2a) = ({moins_b} - √{fd})/(2×{fa}) = {}",
                format_nombre(*r2)
            ));
        }
    }

    let forme_factorisee = forme_factorisee(a, &racines);

    Ok(SolutionQuadratique {
        racines,
        discriminant: delta,
        etapes,
        forme_factorisee,
    })
}

/// Forme factorisée, recalculée à chaque appel (aucun cache).
pub fn factor_quadratic(a: f64, b: f64, c: f64) -> Result<String, SolveError> {
    solve_quadratic(a, b, c).map(|s| s.forme_factorisee)
}

/// Lecture de trois champs texte (a, b, c) comme le panneau de saisie :
/// nombres finis, puis `a ≠ 0`.
pub fn parse_coefficients(a: &str, b: &str, c: &str) -> Result<(f64, f64, f64), SolveError> {
    fn lire(nom: char, texte: &str) -> Result<f64, SolveError> {
        texte
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| SolveError::NonNumericCoefficient {
                nom,
                texte: texte.to_string(),
            })
    }

    let (a, b, c) = (lire('a', a)?, lire('b', b)?, lire('c', c)?);
    if a == 0.0 {
        return Err(SolveError::DegenerateLeadingCoefficient);
    }
    Ok((a, b, c))
}

fn calculer_racines(b: f64, deux_a: f64, delta: f64) -> Vec<f64> {
    if delta < 0.0 {
        Vec::new()
    } else if delta == 0.0 {
        vec![sans_moins_zero(-b / deux_a)]
    } else {
        let rd = delta.sqrt();
        vec![
            sans_moins_zero((-b + rd) / deux_a),
            sans_moins_zero((-b - rd) / deux_a),
        ]
    }
}

fn sans_moins_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

fn forme_factorisee(a: f64, racines: &[f64]) -> String {
    match racines {
        [] => NON_FACTORISABLE.to_string(),
        [r] => format!("{}({})²", format_nombre(a), format_x_moins(*r, true)),
        [r1, r2, ..] => {
            let produit = format!(
                "({})({})",
                format_x_moins(*r1, false),
                format_x_moins(*r2, false)
            );
            if a == 1.0 {
                produit
            } else {
                format!("{}{produit}", format_nombre(a))
            }
        }
    }
}
