//! Noyau — équation du premier degré `ax + b = c`
//!
//! Lecture volontairement étroite :
//! - un seul `=`, membre de droite = nombre simple
//! - membre de gauche = somme de termes signés `k`, `kx`, `k*x`, `x`
//! - variable `x` d’un seul côté : "x + 4 = 2x - 3" est refusé (InvalidFormat)
//!
//! Valeur calculée d’abord, étapes rendues ensuite à partir des mêmes
//! intermédiaires (pas de second calcul dans le texte).

use tracing::debug;

use super::erreurs::SolveError;
use super::format::{format_nombre, format_terme, lecture_exacte};

/// Accumulateur du membre de gauche.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TermeLineaire {
    pub coefficient: f64,
    pub constante: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SolutionLineaire {
    /// Finie, `+∞` (identité) ou `NaN` (contradiction).
    pub valeur: f64,
    pub etapes: Vec<String>,
}

pub fn solve_linear(equation: &str) -> Result<SolutionLineaire, SolveError> {
    let propre: String = equation.chars().filter(|c| !c.is_whitespace()).collect();

    let (gauche, droite) = match propre.split('=').collect::<Vec<_>>().as_slice() {
        [g, d] => (*g, *d),
        _ => {
            return Err(SolveError::InvalidFormat(
                "un seul signe '=' attendu (forme ax + b = c)".into(),
            ))
        }
    };
    if gauche.is_empty() || droite.is_empty() {
        return Err(SolveError::InvalidFormat("membre vide".into()));
    }

    let c = nombre_simple(droite).ok_or_else(|| {
        SolveError::InvalidFormat(format!(
            "le membre de droite doit être un nombre: {droite}"
        ))
    })?;
    let TermeLineaire {
        coefficient: a,
        constante: b,
    } = lire_membre_gauche(gauche)?;

    // 1) Calcul
    let isole = c - b;
    let valeur = if a == 0.0 {
        if b == c {
            f64::INFINITY
        } else {
            f64::NAN
        }
    } else {
        let v = isole / a;
        if v == 0.0 {
            0.0
        } else {
            v
        }
    };
    debug!(a, b, c, valeur, "équation du premier degré");

    // 2) Étapes
    let mut etapes = Vec::with_capacity(4);
    etapes.push(format!("Équation de départ : {}", equation.trim()));
    etapes.push(format!(
        "Forme simplifiée : {}x{} = {}",
        format_nombre(a),
        format_terme(b),
        format_nombre(c)
    ));
    etapes.push(if b < 0.0 {
        format!(
            "Ajouter {} aux deux membres : {}x = {}",
            format_nombre(-b),
            format_nombre(a),
            format_nombre(isole)
        )
    } else {
        format!(
            "Soustraire {} des deux membres : {}x = {}",
            format_nombre(b),
            format_nombre(a),
            format_nombre(isole)
        )
    });

    if valeur.is_nan() {
        etapes.push("Aucune solution (contradiction)".into());
    } else if valeur.is_infinite() && a == 0.0 {
        etapes.push("Infinité de solutions (identité)".into());
    } else {
        etapes.push(format!(
            "Diviser les deux membres par {} : x = {}{}",
            format_nombre(a),
            format_nombre(valeur),
            lecture_exacte(valeur)
        ));
    }

    Ok(SolutionLineaire { valeur, etapes })
}

/// Découpe sur `+`/`-` en gardant le signe, puis classe chaque terme.
/// Les signes consécutifs se composent : "+ -3" vaut "-3".
fn lire_membre_gauche(gauche: &str) -> Result<TermeLineaire, SolveError> {
    let mut acc = TermeLineaire::default();
    let mut signe = 1.0;
    let mut courant = String::new();

    for ch in gauche.chars() {
        match ch {
            '+' | '-' => {
                if !courant.is_empty() {
                    ajouter_terme(&mut acc, signe, &courant)?;
                    courant.clear();
                    signe = 1.0;
                }
                if ch == '-' {
                    signe = -signe;
                }
            }
            _ => courant.push(ch),
        }
    }

    if courant.is_empty() {
        return Err(SolveError::InvalidFormat(format!(
            "terme manquant dans {gauche:?}"
        )));
    }
    ajouter_terme(&mut acc, signe, &courant)?;

    Ok(acc)
}

fn ajouter_terme(acc: &mut TermeLineaire, signe: f64, terme: &str) -> Result<(), SolveError> {
    let invalide = || SolveError::InvalidFormat(format!("terme non reconnu: {terme:?}"));

    match terme.strip_suffix('x') {
        Some(coef) => {
            // "2*x" accepté, "*x" non
            let coef = match coef.strip_suffix('*') {
                Some("") => return Err(invalide()),
                Some(k) => k,
                None => coef,
            };
            let k = if coef.is_empty() {
                1.0
            } else {
                nombre_simple(coef).ok_or_else(invalide)?
            };
            acc.coefficient += signe * k;
        }
        None => {
            acc.constante += signe * nombre_simple(terme).ok_or_else(invalide)?;
        }
    }

    Ok(())
}

/// Nombre décimal “simple” : signe optionnel, chiffres, au plus un point.
/// (pas d’exposant, pas de "inf"/"NaN", contrairement à `str::parse`)
fn nombre_simple(s: &str) -> Option<f64> {
    let corps = s.strip_prefix(['+', '-']).unwrap_or(s);

    let chiffres = corps.chars().filter(|c| c.is_ascii_digit()).count();
    let points = corps.chars().filter(|&c| c == '.').count();
    if chiffres == 0 || points > 1 || chiffres + points != corps.chars().count() {
        return None;
    }

    s.parse().ok()
}
