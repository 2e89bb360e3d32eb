//! Noyau — évaluation (pipeline réel)
//!
//! texte -> normalize -> valider -> tokenize -> RPN -> pile numérique -> f64
//!
//! Remarque : aucune évaluation “générique” (pas d’interpréteur externe) ;
//! ce pipeline est le seul chemin d’exécution d’une expression.

use tracing::debug;

use super::erreurs::{EvalError, ParseError};
use super::jetons::{format_tokens, tokenize, valider, Operateur, Tok};
use super::pretraitement::normalize;
use super::rpn::to_rpn;

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub normalisee: String,
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression et retourne sa valeur (finie).
pub fn evaluate(expr_str: &str) -> Result<f64, EvalError> {
    evaluate_detailed(expr_str).map(|(v, _d)| v)
}

/// Comme `evaluate`, avec la démarche (texte normalisé, jetons, RPN).
pub fn evaluate_detailed(expr_str: &str) -> Result<(f64, DemarcheNoyau), EvalError> {
    if expr_str.trim().is_empty() {
        return Err(ParseError::EmptyExpression.into());
    }

    // 1) Normalisation + contrôles
    let normalisee = normalize(expr_str);
    debug!(entree = expr_str, normalisee = %normalisee, "normalisation");
    valider(&normalisee)?;

    // 2) Jetons
    let jetons = tokenize(&normalisee)?;

    // 3) RPN
    let rpn = to_rpn(&jetons)?;

    // 4) Pile
    let valeur = eval_rpn(&rpn)?;
    debug!(valeur, "évaluation");

    let d = DemarcheNoyau {
        normalisee,
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };

    Ok((valeur, d))
}

/// Exécute une RPN sur une pile numérique.
///
/// Opérateur binaire : l’opérande droite est dépilée en premier.
/// Toute application qui donne NaN/∞ est refusée.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, EvalError> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for &tok in rpn {
        match tok {
            Tok::Num(v) => st.push(v),

            Tok::Op(op) => {
                let insuffisant = || EvalError::InsufficientOperands {
                    op: op.symbole().to_string(),
                };
                let b = st.pop().ok_or_else(insuffisant)?;
                let a = st.pop().ok_or_else(insuffisant)?;

                let r = match op {
                    Operateur::Plus => a + b,
                    Operateur::Moins => a - b,
                    Operateur::Fois => a * b,
                    Operateur::Divise => {
                        if b == 0.0 {
                            return Err(EvalError::DivisionByZero);
                        }
                        a / b
                    }
                    Operateur::Puissance => a.powf(b),
                };

                if !r.is_finite() {
                    return Err(EvalError::NonFiniteResult {
                        op: op.symbole().to_string(),
                    });
                }
                st.push(r);
            }

            Tok::Fonction(f) => {
                let x = st.pop().ok_or_else(|| EvalError::InsufficientOperands {
                    op: f.nom().to_string(),
                })?;
                let r = f.appliquer(x);
                if !r.is_finite() {
                    return Err(EvalError::NonFiniteResult {
                        op: f.nom().to_string(),
                    });
                }
                st.push(r);
            }

            Tok::LPar | Tok::RPar => return Err(EvalError::MalformedExpression),
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvalError::MalformedExpression),
    }
}
