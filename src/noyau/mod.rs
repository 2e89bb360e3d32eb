//! Noyau de calcul
//!
//! Organisation interne :
//! - pretraitement.rs : normalisation textuelle (constantes, ×implicite, moins unaire)
//! - jetons.rs        : validation + tokenisation
//! - rpn.rs           : shunting-yard
//! - eval.rs          : pile RPN + pipeline complet
//! - tables.rs        : constantes / fonctions (+ fiches de référence)
//! - format.rs        : affichage des nombres dans les étapes
//! - lineaire.rs      : ax + b = c
//! - quadratique.rs   : ax² + bx + c = 0
//! - erreurs.rs       : erreurs typées par étage

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod lineaire;
pub mod pretraitement;
pub mod quadratique;
pub mod rpn;
pub mod tables;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::{EvalError, LexError, ParseError, SolveError};
pub use eval::{evaluate, evaluate_detailed, DemarcheNoyau};
pub use lineaire::{solve_linear, SolutionLineaire};
pub use quadratique::{factor_quadratic, parse_coefficients, solve_quadratic, SolutionQuadratique};
pub use tables::{Constante, Fiche, Fonction};
