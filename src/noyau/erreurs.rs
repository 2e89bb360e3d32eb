//! Noyau — erreurs typées
//!
//! Une famille par étage du pipeline :
//! - `LexError`   : caractère hors liste blanche, fonction inconnue, nombre mal formé
//! - `ParseError` : parenthèses, suite d’opérateurs, entrée vide
//! - `EvalError`  : erreurs d’exécution de la RPN (+ les deux précédentes via `?`)
//! - `SolveError` : équations (format, coefficients)
//!
//! Les messages sont affichables tels quels.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("caractère inattendu: '{0}'")]
    InvalidCharacter(char),

    #[error("fonction inconnue: {0}")]
    UnknownFunction(String),

    #[error("nombre invalide: {0}")]
    InvalidNumber(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("parenthèses non équilibrées")]
    UnbalancedParens,

    #[error("suite d’opérateurs invalide")]
    InvalidOperatorSequence,

    #[error("Entrée vide")]
    EmptyExpression,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// `op` = symbole de l’opérateur ou nom de la fonction.
    #[error("opérandes insuffisantes pour {op}")]
    InsufficientOperands { op: String },

    #[error("division par zéro")]
    DivisionByZero,

    #[error("résultat non fini pour {op}")]
    NonFiniteResult { op: String },

    #[error("expression invalide")]
    MalformedExpression,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("format d’équation invalide: {0}")]
    InvalidFormat(String),

    #[error("coefficient {nom} invalide: {texte:?}")]
    NonNumericCoefficient { nom: char, texte: String },

    #[error("coefficients non finis")]
    NonFiniteCoefficient,

    /// Δ ou une racine dépasse la capacité d’un f64.
    #[error("résultat non fini (dépassement de capacité)")]
    NonFiniteResult,

    #[error("le coefficient a ne peut pas être nul pour une équation du second degré")]
    DegenerateLeadingCoefficient,
}
