//! Calculatrice — noyau de calcul
//!
//! Évaluateur d’expressions (prétraitement -> jetons -> RPN -> pile) et
//! résolution d’équations du premier et du second degré avec démarche.
//!
//! ```
//! use calculatrice_noyau::noyau::{evaluate, solve_linear, solve_quadratic};
//!
//! assert_eq!(evaluate("2(3+1)").unwrap(), 8.0);
//! assert_eq!(solve_linear("2x + 3 = 7").unwrap().valeur, 2.0);
//! assert_eq!(solve_quadratic(1.0, -5.0, 6.0).unwrap().racines, vec![3.0, 2.0]);
//! ```

pub mod noyau;
