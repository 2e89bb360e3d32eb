// src/noyau/tables.rs
//
// Tables fixes du noyau : constantes nommées + fonctions unaires.
// ---------------------------------------------------------------
// - Énumérations fermées, dispatch par `match` (pas de table mutable nom -> closure)
// - Chaque entrée porte sa fiche de référence (titre, description, exemple vérifiable)

use std::fmt;

/// Fiche de référence (page “Référence” de la calculatrice).
///
/// `exemple` est une expression que `evaluate` doit ramener à `attendu`.
#[derive(Clone, Copy, Debug)]
pub struct Fiche {
    pub nom: &'static str,
    pub titre: &'static str,
    pub description: &'static str,
    pub exemple: &'static str,
    pub attendu: f64,
}

/* ------------------------ Constantes ------------------------ */

/// Nombre d’or : (1 + √5) / 2
const PHI: f64 = 1.618_033_988_749_895;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
    Phi,
}

impl Constante {
    pub const ALL: [Constante; 3] = [Constante::Pi, Constante::E, Constante::Phi];

    pub fn nom(self) -> &'static str {
        match self {
            Constante::Pi => "pi",
            Constante::E => "e",
            Constante::Phi => "phi",
        }
    }

    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => std::f64::consts::PI,
            Constante::E => std::f64::consts::E,
            Constante::Phi => PHI,
        }
    }

    pub fn from_nom(nom: &str) -> Option<Constante> {
        Constante::ALL.into_iter().find(|c| c.nom() == nom)
    }

    pub fn fiche(self) -> Fiche {
        let (titre, description, exemple, attendu) = match self {
            Constante::Pi => (
                "Pi",
                "Rapport de la circonférence au diamètre",
                "cos(pi)",
                -1.0,
            ),
            Constante::E => ("Nombre d’Euler", "Base du logarithme naturel", "ln(e)", 1.0),
            Constante::Phi => ("Nombre d’or", "(1 + √5) / 2", "phi^2-phi", 1.0),
        };
        Fiche {
            nom: self.nom(),
            titre,
            description,
            exemple,
            attendu,
        }
    }
}

/* ------------------------ Fonctions ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Ln,
    Log,
    Log2,
    Sqrt,
    Cbrt,
    Abs,
    Ceil,
    Floor,
    Round,
    Exp,
}

impl Fonction {
    pub const ALL: [Fonction; 19] = [
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Asin,
        Fonction::Acos,
        Fonction::Atan,
        Fonction::Sinh,
        Fonction::Cosh,
        Fonction::Tanh,
        Fonction::Ln,
        Fonction::Log,
        Fonction::Log2,
        Fonction::Sqrt,
        Fonction::Cbrt,
        Fonction::Abs,
        Fonction::Ceil,
        Fonction::Floor,
        Fonction::Round,
        Fonction::Exp,
    ];

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Asin => "asin",
            Fonction::Acos => "acos",
            Fonction::Atan => "atan",
            Fonction::Sinh => "sinh",
            Fonction::Cosh => "cosh",
            Fonction::Tanh => "tanh",
            Fonction::Ln => "ln",
            Fonction::Log => "log",
            Fonction::Log2 => "log2",
            Fonction::Sqrt => "sqrt",
            Fonction::Cbrt => "cbrt",
            Fonction::Abs => "abs",
            Fonction::Ceil => "ceil",
            Fonction::Floor => "floor",
            Fonction::Round => "round",
            Fonction::Exp => "exp",
        }
    }

    /// Noms sensibles à la casse : "SIN" est inconnu.
    pub fn from_nom(nom: &str) -> Option<Fonction> {
        Fonction::ALL.into_iter().find(|f| f.nom() == nom)
    }

    /// Application réelle -> réelle. Le contrôle “fini” est fait par l’évaluateur.
    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            Fonction::Sin => x.sin(),
            Fonction::Cos => x.cos(),
            Fonction::Tan => x.tan(),
            Fonction::Asin => x.asin(),
            Fonction::Acos => x.acos(),
            Fonction::Atan => x.atan(),
            Fonction::Sinh => x.sinh(),
            Fonction::Cosh => x.cosh(),
            Fonction::Tanh => x.tanh(),
            Fonction::Ln => x.ln(),
            Fonction::Log => x.log10(),
            Fonction::Log2 => x.log2(),
            Fonction::Sqrt => x.sqrt(),
            Fonction::Cbrt => x.cbrt(),
            Fonction::Abs => x.abs(),
            Fonction::Ceil => x.ceil(),
            Fonction::Floor => x.floor(),
            Fonction::Round => arrondi_demi_haut(x),
            Fonction::Exp => x.exp(),
        }
    }

    pub fn fiche(self) -> Fiche {
        let (titre, description, exemple, attendu) = match self {
            Fonction::Sin => ("Sinus", "Sinus de x (radians)", "sin(pi/2)", 1.0),
            Fonction::Cos => ("Cosinus", "Cosinus de x (radians)", "cos(0)", 1.0),
            Fonction::Tan => ("Tangente", "Tangente de x (radians)", "tan(pi/4)", 1.0),
            Fonction::Asin => ("Arc sinus", "Réciproque du sinus", "asin(1)*2/pi", 1.0),
            Fonction::Acos => ("Arc cosinus", "Réciproque du cosinus", "acos(1)", 0.0),
            Fonction::Atan => ("Arc tangente", "Réciproque de la tangente", "atan(1)*4/pi", 1.0),
            Fonction::Sinh => ("Sinus hyperbolique", "(eˣ - e⁻ˣ) / 2", "sinh(0)", 0.0),
            Fonction::Cosh => ("Cosinus hyperbolique", "(eˣ + e⁻ˣ) / 2", "cosh(0)", 1.0),
            Fonction::Tanh => ("Tangente hyperbolique", "sinh(x) / cosh(x)", "tanh(0)", 0.0),
            Fonction::Ln => ("Logarithme naturel", "Logarithme en base e", "ln(e)", 1.0),
            Fonction::Log => ("Logarithme décimal", "Logarithme en base 10", "log(100)", 2.0),
            Fonction::Log2 => ("Logarithme binaire", "Logarithme en base 2", "log2(8)", 3.0),
            Fonction::Sqrt => ("Racine carrée", "Racine carrée de x", "sqrt(16)", 4.0),
            Fonction::Cbrt => ("Racine cubique", "Racine cubique de x", "cbrt(27)", 3.0),
            Fonction::Abs => ("Valeur absolue", "Valeur absolue de x", "abs(-5)", 5.0),
            Fonction::Ceil => ("Plafond", "Plus petit entier ≥ x", "ceil(3.2)", 4.0),
            Fonction::Floor => ("Plancher", "Plus grand entier ≤ x", "floor(3.8)", 3.0),
            Fonction::Round => ("Arrondi", "Entier le plus proche", "round(3.6)", 4.0),
            Fonction::Exp => ("Exponentielle", "e élevé à la puissance x", "exp(1)-e", 0.0),
        };
        Fiche {
            nom: self.nom(),
            titre,
            description,
            exemple,
            attendu,
        }
    }
}

/// Arrondi, moitiés vers +∞ : round(2.5) = 3, round(-2.5) = -2.
///
/// `(x + 0.5).floor()` se tromperait sur 0.49999999999999994.
fn arrondi_demi_haut(x: f64) -> f64 {
    let r = x.round();
    if x - r == 0.5 {
        r + 1.0
    } else {
        r
    }
}

impl fmt::Display for Fonction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}
