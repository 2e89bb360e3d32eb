// src/noyau/jetons.rs

use tracing::debug;

use super::erreurs::{EvalError, LexError, ParseError};
use super::format::format_nombre;
use super::pretraitement::est_operateur;
use super::tables::Fonction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance, // ^
}

impl Operateur {
    pub fn from_char(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            '^' => Some(Operateur::Puissance),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Puissance => '^',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
            Operateur::Puissance => 3,
        }
    }

    pub fn est_associatif_droite(self) -> bool {
        matches!(self, Operateur::Puissance)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Les identifiants sont résolus dès la lecture : il n’y a que des fonctions
    // (les constantes ont été remplacées par leur valeur au prétraitement).
    Fonction(Fonction),

    Op(Operateur),

    LPar,
    RPar,
}

/// Caractères admis après normalisation.
fn est_autorise(c: char) -> bool {
    c.is_ascii_alphanumeric() || est_operateur(c) || matches!(c, '(' | ')' | '.')
}

/// Contrôles faits par `evaluate` avant la tokenisation, dans l’ordre :
/// parenthèses équilibrées, liste blanche, pas d’opérateurs consécutifs
/// (hors formes "0-" synthétisées par le prétraitement).
pub fn valider(s: &str) -> Result<(), EvalError> {
    let mut profondeur: i64 = 0;
    for c in s.chars() {
        match c {
            '(' => profondeur += 1,
            ')' => profondeur -= 1,
            _ => {}
        }
        if profondeur < 0 {
            return Err(ParseError::UnbalancedParens.into());
        }
    }
    if profondeur != 0 {
        return Err(ParseError::UnbalancedParens.into());
    }

    if let Some(c) = s.chars().find(|&c| !est_autorise(c)) {
        return Err(LexError::InvalidCharacter(c).into());
    }

    let sans_zero_moins = s.replace("0-", "");
    let mut precedent_op = false;
    for c in sans_zero_moins.chars() {
        let op = est_operateur(c);
        if op && precedent_op {
            return Err(ParseError::InvalidOperatorSequence.into());
        }
        precedent_op = op;
    }

    Ok(())
}

/// Tokenize une chaîne normalisée en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5) ; au plus un point
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - noms de fonctions [a-zA-Z][a-zA-Z0-9]* (ex: log2), sensibles à la casse
pub fn tokenize(s: &str) -> Result<Vec<Tok>, LexError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        if let Some(op) = Operateur::from_char(c) {
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        // Noms de fonctions
        if c.is_ascii_alphabetic() {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_alphanumeric() {
                i += 1;
            }
            let nom: String = chars[start..i].iter().collect();
            let f = Fonction::from_nom(&nom).ok_or(LexError::UnknownFunction(nom))?;
            out.push(Tok::Fonction(f));
            continue;
        }

        // Nombre : suite de chiffres et de points
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();

            // "1.2.3" ou "." : refusés (str::parse accepterait "inf", pas ici)
            let points = texte.chars().filter(|&c| c == '.').count();
            if points > 1 || texte == "." {
                return Err(LexError::InvalidNumber(texte));
            }
            let v: f64 = texte
                .parse()
                .map_err(|_| LexError::InvalidNumber(texte.clone()))?;

            out.push(Tok::Num(v));
            continue;
        }

        return Err(LexError::InvalidCharacter(c));
    }

    debug!(jetons = out.len(), "tokenisation");
    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(v) => format_nombre(*v),
            Tok::Fonction(f) => f.nom().to_string(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
