// src/noyau/pretraitement.rs
//
// Normalisation textuelle AVANT la tokenisation.
// ----------------------------------------------
// Étapes (sur toute la chaîne, dans cet ordre) :
// 1) suppression des espaces + alias de symboles (×, ÷, **, π, φ, √)
// 2) constantes nommées -> valeur décimale (mot entier seulement : "spin", "exp" intacts)
// 3) multiplication implicite : 2( -> 2*(   )2 -> )*2   )( -> )*(
// 4) moins unaire -> forme binaire : -5 -> 0-5, (-5) -> (0-5), 2*-5 -> 2*(0-5)
//    (passe itérative : profondeur d’imbrication quelconque)
//
// Ne peut pas échouer : les entrées absurdes ressortent telles quelles
// et seront refusées par la validation / le lexer.

use super::tables::Constante;

pub(crate) fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^')
}

/// Caractère de mot (frontière d’identifiant).
fn est_mot(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn est_chiffre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Pipeline complet de normalisation.
pub fn normalize(raw: &str) -> String {
    let s: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let s = remplacer_alias(&s);
    let s = substituer_constantes(&s);
    let chars = multiplication_implicite(&s.chars().collect::<Vec<char>>());
    moins_unaire(&chars).into_iter().collect()
}

/* ------------------------ 1) Alias ------------------------ */

fn remplacer_alias(s: &str) -> String {
    s.replace("**", "^")
        .replace('×', "*")
        .replace('÷', "/")
        .replace('π', "pi")
        .replace('φ', "phi")
        .replace('√', "sqrt")
}

/* ------------------------ 2) Constantes ------------------------ */

fn substituer_constantes(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    while i < chars.len() {
        if !est_mot(chars[i]) {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && est_mot(chars[i]) {
            i += 1;
        }
        let mot: String = chars[start..i].iter().collect();

        match Constante::from_nom(&mot) {
            Some(c) => out.push_str(&c.valeur().to_string()),
            None => out.push_str(&mot),
        }
    }

    out
}

/* ------------------------ 3) Multiplication implicite ------------------------ */

fn multiplication_implicite(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len() + 4);

    // vrai tant qu’on est dans un identifiant : "log2(" ne doit pas devenir "log2*("
    let mut dans_ident = false;

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_alphabetic() || c == '_' {
            dans_ident = true;
        } else if !c.is_ascii_digit() {
            dans_ident = false;
        }

        out.push(c);

        let Some(&suivant) = chars.get(i + 1) else {
            continue;
        };

        let inserer = (est_chiffre(c) && !dans_ident && suivant == '(')
            || (c == ')' && est_chiffre(suivant))
            || (c == ')' && suivant == '(');

        if inserer {
            out.push('*');
        }
    }

    out
}

/* ------------------------ 4) Moins unaire ------------------------ */

// Une seule passe, sans récursion : chaque "(0-" ouvert après un opérateur est
// mémorisé avec sa profondeur de parenthèses, et refermé quand un atome se
// termine à cette profondeur (sauf si une puissance suit : "-5^2" reste groupé).
fn moins_unaire(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len() + 8);
    let mut en_attente: Vec<usize> = Vec::new();
    let mut profondeur = 0usize;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '-' {
            let precedent = i.checked_sub(1).map(|p| chars[p]);
            match precedent {
                // début de chaîne ou après '(' : "0-" suffit (la précédence de '-' est la plus basse)
                None | Some('(') => out.extend(['0', '-']),

                // après un opérateur : on enveloppe l’opérande, sinon 2*0-5 vaudrait -5
                Some(p) if est_operateur(p) => {
                    if chars.get(i + 1).is_some_and(|&s| debut_operande(s)) {
                        out.extend(['(', '0', '-']);
                        en_attente.push(profondeur);
                    } else {
                        out.extend(['0', '-']);
                    }
                }

                _ => out.push('-'),
            }
            i += 1;
            continue;
        }

        match c {
            '(' => {
                profondeur += 1;
                out.push(c);
                i += 1;
            }
            ')' => {
                profondeur = profondeur.saturating_sub(1);
                out.push(c);
                i += 1;
                fermer(&mut out, &mut en_attente, profondeur, chars.get(i));
            }
            _ if est_chiffre(c) => {
                while i < chars.len() && est_chiffre(chars[i]) {
                    out.push(chars[i]);
                    i += 1;
                }
                fermer(&mut out, &mut en_attente, profondeur, chars.get(i));
            }
            _ if c.is_ascii_alphabetic() => {
                while i < chars.len() && est_mot(chars[i]) {
                    out.push(chars[i]);
                    i += 1;
                }
                // fonction : l’atome se termine à la ')' de son groupe
                if chars.get(i) != Some(&'(') {
                    fermer(&mut out, &mut en_attente, profondeur, chars.get(i));
                }
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

/// Un opérande peut commencer ici (nombre, identifiant, groupe, autre moins).
fn debut_operande(c: char) -> bool {
    est_chiffre(c) || c.is_ascii_alphabetic() || c == '(' || c == '-'
}

/// Fin d’atome à `profondeur` : referme les "(0-" ouverts à ce niveau.
fn fermer(
    out: &mut Vec<char>,
    en_attente: &mut Vec<usize>,
    profondeur: usize,
    suivant: Option<&char>,
) {
    if suivant == Some(&'^') {
        return;
    }
    while en_attente.last() == Some(&profondeur) {
        en_attente.pop();
        out.push(')');
    }
}
