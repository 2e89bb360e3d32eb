// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok (infixe) en RPN (postfix)
//
// Règles:
// - Fonction(f): empilée, sortie juste après la ')' de son argument
// - Binaire: + - (1) < * / (2) < ^ (3), ^ associatif à droite
// - Pas de moins unaire ici : le prétraitement a déjà réécrit "-x" en "0-x"

use tracing::debug;

use super::erreurs::ParseError;
use super::jetons::{format_tokens, Tok};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonction(sin), LPar, Num(1), Op(/), Num(2), RPar]
///   rpn:    [Num(1), Num(2), Op(/), Fonction(sin)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ParseError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for &tok in tokens {
        match tok {
            Tok::Num(_) => out.push(tok),

            // fonction : on la garde sur la pile (elle sortira après son argument)
            Tok::Fonction(_) => ops.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' ; pile vide avant => ')' orpheline
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ParseError::UnbalancedParens),
                    }
                }

                // si une fonction est au sommet, elle est liée à ce groupe
                if matches!(ops.last(), Some(Tok::Fonction(_))) {
                    out.extend(ops.pop());
                }
            }

            Tok::Op(op) => {
                while let Some(&top) = ops.last() {
                    let doit_pop = match top {
                        Tok::LPar => false,
                        Tok::Fonction(_) => true,
                        Tok::Op(top_op) => {
                            top_op.precedence() > op.precedence()
                                || (top_op.precedence() == op.precedence()
                                    && !op.est_associatif_droite())
                        }
                        // jamais empilés
                        Tok::Num(_) | Tok::RPar => false,
                    };

                    if !doit_pop {
                        break;
                    }
                    ops.pop();
                    out.push(top);
                }

                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar | Tok::RPar) {
            return Err(ParseError::UnbalancedParens);
        }
        out.push(op);
    }

    debug!(rpn = %format_tokens(&out), "shunting-yard");
    Ok(out)
}
