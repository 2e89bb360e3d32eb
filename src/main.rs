// src/main.rs
//
// Calculatrice — point d’entrée ligne de commande
// -----------------------------------------------
// But:
// - calc        : évaluer une expression (option --demarche : normalisation, jetons, RPN)
// - lineaire    : résoudre ax + b = c avec les étapes
// - quadratique : résoudre ax² + bx + c = 0 (étapes, racines, forme factorisée)
// - fonctions   : fiches de référence (fonctions + constantes)
//
// Journalisation : RUST_LOG=debug pour suivre le pipeline.

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use calculatrice_noyau::noyau::{
    evaluate_detailed, format::format_nombre, parse_coefficients, solve_linear, solve_quadratic,
    Constante, Fiche, Fonction,
};

/// Calculatrice : expressions, équations du premier et du second degré.
#[derive(Parser, Debug)]
#[command(name = "calculatrice", version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commande: Commande,
}

#[derive(Subcommand, Debug)]
enum Commande {
    /// Évalue une expression (ex: "2(3+1) + sin(pi/2)").
    Calc {
        expression: String,

        /// Affiche aussi la démarche (texte normalisé, jetons, RPN).
        #[arg(short, long)]
        demarche: bool,
    },

    /// Résout une équation ax + b = c (ex: "2x + 3 = 7").
    Lineaire { equation: String },

    /// Résout ax² + bx + c = 0.
    #[command(allow_negative_numbers = true)]
    Quadratique { a: String, b: String, c: String },

    /// Liste les fonctions et constantes disponibles.
    Fonctions,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = executer(args.commande) {
        eprintln!("Erreur: {e}");
        process::exit(1);
    }
}

fn executer(commande: Commande) -> Result<(), Box<dyn std::error::Error>> {
    match commande {
        Commande::Calc {
            expression,
            demarche,
        } => {
            let (valeur, d) = evaluate_detailed(&expression)?;
            if demarche {
                println!("Normalisée : {}", d.normalisee);
                println!("Jetons     : {}", d.jetons);
                println!("RPN        : {}", d.rpn);
            }
            println!("{}", format_nombre(valeur));
        }

        Commande::Lineaire { equation } => {
            let s = solve_linear(&equation)?;
            for etape in &s.etapes {
                println!("{etape}");
            }
            println!("x = {}", format_nombre(s.valeur));
        }

        Commande::Quadratique { a, b, c } => {
            let (a, b, c) = parse_coefficients(&a, &b, &c)?;
            let s = solve_quadratic(a, b, c)?;
            for etape in &s.etapes {
                println!("{etape}");
            }
            let racines: Vec<String> = s.racines.iter().map(|r| format_nombre(*r)).collect();
            println!("Racines : {{{}}}", racines.join(", "));
            println!("Forme factorisée : {}", s.forme_factorisee);
        }

        Commande::Fonctions => {
            println!("Fonctions :");
            for f in Fonction::ALL {
                afficher_fiche(&f.fiche());
            }
            println!("Constantes :");
            for c in Constante::ALL {
                afficher_fiche(&c.fiche());
            }
        }
    }

    Ok(())
}

fn afficher_fiche(fiche: &Fiche) {
    println!(
        "  {:<6} {} : {} (ex: {} = {})",
        fiche.nom,
        fiche.titre,
        fiche.description,
        fiche.exemple,
        format_nombre(fiche.attendu)
    );
}
