// src/noyau/validation.rs
//
// Validation syntaxique brute (avant toute résolution de parenthèses).
//
// Règles, dans cet ordre (la première qui échoue gagne) :
// 1. deux symboles d’opération adjacents => OperateursDupliques
//    (adjacence brute, sans tenir compte des parenthèses)
// 2. premier ou dernier caractère = opérateur => OperateurEnBordure

use super::erreurs::{ErreurCalc, ResultatCalc};
use super::operateurs::est_symbole;

/// Valide `expr` (supposée non vide) et la renvoie telle quelle.
pub fn valider(expr: &str) -> ResultatCalc<&str> {
    if contient_doublon(expr) {
        return Err(ErreurCalc::OperateursDupliques);
    }

    let bordure = |c: Option<char>| c.is_some_and(est_symbole);
    if bordure(expr.chars().next()) || bordure(expr.chars().next_back()) {
        return Err(ErreurCalc::OperateurEnBordure);
    }

    Ok(expr)
}

fn contient_doublon(expr: &str) -> bool {
    let mut precedent_op = false;
    for c in expr.chars() {
        let op = est_symbole(c);
        if op && precedent_op {
            return true;
        }
        precedent_op = op;
    }
    false
}
