// src/noyau/format.rs
//
// Littéral canonique d’un f64 pour la substitution des parenthèses.
//
// `Display` de f64 : plus courte écriture décimale qui se relit exactement,
// jamais d’exposant. "valeur -> texte -> valeur" est donc sans perte.

use super::erreurs::{malformee, ResultatCalc};

/// Écriture décimale minimale, sans exposant (`0.1`, `-3`, `1000000`).
pub fn format_litteral_brut(x: f64) -> String {
    format!("{x}")
}

/// Littéral substituable : refuse les valeurs non finies, qui ne se
/// relisent pas comme des nombres.
pub fn format_litteral(x: f64) -> ResultatCalc<String> {
    if !x.is_finite() {
        return malformee("résultat hors des limites d’un f64");
    }
    Ok(format_litteral_brut(x))
}
