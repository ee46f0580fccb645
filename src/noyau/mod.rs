//! Noyau : évaluateur d’expressions arithmétiques (f64)
//!
//! Organisation interne :
//! - operateurs.rs  : table symbole -> (fonction, précédence)
//! - validation.rs  : doublons d’opérateurs + opérateur en bordure
//! - parentheses.rs : segments de premier niveau + substitution récursive
//! - jetons.rs      : tokenisation paresseuse
//! - evaluateur.rs  : évaluation à deux piles
//! - format.rs      : littéral canonique (aller-retour exact)
//! - erreurs.rs     : taxonomie fermée
//! - reglages.rs    : profondeur max d’imbrication
//! - eval.rs        : pipeline complet

pub mod erreurs;
pub mod eval;
pub mod evaluateur;
pub mod format;
pub mod jetons;
pub mod operateurs;
pub mod parentheses;
pub mod reglages;
pub mod validation;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::{ErreurCalc, ResultatCalc};
pub use eval::{evaluer, evaluer_avec, evaluer_avec_demarche, Demarche, Substitution};
pub use reglages::Reglages;
