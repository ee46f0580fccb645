//! Calculatrice RPN : évaluateur d’expressions infixes (+ - * / et parenthèses)
//! et contrat requête/réponse JSON qui l’expose.

pub mod contrat;
pub mod noyau;

pub use noyau::{evaluer, ErreurCalc, Reglages};
