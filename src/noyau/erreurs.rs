// src/noyau/erreurs.rs
//
// Taxonomie fermée des erreurs du noyau.
// Le noyau ne traduit jamais une erreur en code de statut : c’est le rôle
// de la couche contrat (src/contrat.rs).

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ErreurCalc {
    #[error("expression vide")]
    ExpressionVide,

    /// Deux symboles d’opération (ou plus) collés : "2++2", "1**1".
    #[error("opérateurs dupliqués")]
    OperateursDupliques,

    /// L’expression commence ou finit par un opérateur : "+2", "2+".
    #[error("l’expression ne peut pas commencer ni finir par un opérateur")]
    OperateurEnBordure,

    #[error("parenthèses déséquilibrées")]
    ParenthesesDesequilibrees,

    #[error("division par zéro")]
    DivisionParZero,

    /// Fourre-tout : opérandes manquants, pile résiduelle, nombre illisible.
    #[error("expression invalide : {0}")]
    ExpressionMalformee(String),

    #[error("imbrication de parenthèses trop profonde (max {0})")]
    ImbricationTropProfonde(usize),
}

pub type ResultatCalc<T> = Result<T, ErreurCalc>;

pub(crate) fn malformee<T, S: Into<String>>(detail: S) -> ResultatCalc<T> {
    Err(ErreurCalc::ExpressionMalformee(detail.into()))
}
