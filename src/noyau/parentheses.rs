// src/noyau/parentheses.rs
//
// Résolution des parenthèses de premier niveau.
//
// 1. repérer les segments "(...)" dont la fermeture ramène la profondeur à 0
// 2. évaluer chaque intérieur via le pipeline complet (récursion mutuelle)
// 3. recoller : chaque segment est remplacé PAR SA POSITION dans le texte
//    d’origine, jamais par recherche textuelle (deux segments identiques
//    comme "(2+2)*(2+2)" sont donc résolus indépendamment)

use std::borrow::Cow;

use super::erreurs::{ErreurCalc, ResultatCalc};
use super::eval::{evaluer_niveau, Demarche, Substitution};
use super::format::format_litteral;
use super::reglages::Reglages;

/// Segment `[debut, fin)` (octets) : `debut` sur '(' et `fin` juste après ')'.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub debut: usize,
    pub fin: usize,
}

impl Segment {
    /// Texte complet, parenthèses comprises.
    pub(crate) fn texte<'a>(&self, expr: &'a str) -> &'a str {
        &expr[self.debut..self.fin]
    }

    /// Texte sans les parenthèses englobantes.
    pub(crate) fn interieur<'a>(&self, expr: &'a str) -> &'a str {
        &expr[self.debut + 1..self.fin - 1]
    }
}

/// Segments de premier niveau, dans l’ordre d’apparition.
///
/// ')' sans '(' correspondante, ou '(' jamais fermée => `ParenthesesDesequilibrees`.
pub fn trouver_segments(expr: &str) -> ResultatCalc<Vec<Segment>> {
    let mut ouvertes: Vec<usize> = Vec::new();
    let mut segments = Vec::new();

    for (i, c) in expr.char_indices() {
        match c {
            '(' => ouvertes.push(i),
            ')' => {
                let debut = ouvertes
                    .pop()
                    .ok_or(ErreurCalc::ParenthesesDesequilibrees)?;
                if ouvertes.is_empty() {
                    segments.push(Segment { debut, fin: i + 1 });
                }
            }
            _ => {}
        }
    }

    if !ouvertes.is_empty() {
        return Err(ErreurCalc::ParenthesesDesequilibrees);
    }
    Ok(segments)
}

/// Remplace chaque segment de premier niveau par la valeur de son intérieur.
pub(crate) fn resoudre<'a>(
    expr: &'a str,
    niveau: usize,
    reglages: &Reglages,
    mut demarche: Option<&mut Demarche>,
) -> ResultatCalc<Cow<'a, str>> {
    let segments = trouver_segments(expr)?;
    if segments.is_empty() {
        return Ok(Cow::Borrowed(expr));
    }

    let mut sortie = String::with_capacity(expr.len());
    let mut curseur = 0;

    for seg in segments {
        let valeur = evaluer_niveau(
            seg.interieur(expr),
            niveau + 1,
            reglages,
            demarche.as_deref_mut(),
        )?;
        let litteral = format_litteral(valeur)?;
        log::trace!("niveau {}: {} -> {litteral}", niveau + 1, seg.texte(expr));

        sortie.push_str(&expr[curseur..seg.debut]);
        sortie.push_str(&litteral);
        curseur = seg.fin;

        if let Some(d) = demarche.as_deref_mut() {
            d.substitutions.push(Substitution {
                niveau: niveau + 1,
                segment: seg.texte(expr).to_string(),
                litteral,
            });
        }
    }
    sortie.push_str(&expr[curseur..]);

    Ok(Cow::Owned(sortie))
}
