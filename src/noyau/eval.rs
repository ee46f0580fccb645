//! Noyau : évaluation (pipeline réel)
//!
//! vide ? -> validation -> parenthèses (récursif) -> évaluation à deux piles
//!
//! Chaque appel crée ses propres piles (et sa démarche, si demandée) : aucune donnée
//! partagée entre appels, donc appelable en parallèle sans coordination.

use std::fmt;

use super::erreurs::{malformee, ErreurCalc, ResultatCalc};
use super::evaluateur::evaluer_plat;
use super::jetons::format_jetons;
use super::parentheses::resoudre;
use super::reglages::Reglages;
use super::validation::valider;

/// Une parenthèse résolue : `segment` (texte d’origine) remplacé par `litteral`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Substitution {
    pub niveau: usize,
    pub segment: String,
    pub litteral: String,
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.segment, self.litteral)
    }
}

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    /// Dans l’ordre où elles se terminent (intérieur d’abord).
    pub substitutions: Vec<Substitution>,
    /// Forme sans parenthèses évaluée au niveau 0.
    pub forme_plate: String,
    /// Jetons de la forme plate.
    pub jetons: String,
}

/// API publique : évalue `expr` avec les réglages par défaut.
pub fn evaluer(expr: &str) -> ResultatCalc<f64> {
    evaluer_avec(expr, &Reglages::default())
}

/// Sans démarche : rien n’est conservé des niveaux intermédiaires.
pub fn evaluer_avec(expr: &str, reglages: &Reglages) -> ResultatCalc<f64> {
    journaliser(expr, evaluer_niveau(expr, 0, reglages, None))
}

/// Évalue et retourne aussi la démarche (substitutions + forme plate).
pub fn evaluer_avec_demarche(
    expr: &str,
    reglages: &Reglages,
) -> ResultatCalc<(f64, Demarche)> {
    let mut demarche = Demarche::default();
    let x = journaliser(expr, evaluer_niveau(expr, 0, reglages, Some(&mut demarche)))?;
    Ok((x, demarche))
}

fn journaliser(expr: &str, r: ResultatCalc<f64>) -> ResultatCalc<f64> {
    match &r {
        Ok(x) => log::debug!("{expr:?} = {x}"),
        Err(e) => log::debug!("{expr:?} : {e}"),
    }
    r
}

/// Pipeline complet à un niveau d’imbrication donné (0 = expression saisie).
///
/// `demarche` à `None` : aucune trace n’est construite.
pub(crate) fn evaluer_niveau(
    expr: &str,
    niveau: usize,
    reglages: &Reglages,
    mut demarche: Option<&mut Demarche>,
) -> ResultatCalc<f64> {
    let profondeur_max = reglages.profondeur_max();
    if niveau > profondeur_max {
        return Err(ErreurCalc::ImbricationTropProfonde(profondeur_max));
    }
    if expr.is_empty() {
        return Err(ErreurCalc::ExpressionVide);
    }

    let expr = valider(expr)?;
    let plate = resoudre(expr, niveau, reglages, demarche.as_deref_mut())?;
    let x = evaluer_plat(&plate)?;
    if !x.is_finite() {
        return malformee("résultat hors des limites d’un f64");
    }

    if niveau == 0 {
        log::debug!("forme plate {plate:?}");
        if let Some(d) = demarche {
            d.jetons = format_jetons(&plate);
            d.forme_plate = plate.into_owned();
        }
    }
    Ok(x)
}
