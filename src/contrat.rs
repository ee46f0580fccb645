// src/contrat.rs
//
// Contrat requête/réponse autour du noyau, sans transport :
//   POST {"expression": "..."}  ->  200 {"result": x}
//                                ->  4xx/5xx {"error": "..."}
//
// C’est ici (et seulement ici) qu’une ErreurCalc devient un statut.

use serde::{Deserialize, Serialize};

use crate::noyau::{evaluer_avec, ErreurCalc, Reglages};

#[derive(Debug, Default, Deserialize)]
pub struct Requete {
    #[serde(default)]
    pub expression: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Corps {
    Resultat { result: f64 },
    Erreur { error: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Statut {
    Ok,
    RequeteInvalide,
    MethodeNonAutorisee,
    ErreurInterne,
}

impl Statut {
    pub fn code(self) -> u16 {
        match self {
            Statut::Ok => 200,
            Statut::RequeteInvalide => 400,
            Statut::MethodeNonAutorisee => 405,
            Statut::ErreurInterne => 500,
        }
    }

    pub fn est_erreur_client(self) -> bool {
        matches!(self, Statut::RequeteInvalide | Statut::MethodeNonAutorisee)
    }
}

/// Classement d’une erreur du noyau : faute de saisie (400) ou erreur interne (500).
pub fn classer(erreur: &ErreurCalc) -> Statut {
    match erreur {
        ErreurCalc::DivisionParZero
        | ErreurCalc::OperateursDupliques
        | ErreurCalc::OperateurEnBordure
        | ErreurCalc::ExpressionVide
        | ErreurCalc::ParenthesesDesequilibrees => Statut::RequeteInvalide,
        ErreurCalc::ExpressionMalformee(_) | ErreurCalc::ImbricationTropProfonde(_) => {
            Statut::ErreurInterne
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reponse {
    pub statut: Statut,
    pub corps: Corps,
}

impl Reponse {
    pub fn resultat(x: f64) -> Self {
        Self {
            statut: Statut::Ok,
            corps: Corps::Resultat { result: x },
        }
    }

    pub fn erreur(statut: Statut, message: impl Into<String>) -> Self {
        Self {
            statut,
            corps: Corps::Erreur {
                error: message.into(),
            },
        }
    }

    pub fn depuis_erreur(erreur: &ErreurCalc) -> Self {
        Self::erreur(classer(erreur), erreur.to_string())
    }

    /// Corps sérialisé, prêt à être envoyé.
    pub fn en_json(&self) -> String {
        serde_json::to_string(&self.corps).unwrap_or_else(|e| {
            log::error!("sérialisation de la réponse impossible: {e}");
            r#"{"error":"sérialisation impossible"}"#.to_string()
        })
    }
}

/// Traite une requête complète (méthode + corps JSON brut).
pub fn traiter(methode: &str, corps: &str, reglages: &Reglages) -> Reponse {
    if methode != "POST" {
        log::debug!("méthode refusée: {methode}");
        return Reponse::erreur(Statut::MethodeNonAutorisee, "méthode non autorisée");
    }

    let requete: Requete = match serde_json::from_str(corps) {
        Ok(r) => r,
        Err(e) => {
            log::debug!("corps JSON invalide: {e}");
            return Reponse::erreur(Statut::RequeteInvalide, "corps JSON invalide");
        }
    };

    repondre(requete.expression.as_deref().unwrap_or_default(), reglages)
}

/// Évalue une expression déjà extraite (espaces de bord retirés).
/// Vide ou absente : même réponse que `ExpressionVide`.
pub fn repondre(expression: &str, reglages: &Reglages) -> Reponse {
    match evaluer_avec(expression.trim(), reglages) {
        Ok(x) => Reponse::resultat(x),
        Err(e) => Reponse::depuis_erreur(&e),
    }
}
