// src/noyau/reglages.rs
//
// Réglages du noyau (aucun état global : une valeur est passée à chaque appel).

use std::env;

/// Profondeur d’imbrication par défaut.
pub const PROFONDEUR_DEFAUT: usize = 100;

/// Garde-fou : on borne la profondeur (anti-débordement de pile).
/// Chaque niveau coûte quelques trames de pile ; 500 tient dans une pile
/// de thread standard (2 Mio) même en build debug.
pub const PROFONDEUR_MAX: usize = 500;

/// Variable d’environnement lue par `Reglages::depuis_env`.
pub const VAR_PROFONDEUR: &str = "CALC_PROFONDEUR_MAX";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    /// Nombre maximal de niveaux de parenthèses imbriquées.
    /// Privé : seule `avec_profondeur_max` l’écrit, toujours bornée.
    profondeur_max: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            profondeur_max: PROFONDEUR_DEFAUT,
        }
    }
}

impl Reglages {
    pub fn profondeur_max(&self) -> usize {
        self.profondeur_max
    }

    /// Borne la profondeur dans `1..=PROFONDEUR_MAX`.
    pub fn avec_profondeur_max(mut self, profondeur: usize) -> Self {
        self.profondeur_max = profondeur.clamp(1, PROFONDEUR_MAX);
        self
    }

    /// Lit `CALC_PROFONDEUR_MAX` ; valeur absente ou illisible => défaut.
    pub fn depuis_env() -> Self {
        Self::depuis_valeur(env::var(VAR_PROFONDEUR).ok().as_deref())
    }

    fn depuis_valeur(valeur: Option<&str>) -> Self {
        let defaut = Self::default();
        match valeur.map(str::trim) {
            None | Some("") => defaut,
            Some(v) => match v.parse::<usize>() {
                Ok(n) => defaut.avec_profondeur_max(n),
                Err(e) => {
                    log::warn!(
                        "{VAR_PROFONDEUR}={v:?} illisible ({e}), profondeur par défaut {PROFONDEUR_DEFAUT}"
                    );
                    defaut
                }
            },
        }
    }
}
