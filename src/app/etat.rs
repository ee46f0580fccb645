//! src/app/etat.rs
//!
//! État UI (sans vue, sans évaluation).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur,
//! réponse JSON, démarche, réglages) et offrir les actions C/CLR/AC/DEL.

use calculatrice_rpn::contrat::Statut;
use calculatrice_rpn::Reglages;

#[derive(Clone, Default, Debug, PartialEq)]
pub struct DemarcheUi {
    pub substitutions: String,
    pub forme_plate: String,
    pub jetons: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,
    pub statut: Option<Statut>, // classement de la dernière réponse
    pub reponse_json: String,   // corps que le contrat renverrait

    pub demarche: DemarcheUi,

    // --- paramètres ---
    pub reglages: Reglages,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_reglages(Reglages::default())
    }
}

impl AppCalc {
    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            statut: None,
            reponse_json: String::new(),
            demarche: DemarcheUi::default(),
            reglages,
            focus_entree: true,
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats), réglages conservés.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + réponse + démarche.
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.statut = None;
        self.reponse_json.clear();
        self.demarche = DemarcheUi::default();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier symbole (et les espaces qui le précèdent).
    pub fn backspace_entree(&mut self) {
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.focus_entree = true;
    }

    /// On conserve `resultat` (dernier résultat) pour ne pas effacer l’écran
    /// sur une faute ; la démarche, elle, n’est plus fiable.
    pub fn set_erreur(&mut self, msg: impl Into<String>, statut: Statut, json: String) {
        self.erreur = msg.into();
        self.statut = Some(statut);
        self.reponse_json = json;
        self.demarche = DemarcheUi::default();
        self.focus_entree = true;
    }

    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: DemarcheUi, json: String) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.statut = Some(Statut::Ok);
        self.reponse_json = json;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : la profondeur est bornée par `Reglages`.
    pub fn set_profondeur(&mut self, profondeur: usize) {
        self.reglages = self.reglages.avec_profondeur_max(profondeur);
        self.focus_entree = true;
    }

    /// Libellé du classement de l’erreur courante.
    pub fn classe_erreur(&self) -> &'static str {
        match self.statut {
            Some(s) if s.est_erreur_client() => "erreur de saisie",
            Some(Statut::ErreurInterne) => "erreur interne",
            _ => "",
        }
    }
}
