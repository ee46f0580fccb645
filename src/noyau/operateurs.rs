// src/noyau/operateurs.rs
//
// Table des opérateurs : symbole -> (fonction binaire, précédence).
// Ensemble fermé, pas de dispatch dynamique.

use std::fmt;

use super::erreurs::{ErreurCalc, ResultatCalc};

/// Les quatre symboles reconnus, dans l’ordre de la table.
pub const SYMBOLES: [char; 4] = ['+', '-', '*', '/'];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

/// Vrai si `c` est l’un des quatre symboles d’opération.
pub fn est_symbole(c: char) -> bool {
    SYMBOLES.contains(&c)
}

impl Operateur {
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    /// `+ -` = 1 ; `* /` = 2.
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
        }
    }

    /// Applique l’opérateur à `a` (gauche) et `b` (droite).
    ///
    /// Seule la division est partielle : `b == 0` => `DivisionParZero`
    /// (pas de propagation d’infini ni de NaN IEEE).
    pub fn appliquer(self, a: f64, b: f64) -> ResultatCalc<f64> {
        match self {
            Operateur::Plus => Ok(a + b),
            Operateur::Moins => Ok(a - b),
            Operateur::Fois => Ok(a * b),
            Operateur::Divise => {
                if b == 0.0 {
                    Err(ErreurCalc::DivisionParZero)
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

impl TryFrom<char> for Operateur {
    type Error = ErreurCalc;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operateur::Plus),
            '-' => Ok(Operateur::Moins),
            '*' => Ok(Operateur::Fois),
            '/' => Ok(Operateur::Divise),
            autre => Err(ErreurCalc::ExpressionMalformee(format!(
                "opérateur inconnu '{autre}'"
            ))),
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}
