// src/noyau/jetons.rs
//
// Tokenisation paresseuse : `Jetons` est un itérateur, aucune liste de
// jetons n’est conservée au-delà de l’évaluation en cours.
//
// Règles:
// - suite maximale de chiffres et de '.' => Nombre (échec de lecture => ExpressionMalformee)
// - '-' en tête ou juste après un opérateur / '(' ET suivi d’un chiffre ou '.'
//   => signe d’un littéral négatif (ne peut venir que d’une substitution,
//   la validation ayant déjà refusé ces positions dans le texte saisi)
// - + - * / ( ) => jetons correspondants
// - tout autre caractère est ignoré (espaces compris)

use std::fmt;

use super::erreurs::{malformee, ResultatCalc};
use super::format::format_litteral_brut;
use super::operateurs::Operateur;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Op(Operateur),
    ParG,
    ParD,
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(x) => f.write_str(&format_litteral_brut(*x)),
            Jeton::Op(op) => write!(f, "{op}"),
            Jeton::ParG => f.write_str("("),
            Jeton::ParD => f.write_str(")"),
        }
    }
}

pub struct Jetons<'a> {
    src: &'a str,
    i: usize,
}

/// Itérateur de jetons sur `expr`.
pub fn jetons(expr: &str) -> Jetons<'_> {
    Jetons { src: expr, i: 0 }
}

impl Jetons<'_> {
    fn octet(&self, i: usize) -> Option<u8> {
        self.src.as_bytes().get(i).copied()
    }

    fn debut_litteral_negatif(&self) -> bool {
        let apres_ok = matches!(self.octet(self.i + 1), Some(b'0'..=b'9' | b'.'));
        let avant_ok = self.i == 0
            || matches!(
                self.octet(self.i - 1),
                Some(b'+' | b'-' | b'*' | b'/' | b'(')
            );
        apres_ok && avant_ok
    }

    /// Lit un nombre à partir de `debut` ; les chiffres commencent à `self.i`.
    fn nombre(&mut self, debut: usize) -> ResultatCalc<Jeton> {
        while matches!(self.octet(self.i), Some(b'0'..=b'9' | b'.')) {
            self.i += 1;
        }
        let texte = &self.src[debut..self.i];
        match texte.parse::<f64>() {
            Ok(x) => Ok(Jeton::Nombre(x)),
            Err(_) => malformee(format!("nombre illisible '{texte}'")),
        }
    }
}

impl Iterator for Jetons<'_> {
    type Item = ResultatCalc<Jeton>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(c) = self.octet(self.i) {
            match c {
                b'0'..=b'9' | b'.' => {
                    let debut = self.i;
                    return Some(self.nombre(debut));
                }
                b'-' if self.debut_litteral_negatif() => {
                    let debut = self.i;
                    self.i += 1;
                    return Some(self.nombre(debut));
                }
                b'+' | b'-' | b'*' | b'/' => {
                    self.i += 1;
                    return Some(Operateur::try_from(c as char).map(Jeton::Op));
                }
                b'(' => {
                    self.i += 1;
                    return Some(Ok(Jeton::ParG));
                }
                b')' => {
                    self.i += 1;
                    return Some(Ok(Jeton::ParD));
                }
                // ignoré (lecture permissive)
                _ => self.i += 1,
            }
        }
        None
    }
}

/// Format utilitaire (démarche) : jetons séparés par des espaces.
/// S’arrête au premier jeton illisible.
pub fn format_jetons(expr: &str) -> String {
    jetons(expr)
        .map_while(Result::ok)
        .map(|j| j.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
