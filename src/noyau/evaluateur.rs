// src/noyau/evaluateur.rs
//
// Évaluation à deux piles (shunting-yard sans sortie RPN intermédiaire) :
// - pile de nombres
// - pile d’opérateurs (+ marqueur de parenthèse ouvrante)
//
// Les réductions se font au fil du balayage : un opérateur entrant fait
// réduire tant que le sommet a une précédence >= (associativité à gauche).

use super::erreurs::{malformee, ErreurCalc, ResultatCalc};
use super::jetons::{jetons, Jeton};
use super::operateurs::Operateur;

#[derive(Clone, Copy, Debug)]
enum Entree {
    Op(Operateur),
    ParG,
}

#[derive(Default)]
struct Piles {
    nombres: Vec<f64>,
    ops: Vec<Entree>,
}

impl Piles {
    /// Dépile b (sommet) puis a, pousse `a op b`.
    fn appliquer(&mut self, op: Operateur) -> ResultatCalc<()> {
        let (Some(b), Some(a)) = (self.nombres.pop(), self.nombres.pop()) else {
            return malformee(format!("opérandes manquants pour '{op}'"));
        };
        let r = op.appliquer(a, b)?;
        log::trace!("réduction {a} {op} {b} = {r}");
        self.nombres.push(r);
        Ok(())
    }

    /// ')' : réduit jusqu’au marqueur '(' (retiré).
    fn fermer(&mut self) -> ResultatCalc<()> {
        loop {
            match self.ops.pop() {
                Some(Entree::ParG) => return Ok(()),
                Some(Entree::Op(op)) => self.appliquer(op)?,
                None => return Err(ErreurCalc::ParenthesesDesequilibrees),
            }
        }
    }

    fn pousser_operateur(&mut self, entrant: Operateur) -> ResultatCalc<()> {
        while let Some(&Entree::Op(sommet)) = self.ops.last() {
            if sommet.precedence() < entrant.precedence() {
                break;
            }
            self.ops.pop();
            self.appliquer(sommet)?;
        }
        self.ops.push(Entree::Op(entrant));
        Ok(())
    }

    fn terminer(mut self) -> ResultatCalc<f64> {
        while let Some(entree) = self.ops.pop() {
            match entree {
                Entree::Op(op) => self.appliquer(op)?,
                Entree::ParG => return Err(ErreurCalc::ParenthesesDesequilibrees),
            }
        }

        match self.nombres.as_slice() {
            [x] => Ok(*x),
            [] => malformee("aucune valeur"),
            reste => malformee(format!("{} valeurs sans opérateur", reste.len())),
        }
    }
}

/// Évalue une expression sans parenthèses de premier niveau.
///
/// Les parenthèses restantes sont tout de même gérées par la pile
/// d’opérateurs ; un déséquilibre donne `ParenthesesDesequilibrees`.
pub fn evaluer_plat(expr: &str) -> ResultatCalc<f64> {
    let mut piles = Piles::default();

    for jeton in jetons(expr) {
        match jeton? {
            Jeton::Nombre(x) => piles.nombres.push(x),
            Jeton::Op(op) => piles.pousser_operateur(op)?,
            Jeton::ParG => piles.ops.push(Entree::ParG),
            Jeton::ParD => piles.fermer()?,
        }
    }

    piles.terminer()
}
