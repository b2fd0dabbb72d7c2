// src/noyau/operation.rs
//
// Jeton d’opération (un caractère) + table de dispatch.
// La table est une pure fonction `match` : lecture seule, aucune
// construction au démarrage, aucun état global.

use super::gamma::factorielle;

/// Les huit opérations, une par caractère de l’alphabet `+-*/%^$!`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Addition,       // +
    Soustraction,   // -
    Multiplication, // *
    Division,       // /
    Modulo,         // %
    Puissance,      // ^
    Racine,         // $  (gauche^(1/droite))
    Factorielle,    // !  (unaire, opérande droit vide)
}

impl Operation {
    /// Jeton depuis le caractère localisé par la découpe.
    pub fn depuis_caractere(c: char) -> Option<Operation> {
        let op = match c {
            '+' => Operation::Addition,
            '-' => Operation::Soustraction,
            '*' => Operation::Multiplication,
            '/' => Operation::Division,
            '%' => Operation::Modulo,
            '^' => Operation::Puissance,
            '$' => Operation::Racine,
            '!' => Operation::Factorielle,
            _ => return None,
        };
        Some(op)
    }

    /// Vrai pour `!` (forme unaire : pas d’opérande droit).
    pub fn est_unaire(self) -> bool {
        self == Operation::Factorielle
    }

    /// Applique l’opération aux deux valeurs.
    ///
    /// Préconditions (garanties par les portes amont du pipeline) :
    /// - `Modulo` : opérandes entiers, `droite != 0`
    /// - `Factorielle` : `droite` ignoré
    pub fn appliquer(self, gauche: f64, droite: f64) -> f64 {
        match self {
            Operation::Addition => gauche + droite,
            Operation::Soustraction => gauche - droite,
            Operation::Multiplication => gauche * droite,
            Operation::Division => gauche / droite,
            Operation::Modulo => ((gauche.trunc() as i64) % (droite.trunc() as i64)) as f64,
            Operation::Puissance => gauche.powf(droite),
            Operation::Racine => gauche.powf(1.0 / droite),
            Operation::Factorielle => factorielle(gauche),
        }
    }
}
