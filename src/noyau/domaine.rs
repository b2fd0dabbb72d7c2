// src/noyau/domaine.rs
//
// Portes de domaine arithmétique (opérations binaires uniquement).
// Vérifiées APRÈS la validité syntaxique des deux opérandes, sur les
// valeurs déjà converties.

use super::erreur::ErreurEval;
use super::operation::Operation;

/// Contrôle du domaine pour (op, gauche, droite).
///
/// - `/` ou `%` avec droite == 0  -> DivisionParZero
///   (`%` inclus : `i64 % 0` serait une panique, jamais acceptable ici)
/// - `$` avec gauche < 0          -> RacineDeNegatif, quel que soit le degré
/// - `%` avec opérande non entier -> ModuloNonEntier (troncature ≠ valeur)
pub fn verifier_domaine(op: Operation, gauche: f64, droite: f64) -> Result<(), ErreurEval> {
    if matches!(op, Operation::Division | Operation::Modulo) && droite == 0.0 {
        return Err(ErreurEval::DivisionParZero);
    }

    if op == Operation::Racine && gauche < 0.0 {
        return Err(ErreurEval::RacineDeNegatif);
    }

    if op == Operation::Modulo && (gauche.trunc() != gauche || droite.trunc() != droite) {
        return Err(ErreurEval::ModuloNonEntier);
    }

    Ok(())
}
