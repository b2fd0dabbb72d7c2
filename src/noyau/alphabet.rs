// src/noyau/alphabet.rs
//
// Alphabet autorisé + nettoyage des espaces.
// Première porte du pipeline : après `verifier_caracteres`, tout le reste
// du noyau peut supposer une chaîne 100% ASCII.

use super::erreur::ErreurEval;

/// Les huit opérateurs reconnus (un seul caractère chacun).
pub const OPERATIONS: &str = "+-*/%^$!";

/// Vrai si `c` est l’un des huit opérateurs.
pub fn est_operation(c: char) -> bool {
    OPERATIONS.contains(c)
}

/// Porte n°1 : rejette tout caractère hors {chiffres, `.`, espace, opérateurs}.
pub fn verifier_caracteres(entree: &str) -> Result<(), ErreurEval> {
    let autorise = |c: char| c.is_ascii_digit() || c == '.' || c == ' ' || est_operation(c);

    if entree.chars().all(autorise) {
        Ok(())
    } else {
        Err(ErreurEval::CaractereInterdit)
    }
}

/// Retire TOUS les espaces (aucune validation ici).
/// "2 + 3" et "2+3" deviennent la même chaîne.
pub fn retirer_espaces(entree: &str) -> String {
    entree.chars().filter(|c| *c != ' ').collect()
}
