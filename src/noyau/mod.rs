//! Noyau de calcul (une opération binaire, huit opérateurs)
//!
//! Organisation interne :
//! - alphabet.rs  : caractères autorisés + retrait des espaces
//! - decoupe.rs   : position de l’opérateur + séparation des opérandes
//! - nombre.rs    : validation littéral décimal signé + conversion f64
//! - operation.rs : jeton d’opération + dispatch
//! - domaine.rs   : division par zéro, racine de négatif, modulo non entier
//! - gamma.rs     : Γ de Lanczos (factorielle)
//! - format.rs    : rendu décimal pour l’UI
//! - erreur.rs    : taxonomie des erreurs
//! - eval.rs      : pipeline complet

pub mod alphabet;
pub mod decoupe;
pub mod domaine;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod gamma;
pub mod nombre;
pub mod operation;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::evaluer;
pub use format::formater_valeur;
