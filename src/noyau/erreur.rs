// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// - Chaque étape du pipeline s’arrête sur la PREMIÈRE erreur détectée.
// - Jamais de panique côté noyau : tout échec est une valeur.

use std::fmt;

/// Erreur d’évaluation : exactement une catégorie par échec.
///
/// Les trois dernières (domaine arithmétique) ne sont vérifiées qu’après
/// la validité syntaxique des deux opérandes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErreurEval {
    /// Caractère hors alphabet autorisé (chiffres, `.`, espace, opérateurs).
    CaractereInterdit,
    /// Littéral numérique mal formé, opérateur absent, ou `!` mal employé.
    FormatInvalide,
    /// Division (ou modulo) avec un diviseur nul.
    DivisionParZero,
    /// Racine (`$`) d’une base négative.
    RacineDeNegatif,
    /// Modulo (`%`) sur au moins une valeur non entière.
    ModuloNonEntier,
}

impl fmt::Display for ErreurEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ErreurEval::CaractereInterdit => "caractère interdit dans l’expression",
            ErreurEval::FormatInvalide => "format invalide (nombre ou opération)",
            ErreurEval::DivisionParZero => "division par zéro",
            ErreurEval::RacineDeNegatif => "racine d’un nombre négatif",
            ErreurEval::ModuloNonEntier => "modulo sur valeur non entière",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ErreurEval {}
