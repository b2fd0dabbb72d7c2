//! Noyau — évaluation (pipeline réel)
//!
//! caractères -> espaces -> position opérateur -> découpe
//!          -> (cas `!` unaire) -> nombres -> domaine -> dispatch
//!
//! Chaque étape est une porte à sortie anticipée : la PREMIÈRE erreur
//! rencontrée est retournée telle quelle, sans retour en arrière ni reprise.

use super::alphabet::{retirer_espaces, verifier_caracteres};
use super::decoupe::{position_operation, separer_operandes};
use super::domaine::verifier_domaine;
use super::erreur::ErreurEval;
use super::nombre::analyser_nombre;
use super::operation::Operation;

/// API publique : évalue une expression binaire ("A op B", ou "A!")
/// et retourne sa valeur f64, ou la première erreur détectée.
///
/// Pure et sans état : même chaîne => même résultat, appels concurrents sûrs.
pub fn evaluer(expression: &str) -> Result<f64, ErreurEval> {
    // 1) alphabet (après cette porte : ASCII garanti)
    verifier_caracteres(expression)?;

    // 2) espaces ("2 + 3" ≡ "2+3")
    let nettoye = retirer_espaces(expression);

    // 3) position de l’opérateur (signe de tête saute)
    let position = position_operation(&nettoye);
    if position == nettoye.len() {
        // aucun opérateur ("", "5", "-5") : format invalide explicite
        return Err(ErreurEval::FormatInvalide);
    }

    // 4) découpe autour de l’opérateur
    let (gauche_txt, droite_txt) = separer_operandes(&nettoye, position);

    let caractere = nettoye[position..]
        .chars()
        .next()
        .ok_or(ErreurEval::FormatInvalide)?;
    let op = Operation::depuis_caractere(caractere).ok_or(ErreurEval::FormatInvalide)?;

    // 5) cas `!` : unaire, l’opérande droit doit être vide
    if op.est_unaire() {
        if !droite_txt.is_empty() {
            return Err(ErreurEval::FormatInvalide);
        }
        let gauche = analyser_nombre(gauche_txt)?;
        return Ok(op.appliquer(gauche, 0.0));
    }

    // 6) nombres (gauche puis droite, premier échec gagne)
    let gauche = analyser_nombre(gauche_txt)?;
    let droite = analyser_nombre(droite_txt)?;

    // 7) domaine (seulement une fois la syntaxe acquise)
    verifier_domaine(op, gauche, droite)?;

    // 8) dispatch
    Ok(op.appliquer(gauche, droite))
}
