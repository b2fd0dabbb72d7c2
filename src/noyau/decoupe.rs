// src/noyau/decoupe.rs
//
// Localisation de l’opérateur + découpe en deux opérandes.
// Travaille sur la chaîne déjà validée (ASCII) et sans espaces.

use super::alphabet::est_operation;

/// Position du premier opérateur, balayage gauche → droite.
///
/// Un `-` en tête (index 0 uniquement) est un signe, pas un opérateur :
/// il est sauté avant le balayage. Si aucun opérateur n’est trouvé, retourne
/// `s.len()` — le pipeline traite ce cas comme un format invalide explicite.
pub fn position_operation(s: &str) -> usize {
    let depart = usize::from(s.starts_with('-'));

    s.char_indices()
        .skip(depart)
        .find(|&(_, c)| est_operation(c))
        .map_or(s.len(), |(i, _)| i)
}

/// Découpe `s` autour de l’opérateur situé à `position`.
/// L’opérateur lui-même n’apparaît dans aucune des deux parties.
pub fn separer_operandes(s: &str, position: usize) -> (&str, &str) {
    let gauche = &s[..position];
    let droite = &s[position + 1..];
    (gauche, droite)
}
