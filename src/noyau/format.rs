// src/noyau/format.rs
//
// Rendu décimal d’un résultat pour l’affichage (UI).
// Le noyau retourne un f64 brut ; ici on borne le nombre de décimales
// et on retire les zéros de queue. Aucune incidence sur le calcul.

/// Rend `v` avec au plus `decimales` chiffres après la virgule.
/// - valeurs non finies nommées telles quelles ("inf", "-inf", "NaN")
/// - zéros de queue retirés ("2.5000" -> "2.5", "3.000" -> "3")
pub fn formater_valeur(v: f64, decimales: usize) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }

    let texte = format!("{v:.decimales$}");

    if !texte.contains('.') {
        return texte;
    }

    let sans_zeros = texte.trim_end_matches('0').trim_end_matches('.');
    sans_zeros.to_string()
}
