// src/noyau/nombre.rs
//
// Validation d’un littéral décimal signé + conversion en f64.
//
// Règles (portes successives, premier échec gagne) :
// - non vide
// - premier caractère : chiffre ou `-`
// - après un `-` de tête : un chiffre obligatoire (donc `-.5` et `-` rejetés)
// - au plus un `.`, jamais en dernière position
// - tout le reste : chiffres

use super::erreur::ErreurEval;

/// Vrai si `s` est un littéral décimal signé bien formé.
pub fn est_nombre_valide(s: &str) -> bool {
    let octets = s.as_bytes();

    let premier = match octets.first() {
        Some(o) => *o,
        None => return false,
    };
    if !premier.is_ascii_digit() && premier != b'-' {
        return false;
    }

    // `-` de tête : le caractère suivant doit exister et être un chiffre.
    if premier == b'-' && !matches!(octets.get(1), Some(o) if o.is_ascii_digit()) {
        return false;
    }

    let mut points = 0usize;
    for &o in &octets[1..] {
        match o {
            b'.' => {
                points += 1;
                if points > 1 {
                    return false;
                }
            }
            _ if o.is_ascii_digit() => {}
            _ => return false,
        }
    }

    !s.ends_with('.')
}

/// Valide puis convertit `s` en f64.
/// Tout littéral accepté par `est_nombre_valide` est un décimal signé que
/// `str::parse` sait lire ; on mappe quand même l’échec (pas de panique).
pub fn analyser_nombre(s: &str) -> Result<f64, ErreurEval> {
    if !est_nombre_valide(s) {
        return Err(ErreurEval::FormatInvalide);
    }
    s.parse::<f64>().map_err(|_| ErreurEval::FormatInvalide)
}
