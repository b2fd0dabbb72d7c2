// src/noyau/gamma.rs
//
// Fonction Γ (approximation de Lanczos, g = 7, 9 coefficients).
// Sert la factorielle via l’identité n! = Γ(n+1).
//
// Précision : ~1e-13 relatif sur le domaine utile ici (arguments ≥ 1).
// La réflexion Γ(x)·Γ(1−x) = π / sin(πx) couvre x < 1/2.

use std::f64::consts::PI;

const G: f64 = 7.0;

const COEFFS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Γ(x) pour x réel (pôles sur les entiers ≤ 0 : renvoie ±inf/NaN IEEE).
pub fn fonction_gamma(x: f64) -> f64 {
    if x < 0.5 {
        // réflexion : Γ(x) = π / (sin(πx) · Γ(1−x))
        return PI / ((PI * x).sin() * fonction_gamma(1.0 - x));
    }

    let x = x - 1.0;
    let t = x + G + 0.5;

    let mut somme = COEFFS[0];
    for (i, c) in COEFFS.iter().enumerate().skip(1) {
        somme += c / (x + i as f64);
    }

    // t^(x+1/2)·e^(−t) sous forme exp(…) : t.powf(x+0.5) déborderait vers
    // l’infini dès ~143! alors que Γ reste représentable jusqu’à 170!.
    let facteur = ((x + 0.5) * t.ln() - t).exp();

    (2.0 * PI).sqrt() * facteur * somme
}

/// Factorielle réelle : x ≤ 0 vaut 1 par convention (couvre 0! et les
/// négatifs sans toucher aux pôles de Γ), sinon Γ(x+1).
pub fn factorielle(x: f64) -> f64 {
    if x <= 0.0 {
        1.0
    } else {
        fonction_gamma(x + 1.0)
    }
}
