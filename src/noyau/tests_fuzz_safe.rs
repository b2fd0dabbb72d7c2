//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées
//! - budget temps global
//! - invariant clé : JAMAIS de panique — tout échec est une `ErreurEval`

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::eval::evaluer;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(1000);
    let mut s = if rng.coin() && rng.coin() {
        format!("-{entier}")
    } else {
        format!("{entier}")
    };
    if rng.coin() {
        s.push('.');
        s.push_str(&format!("{}", rng.pick(100)));
    }
    s
}

fn gen_operateur(rng: &mut Rng) -> char {
    match rng.pick(7) {
        0 => '+',
        1 => '-',
        2 => '*',
        3 => '/',
        4 => '%',
        5 => '^',
        _ => '$',
    }
}

fn gen_expr_binaire(rng: &mut Rng) -> String {
    let a = gen_nombre(rng);
    let b = gen_nombre(rng);
    let op = gen_operateur(rng);
    if rng.coin() {
        format!("{a} {op} {b}")
    } else {
        format!("{a}{op}{b}")
    }
}

fn gen_bruit(rng: &mut Rng, longueur: usize) -> String {
    // soupe de caractères arbitraires (ASCII imprimable + quelques Unicode)
    let palette: &[char] = &[
        '0', '9', '.', ' ', '+', '-', '*', '/', '%', '^', '$', '!', 'a', 'Z', '(', ')', ',', ';',
        'é', 'π', '√',
    ];
    (0..longueur)
        .map(|_| palette[rng.pick(palette.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_binaires_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..500 {
        budget(t0, max);

        let expr = gen_expr_binaire(&mut rng);
        match evaluer(&expr) {
            Ok(_) => vus_ok += 1,
            Err(_) => vus_err += 1,
        }

        // pureté : un second appel rend exactement la même chose
        assert_eq!(evaluer(&expr), evaluer(&expr), "expr={expr:?}");
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(vus_ok > 50, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_classe_sans_paniquer() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let taille = 1 + rng.pick(24) as usize;
        let expr = gen_bruit(&mut rng, taille);

        // pas de panique, et toute erreur appartient à la taxonomie fermée
        if let Err(e) = evaluer(&expr) {
            assert!(
                matches!(
                    e,
                    ErreurEval::CaractereInterdit
                        | ErreurEval::FormatInvalide
                        | ErreurEval::DivisionParZero
                        | ErreurEval::RacineDeNegatif
                        | ErreurEval::ModuloNonEntier
                ),
                "expr={expr:?} erreur hors taxonomie: {e:?}"
            );
        }
    }
}

#[test]
fn fuzz_safe_factorielles_bornees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xFAC_u64);

    for _ in 0..200 {
        budget(t0, max);

        let n = rng.pick(170); // au-delà de 170!, Γ sort du domaine f64 (inf)
        let expr = format!("{n}!");

        let v = evaluer(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        if n == 0 {
            assert_eq!(v, 1.0);
        } else {
            assert!(v >= 1.0 - 1e-9, "expr={expr:?} valeur={v}");
            assert!(v.is_finite(), "expr={expr:?} devrait rester fini");
        }
    }
}

#[test]
fn fuzz_safe_longueur_sans_gel() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // opérandes volontairement énormes : le pipeline reste linéaire
    let gros = "9".repeat(20_000);
    let expr = format!("{gros}+{gros}");

    // hors domaine f64 => inf, mais toujours Ok et défini
    let v = evaluer(&expr).unwrap_or_else(|e| panic!("err={e}"));
    assert!(v.is_infinite());

    budget(t0, max);
}
