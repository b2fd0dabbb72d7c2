//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur,
//! décimales, historique) et offrir des opérations simples (C/CLR/AC)
//! sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur les décimales et sur la taille de l’historique.

/// Décimales affichées par défaut.
const DECIMALES_DEFAUT: usize = 6;

/// Garde-fou : f64 n’a pas plus de 17 chiffres significatifs utiles.
const DECIMALES_MAX: usize = 17;

/// Garde-fou : taille maximale de l’historique (les plus anciens sortent).
const HISTORIQUE_MAX: usize = 50;

/// Une ligne d’historique : l’expression telle que saisie + son rendu.
#[derive(Clone, Debug)]
pub struct LigneHistorique {
    pub expression: String,
    pub rendu: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,     // rendu décimal du dernier calcul réussi
    pub erreur: String,       // message d’erreur (si le noyau refuse)
    pub resultat_dispo: bool, // false si rien à lire (démarrage, erreur jamais)

    // --- historique (dernier en tête) ---
    pub historique: Vec<LigneHistorique>,

    // --- paramètres ---
    pub decimales: usize, // précision du rendu

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            resultat_dispo: false, // au démarrage : rien à lire
            historique: Vec::new(),
            decimales: DECIMALES_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + historique + décimales).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.historique.clear();
        self.decimales = DECIMALES_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur (l’historique reste).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.resultat_dispo = false;
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `resultat` (dernier calcul réussi) pour ne pas
    ///   “effacer l’écran” sur une faute de frappe.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat et pousser la ligne dans l’historique.
    pub fn set_resultat(&mut self, expression: impl Into<String>, rendu: impl Into<String>) {
        let rendu = rendu.into();

        self.erreur.clear();
        self.resultat = rendu.clone();
        self.resultat_dispo = true;

        self.historique.insert(
            0,
            LigneHistorique {
                expression: expression.into(),
                rendu,
            },
        );
        self.historique.truncate(HISTORIQUE_MAX);

        self.focus_entree = true;
    }

    /// Garde-fou : borne les décimales affichées.
    pub fn set_decimales(&mut self, decimales: usize) {
        self.decimales = decimales.clamp(0, DECIMALES_MAX);
        self.focus_entree = true;
    }
}
