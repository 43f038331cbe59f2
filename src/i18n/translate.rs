use super::{LabelKey, Locale, UnsupportedLocaleError};

/// Label catalog mapping `(key, locale)` pairs to display strings.
///
/// The catalog itself is compiled in and immutable; an instance only carries
/// the set of locales the embedding application has chosen to support.
/// Lookups for a locale outside that set fail, lookups for a missing
/// translation fall back to the key's English text.
#[derive(Debug, Clone)]
pub struct Translate {
    supported: Vec<Locale>,
}

impl Translate {
    /// A catalog supporting every shipped locale.
    pub fn new() -> Self {
        Translate {
            supported: Locale::ALL.to_vec(),
        }
    }

    /// A catalog restricted to the given locales.
    pub fn with_locales(locales: &[Locale]) -> Self {
        Translate {
            supported: locales.to_vec(),
        }
    }

    pub fn is_supported(&self, locale: Locale) -> bool {
        self.supported.contains(&locale)
    }

    pub fn supported_locales(&self) -> &[Locale] {
        &self.supported
    }

    pub fn label(
        &self,
        key: LabelKey,
        locale: Locale,
    ) -> Result<&'static str, UnsupportedLocaleError> {
        if !self.is_supported(locale) {
            return Err(UnsupportedLocaleError {
                tag: locale.tag().to_string(),
            });
        }
        Ok(pattern(key, locale).unwrap_or_else(|| key.name()))
    }
}

impl Default for Translate {
    fn default() -> Self {
        Translate::new()
    }
}

fn pattern(key: LabelKey, locale: Locale) -> Option<&'static str> {
    match locale {
        Locale::En => Some(key.name()),
        Locale::De => german(key),
        Locale::Fr => french(key),
        Locale::It => italian(key),
    }
}

fn german(key: LabelKey) -> Option<&'static str> {
    match key {
        LabelKey::PositionIndexAscending => Some("Positionsindex aufsteigend"),
        LabelKey::PositionIndexDescending => Some("Positionsindex absteigend"),
        LabelKey::InsertionOrderAscending => Some("Einfügereihenfolge aufsteigend"),
        LabelKey::InsertionOrderDescending => Some("Einfügereihenfolge absteigend"),
        LabelKey::AlphabeticAscending => Some("Alphabetisch aufsteigend"),
        LabelKey::AlphabeticDescending => Some("Alphabetisch absteigend"),
        LabelKey::Home => Some("Startseite"),
        LabelKey::PublicHome => Some("Öffentliche Startseite"),
        LabelKey::PrivateHome => Some("Private Startseite"),
        LabelKey::Login => Some("Anmelden"),
        LabelKey::Logout => Some("Abmelden"),
        LabelKey::Settings => Some("Einstellungen"),
        LabelKey::Notifications => Some("Benachrichtigungen"),
        LabelKey::MessageBox => Some("Nachrichtenbox"),
        LabelKey::SystemAccount => Some("Systemkonto"),
    }
}

fn french(key: LabelKey) -> Option<&'static str> {
    match key {
        LabelKey::PositionIndexAscending => Some("Index de position croissant"),
        LabelKey::PositionIndexDescending => Some("Index de position décroissant"),
        LabelKey::InsertionOrderAscending => Some("Ordre d'insertion croissant"),
        LabelKey::InsertionOrderDescending => Some("Ordre d'insertion décroissant"),
        LabelKey::AlphabeticAscending => Some("Alphabétique croissant"),
        LabelKey::AlphabeticDescending => Some("Alphabétique décroissant"),
        LabelKey::Home => Some("Accueil"),
        LabelKey::PublicHome => Some("Accueil public"),
        LabelKey::PrivateHome => Some("Accueil privé"),
        LabelKey::Login => Some("Connexion"),
        LabelKey::Logout => Some("Déconnexion"),
        LabelKey::Settings => Some("Paramètres"),
        LabelKey::Notifications => Some("Notifications"),
        LabelKey::MessageBox => Some("Boîte de messages"),
        LabelKey::SystemAccount => Some("Compte système"),
    }
}

// Italian coverage is partial; untranslated keys fall back to English.
fn italian(key: LabelKey) -> Option<&'static str> {
    match key {
        LabelKey::PositionIndexAscending => Some("Indice di posizione crescente"),
        LabelKey::PositionIndexDescending => Some("Indice di posizione decrescente"),
        LabelKey::AlphabeticAscending => Some("Alfabetico crescente"),
        LabelKey::AlphabeticDescending => Some("Alfabetico decrescente"),
        LabelKey::Home => Some("Pagina iniziale"),
        LabelKey::Login => Some("Accedi"),
        LabelKey::Logout => Some("Esci"),
        LabelKey::Settings => Some("Impostazioni"),
        LabelKey::Notifications => Some("Notifiche"),
        _ => None,
    }
}
