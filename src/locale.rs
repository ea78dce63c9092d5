//! Interface translations and locale-aware number formatting.
//!
//! Spanish is the default language, matching the original audience;
//! English is available from the language selector.

use crate::impact::TntDisplay;

/// Supported interface languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    /// Spanish (default).
    #[default]
    Es,
    /// English.
    En,
}

impl Language {
    /// Thousands separator for integer grouping.
    fn thousands_separator(&self) -> char {
        match self {
            Language::Es => '.',
            Language::En => ',',
        }
    }

    /// Short label for the language selector.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Es => "Español",
            Language::En => "English",
        }
    }
}

/// Static interface strings for one language.
pub struct Strings {
    pub title: &'static str,
    pub adjust: &'static str,
    pub start: &'static str,
    pub deflect: &'static str,
    pub deflect_active: &'static str,
    pub diameter: &'static str,
    pub velocity: &'static str,
    pub density: &'static str,
    pub results: &'static str,
    pub energy: &'static str,
    pub tnt: &'static str,
    pub crater: &'static str,
    pub seismic: &'static str,
    pub finished: &'static str,
    pub load_data: &'static str,
    pub loading: &'static str,
    pub load_error: &'static str,
    pub select: &'static str,
    pub view_crater: &'static str,
    pub learn_more: &'static str,
    pub details_title: &'static str,
    pub close: &'static str,
    pub language: &'static str,
    pub tons: &'static str,
    pub megatons: &'static str,
    pub gigatons: &'static str,
}

static ES: Strings = Strings {
    title: "Simulación Impacto Meteoritos",
    adjust: "Ajusta los parámetros",
    start: "Simular Impacto",
    deflect: "Activar Desviación",
    deflect_active: "Desviación Activada",
    diameter: "Diámetro (m)",
    velocity: "Velocidad (km/s)",
    density: "Densidad (kg/m³)",
    results: "Resultados del Impacto",
    energy: "Energía",
    tnt: "Equivalente TNT",
    crater: "Tamaño estimado del cráter",
    seismic: "Magnitud sísmica aproximada",
    finished: "SIMULACIÓN TERMINADA",
    load_data: "Cargar datos de un asteroide real (NASA)",
    loading: "Cargando asteroides...",
    load_error: "Error al cargar datos",
    select: "Selecciona un asteroide",
    view_crater: "Ver Cráter",
    learn_more: "Aprender más...",
    details_title: "Datos del Impacto",
    close: "Cerrar",
    language: "Idioma",
    tons: "toneladas",
    megatons: "megatoneladas",
    gigatons: "gigatoneladas",
};

static EN: Strings = Strings {
    title: "Meteor Impact Simulation",
    adjust: "Adjust Parameters",
    start: "Simulate Impact",
    deflect: "Activate Deflection",
    deflect_active: "Deflection Activated",
    diameter: "Diameter (m)",
    velocity: "Velocity (km/s)",
    density: "Density (kg/m³)",
    results: "Impact Results",
    energy: "Energy",
    tnt: "TNT Equivalent",
    crater: "Estimated Crater Size",
    seismic: "Approximate Seismic Magnitude",
    finished: "SIMULATION ENDED",
    load_data: "Load real asteroid data (NASA)",
    loading: "Loading asteroids...",
    load_error: "Failed to load data",
    select: "Select an asteroid",
    view_crater: "View Crater",
    learn_more: "Learn More...",
    details_title: "Impact Data",
    close: "Close",
    language: "Language",
    tons: "tons",
    megatons: "megatons",
    gigatons: "gigatons",
};

/// The interface string table for a language.
pub fn strings(lang: Language) -> &'static Strings {
    match lang {
        Language::Es => &ES,
        Language::En => &EN,
    }
}

/// Format a non-negative value as a grouped integer with no fractional
/// digits, rounding to the nearest whole number.
pub fn group_thousands(value: f64, lang: Language) -> String {
    let rounded = value.max(0.0).round() as u64;
    let digits = rounded.to_string();
    let sep = lang.thousands_separator();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(ch);
    }
    grouped
}

/// Format a bucketed TNT equivalent for display.
///
/// Mega- and gigaton values keep two decimals; tons are grouped whole
/// numbers with no fractional digits.
pub fn format_tnt(display: TntDisplay, lang: Language) -> String {
    let s = strings(lang);
    match display {
        TntDisplay::Tons(t) => format!("{} {}", group_thousands(t, lang), s.tons),
        TntDisplay::Megatons(mt) => format!("{mt:.2} {}", s.megatons),
        TntDisplay::Gigatons(gt) => format!("{gt:.2} {}", s.gigatons),
    }
}
