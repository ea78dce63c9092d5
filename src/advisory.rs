//! Advisory tier classification and recommended-action content.
//!
//! Maps the TNT equivalent of an impact to a coarse severity bucket and
//! a fixed block of three recommended actions per bucket. Content is
//! data, not markup: the UI decides how to render it.

use crate::locale::Language;

/// TNT tonnage at or above which an impact is classified Regional.
pub const REGIONAL_THRESHOLD_TONS: f64 = 1e6;

/// TNT tonnage at or above which an impact is classified Global.
pub const GLOBAL_THRESHOLD_TONS: f64 = 100e6;

/// Coarse severity bucket selecting a fixed set of response actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvisoryTier {
    /// Below one megaton: damage confined to the impact area.
    Localized,
    /// One to one hundred megatons: continent-scale consequences.
    Regional,
    /// A hundred megatons and up: planet-wide emergency.
    Global,
}

impl AdvisoryTier {
    /// Classify a TNT tonnage. Boundary values classify upward:
    /// exactly 1e6 tons is Regional, exactly 100e6 tons is Global.
    pub fn from_tnt_tons(tons: f64) -> Self {
        if tons >= GLOBAL_THRESHOLD_TONS {
            AdvisoryTier::Global
        } else if tons >= REGIONAL_THRESHOLD_TONS {
            AdvisoryTier::Regional
        } else {
            AdvisoryTier::Localized
        }
    }
}

/// Recommended-action block for one tier in one language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advisory {
    /// Block heading.
    pub title: &'static str,
    /// Exactly three recommended actions.
    pub actions: [&'static str; 3],
}

/// Localized impact: evacuation and rescue.
static LOCALIZED_ES: Advisory = Advisory {
    title: "Acciones Sugeridas (Impacto Local)",
    actions: [
        "Emitir alerta de tsunami (si impacta en el mar).",
        "Evacuar zonas cercanas al punto de impacto.",
        "Preparar equipos de rescate y emergencia.",
    ],
};

static LOCALIZED_EN: Advisory = Advisory {
    title: "Suggested Actions (Local Impact)",
    actions: [
        "Issue a tsunami alert (for sea impacts).",
        "Evacuate areas near the impact point.",
        "Prepare rescue and emergency teams.",
    ],
};

/// Regional impact: shelter, ash monitoring, supply reserves.
static REGIONAL_ES: Advisory = Advisory {
    title: "Acciones Sugeridas (Impacto Regional)",
    actions: [
        "Implementar refugios para desplazados.",
        "Monitorear caída global de cenizas.",
        "Asegurar reservas de alimentos y agua.",
    ],
};

static REGIONAL_EN: Advisory = Advisory {
    title: "Suggested Actions (Regional Impact)",
    actions: [
        "Set up shelters for displaced people.",
        "Monitor global ash fall.",
        "Secure food and water reserves.",
    ],
};

/// Global impact: climate emergency, coordination, impact winter.
static GLOBAL_ES: Advisory = Advisory {
    title: "Acciones Sugeridas (Impacto Global)",
    actions: [
        "Activar plan de emergencia climática.",
        "Coordinar respuesta internacional.",
        "Prepararse para un posible 'Invierno de Impacto'.",
    ],
};

static GLOBAL_EN: Advisory = Advisory {
    title: "Suggested Actions (Global Impact)",
    actions: [
        "Activate the climate emergency plan.",
        "Coordinate an international response.",
        "Prepare for a possible 'Impact Winter'.",
    ],
};

/// The action block for a tier in the given language.
pub fn advisory(tier: AdvisoryTier, lang: Language) -> &'static Advisory {
    match (tier, lang) {
        (AdvisoryTier::Localized, Language::Es) => &LOCALIZED_ES,
        (AdvisoryTier::Localized, Language::En) => &LOCALIZED_EN,
        (AdvisoryTier::Regional, Language::Es) => &REGIONAL_ES,
        (AdvisoryTier::Regional, Language::En) => &REGIONAL_EN,
        (AdvisoryTier::Global, Language::Es) => &GLOBAL_ES,
        (AdvisoryTier::Global, Language::En) => &GLOBAL_EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(AdvisoryTier::from_tnt_tons(0.0), AdvisoryTier::Localized);
        assert_eq!(AdvisoryTier::from_tnt_tons(999_999.0), AdvisoryTier::Localized);
        assert_eq!(AdvisoryTier::from_tnt_tons(5e7), AdvisoryTier::Regional);
        assert_eq!(AdvisoryTier::from_tnt_tons(1e12), AdvisoryTier::Global);
    }

    #[test]
    fn test_boundary_values_classify_upward() {
        // Exactly at a threshold belongs to the higher tier
        assert_eq!(AdvisoryTier::from_tnt_tons(1e6), AdvisoryTier::Regional);
        assert_eq!(AdvisoryTier::from_tnt_tons(100e6), AdvisoryTier::Global);
    }

    #[test]
    fn test_reference_scenario_is_regional() {
        // ~7.51e7 tons from the d=100m, v=20km/s, ρ=3000 scenario
        assert_eq!(AdvisoryTier::from_tnt_tons(7.51e7), AdvisoryTier::Regional);
    }

    #[test]
    fn test_every_tier_has_three_actions_in_both_languages() {
        for tier in [
            AdvisoryTier::Localized,
            AdvisoryTier::Regional,
            AdvisoryTier::Global,
        ] {
            for lang in [Language::Es, Language::En] {
                let block = advisory(tier, lang);
                assert!(!block.title.is_empty());
                assert!(block.actions.iter().all(|a| !a.is_empty()));
            }
        }
    }

    #[test]
    fn test_localized_content() {
        let block = advisory(AdvisoryTier::Localized, Language::Es);
        assert_eq!(block.actions[1], "Evacuar zonas cercanas al punto de impacto.");
    }

    #[test]
    fn test_global_content_mentions_impact_winter() {
        let es = advisory(AdvisoryTier::Global, Language::Es);
        assert!(es.actions[2].contains("Invierno de Impacto"));
        let en = advisory(AdvisoryTier::Global, Language::En);
        assert!(en.actions[2].contains("Impact Winter"));
    }
}
