//! Industry knowledge lookup.
//!
//! A small injectable table mapping an industry name (a profile `industria`
//! answer) to a Spanish knowledge snippet woven into the prompt. Unknown or
//! missing industries resolve to a designated fallback text, so the builder
//! always has something to say about the sector.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fallback snippet for unrecognized or missing industries.
pub const DEFAULT_KNOWLEDGE: &str = "No hay conocimiento específico del sector disponible. Aplica principios financieros generales para pequeñas y medianas empresas.";

static BUILTIN_SNIPPETS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "Agricultura",
            "Sector agrícola: los ingresos son estacionales y dependen de ciclos de cosecha. Presta atención al flujo de caja entre temporadas, al costo de insumos (semillas, fertilizantes, combustible) y al endeudamiento de corto plazo para capital de trabajo.",
        ),
        (
            "Comercio",
            "Sector comercio: el inventario es el activo crítico. Vigila la rotación de inventario, el margen bruto por línea de producto y los plazos de pago a proveedores frente a los plazos de cobro.",
        ),
        (
            "Manufactura",
            "Sector manufactura: los costos fijos de planta pesan sobre el punto de equilibrio. Revisa el costo unitario de producción, la utilización de capacidad instalada y el ciclo de conversión de efectivo.",
        ),
        (
            "Servicios",
            "Sector servicios: el costo dominante es el personal. Controla la utilización facturable, el ingreso por colaborador y la concentración de clientes en la cartera.",
        ),
        (
            "Tecnología",
            "Sector tecnología: prioriza ingresos recurrentes frente a ingresos por proyecto. Vigila el costo de adquisición de clientes, la tasa de cancelación y la pista de efectivo disponible (runway).",
        ),
        (
            "Construcción",
            "Sector construcción: los proyectos largos difieren la facturación. Controla los anticipos, las retenciones contractuales, el avance de obra certificado frente al costo incurrido y la exposición a un solo mandante.",
        ),
    ])
});

/// Injectable industry-to-snippet lookup with a defined fallback.
#[derive(Debug, Clone)]
pub struct IndustryKnowledge {
    snippets: HashMap<String, String>,
    fallback: String,
}

impl Default for IndustryKnowledge {
    /// The built-in table shipped with the crate.
    fn default() -> Self {
        Self {
            snippets: BUILTIN_SNIPPETS
                .iter()
                .map(|(industry, snippet)| (industry.to_string(), snippet.to_string()))
                .collect(),
            fallback: DEFAULT_KNOWLEDGE.to_string(),
        }
    }
}

impl IndustryKnowledge {
    /// Builds a table from explicit entries and a fallback text.
    pub fn new(
        snippets: impl IntoIterator<Item = (String, String)>,
        fallback: impl Into<String>,
    ) -> Self {
        Self {
            snippets: snippets.into_iter().collect(),
            fallback: fallback.into(),
        }
    }

    /// Resolves the snippet for an industry, falling back for unknown or
    /// missing industries.
    pub fn lookup(&self, industry: Option<&str>) -> &str {
        industry
            .and_then(|name| self.snippets.get(name))
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}
