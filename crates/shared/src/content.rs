//! Static page content. Immutable for the session.

use crate::domain::{RegionId, SkillEntry, SKILLS_REGION};

pub const WHATSAPP_URL: &str = "https://wa.me/50764931573";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/ezra-tawachi-494ab01ab/";
pub const ETSY_URL: &str = "https://www.etsy.com/shop/sheetsbrewery/";
pub const MAIL_URL: &str = "mailto:ezrawachi@gmail.com";
pub const PHONE_URL: &str = "tel:+50764931573";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    /// Navigate to an outbound URL.
    Link(&'static str),
    /// Copy the current page URL to the clipboard.
    CopyPageLink,
}

#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub icon: &'static str,
    pub text: &'static str,
    pub action: ContactAction,
}

impl Contact {
    /// External web destinations open in a new tab; `mailto:`/`tel:` do not.
    pub fn opens_new_tab(&self) -> bool {
        matches!(self.action, ContactAction::Link(url) if url.starts_with("http"))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Job {
    pub title: &'static str,
    pub period: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub location: &'static str,
    pub pitch: &'static str,
    pub focus: &'static str,
}

#[derive(Debug, Clone)]
pub struct ResumeContent {
    pub profile: Profile,
    pub tags: &'static [&'static str],
    pub stats: &'static [Stat],
    pub contacts: &'static [Contact],
    pub experience: &'static [Job],
    pub skills: Vec<SkillEntry>,
    pub achievements: &'static [&'static str],
    pub achievements_note: &'static str,
    pub projects: &'static [Project],
    pub education: &'static [&'static str],
    pub languages: &'static [&'static str],
    pub about: &'static str,
    pub seeking: &'static str,
    pub availability: &'static [&'static str],
}

const SKILLS: &[(&str, u8)] = &[
    ("Automatización (Apps Script / Zapier)", 85),
    ("Google Workspace (Sheets/Docs/Drive)", 90),
    ("ERP (exposición SAP)", 60),
    ("SQL (reportería básica)", 55),
    ("HTML • CSS • JavaScript", 70),
    ("Ciberseguridad / Networking (bases)", 40),
];

const CONTACTS: &[Contact] = &[
    Contact {
        icon: "📧",
        text: "ezrawachi@gmail.com",
        action: ContactAction::Link(MAIL_URL),
    },
    Contact {
        icon: "📱",
        text: "+507 64931573",
        action: ContactAction::Link(PHONE_URL),
    },
    Contact {
        icon: "💼",
        text: "LinkedIn",
        action: ContactAction::Link(LINKEDIN_URL),
    },
    Contact {
        icon: "🛒",
        text: "Etsy: Sheets Brewery",
        action: ContactAction::Link(ETSY_URL),
    },
    Contact {
        icon: "🗎",
        text: "Copiar enlace del CV",
        action: ContactAction::CopyPageLink,
    },
    Contact {
        icon: "💬",
        text: "Contactar por WhatsApp",
        action: ContactAction::Link(WHATSAPP_URL),
    },
];

const EXPERIENCE: &[Job] = &[
    Job {
        title: "Empresa familiar · Retail/Distribución",
        period: "Noviembre 2021 – Diciembre 2023 · Panamá",
        achievements: &[
            "Pasé procesos manuales a digitales (pedidos, inventario, cobros) para reducir errores y ahorrar tiempo.",
            "Inventario en tiempo real con mínimos y alertas para bodega (Zona Libre).",
            "Sistema de estados por WhatsApp (stickers + registro) para informar a clientes y controlar avisos.",
        ],
    },
    Job {
        title: "Farmacia D. Azran · Implementación SAP",
        period: "2023 – 2024 · Panamá",
        achievements: &[
            "Participación en reuniones de implementación y soporte a compras y contabilidad.",
            "Reportes básicos en SQL para visibilidad de notas de crédito y operaciones clave.",
            "Carga masiva de productos y flujo OCR para subir órdenes de compra en minutos.",
        ],
    },
    Job {
        title: "Empresa familiar · Retorno (Operación y automatización)",
        period: "2025 – Presente · Panamá",
        achievements: &[
            "Retorno tras cierre de la farmacia para continuar la mejora de procesos.",
            "Catálogo 1-click para clientes mayoristas (PDF/Excel con fotos y precios).",
            "Mantenimiento y mejoras de inventario, pedidos y comunicación con clientes.",
        ],
    },
];

const PROJECTS: &[Project] = &[
    Project {
        title: "Inventario en la nube",
        description: "Inventario multi-bodega con mínimos, alertas y pedidos automáticos. Interfaz en Sheets, automatización con Apps Script.",
        tags: &["Sheets", "Apps Script", "QR"],
    },
    Project {
        title: "Pedidos + Estados por WhatsApp",
        description: "Flujo de estados y notificaciones para clientes, con registro interno para trazabilidad.",
        tags: &["Zapier", "Web", "WhatsApp"],
    },
    Project {
        title: "Catálogo 1-click para mayoristas",
        description: "Generación automática de catálogos personalizados (PDF/Excel) con fotos y precios por cliente.",
        tags: &["Sheets", "Apps Script", "PDF"],
    },
    Project {
        title: "Productos digitales (Etsy)",
        description: "Plantillas avanzadas de Google Sheets con automatizaciones para tareas, clientes e inventarios.",
        tags: &["Sheets", "Apps Script", "Zapier"],
    },
];

impl ResumeContent {
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "Ezra Tawachi",
                headline: "Gerencia IT | Automatización | Retail",
                location: "Panamá · disponible híbrido/remoto",
                pitch: "construyo sistemas prácticos que ordenan la operación y mejoran la visibilidad del negocio.",
                focus: "Foco en retail y distribución: inventarios, pedidos, reportería e integraciones ligeras en la nube.",
            },
            tags: &[
                "Automatización (Apps Script / Zapier)",
                "ERP (exposición SAP)",
                "SQL básico",
                "HTML • CSS • JS",
                "Etsy: productos digitales",
            ],
            stats: &[
                Stat {
                    value: "3+ años",
                    label: "aplicando tecnología al negocio",
                },
                Stat {
                    value: "10+ flujos",
                    label: "automatizados y documentados",
                },
                Stat {
                    value: "2 sectores",
                    label: "retail & farmacia",
                },
            ],
            contacts: CONTACTS,
            experience: EXPERIENCE,
            skills: SKILLS
                .iter()
                .map(|(name, level)| SkillEntry::new(*name, *level))
                .collect(),
            achievements: &[
                "Reducción de entregas incompletas al ordenar inventario y estados de pedido.",
                "Conciliación de cobros (ATH/transferencias) conectada a estados de pedido.",
                "Implementación de cargas masivas + OCR en SAP para compras y productos.",
            ],
            achievements_note: "*Agregar métricas cuando las tengas (p. ej., \"−30% errores\", \"procesos en 1/5 del tiempo\").",
            projects: PROJECTS,
            education: &[
                "Cursos de programación (HTML, CSS, JS, PHP básico). Inicio 2020.",
                "SQL orientado a reportería (nivel básico/intermedio).",
                "Fundamentos de ciberseguridad y networking.",
            ],
            languages: &["Español (nativo)", "Inglés (intermedio/avanzado)"],
            about: "Soy una persona práctica. Me gusta resolver problemas con tecnología que la empresa pueda usar de inmediato. Disfruto aprender rápido, documentar lo que hago y trabajar con equipos de ventas, compras y bodega para que todo fluya.",
            seeking: "Un rol de Gerencia IT u Operaciones Tech donde pueda ordenar procesos, automatizar y construir tableros con datos claros para decidir mejor.",
            availability: &[
                "Inicio: inmediato",
                "Modalidad: híbrido o remoto (Panamá)",
                "Entrevistas: coordinación por WhatsApp o email",
            ],
        }
    }

    /// Regions the page lays out and that can be observed.
    pub fn regions(&self) -> Vec<RegionId> {
        let mut regions = Vec::new();
        if !self.skills.is_empty() {
            regions.push(RegionId::new(SKILLS_REGION));
        }
        regions
    }

    pub fn has_region(&self, region: &RegionId) -> bool {
        self.regions().iter().any(|candidate| candidate == region)
    }

    pub fn footer(&self, year: i32) -> String {
        format!(
            "© {year} {}. Hecho con Rust + egui.",
            self.profile.name
        )
    }
}
