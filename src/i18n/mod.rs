//! Internationalization support - per-language navigation data

use serde::Serialize;

use crate::content::Language;

/// One navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub text: &'static str,
    pub url: &'static str,
}

/// Top and bottom navigation for one language
#[derive(Debug, Clone, Serialize)]
pub struct Navigation {
    pub top: Vec<NavItem>,
    pub bottom: Vec<NavItem>,
}

impl Navigation {
    /// Navigation entries for the given language
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::En => Self {
                top: vec![
                    NavItem { text: "About me", url: "/en/about/" },
                    NavItem { text: "What I do", url: "/en/services/" },
                    NavItem { text: "Projects", url: "/en/projects/" },
                    NavItem { text: "Blog", url: "/en/blog/" },
                ],
                bottom: vec![
                    NavItem { text: "Imprint", url: "/en/imprint/" },
                    NavItem { text: "Privacy", url: "/en/privacy/" },
                ],
            },
            Language::Es => Self {
                top: vec![
                    NavItem { text: "Sobre", url: "/es/sobre/" },
                    NavItem { text: "Lo que hago", url: "/es/servicios/" },
                    NavItem { text: "Proyectos", url: "/es/proyectos/" },
                    NavItem { text: "Blog", url: "/es/blog/" },
                ],
                bottom: vec![
                    NavItem { text: "Aviso legal", url: "/es/aviso-legal/" },
                    NavItem {
                        text: "Política de privacidad",
                        url: "/es/privacidad/",
                    },
                ],
            },
            Language::De => Self {
                top: vec![
                    NavItem { text: "Über", url: "/de/ueber/" },
                    NavItem { text: "Leistungen", url: "/de/leistungen/" },
                    NavItem { text: "Projekte", url: "/de/projekte/" },
                    NavItem { text: "Blog", url: "/de/blog/" },
                ],
                bottom: vec![
                    NavItem { text: "Impressum", url: "/de/impressum/" },
                    NavItem { text: "Datenschutz", url: "/de/datenschutz/" },
                ],
            },
        }
    }
}
