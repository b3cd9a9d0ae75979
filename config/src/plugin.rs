use serde::{Deserialize, Serialize};

/// Optional framework feature modules enabled for this app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plugin {
    /// Sitemap generation.
    #[serde(rename = "sitemap")]
    Sitemap,
    /// Tailwind v4 CSS integration.
    #[serde(rename = "tailwind-v4")]
    TailwindV4,
}

impl Plugin {
    pub const fn id(&self) -> &'static str {
        match self {
            Plugin::Sitemap => "sitemap",
            Plugin::TailwindV4 => "tailwind-v4",
        }
    }
}

/// The plugin set is fixed at build time; the environment cannot change it.
pub const DEFAULT_PLUGINS: [Plugin; 2] = [Plugin::Sitemap, Plugin::TailwindV4];
