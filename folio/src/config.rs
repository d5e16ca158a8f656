use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::{section::DEFAULT_ACTIVATION_LEAD, theme::THEME_STORAGE_KEY};

// site configuration
//
// everything has a default so that a partial (or missing) site.toml still yields a
// working site; the web app embeds its copy at compile time
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    // shown in the nav bar, hero and footer
    pub owner: String,

    pub tagline: String,

    // first year in the footer copyright line
    pub since: i32,

    pub theme: ThemeConfig,
    pub sections: SectionConfig,

    pub links: Vec<SocialLink>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    // the single local storage key holding "light" or "dark"
    pub storage_key: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SectionConfig {
    pub activation_lead: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            owner: String::from("Bin Ma"),
            tagline: String::from("Designer and developer working where generative AI meets interface design."),
            since: 2024,
            theme: ThemeConfig::default(),
            sections: SectionConfig::default(),
            links: Vec::new(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            storage_key: THEME_STORAGE_KEY.to_owned(),
        }
    }
}

impl Default for SectionConfig {
    fn default() -> Self {
        SectionConfig {
            activation_lead: DEFAULT_ACTIVATION_LEAD,
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.theme.storage_key.trim().is_empty() {
            return Err(anyhow::Error::msg("theme.storage_key must not be empty"));
        }

        let lead = self.sections.activation_lead;
        if !lead.is_finite() || lead < 0.0 {
            return Err(anyhow::Error::msg(format!(
                "sections.activation_lead must be a non-negative number, got {lead}"
            )));
        }

        Ok(())
    }
}

// the site table lives under [config] so site.toml can carry other tables later
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> anyhow::Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlConfigFile = toml::from_str(doc)?;
    data.config.validate()?;

    debug!("successfully parsed site config");
    Ok(data.config)
}
