#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, error};

use folio::config::{SiteConfig, parse_config};

mod common;

mod components;
use components::layout::SiteLayout;

mod home;
use home::Home;

mod project;
use project::{NotFound, ProjectDetail};

mod theme;
use theme::use_theme_provider;

const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/project/:id")]
        ProjectDetail { id: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

// a broken site.toml should not take the site down
fn load_site_config() -> SiteConfig {
    match parse_config(SITE_TOML) {
        Ok(config) => config,
        Err(err) => {
            error!("failed to parse site config, using defaults: {err}");
            SiteConfig::default()
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(load_site_config);
    use_theme_provider(config.theme.storage_key.clone());

    rsx! {
        style { "{common::style::SITE_STYLES}" }
        style { "{common::style::HOME_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
