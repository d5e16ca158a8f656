use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use tracing::error;

use folio::{
    config::SiteConfig,
    listener::Subscription,
    section::{ActiveSectionTracker, NamedRegion, track_scroll},
};

use crate::{
    common::{
        dom::{WindowScroll, element_height},
        use_subscription,
    },
    components::navigation::NavBar,
};

mod about;
use about::About;

mod hero;
use hero::Hero;

mod portfolio;
use portfolio::Portfolio;

// the key doubles as the element id of the section
#[derive(Clone, Debug, PartialEq)]
pub struct SectionLink {
    pub key: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: &[SectionLink] = &[
    SectionLink {
        key: "home",
        label: "Home",
    },
    SectionLink {
        key: "about",
        label: "About",
    },
    SectionLink {
        key: "portfolio",
        label: "Work",
    },
];

// key of the section under the viewport, updated on every window scroll
fn use_active_section(activation_lead: f64) -> Signal<String> {
    let mut active = use_signal(|| SECTIONS[0].key.to_owned());

    use_subscription(|| {
        let regions = SECTIONS
            .iter()
            .map(|section| NamedRegion::new(section.key, move || element_height(section.key)))
            .collect();

        let tracker = match ActiveSectionTracker::new(regions) {
            Ok(tracker) => tracker,
            Err(err) => {
                error!("failed to configure section tracker: {err}");
                return Subscription::inert();
            }
        };

        track_scroll(
            Rc::new(RefCell::new(tracker)),
            &WindowScroll,
            activation_lead,
            move |key| active.set(key.to_owned()),
        )
    });

    active
}

#[component]
pub fn Home() -> Element {
    let config = use_context::<SiteConfig>();
    let active = use_active_section(config.sections.activation_lead);

    rsx! {
        NavBar { active }

        main { class: "page",
            section { id: "home", Hero {} }
            section { id: "about", About {} }
            section { id: "portfolio", Portfolio {} }
        }
    }
}
