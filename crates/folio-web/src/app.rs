use folio_core::config::SiteConfig;
use leptos::prelude::*;
use leptos_meta::*;

use crate::components::about::About;
use crate::components::back_to_top::BackToTop;
use crate::components::background::start_rotation;
use crate::components::blog::Blog;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::projects::Projects;
use crate::components::skills::Skills;
use crate::dom;

/// Site content, baked into the binary at build time.
const SITE_TOML: &str = include_str!("../site.toml");

/// Parse the embedded site file, falling back to defaults when it is broken.
pub fn load_site_config() -> SiteConfig {
    SiteConfig::from_toml_str(SITE_TOML).unwrap_or_else(|err| {
        log::error!("{:#}", err);
        SiteConfig::default()
    })
}

/// Vertical scroll offset, refreshed on every window scroll event.
fn use_scroll_position() -> ReadSignal<f64> {
    let (scroll_y, set_scroll_y) = signal(dom::scroll_y());
    // listens for the lifetime of the page
    let _listener = window_event_listener(leptos::ev::scroll, move |_| {
        set_scroll_y.set(dom::scroll_y());
    });
    scroll_y
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_site_config();
    let scroll_y = use_scroll_position();
    start_rotation(&config.background);

    let SiteConfig {
        profile,
        contact,
        feed,
        nav,
        stats,
        skills,
        filters,
        projects,
        ..
    } = config;

    let title = format!("{} | {}", profile.name, profile.role);
    let description = profile.lead.clone();
    let brand = profile.name.clone();
    let resume_url = profile.resume_url.clone();
    let about = profile.about.clone();
    let fallback_email = profile.email.clone();
    let hero_profile = profile.clone();

    view! {
        <Title text=title/>
        <Meta name="description" content=description/>

        <Navbar brand=brand links=nav resume_url=resume_url scroll_y=scroll_y/>
        <main>
            <Hero profile=hero_profile scroll_y=scroll_y/>
            <About about=about stats=stats/>
            <Skills skills=skills/>
            <Projects filters=filters projects=projects/>
            <Blog feed=feed/>
            <Contact config=contact fallback_email=fallback_email/>
        </main>
        <Footer profile=profile/>
        <BackToTop scroll_y=scroll_y/>
    }
}
