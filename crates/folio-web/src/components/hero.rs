use folio_core::config::Profile;
use folio_core::hero::{
    PATTERN_REVEAL_DELAY, TYPING_SPEED, TYPING_START_DELAY, TYPING_THRESHOLD, TypingEffect,
    parallax_transform, pattern_style,
};
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::reveal::Reveal;
use crate::dom;
use crate::visibility::on_first_visible;

/// Landing section: parallax content, typed lead line and a fading pattern.
#[component]
pub fn Hero(profile: Profile, scroll_y: ReadSignal<f64>) -> impl IntoView {
    let (typed, set_typed) = signal(String::new());
    let (pattern_revealed, set_pattern_revealed) = signal(false);
    let lead_ref = NodeRef::<html::P>::new();

    Timeout::new(dom::millis(PATTERN_REVEAL_DELAY), move || {
        set_pattern_revealed.set(true);
    })
    .forget();

    let lead = profile.lead.clone();
    Effect::new(move |_| {
        let Some(el) = lead_ref.get() else {
            return;
        };
        let lead = lead.clone();
        on_first_visible(&el, TYPING_THRESHOLD, move || {
            spawn_local(async move {
                TimeoutFuture::new(dom::millis(TYPING_START_DELAY)).await;
                for prefix in TypingEffect::new(&lead) {
                    set_typed.set(prefix);
                    TimeoutFuture::new(dom::millis(TYPING_SPEED)).await;
                }
            });
        });
    });

    view! {
        <section id="home" class="hero d-flex align-items-center">
            <div class="hero-pattern" style=move || pattern_style(pattern_revealed.get())></div>
            <div class="container">
                <div
                    class="hero-content text-center"
                    style=move || format!("transform: {}", parallax_transform(scroll_y.get()))
                >
                    <Reveal animation="fade-down">
                        <h1 class="display-3 fw-bold">{profile.name}</h1>
                    </Reveal>
                    <Reveal animation="fade-up" delay="200">
                        <h2 class="hero-role">{profile.role}</h2>
                    </Reveal>
                    <p node_ref=lead_ref class="lead hero-lead">{move || typed.get()}</p>
                    <Reveal animation="fade-up" delay="400" class="hero-buttons mt-4">
                        <a href="#projects" class="btn btn-primary btn-lg me-2">"View My Work"</a>
                        <a href="#contact" class="btn btn-outline-light btn-lg">"Get In Touch"</a>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
