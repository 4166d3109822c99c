use folio_core::config::Stat;
use folio_core::counter::{COUNTER_THRESHOLD, counter_schedule, parse_leading_int};
use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::reveal::Reveal;
use crate::dom;
use crate::visibility::on_first_visible;

/// A statistic that counts up from zero the first time it is seen.
#[component]
fn StatBox(stat: Stat) -> impl IntoView {
    let (display, set_display) = signal(stat.value);
    let node = NodeRef::<html::H3>::new();

    Effect::new(move |_| {
        let Some(el) = node.get() else {
            return;
        };
        on_first_visible(&el, COUNTER_THRESHOLD, move || {
            let Some(target) = parse_leading_int(&display.get_untracked()) else {
                return;
            };
            set_display.set("0".to_string());
            spawn_local(async move {
                for (wait, value) in counter_schedule(target) {
                    TimeoutFuture::new(dom::millis(wait)).await;
                    set_display.set(value.to_string());
                }
            });
        });
    });

    view! {
        <div class="col-6 col-md-3">
            <div class="stat-box text-center">
                <h3 node_ref=node class="stat-number">{move || display.get()}</h3>
                <p class="stat-label mb-0">{stat.label}</p>
            </div>
        </div>
    }
}

#[component]
pub fn About(about: String, stats: Vec<Stat>) -> impl IntoView {
    let stats = stats
        .into_iter()
        .map(|stat| view! { <StatBox stat=stat/> })
        .collect_view();

    view! {
        <section id="about" class="py-5">
            <div class="container">
                <Reveal animation="fade-up" class="text-center mb-5">
                    <h2 class="section-title">"About Me"</h2>
                    <Reveal animation="width-expand" delay="200" class="title-underline mx-auto"/>
                </Reveal>
                <div class="row justify-content-center">
                    <Reveal animation="fade-up" delay="100" class="col-lg-8 text-center">
                        <p class="lead">{about}</p>
                    </Reveal>
                </div>
                <Reveal animation="fade-up" delay="200" class="row g-4 mt-4">
                    {stats}
                </Reveal>
            </div>
        </section>
    }
}
