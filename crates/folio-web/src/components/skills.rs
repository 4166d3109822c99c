use folio_core::skills::{SKILL_FILL_DELAY, SKILL_THRESHOLD, SKILL_TRANSITION, Skill, bar_style};
use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use super::reveal::Reveal;
use crate::dom;
use crate::visibility::on_first_visible;

/// Progress bar that refills from zero when it first scrolls into view.
#[component]
fn SkillBar(skill: Skill) -> impl IntoView {
    let width = skill.width();
    let (style, set_style) = signal(bar_style(&width, None));
    let node = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        let Some(el) = node.get() else {
            return;
        };
        let width = width.clone();
        on_first_visible(&el, SKILL_THRESHOLD, move || {
            set_style.set(bar_style("0%", None));
            Timeout::new(dom::millis(SKILL_FILL_DELAY), move || {
                set_style.set(bar_style(&width, Some(SKILL_TRANSITION)));
            })
            .forget();
        });
    });

    let percent = skill.percent();
    view! {
        <div class="skill-item mb-4">
            <div class="d-flex justify-content-between mb-1">
                <span class="skill-name">{skill.name}</span>
                <span class="skill-level">{format!("{}%", percent)}</span>
            </div>
            <div class="progress">
                <div
                    node_ref=node
                    class="progress-bar"
                    role="progressbar"
                    style=move || style.get()
                    aria-valuenow=percent.to_string()
                    aria-valuemin="0"
                    aria-valuemax="100"
                ></div>
            </div>
        </div>
    }
}

#[component]
pub fn Skills(skills: Vec<Skill>) -> impl IntoView {
    let half = skills.len().div_ceil(2);
    let (left, right) = skills.split_at(half);
    let column = |skills: &[Skill], animation: &'static str| {
        let bars = skills
            .iter()
            .cloned()
            .map(|skill| view! { <SkillBar skill=skill/> })
            .collect_view();
        view! {
            <div class="col-lg-6">
                <Reveal animation=animation>{bars}</Reveal>
            </div>
        }
    };
    let left = column(left, "fade-right");
    let right = column(right, "fade-left");

    view! {
        <section id="skills" class="py-5">
            <div class="container">
                <Reveal animation="fade-up" class="text-center mb-5">
                    <h2 class="section-title">"Skills"</h2>
                    <Reveal animation="width-expand" delay="200" class="title-underline mx-auto"/>
                </Reveal>
                <div class="row g-4">
                    {left}
                    {right}
                </div>
            </div>
        </section>
    }
}
