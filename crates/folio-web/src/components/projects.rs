use folio_core::projects::{CardHover, FilterButton, Project, ProjectFilter};
use leptos::prelude::*;

use super::reveal::Reveal;

#[component]
fn ProjectCard(project: Project, filter: ReadSignal<ProjectFilter>) -> impl IntoView {
    let (hover, set_hover) = signal(None::<CardHover>);
    let category = project.category.clone();
    let display = move || format!("display: {}", filter.with(|f| f.display_for(&category)));

    let tags = project
        .tags
        .into_iter()
        .map(|tag| view! { <span class="badge project-tag me-1">{tag}</span> })
        .collect_view();

    let link = project.link.map(|href| {
        view! {
            <a href=href class="btn btn-sm btn-primary me-2" target="_blank" rel="noopener">
                <i class="fas fa-external-link-alt me-1"></i>
                "Live"
            </a>
        }
    });
    let repository = project.repository.map(|href| {
        view! {
            <a href=href class="btn btn-sm btn-outline-secondary" target="_blank" rel="noopener">
                <i class="fab fa-github me-1"></i>
                "Code"
            </a>
        }
    });

    view! {
        <div class="col-md-6 col-lg-4 project-item" data-category=project.category style=display>
            <Reveal animation="fade-up">
                <div
                    class="card project-card h-100"
                    style=move || hover.get().map(|h| h.style())
                    on:mouseenter=move |_| set_hover.set(Some(CardHover::Hovered))
                    on:mouseleave=move |_| set_hover.set(Some(CardHover::Resting))
                >
                    <div class="card-body">
                        <h5 class="card-title">{project.title}</h5>
                        <p class="card-text">{project.description}</p>
                        <div class="mb-3">{tags}</div>
                        {link}
                        {repository}
                    </div>
                </div>
            </Reveal>
        </div>
    }
}

/// Project grid with category filter buttons.
#[component]
pub fn Projects(filters: Vec<FilterButton>, projects: Vec<Project>) -> impl IntoView {
    let (filter, set_filter) = signal(ProjectFilter::All);

    let buttons = filters
        .into_iter()
        .map(|button| {
            let value = button.value.clone();
            let selected = value.clone();
            let class = move || {
                if filter.with(|f| f.value() == selected) {
                    "btn filter-btn active"
                } else {
                    "btn filter-btn"
                }
            };
            let on_click = move |_| {
                let next = ProjectFilter::from_value(&value);
                if filter.with_untracked(|current| *current != next) {
                    set_filter.set(next);
                }
            };
            view! {
                <button type="button" class=class data-filter=button.value on:click=on_click>
                    {button.label}
                </button>
            }
        })
        .collect_view();

    let cards = projects
        .into_iter()
        .map(|project| view! { <ProjectCard project=project filter=filter/> })
        .collect_view();

    view! {
        <section id="projects" class="py-5">
            <div class="container">
                <Reveal animation="fade-up" class="text-center mb-5">
                    <h2 class="section-title">"Projects"</h2>
                    <Reveal animation="width-expand" delay="200" class="title-underline mx-auto"/>
                </Reveal>
                <div class="project-filters text-center mb-4">{buttons}</div>
                <div class="row g-4">{cards}</div>
            </div>
        </section>
    }
}
