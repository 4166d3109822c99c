use folio_core::config::Profile;
use leptos::prelude::*;

#[component]
pub fn Footer(profile: Profile) -> impl IntoView {
    let github = profile.github.map(|href| {
        view! {
            <a href=href class="social-link me-3" target="_blank" rel="noopener" aria-label="GitHub">
                <i class="fab fa-github fa-lg"></i>
            </a>
        }
    });
    let linkedin = profile.linkedin.map(|href| {
        view! {
            <a href=href class="social-link me-3" target="_blank" rel="noopener" aria-label="LinkedIn">
                <i class="fab fa-linkedin fa-lg"></i>
            </a>
        }
    });
    let email = format!("mailto:{}", profile.email);
    let copyright = format!(
        "© {} {}. Built with Rust and Leptos.",
        js_sys::Date::new_0().get_full_year(),
        profile.name
    );

    view! {
        <footer class="footer py-4">
            <div class="container text-center">
                <div class="mb-3">
                    {github}
                    {linkedin}
                    <a href=email class="social-link" aria-label="Email">
                        <i class="fas fa-envelope fa-lg"></i>
                    </a>
                </div>
                <p class="mb-0 text-muted">
                    {copyright}
                </p>
            </div>
        </footer>
    }
}
