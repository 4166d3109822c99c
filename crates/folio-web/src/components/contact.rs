use folio_core::config::ContactConfig;
use folio_core::contact::{
    ANALYTICS_CATEGORY, ANALYTICS_EVENT, ANALYTICS_LABEL, BANNER_FADE_OUT, CharCounter,
    ContactClient, ContactForm, ContactSubmission, Field, FieldError, FormBanner, HONEYPOT_FIELD,
    REDIRECT_FIELD, SUCCESS_BANNER_LINGER, error_for,
};
use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::reveal::Reveal;
use crate::dom;

fn control_class(invalid: bool, valid: bool) -> &'static str {
    if invalid {
        "form-control is-invalid"
    } else if valid {
        "form-control is-valid"
    } else {
        "form-control"
    }
}

#[component]
fn FormField(
    field: Field,
    form: RwSignal<ContactForm>,
    errors: RwSignal<Vec<FieldError>>,
) -> impl IntoView {
    let (focused, set_focused) = signal(false);
    let (valid, set_valid) = signal(false);

    let wrapper_class = move || if focused.get() { "mb-3 focused" } else { "mb-3" };
    let class = move || {
        let invalid = errors.with(|errs| error_for(errs, field).is_some());
        control_class(invalid, valid.get())
    };
    let value = move || form.with(|f| f.value(field).to_string());
    let feedback = move || errors.with(|errs| error_for(errs, field)).unwrap_or_default();
    let on_blur = move || {
        set_focused.set(false);
        if form.with_untracked(|f| !f.value(field).trim().is_empty()) {
            set_valid.set(true);
        }
    };

    let control = if field == Field::Message {
        view! {
            <textarea
                id=field.id()
                name=field.id()
                rows="5"
                class=class
                prop:value=value
                on:input=move |ev| form.update(|f| f.set_value(field, event_target_value(&ev)))
                on:focus=move |_| set_focused.set(true)
                on:blur=move |_| on_blur()
            ></textarea>
        }
        .into_any()
    } else {
        let input_type = if field == Field::Email { "email" } else { "text" };
        view! {
            <input
                type=input_type
                id=field.id()
                name=field.id()
                class=class
                prop:value=value
                on:input=move |ev| form.update(|f| f.set_value(field, event_target_value(&ev)))
                on:focus=move |_| set_focused.set(true)
                on:blur=move |_| on_blur()
            />
        }
        .into_any()
    };

    view! {
        <div class=wrapper_class>
            <label for=field.id() class="form-label">{field.label()}</label>
            {control}
            <div class="invalid-feedback">{feedback}</div>
        </div>
    }
}

/// Contact form posting to the configured form backend.
#[component]
pub fn Contact(config: ContactConfig, fallback_email: String) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let honeypot = RwSignal::new(String::new());
    let banner = RwSignal::new(None::<FormBanner>);
    let fading = RwSignal::new(false);
    let sending = RwSignal::new(false);
    let message_ref = NodeRef::<html::Div>::new();

    let endpoint = config.endpoint;
    let max_chars = config.max_message_chars;
    let redirect = dom::current_url();
    let contact_email = fallback_email.clone();

    let on_submit = {
        let redirect = redirect.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if sending.get_untracked() {
                return;
            }
            banner.set(None);
            fading.set(false);

            let values = form.get_untracked();
            let validation = values.validate();
            errors.set(validation.as_ref().err().cloned().unwrap_or_default());
            if let Some(invalid) = FormBanner::from_validation(&validation) {
                banner.set(Some(invalid));
                return;
            }

            sending.set(true);
            let submission =
                ContactSubmission::new(values, redirect.clone(), honeypot.get_untracked());
            let client = ContactClient::new(endpoint.clone());
            let fallback_email = fallback_email.clone();

            spawn_local(async move {
                let outcome = client.submit(&submission).await;
                match &outcome {
                    Ok(()) => {
                        form.set(ContactForm::default());
                        honeypot.set(String::new());
                        dom::track_event(ANALYTICS_EVENT, ANALYTICS_CATEGORY, ANALYTICS_LABEL);
                    }
                    Err(err) => log::error!("Contact form submission failed: {}", err),
                }

                let shown = FormBanner::from_outcome(&outcome, &fallback_email);
                let success = shown.is_success();
                banner.set(Some(shown));
                sending.set(false);

                if let Some(el) = message_ref.get_untracked() {
                    dom::scroll_into_view_centered(&el);
                }

                if success {
                    Timeout::new(dom::millis(SUCCESS_BANNER_LINGER), move || {
                        fading.set(true);
                        Timeout::new(dom::millis(BANNER_FADE_OUT), move || {
                            banner.set(None);
                            fading.set(false);
                        })
                        .forget();
                    })
                    .forget();
                }
            });
        }
    };

    let banner_view = move || {
        banner.get().map(|shown| {
            let class = shown.class(fading.get());
            let icon = shown.icon_class().map(|icon| view! { <i class=icon></i> });
            let mailto = match &shown {
                FormBanner::Failure { fallback_email } => Some(view! {
                    " "
                    <a href=format!("mailto:{}", fallback_email)>{fallback_email.clone()}</a>
                }),
                _ => None,
            };
            view! { <div class=class>{icon}{shown.message()}{mailto}</div> }
        })
    };

    let counter = move || form.with(|f| CharCounter::new(&f.message, max_chars));

    let submit_label = move || {
        if sending.get() {
            view! {
                <span class="spinner-border spinner-border-sm" role="status" aria-hidden="true"></span>
                " Sending..."
            }
            .into_any()
        } else {
            view! {
                <i class="fas fa-paper-plane me-2"></i>
                "Send Message"
            }
            .into_any()
        }
    };

    view! {
        <section id="contact" class="py-5">
            <div class="container">
                <Reveal animation="fade-up" class="text-center mb-5">
                    <h2 class="section-title">"Get In Touch"</h2>
                    <Reveal animation="width-expand" delay="200" class="title-underline mx-auto"/>
                </Reveal>
                <div class="row g-4 justify-content-center">
                    <Reveal animation="fade-right" class="col-lg-4">
                        <div class="contact-info">
                            <h4>"Let's talk"</h4>
                            <p>"Have a project in mind or just want to say hello? Drop me a message."</p>
                            <p>
                                <i class="fas fa-envelope me-2"></i>
                                <a href=format!("mailto:{}", contact_email)>{contact_email.clone()}</a>
                            </p>
                        </div>
                    </Reveal>
                    <Reveal animation="fade-left" class="col-lg-6">
                        <div node_ref=message_ref class="form-message">{banner_view}</div>
                        <form id="contactForm" novalidate=true on:submit=on_submit>
                            <FormField field=Field::Name form=form errors=errors/>
                            <FormField field=Field::Email form=form errors=errors/>
                            <FormField field=Field::Subject form=form errors=errors/>
                            <FormField field=Field::Message form=form errors=errors/>
                            <div class=move || counter().class()>
                                <span id="charCount">{move || counter().count_label()}</span>
                                {format!("/{} characters", max_chars)}
                            </div>
                            <input type="hidden" name=REDIRECT_FIELD value=redirect/>
                            <input
                                type="text"
                                name=HONEYPOT_FIELD
                                style="display: none"
                                tabindex="-1"
                                autocomplete="off"
                                prop:value=move || honeypot.get()
                                on:input=move |ev| honeypot.set(event_target_value(&ev))
                            />
                            <button type="submit" class="btn btn-primary btn-lg mt-3" disabled=move || sending.get()>
                                {submit_label}
                            </button>
                        </form>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_class_prefers_invalid() {
        assert_eq!(control_class(true, true), "form-control is-invalid");
        assert_eq!(control_class(false, true), "form-control is-valid");
        assert_eq!(control_class(false, false), "form-control");
    }
}
