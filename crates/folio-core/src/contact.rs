//! Contact form validation, submission and result banners.

use crate::error::Error;
use regex::Regex;
use reqwest::multipart::Form;
use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

/// Hidden field the form backend uses to send the visitor back to the page.
pub const REDIRECT_FIELD: &str = "_next";
/// Honeypot field. People never see it, bots tend to fill it in.
pub const HONEYPOT_FIELD: &str = "_gotcha";

pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 1000;

/// How long a success banner stays before fading.
pub const SUCCESS_BANNER_LINGER: Duration = Duration::from_secs(5);
pub const BANNER_FADE_OUT: Duration = Duration::from_millis(500);

pub const ANALYTICS_EVENT: &str = "contact_form_submit";
pub const ANALYTICS_CATEGORY: &str = "engagement";
pub const ANALYTICS_LABEL: &str = "contact_form";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Inputs of the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Element id and form field name.
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    fn missing_message(&self) -> &'static str {
        match self {
            Field::Name => "Please enter your name",
            Field::Email => "Please enter your email",
            Field::Subject => "Please enter a subject",
            Field::Message => "Please enter your message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Inline error shown under an invalid field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Find the error for `field`, if any.
pub fn error_for(errors: &[FieldError], field: Field) -> Option<&'static str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

/// Values typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Check every field and report all problems at once.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        for field in Field::ALL {
            let value = self.value(field).trim();
            if value.is_empty() {
                errors.push(FieldError {
                    field,
                    message: field.missing_message(),
                });
            } else if field == Field::Email && !EMAIL_RE.is_match(value) {
                errors.push(FieldError {
                    field,
                    message: "Please enter a valid email address",
                });
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Everything posted to the form backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub form: ContactForm,
    /// Page the backend redirects to after a non-JS submission.
    pub redirect: String,
    /// Honeypot value, empty for real visitors.
    pub honeypot: String,
}

impl ContactSubmission {
    pub fn new(form: ContactForm, redirect: impl Into<String>, honeypot: impl Into<String>) -> Self {
        Self {
            form,
            redirect: redirect.into(),
            honeypot: honeypot.into(),
        }
    }

    /// Form fields in the order they are posted. Values are sent as typed.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields: Vec<(&'static str, String)> = Field::ALL
            .iter()
            .map(|field| (field.id(), self.form.value(*field).to_string()))
            .collect();
        fields.push((REDIRECT_FIELD, self.redirect.clone()));
        fields.push((HONEYPOT_FIELD, self.honeypot.clone()));
        fields
    }

    fn to_multipart(&self) -> Form {
        self.fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value))
    }
}

/// Why a submission did not go through.
#[derive(thiserror::Error, Debug)]
pub enum SubmitError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<FieldError>),

    #[error(transparent)]
    Request(#[from] Error),
}

/// Client for the third-party form backend.
#[derive(Debug, Clone)]
pub struct ContactClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Validate the form and post it as multipart data.
    ///
    /// Invalid forms are rejected before any request is made. Any 2xx JSON
    /// answer counts as delivered.
    pub async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        submission.form.validate().map_err(SubmitError::Invalid)?;

        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .multipart(submission.to_multipart())
            .send()
            .await
            .map_err(Error::from)?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Form backend responded with {}", status);
            return Err(Error::Status(status.as_u16()).into());
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(Error::from)?;

        log::debug!("Contact form delivered to {}", self.endpoint);
        Ok(())
    }
}

/// Banner rendered above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormBanner {
    Invalid,
    Success,
    Failure { fallback_email: String },
}

impl FormBanner {
    pub fn from_validation(result: &Result<(), Vec<FieldError>>) -> Option<Self> {
        result.as_ref().err().map(|_| FormBanner::Invalid)
    }

    pub fn from_outcome(outcome: &Result<(), SubmitError>, fallback_email: &str) -> Self {
        match outcome {
            Ok(()) => FormBanner::Success,
            Err(SubmitError::Invalid(_)) => FormBanner::Invalid,
            Err(SubmitError::Request(_)) => FormBanner::Failure {
                fallback_email: fallback_email.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FormBanner::Success)
    }

    pub fn message(&self) -> &'static str {
        match self {
            FormBanner::Invalid => "Please correct the errors in the form.",
            FormBanner::Success => {
                "Your message has been sent successfully! I will get back to you soon."
            }
            FormBanner::Failure { .. } => {
                "There was a problem sending your message. Please try again or contact me directly at"
            }
        }
    }

    pub fn icon_class(&self) -> Option<&'static str> {
        match self {
            FormBanner::Invalid => None,
            FormBanner::Success => Some("fas fa-check-circle me-2"),
            FormBanner::Failure { .. } => Some("fas fa-exclamation-triangle me-2"),
        }
    }

    pub fn class(&self, fading: bool) -> String {
        match self {
            FormBanner::Success if fading => {
                "alert alert-success animate__animated animate__fadeIn animate__fadeOut".to_string()
            }
            FormBanner::Success => "alert alert-success animate__animated animate__fadeIn".to_string(),
            FormBanner::Invalid | FormBanner::Failure { .. } => "alert alert-danger".to_string(),
        }
    }
}

/// Severity of the message length counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Danger,
}

/// Live character count under the message field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounter {
    pub length: usize,
    pub max: usize,
}

impl CharCounter {
    pub fn new(message: &str, max: usize) -> Self {
        Self {
            length: message.chars().count(),
            max,
        }
    }

    pub fn level(&self) -> CounterLevel {
        if self.length > self.max {
            CounterLevel::Danger
        } else if self.length * 10 > self.max * 8 {
            CounterLevel::Warning
        } else {
            CounterLevel::Normal
        }
    }

    pub fn count_label(&self) -> String {
        if self.level() == CounterLevel::Danger {
            format!("{} (limit exceeded)", self.length)
        } else {
            self.length.to_string()
        }
    }

    pub fn class(&self) -> &'static str {
        match self.level() {
            CounterLevel::Normal => "text-end text-muted small mt-1",
            CounterLevel::Warning => "text-end text-muted small mt-1 text-warning",
            CounterLevel::Danger => "text-end text-muted small mt-1 text-warning text-danger",
        }
    }
}
