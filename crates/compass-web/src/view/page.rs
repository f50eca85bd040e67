//! HTML page rendering.

use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;
use tracing::debug;

use super::SummaryView;

/// The page template. Handlebars escapes every `{{value}}` as HTML.
const PAGE_TEMPLATE: &str = include_str!("../../templates/page.hbs");

const PAGE_NAME: &str = "page";

/// What the page shows below the form.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing submitted yet.
    Idle,
    /// Triggered without input.
    Warning(String),
    /// The request failed.
    Error(String),
    /// Extraction is disabled for this session.
    Disabled(String),
    /// A rendered summary.
    Summary(Box<SummaryView>),
}

#[derive(Debug, Serialize)]
struct PageContext<'a> {
    notes: &'a str,
    enabled: bool,
    config_error: Option<&'a str>,
    warning: Option<&'a str>,
    error: Option<&'a str>,
    result: Option<&'a SummaryView>,
}

impl<'a> PageContext<'a> {
    fn new(notes: &'a str, outcome: &'a Outcome) -> Self {
        let mut ctx = Self {
            notes,
            enabled: true,
            config_error: None,
            warning: None,
            error: None,
            result: None,
        };
        match outcome {
            Outcome::Idle => {}
            Outcome::Warning(msg) => ctx.warning = Some(msg.as_str()),
            Outcome::Error(msg) => ctx.error = Some(msg.as_str()),
            Outcome::Disabled(msg) => {
                ctx.enabled = false;
                ctx.config_error = Some(msg.as_str());
            }
            Outcome::Summary(view) => ctx.result = Some(view.as_ref()),
        }
        ctx
    }
}

/// Renders the single application page.
pub struct PageRenderer {
    hbs: Handlebars<'static>,
}

impl PageRenderer {
    /// Compiles the page template once.
    pub fn new() -> Result<Self, TemplateError> {
        let mut hbs = Handlebars::new();
        hbs.register_template_string(PAGE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { hbs })
    }

    /// Renders the page with the submitted notes and the outcome.
    pub fn render(&self, notes: &str, outcome: &Outcome) -> Result<String, RenderError> {
        debug!(outcome = outcome_kind(outcome), "Rendering page");
        self.hbs
            .render(PAGE_NAME, &PageContext::new(notes, outcome))
    }
}

fn outcome_kind(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Idle => "idle",
        Outcome::Warning(_) => "warning",
        Outcome::Error(_) => "error",
        Outcome::Disabled(_) => "disabled",
        Outcome::Summary(_) => "summary",
    }
}
