use minijinja::{context, Environment, Value};

use crate::portfolio::application::ports::outgoing::{
    ListingView, PageRenderer, RenderError, TemplateSelectionView, WizardStepView,
};
use crate::portfolio::domain::{PortfolioRecord, TemplateKind};

const HOME: &str = "home.html";
const TEMPLATE_SELECT: &str = "template_select.html";
const WIZARD: &str = "wizard.html";
const PROFESSIONALS: &str = "professionals.html";
const PORTFOLIO_MODERN: &str = "portfolio_modern.html";
const PORTFOLIO_CLASSIC: &str = "portfolio_classic.html";

/// Page sources compiled into the binary. Names ending in `.html` get
/// minijinja's HTML auto-escaping.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../../../../templates/base.html")),
    ("nav.html", include_str!("../../../../../templates/nav.html")),
    (
        "portfolio_toolbar.html",
        include_str!("../../../../../templates/portfolio_toolbar.html"),
    ),
    (HOME, include_str!("../../../../../templates/home.html")),
    (
        TEMPLATE_SELECT,
        include_str!("../../../../../templates/template_select.html"),
    ),
    (WIZARD, include_str!("../../../../../templates/wizard.html")),
    (
        PROFESSIONALS,
        include_str!("../../../../../templates/professionals.html"),
    ),
    (
        PORTFOLIO_MODERN,
        include_str!("../../../../../templates/portfolio_modern.html"),
    ),
    (
        PORTFOLIO_CLASSIC,
        include_str!("../../../../../templates/portfolio_classic.html"),
    ),
];

/// URL schemes a stored link or image may use. Scheme-less values are
/// relative and pass through.
const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Replacement for URLs with any other scheme.
const BLOCKED_URL: &str = "#";

/// `safe_url` filter: keeps `value` when it is relative or uses an allowed
/// scheme, otherwise yields `#`. Browsers drop whitespace and control
/// characters while reading a scheme, so the check does too.
fn safe_url(value: String) -> String {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();
    let scheme_end = compact.find(|c| matches!(c, ':' | '/' | '?' | '#'));

    match scheme_end {
        Some(end) if compact[end..].starts_with(':') => {
            let scheme = compact[..end].to_ascii_lowercase();
            if ALLOWED_URL_SCHEMES.contains(&scheme.as_str()) {
                value
            } else {
                BLOCKED_URL.to_string()
            }
        }
        _ => value,
    }
}

/// Server-side renderer for every page of the site.
pub struct MinijinjaPageRenderer {
    env: Environment<'static>,
}

impl MinijinjaPageRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_filter("safe_url", safe_url);
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)
                .map_err(|e| RenderError::TemplateMissing {
                    template: name.to_string(),
                    reason: e.to_string(),
                })?;
        }
        Ok(Self { env })
    }

    fn render(&self, template_name: &str, ctx: Value) -> Result<String, RenderError> {
        let template =
            self.env
                .get_template(template_name)
                .map_err(|e| RenderError::TemplateMissing {
                    template: template_name.to_string(),
                    reason: e.to_string(),
                })?;

        template.render(ctx).map_err(|e| RenderError::RenderFailed {
            template: template_name.to_string(),
            reason: e.to_string(),
        })
    }
}

fn portfolio_template_name(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Modern => PORTFOLIO_MODERN,
        TemplateKind::Classic => PORTFOLIO_CLASSIC,
    }
}

impl PageRenderer for MinijinjaPageRenderer {
    fn render_home(&self) -> Result<String, RenderError> {
        self.render(HOME, context! {})
    }

    fn render_template_selection(
        &self,
        view: &TemplateSelectionView,
    ) -> Result<String, RenderError> {
        self.render(TEMPLATE_SELECT, context! { page => view })
    }

    fn render_wizard_step(&self, view: &WizardStepView) -> Result<String, RenderError> {
        self.render(WIZARD, context! { page => view })
    }

    fn render_listing(&self, view: &ListingView) -> Result<String, RenderError> {
        self.render(PROFESSIONALS, context! { page => view })
    }

    fn render_portfolio(&self, record: &PortfolioRecord) -> Result<String, RenderError> {
        self.render(
            portfolio_template_name(record.template),
            context! {
                portfolio => record,
                published => record.content.blog.is_published(),
            },
        )
    }
}
