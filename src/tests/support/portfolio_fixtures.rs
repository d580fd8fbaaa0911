use serde_json::{json, Value};

use crate::portfolio::domain::{PortfolioContent, PortfolioId, PortfolioRecord, TemplateKind};

pub fn sample_record(
    name: &str,
    title: &str,
    skills: &[&str],
    template: TemplateKind,
) -> PortfolioRecord {
    let mut content = PortfolioContent::default();
    content.hero.name = name.to_string();
    content.hero.title = title.to_string();
    content.about.bio = format!("{name} builds things.");
    content.skills = skills.iter().map(|s| s.to_string()).collect();
    PortfolioRecord::new(PortfolioId::generate(), template, content)
}

/// JSON body accepted by the create and replace endpoints. `template` is
/// passed through verbatim so tests can post unknown values.
pub fn sample_payload(name: &str, template: &str) -> Value {
    json!({
        "template": template,
        "hero": {
            "name": name,
            "title": "Engineer",
            "tagline": "Ships things",
            "profileImageUrl": ""
        },
        "about": {
            "bio": "Writes Rust.",
            "email": "jane@example.com",
            "phone": "",
            "location": "Remote",
            "socials": [{ "platform": "GitHub", "url": "https://github.com/jane" }]
        },
        "skills": ["Rust", "SQL"],
        "services": [{ "title": "Consulting", "description": "Architecture reviews" }],
        "portfolioProjects": [],
        "testimonials": [],
        "blog": { "title": "", "summary": "" },
        "contact": { "message": "Say hi", "email": "jane@example.com", "phone": "" }
    })
}
