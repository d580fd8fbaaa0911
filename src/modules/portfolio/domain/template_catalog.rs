use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The closed set of visual templates a portfolio can be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Modern,
    Classic,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown template: {0}")]
pub struct UnknownTemplate(pub String);

impl TemplateKind {
    pub fn all() -> [TemplateKind; 2] {
        [TemplateKind::Modern, TemplateKind::Classic]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Modern => "modern",
            TemplateKind::Classic => "classic",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateKind::Modern => "Modern",
            TemplateKind::Classic => "Classic",
        }
    }

    pub fn descriptor(&self) -> TemplateDescriptor {
        match self {
            TemplateKind::Modern => TemplateDescriptor {
                kind: TemplateKind::Modern,
                name: "Modern Portfolio",
                description:
                    "Clean, minimal design with gradient accents and modern typography",
                features: vec![
                    "Gradient Backgrounds",
                    "Card-based Layout",
                    "Modern Icons",
                    "Smooth Animations",
                ],
            },
            TemplateKind::Classic => TemplateDescriptor {
                kind: TemplateKind::Classic,
                name: "Classic Portfolio",
                description:
                    "Professional, elegant design with clean lines and traditional layout",
                features: vec![
                    "Clean Typography",
                    "Professional Layout",
                    "Elegant Design",
                    "Timeless Appeal",
                ],
            },
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "modern" => Ok(TemplateKind::Modern),
            "classic" => Ok(TemplateKind::Classic),
            other => Err(UnknownTemplate(other.to_string())),
        }
    }
}

/// Metadata shown on the template selection page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TemplateDescriptor {
    pub kind: TemplateKind,
    pub name: &'static str,
    pub description: &'static str,
    pub features: Vec<&'static str>,
}

pub fn template_catalog() -> Vec<TemplateDescriptor> {
    TemplateKind::all()
        .iter()
        .map(TemplateKind::descriptor)
        .collect()
}
