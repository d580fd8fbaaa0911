pub mod draft_edit;
pub mod entities;
pub mod filter;
pub mod template_catalog;
pub mod wizard;

pub use draft_edit::{
    DraftEdit, DraftEditError, FieldKey, FieldKeyError, IndexedField, ListItem, ListSection,
    ScalarField,
};
pub use entities::{
    About, Blog, Contact, Hero, PortfolioContent, PortfolioId, PortfolioRecord, Project, Service,
    Social, Testimonial,
};
pub use filter::{FilterFacets, PortfolioFilter};
pub use template_catalog::{template_catalog, TemplateDescriptor, TemplateKind, UnknownTemplate};
pub use wizard::{PortfolioSubmission, PortfolioWizard, SubmissionMode, WizardError, WizardStep};
