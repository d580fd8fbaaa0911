//! Decoding of wizard form posts.
//!
//! Every field is named with its [`FieldKey`] (`hero.name`,
//! `services.1.description`, `skills.0`). The clicked button arrives as
//! `action`: `next`, `previous`, `submit`, `add:{section}` or
//! `remove:{section}:{index}`.

use std::str::FromStr;

use crate::portfolio::application::ports::incoming::use_cases::WizardAction;
use crate::portfolio::domain::{DraftEdit, FieldKey, FieldKeyError, ListSection};

const ACTION_KEY: &str = "action";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardFormError {
    #[error(transparent)]
    Field(#[from] FieldKeyError),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Form is missing an action")]
    MissingAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardForm {
    pub edits: Vec<DraftEdit>,
    pub action: WizardAction,
}

impl WizardForm {
    /// Edits keep the order fields were posted in.
    pub fn parse(pairs: Vec<(String, String)>) -> Result<Self, WizardFormError> {
        let mut edits = Vec::with_capacity(pairs.len());
        let mut action = None;

        for (key, value) in pairs {
            if key == ACTION_KEY {
                action = Some(parse_action(&value)?);
                continue;
            }
            edits.push(FieldKey::from_str(&key)?.assign(value));
        }

        Ok(Self {
            edits,
            action: action.ok_or(WizardFormError::MissingAction)?,
        })
    }
}

fn parse_action(raw: &str) -> Result<WizardAction, WizardFormError> {
    let unknown = || WizardFormError::UnknownAction(raw.to_string());

    match raw {
        "next" => return Ok(WizardAction::Next),
        "previous" => return Ok(WizardAction::Previous),
        "submit" => return Ok(WizardAction::Submit),
        _ => {}
    }

    if let Some(section) = raw.strip_prefix("add:") {
        let section = ListSection::from_str(section).map_err(|_| unknown())?;
        return Ok(WizardAction::Add(section));
    }

    if let Some(rest) = raw.strip_prefix("remove:") {
        let (section, index) = rest.rsplit_once(':').ok_or_else(unknown)?;
        let section = ListSection::from_str(section).map_err(|_| unknown())?;
        let index = index.parse::<usize>().map_err(|_| unknown())?;
        return Ok(WizardAction::Remove(section, index));
    }

    Err(unknown())
}
