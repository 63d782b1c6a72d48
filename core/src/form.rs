//! Edit-form state for a single country.
//!
//! The form is either creating a new record or editing an existing one.
//! That mode is carried explicitly by `FormMode` instead of being inferred
//! from an `id` of zero; the zero only reappears when the payload is built
//! for the wire.

use crate::error::ValidationError;
use crate::types::{Country, CountryId, UNSAVED_ID};

/// Whether the form targets a new record or an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(CountryId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryForm {
    pub mode: FormMode,
    pub name: String,
}

impl CountryForm {
    /// Populate the form from a listed record.
    ///
    /// A record carrying the unsaved id is treated as a new record.
    pub fn from_country(country: &Country) -> Self {
        let mode = if country.id == UNSAVED_ID {
            FormMode::Create
        } else {
            FormMode::Edit(country.id)
        };
        Self {
            mode,
            name: country.name.clone(),
        }
    }

    /// The id sent on the wire for this form.
    pub fn id(&self) -> CountryId {
        match self.mode {
            FormMode::Create => UNSAVED_ID,
            FormMode::Edit(id) => id,
        }
    }

    pub fn is_editing(&self, id: CountryId) -> bool {
        self.mode == FormMode::Edit(id)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }

    /// Request body for the current form. The name is sent as typed.
    pub fn to_payload(&self) -> Country {
        Country::new(self.id(), self.name.clone())
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Country",
            FormMode::Edit(_) => "Update Country",
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_is_in_create_mode() {
        let form = CountryForm::default();
        assert_eq!(form.mode, FormMode::Create);
        assert_eq!(form.id(), 0);
        assert!(form.name.is_empty());
        assert_eq!(form.submit_label(), "Add Country");
    }

    #[test]
    fn from_country_enters_edit_mode() {
        let form = CountryForm::from_country(&Country::new(2, "India"));
        assert_eq!(form.mode, FormMode::Edit(2));
        assert_eq!(form.name, "India");
        assert_eq!(form.submit_label(), "Update Country");
        assert!(form.is_editing(2));
        assert!(!form.is_editing(1));
    }

    #[test]
    fn from_country_with_unsaved_id_stays_in_create_mode() {
        let form = CountryForm::from_country(&Country::new(0, "Draft"));
        assert_eq!(form.mode, FormMode::Create);
    }

    #[test]
    fn whitespace_name_fails_validation() {
        let form = CountryForm {
            mode: FormMode::Create,
            name: "  \t ".to_string(),
        };
        assert_eq!(form.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn payload_keeps_the_name_as_typed() {
        let form = CountryForm {
            mode: FormMode::Edit(4),
            name: " Bharat ".to_string(),
        };
        assert!(form.validate().is_ok());
        assert_eq!(form.to_payload(), Country::new(4, " Bharat "));
    }

    #[test]
    fn reset_returns_to_defaults() {
        let mut form = CountryForm::from_country(&Country::new(3, "Peru"));
        form.reset();
        assert_eq!(form, CountryForm::default());
    }
}
