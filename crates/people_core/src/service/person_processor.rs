//! Person use-case processor.
//!
//! # Responsibility
//! - Validate raw person input and build unsaved `PersonModel` values.
//! - Delegate load/save/update to the injected `DataAccess` collaborator.
//!
//! # Invariants
//! - Validation order is `firstName`, `lastName`, `heightText`; the first
//!   failing rule decides the reported parameter.
//! - Persistence calls issue exactly one collaborator call with fixed SQL and
//!   return collaborator results and errors unchanged.
//! - Log events carry metadata only, never person names.

use crate::data_access::{DataAccess, DataResult, NoopDataAccess};
use crate::model::person::PersonModel;
use crate::service::height::{convert_height_text_to_inches, HeightConversion};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Read query used by `load_people`.
pub const LOAD_PEOPLE_SQL: &str = "select * from Person";
/// Insert statement used by `save_person`.
pub const SAVE_PERSON_SQL: &str = "insert into Person (FirstName, LastName, HeightInInches) values (@FirstName, @LastName, @HeightInInches)";
/// Update statement used by `update_person`.
pub const UPDATE_PERSON_SQL: &str = "update Person set FirstName = @FirstName, LastName = @LastName, HeightInInches = @HeightInInches where Id = @Id";

// Letters, each optionally followed by combining marks (`Jose\u{301}`).
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\p{Alphabetic}\p{M}*)+$").expect("valid name regex"));

/// Input parameter of `create_person`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonParam {
    FirstName,
    LastName,
    HeightText,
}

impl PersonParam {
    /// Parameter name as exposed to callers (`firstName`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::HeightText => "heightText",
        }
    }
}

impl Display for PersonParam {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Validation failure for one `create_person` input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    pub param: PersonParam,
    pub reason: &'static str,
}

impl InvalidArgumentError {
    fn new(param: PersonParam, reason: &'static str) -> Self {
        Self { param, reason }
    }

    /// Name of the parameter that failed validation.
    pub fn param_name(&self) -> &'static str {
        self.param.name()
    }
}

impl Display for InvalidArgumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid argument `{}`: {}", self.param, self.reason)
    }
}

impl Error for InvalidArgumentError {}

/// Validating front door for person records.
pub struct PersonProcessor<D: DataAccess> {
    data_access: D,
}

impl PersonProcessor<NoopDataAccess> {
    /// Creates a processor for conversion/validation-only use.
    pub fn without_store() -> Self {
        Self::new(NoopDataAccess)
    }
}

impl<D: DataAccess> PersonProcessor<D> {
    /// Creates a processor delegating persistence to `data_access`.
    pub fn new(data_access: D) -> Self {
        Self { data_access }
    }

    /// Returns the injected collaborator.
    pub fn data_access(&self) -> &D {
        &self.data_access
    }

    /// Converts `<feet>'<inches>"` text into total inches.
    pub fn convert_height_text_to_inches(&self, height_text: &str) -> HeightConversion {
        convert_height_text_to_inches(height_text)
    }

    /// Validates input and builds an unsaved person (`id == 0`).
    ///
    /// # Errors
    /// - `firstName`/`lastName` when empty or containing non-letters.
    /// - `heightText` when the text is not `<feet>'<inches>"`.
    pub fn create_person(
        &self,
        first_name: &str,
        last_name: &str,
        height_text: &str,
    ) -> Result<PersonModel, InvalidArgumentError> {
        let result = validate_name(PersonParam::FirstName, first_name)
            .and_then(|()| validate_name(PersonParam::LastName, last_name))
            .and_then(|()| {
                let height = self.convert_height_text_to_inches(height_text);
                if height.is_valid {
                    Ok(height.height_in_inches)
                } else {
                    Err(InvalidArgumentError::new(
                        PersonParam::HeightText,
                        "expected <feet>'<inches>\"",
                    ))
                }
            })
            .map(|height_in_inches| PersonModel::new(first_name, last_name, height_in_inches));

        match &result {
            Ok(_) => debug!("event=person_create module=processor status=ok"),
            Err(err) => warn!(
                "event=person_create module=processor status=rejected param={}",
                err.param
            ),
        }
        result
    }

    /// Loads every stored person as returned by the collaborator.
    pub fn load_people(&self) -> DataResult<Vec<PersonModel>> {
        self.data_access.load_data(LOAD_PEOPLE_SQL)
    }

    /// Inserts `person`; the store assigns the id.
    pub fn save_person(&self, person: &PersonModel) -> DataResult<()> {
        self.data_access.save_data(person, SAVE_PERSON_SQL)
    }

    /// Updates the stored row keyed by `person.id`.
    ///
    /// No existence check is made; a missing id is left to the store.
    pub fn update_person(&self, person: &PersonModel) -> DataResult<()> {
        self.data_access.update_data(person, UPDATE_PERSON_SQL)
    }
}

fn validate_name(param: PersonParam, value: &str) -> Result<(), InvalidArgumentError> {
    if value.is_empty() {
        return Err(InvalidArgumentError::new(param, "must not be empty"));
    }
    if !NAME_RE.is_match(value) {
        return Err(InvalidArgumentError::new(param, "must contain letters only"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_name, PersonParam};

    #[test]
    fn validate_name_accepts_non_ascii_letters() {
        assert!(validate_name(PersonParam::FirstName, "Zoë").is_ok());
        assert!(validate_name(PersonParam::LastName, "Łukasz").is_ok());
        assert!(validate_name(PersonParam::FirstName, "Jose\u{301}").is_ok());
    }

    #[test]
    fn validate_name_rejects_blank_and_separators() {
        for value in [
            "",
            " ",
            "\u{301}Jose",
            "Mary Ann",
            "O'Neil",
            "Smith-Jones",
            "Tim#",
            "C88ey",
        ] {
            let err = validate_name(PersonParam::LastName, value).unwrap_err();
            assert_eq!(err.param_name(), "lastName", "value `{value}`");
        }
    }

    #[test]
    fn param_display_uses_caller_facing_names() {
        assert_eq!(PersonParam::FirstName.to_string(), "firstName");
        assert_eq!(PersonParam::HeightText.to_string(), "heightText");
    }
}
