//! `PersonModel` column mapping for the `Person` table.

use super::{DataResult, Record, RecordRow};
use crate::model::person::PersonModel;

pub const COLUMN_ID: &str = "Id";
pub const COLUMN_FIRST_NAME: &str = "FirstName";
pub const COLUMN_LAST_NAME: &str = "LastName";
pub const COLUMN_HEIGHT_IN_INCHES: &str = "HeightInInches";

impl Record for PersonModel {
    fn to_row(&self) -> RecordRow {
        RecordRow::new()
            .with(COLUMN_ID, self.id)
            .with(COLUMN_FIRST_NAME, self.first_name.clone())
            .with(COLUMN_LAST_NAME, self.last_name.clone())
            .with(COLUMN_HEIGHT_IN_INCHES, self.height_in_inches)
    }

    fn from_row(row: &RecordRow) -> DataResult<Self> {
        Ok(Self {
            id: row.integer(COLUMN_ID)?,
            first_name: row.text(COLUMN_FIRST_NAME)?,
            last_name: row.text(COLUMN_LAST_NAME)?,
            height_in_inches: row.real(COLUMN_HEIGHT_IN_INCHES)?,
        })
    }
}
