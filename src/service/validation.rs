//! Field validation for create/update inputs.
//!
//! Length limits are counted in characters, not bytes. Failures map to 422.

use crate::error::AppError;
use crate::model::{NewGood, NewOrder, NewUser};

fn str_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len < min {
        return Err(AppError::Validation(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    if len > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

impl NewUser {
    pub fn validate(&self) -> Result<(), AppError> {
        str_length("username", &self.username, 3, 30)?;
        str_length("sur_name", &self.sur_name, 3, 30)?;
        str_length("email", &self.email, 10, 100)?;
        // Plaintext length; the stored digest is always 64 hex chars.
        str_length("password", &self.password, 12, 100)?;
        Ok(())
    }
}

impl NewGood {
    pub fn validate(&self) -> Result<(), AppError> {
        str_length("name", &self.name, 3, 30)?;
        str_length("description", &self.description, 0, 500)?;
        if self.price <= 0.0 {
            return Err(AppError::Validation("price must be greater than 0".into()));
        }
        if self.price > 100_000.0 {
            return Err(AppError::Validation("price must be at most 100000".into()));
        }
        Ok(())
    }
}

impl NewOrder {
    pub fn validate(&self) -> Result<(), AppError> {
        // user_id/good_id are not checked against existing rows.
        str_length("date", &self.date, 0, 20)?;
        Ok(())
    }
}
