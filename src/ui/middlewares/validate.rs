use std::ops::Deref;

use validator::Validate;

use crate::domain::error::{AppError, AppResult};

/// A form that passed its validation rules.
#[derive(Debug)]
pub struct Valid<T>(T);

impl<T: Validate> Valid<T> {
    pub fn new(form: T) -> AppResult<Self> {
        form.validate().map(|_| Valid(form)).map_err(AppError::from)
    }
}

impl<T> Valid<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> AsRef<T> for Valid<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> Deref for Valid<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}
