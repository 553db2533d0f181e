//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! `From` impls live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod server {
    use crate::domain::types::TypeConstraintError;
    use crate::forms::dividends::AddDividendFormError;
    use crate::services::ServiceError;

    impl From<TypeConstraintError> for ServiceError {
        fn from(val: TypeConstraintError) -> Self {
            ServiceError::TypeConstraint(val.to_string())
        }
    }

    impl From<AddDividendFormError> for ServiceError {
        fn from(val: AddDividendFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }
}
