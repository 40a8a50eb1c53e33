// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use loppis::CoreError;
use loppis_domain::DomainError;
use loppis_persistence::PersistenceError;
use thiserror::Error;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The forwarded identity is missing or unusable.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    #[error("Unauthorized: '{action}' requires {required_role} role")]
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

/// API-level errors.
///
/// These are distinct from domain/core/persistence errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Authentication failed.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    #[error("Unauthorized: '{action}' requires {required_role} role")]
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description.
        message: String,
    },
    /// The item store could not be reached.
    #[error("Storage unavailable: {message}")]
    StorageUnavailable {
        /// A human-readable description.
        message: String,
    },
    /// Some steps of a composite operation were persisted and others were not.
    #[error("Operation '{operation}' partially failed: {message}")]
    PartialCompositeFailure {
        /// The composite operation.
        operation: String,
        /// What was and was not persisted.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A human-readable description.
        message: String,
    },
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

fn invalid_input(field: &str, message: String) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message,
    }
}

/// Translates a domain error into an API error.
///
/// Field-level failures become `InvalidInput` naming the field; lifecycle
/// violations become `DomainRuleViolation`.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidName(_) => invalid_input("name", message),
        DomainError::InvalidSubcategory(_) => invalid_input("subcategory", message),
        DomainError::InvalidCategory(_) => invalid_input("category", message),
        DomainError::InvalidCondition(_) => invalid_input("condition", message),
        DomainError::InvalidStatus(_) => invalid_input("status", message),
        DomainError::InvalidRole(_) => invalid_input("role", message),
        DomainError::InvalidQuantity { .. } => invalid_input("quantity", message),
        DomainError::InvalidPrice { field, .. } => invalid_input(field, message),
        DomainError::InvalidReservedBy(_) => invalid_input("reserved_by", message),
        DomainError::InvalidCustomerName(_) => invalid_input("customer_name", message),
        DomainError::EmptyReservation | DomainError::EmptyDonationBatch => {
            invalid_input("items", message)
        }
        DomainError::InvalidStatusTransition { .. } => ApiError::DomainRuleViolation {
            rule: String::from("item_lifecycle"),
            message,
        },
    }
}

/// Translates a core error into an API error.
///
/// A rejected donation names the offending draft, e.g. `items[2].name`.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::PermissionDenied {
            action,
            required_role,
        } => ApiError::Unauthorized {
            action,
            required_role,
        },
        CoreError::BatchRejected { index, error } => match translate_domain_error(error) {
            ApiError::InvalidInput { field, message } => ApiError::InvalidInput {
                field: format!("items[{index}].{field}"),
                message,
            },
            other => other,
        },
    }
}

/// Translates a persistence error into an API error.
///
/// # Arguments
///
/// * `err` - The persistence error
/// * `resource_type` - The kind of record the failed call addressed
#[must_use]
pub fn translate_persistence_error(err: PersistenceError, resource_type: &str) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: resource_type.to_string(),
            message,
        },
        PersistenceError::SerializationError(_)
        | PersistenceError::InitializationError(_)
        | PersistenceError::MigrationFailed(_) => ApiError::Internal {
            message: err.to_string(),
        },
        PersistenceError::StorageUnavailable(_)
        | PersistenceError::DatabaseError(_)
        | PersistenceError::DatabaseConnectionFailed(_)
        | PersistenceError::QueryFailed(_) => ApiError::StorageUnavailable {
            message: err.to_string(),
        },
    }
}
