// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use loppis_domain::DomainError;

/// Errors that can occur while applying lifecycle commands or intake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The actor's role does not permit the operation.
    PermissionDenied {
        /// The operation that was attempted.
        action: String,
        /// The role required to perform it.
        required_role: String,
    },
    /// One draft of a donation batch failed validation, so the whole batch
    /// was rejected.
    BatchRejected {
        /// Zero-based position of the offending draft.
        index: usize,
        /// Why the draft was rejected.
        error: DomainError,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::PermissionDenied {
                action,
                required_role,
            } => write!(f, "Permission denied: '{action}' requires role '{required_role}'"),
            Self::BatchRejected { index, error } => {
                write!(f, "Donation rejected: item {} is invalid: {error}", index + 1)
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
