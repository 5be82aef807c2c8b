use common::{CommonError, ErrorCategory};

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    InvalidInput = 1,
    AuditNotFound = 2,
    DuplicateEntry = 3,
    SequenceExhausted = 4,
}

impl ContractError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::InvalidInput => ErrorCategory::Validation,
            ContractError::AuditNotFound => ErrorCategory::NotFound,
            ContractError::DuplicateEntry | ContractError::SequenceExhausted => {
                ErrorCategory::StateConflict
            }
        }
    }

    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::InvalidInput => "Invalid input parameters provided",
            ContractError::AuditNotFound => "Audit entry not found",
            ContractError::DuplicateEntry => "Audit entry with this hash already exists",
            ContractError::SequenceExhausted => "Audit counter cannot advance further",
        }
    }
}

impl From<CommonError> for ContractError {
    fn from(err: CommonError) -> Self {
        match err {
            CommonError::InvalidInput => ContractError::InvalidInput,
            CommonError::SequenceExhausted => ContractError::SequenceExhausted,
        }
    }
}
