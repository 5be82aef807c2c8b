use common::{CommonError, ErrorCategory};

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    /// The owner entry is missing from instance storage.
    NotInitialized = 1,
    Unauthorized = 2,
    InvalidInput = 3,
    InsufficientBalance = 4,
}

impl ContractError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::InvalidInput => {
                ErrorCategory::Validation
            }
            ContractError::Unauthorized => ErrorCategory::Authorization,
            ContractError::InsufficientBalance => ErrorCategory::StateConflict,
        }
    }

    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Owner is not configured",
            ContractError::Unauthorized => "Caller is not the owner",
            ContractError::InvalidInput => "Invalid point amount",
            ContractError::InsufficientBalance => "Not enough points",
        }
    }
}

impl From<CommonError> for ContractError {
    fn from(err: CommonError) -> Self {
        match err {
            CommonError::InvalidInput | CommonError::SequenceExhausted => {
                ContractError::InvalidInput
            }
        }
    }
}
