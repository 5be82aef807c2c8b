use soroban_sdk::String;

use crate::CommonError;

/// Upper bound for opaque identifiers such as patient ids.
pub const MAX_IDENTIFIER_LEN: u32 = 64;
/// Upper bound for short labels such as audit actions.
pub const MAX_LABEL_LEN: u32 = 64;
/// Upper bound for free-text payload fields, in bytes.
pub const MAX_TEXT_LEN: u32 = 1024;

/// Validate an opaque identifier (e.g. a patient id).
/// Any non-empty UTF-8 up to MAX_IDENTIFIER_LEN bytes is accepted.
pub fn validate_identifier(id: &String) -> Result<(), CommonError> {
    let len = id.len();
    if len == 0 || len > MAX_IDENTIFIER_LEN {
        return Err(CommonError::InvalidInput);
    }
    Ok(())
}

/// Validate a short label (e.g. an audit action such as `"Access"`).
/// Labels must be 1..=MAX_LABEL_LEN bytes of printable ASCII.
pub fn validate_label(label: &String) -> Result<(), CommonError> {
    let len = label.len();
    if len == 0 || len > MAX_LABEL_LEN {
        return Err(CommonError::InvalidInput);
    }

    let mut buf = [0u8; MAX_LABEL_LEN as usize];
    let bytes = &mut buf[..len as usize];
    label.copy_into_slice(bytes);

    // Printable ASCII only: space ' ' through tilde '~'.
    if bytes.iter().any(|b| !(32..=126).contains(b)) {
        return Err(CommonError::InvalidInput);
    }

    Ok(())
}

/// Validate a free-text field. Any UTF-8 is accepted, including the empty
/// string; only the encoded length is bounded.
pub fn validate_text(text: &String) -> Result<(), CommonError> {
    if text.len() > MAX_TEXT_LEN {
        return Err(CommonError::InvalidInput);
    }
    Ok(())
}

/// Validate a point amount. Zero is allowed; negative values are malformed.
pub fn validate_amount(amount: i128) -> Result<(), CommonError> {
    if amount < 0 {
        return Err(CommonError::InvalidInput);
    }
    Ok(())
}
