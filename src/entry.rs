use crate::error::CalcError;

/// Parse the principal text field.
///
/// Surrounding whitespace is ignored. Anything that is not a finite decimal
/// number is a `CalcError::Parse`; the sign is not checked here.
pub fn parse_principal(raw: &str) -> Result<f64, CalcError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::Parse(raw.to_string())),
    }
}
