use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    MissingSeparator(String),

    #[error("Key cannot be empty in '{0}'.")]
    EmptyKey(String),

    #[error("Invalid boolean value for {key}: '{value}'. Expected 'true' or 'false'.")]
    InvalidBool { key: String, value: String },
}

/// Splits a `KEY=VALUE` override at the first `=`; the value may be empty.
pub fn parse_key_value(pair: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(pair.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(pair.to_string()));
    }
    Ok((key, value))
}

pub fn parse_bool(key: &str, value: &str) -> Result<bool, ParseError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
