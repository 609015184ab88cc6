use thiserror::Error;

/// Store-assigned user identifier. Zero is never assigned.
pub type UserId = i64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseIdError {
    #[error("uid must be longer than 0 characters")]
    Empty,
    #[error("uid must be a number")]
    NotANumber,
}

pub fn uid_to_string(uid: UserId) -> String {
    uid.to_string()
}

pub fn parse_uid(raw: &str) -> Result<UserId, ParseIdError> {
    if raw.is_empty() {
        return Err(ParseIdError::Empty);
    }
    raw.parse::<UserId>().map_err(|_| ParseIdError::NotANumber)
}

pub fn int_to_string(i: i64) -> String {
    i.to_string()
}

/// Generic integer parse; unlike [`parse_uid`] an empty string is just not a
/// number.
pub fn parse_int(raw: &str) -> Result<i64, ParseIdError> {
    raw.parse::<i64>().map_err(|_| ParseIdError::NotANumber)
}
