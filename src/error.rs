//! Error codes for the asset helpers and the JSON subsystem.
//!
//! Every failure the crate can report is a numbered variant of [`ErrorCode`].
//! The number groups the failure by subsystem:
//!
//! - 1xx: JSON ingest and encoding
//! - 3xx: configuration
//! - 4xx: date handling
//! - 5xx: filesystem

use thiserror::Error;

/// All error codes reported by the crate.
///
/// The serializer itself is total; only the depth-limited encoder, the
/// ingest parser and the helpers produce these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    /// E100_InvalidJSON (code 100)
    #[error("E100_InvalidJSON")]
    E100_InvalidJSON,

    /// E101_DuplicateKey (code 101)
    #[error("E101_DuplicateKey({0})")]
    E101_DuplicateKey(/* key */ String),

    /// E105_InvalidUTF8 (code 105)
    #[error("E105_InvalidUTF8")]
    E105_InvalidUTF8,

    /// E110_InputTooLarge (code 110)
    #[error("E110_InputTooLarge({0}, {1})")]
    E110_InputTooLarge(/* size */ u64, /* max */ u64),

    /// E111_NestingTooDeep (code 111)
    #[error("E111_NestingTooDeep({0}, {1})")]
    E111_NestingTooDeep(/* depth */ u64, /* max */ u64),

    /// E112_StringTooLong (code 112)
    #[error("E112_StringTooLong({0}, {1})")]
    E112_StringTooLong(/* length */ u64, /* max */ u64),

    /// E113_TooManyFields (code 113)
    #[error("E113_TooManyFields({0}, {1})")]
    E113_TooManyFields(/* count */ u64, /* max */ u64),

    /// E114_ArrayTooLong (code 114)
    #[error("E114_ArrayTooLong({0}, {1})")]
    E114_ArrayTooLong(/* length */ u64, /* max */ u64),

    /// E300_ConfigUnreadable (code 300)
    #[error("E300_ConfigUnreadable({0})")]
    E300_ConfigUnreadable(/* reason */ String),

    /// E301_ConfigInvalid (code 301)
    #[error("E301_ConfigInvalid({0})")]
    E301_ConfigInvalid(/* reason */ String),

    /// E400_MalformedDate (code 400)
    #[error("E400_MalformedDate({0})")]
    E400_MalformedDate(/* input */ String),

    /// E401_TimestampOutOfRange (code 401)
    #[error("E401_TimestampOutOfRange({0})")]
    E401_TimestampOutOfRange(/* timestamp */ i64),

    /// E500_Io (code 500)
    #[error("E500_Io({0})")]
    E500_Io(/* reason */ String),
}

impl ErrorCode {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::E100_InvalidJSON => 100,
            ErrorCode::E101_DuplicateKey(_) => 101,
            ErrorCode::E105_InvalidUTF8 => 105,
            ErrorCode::E110_InputTooLarge(_, _) => 110,
            ErrorCode::E111_NestingTooDeep(_, _) => 111,
            ErrorCode::E112_StringTooLong(_, _) => 112,
            ErrorCode::E113_TooManyFields(_, _) => 113,
            ErrorCode::E114_ArrayTooLong(_, _) => 114,
            ErrorCode::E300_ConfigUnreadable(_) => 300,
            ErrorCode::E301_ConfigInvalid(_) => 301,
            ErrorCode::E400_MalformedDate(_) => 400,
            ErrorCode::E401_TimestampOutOfRange(_) => 401,
            ErrorCode::E500_Io(_) => 500,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::E100_InvalidJSON => "E100_InvalidJSON",
            ErrorCode::E101_DuplicateKey(_) => "E101_DuplicateKey",
            ErrorCode::E105_InvalidUTF8 => "E105_InvalidUTF8",
            ErrorCode::E110_InputTooLarge(_, _) => "E110_InputTooLarge",
            ErrorCode::E111_NestingTooDeep(_, _) => "E111_NestingTooDeep",
            ErrorCode::E112_StringTooLong(_, _) => "E112_StringTooLong",
            ErrorCode::E113_TooManyFields(_, _) => "E113_TooManyFields",
            ErrorCode::E114_ArrayTooLong(_, _) => "E114_ArrayTooLong",
            ErrorCode::E300_ConfigUnreadable(_) => "E300_ConfigUnreadable",
            ErrorCode::E301_ConfigInvalid(_) => "E301_ConfigInvalid",
            ErrorCode::E400_MalformedDate(_) => "E400_MalformedDate",
            ErrorCode::E401_TimestampOutOfRange(_) => "E401_TimestampOutOfRange",
            ErrorCode::E500_Io(_) => "E500_Io",
        }
    }
}

impl From<std::io::Error> for ErrorCode {
    fn from(err: std::io::Error) -> Self {
        ErrorCode::E500_Io(err.to_string())
    }
}

/// Result type for fallible helper operations.
pub type HelperResult<T> = Result<T, ErrorCode>;
