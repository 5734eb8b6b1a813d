//! Size limits for the ingest parser.
//!
//! Input arriving from the CLI or a corpus file is untrusted, so the parser
//! bounds total size, nesting, string length and aggregate sizes.
//!
//! - E110_InputTooLarge: Total input size limit
//! - E111_NestingTooDeep: Maximum nesting depth
//! - E112_StringTooLong: Maximum string length
//! - E113_TooManyFields: Maximum object fields
//! - E114_ArrayTooLong: Maximum array length

/// Size limits for JSON ingest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total input size in bytes (E110)
    pub max_input_size: u64,
    /// Maximum nesting depth for arrays/objects (E111)
    pub max_nesting_depth: u64,
    /// Maximum string length in bytes (E112)
    pub max_string_length: u64,
    /// Maximum number of fields in an object (E113)
    pub max_object_fields: u64,
    /// Maximum number of elements in an array (E114)
    pub max_array_length: u64,
}

impl Limits {
    /// Default limits, sized for view payloads.
    pub const fn standard() -> Self {
        Self {
            max_input_size: 1024 * 1024,  // 1 MiB
            max_nesting_depth: 32,        // 32 levels
            max_string_length: 64 * 1024, // 64 KiB
            max_object_fields: 1024,      // 1024 fields
            max_array_length: 10_000,     // 10,000 elements
        }
    }

    /// Lenient limits for bulk conversions.
    pub const fn lenient() -> Self {
        Self {
            max_input_size: 16 * 1024 * 1024, // 16 MiB
            max_nesting_depth: 128,           // 128 levels
            max_string_length: 1024 * 1024,   // 1 MiB
            max_object_fields: 10_000,        // 10,000 fields
            max_array_length: 100_000,        // 100,000 elements
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_limits() {
        let limits = Limits::standard();
        assert_eq!(limits.max_input_size, 1024 * 1024);
        assert_eq!(limits.max_nesting_depth, 32);
        assert_eq!(limits.max_string_length, 64 * 1024);
        assert_eq!(limits.max_object_fields, 1024);
        assert_eq!(limits.max_array_length, 10_000);
        assert_eq!(Limits::default(), limits);
    }

    #[test]
    fn test_lenient_limits() {
        let limits = Limits::lenient();
        assert!(limits.max_input_size > Limits::standard().max_input_size);
        assert!(limits.max_nesting_depth > Limits::standard().max_nesting_depth);
    }
}
