//! Macro for implementing Display and FromStr for domain enums
//!
//! Eliminates boilerplate for enums that travel as stable lowercase labels
//! (log fields, report columns). Parsing is case-insensitive.
//!
//! # Example
//!
//! ```rust
//! use classbridge_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Phase {
//!     Load,
//!     Validate,
//! }
//!
//! impl_domain_enum_conversions!(Phase {
//!     Load => "load",
//!     Validate => "validate",
//! });
//!
//! assert_eq!(Phase::Load.to_string(), "load");
//! assert_eq!("VALIDATE".parse::<Phase>().unwrap(), Phase::Validate);
//! ```

/// Implements Display and FromStr traits for label enums
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase labels
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestPhase {
        Load,
        Provision,
    }

    impl_domain_enum_conversions!(TestPhase {
        Load => "load",
        Provision => "provision",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestPhase::Load.to_string(), "load");
        assert_eq!(TestPhase::Provision.to_string(), "provision");
    }

    #[test]
    fn test_fromstr_mixed_case() {
        assert_eq!(TestPhase::from_str("LoAd").unwrap(), TestPhase::Load);
        assert_eq!(TestPhase::from_str("PROVISION").unwrap(), TestPhase::Provision);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestPhase::from_str("persist");
        assert!(result.unwrap_err().contains("Invalid TestPhase: persist"));
    }
}
