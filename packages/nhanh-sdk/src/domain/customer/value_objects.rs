//! Customer enumerations.

use std::fmt;

use serde::{Serialize, Serializer};

/// Customer classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerType {
    /// Walk-in or retail buyer.
    Retail,
    /// Wholesale buyer.
    Wholesale,
    /// Reseller agent.
    Agent,
    /// Code not known to this SDK.
    Unknown(i64),
}

impl CustomerType {
    /// Decode the numeric code used by the API.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Retail,
            2 => Self::Wholesale,
            3 => Self::Agent,
            other => Self::Unknown(other),
        }
    }

    /// Numeric code used by the API.
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::Retail => 1,
            Self::Wholesale => 2,
            Self::Agent => 3,
            Self::Unknown(code) => *code,
        }
    }
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Retail => write!(f, "RETAIL"),
            Self::Wholesale => write!(f, "WHOLESALE"),
            Self::Agent => write!(f, "AGENT"),
            Self::Unknown(code) => write!(f, "UNKNOWN({code})"),
        }
    }
}

impl Serialize for CustomerType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

/// Customer gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Code not known to this SDK.
    Unknown(i64),
}

impl Gender {
    /// Decode the numeric code used by the API.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Male,
            2 => Self::Female,
            other => Self::Unknown(other),
        }
    }

    /// Numeric code used by the API.
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::Male => 1,
            Self::Female => 2,
            Self::Unknown(code) => *code,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "MALE"),
            Self::Female => write!(f, "FEMALE"),
            Self::Unknown(code) => write!(f, "UNKNOWN({code})"),
        }
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_type_codes() {
        assert_eq!(CustomerType::from_code(1), CustomerType::Retail);
        assert_eq!(CustomerType::from_code(3), CustomerType::Agent);
        assert_eq!(CustomerType::from_code(9), CustomerType::Unknown(9));
        assert_eq!(CustomerType::Wholesale.code(), 2);
        assert_eq!(CustomerType::Unknown(9).code(), 9);
    }

    #[test]
    fn gender_codes() {
        assert_eq!(Gender::from_code(2), Gender::Female);
        assert_eq!(Gender::from_code(0), Gender::Unknown(0));
        assert_eq!(format!("{}", Gender::Male), "MALE");
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&CustomerType::Agent).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "2");
    }
}
