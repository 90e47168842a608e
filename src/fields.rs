//! Profile field values and the conventional field names.

use soroban_sdk::{contracttype, String};

/// Value stored under a profile field.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldValue {
    /// Text such as a bio or an avatar URL.
    StringField(String),
    /// Integer value.
    IntField(i128),
    /// Flag such as `hiring`.
    BoolField(bool),
}

impl FieldValue {
    pub fn as_string(&self) -> Option<&String> {
        match self {
            FieldValue::StringField(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i128> {
        match self {
            FieldValue::IntField(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::BoolField(b) => Some(*b),
            _ => None,
        }
    }
}

/// Conventional field names. The registry accepts any `Symbol`; these only
/// keep independent front ends consistent with each other.
pub mod standard_fields {
    pub const BIO: &str = "bio";
    pub const AVATAR: &str = "avatar";
    pub const HOMEPAGE: &str = "homepage";
    pub const LOCATION: &str = "location";
    pub const GITHUB: &str = "github";
    pub const TWITTER: &str = "twitter";
    pub const EMAIL: &str = "email";
    /// Boolean: open to job offers.
    pub const HIRING: &str = "hiring";

    /// All conventional names, in display order.
    pub const ALL: [&str; 8] = [BIO, AVATAR, HOMEPAGE, LOCATION, GITHUB, TWITTER, EMAIL, HIRING];
}
