//! Typed key newtypes for catalog records.
//!
//! Keys are opaque alphanumeric codes chosen by the client. The newtypes only
//! carry the kind; length limits live in the schema's `CHECK` constraints.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_code {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw code.
            #[must_use]
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            /// Borrow the raw code.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                Self(code)
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self(code.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

define_code!(
    /// Key of a [`Career`](crate::career::Career).
    CareerCode
);

define_code!(
    /// Key of a [`Specialty`](crate::specialty::Specialty).
    SpecialtyCode
);

define_code!(
    /// Key of a [`Subject`](crate::subject::Subject).
    SubjectCode
);

define_code!(
    /// Key of a [`SpecialSubject`](crate::special_subject::SpecialSubject).
    SpecialSubjectCode
);
