//! Opaque string identifiers
//!
//! The hosted document store assigns random string ids to documents, and the
//! authentication collaborator hands us stable string user ids. The newtypes
//! below keep those id spaces from being mixed up while serializing as plain
//! strings on the wire.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Alphabet used for generated document ids (matches the hosted store's).
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated document ids.
const ID_LEN: usize = 20;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create from a raw string value
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the inner string
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume into the inner string
            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id! {
    /// Stable user identifier issued by the authentication collaborator
    UserId
}

string_id! {
    /// Identifier of a feed post
    PostId
}

string_id! {
    /// Store-assigned identifier of any other document
    DocumentId
}

/// Generator for store-style random document ids
///
/// Produces 20-character alphanumeric ids, the same shape the hosted store
/// assigns on document creation. Collision probability is negligible at
/// festival scale.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentIdGenerator;

impl DocumentIdGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh random id string
    pub fn generate_raw(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..ID_LEN)
            .map(|_| {
                let idx = rng.gen_range(0..ID_ALPHABET.len());
                ID_ALPHABET[idx] as char
            })
            .collect()
    }

    /// Generate a fresh document id
    pub fn generate(&self) -> DocumentId {
        DocumentId::new(self.generate_raw())
    }

    /// Generate a fresh post id
    pub fn generate_post_id(&self) -> PostId {
        PostId::new(self.generate_raw())
    }
}
