//! Identifier value objects for catalog entries

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
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

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a store (a column of the inventory table)
    StoreId
);

string_id!(
    /// Identifier of a catalog product (the upsert key of inventory records)
    ProductId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&ProductId::new("12")).unwrap();
        assert_eq!(json, "\"12\"");

        let id: StoreId = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(id.as_str(), "3");
    }

    #[test]
    fn ids_order_lexically() {
        let mut ids = vec![StoreId::from("b"), StoreId::from("a")];
        ids.sort();
        assert_eq!(ids[0].as_str(), "a");
    }
}
