//! Surrogate identifiers for owned entities.
//!
//! Each table row is keyed by a UUID. Wrapping them in distinct newtypes
//! keeps a brand id from being passed where a mannequin id is expected.

macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn random() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            #[must_use]
            pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            #[must_use]
            pub fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self)
            }
        }

        impl From<uuid::Uuid> for $name {
            fn from(value: uuid::Uuid) -> Self {
                Self(value)
            }
        }
    };
}

define_entity_id!(
    /// Identifier of a [`crate::domain::Brand`].
    BrandId
);
define_entity_id!(
    /// Identifier of a [`crate::domain::Mannequin`].
    MannequinId
);
define_entity_id!(
    /// Identifier of a [`crate::domain::MannequinPhoto`].
    PhotoId
);
define_entity_id!(
    /// Identifier of a [`crate::domain::BrandAsset`].
    AssetId
);
define_entity_id!(
    /// Identifier of a brand/mannequin junction row.
    LinkId
);
