//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports (`*Repository`, [`ObjectStorage`]) are implemented by the
//! outbound adapters. Driving ports (`*Query`, `*Command`, [`MediaUpload`])
//! are implemented by domain services and consumed by the HTTP adapter.

mod macros;
pub(crate) use macros::{define_port_error, repository_error};

mod associations_command;
mod brand_asset_repository;
mod brand_assets_command;
mod brand_assets_query;
mod brand_mannequin_repository;
mod brand_repository;
mod brands_command;
mod brands_query;
mod mannequin_repository;
mod mannequins_command;
mod mannequins_query;
mod media_upload;
mod object_storage;

#[cfg(test)]
pub use associations_command::MockAssociationsCommand;
pub use associations_command::AssociationsCommand;
#[cfg(test)]
pub use brand_asset_repository::MockBrandAssetRepository;
pub use brand_asset_repository::{BrandAssetRepository, BrandAssetRepositoryError};
#[cfg(test)]
pub use brand_assets_command::MockBrandAssetsCommand;
pub use brand_assets_command::BrandAssetsCommand;
#[cfg(test)]
pub use brand_assets_query::MockBrandAssetsQuery;
pub use brand_assets_query::BrandAssetsQuery;
#[cfg(test)]
pub use brand_mannequin_repository::MockBrandMannequinRepository;
pub use brand_mannequin_repository::{BrandMannequinRepository, BrandMannequinRepositoryError};
#[cfg(test)]
pub use brand_repository::MockBrandRepository;
pub use brand_repository::{BrandRepository, BrandRepositoryError};
#[cfg(test)]
pub use brands_command::MockBrandsCommand;
pub use brands_command::BrandsCommand;
#[cfg(test)]
pub use brands_query::MockBrandsQuery;
pub use brands_query::BrandsQuery;
#[cfg(test)]
pub use mannequin_repository::MockMannequinRepository;
pub use mannequin_repository::{MannequinRepository, MannequinRepositoryError};
#[cfg(test)]
pub use mannequins_command::MockMannequinsCommand;
pub use mannequins_command::MannequinsCommand;
#[cfg(test)]
pub use mannequins_query::MockMannequinsQuery;
pub use mannequins_query::MannequinsQuery;
#[cfg(test)]
pub use media_upload::MockMediaUpload;
pub use media_upload::MediaUpload;
#[cfg(test)]
pub use object_storage::MockObjectStorage;
pub use object_storage::{ObjectStorage, ObjectStorageError, StoredObject};
