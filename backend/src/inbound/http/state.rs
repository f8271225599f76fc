//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the
//! driving ports, so tests can substitute mocks without any I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    AssociationsCommand, BrandAssetRepository, BrandAssetsCommand, BrandAssetsQuery,
    BrandMannequinRepository, BrandRepository, BrandsCommand, BrandsQuery, MannequinRepository,
    MannequinsCommand, MannequinsQuery, MediaUpload, ObjectStorage,
};
use crate::domain::{
    AssociationService, BrandAssetService, BrandService, MannequinService, UploadService,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub brands: Arc<dyn BrandsQuery>,
    pub brands_command: Arc<dyn BrandsCommand>,
    pub mannequins: Arc<dyn MannequinsQuery>,
    pub mannequins_command: Arc<dyn MannequinsCommand>,
    pub associations: Arc<dyn AssociationsCommand>,
    pub assets: Arc<dyn BrandAssetsQuery>,
    pub assets_command: Arc<dyn BrandAssetsCommand>,
    pub uploads: Arc<dyn MediaUpload>,
}

/// Driven adapters the domain services are built over.
pub struct Adapters<B, M, L, A, S> {
    pub brands: Arc<B>,
    pub mannequins: Arc<M>,
    pub links: Arc<L>,
    pub assets: Arc<A>,
    pub storage: Arc<S>,
}

impl HttpState {
    /// Wire every domain service over the given adapters.
    pub fn from_adapters<B, M, L, A, S>(adapters: Adapters<B, M, L, A, S>, clock: Arc<dyn Clock>) -> Self
    where
        B: BrandRepository + 'static,
        M: MannequinRepository + 'static,
        L: BrandMannequinRepository + 'static,
        A: BrandAssetRepository + 'static,
        S: ObjectStorage + 'static,
    {
        let Adapters {
            brands,
            mannequins,
            links,
            assets,
            storage,
        } = adapters;

        let brand_service = Arc::new(BrandService::new(
            Arc::clone(&brands),
            Arc::clone(&mannequins),
            Arc::clone(&links),
            Arc::clone(&assets),
            Arc::clone(&storage),
            Arc::clone(&clock),
        ));
        let mannequin_service = Arc::new(MannequinService::new(
            Arc::clone(&mannequins),
            Arc::clone(&links),
            Arc::clone(&brands),
            Arc::clone(&storage),
            Arc::clone(&clock),
        ));
        let asset_service = Arc::new(BrandAssetService::new(
            assets,
            Arc::clone(&brands),
            Arc::clone(&storage),
            Arc::clone(&clock),
        ));
        let associations = Arc::new(AssociationService::new(brands, mannequins, links, clock));

        Self {
            brands: brand_service.clone(),
            brands_command: brand_service,
            mannequins: mannequin_service.clone(),
            mannequins_command: mannequin_service,
            associations,
            assets: asset_service.clone(),
            assets_command: asset_service,
            uploads: Arc::new(UploadService::new(storage)),
        }
    }
}
