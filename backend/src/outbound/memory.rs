//! Process-local store implementing every repository port.
//!
//! Used when no database URL is configured and by the HTTP integration
//! tests. All tables share one mutex so deletes can cascade the same way
//! the PostgreSQL foreign keys do. Rows are kept in insertion order and
//! listed by `created_at` with a stable sort.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    BrandAssetRepository, BrandAssetRepositoryError, BrandMannequinRepository,
    BrandMannequinRepositoryError, BrandRepository, BrandRepositoryError, MannequinRepository,
    MannequinRepositoryError,
};
use crate::domain::{
    AssetCategory, AssetId, Brand, BrandAsset, BrandId, BrandMannequinLink, Mannequin,
    MannequinId, MannequinPhoto, PhotoId, UserId,
};

#[derive(Debug, Default)]
struct Tables {
    brands: Vec<Brand>,
    mannequins: Vec<Mannequin>,
    photos: Vec<MannequinPhoto>,
    assets: Vec<BrandAsset>,
    links: Vec<BrandMannequinLink>,
}

impl Tables {
    fn remove_brand_dependents(&mut self, brand_id: &BrandId) {
        self.links.retain(|link| link.brand_id != *brand_id);
        self.assets.retain(|asset| asset.brand_id != *brand_id);
    }

    fn remove_mannequin_dependents(&mut self, mannequin_id: &MannequinId) {
        self.links.retain(|link| link.mannequin_id != *mannequin_id);
        self.photos.retain(|photo| photo.mannequin_id != *mannequin_id);
    }
}

/// In-memory implementation of the brand, mannequin, junction and asset
/// repositories. Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, String> {
        self.tables
            .lock()
            .map_err(|_| "in-memory store lock poisoned".to_owned())
    }
}

fn sorted_by_created<T: Clone>(rows: impl Iterator<Item = T>, key: impl Fn(&T) -> i64) -> Vec<T> {
    let mut rows: Vec<T> = rows.collect();
    rows.sort_by_key(|row| key(row));
    rows
}

#[async_trait]
impl BrandRepository for InMemoryStore {
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Brand>, BrandRepositoryError> {
        let tables = self.lock().map_err(BrandRepositoryError::connection)?;
        Ok(sorted_by_created(
            tables.brands.iter().filter(|b| b.user_id == *user_id).cloned(),
            |b| b.created_at.timestamp_micros(),
        ))
    }

    async fn find_for_user(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
    ) -> Result<Option<Brand>, BrandRepositoryError> {
        let tables = self.lock().map_err(BrandRepositoryError::connection)?;
        Ok(tables
            .brands
            .iter()
            .find(|b| b.id == *brand_id && b.user_id == *user_id)
            .cloned())
    }

    async fn find_many_for_user(
        &self,
        user_id: &UserId,
        brand_ids: &[BrandId],
    ) -> Result<Vec<Brand>, BrandRepositoryError> {
        let tables = self.lock().map_err(BrandRepositoryError::connection)?;
        Ok(sorted_by_created(
            tables
                .brands
                .iter()
                .filter(|b| b.user_id == *user_id && brand_ids.contains(&b.id))
                .cloned(),
            |b| b.created_at.timestamp_micros(),
        ))
    }

    async fn insert(&self, brand: &Brand) -> Result<(), BrandRepositoryError> {
        let mut tables = self.lock().map_err(BrandRepositoryError::connection)?;
        if tables.brands.iter().any(|b| b.id == brand.id) {
            return Err(BrandRepositoryError::query("duplicate brand id"));
        }
        tables.brands.push(brand.clone());
        Ok(())
    }

    async fn update(&self, brand: &Brand) -> Result<bool, BrandRepositoryError> {
        let mut tables = self.lock().map_err(BrandRepositoryError::connection)?;
        match tables
            .brands
            .iter_mut()
            .find(|b| b.id == brand.id && b.user_id == brand.user_id)
        {
            Some(row) => {
                row.clone_from(brand);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_for_user(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
    ) -> Result<bool, BrandRepositoryError> {
        let mut tables = self.lock().map_err(BrandRepositoryError::connection)?;
        let before = tables.brands.len();
        tables
            .brands
            .retain(|b| !(b.id == *brand_id && b.user_id == *user_id));
        if tables.brands.len() == before {
            return Ok(false);
        }
        tables.remove_brand_dependents(brand_id);
        Ok(true)
    }
}

#[async_trait]
impl MannequinRepository for InMemoryStore {
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Mannequin>, MannequinRepositoryError> {
        let tables = self.lock().map_err(MannequinRepositoryError::connection)?;
        Ok(sorted_by_created(
            tables
                .mannequins
                .iter()
                .filter(|m| m.user_id == *user_id)
                .cloned(),
            |m| m.created_at.timestamp_micros(),
        ))
    }

    async fn find_for_user(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
    ) -> Result<Option<Mannequin>, MannequinRepositoryError> {
        let tables = self.lock().map_err(MannequinRepositoryError::connection)?;
        Ok(tables
            .mannequins
            .iter()
            .find(|m| m.id == *mannequin_id && m.user_id == *user_id)
            .cloned())
    }

    async fn find_many_for_user(
        &self,
        user_id: &UserId,
        mannequin_ids: &[MannequinId],
    ) -> Result<Vec<Mannequin>, MannequinRepositoryError> {
        let tables = self.lock().map_err(MannequinRepositoryError::connection)?;
        Ok(sorted_by_created(
            tables
                .mannequins
                .iter()
                .filter(|m| m.user_id == *user_id && mannequin_ids.contains(&m.id))
                .cloned(),
            |m| m.created_at.timestamp_micros(),
        ))
    }

    async fn insert(&self, mannequin: &Mannequin) -> Result<(), MannequinRepositoryError> {
        let mut tables = self.lock().map_err(MannequinRepositoryError::connection)?;
        if tables.mannequins.iter().any(|m| m.id == mannequin.id) {
            return Err(MannequinRepositoryError::query("duplicate mannequin id"));
        }
        tables.mannequins.push(mannequin.clone());
        Ok(())
    }

    async fn update(&self, mannequin: &Mannequin) -> Result<bool, MannequinRepositoryError> {
        let mut tables = self.lock().map_err(MannequinRepositoryError::connection)?;
        match tables
            .mannequins
            .iter_mut()
            .find(|m| m.id == mannequin.id && m.user_id == mannequin.user_id)
        {
            Some(row) => {
                row.clone_from(mannequin);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_for_user(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
    ) -> Result<bool, MannequinRepositoryError> {
        let mut tables = self.lock().map_err(MannequinRepositoryError::connection)?;
        let before = tables.mannequins.len();
        tables
            .mannequins
            .retain(|m| !(m.id == *mannequin_id && m.user_id == *user_id));
        if tables.mannequins.len() == before {
            return Ok(false);
        }
        tables.remove_mannequin_dependents(mannequin_id);
        Ok(true)
    }

    async fn photos_for(
        &self,
        mannequin_ids: &[MannequinId],
    ) -> Result<Vec<MannequinPhoto>, MannequinRepositoryError> {
        let tables = self.lock().map_err(MannequinRepositoryError::connection)?;
        Ok(sorted_by_created(
            tables
                .photos
                .iter()
                .filter(|p| mannequin_ids.contains(&p.mannequin_id))
                .cloned(),
            |p| p.created_at.timestamp_micros(),
        ))
    }

    async fn insert_photos(&self, photos: &[MannequinPhoto]) -> Result<(), MannequinRepositoryError> {
        let mut tables = self.lock().map_err(MannequinRepositoryError::connection)?;
        for photo in photos {
            if !tables.mannequins.iter().any(|m| m.id == photo.mannequin_id) {
                return Err(MannequinRepositoryError::query(
                    "referenced record does not exist",
                ));
            }
        }
        tables.photos.extend(photos.iter().cloned());
        Ok(())
    }

    async fn delete_photo(
        &self,
        mannequin_id: &MannequinId,
        photo_id: &PhotoId,
    ) -> Result<Option<MannequinPhoto>, MannequinRepositoryError> {
        let mut tables = self.lock().map_err(MannequinRepositoryError::connection)?;
        let position = tables
            .photos
            .iter()
            .position(|p| p.id == *photo_id && p.mannequin_id == *mannequin_id);
        Ok(position.map(|index| tables.photos.remove(index)))
    }

    async fn clear_primary(
        &self,
        mannequin_id: &MannequinId,
    ) -> Result<(), MannequinRepositoryError> {
        let mut tables = self.lock().map_err(MannequinRepositoryError::connection)?;
        tables
            .photos
            .iter_mut()
            .filter(|p| p.mannequin_id == *mannequin_id)
            .for_each(|p| p.is_primary = false);
        Ok(())
    }

    async fn mark_primary(
        &self,
        mannequin_id: &MannequinId,
        photo_id: &PhotoId,
    ) -> Result<bool, MannequinRepositoryError> {
        let mut tables = self.lock().map_err(MannequinRepositoryError::connection)?;
        match tables
            .photos
            .iter_mut()
            .find(|p| p.id == *photo_id && p.mannequin_id == *mannequin_id)
        {
            Some(photo) => {
                photo.is_primary = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl BrandMannequinRepository for InMemoryStore {
    async fn links_for_brand(
        &self,
        brand_id: &BrandId,
    ) -> Result<Vec<BrandMannequinLink>, BrandMannequinRepositoryError> {
        let tables = self
            .lock()
            .map_err(BrandMannequinRepositoryError::connection)?;
        Ok(sorted_by_created(
            tables.links.iter().filter(|l| l.brand_id == *brand_id).cloned(),
            |l| l.created_at.timestamp_micros(),
        ))
    }

    async fn links_for_mannequins(
        &self,
        mannequin_ids: &[MannequinId],
    ) -> Result<Vec<BrandMannequinLink>, BrandMannequinRepositoryError> {
        let tables = self
            .lock()
            .map_err(BrandMannequinRepositoryError::connection)?;
        Ok(sorted_by_created(
            tables
                .links
                .iter()
                .filter(|l| mannequin_ids.contains(&l.mannequin_id))
                .cloned(),
            |l| l.created_at.timestamp_micros(),
        ))
    }

    async fn find_link(
        &self,
        brand_id: &BrandId,
        mannequin_id: &MannequinId,
    ) -> Result<Option<BrandMannequinLink>, BrandMannequinRepositoryError> {
        let tables = self
            .lock()
            .map_err(BrandMannequinRepositoryError::connection)?;
        Ok(tables
            .links
            .iter()
            .find(|l| l.brand_id == *brand_id && l.mannequin_id == *mannequin_id)
            .cloned())
    }

    async fn insert_links(
        &self,
        links: &[BrandMannequinLink],
    ) -> Result<(), BrandMannequinRepositoryError> {
        let mut tables = self
            .lock()
            .map_err(BrandMannequinRepositoryError::connection)?;
        for link in links {
            let brand_exists = tables.brands.iter().any(|b| b.id == link.brand_id);
            let mannequin_exists = tables.mannequins.iter().any(|m| m.id == link.mannequin_id);
            if !brand_exists || !mannequin_exists {
                return Err(BrandMannequinRepositoryError::query(
                    "referenced record does not exist",
                ));
            }
        }
        for link in links {
            let exists = tables
                .links
                .iter()
                .any(|l| l.brand_id == link.brand_id && l.mannequin_id == link.mannequin_id);
            if !exists {
                tables.links.push(link.clone());
            }
        }
        Ok(())
    }

    async fn delete_for_brand(
        &self,
        brand_id: &BrandId,
    ) -> Result<usize, BrandMannequinRepositoryError> {
        let mut tables = self
            .lock()
            .map_err(BrandMannequinRepositoryError::connection)?;
        let before = tables.links.len();
        tables.links.retain(|l| l.brand_id != *brand_id);
        Ok(before - tables.links.len())
    }

    async fn delete_for_mannequin(
        &self,
        mannequin_id: &MannequinId,
    ) -> Result<usize, BrandMannequinRepositoryError> {
        let mut tables = self
            .lock()
            .map_err(BrandMannequinRepositoryError::connection)?;
        let before = tables.links.len();
        tables.links.retain(|l| l.mannequin_id != *mannequin_id);
        Ok(before - tables.links.len())
    }

    async fn delete_link(
        &self,
        brand_id: &BrandId,
        mannequin_id: &MannequinId,
    ) -> Result<usize, BrandMannequinRepositoryError> {
        let mut tables = self
            .lock()
            .map_err(BrandMannequinRepositoryError::connection)?;
        let before = tables.links.len();
        tables
            .links
            .retain(|l| !(l.brand_id == *brand_id && l.mannequin_id == *mannequin_id));
        Ok(before - tables.links.len())
    }
}

#[async_trait]
impl BrandAssetRepository for InMemoryStore {
    async fn list_for_brand(
        &self,
        brand_id: &BrandId,
        category: Option<AssetCategory>,
    ) -> Result<Vec<BrandAsset>, BrandAssetRepositoryError> {
        let tables = self.lock().map_err(BrandAssetRepositoryError::connection)?;
        Ok(sorted_by_created(
            tables
                .assets
                .iter()
                .filter(|a| a.brand_id == *brand_id)
                .filter(|a| category.is_none_or(|c| a.category == c))
                .cloned(),
            |a| a.created_at.timestamp_micros(),
        ))
    }

    async fn find(
        &self,
        asset_id: &AssetId,
    ) -> Result<Option<BrandAsset>, BrandAssetRepositoryError> {
        let tables = self.lock().map_err(BrandAssetRepositoryError::connection)?;
        Ok(tables.assets.iter().find(|a| a.id == *asset_id).cloned())
    }

    async fn insert(&self, asset: &BrandAsset) -> Result<(), BrandAssetRepositoryError> {
        let mut tables = self.lock().map_err(BrandAssetRepositoryError::connection)?;
        if !tables.brands.iter().any(|b| b.id == asset.brand_id) {
            return Err(BrandAssetRepositoryError::query(
                "referenced record does not exist",
            ));
        }
        tables.assets.push(asset.clone());
        Ok(())
    }

    async fn delete(&self, asset_id: &AssetId) -> Result<bool, BrandAssetRepositoryError> {
        let mut tables = self.lock().map_err(BrandAssetRepositoryError::connection)?;
        let before = tables.assets.len();
        tables.assets.retain(|a| a.id != *asset_id);
        Ok(tables.assets.len() < before)
    }

    async fn delete_for_brand(
        &self,
        brand_id: &BrandId,
    ) -> Result<usize, BrandAssetRepositoryError> {
        let mut tables = self.lock().map_err(BrandAssetRepositoryError::connection)?;
        let before = tables.assets.len();
        tables.assets.retain(|a| a.brand_id != *brand_id);
        Ok(before - tables.assets.len())
    }
}
