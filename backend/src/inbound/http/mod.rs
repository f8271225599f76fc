//! HTTP inbound adapter exposing REST endpoints.

pub mod active_brand;
pub mod assets;
pub mod brands;
pub mod error;
pub mod health;
pub mod mannequins;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod uploads;
pub mod validation;

use actix_web::web;

/// Register every `/api/v1` handler on `cfg`.
///
/// Literal segments (`/brands/switcher`, `/mannequins/select`) are
/// registered before the `{id}` routes they would otherwise collide with.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(active_brand::get_active_brand)
        .service(active_brand::put_active_brand)
        .service(brands::list_brands)
        .service(brands::brand_switcher)
        .service(brands::create_brand)
        .service(brands::get_brand)
        .service(brands::update_brand)
        .service(brands::delete_brand)
        .service(brands::get_brand_mannequins)
        .service(brands::set_brand_mannequins)
        .service(brands::add_brand_mannequin)
        .service(brands::remove_brand_mannequin)
        .service(assets::list_brand_assets)
        .service(assets::create_brand_asset)
        .service(assets::delete_brand_assets)
        .service(assets::get_asset)
        .service(assets::delete_asset)
        .service(assets::asset_categories)
        .service(mannequins::list_mannequins)
        .service(mannequins::select_mannequins)
        .service(mannequins::create_mannequin)
        .service(mannequins::get_mannequin)
        .service(mannequins::update_mannequin)
        .service(mannequins::delete_mannequin)
        .service(mannequins::set_mannequin_brands)
        .service(mannequins::add_photo)
        .service(mannequins::delete_photo)
        .service(mannequins::set_primary_photo)
        .service(uploads::upload_media);
}
