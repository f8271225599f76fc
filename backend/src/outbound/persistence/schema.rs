//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` when a migration changes a table.

diesel::table! {
    /// User-owned brands.
    brands (id) {
        id -> Uuid,
        /// Owning user; every query filters on it.
        user_id -> Uuid,
        name -> Varchar,
        description -> Nullable<Text>,
        logo_url -> Nullable<Text>,
        style_guide -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// User-owned mannequin profiles.
    mannequins (id) {
        id -> Uuid,
        user_id -> Uuid,
        name -> Varchar,
        birth_year -> Nullable<Int4>,
        height_cm -> Nullable<Int4>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Photos attached to a mannequin. Cascades with the mannequin.
    mannequin_photos (id) {
        id -> Uuid,
        mannequin_id -> Uuid,
        url -> Text,
        external_id -> Nullable<Text>,
        width -> Nullable<Int4>,
        height -> Nullable<Int4>,
        is_primary -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Media assets attached to a brand. Cascades with the brand.
    brand_assets (id) {
        id -> Uuid,
        brand_id -> Uuid,
        name -> Varchar,
        /// One of `image`, `video`, `document`, `font`.
        asset_type -> Varchar,
        /// One of `logo`, `product`, `social`, `background`, `reference`,
        /// `other`.
        category -> Varchar,
        url -> Text,
        external_id -> Nullable<Text>,
        width -> Nullable<Int4>,
        height -> Nullable<Int4>,
        file_size -> Nullable<Int8>,
        mime_type -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Brand/mannequin junction, unique per pair.
    brand_mannequins (id) {
        id -> Uuid,
        brand_id -> Uuid,
        mannequin_id -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(mannequin_photos -> mannequins (mannequin_id));
diesel::joinable!(brand_assets -> brands (brand_id));
diesel::joinable!(brand_mannequins -> brands (brand_id));
diesel::joinable!(brand_mannequins -> mannequins (mannequin_id));

diesel::allow_tables_to_appear_in_same_query!(
    brands,
    mannequins,
    mannequin_photos,
    brand_assets,
    brand_mannequins,
);
