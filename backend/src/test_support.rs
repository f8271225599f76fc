//! Shared helpers for unit tests inside the crate.

use std::sync::Mutex;

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{
    Brand, BrandId, Mannequin, MannequinId, MannequinPhoto, PhotoId, UserId,
};

/// Clock that only moves when told to.
pub struct SteppingClock(Mutex<DateTime<Utc>>);

impl SteppingClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn advance_seconds(&self, seconds: i64) {
        *self.lock_clock() += TimeDelta::seconds(seconds);
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::new(fixture_time())
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

pub fn fixture_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub fn brand_for(user_id: UserId, name: &str) -> Brand {
    let now = fixture_time();
    Brand {
        id: BrandId::random(),
        user_id,
        name: name.to_owned(),
        description: None,
        logo_url: None,
        style_guide: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn mannequin_for(user_id: UserId, name: &str) -> Mannequin {
    let now = fixture_time();
    Mannequin {
        id: MannequinId::random(),
        user_id,
        name: name.to_owned(),
        birth_year: None,
        height_cm: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn photo_for(mannequin_id: MannequinId, url: &str, is_primary: bool) -> MannequinPhoto {
    MannequinPhoto {
        id: PhotoId::random(),
        mannequin_id,
        url: url.to_owned(),
        external_id: None,
        width: None,
        height: None,
        is_primary,
        created_at: fixture_time(),
    }
}
