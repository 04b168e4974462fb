use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Height of the fixed header. Added to the scroll position before matching
/// it against section extents.
pub const HEADER_OFFSET_PX: f64 = 100.0;

/// Delay between closing the mobile drawer and starting the smooth scroll.
pub const NAV_SETTLE_DELAY_MS: u32 = 100;

/// Fraction of a wrapped block that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Half the size of the cursor follower disc.
pub const CURSOR_RADIUS_PX: i32 = 12;

// Hero parallax: (scroll range end, value at range end)
pub const HERO_SHIFT_RANGE: (f64, f64) = (500.0, -100.0);
pub const HERO_FADE_RANGE: (f64, f64) = (300.0, 0.8);

pub const HERO_PARTICLE_COUNT: usize = 15;

pub const EVENT_NAME: &str = "Incredible India Festival";
pub const EVENT_DATE_LABEL: &str = "July 12, 2025";
pub const EVENT_CITY: &str = "Milwaukee";
pub const ORGANIZER: &str = "Sanskriti";
pub const CONTACT_PHONE: &str = "414-559-0848";
pub const CONTACT_EMAIL: &str = "admin@sanskritiusa.org";

const ASSET_HOST: &str = "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425";

pub fn logo_url() -> String {
    format!("{}/incredible_india_logo-removebg-preview.png", ASSET_HOST)
}

pub fn ticket_qr_url() -> String {
    format!("{}/fa2224b2-8b84-4d3a-8c37-b9328a3a9088.jpg", ASSET_HOST)
}

pub fn partner_logo_urls() -> [String; 2] {
    [
        format!("{}/image%20(19)-2.png", ASSET_HOST),
        format!("{}/WhatsApp%20Image%202025-06-10%20at%2020.25.07_c354347d.jpg", ASSET_HOST),
    ]
}

pub const HERO_BACKGROUND_URL: &str = "https://4536150.fs1.hubspotusercontent-na1.net/hubfs/4536150/Canva%20images/dl.beatsnoop.com-3000-vE2rhFRz71.jpg";

pub const FLYER_PATH: &str = "/Festival _20250607_000852_0000.png";
pub const FLYER_DOWNLOAD_NAME: &str = "Incredible_India_Festival_Flyer.png";

pub const VENDOR_FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSei3waFHNyGo08jJzGWR28ET54aIUSpXsyxjomC7ssGUxfKcA/viewform?usp=header";
pub const SPONSOR_FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSdhGHzFfjIH9_Xii0wKvITsVdVOaUJwO_8o6dvK9zPUTMfhIQ/viewform?usp=header";
