//! Persisted wallpaper geometry

mod wallpaper_info;

pub use self::wallpaper_info::{WallpaperEntry, WallpaperInfo};
