use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use log::{debug, info, warn};

use crate::config::Settings;
use crate::detection::{face_bounds, filter_faces, FaceDetector};
use crate::errors::{WallcropError, WallcropResult};
use crate::geometry::{AspectRatio, Dimensions, Rectangle};
use crate::planner::{plan_candidates, CropPlan};
use crate::store::{WallpaperEntry, WallpaperInfo};
use crate::utils::logger::Logger;
use crate::utils::path_utils::file_name;
use crate::utils::progress::ProgressTracker;

/// Outcome of a `generate` run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Images given geometries
    pub with_faces: usize,
    /// Images recorded as having no faces
    pub without_faces: usize,
    /// Images that could not be read and were left for the next run
    pub skipped: usize,
}

/// Outcome of an `add_ratio` run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddRatioSummary {
    /// Entries given a geometry for the ratio
    pub updated: usize,
    /// Images that could not be read; their entries are left unchanged
    pub skipped: usize,
}

/// Main interface to the wallcrop library
pub struct Wallcrop {
    settings: Settings,
    logger: Logger,
}

impl Wallcrop {
    /// Create a new Wallcrop instance
    ///
    /// # Arguments
    /// * `settings` - Workflow settings; the journal is opened at `settings.log_file`
    ///
    /// # Returns
    /// A Wallcrop instance or an error if the journal cannot be opened
    pub fn new(settings: Settings) -> WallcropResult<Self> {
        let logger = Logger::new(&settings.log_file)?;
        Ok(Wallcrop { settings, logger })
    }

    /// Create an instance with an explicit journal
    pub fn with_logger(settings: Settings, logger: Logger) -> Self {
        Wallcrop { settings, logger }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Read an image's dimensions without decoding its pixels
    pub fn image_dimensions<P: AsRef<Path>>(path: P) -> WallcropResult<Dimensions> {
        let (width, height) = image::image_dimensions(path.as_ref())?;
        Ok(Dimensions::new(width, height))
    }

    /// Best crop for each ratio
    ///
    /// # Arguments
    /// * `image` - Source image dimensions
    /// * `faces` - Already filtered face rectangles
    /// * `ratios` - Target aspect ratios
    ///
    /// # Returns
    /// One `(ratio, crop)` pair per requested ratio, in order
    pub fn plan(&self, image: Dimensions, faces: &[Rectangle], ratios: &[AspectRatio]) -> WallcropResult<Vec<(AspectRatio, Rectangle)>> {
        let mut plan: Option<CropPlan> = None;
        let mut crops = Vec::with_capacity(ratios.len());

        for &ratio in ratios {
            let next = match plan {
                Some(p) => p.with_aspect_ratio(ratio)?,
                None => CropPlan::new(image, ratio)?,
            };
            crops.push((ratio, next.crop(faces)));
            plan = Some(next);
        }

        Ok(crops)
    }

    /// All candidate crops for one ratio
    pub fn candidates(&self, image: Dimensions, faces: &[Rectangle], ratio: AspectRatio) -> WallcropResult<Vec<Rectangle>> {
        plan_candidates(image, faces, ratio)
    }

    /// Build the sidecar entry for one image: its faces plus a geometry per
    /// configured ratio
    pub fn geometries(&self, name: &str, image: Dimensions, faces: &[Rectangle]) -> WallcropResult<WallpaperEntry> {
        let mut entry = WallpaperEntry::new(faces);

        for (ratio, crop) in self.plan(image, faces, &self.settings.ratios)? {
            self.logger.record_crop(name, &ratio.label(), &crop)?;
            entry.set_geometry(&ratio, &crop);
        }

        Ok(entry)
    }

    /// Image files in the wallpaper directory, sorted by name
    pub fn wallpaper_images(&self) -> WallcropResult<Vec<PathBuf>> {
        let mut images: Vec<PathBuf> = fs::read_dir(&self.settings.wallpaper_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && ImageFormat::from_path(path).is_ok())
            .collect();
        images.sort();
        Ok(images)
    }

    /// Compute geometries for every wallpaper not yet in the sidecar
    ///
    /// Faces come from `detector`, filtered by the configured confidence
    /// threshold. Images without faces are stored as `null` so later runs
    /// skip them.
    pub fn generate(&self, detector: &dyn FaceDetector, progress: &ProgressTracker) -> WallcropResult<GenerateSummary> {
        let mut info = WallpaperInfo::load(self.settings.sidecar_path())?;
        let mut summary = GenerateSummary::default();
        debug!("{} sidecar entries in {}", info.len(), info.path().display());

        let pending: Vec<(String, PathBuf)> = self
            .wallpaper_images()?
            .into_iter()
            .filter_map(|path| file_name(&path).map(|name| (name, path)))
            .filter(|(name, _)| !info.contains(name))
            .collect();

        info!("{} new wallpapers to process", pending.len());
        progress.set_length(pending.len() as u64);

        for (name, path) in pending {
            progress.set_message(&name);

            let faces = filter_faces(detector.detect(&path)?, self.settings.face_score_threshold);
            if faces.is_empty() {
                debug!("{}: no faces above threshold", name);
                info.insert(name, None);
                summary.without_faces += 1;
                progress.increment(1);
                continue;
            }

            let dims = match Self::image_dimensions(&path) {
                Ok(dims) => dims,
                Err(e) => {
                    warn!("Skipping {}: {}", name, e);
                    summary.skipped += 1;
                    progress.increment(1);
                    continue;
                }
            };

            let entry = self.geometries(&name, dims, &face_bounds(&faces))?;
            info.insert(name, Some(entry));
            summary.with_faces += 1;
            progress.increment(1);
        }

        info.save()?;
        progress.finish();
        Ok(summary)
    }

    /// Add (or recompute) one ratio for every sidecar entry with faces
    ///
    /// Unreadable images are skipped; geometries computed for the other
    /// entries are still saved.
    ///
    /// # Returns
    /// How many entries were updated and skipped
    pub fn add_ratio(&self, ratio: AspectRatio, progress: &ProgressTracker) -> WallcropResult<AddRatioSummary> {
        let mut info = WallpaperInfo::load(self.settings.sidecar_path())?;
        let label = ratio.label();
        let mut summary = AddRatioSummary::default();

        let names = info.names_with_faces();
        progress.set_length(names.len() as u64);

        for name in names {
            progress.set_message(&name);

            let dims = match Self::image_dimensions(self.settings.wallpaper_dir.join(&name)) {
                Ok(dims) => dims,
                Err(e) => {
                    warn!("Skipping {}: {}", name, e);
                    summary.skipped += 1;
                    progress.increment(1);
                    continue;
                }
            };

            let entry = info.get_mut(&name)
                .ok_or_else(|| WallcropError::GenericError(format!("Sidecar entry for {} vanished", name)))?;
            let faces = entry.face_rects()?;

            let crop = CropPlan::new(dims, ratio)?.crop(&faces);
            self.logger.record_crop(&name, &label, &crop)?;
            entry.set_geometry(&ratio, &crop);

            summary.updated += 1;
            progress.increment(1);
        }

        info.save()?;
        progress.finish();
        Ok(summary)
    }

    /// Crop an image file to `crop` and write the result
    pub fn crop_image<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q, crop: &Rectangle) -> WallcropResult<()> {
        let img = image::open(input.as_ref())?;
        let dims = Dimensions::new(img.width(), img.height());

        if !crop.fits_within(dims) {
            return Err(WallcropError::InvalidGeometry(format!(
                "{} exceeds {} image {}", crop, dims, input.as_ref().display()
            )));
        }

        img.crop_imm(crop.xmin, crop.ymin, crop.width(), crop.height())
            .save(output.as_ref())?;

        info!("Wrote {} crop of {} to {}", crop, input.as_ref().display(), output.as_ref().display());
        Ok(())
    }
}
