//! Largest crop of a given aspect ratio that fits an image

use crate::geometry::{AspectRatio, CropAxis, Dimensions};

/// Find the largest rectangle of `ratio` that fits inside `image`
///
/// One image dimension is always kept in full. When the image is wider than
/// the ratio the full height is kept and the width is cropped (`CropAxis::X`),
/// otherwise the full width is kept and the height is cropped
/// (`CropAxis::Y`). The cropped dimension is derived from the retained one
/// by truncating `retained * ratio`, so it never exceeds the image.
///
/// # Arguments
/// * `image` - Source image dimensions
/// * `ratio` - Target aspect ratio
///
/// # Returns
/// The target crop dimensions and the axis along which the crop slides
pub fn compute_crop_dimensions(image: Dimensions, ratio: AspectRatio) -> (Dimensions, CropAxis) {
    let (w, h) = (image.width as u64, image.height as u64);
    let (rw, rh) = (ratio.width as u64, ratio.height as u64);

    // W/H > rw/rh  <=>  W*rh > H*rw
    if w * rh > h * rw {
        let target_width = (h * rw / rh) as u32;
        (Dimensions::new(target_width, image.height), CropAxis::X)
    } else {
        let target_height = (w * rh / rw) as u32;
        (Dimensions::new(image.width, target_height), CropAxis::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(w: u32, h: u32) -> AspectRatio {
        AspectRatio::new(w, h).unwrap()
    }

    #[test]
    fn landscape_to_vertical_keeps_height() {
        let (target, axis) = compute_crop_dimensions(Dimensions::new(1920, 1080), ratio(1440, 2560));
        assert_eq!(axis, CropAxis::X);
        assert_eq!(target, Dimensions::new(607, 1080));
    }

    #[test]
    fn portrait_to_square_keeps_width() {
        let (target, axis) = compute_crop_dimensions(Dimensions::new(1000, 2000), ratio(1, 1));
        assert_eq!(axis, CropAxis::Y);
        assert_eq!(target, Dimensions::new(1000, 1000));
    }

    #[test]
    fn matching_ratio_is_whole_image() {
        let (target, _) = compute_crop_dimensions(Dimensions::new(3840, 2160), ratio(1920, 1080));
        assert_eq!(target, Dimensions::new(3840, 2160));
    }

    #[test]
    fn target_fits_and_tracks_ratio() {
        let images = [(1920, 1080), (1080, 1920), (3440, 1440), (4000, 3000), (1001, 999), (7, 5000), (5000, 7)];
        let ratios = [(1440, 2560), (2256, 1504), (3440, 1440), (1920, 1080), (1, 1), (4, 3)];

        for &(iw, ih) in &images {
            for &(rw, rh) in &ratios {
                let image = Dimensions::new(iw, ih);
                let (target, axis) = compute_crop_dimensions(image, ratio(rw, rh));

                assert!(target.width <= iw && target.height <= ih, "{} {}:{}", image, rw, rh);

                // retained dimension is full, the other is within one pixel of the exact ratio
                let (tw, th) = (target.width as u64, target.height as u64);
                let (rw, rh) = (rw as u64, rh as u64);
                match axis {
                    CropAxis::X => {
                        assert_eq!(target.height, ih);
                        assert!(tw * rh <= th * rw && th * rw < (tw + 1) * rh);
                    }
                    CropAxis::Y => {
                        assert_eq!(target.width, iw);
                        assert!(th * rw <= tw * rh && tw * rh < (th + 1) * rw);
                    }
                }
            }
        }
    }

    #[test]
    fn divisible_dimensions_match_ratio_exactly() {
        for &(iw, ih, rw, rh) in &[(1000, 500, 3, 5), (2560, 1440, 1440, 2560), (3000, 2000, 1, 1), (1504, 2256, 16, 9)] {
            let (target, _) = compute_crop_dimensions(Dimensions::new(iw, ih), ratio(rw, rh));
            assert_eq!(
                target.width as u64 * rh as u64,
                target.height as u64 * rw as u64,
                "{}x{} at {}:{}", iw, ih, rw, rh
            );
        }
    }
}
