//! Sliding-window face coverage scoring
//!
//! A window of the target extent is slid across every start position along
//! the crop axis. Each position is scored independently, so the scan is
//! evaluated in parallel and reduced once every position has a score.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::geometry::{CropAxis, Rectangle};

/// A face projected onto the crop axis
#[derive(Debug, Clone, Copy)]
pub(crate) struct FaceSpan {
    pub min: u32,
    pub max: u32,
    /// Extent across the crop axis
    cross: u32,
    area: u64,
}

impl FaceSpan {
    fn new(face: &Rectangle, axis: CropAxis) -> Self {
        let (min, max) = face.span(axis);
        FaceSpan {
            min,
            max,
            cross: face.cross_extent(axis),
            area: face.area(),
        }
    }
}

/// Coverage statistics of one window position
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WindowScore {
    pub start: u32,
    /// Faces inside the window, partial faces credited fractionally
    pub coverage_count: f64,
    /// Pixel area of the face regions inside the window
    pub coverage_area: u64,
}

/// Project faces onto `axis`, sorted by their minimum coordinate
pub(crate) fn sorted_spans(faces: &[Rectangle], axis: CropAxis) -> Vec<FaceSpan> {
    let mut spans: Vec<FaceSpan> = faces.iter().map(|f| FaceSpan::new(f, axis)).collect();
    spans.sort_by_key(|s| (s.min, s.max));
    spans
}

/// Score the window `[start, start + extent]` with fractional partial credit
///
/// A face fully inside counts 1 and contributes its whole area. A face that
/// starts inside but ends past the window counts the covered fraction of
/// its span and contributes the covered slice times its cross extent.
pub(crate) fn score_window(spans: &[FaceSpan], start: u32, extent: u32) -> WindowScore {
    let end = start + extent;
    let mut coverage_count = 0.0;
    let mut coverage_area = 0;

    for span in spans {
        // sorted by min: every later face starts past the window too
        if span.min > end {
            break;
        }
        if span.max < start {
            continue;
        }

        if span.min >= start && span.max <= end {
            coverage_count += 1.0;
            coverage_area += span.area;
        } else if span.min >= start {
            let covered = end - span.min;
            coverage_count += covered as f64 / (span.max - span.min) as f64;
            coverage_area += covered as u64 * span.cross as u64;
        }
    }

    WindowScore {
        start,
        coverage_count,
        coverage_area,
    }
}

/// Total area of the faces fully inside `[start, start + extent]`
///
/// Returns `None` when no face is fully contained.
pub(crate) fn contained_area(spans: &[FaceSpan], start: u32, extent: u32) -> Option<u64> {
    let end = start + extent;
    let mut area = None;

    for span in spans {
        if span.min > end {
            break;
        }
        if span.min >= start && span.max <= end {
            *area.get_or_insert(0) += span.area;
        }
    }

    area
}

/// Pick the best start position among `0..positions`
///
/// Keeps positions with the highest coverage count, then those with the
/// highest coverage area, and returns the median of the survivors by start
/// position. `None` when no window covers any face.
pub(crate) fn best_window_start(spans: &[FaceSpan], positions: u32, extent: u32) -> Option<u32> {
    let scores: Vec<WindowScore> = (0..positions)
        .into_par_iter()
        .map(|start| score_window(spans, start, extent))
        .filter(|score| score.coverage_count > 0.0)
        .collect();

    let max_count = scores.iter().map(|s| s.coverage_count).fold(0.0, f64::max);
    let max_area = scores
        .iter()
        .filter(|s| s.coverage_count == max_count)
        .map(|s| s.coverage_area)
        .max()?;

    // collect() keeps position order, so survivors are sorted by start
    let survivors: Vec<u32> = scores
        .iter()
        .filter(|s| s.coverage_count == max_count && s.coverage_area == max_area)
        .map(|s| s.start)
        .collect();

    survivors.get(survivors.len() / 2).copied()
}

/// Median start position for every distinct fully-contained face area
///
/// Returns `(area, start)` pairs in ascending order of area.
pub(crate) fn candidate_starts(spans: &[FaceSpan], positions: u32, extent: u32) -> Vec<(u64, u32)> {
    let areas: Vec<(u32, u64)> = (0..positions)
        .into_par_iter()
        .filter_map(|start| contained_area(spans, start, extent).map(|area| (start, area)))
        .collect();

    let mut by_area: BTreeMap<u64, Vec<u32>> = BTreeMap::new();
    for (start, area) in areas {
        by_area.entry(area).or_default().push(start);
    }

    by_area
        .into_iter()
        .map(|(area, starts)| (area, starts[starts.len() / 2]))
        .collect()
}
