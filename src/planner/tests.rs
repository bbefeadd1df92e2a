use super::*;

fn ratio(w: u32, h: u32) -> AspectRatio {
    AspectRatio::new(w, h).unwrap()
}

fn face(xmin: u32, ymin: u32, xmax: u32, ymax: u32) -> Rectangle {
    Rectangle::new(xmin, ymin, xmax, ymax).unwrap()
}

/// 1000x500 image cropped to a 300 pixel wide window
fn narrow_plan() -> CropPlan {
    CropPlan::new(Dimensions::new(1000, 500), ratio(3, 5)).unwrap()
}

#[test]
fn plan_derives_axis_and_target() {
    let plan = narrow_plan();
    assert_eq!(plan.axis, CropAxis::X);
    assert_eq!(plan.target, Dimensions::new(300, 500));
    assert_eq!(plan.target_extent(), 300);
    assert!(!plan.is_whole_image());
}

#[test]
fn no_faces_centers_the_window() {
    let plan = CropPlan::new(Dimensions::new(1000, 500), ratio(4, 5)).unwrap();
    let crop = plan.crop_no_faces();
    assert_eq!(crop, face(300, 0, 700, 500));
    assert_eq!(plan.crop(&[]), crop);
}

#[test]
fn single_face_is_centered_then_clamped() {
    let plan = narrow_plan();
    let crop = plan.crop_single_face(&face(100, 0, 200, 50));
    assert_eq!(crop, face(0, 0, 300, 500));
}

#[test]
fn single_face_in_the_middle_is_centered() {
    let plan = narrow_plan();
    assert_eq!(plan.crop(&[face(450, 10, 550, 60)]), face(350, 0, 650, 500));
}

#[test]
fn single_face_near_far_edge_saturates() {
    let plan = narrow_plan();
    assert_eq!(plan.crop(&[face(950, 0, 990, 40)]), face(700, 0, 1000, 500));
}

#[test]
fn clamp_keeps_window_inside_image() {
    for plan in [
        narrow_plan(),
        CropPlan::new(Dimensions::new(1000, 2000), ratio(1, 1)).unwrap(),
        CropPlan::new(Dimensions::new(1920, 1080), ratio(1440, 2560)).unwrap(),
    ] {
        for position in (-1500..2500).step_by(37) {
            let rect = plan.clamp(position);
            assert!(rect.fits_within(plan.image), "{:?} at {}", rect, position);
            let (min, max) = rect.span(plan.axis);
            assert_eq!(max - min, plan.target_extent());
            assert_eq!(rect.cross_extent(plan.axis), plan.image.extent(match plan.axis {
                CropAxis::X => CropAxis::Y,
                CropAxis::Y => CropAxis::X,
            }));
        }
    }
}

#[test]
fn symmetric_faces_pick_median_of_single_face_windows() {
    let plan = narrow_plan();
    let faces = [face(100, 0, 200, 50), face(800, 0, 900, 50)];
    // starts 0..=100 and 600..=699 each hold one face; the median start is 100
    assert_eq!(plan.crop_best_window(&faces), face(100, 0, 400, 500));
}

#[test]
fn larger_face_area_breaks_count_ties() {
    let plan = narrow_plan();
    let faces = [face(100, 0, 150, 50), face(600, 0, 700, 200)];
    assert_eq!(plan.crop(&faces), face(500, 0, 800, 500));
}

#[test]
fn partial_coverage_adds_fractional_credit() {
    let plan = narrow_plan();
    let faces = [face(350, 0, 450, 100), face(100, 0, 200, 100)];
    // only start 100 holds the left face plus half of the right one
    assert_eq!(plan.crop(&faces), face(100, 0, 400, 500));
}

#[test]
fn vertical_axis_scans_rows() {
    let plan = CropPlan::new(Dimensions::new(1000, 2000), ratio(1, 1)).unwrap();
    assert_eq!(plan.axis, CropAxis::Y);
    let faces = [face(100, 1500, 200, 1600), face(600, 1700, 700, 1800)];
    assert_eq!(plan.crop(&faces), face(0, 900, 1000, 1900));
}

#[test]
fn faces_beyond_every_scanned_window_keep_the_faces() {
    let plan = narrow_plan();
    let faces = [face(999, 0, 1000, 10), face(999, 20, 1000, 30)];
    let crop = plan.crop_best_window(&faces);
    assert_eq!(crop, face(700, 0, 1000, 500));
    assert!(faces.iter().all(|f| f.xmin >= crop.xmin && f.xmax <= crop.xmax));
    assert_eq!(plan_crop(plan.image, &faces, plan.ratio).unwrap(), crop);
}

#[test]
fn uncovered_faces_on_rows_keep_the_faces() {
    // 1000x2000 at 1:1: windows of 1000 rows, last scanned start 999
    let plan = CropPlan::new(Dimensions::new(1000, 2000), ratio(1, 1)).unwrap();
    let faces = [face(10, 1999, 60, 2000), face(400, 1999, 480, 2000)];
    assert_eq!(plan.crop_best_window(&faces), face(0, 1000, 1000, 2000));
}

#[test]
fn whole_image_short_circuits() {
    let plan = CropPlan::new(Dimensions::new(1920, 1080), ratio(1920, 1080)).unwrap();
    assert!(plan.is_whole_image());
    let whole = face(0, 0, 1920, 1080);
    let faces = [face(10, 10, 50, 50), face(1500, 10, 1600, 90)];
    assert_eq!(plan.crop(&faces), whole);
    assert_eq!(plan.crop(&[]), whole);
    assert_eq!(plan.crop_best_window(&faces), whole);
    assert_eq!(plan.crop_candidates(&faces), vec![whole]);
}

#[test]
fn best_window_is_deterministic() {
    let faces = [face(120, 0, 260, 90), face(400, 30, 480, 100), face(610, 5, 700, 95), face(820, 0, 990, 180)];
    let image = Dimensions::new(1000, 500);
    let first = plan_crop(image, &faces, ratio(3, 5)).unwrap();
    for _ in 0..5 {
        assert_eq!(plan_crop(image, &faces, ratio(3, 5)).unwrap(), first);
    }
}

#[test]
fn changing_ratio_rebuilds_the_plan() {
    let faces = [face(120, 0, 260, 90), face(610, 5, 700, 95)];
    let vertical = CropPlan::new(Dimensions::new(1920, 1080), ratio(1440, 2560)).unwrap();
    let square = vertical.with_aspect_ratio(ratio(1, 1)).unwrap();
    let back = square.with_aspect_ratio(ratio(1440, 2560)).unwrap();

    assert_eq!(square.target, Dimensions::new(1080, 1080));
    assert_eq!(back, vertical);
    assert_eq!(back.crop(&faces), vertical.crop(&faces));
}

#[test]
fn candidates_cover_each_distinct_area() {
    let plan = narrow_plan();
    let faces = [face(600, 0, 700, 200), face(100, 0, 200, 100)];
    assert_eq!(
        plan.crop_candidates(&faces),
        vec![face(50, 0, 350, 500), face(500, 0, 800, 500)]
    );
}

#[test]
fn candidates_include_face_clusters() {
    let plan = narrow_plan();
    let faces = [face(100, 0, 150, 50), face(200, 0, 250, 50)];
    // both faces: starts 0..=100, second face alone: starts 101..=200
    assert_eq!(
        plan.crop_candidates(&faces),
        vec![face(50, 0, 350, 500), face(151, 0, 451, 500)]
    );
}

#[test]
fn candidates_are_sorted_and_unique() {
    let plan = narrow_plan();
    let faces = [
        face(820, 0, 900, 80),
        face(40, 0, 100, 60),
        face(430, 0, 520, 90),
        face(250, 0, 300, 50),
    ];
    let candidates = plan.crop_candidates(&faces);
    assert!(!candidates.is_empty());
    for pair in candidates.windows(2) {
        assert!(pair[0].xmin < pair[1].xmin);
    }
    for rect in &candidates {
        assert!(rect.fits_within(plan.image));
        assert_eq!(rect.width(), 300);
    }
}

#[test]
fn candidates_for_one_or_no_faces() {
    let plan = narrow_plan();
    let single = face(450, 10, 550, 60);
    assert_eq!(plan.crop_candidates(&[single]), vec![plan.crop_single_face(&single)]);
    assert_eq!(plan.crop_candidates(&[]), vec![plan.crop_no_faces()]);
}

#[test]
fn candidates_without_contained_faces_use_best_window() {
    let plan = narrow_plan();
    // both faces are wider than the window
    let faces = [face(0, 0, 400, 50), face(500, 0, 900, 50)];
    assert_eq!(plan.crop_candidates(&faces), vec![plan.crop_best_window(&faces)]);
}

#[test]
fn degenerate_images_are_rejected() {
    assert!(matches!(
        CropPlan::new(Dimensions::new(0, 100), ratio(1, 1)),
        Err(WallcropError::InvalidDimensions(0, 100))
    ));
    // a 1 pixel tall image cannot hold any 1:2 crop
    assert!(plan_crop(Dimensions::new(1000, 1), &[], ratio(1, 2)).is_err());
}

#[test]
fn planned_crops_serialize_to_geometry() {
    let crop = plan_crop(Dimensions::new(1920, 1080), &[face(900, 100, 1000, 220)], ratio(1440, 2560)).unwrap();
    // midpoint 950 minus half of the 607 pixel window, truncated
    assert_eq!(crop.to_geometry(), "607x1080+646+0");
}
