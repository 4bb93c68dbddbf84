// tests/pipeline_tests.rs
use foosball_cv::detection::{DetectionConfig, ScoreDetector};
use foosball_cv::{Result, ScoreError};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};
use imageproc::rect::Rect;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::process::Command;

const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
const ORANGE: Rgb<u8> = Rgb([255, 128, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Twelve 5x5 markers down one scoreboard, with the wide gap after index `gap_after`.
fn draw_board(image: &mut RgbImage, x: i32, gap_after: usize, color: Rgb<u8>) {
    let mut y = 112;
    for i in 0..12 {
        draw_filled_rect_mut(image, Rect::at(x, y).of_size(5, 5), color);
        y += if i == gap_after { 28 } else { 8 };
    }
}

/// Level table, orange markers at the left end and white at the right.
fn table_photo(left_gap: usize, right_gap: usize) -> RgbImage {
    let mut image = RgbImage::new(840, 340);
    draw_filled_rect_mut(&mut image, Rect::at(20, 20).of_size(800, 300), BLUE);
    draw_board(&mut image, 40, left_gap, ORANGE);
    draw_board(&mut image, 785, right_gap, WHITE);
    image
}

/// Larger table with 7x7 markers, turned by `degrees` about the photo center.
fn tilted_photo(degrees: f32, left_gap: usize, right_gap: usize) -> RgbImage {
    let mut image = RgbImage::new(1400, 700);
    draw_filled_rect_mut(&mut image, Rect::at(100, 125).of_size(1200, 450), BLUE);
    for (x, gap_after, color) in [(140, left_gap, ORANGE), (1252, right_gap, WHITE)] {
        let mut y = 270;
        for i in 0..12 {
            draw_filled_rect_mut(&mut image, Rect::at(x, y).of_size(7, 7), color);
            y += if i == gap_after { 30 } else { 12 };
        }
    }
    rotate_about_center(
        &image,
        degrees.to_radians(),
        Interpolation::Bilinear,
        Rgb([0, 0, 0]),
    )
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("foosball-{}-{name}", std::process::id()))
}

#[test]
fn test_reads_both_scores() -> Result<()> {
    let detector = ScoreDetector::new(DetectionConfig::default())?;
    let result = detector.detect(&table_photo(3, 3))?;

    assert_eq!(result.scores.left_score.value(), 7);
    assert_eq!(result.scores.right_score.value(), 3);
    Ok(())
}

#[test]
fn test_reads_tilted_table() -> Result<()> {
    let detector = ScoreDetector::new(DetectionConfig::default())?;
    for degrees in [-4.0, 3.0] {
        let result = detector.detect(&tilted_photo(degrees, 3, 3))?;
        assert_eq!(result.scores.left_score.value(), 7, "tilt {degrees}");
        assert_eq!(result.scores.right_score.value(), 3, "tilt {degrees}");
    }
    Ok(())
}

#[test]
fn test_repeated_runs_agree() -> Result<()> {
    let detector = ScoreDetector::new(DetectionConfig::default())?;
    let photo = table_photo(0, 9);

    let first = detector.detect(&photo)?;
    let second = detector.detect(&photo)?;
    assert_eq!(first.scores, second.scores);
    assert_eq!(first.score_boxes, second.score_boxes);
    assert_eq!(first.scores.left_score.value(), 10);
    assert_eq!(first.scores.right_score.value(), 9);
    Ok(())
}

#[test]
fn test_speckle_away_from_boards_is_ignored() -> Result<()> {
    let mut photo = table_photo(6, 2);
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..300 {
        // Margins above and below the table, and the middle of the field.
        let (x, y) = match rng.gen_range(0..3) {
            0 => (rng.gen_range(0..840), rng.gen_range(0..18)),
            1 => (rng.gen_range(0..840), rng.gen_range(322..340)),
            _ => (rng.gen_range(200..640), rng.gen_range(40..300)),
        };
        let color = if rng.gen_bool(0.5) { ORANGE } else { WHITE };
        photo.put_pixel(x, y, color);
    }

    let detector = ScoreDetector::new(DetectionConfig::default())?;
    let result = detector.detect(&photo)?;
    assert_eq!(result.scores.left_score.value(), 4);
    assert_eq!(result.scores.right_score.value(), 2);
    Ok(())
}

#[test]
fn test_inversion_follows_config() -> Result<()> {
    let mut config = DetectionConfig::default();
    config.left_region.inverted = false;

    let detector = ScoreDetector::new(config)?;
    let result = detector.detect(&table_photo(3, 5))?;
    assert_eq!(result.scores.left_score.value(), 3);
    assert_eq!(result.scores.right_score.value(), 5);
    Ok(())
}

#[test]
fn test_missing_marker_fails() -> Result<()> {
    let mut photo = table_photo(3, 3);
    // Paint over the last right-hand marker.
    draw_filled_rect_mut(&mut photo, Rect::at(785, 220).of_size(5, 5), BLUE);

    let detector = ScoreDetector::new(DetectionConfig::default())?;
    let err = detector.detect(&photo).unwrap_err();
    assert_eq!(err, ScoreError::InvalidDotCount { found: 11, expected: 12 });
    Ok(())
}

#[test]
fn test_debug_images_written() -> Result<()> {
    let dir = temp_path("debug");
    let config = DetectionConfig::default().with_debug_output(&dir);
    let detector = ScoreDetector::new(config)?;
    detector.detect(&table_photo(3, 3))?;

    for name in [
        "found_blue",
        "debug",
        "left_score_blocks",
        "right_score_blocks",
        "left_score_blocks_black_white",
        "right_score_blocks_black_white",
    ] {
        assert!(dir.join(format!("{name}.png")).exists(), "missing {name}.png");
    }
    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_export_json() -> Result<()> {
    let detector = ScoreDetector::new(DetectionConfig::default())?;
    let result = detector.detect(&table_photo(3, 3))?;

    let path = temp_path("result.json");
    detector.export_json(&result, &path)?;
    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    std::fs::remove_file(&path)?;

    assert_eq!(value["scores"]["leftScore"], 7);
    assert_eq!(value["scores"]["rightScore"], 3);
    Ok(())
}

#[test]
fn test_cli_prints_score_record() -> Result<()> {
    let path = temp_path("table.png");
    table_photo(3, 3).save(&path)?;

    let output = Command::new(env!("CARGO_BIN_EXE_foosball-score"))
        .arg(&path)
        .output()?;
    std::fs::remove_file(&path)?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        r#"{"leftScore":7,"rightScore":3}"#
    );
    Ok(())
}

#[test]
fn test_cli_reports_failure() -> Result<()> {
    let path = temp_path("empty.png");
    RgbImage::new(100, 80).save(&path)?;

    let output = Command::new(env!("CARGO_BIN_EXE_foosball-score"))
        .arg(&path)
        .output()?;
    std::fs::remove_file(&path)?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("table not found"));
    Ok(())
}
