//! End-to-end tests for the `imgcarve` binary: write a small generated
//! raster to a temp directory, invoke each subcommand through
//! `assert_cmd`, and check the saved output's dimensions.

use assert_cmd::Command;
use image::{Rgba, RgbaImage};
use predicates::prelude::*;
use tempfile::tempdir;

fn checkerboard(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let v = if (x / 4 + y / 4) % 2 == 0 { 40 } else { 220 };
        Rgba([v, v, v, 255])
    })
}

fn imgcarve() -> Command {
    Command::cargo_bin("imgcarve").unwrap()
}

#[test]
fn decrease_shrinks_by_the_exact_deltas() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    checkerboard(40, 30).save(&input).unwrap();

    imgcarve()
        .args(["--input", input.to_str().unwrap(), "--output", output.to_str().unwrap(), "--seed", "1"])
        .args(["decrease", "10", "10"])
        .assert()
        .success();

    let result = image::open(&output).unwrap();
    assert_eq!(result.dimensions(), (30, 20));
}

#[test]
fn increase_grows_by_the_exact_deltas() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    checkerboard(30, 20).save(&input).unwrap();

    imgcarve()
        .args(["--input", input.to_str().unwrap(), "--output", output.to_str().unwrap(), "--seed", "2"])
        .args(["increase", "10", "8"])
        .assert()
        .success();

    let result = image::open(&output).unwrap();
    assert_eq!(result.dimensions(), (40, 28));
}

#[test]
fn amplification_returns_to_the_original_size() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    checkerboard(32, 24).save(&input).unwrap();

    imgcarve()
        .args(["--input", input.to_str().unwrap(), "--output", output.to_str().unwrap(), "--seed", "3"])
        .args(["amplification", "20"])
        .assert()
        .success();

    let result = image::open(&output).unwrap();
    assert_eq!(result.dimensions(), (32, 24));
}

#[test]
fn erase_rejects_a_malformed_polygon() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    checkerboard(20, 20).save(&input).unwrap();

    // An odd number of coordinates can't pair into (x, y) points.
    imgcarve()
        .args(["--input", input.to_str().unwrap(), "--output", output.to_str().unwrap()])
        .args(["erase", "2", "2", "6", "2", "6", "6", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("imgcarve:"));
}

#[test]
fn erase_removes_the_bounded_object() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    checkerboard(24, 24).save(&input).unwrap();

    imgcarve()
        .args(["--input", input.to_str().unwrap(), "--output", output.to_str().unwrap(), "--seed", "4"])
        .args(["erase", "2", "2", "10", "2", "10", "10", "2", "10"])
        .assert()
        .success();

    let result = image::open(&output).unwrap();
    // A square bounding box isn't wider than tall, so erase_object
    // carves vertically without rotating: only the width shrinks.
    assert_eq!(result.height(), 24);
    assert!(result.width() < 24);
}

#[test]
fn enlarge_scales_both_dimensions() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    checkerboard(40, 40).save(&input).unwrap();

    imgcarve()
        .args(["--input", input.to_str().unwrap(), "--output", output.to_str().unwrap(), "--seed", "5"])
        .args(["enlarge", "1.5", "--patch-size", "12", "--overlap", "4", "--patches", "8", "--border", "2"])
        .assert()
        .success();

    let result = image::open(&output).unwrap();
    assert_eq!(result.dimensions(), (60, 60));
}

#[test]
fn add_texture_matches_the_driving_images_size() {
    let dir = tempdir().unwrap();
    let texture = dir.path().join("texture.png");
    let driving = dir.path().join("driving.png");
    let output = dir.path().join("out.png");
    checkerboard(40, 40).save(&texture).unwrap();
    checkerboard(18, 22).save(&driving).unwrap();

    // `--input` is the driving image (consistent with every other
    // subcommand); `texture` is the donor content.
    imgcarve()
        .args(["--input", driving.to_str().unwrap(), "--output", output.to_str().unwrap(), "--seed", "6"])
        .args([
            "add-texture",
            texture.to_str().unwrap(),
            "--alpha",
            "0.6",
            "--steps",
            "2",
            "--patch-size",
            "10",
            "--overlap",
            "3",
            "--patches",
            "8",
            "--border",
            "2",
        ])
        .assert()
        .success();

    let result = image::open(&output).unwrap();
    assert_eq!(result.dimensions(), (18, 22));
}

#[test]
fn dump_magnitude_writes_a_second_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    checkerboard(20, 20).save(&input).unwrap();

    imgcarve()
        .args([
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--seed",
            "7",
            "--dump-magnitude",
        ])
        .args(["decrease", "15", "15"])
        .assert()
        .success();

    assert!(dir.path().join("out.png.magnitude.png").exists());
}

#[test]
fn same_seed_is_reproducible() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let out_a = dir.path().join("a.png");
    let out_b = dir.path().join("b.png");
    checkerboard(30, 30).save(&input).unwrap();

    for out in [&out_a, &out_b] {
        imgcarve()
            .args(["--input", input.to_str().unwrap(), "--output", out.to_str().unwrap(), "--seed", "99"])
            .args(["decrease", "20", "20"])
            .assert()
            .success();
    }

    let a = image::open(&out_a).unwrap().to_rgba8();
    let b = image::open(&out_b).unwrap().to_rgba8();
    assert_eq!(a, b);
}
