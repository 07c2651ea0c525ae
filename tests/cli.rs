// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Drive the real binary end to end against generated images.

use assert_cmd::prelude::*;
use image::{GenericImageView, ImageBuffer, Pixel, RgbImage};
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;

type TestResult = Result<(), Box<dyn std::error::Error>>;

// A small diagonal gradient: enough structure that carving has real
// choices to make, and every pixel distinct enough to notice bugs.
fn write_gradient(path: &Path, width: u32, height: u32) -> TestResult {
    let mut buf: RgbImage = ImageBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let samples = [
                (x * 29 % 256) as u8,
                (y * 41 % 256) as u8,
                ((x + y) * 17 % 256) as u8,
            ];
            buf.put_pixel(x, y, *Pixel::from_slice(&samples));
        }
    }
    buf.save(path)?;
    Ok(())
}

#[test]
fn carves_to_the_requested_width() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_gradient(&input, 8, 6)?;

    Command::cargo_bin("narrowseam")?
        .args(&["-i", input.to_str().unwrap()])
        .args(&["-o", output.to_str().unwrap()])
        .args(&["-w", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Original image size: 8x6"));

    let carved = image::open(&output)?;
    assert_eq!(carved.dimensions(), (5, 6));
    Ok(())
}

#[test]
fn a_wider_target_is_rejected_with_no_output() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_gradient(&input, 8, 6)?;

    Command::cargo_bin("narrowseam")?
        .args(&["-i", input.to_str().unwrap()])
        .args(&["-o", output.to_str().unwrap()])
        .args(&["-w", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("strictly smaller"));

    assert!(!output.exists());
    Ok(())
}

#[test]
fn the_current_width_is_rejected_too() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_gradient(&input, 8, 6)?;

    Command::cargo_bin("narrowseam")?
        .args(&["-i", input.to_str().unwrap()])
        .args(&["-o", output.to_str().unwrap()])
        .args(&["-w", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("strictly smaller"));

    assert!(!output.exists());
    Ok(())
}

#[test]
fn an_unreadable_input_fails_with_its_path() -> TestResult {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("missing.png");
    let output = dir.path().join("out.png");

    Command::cargo_bin("narrowseam")?
        .args(&["-i", missing.to_str().unwrap()])
        .args(&["-o", output.to_str().unwrap()])
        .args(&["-w", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read"));
    Ok(())
}

#[test]
fn the_energy_dump_matches_the_input_dimensions() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    let energy = dir.path().join("energy.png");
    write_gradient(&input, 8, 6)?;

    Command::cargo_bin("narrowseam")?
        .args(&["-i", input.to_str().unwrap()])
        .args(&["-o", output.to_str().unwrap()])
        .args(&["-w", "6"])
        .args(&["--energy", energy.to_str().unwrap()])
        .assert()
        .success();

    let dump = image::open(&energy)?;
    assert_eq!(dump.dimensions(), (8, 6));
    Ok(())
}
