//! End-to-end tests verifying deterministic image output.
//!
//! Given the same seed, the library and the CLI must produce identical pixels
//! across runs.

use std::path::Path;
use std::process::Command;

use painter_core::{Canvas, DistanceMetric, Painter, RenderConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn render(metric: DistanceMetric, seeds: usize, seed: u64) -> Canvas {
    let config = RenderConfig {
        width: 160,
        height: 90,
        metric,
        seed_count: seeds,
        ..RenderConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Painter::new(config)
        .render(&mut rng)
        .expect("render failed")
        .canvas
}

fn assert_canvases_equal(expected: &Canvas, actual: &Canvas, name: &str) {
    assert_eq!(
        (expected.width(), expected.height()),
        (actual.width(), actual.height()),
        "{}: dimensions mismatch",
        name
    );
    assert_eq!(expected.as_bytes(), actual.as_bytes(), "{}: pixel data mismatch", name);
}

fn run_cli(output: &Path, extra: &[&str]) {
    let status = Command::new(env!("CARGO_BIN_EXE_voronoi-painter"))
        .arg("-o")
        .arg(output)
        .args(["--quiet", "--width", "120", "--height", "80", "-n", "25"])
        .args(extra)
        .status()
        .expect("failed to run voronoi-painter");
    assert!(status.success(), "voronoi-painter exited with {}", status);
}

mod library {
    use super::*;

    #[test]
    fn test_reproducibility() {
        for metric in [DistanceMetric::Euclidean, DistanceMetric::Manhattan] {
            let a = render(metric, 100, 12345);
            let b = render(metric, 100, 12345);
            assert_canvases_equal(&a, &b, &format!("reproducibility_{}", metric));
        }
    }

    #[test]
    fn test_different_seeds_produce_different_output() {
        let a = render(DistanceMetric::Euclidean, 100, 0);
        let b = render(DistanceMetric::Euclidean, 100, 1);
        assert_ne!(a.as_bytes(), b.as_bytes(), "Different seeds should produce different output");
    }

    #[test]
    fn test_metrics_produce_different_output() {
        let a = render(DistanceMetric::Euclidean, 100, 42);
        let b = render(DistanceMetric::Manhattan, 100, 42);
        assert_ne!(a.as_bytes(), b.as_bytes());
    }
}

mod cli {
    use super::*;

    #[test]
    fn test_same_seed_same_file() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.ppm");
        let second = dir.path().join("second.ppm");

        run_cli(&first, &["--seed", "7", "--metric", "manhattan"]);
        run_cli(&second, &["--seed", "7", "--metric", "manhattan"]);

        let a = std::fs::read(&first).unwrap();
        let b = std::fs::read(&second).unwrap();
        assert!(a.starts_with(b"P6\n120 80\n255\n"));
        assert_eq!(a.len(), b"P6\n120 80\n255\n".len() + 120 * 80 * 3);
        assert_eq!(a, b, "same seed should write identical files");
    }

    #[test]
    fn test_cli_matches_library() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.ppm");
        run_cli(&out, &["--seed", "99"]);

        let config = RenderConfig { width: 120, height: 80, seed_count: 25, ..RenderConfig::default() };
        let canvas = Painter::new(config)
            .render(&mut ChaCha8Rng::seed_from_u64(99))
            .unwrap()
            .canvas;

        let written = std::fs::read(&out).unwrap();
        let header_len = b"P6\n120 80\n255\n".len();
        assert_eq!(&written[header_len..], canvas.to_rgb_bytes().as_slice());
    }

    #[test]
    fn test_png_and_gif_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("out.png");
        let gif = dir.path().join("out.gif");
        run_cli(&png, &["--seed", "1"]);
        run_cli(&gif, &["--seed", "1"]);

        assert!(std::fs::read(&png).unwrap().starts_with(b"\x89PNG\r\n\x1a\n"));
        assert!(std::fs::read(&gif).unwrap().starts_with(b"GIF89a"));
    }

    #[test]
    fn test_render_file_with_overlays() {
        let dir = tempfile::tempdir().unwrap();
        let spec = dir.path().join("render.yaml");
        std::fs::write(
            &spec,
            "seed: 3\nmarker_radius: -1\noverlays:\n  - shape: rect\n    x: 0\n    y: 0\n    w: 120\n    h: 80\n    color: \"#00ff00\"\n",
        )
        .unwrap();
        let out = dir.path().join("out.ppm");
        run_cli(&out, &["--spec", spec.to_str().unwrap()]);

        let written = std::fs::read(&out).unwrap();
        let header_len = b"P6\n120 80\n255\n".len();
        assert!(written[header_len..].chunks_exact(3).all(|px| px == [0, 255, 0]));
    }
}
