/// Point fixture harness
///
/// Loads a JSON fixture file, runs every case through the library,
/// and reports PASS/FAIL per case. Exits non-zero on any failure.
///
/// Usage: point_harness [FIXTURE_PATH]

use std::env;
use std::path::{Path, PathBuf};
use std::process;

use cartesian_point::fixtures::{check_case, load_fixtures};
use cartesian_point::CRATE_VERSION;

/// Searched in order when no path is given on the command line.
const FIXTURE_PATHS: [&str; 3] = [
    "point_fixtures.json",
    "tests/fixtures/point_fixtures.json",
    "../tests/fixtures/point_fixtures.json",
];

fn resolve_fixture_path() -> Option<PathBuf> {
    if let Some(arg) = env::args().nth(1) {
        return Some(PathBuf::from(arg));
    }
    FIXTURE_PATHS
        .iter()
        .map(Path::new)
        .find(|p| p.exists())
        .map(Path::to_path_buf)
}

fn main() {
    println!("cartesian_point {} fixture harness", CRATE_VERSION);

    let path = match resolve_fixture_path() {
        Some(path) => path,
        None => {
            eprintln!(
                "Could not find point_fixtures.json (searched: {}). Pass a path explicitly.",
                FIXTURE_PATHS.join(", ")
            );
            process::exit(2);
        }
    };

    let fixtures = match load_fixtures(&path) {
        Ok(fixtures) => fixtures,
        Err(err) => {
            eprintln!("Failed to load {}: {}", path.display(), err);
            process::exit(2);
        }
    };
    println!("Loaded fixtures from: {}", path.display());

    let total = fixtures.len();
    let mut passed = 0;
    for fixture in &fixtures {
        match check_case(&fixture.case) {
            Ok(()) => {
                passed += 1;
                println!("[PASS] {}", fixture.name);
            }
            Err(mismatch) => {
                println!("[FAIL] {}:", fixture.name);
                println!("  {}", mismatch);
            }
        }
    }

    println!("\n===========================================");
    println!("Results: {}/{} passed", passed, total);
    if passed == total {
        println!("[OK] All point fixtures PASSED.");
    } else {
        println!("[FAIL] Some fixtures failed.");
        process::exit(1);
    }
}
