//! Cross-process determinism: spawns the `search_fixture` binary under
//! several environment variants and asserts identical stdout.

use std::path::Path;
use std::process::Command;

use lock_tests::fixtures::{report_lines, WORLD_NAMES};
use waypoint_search::Strategy;

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("search_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(args: &[&str], work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.args(args).current_dir(work_dir);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let args = ["parking_lot", "astar"];
    let baseline = run_variant(&args, &root, &[]);

    assert!(
        baseline.contains("trace_digest=sha256:"),
        "baseline output missing trace_digest"
    );
    assert!(
        baseline.contains("termination_reason=goal_reached"),
        "baseline output missing termination_reason=goal_reached"
    );
    assert!(
        baseline.contains("world_id=parking_lot"),
        "baseline output missing world_id"
    );

    // Different cwd.
    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    let variant_cwd = run_variant(&args, alt_cwd, &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    // Different locale env.
    let variant_locale = run_variant(&args, &root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    // Spurious env vars, and verbose logging that must stay on stderr.
    let variant_noise = run_variant(
        &args,
        &root,
        &[
            ("WAYPOINT_NOISE", "1"),
            ("RANDOM_SEED", "12345"),
            ("RUST_LOG", "trace"),
        ],
    );
    assert_eq!(
        baseline, variant_noise,
        "output differs with spurious env vars or logging enabled"
    );
}

#[test]
fn crossproc_matches_inproc_for_every_fixture() {
    let root = workspace_root();
    for world in WORLD_NAMES {
        for strategy in Strategy::ALL {
            let stdout = run_variant(&[world, strategy.name()], &root, &[]);
            let mut expected = report_lines(world, strategy).unwrap().join("\n");
            expected.push('\n');
            assert_eq!(stdout, expected, "{world}/{strategy}");
        }
    }
}

#[test]
fn unknown_world_fails_cleanly() {
    let output = Command::new(binary_path())
        .args(["no_such_world", "bfs"])
        .output()
        .expect("spawn search_fixture");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown world"));
}
