//! Integration tests for the RSTREE_* environment layer
//!
//! Environment variables are process-wide, so every layered scenario lives in
//! one test function and runs in sequence. Kept apart from config_test.rs so
//! those tests never observe these variables.

use std::env;
use std::fs;

use tempfile::TempDir;

use rstree::application::ApplicationError;
use rstree::config::Settings;

const VARS: [&str; 4] = [
    "RSTREE_MAX_ROOT_CHILDREN",
    "RSTREE_SEED",
    "RSTREE_SAMPLE_COUNT",
    "XDG_CONFIG_HOME",
];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn given_layered_sources_when_loading_then_env_wins_over_files() {
    // Arrange
    clear_vars();
    let dir = TempDir::new().unwrap();

    let xdg = dir.path().join("xdg");
    fs::create_dir_all(xdg.join("rstree")).unwrap();
    fs::write(
        xdg.join("rstree").join("rstree.toml"),
        "max_root_children = 9\nmax_other_node_children = 2\nsample_count = 7\n",
    )
    .unwrap();
    env::set_var("XDG_CONFIG_HOME", &xdg);

    let explicit = dir.path().join("explicit.toml");
    fs::write(&explicit, "max_root_children = 3\nseed = 1\n").unwrap();

    // Act: explicit file over the global file
    let from_files = Settings::load(Some(explicit.as_path())).expect("load settings");

    // Assert
    assert_eq!(from_files.max_root_children, 3, "explicit beats global");
    assert_eq!(from_files.seed, Some(1));
    if cfg!(target_os = "linux") {
        assert_eq!(from_files.max_other_node_children, 2, "global layer applied");
        assert_eq!(from_files.sample_count, 7, "global layer applied");
    }

    // Act: env over both files, seed at the top of the u64 range
    env::set_var("RSTREE_MAX_ROOT_CHILDREN", "5");
    env::set_var("RSTREE_SEED", "18446744073709551615");
    let with_env = Settings::load(Some(explicit.as_path())).expect("load settings");

    // Assert
    assert_eq!(with_env.max_root_children, 5, "env beats explicit file");
    assert_eq!(with_env.seed, Some(u64::MAX));

    // Act: malformed env value
    env::set_var("RSTREE_SAMPLE_COUNT", "lots");
    let err = Settings::load(Some(explicit.as_path())).unwrap_err();

    // Assert
    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("sample_count"), "got: {err}");

    // Act: negative seed does not fit u64
    env::remove_var("RSTREE_SAMPLE_COUNT");
    env::set_var("RSTREE_SEED", "-1");
    let err = Settings::load(Some(explicit.as_path())).unwrap_err();

    // Assert
    assert!(err.to_string().contains("seed"), "got: {err}");

    // Cleanup
    clear_vars();
}
