use super::*;

use std::collections::HashMap;

fn args_with_config(path: PathBuf) -> Args {
    Args {
        config: path,
        ..Args::default()
    }
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn defaults_apply_without_file_env_or_flags() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (settings, warnings) =
        load_settings_with(&args_with_config(dir.path().join("missing.toml")), no_env);

    assert_eq!(settings, StartupConfig::default());
    assert!(warnings.is_empty());
}

#[test]
fn file_then_env_then_flags_override_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("portfolio.toml");
    fs::write(
        &path,
        "page_url = \"https://file.example/cv\"\ndata_dir = \"/tmp/from-file\"\nlog = \"debug\"\n",
    )
    .expect("write config");

    let (from_file, _) = load_settings_with(&args_with_config(path.clone()), no_env);
    assert_eq!(from_file.page_url, "https://file.example/cv");
    assert_eq!(from_file.data_dir, Some(PathBuf::from("/tmp/from-file")));
    assert_eq!(from_file.log_filter, "debug");

    let env: HashMap<&str, &str> = [
        ("PORTFOLIO_PAGE_URL", "https://env.example/cv"),
        ("APP__DATA_DIR", "/tmp/from-env"),
    ]
    .into_iter()
    .collect();
    let lookup = |name: &str| env.get(name).map(|v| v.to_string());

    let (from_env, _) = load_settings_with(&args_with_config(path.clone()), lookup);
    assert_eq!(from_env.page_url, "https://env.example/cv");
    assert_eq!(from_env.data_dir, Some(PathBuf::from("/tmp/from-env")));

    let mut args = args_with_config(path);
    args.page_url = Some("https://example.com/resume".to_string());
    let (from_flags, warnings) = load_settings_with(&args, lookup);
    assert_eq!(from_flags.page_url, "https://example.com/resume");
    assert!(warnings.is_empty());
}

#[test]
fn invalid_page_url_falls_back_with_warning() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut args = args_with_config(dir.path().join("missing.toml"));
    args.page_url = Some("not a url".to_string());

    let (settings, warnings) = load_settings_with(&args, no_env);

    assert_eq!(settings.page_url, DEFAULT_PAGE_URL);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("not a url"));
}

#[test]
fn malformed_file_is_reported_and_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("portfolio.toml");
    fs::write(&path, "page_url = [").expect("write config");

    let (settings, warnings) = load_settings_with(&args_with_config(path), no_env);

    assert_eq!(settings.page_url, DEFAULT_PAGE_URL);
    assert!(warnings[0].starts_with("failed to parse"));
}

#[test]
fn mailto_style_urls_are_rejected() {
    assert!(normalize_page_url("mailto:someone@example.com").is_err());
    assert_eq!(
        normalize_page_url("  https://example.com/resume ").as_deref(),
        Ok("https://example.com/resume")
    );
}
