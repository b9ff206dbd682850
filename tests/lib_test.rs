//! Library integration tests.

use envboot::BootError;

#[test]
fn error_types_are_public() {
    let err = BootError::VersionTooLow {
        package: "torch".into(),
        found: "2.1.0".into(),
        minimum: "2.2".into(),
    };
    assert_eq!(err.to_string(), "torch >= 2.2.x required (found 2.1.0)");
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> envboot::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use envboot::cli::{Cli, Commands};

    let cli = Cli::parse_from(["envboot", "check", "--minimum", "2.4"]);

    if let Some(Commands::Check(args)) = cli.command {
        assert_eq!(args.minimum.map(|m| m.to_string()), Some("2.4".to_string()));
        assert!(args.package.is_none());
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn full_run_against_fake_toolchain() {
    use envboot::config::BootConfig;
    use envboot::environment::{ensure_ready, EnvironmentMarker};
    use envboot::install::install_and_report;
    use envboot::toolchain::FakeToolchain;
    use envboot::version::{check_minimum_version, MinimumVersion};

    let toolchain = FakeToolchain::new()
        .with_available("numpy", "1.26.4")
        .with_available("pandas", "2.2.2")
        .with_available("torch", "2.2.0")
        .with_available("transformers", "4.41.2");
    let marker = EnvironmentMarker::from_lookup(|key| {
        (key == "VIRTUAL_ENV").then(|| "/work/.venv".to_string())
    });

    let outcome = ensure_ready(&marker, std::path::Path::new("/work/.venv"), &toolchain).unwrap();
    assert!(outcome.should_continue());
    assert!(toolchain.created().is_empty());

    let report = install_and_report(&BootConfig::default(), &toolchain).unwrap();
    let json = report.to_pretty_json().unwrap();
    assert_eq!(
        json,
        "{\n  \"numpy\": \"1.26.4\",\n  \"pandas\": \"2.2.2\",\n  \"torch\": \"2.2.0\",\n  \"transformers\": \"4.41.2\"\n}"
    );

    let check = check_minimum_version("torch", MinimumVersion::new(2, 2), &toolchain).unwrap();
    assert_eq!(check.found, "2.2.0");
}

#[test]
fn inactive_run_creates_then_stops() {
    use envboot::environment::{ensure_ready, BootstrapOutcome, EnvironmentMarker};
    use envboot::toolchain::FakeToolchain;

    let temp = tempfile::TempDir::new().unwrap();
    let env_dir = temp.path().join(".venv");
    let toolchain = FakeToolchain::new();

    let outcome = ensure_ready(&EnvironmentMarker::inactive(), &env_dir, &toolchain).unwrap();

    assert!(matches!(outcome, BootstrapOutcome::Created { .. }));
    assert!(!outcome.should_continue());
    assert_eq!(toolchain.created(), [env_dir]);
    assert!(toolchain.installs().is_empty());
}
