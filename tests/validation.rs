//! The external-parser check: skip behavior when no usable validator
//! exists, and pass/fail mapping when one does.

use std::fs;

use phpdoc_stubgen::Error;
use phpdoc_stubgen::validate::validate;

#[test]
fn missing_validator_skips_the_check() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let artifact = dir.path().join("phpfunctions.php");
    fs::write(&artifact, "<?php\n").expect("failed to write artifact");

    let result = validate(&artifact, "no-such-validator-binary");
    assert!(result.is_ok());
}

#[test]
fn non_executable_validator_file_skips_the_check() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let artifact = dir.path().join("phpfunctions.php");
    fs::write(&artifact, "<?php\n").expect("failed to write artifact");

    // A plain data file with the validator's name must not be treated as
    // a runnable parser.
    let fake = dir.path().join("php-parser");
    fs::write(&fake, "not a binary").expect("failed to write file");

    let result = validate(&artifact, &fake.to_string_lossy());
    assert!(result.is_ok());
}

#[cfg(unix)]
#[test]
fn failing_validator_exit_is_fatal() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let artifact = dir.path().join("phpfunctions.php");
    fs::write(&artifact, "<?php\n").expect("failed to write artifact");

    let parser = dir.path().join("rejecting-parser");
    fs::write(&parser, "#!/bin/sh\nexit 1\n").expect("failed to write script");
    fs::set_permissions(&parser, fs::Permissions::from_mode(0o755))
        .expect("failed to set permissions");

    let result = validate(&artifact, &parser.to_string_lossy());
    assert!(matches!(result, Err(Error::Validation { .. })));
}

#[cfg(unix)]
#[test]
fn successful_validator_exit_passes() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let artifact = dir.path().join("phpfunctions.php");
    fs::write(&artifact, "<?php\n").expect("failed to write artifact");

    let parser = dir.path().join("accepting-parser");
    fs::write(&parser, "#!/bin/sh\nexit 0\n").expect("failed to write script");
    fs::set_permissions(&parser, fs::Permissions::from_mode(0o755))
        .expect("failed to set permissions");

    let result = validate(&artifact, &parser.to_string_lossy());
    assert!(result.is_ok());
}
