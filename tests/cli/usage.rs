use anyhow::Result;

use crate::CliTest;

#[test]
fn absolute_dir_exits_with_usage_error() -> Result<()> {
    let test = CliTest::new()?;
    let absolute = test.root().join("locales");
    std::fs::create_dir_all(&absolute)?;

    let output = test
        .command()
        .args(["-d", absolute.to_str().unwrap()])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("absolute paths are not supported"),
        "stderr: {stderr}"
    );
    Ok(())
}

#[test]
fn missing_directory_exits_with_usage_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["-d", "no-such-dir"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not a valid directory"),
        "stderr: {stderr}"
    );
    Ok(())
}

#[test]
fn directory_without_catalogs_exits_with_usage_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/readme.md", "not a catalog")?;

    let output = test.command().args(["-d", "locales"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no .po files"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn dir_can_come_from_the_environment() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .env("PODIFF_DIR", "no-such-dir")
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no-such-dir"), "stderr: {stderr}");
    Ok(())
}
