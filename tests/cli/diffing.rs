use anyhow::Result;

use crate::CliTest;

const BASE_PO: &str = r#"msgid ""
msgstr ""
"Language: fr\n"

msgid "Hello"
msgstr "Bonjour"
"#;

const EXTENDED_PO: &str = r#"msgid ""
msgstr ""
"Language: fr\n"

msgid "Hello"
msgstr "Bonjour"

msgid "Bye"
msgstr "Au revoir"
"#;

#[test]
fn rewrites_catalog_to_delta_against_master() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/fr.po", BASE_PO)?;
    test.commit_all("add base catalog")?;
    test.write_file("locales/fr.po", EXTENDED_PO)?;

    let output = test.command().args(["-d", "locales"]).output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("diffed 1 catalog file(s) against master"),
        "stdout: {stdout}"
    );

    let rewritten = test.read_file("locales/fr.po")?;
    assert_eq!(
        rewritten,
        r#"msgid ""
msgstr ""
"Language: fr\n"

msgid "Bye"
msgstr "Au revoir"
"#
    );
    Ok(())
}

#[test]
fn identical_catalog_is_reduced_to_its_header() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/fr.po", BASE_PO)?;
    test.commit_all("add base catalog")?;

    let output = test.command().args(["-d", "locales"]).output()?;
    assert!(output.status.success());

    let rewritten = test.read_file("locales/fr.po")?;
    assert_eq!(rewritten, "msgid \"\"\nmsgstr \"\"\n\"Language: fr\\n\"\n");
    Ok(())
}

#[test]
fn verbose_prints_one_line_per_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/fr.po", BASE_PO)?;
    test.commit_all("add base catalog")?;
    test.write_file("locales/fr.po", EXTENDED_PO)?;

    let output = test
        .command()
        .args(["--dir", "locales", "--verbose"])
        .output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("locales/fr.po: 1 entry differs"),
        "stdout: {stdout}"
    );
    Ok(())
}

#[test]
fn branch_can_come_from_the_environment() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/fr.po", BASE_PO)?;
    test.commit_all("add base catalog")?;
    test.git_branch("release")?;
    test.write_file("locales/fr.po", EXTENDED_PO)?;

    let output = test
        .command()
        .args(["-d", "locales"])
        .env("PODIFF_BRANCH", "release")
        .output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("against release"), "stdout: {stdout}");
    Ok(())
}

#[test]
fn file_missing_on_branch_fails_and_leaves_it_untouched() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/fr.po", BASE_PO)?;
    test.commit_all("add base catalog")?;
    // Present in the working tree only.
    test.write_file("locales/de.po", BASE_PO)?;

    let output = test.command().args(["-d", "locales"]).output()?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("locales/de.po"),
        "stderr: {stderr}"
    );

    assert_eq!(test.read_file("locales/de.po")?, BASE_PO);
    Ok(())
}
