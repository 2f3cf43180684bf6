//! Integration tests for the envaudit binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envaudit"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("scientific Python environment"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envaudit"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_without_python_still_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempfile::TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("envaudit"));
    cmd.env("PATH", temp.path().join("no-such-dir"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    let output = cmd.output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("WARNING: You do not have Python on your PATH!"));
    // Interpreter advisory plus one per library.
    assert_eq!(stdout.matches("WARNING: ").count(), 14);
    assert!(!stdout.contains("minor warning"));
    Ok(())
}

#[cfg(unix)]
mod fake_python {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const HEALTHY: &[(&str, Option<&str>)] = &[
        ("numpy", Some("1.9.2")),
        ("astropy", Some("1.0.1")),
        ("glob", None),
        ("matplotlib", Some("1.4.3")),
        ("shelve", None),
        ("pickle", None),
        ("time", None),
        ("astroML", Some("0.3")),
        ("gatspy", Some("0.2.1")),
        ("astroquery", Some("0.2.4")),
        ("sklearn", Some("0.16.1")),
        ("FATS", None),
        ("IPython", Some("3.1.0")),
    ];

    /// Install a fake `python` under `<root>/<dist>/bin`.
    ///
    /// Modules listed in `modules` import successfully. Each one prints a
    /// line of import chatter and then, if a version is given, the tagged
    /// version line. Every other module fails with the import-error status.
    fn install_python(root: &Path, dist: &str, modules: &[(&str, Option<&str>)]) -> PathBuf {
        let bin = root.join(dist).join("bin");
        fs::create_dir_all(&bin).unwrap();

        let mut script = String::from(
            "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then\n  echo \"Python 2.7.9\" >&2\n  exit 0\nfi\ncase \"$3\" in\n",
        );
        for (module, version) in modules {
            match version {
                Some(v) => script.push_str(&format!(
                    "  {0}) echo \"{0} 9.9 loaded\"; printf '\\n__ENVAUDIT_VERSION__={1}\\n' ;;\n",
                    module, v
                )),
                None => script.push_str(&format!("  {0}) echo \"{0} loaded\" ;;\n", module)),
            }
        }
        script.push_str("  *) exit 3 ;;\nesac\n");

        let path = bin.join("python");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        bin
    }

    fn with_override<'a>(module: &'a str, version: Option<&'a str>) -> Vec<(&'a str, Option<&'a str>)> {
        HEALTHY
            .iter()
            .map(|&(m, v)| if m == module { (m, version) } else { (m, v) })
            .collect()
    }

    fn without<'a>(module: &str) -> Vec<(&'a str, Option<&'a str>)> {
        HEALTHY.iter().copied().filter(|(m, _)| *m != module).collect()
    }

    fn audit(bin: &Path) -> Result<String, Box<dyn std::error::Error>> {
        let mut cmd = Command::new(cargo_bin("envaudit"));
        cmd.env("PATH", bin).env("NO_COLOR", "1").env_remove("RUST_LOG");
        let output = cmd.output()?;
        assert!(output.status.success());
        Ok(String::from_utf8(output.stdout)?)
    }

    #[test]
    fn healthy_anaconda_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let bin = install_python(temp.path(), "anaconda", HEALTHY);
        let stdout = audit(&bin)?;
        assert_eq!(stdout, "");
        Ok(())
    }

    #[test]
    fn import_chatter_is_not_mistaken_for_version() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let modules = with_override("numpy", Some("1.9.2"));
        let bin = install_python(temp.path(), "anaconda", &modules);
        let stdout = audit(&bin)?;
        assert!(!stdout.contains("numpy"));
        assert!(!stdout.contains("9.9"));
        Ok(())
    }

    #[test]
    fn old_matplotlib_gets_upgrade_command() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let modules = with_override("matplotlib", Some("1.3.0"));
        let bin = install_python(temp.path(), "anaconda", &modules);
        let stdout = audit(&bin)?;
        assert_eq!(
            stdout,
            "minor warning: you are running a version of matplotlib < 1.4\n\
             \t to update in anaconda, use the command line:\n\
             \t $> conda update matplotlib\n"
        );
        Ok(())
    }

    #[test]
    fn missing_fats_gets_pip_command() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let modules = without("FATS");
        let bin = install_python(temp.path(), "anaconda", &modules);
        let stdout = audit(&bin)?;
        assert_eq!(
            stdout
                .matches("WARNING: You do not have the FATS package installed")
                .count(),
            1
        );
        assert!(stdout.contains("$> pip install FATS"));
        assert!(!stdout.contains("minor warning"));
        Ok(())
    }

    #[test]
    fn numpy_prefix_match_is_silent() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let modules = with_override("numpy", Some("1.9.0"));
        let bin = install_python(temp.path(), "anaconda", &modules);
        let stdout = audit(&bin)?;
        assert!(!stdout.contains("numpy"));
        Ok(())
    }

    #[test]
    fn non_anaconda_python_gets_path_advice() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let bin = install_python(temp.path(), "local", HEALTHY);
        let stdout = audit(&bin)?;
        assert_eq!(
            stdout,
            "WARNING: You are not running the anaconda distribution of Python!\n\
             \t If this is intentional, ignore this message.\n\
             \t If you attempted to install anaconda, check your PATH...\n\
             \t you may need to prepend the ~/anaconda/bin/ directory.\n"
        );
        Ok(())
    }

    #[test]
    fn bare_python_reports_every_library() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let bin = install_python(temp.path(), "anaconda", &[]);
        let stdout = audit(&bin)?;
        assert_eq!(stdout.matches("WARNING: You do not have the ").count(), 13);
        assert!(stdout.contains("WARNING: You do not have the scikit-learn package installed"));
        assert!(!stdout.contains("anaconda distribution"));
        Ok(())
    }
}
