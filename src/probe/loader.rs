//! Module loading.
//!
//! [`ModuleLoader`] is the seam between probe logic and the interpreter.
//! [`PythonLoader`] asks a real interpreter to import each module in its own
//! process; [`StaticLoader`] answers from a fixed table for tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::version::extract_version;
use crate::error::{AuditError, Result};

/// Exit status the import snippet uses to signal `ImportError`.
const IMPORT_ERROR_STATUS: i32 = 3;

/// Prefix of the stdout line that carries the module's `__version__`.
const VERSION_TAG: &str = "__ENVAUDIT_VERSION__=";

/// Imports the module named by `sys.argv[1]` and reports its `__version__`.
///
/// Anything the module prints while importing is diverted to stderr, and the
/// version is written on its own tagged line so stray output written straight
/// to the stdout descriptor cannot be mistaken for it. Kept compatible with
/// both Python 2 and Python 3.
const IMPORT_SNIPPET: &str = "\
import sys
out = sys.stdout
sys.stdout = sys.stderr
try:
    try:
        import importlib
        mod = importlib.import_module(sys.argv[1])
    except ImportError:
        sys.exit(3)
finally:
    sys.stdout = out
ver = getattr(mod, '__version__', None)
if ver is not None:
    out.write('\\n__ENVAUDIT_VERSION__=%s\\n' % (ver,))
";

/// Pull the tagged version line out of the snippet's stdout.
///
/// The last tagged line wins; untagged lines are import noise.
fn parse_version_line(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .rev()
        .find_map(|line| line.trim_end().strip_prefix(VERSION_TAG))
        .map(str::trim)
        .filter(|version| !version.is_empty())
        .map(str::to_string)
}

/// A successfully loaded module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedModule {
    /// The module's version identifier, if it exposes one.
    pub version: Option<String>,
}

impl LoadedModule {
    /// A module with the given version identifier.
    pub fn versioned(version: &str) -> Self {
        Self {
            version: Some(version.to_string()),
        }
    }

    /// A module without a version identifier.
    pub fn unversioned() -> Self {
        Self { version: None }
    }
}

/// Loads modules by import name.
pub trait ModuleLoader {
    /// Attempt to load `module`.
    ///
    /// Any error means the module is treated as not installed.
    fn load(&self, module: &str) -> Result<LoadedModule>;
}

/// Loads modules by running the interpreter once per module.
#[derive(Debug, Clone)]
pub struct PythonLoader {
    interpreter: PathBuf,
}

impl PythonLoader {
    /// Create a loader for the given interpreter executable.
    pub fn new(interpreter: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    /// The interpreter this loader runs.
    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    /// Query the interpreter's own version (e.g., `2.7.9`).
    ///
    /// Python 2 prints its banner to stderr, so both streams are searched.
    pub fn interpreter_version(&self) -> Result<Option<String>> {
        let output = Command::new(&self.interpreter)
            .arg("--version")
            .output()
            .map_err(|source| self.spawn_error(source))?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(extract_version(&text))
    }

    fn spawn_error(&self, source: std::io::Error) -> AuditError {
        AuditError::InterpreterSpawn {
            interpreter: self.interpreter.display().to_string(),
            source,
        }
    }
}

impl ModuleLoader for PythonLoader {
    fn load(&self, module: &str) -> Result<LoadedModule> {
        debug!("Importing {} with {}", module, self.interpreter.display());

        let output = Command::new(&self.interpreter)
            .arg("-c")
            .arg(IMPORT_SNIPPET)
            .arg(module)
            .output()
            .map_err(|source| self.spawn_error(source))?;

        match output.status.code() {
            Some(0) => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                Ok(LoadedModule {
                    version: parse_version_line(&stdout),
                })
            }
            Some(IMPORT_ERROR_STATUS) => Err(AuditError::ModuleNotFound {
                module: module.to_string(),
            }),
            code => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let message = stderr
                    .lines()
                    .rev()
                    .find(|line| !line.trim().is_empty())
                    .map(|line| line.trim().to_string())
                    .unwrap_or_else(|| format!("interpreter exited with {:?}", code));
                Err(AuditError::ModuleLoadFailed {
                    module: module.to_string(),
                    message,
                })
            }
        }
    }
}

/// Answers module loads from a fixed table.
///
/// Modules not in the table are reported as not installed.
///
/// # Example
///
/// ```
/// use envaudit::probe::loader::{ModuleLoader, StaticLoader};
///
/// let loader = StaticLoader::new()
///     .with_version("numpy", "1.9.2")
///     .with_module("glob");
///
/// assert_eq!(loader.load("numpy").unwrap().version.as_deref(), Some("1.9.2"));
/// assert!(loader.load("glob").unwrap().version.is_none());
/// assert!(loader.load("FATS").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticLoader {
    modules: HashMap<String, LoadedModule>,
    broken: HashMap<String, String>,
}

impl StaticLoader {
    /// Create an empty loader; every module is absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module that reports `version`.
    pub fn with_version(mut self, module: &str, version: &str) -> Self {
        self.modules
            .insert(module.to_string(), LoadedModule::versioned(version));
        self
    }

    /// Register a module without a version identifier.
    pub fn with_module(mut self, module: &str) -> Self {
        self.modules
            .insert(module.to_string(), LoadedModule::unversioned());
        self
    }

    /// Forget a previously registered module.
    pub fn without(mut self, module: &str) -> Self {
        self.modules.remove(module);
        self.broken.remove(module);
        self
    }

    /// Register a module whose import raises an error other than `ImportError`.
    pub fn with_broken(mut self, module: &str, message: &str) -> Self {
        self.broken.insert(module.to_string(), message.to_string());
        self
    }
}

impl ModuleLoader for StaticLoader {
    fn load(&self, module: &str) -> Result<LoadedModule> {
        if let Some(message) = self.broken.get(module) {
            return Err(AuditError::ModuleLoadFailed {
                module: module.to_string(),
                message: message.clone(),
            });
        }
        self.modules
            .get(module)
            .cloned()
            .ok_or_else(|| AuditError::ModuleNotFound {
                module: module.to_string(),
            })
    }
}
