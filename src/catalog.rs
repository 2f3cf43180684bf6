//! The library probe catalog.
//!
//! The catalog is a fixed, ordered list of libraries the environment is
//! expected to provide. It is compile-time data and is never mutated; the
//! order only groups related warnings for the reader.

/// Version expectation for a library that exposes `__version__`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expectation {
    /// Prefix the reported version must start with (e.g., "1.9").
    pub prefix: &'static str,
    /// Minimum version shown in the warning headline (e.g., "1.0").
    pub minimum: &'static str,
    /// Follow-up lines explaining how to upgrade.
    pub upgrade_advice: &'static [&'static str],
}

/// A single library to probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryProbe {
    /// Name shown to the user (e.g., "scikit-learn").
    pub name: &'static str,
    /// Name passed to the interpreter's import machinery (e.g., "sklearn").
    pub module: &'static str,
    /// Expected version, if the library's version is checked at all.
    pub expectation: Option<Expectation>,
    /// Follow-up lines explaining how to install the library.
    pub install_advice: &'static [&'static str],
}

const BARE_BONES: &[&str] = &["your Python is bare bones, please install anaconda"];

const CATALOG: &[LibraryProbe] = &[
    LibraryProbe {
        name: "numpy",
        module: "numpy",
        expectation: Some(Expectation {
            prefix: "1.9",
            minimum: "1.9",
            upgrade_advice: &[
                "to update in anaconda, use the command line:",
                "$> conda update numpy",
            ],
        }),
        install_advice: BARE_BONES,
    },
    LibraryProbe {
        name: "astropy",
        module: "astropy",
        expectation: Some(Expectation {
            prefix: "1",
            minimum: "1.0",
            upgrade_advice: &[
                "to update in anaconda, use the command line:",
                "$> conda update astropy",
            ],
        }),
        install_advice: &[
            "to install in anaconda, use the command line:",
            "$> conda install astropy",
            "if you aren't using anaconda consider using pip",
        ],
    },
    LibraryProbe {
        name: "glob",
        module: "glob",
        expectation: None,
        install_advice: BARE_BONES,
    },
    LibraryProbe {
        name: "matplotlib",
        module: "matplotlib",
        expectation: Some(Expectation {
            prefix: "1.4",
            minimum: "1.4",
            upgrade_advice: &[
                "to update in anaconda, use the command line:",
                "$> conda update matplotlib",
            ],
        }),
        install_advice: BARE_BONES,
    },
    LibraryProbe {
        name: "shelve",
        module: "shelve",
        expectation: None,
        install_advice: BARE_BONES,
    },
    LibraryProbe {
        name: "pickle",
        module: "pickle",
        expectation: None,
        install_advice: BARE_BONES,
    },
    LibraryProbe {
        name: "time",
        module: "time",
        expectation: None,
        install_advice: BARE_BONES,
    },
    LibraryProbe {
        name: "astroML",
        module: "astroML",
        expectation: Some(Expectation {
            prefix: "0.3",
            minimum: "0.3",
            upgrade_advice: &["consider upgrading", "$> pip install --upgrade astroML"],
        }),
        install_advice: &[
            "to install in anaconda, use the command line:",
            "$> conda install --channel https://conda.binstar.org/astropy astroML",
            "if you aren't using anaconda consider using pip:",
            "$> pip install astroML",
            "ALSO! Speed up your code, by running this (all Python):",
            "$> pip install astroML_addons",
        ],
    },
    LibraryProbe {
        name: "gatspy",
        module: "gatspy",
        expectation: Some(Expectation {
            prefix: "0.2",
            minimum: "0.2",
            upgrade_advice: &["consider upgrading", "$> pip install --upgrade gatspy"],
        }),
        install_advice: &[
            "to install in anaconda, use the command line:",
            "$> conda install --channel https://conda.binstar.org/srwalker101 gatspy",
            "if you aren't using anaconda consider using pip:",
            "$> pip install gatspy",
        ],
    },
    LibraryProbe {
        name: "astroquery",
        module: "astroquery",
        expectation: Some(Expectation {
            prefix: "0.2",
            minimum: "0.2",
            upgrade_advice: &["consider upgrading", "$> pip install --upgrade astroquery"],
        }),
        install_advice: &[
            "to install astroquery use pip on the command line:",
            "$> pip install astroquery",
        ],
    },
    LibraryProbe {
        name: "scikit-learn",
        module: "sklearn",
        expectation: Some(Expectation {
            prefix: "0.16",
            minimum: "0.16",
            upgrade_advice: &[
                "to update in anaconda, use the command line:",
                "$> conda update scikit-learn",
            ],
        }),
        install_advice: &[
            "to install in anaconda, use the command line:",
            "$> conda install scikit-learn",
            "if you aren't using anaconda consider using pip:",
            "$> pip install scikit-learn",
        ],
    },
    LibraryProbe {
        name: "FATS",
        module: "FATS",
        expectation: None,
        install_advice: &[
            "to install FATS use the pip on the command line:",
            "$> pip install FATS",
        ],
    },
    LibraryProbe {
        name: "IPython",
        module: "IPython",
        expectation: Some(Expectation {
            prefix: "3",
            minimum: "3.0.0",
            upgrade_advice: &[
                "to update in anaconda, use the command line:",
                "$> conda update ipython",
            ],
        }),
        install_advice: BARE_BONES,
    },
];

/// All library probes, in reporting order.
pub fn catalog() -> &'static [LibraryProbe] {
    CATALOG
}

/// Look up a probe by display name or import name.
pub fn find(name: &str) -> Option<&'static LibraryProbe> {
    CATALOG
        .iter()
        .find(|probe| probe.name == name || probe.module == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_thirteen_libraries_in_order() {
        let names: Vec<&str> = catalog().iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "numpy",
                "astropy",
                "glob",
                "matplotlib",
                "shelve",
                "pickle",
                "time",
                "astroML",
                "gatspy",
                "astroquery",
                "scikit-learn",
                "FATS",
                "IPython",
            ]
        );
    }

    #[test]
    fn names_and_modules_are_unique() {
        let names: HashSet<&str> = catalog().iter().map(|p| p.name).collect();
        let modules: HashSet<&str> = catalog().iter().map(|p| p.module).collect();
        assert_eq!(names.len(), catalog().len());
        assert_eq!(modules.len(), catalog().len());
    }

    #[test]
    fn every_probe_has_install_advice() {
        for probe in catalog() {
            assert!(
                !probe.install_advice.is_empty(),
                "{} has no install advice",
                probe.name
            );
        }
    }

    #[test]
    fn every_expectation_carries_an_upgrade_command() {
        for probe in catalog() {
            if let Some(expectation) = probe.expectation {
                assert!(
                    expectation
                        .upgrade_advice
                        .iter()
                        .any(|line| line.starts_with("$> ")),
                    "{} has no upgrade command",
                    probe.name
                );
            }
        }
    }

    #[test]
    fn find_by_display_name() {
        let probe = find("scikit-learn").unwrap();
        assert_eq!(probe.module, "sklearn");
    }

    #[test]
    fn find_by_module_name() {
        let probe = find("sklearn").unwrap();
        assert_eq!(probe.name, "scikit-learn");
    }

    #[test]
    fn find_unknown_returns_none() {
        assert!(find("pandas").is_none());
    }

    #[test]
    fn stdlib_modules_have_no_expectation() {
        for name in ["glob", "shelve", "pickle", "time", "FATS"] {
            assert!(find(name).unwrap().expectation.is_none(), "{}", name);
        }
    }

    #[test]
    fn expected_prefixes() {
        assert_eq!(find("numpy").unwrap().expectation.unwrap().prefix, "1.9");
        assert_eq!(find("astropy").unwrap().expectation.unwrap().prefix, "1");
        assert_eq!(find("sklearn").unwrap().expectation.unwrap().prefix, "0.16");
        assert_eq!(find("IPython").unwrap().expectation.unwrap().prefix, "3");
    }
}
