//! The fixed rename manifest for the CMake library scaffold.
//!
//! Every file and directory the tool touches is listed here, in execution
//! order. Nothing is discovered at runtime: a scaffold that deviates from
//! this layout simply produces "not found" steps.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Placeholder name the scaffold ships with.
pub const PLACEHOLDER: &str = "my_library";

/// The library name supplied by the user, with its uppercase form.
///
/// No validation happens here: path separators, spaces and characters that
/// are not valid in C++ identifiers are all passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryName {
    name: String,
    upper: String,
}

impl LibraryName {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let upper = name.to_uppercase();
        Self { name, upper }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Uppercase form used for preprocessor tokens (`FOO_EXPORTS`, `FOO_API`).
    pub fn upper(&self) -> &str {
        &self.upper
    }
}

/// One literal `from` → `to` replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Substitution {
    pub from: String,
    pub to: String,
}

impl Substitution {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Apply substitutions in order, each one against the output of the last.
pub fn apply_substitutions(content: &str, substitutions: &[Substitution]) -> String {
    substitutions
        .iter()
        .fold(content.to_string(), |acc, sub| acc.replace(&sub.from, &sub.to))
}

/// A file to rewrite in place and optionally rename within its directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Path relative to the project root, `/`-separated.
    pub path: String,
    pub substitutions: Vec<Substitution>,
    /// New file name (not path) inside the same parent directory.
    pub new_name: Option<String>,
}

/// A directory to move once the files addressed through it are done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRename {
    /// Path relative to the project root, `/`-separated.
    pub from: String,
    /// New name joined onto the parent of `from`, taken as-is.
    pub new_name: String,
}

impl DirectoryRename {
    pub fn source(&self, base: &Path) -> PathBuf {
        resolve(base, &self.from)
    }

    /// `Path::join` semantics: an absolute `new_name` replaces the parent.
    pub fn target(&self, base: &Path) -> PathBuf {
        let parent = self.from.rsplit_once('/').map_or("", |(parent, _)| parent);
        resolve(base, parent).join(&self.new_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    ModifyFile(ManifestEntry),
    RenameDirectory(DirectoryRename),
}

/// Join a fixed `/`-separated relative path onto `base`.
pub fn resolve(base: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(base.to_path_buf(), |path, segment| path.join(segment))
}

fn modify(path: &str, pairs: Vec<(&str, String)>, new_name: Option<String>) -> Step {
    Step::ModifyFile(ManifestEntry {
        path: path.to_string(),
        substitutions: pairs
            .into_iter()
            .map(|(from, to)| Substitution::new(from, to))
            .collect(),
        new_name,
    })
}

fn rename_dir(from: &str, new_name: String) -> Step {
    Step::RenameDirectory(DirectoryRename {
        from: from.to_string(),
        new_name,
    })
}

/// Build the ordered manifest for renaming the scaffold to `library`.
///
/// Directory renames come after every file addressed through the old
/// directory path.
pub fn scaffold_manifest(library: &LibraryName) -> Vec<Step> {
    let name = library.as_str();
    let upper = library.upper();

    vec![
        // Top-level build
        modify(
            "CMakeLists.txt",
            vec![
                ("project(lib_my_library", format!("project(lib_{}", name)),
                ("add_subdirectory(my_library)", format!("add_subdirectory({})", name)),
            ],
            None,
        ),
        modify(
            "cmake/my_libraryConfig.cmake.in",
            vec![
                ("@PACKAGE_INIT@", "@PACKAGE_INIT@".to_string()),
                ("my_libraryTargets.cmake", format!("{}Targets.cmake", name)),
            ],
            Some(format!("{}Config.cmake.in", name)),
        ),
        // Public headers
        modify(
            "include/my_library/my_library_export.h",
            vec![("MY_LIBRARY", upper.to_string())],
            Some(format!("{}_export.h", name)),
        ),
        modify(
            "include/my_library/my_library.h",
            vec![
                ("MY_LIBRARY", upper.to_string()),
                ("my_library_export.h", format!("{}_export.h", name)),
                ("namespace my_library", format!("namespace {}", name)),
            ],
            Some(format!("{}.h", name)),
        ),
        rename_dir("include/my_library", name.to_string()),
        // Library
        modify(
            "my_library/CMakeLists.txt",
            vec![
                ("my_library", name.to_string()),
                ("MY_LIBRARY", upper.to_string()),
                ("MY_LIBRARY_EXPORTS", format!("{}_EXPORTS", upper)),
            ],
            None,
        ),
        modify(
            "my_library/internal/my_library_internal.h",
            vec![("namespace my_library::", format!("namespace {}::", name))],
            Some(format!("{}_internal.h", name)),
        ),
        modify(
            "my_library/source/my_library_internal.cpp",
            vec![
                ("my_library_internal.h", format!("{}_internal.h", name)),
                ("MY_LIBRARY_VERSION", format!("{}_VERSION", upper)),
                ("my_library::internal::", format!("{}::internal::", name)),
            ],
            Some(format!("{}_internal.cpp", name)),
        ),
        modify(
            "my_library/source/my_library.cpp",
            vec![
                ("my_library/my_library.h", format!("{}/{}.h", name, name)),
                ("my_library_internal.h", format!("{}_internal.h", name)),
                ("my_library::", format!("{}::", name)),
            ],
            Some(format!("{}.cpp", name)),
        ),
        rename_dir(PLACEHOLDER, name.to_string()),
        // Tests
        modify(
            "tests/CMakeLists.txt",
            vec![("my_libraryTests", format!("{}Tests", name))],
            None,
        ),
        modify(
            "tests/my_libraryTests/CMakeLists.txt",
            vec![("my_library", name.to_string())],
            None,
        ),
        modify(
            "tests/my_libraryTests/versionTests.cpp",
            vec![
                ("my_library/my_library.h", format!("{}/{}.h", name, name)),
                ("\"my_library Version\"", format!("\"{} Version\"", name)),
                ("my_library::", format!("{}::", name)),
            ],
            None,
        ),
        rename_dir("tests/my_libraryTests", format!("{}Tests", name)),
        // Examples
        modify(
            "examples/example_01/CMakeLists.txt",
            vec![("my_library", name.to_string())],
            None,
        ),
        modify(
            "examples/example_01/main.cpp",
            vec![("my_library", name.to_string())],
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry<'a>(steps: &'a [Step], path: &str) -> &'a ManifestEntry {
        steps
            .iter()
            .find_map(|step| match step {
                Step::ModifyFile(entry) if entry.path == path => Some(entry),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no manifest entry for {}", path))
    }

    fn position(steps: &[Step], predicate: impl Fn(&Step) -> bool) -> usize {
        steps.iter().position(predicate).unwrap()
    }

    #[test]
    fn library_name_keeps_verbatim_and_upper_forms() {
        let name = LibraryName::new("fooBar");
        assert_eq!(name.as_str(), "fooBar");
        assert_eq!(name.upper(), "FOOBAR");
    }

    #[test]
    fn library_name_is_not_sanitized() {
        let name = LibraryName::new("../odd name");
        assert_eq!(name.as_str(), "../odd name");
        assert_eq!(name.upper(), "../ODD NAME");
    }

    #[test]
    fn substitutions_apply_in_declared_order() {
        let subs = vec![
            Substitution::new("MY_LIBRARY", "FOO"),
            Substitution::new("MY_LIBRARY_EXPORTS", "FOO_EXPORTS"),
        ];
        let out = apply_substitutions("MY_LIBRARY_EXPORTS MY_LIBRARY", &subs);
        // The first pair already rewrote the longer token.
        assert_eq!(out, "FOO_EXPORTS FOO");
    }

    #[test]
    fn later_substitutions_see_earlier_output() {
        let subs = vec![Substitution::new("a", "b"), Substitution::new("b", "c")];
        assert_eq!(apply_substitutions("ab", &subs), "cc");
    }

    #[test]
    fn substitution_is_literal_not_regex() {
        let subs = vec![Substitution::new("lib_(.*)", "x")];
        assert_eq!(apply_substitutions("lib_(.*) lib_abc", &subs), "x lib_abc");
    }

    #[test]
    fn manifest_covers_every_scaffold_file_once() {
        let steps = scaffold_manifest(&LibraryName::new("foo"));
        let files: Vec<&str> = steps
            .iter()
            .filter_map(|step| match step {
                Step::ModifyFile(entry) => Some(entry.path.as_str()),
                Step::RenameDirectory(_) => None,
            })
            .collect();

        assert_eq!(
            files,
            vec![
                "CMakeLists.txt",
                "cmake/my_libraryConfig.cmake.in",
                "include/my_library/my_library_export.h",
                "include/my_library/my_library.h",
                "my_library/CMakeLists.txt",
                "my_library/internal/my_library_internal.h",
                "my_library/source/my_library_internal.cpp",
                "my_library/source/my_library.cpp",
                "tests/CMakeLists.txt",
                "tests/my_libraryTests/CMakeLists.txt",
                "tests/my_libraryTests/versionTests.cpp",
                "examples/example_01/CMakeLists.txt",
                "examples/example_01/main.cpp",
            ]
        );
        assert_eq!(steps.len(), 16);
    }

    #[test]
    fn directories_rename_after_their_files() {
        let steps = scaffold_manifest(&LibraryName::new("foo"));

        for step in &steps {
            let Step::RenameDirectory(dir) = step else {
                continue;
            };
            let dir_index = position(&steps, |s| s == step);
            let prefix = format!("{}/", dir.from);
            let last_file = steps
                .iter()
                .enumerate()
                .filter_map(|(i, s)| match s {
                    Step::ModifyFile(entry) if entry.path.starts_with(&prefix) => Some(i),
                    _ => None,
                })
                .max()
                .unwrap();
            assert!(last_file < dir_index, "{} renamed too early", dir.from);
        }
    }

    #[test]
    fn header_entry_uses_upper_and_verbatim_forms() {
        let steps = scaffold_manifest(&LibraryName::new("foo"));
        let header = entry(&steps, "include/my_library/my_library.h");

        assert_eq!(header.new_name.as_deref(), Some("foo.h"));
        assert_eq!(header.substitutions[0], Substitution::new("MY_LIBRARY", "FOO"));
        assert_eq!(
            header.substitutions[2],
            Substitution::new("namespace my_library", "namespace foo")
        );
    }

    #[test]
    fn directory_targets_embed_library_name() {
        let base = Path::new("/work");
        let steps = scaffold_manifest(&LibraryName::new("foo"));
        let targets: Vec<(PathBuf, PathBuf)> = steps
            .iter()
            .filter_map(|step| match step {
                Step::RenameDirectory(dir) => Some((dir.source(base), dir.target(base))),
                Step::ModifyFile(_) => None,
            })
            .collect();

        assert_eq!(
            targets,
            vec![
                (resolve(base, "include/my_library"), resolve(base, "include/foo")),
                (resolve(base, "my_library"), resolve(base, "foo")),
                (resolve(base, "tests/my_libraryTests"), resolve(base, "tests/fooTests")),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn absolute_library_name_replaces_directory_parent() {
        let base = Path::new("/work");
        let steps = scaffold_manifest(&LibraryName::new("/x"));
        let targets: Vec<PathBuf> = steps
            .iter()
            .filter_map(|step| match step {
                Step::RenameDirectory(dir) => Some(dir.target(base)),
                Step::ModifyFile(_) => None,
            })
            .collect();

        assert_eq!(
            targets,
            vec![
                PathBuf::from("/x"),
                PathBuf::from("/x"),
                PathBuf::from("/xTests"),
            ]
        );
    }

    #[test]
    fn resolve_joins_segments() {
        let base = Path::new("/work");
        assert_eq!(
            resolve(base, "include/my_library/my_library.h"),
            Path::new("/work").join("include").join("my_library").join("my_library.h")
        );
    }
}
