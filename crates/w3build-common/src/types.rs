//! Module kinds and the derived module tag.

use std::fmt;
use std::str::FromStr;

use crate::error::{BuildError, Result};

/// Invokable module of an API project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    /// Read-only entry points.
    Query,
    /// State-changing entry points.
    Mutation,
}

impl ModuleKind {
    /// Every known module kind.
    pub const ALL: [Self; 2] = [Self::Query, Self::Mutation];

    /// Returns the lowercase name used in manifests and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "query" => Ok(Self::Query),
            "mutation" => Ok(Self::Mutation),
            other => Err(format!(
                "unknown module \"{other}\" (expected \"query\" or \"mutation\")"
            )),
        }
    }
}

/// Tag passed to the build image as `modules_to_build`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModulesToBuild {
    /// Both query and mutation modules.
    All,
    /// Query module only.
    Query,
    /// Mutation module only.
    Mutation,
}

impl ModulesToBuild {
    /// Collapses a module selection into a single tag.
    ///
    /// Duplicates are ignored; order does not matter.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::NoModulesSelected`] if the selection is empty.
    pub fn from_selection(modules: &[ModuleKind]) -> Result<Self> {
        let query = modules.contains(&ModuleKind::Query);
        let mutation = modules.contains(&ModuleKind::Mutation);
        match (query, mutation) {
            (true, true) => Ok(Self::All),
            (true, false) => Ok(Self::Query),
            (false, true) => Ok(Self::Mutation),
            (false, false) => Err(BuildError::NoModulesSelected),
        }
    }

    /// Returns the tag value written into the build arguments.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

impl fmt::Display for ModulesToBuild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_modules_collapse_to_all() {
        let tag = ModulesToBuild::from_selection(&[ModuleKind::Mutation, ModuleKind::Query])
            .expect("selection");
        assert_eq!(tag, ModulesToBuild::All);
        assert_eq!(tag.as_str(), "all");
    }

    #[test]
    fn single_module_keeps_its_name() {
        let query = ModulesToBuild::from_selection(&[ModuleKind::Query]).expect("query");
        let mutation = ModulesToBuild::from_selection(&[ModuleKind::Mutation]).expect("mutation");
        assert_eq!(query.as_str(), "query");
        assert_eq!(mutation.as_str(), "mutation");
    }

    #[test]
    fn duplicates_are_ignored() {
        let tag = ModulesToBuild::from_selection(&[ModuleKind::Query, ModuleKind::Query])
            .expect("selection");
        assert_eq!(tag, ModulesToBuild::Query);
    }

    #[test]
    fn empty_selection_fails() {
        let err = ModulesToBuild::from_selection(&[]).unwrap_err();
        assert!(matches!(err, BuildError::NoModulesSelected));
    }

    #[test]
    fn module_kind_parses_case_insensitively() {
        assert_eq!("Query".parse::<ModuleKind>(), Ok(ModuleKind::Query));
        assert_eq!(" mutation ".parse::<ModuleKind>(), Ok(ModuleKind::Mutation));
        assert!("subscription".parse::<ModuleKind>().is_err());
    }
}
