use crate::artifacts::errors::{FsnapError, FsnapResult};
use crate::artifacts::filter::DEFAULT_INCLUDE;
use derive_new::new;
use regex::{Regex, RegexBuilder};

/// Raw include/exclude patterns as supplied by the user
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FilterSpec {
    pub include: String,
    pub exclude: Option<String>,
}

impl Default for FilterSpec {
    fn default() -> Self {
        FilterSpec::new(DEFAULT_INCLUDE.to_string(), None)
    }
}

/// Compiled form of a [`FilterSpec`]
#[derive(Debug, Clone)]
pub struct PathFilter {
    include: Regex,
    exclude: Option<Regex>,
}

impl PathFilter {
    pub fn compile(spec: &FilterSpec) -> FsnapResult<Self> {
        let include = Self::build("include", &spec.include)?;
        let exclude = spec
            .exclude
            .as_deref()
            .map(|pattern| Self::build("exclude", pattern))
            .transpose()?;

        Ok(PathFilter { include, exclude })
    }

    fn build(role: &'static str, pattern: &str) -> FsnapResult<Regex> {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| FsnapError::Configuration {
                role,
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn accepts(&self, path: &str) -> bool {
        self.include.is_match(path)
            && !self
                .exclude
                .as_ref()
                .is_some_and(|exclude| exclude.is_match(path))
    }
}
