//! Record projection: selecting fields from a single delimited line.

use crate::error::ConfigError;
use crate::spec::Specification;

/// Immutable settings for projecting records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    delimiter: String,
    require_delimiter: bool,
    spec: Specification,
}

impl Config {
    /// Build a configuration. The delimiter must be non-empty.
    pub fn new(
        delimiter: impl Into<String>,
        require_delimiter: bool,
        spec: Specification,
    ) -> Result<Self, ConfigError> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        Ok(Self {
            delimiter,
            require_delimiter,
            spec,
        })
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn require_delimiter(&self) -> bool {
        self.require_delimiter
    }

    pub fn spec(&self) -> &Specification {
        &self.spec
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: "\t".to_string(),
            require_delimiter: false,
            spec: Specification::default(),
        }
    }
}

/// Outcome of projecting one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// Write this line to the output.
    Emit(String),
    /// The record lacked the delimiter and `require_delimiter` is set.
    Suppressed,
}

impl Projection {
    /// The `(output, emit)` pair; suppressed records yield `("", false)`.
    pub fn into_parts(self) -> (String, bool) {
        match self {
            Projection::Emit(line) => (line, true),
            Projection::Suppressed => (String::new(), false),
        }
    }
}

/// Project `record` according to `config`.
///
/// - With `require_delimiter`, a record without the delimiter is suppressed.
/// - An empty specification passes the record through unchanged.
/// - Otherwise the selected fields are joined with the delimiter, in
///   flattened order. Positions past the last field are dropped, so a
///   record may be emitted as an empty line.
pub fn project(record: &str, config: &Config) -> Projection {
    let delim = config.delimiter.as_str();

    if config.require_delimiter && !record.contains(delim) {
        return Projection::Suppressed;
    }

    if config.spec.is_empty() {
        return Projection::Emit(record.to_string());
    }

    let parts: Vec<&str> = record.split(delim).collect();
    let selected: Vec<&str> = config
        .spec
        .flatten_within(parts.len())
        .into_iter()
        .map(|pos| parts[(pos - 1) as usize])
        .collect();

    Projection::Emit(selected.join(delim))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(delim: &str, require: bool, pairs: Vec<(i64, i64)>) -> Config {
        Config::new(delim, require, Specification::from(pairs)).unwrap()
    }

    #[test]
    fn test_select_first_and_third() {
        let cfg = config("\t", false, vec![(1, 1), (3, 3)]);
        assert_eq!(
            project("a\tb\tc\td", &cfg).into_parts(),
            ("a\tc".to_string(), true)
        );
    }

    #[test]
    fn test_out_of_range_field_dropped() {
        let cfg = config("\t", false, vec![(1, 1), (5, 5)]);
        assert_eq!(project("a\tb", &cfg), Projection::Emit("a".to_string()));
    }

    #[test]
    fn test_only_out_of_range_emits_empty() {
        let cfg = config("\t", false, vec![(7, 9)]);
        assert_eq!(project("a\tb", &cfg), Projection::Emit(String::new()));
    }

    #[test]
    fn test_empty_spec_passes_record_through() {
        let cfg = config("\t", false, vec![]);
        assert_eq!(
            project("a\tb\tc", &cfg),
            Projection::Emit("a\tb\tc".to_string())
        );
    }

    #[test]
    fn test_require_delimiter_suppresses() {
        let cfg = config("\t", true, vec![(1, 1)]);
        assert_eq!(
            project("abc", &cfg).into_parts(),
            (String::new(), false)
        );
    }

    #[test]
    fn test_require_delimiter_without_spec() {
        let cfg = config(",", true, vec![]);
        assert_eq!(project("abc", &cfg), Projection::Suppressed);
        assert_eq!(project("a,bc", &cfg), Projection::Emit("a,bc".to_string()));
    }

    #[test]
    fn test_comma_delimiter() {
        let cfg = config(",", false, vec![(1, 1), (4, 4)]);
        assert_eq!(project("a,b,c,d", &cfg), Projection::Emit("a,d".to_string()));
    }

    #[test]
    fn test_no_delimiter_is_single_field() {
        let cfg = config(",", false, vec![(1, 1), (2, 2)]);
        assert_eq!(project("abc", &cfg), Projection::Emit("abc".to_string()));
    }

    #[test]
    fn test_empty_record() {
        let cfg = config("\t", false, vec![(1, 1)]);
        assert_eq!(project("", &cfg), Projection::Emit(String::new()));
    }

    #[test]
    fn test_consecutive_delimiters_give_empty_fields() {
        let cfg = config(",", false, vec![(2, 3)]);
        assert_eq!(project("a,,c", &cfg), Projection::Emit(",c".to_string()));
    }

    #[test]
    fn test_multichar_delimiter() {
        let cfg = config("::", false, vec![(3, 3), (1, 1)]);
        assert_eq!(
            project("x::y::z", &cfg),
            Projection::Emit("z::x".to_string())
        );
    }

    #[test]
    fn test_overlap_and_order_follow_spec() {
        let cfg = config(",", false, vec![(3, 4), (1, 3)]);
        assert_eq!(
            project("a,b,c,d,e", &cfg),
            Projection::Emit("c,d,a,b".to_string())
        );
    }

    #[test]
    fn test_zero_range_bound_is_ignored() {
        let cfg = config(",", false, vec![(0, 2)]);
        assert_eq!(project("a,b,c", &cfg), Projection::Emit("a,b".to_string()));
    }

    #[test]
    fn test_huge_range_is_cheap() {
        let cfg = config(",", false, vec![(2, i64::MAX)]);
        assert_eq!(project("a,b,c", &cfg), Projection::Emit("b,c".to_string()));
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        assert_eq!(
            Config::new("", false, Specification::default()),
            Err(ConfigError::EmptyDelimiter)
        );
    }

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.delimiter(), "\t");
        assert!(!cfg.require_delimiter());
        assert!(cfg.spec().is_empty());
    }
}
