//! Naming conventions used to recognize property accessors.

/// Configuration of accessor recognition
///
/// The defaults describe the classic bean conventions: `get`/`set` prefixes on public
/// methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorConfig {
    /// Prefix of getter names (default: `get`)
    pub getter_prefix: &'static str,

    /// Prefix of setter names (default: `set`)
    pub setter_prefix: &'static str,

    /// Only public methods qualify as accessors (default: true)
    pub require_public: bool,
}

impl Default for AccessorConfig {
    fn default() -> Self {
        Self {
            getter_prefix: "get",
            setter_prefix: "set",
            require_public: true,
        }
    }
}

impl AccessorConfig {
    /// The bean conventions, identical to `AccessorConfig::default()`
    #[must_use]
    pub fn beans() -> Self {
        Self::default()
    }

    /// Bean prefixes, but accessors of any visibility are recognized
    ///
    /// Useful for models whose accessors are package-private or protected.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            require_public: false,
            ..Self::default()
        }
    }

    /// Use custom prefixes
    ///
    /// ## Arguments
    /// * 'getter_prefix' - Prefix of getter names
    /// * 'setter_prefix' - Prefix of setter names
    #[must_use]
    pub fn with_prefixes(getter_prefix: &'static str, setter_prefix: &'static str) -> Self {
        Self {
            getter_prefix,
            setter_prefix,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_config_presets() {
        let beans = AccessorConfig::beans();
        assert_eq!(beans.getter_prefix, "get");
        assert_eq!(beans.setter_prefix, "set");
        assert!(beans.require_public);

        let lenient = AccessorConfig::lenient();
        assert_eq!(lenient.getter_prefix, "get");
        assert!(!lenient.require_public);

        let custom = AccessorConfig::with_prefixes("read", "write");
        assert_eq!(custom.getter_prefix, "read");
        assert_eq!(custom.setter_prefix, "write");
        assert!(custom.require_public);
    }

    #[test]
    fn test_default_config() {
        assert_eq!(AccessorConfig::default(), AccessorConfig::beans());
    }
}
