use std::fmt;

/// A deployment environment that receives timestamped tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Development,
    Staging,
    Regression,
}

impl Environment {
    /// All environments, in publish order
    pub const ALL: [Environment; 3] = [
        Environment::Development,
        Environment::Staging,
        Environment::Regression,
    ];

    /// Built-in tag name prefix for this environment
    pub fn prefix(&self) -> &'static str {
        match self {
            Environment::Development => "develop",
            Environment::Staging => "staging",
            Environment::Regression => "regress",
        }
    }

    /// Human-readable environment name
    pub fn label(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Regression => "regression",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(Environment::Development.prefix(), "develop");
        assert_eq!(Environment::Staging.prefix(), "staging");
        assert_eq!(Environment::Regression.prefix(), "regress");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Environment::Development.label(), "development");
        assert_eq!(Environment::Staging.label(), "staging");
        assert_eq!(Environment::Regression.label(), "regression");
    }

    #[test]
    fn test_publish_order() {
        assert_eq!(
            Environment::ALL,
            [
                Environment::Development,
                Environment::Staging,
                Environment::Regression,
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Environment::Development.to_string(), "development");
    }
}
