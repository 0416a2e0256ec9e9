use std::fmt;

/// Top-level grouping for appointments (e.g. personal, professional).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub color: String,
}

/// A category that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
}

impl NewCategory {
    pub fn new(name: &str, color: &str) -> Self {
        NewCategory {
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}
