use std::fmt;

/// Second-level grouping nested under a category. Names are not unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subcategory {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubcategory {
    pub name: String,
    pub category_id: i64,
    pub color: String,
}

impl NewSubcategory {
    pub fn new(name: &str, category_id: i64, color: &str) -> Self {
        NewSubcategory {
            name: name.to_string(),
            category_id,
            color: color.to_string(),
        }
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}
