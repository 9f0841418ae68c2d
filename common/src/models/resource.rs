//! Resource models.

/// Kind of resource exposed by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A base table, addressed as `/{name}`.
    #[default]
    Table,
    /// A view, addressed as `/view/{name}`.
    View,
}

impl ResourceKind {
    /// Returns the lower-case label used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Table => "table",
            ResourceKind::View => "view",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        assert_eq!(ResourceKind::default(), ResourceKind::Table);
        assert_eq!(ResourceKind::View.to_string(), "view");
    }
}
