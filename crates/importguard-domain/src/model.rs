use importguard_types::{DeclaredDependency, ParsedImport};

/// Everything the collectors observed for one analysis run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuditInput {
    pub imports: Vec<ParsedImport>,
    pub dependencies: Vec<DeclaredDependency>,
}

impl AuditInput {
    pub fn new(imports: Vec<ParsedImport>, dependencies: Vec<DeclaredDependency>) -> Self {
        Self {
            imports,
            dependencies,
        }
    }
}
