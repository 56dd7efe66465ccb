#[derive(Debug, Clone)]
pub enum ResourceType {
    Session,
    Diagnostic,
    Module,
    Plan,
    Payment,
    Project,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Session => write!(f, "session"),
            Self::Diagnostic => write!(f, "diagnostic"),
            Self::Module => write!(f, "module"),
            Self::Plan => write!(f, "plan"),
            Self::Payment => write!(f, "payment"),
            Self::Project => write!(f, "project"),
        }
    }
}

pub trait ResourceTyped {
    fn get_resource_type() -> ResourceType;
}
