mod module;
pub use module::{Module, ModuleKind, ModuleStatus, PaymentType};

mod diagnostic;
pub use diagnostic::{Budget, CareerGoal, DiagnosticProfile, Industry, Skill};

mod payment;
pub use payment::{PaymentMethod, PaymentReceipt, Plan};

mod project;
pub use project::{FinalProject, ProjectStatus, ProjectSubmission};
