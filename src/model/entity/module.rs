use serde::{Deserialize, Serialize};

use crate::model::repo::ResourceTyped;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    Video,
    Reading,
    Exercise,
}

/// Lock state of a module. Ordering follows the forward direction
/// `locked < available < completed`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    Locked,
    Available,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Free,
    Paid,
}

impl std::fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Locked => write!(f, "locked"),
            Self::Available => write!(f, "available"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Module {
    id: String,
    title: String,
    description: String,
    #[serde(rename = "type")]
    kind: ModuleKind,
    status: ModuleStatus,
    payment_type: PaymentType,
    duration_minutes: u32,
    content_link: Option<String>,
}

impl ResourceTyped for Module {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Module
    }
}

impl Module {
    /// New modules start locked; the tracker decides which one is available.
    pub fn new<S: Into<String>>(
        id: S,
        title: S,
        description: S,
        kind: ModuleKind,
        payment_type: PaymentType,
        duration_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            kind,
            status: ModuleStatus::Locked,
            payment_type,
            duration_minutes,
            content_link: None,
        }
    }

    pub fn with_status(mut self, status: ModuleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_content_link<S: Into<String>>(mut self, link: S) -> Self {
        self.content_link = Some(link.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    pub fn status(&self) -> ModuleStatus {
        self.status
    }

    pub fn payment_type(&self) -> PaymentType {
        self.payment_type
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn content_link(&self) -> Option<&str> {
        self.content_link.as_deref()
    }

    /// Content can be opened once the module is available or completed.
    pub fn is_accessible(&self) -> bool {
        matches!(
            self.status,
            ModuleStatus::Available | ModuleStatus::Completed
        )
    }

    /// Paid modules must go through payment confirmation before they can be
    /// completed.
    pub fn requires_payment(&self) -> bool {
        self.payment_type == PaymentType::Paid && self.status != ModuleStatus::Completed
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn module(payment_type: PaymentType, status: ModuleStatus) -> Module {
        Module::new("m", "title", "desc", ModuleKind::Video, payment_type, 10).with_status(status)
    }

    #[test]
    fn accessibility_follows_status() {
        assert!(!module(PaymentType::Free, ModuleStatus::Locked).is_accessible());
        assert!(module(PaymentType::Free, ModuleStatus::Available).is_accessible());
        assert!(module(PaymentType::Paid, ModuleStatus::Completed).is_accessible());
    }

    #[test]
    fn payment_required_only_for_unfinished_paid_modules() {
        assert!(module(PaymentType::Paid, ModuleStatus::Locked).requires_payment());
        assert!(module(PaymentType::Paid, ModuleStatus::Available).requires_payment());
        assert!(!module(PaymentType::Paid, ModuleStatus::Completed).requires_payment());
        assert!(!module(PaymentType::Free, ModuleStatus::Available).requires_payment());
    }

    #[test]
    fn serializes_kind_as_type() {
        let json = serde_json::to_value(module(PaymentType::Free, ModuleStatus::Available)).unwrap();
        assert_eq!(json["type"], "video");
        assert_eq!(json["status"], "available");
        assert_eq!(json["payment_type"], "free");
    }
}
