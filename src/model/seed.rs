use crate::model::entity::{Module, ModuleKind, ModuleStatus, PaymentType};

/// The fixed learning path every new session starts with. Only the first
/// module is open.
pub fn seed_modules() -> Vec<Module> {
    vec![
        Module::new(
            "m1",
            "Introduction to AI: core concepts",
            "What artificial intelligence is, its history and where it is used today.",
            ModuleKind::Video,
            PaymentType::Free,
            15,
        )
        .with_status(ModuleStatus::Available)
        .with_content_link("/modules/introduction"),
        Module::new(
            "m2",
            "Kinds of AI and what they can do",
            "Narrow vs. general AI, machine learning, neural networks and more.",
            ModuleKind::Reading,
            PaymentType::Free,
            25,
        )
        .with_content_link("/modules/kinds-of-ai"),
        Module::new(
            "m3",
            "Everyday AI tools for professionals",
            "Hands-on tour of practical AI tools for your field.",
            ModuleKind::Exercise,
            PaymentType::Free,
            40,
        )
        .with_content_link("/modules/tools"),
        Module::new(
            "m4",
            "Advanced: AI applications in your industry",
            "How AI is reshaping your specific sector.",
            ModuleKind::Video,
            PaymentType::Paid,
            60,
        )
        .with_content_link("/modules/industry-applications"),
        Module::new(
            "m5",
            "Practical project: building AI solutions",
            "Build your own AI project for a real problem in your field.",
            ModuleKind::Exercise,
            PaymentType::Paid,
            120,
        )
        .with_content_link("/modules/project"),
    ]
}
