//! Canned questions and topic suggestions surfaced by the UI.

pub const SAMPLE_QUESTIONS: &[&str] = &[
    "What are renewable resources?",
    "Explain the importance of forests",
    "What is sustainable development?",
    "Types of agriculture in India",
    "What are the factors affecting agriculture?",
];

pub const TOPICS: &[&str] = &[
    "Resources and Development",
    "Forest and Wildlife Resources",
    "Water Resources",
    "Agriculture",
    "Minerals and Energy Resources",
    "Manufacturing Industries",
    "Lifelines of National Economy",
    "Renewable and Non-renewable Resources",
    "Sustainable Development",
    "Conservation of Resources",
    "Types of Agriculture",
    "Major Crops in India",
    "Industrial Development",
    "Transportation and Communication",
    "International Trade",
];
