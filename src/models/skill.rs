use serde::{Deserialize, Serialize};

use crate::filter::Searchable;

/// A skill shown on the home page, grouped by [`SkillCategory`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    /// Self-assessed proficiency, 1 to 5.
    pub level: u8,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Languages,
    MachineLearning,
    Web,
    Infrastructure,
    Tools,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Languages => "Languages",
            Self::MachineLearning => "Machine Learning",
            Self::Web => "Web",
            Self::Infrastructure => "Infrastructure",
            Self::Tools => "Tools",
        }
    }
}

impl Searchable for Skill {
    fn title(&self) -> &str {
        &self.name
    }

    fn summary(&self) -> &str {
        self.category.as_str()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}
