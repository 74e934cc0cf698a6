use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PerformanceAnalysis {
    pub strong_areas: Vec<String>,
    pub weak_areas: Vec<String>,
    pub feedback: String,
}

impl PerformanceAnalysis {
    /// Drops repeated topics, keeping the first occurrence of each.
    pub fn dedup_topics(mut self) -> Self {
        dedup_in_order(&mut self.strong_areas);
        dedup_in_order(&mut self.weak_areas);
        self
    }
}

fn dedup_in_order(topics: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    topics.retain(|topic| seen.insert(topic.clone()));
}
