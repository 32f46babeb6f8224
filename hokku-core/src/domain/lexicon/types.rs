use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: MetadataConfig,
    pub syllables: SyllableConfig,
    pub cutting_words: CuttingWordConfig,
    pub season_words: SeasonWordConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyllableConfig {
    #[serde(default)]
    pub exceptions: HashMap<String, usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuttingWordConfig {
    pub markers: Vec<String>,
}

/// Season words grouped the way haiku almanacs group them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonWordConfig {
    #[serde(default)]
    pub spring: Vec<String>,
    #[serde(default)]
    pub summer: Vec<String>,
    #[serde(default)]
    pub autumn: Vec<String>,
    #[serde(default)]
    pub winter: Vec<String>,
    #[serde(default)]
    pub universal: Vec<String>,
}

/// Season a kigo belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    Universal,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
        Season::Universal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
            Season::Universal => "universal",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SeasonWordConfig {
    /// Words listed under a single season.
    pub fn words(&self, season: Season) -> &[String] {
        match season {
            Season::Spring => &self.spring,
            Season::Summer => &self.summer,
            Season::Autumn => &self.autumn,
            Season::Winter => &self.winter,
            Season::Universal => &self.universal,
        }
    }

    /// All season words in almanac order (spring first, universal last).
    pub fn all_words(&self) -> Vec<String> {
        Season::ALL
            .iter()
            .flat_map(|season| self.words(*season).iter().cloned())
            .collect()
    }

    /// Season under which `word` is listed, if any.
    pub fn season_of(&self, word: &str) -> Option<Season> {
        let lower = word.to_lowercase();
        Season::ALL
            .into_iter()
            .find(|season| self.words(*season).iter().any(|w| *w == lower))
    }
}
