use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Closed set of figure lines the catalog is partitioned by.
///
/// Each variant maps a display label to the canonical key the server
/// stores in `categoria`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    MythCloth,
    MythClothEx,
    SaintClothLegend,
    SaintClothCrown,
    DdPanoramation,
    #[default]
    Otros,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::MythCloth,
        Category::MythClothEx,
        Category::SaintClothLegend,
        Category::SaintClothCrown,
        Category::DdPanoramation,
        Category::Otros,
    ];

    /// Canonical storage key sent to and received from the server.
    pub fn key(self) -> &'static str {
        match self {
            Category::MythCloth => "myth cloth",
            Category::MythClothEx => "myth cloth ex",
            Category::SaintClothLegend => "saint cloth legend",
            Category::SaintClothCrown => "saint cloth crown",
            Category::DdPanoramation => "dd panoramation",
            Category::Otros => "otros",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::MythCloth => "Myth Cloth",
            Category::MythClothEx => "Myth Cloth EX",
            Category::SaintClothLegend => "Saint Cloth Legend",
            Category::SaintClothCrown => "Saint Cloth Crown",
            Category::DdPanoramation => "DD Panoramation",
            Category::Otros => "Otros",
        }
    }

    /// Look up a category by storage key, ignoring surrounding whitespace
    /// and ASCII case.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key))
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Next category in display order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous category in display order, wrapping around.
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        let Some(raw) = raw else {
            return Ok(Category::Otros);
        };
        Ok(Category::from_key(&raw).unwrap_or_else(|| {
            tracing::warn!(categoria = %raw, "Unknown category from server, using 'otros'");
            Category::Otros
        }))
    }
}

/// Per-category figure counts as reported by the stats endpoint.
///
/// Keys are kept as the server sent them; lookups go through
/// [`Category::key`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryStats {
    counts: HashMap<String, u64>,
}

impl CategoryStats {
    /// Count for a category, 0 when the server did not mention it.
    pub fn count(&self, category: Category) -> u64 {
        self.counts.get(category.key()).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<(String, u64)> for CategoryStats {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
