use std::collections::BTreeMap;

use serde::Serialize;

use crate::analysis::lexicon::Lexicon;

/// Keyword category. Declaration order is the display and iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Skills,
    Technologies,
    Tools,
    Roles,
    General,
}

impl Category {
    /// Categories carrying a fixed weight, in scoring order.
    pub const WEIGHTED: [Category; 4] = [
        Category::Skills,
        Category::Technologies,
        Category::Tools,
        Category::Roles,
    ];

    pub const ALL: [Category; 5] = [
        Category::Skills,
        Category::Technologies,
        Category::Tools,
        Category::Roles,
        Category::General,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Skills => "Skills",
            Category::Technologies => "Technologies",
            Category::Tools => "Tools",
            Category::Roles => "Job Roles",
            Category::General => "Other Keywords",
        }
    }
}

/// Keywords grouped by category. Every category is present, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorizedKeywords(BTreeMap<Category, Vec<String>>);

impl CategorizedKeywords {
    pub fn get(&self, category: Category) -> &[String] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, category: Category) -> usize {
        self.get(category).len()
    }
}

/// Returns the first category (in lexicon order) with a pattern that contains the
/// keyword or is contained by it; `General` when nothing matches.
///
/// The test is loose: "java" is caught by the "javascript" pattern,
/// and "javascript" by the "java" pattern.
pub fn categorize_keyword(keyword: &str, lexicon: &Lexicon) -> Category {
    let keyword = keyword.to_lowercase();
    if keyword.is_empty() {
        return Category::General;
    }
    lexicon
        .rules
        .iter()
        .find(|rule| {
            rule.patterns
                .iter()
                .any(|p| keyword.contains(p.as_str()) || p.contains(keyword.as_str()))
        })
        .map(|rule| rule.category)
        .unwrap_or(Category::General)
}

pub fn categorize_keywords<S: AsRef<str>>(
    keywords: &[S],
    lexicon: &Lexicon,
) -> CategorizedKeywords {
    let mut grouped: BTreeMap<Category, Vec<String>> =
        Category::ALL.iter().map(|c| (*c, Vec::new())).collect();
    for keyword in keywords {
        let keyword = keyword.as_ref();
        grouped
            .entry(categorize_keyword(keyword, lexicon))
            .or_default()
            .push(keyword.to_string());
    }
    CategorizedKeywords(grouped)
}
