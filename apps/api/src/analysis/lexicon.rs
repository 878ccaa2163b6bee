//! Lexicon: the static tables that drive keyword filtering, categorization and weighting.
//!
//! Built once at startup (`Lexicon::default()`), shared read-only through `AppState`,
//! and passed into every analysis function. Tests build their own tables.

use std::collections::{HashMap, HashSet};

use crate::analysis::categorizer::Category;

const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
    "it", "its", "of", "on", "that", "the", "to", "was", "will", "with", "this", "but", "they",
    "have", "had", "what", "when", "where", "who", "which", "why", "how", "or", "can", "could",
    "should", "would", "may", "might", "must", "shall", "am", "been", "being", "do", "does",
    "did", "doing", "each", "few", "more", "most", "other", "some", "such", "than", "too",
    "very", "we", "you", "your", "our", "their", "his", "her", "my", "me", "him", "them", "us",
    "she", "i",
];

const SKILL_PATTERNS: &[&str] = &[
    // Programming languages
    "javascript", "python", "java", "typescript", "ruby", "php", "swift", "kotlin", "go",
    "rust", "scala", "perl", "bash", "powershell", "sql", "html", "css",
    // Soft skills
    "leadership", "communication", "teamwork", "problem-solving", "analytical", "creative",
    "agile", "scrum", "collaboration", "mentoring", "training",
];

const TECHNOLOGY_PATTERNS: &[&str] = &[
    // Frameworks & libraries
    "react", "angular", "vue", "node", "express", "django", "flask", "spring", "laravel",
    "rails", "nextjs", "gatsby", "svelte", "jquery", "bootstrap",
    // Platforms
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "terraform",
    // Databases
    "mongodb", "postgresql", "mysql", "redis", "elasticsearch", "dynamodb", "firebase",
    "oracle", "sqlserver", "cassandra",
];

const TOOL_PATTERNS: &[&str] = &[
    "git", "github", "gitlab", "bitbucket", "jira", "confluence", "slack", "vscode",
    "intellij", "eclipse", "postman", "figma", "sketch", "photoshop", "webpack", "babel", "npm",
    "yarn", "maven", "gradle", "ansible", "puppet",
];

const ROLE_PATTERNS: &[&str] = &[
    "developer", "engineer", "architect", "manager", "lead", "senior", "junior", "full-stack",
    "frontend", "backend", "devops", "sre", "qa", "tester", "designer", "analyst",
    "consultant", "specialist", "coordinator",
];

/// Short forms that plain containment can never connect to their long form.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("k8s", "kubernetes"),
    ("py", "python"),
];

const GENERAL_WEIGHT: f64 = 0.05;

/// One row of the ordered category table. Row order is significant:
/// the categorizer returns the first row with a matching pattern.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub category: Category,
    pub weight: f64,
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Lexicon {
    pub stopwords: HashSet<String>,
    pub rules: Vec<CategoryRule>,
    /// Applied on top of the named weights, without renormalizing them.
    pub general_weight: f64,
    pub abbreviations: HashMap<String, String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            stopwords: owned_set(STOPWORDS),
            rules: vec![
                rule(Category::Skills, 0.40, SKILL_PATTERNS),
                rule(Category::Technologies, 0.30, TECHNOLOGY_PATTERNS),
                rule(Category::Tools, 0.20, TOOL_PATTERNS),
                rule(Category::Roles, 0.10, ROLE_PATTERNS),
            ],
            general_weight: GENERAL_WEIGHT,
            abbreviations: ABBREVIATIONS
                .iter()
                .map(|(short, long)| (short.to_string(), long.to_string()))
                .collect(),
        }
    }
}

impl Lexicon {
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Weight of a category. `general` uses `general_weight`; a named category
    /// missing from the table weighs nothing.
    pub fn weight(&self, category: Category) -> f64 {
        if category == Category::General {
            return self.general_weight;
        }
        self.rules
            .iter()
            .find(|r| r.category == category)
            .map(|r| r.weight)
            .unwrap_or(0.0)
    }

    /// The long form of an abbreviation, if one is registered.
    pub fn expand(&self, keyword: &str) -> Option<&str> {
        self.abbreviations.get(keyword).map(String::as_str)
    }
}

fn owned_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn rule(category: Category, weight: f64, patterns: &[&str]) -> CategoryRule {
    CategoryRule {
        category,
        weight,
        patterns: patterns.iter().map(|p| p.to_string()).collect(),
    }
}
