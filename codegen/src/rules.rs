//! Search-engine rich-result field rules.
//!
//! A fixed table of properties that Google requires or recommends for
//! particular types. Purely data driven: the table is keyed by exact class
//! name and never consults the graph.

use std::collections::BTreeSet;

struct FieldRule {
    required: &'static [&'static str],
    recommended: &'static [&'static str],
}

const THING: FieldRule = FieldRule {
    required: &["name", "description"],
    recommended: &["url", "image"],
};

const ARTICLE: FieldRule = FieldRule {
    required: &["author", "datePublished", "headline", "image", "publisher"],
    recommended: &["dateModified", "mainEntityOfPage"],
};

const SOCIAL_MEDIA_POSTING: FieldRule = FieldRule {
    required: &["datePublished", "headline", "image"],
    recommended: &[],
};

const LIVE_BLOG_POSTING: FieldRule = FieldRule {
    required: &[],
    recommended: &["coverageEndTime", "coverageStartTime"],
};

fn rule_for(class_name: &str) -> Option<&'static FieldRule> {
    match class_name {
        "Thing" => Some(&THING),
        "Article" | "NewsArticle" | "BlogPosting" => Some(&ARTICLE),
        "SocialMediaPosting" => Some(&SOCIAL_MEDIA_POSTING),
        "LiveBlogPosting" => Some(&LIVE_BLOG_POSTING),
        _ => None,
    }
}

/// Required and recommended property handles, sorted and de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoogleFields {
    /// Handles Google requires.
    pub required: Vec<String>,
    /// Handles Google recommends.
    pub recommended: Vec<String>,
}

/// Unions the rules of every class in `ancestors` (self included).
///
/// Classes absent from the table contribute nothing.
pub fn google_fields<I, S>(ancestors: I) -> GoogleFields
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut required = BTreeSet::new();
    let mut recommended = BTreeSet::new();
    for name in ancestors {
        if let Some(rule) = rule_for(name.as_ref()) {
            required.extend(rule.required.iter().map(|s| s.to_string()));
            recommended.extend(rule.recommended.iter().map(|s| s.to_string()));
        }
    }
    GoogleFields {
        required: required.into_iter().collect(),
        recommended: recommended.into_iter().collect(),
    }
}
