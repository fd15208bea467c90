//! Pure, stateless filtering over an in-memory prompt list.

use crate::core::storage::Prompt;

/// Four independent predicates combined with logical AND. Every field left
/// empty or `None` matches all prompts on that predicate.
#[derive(Clone, Debug, Default)]
pub struct PromptFilter {
    /// Case-insensitive substring matched against the title or any tag.
    pub query: String,
    /// Exact category name to match.
    pub category: Option<String>,
    /// When true, only favorites pass.
    pub favorites_only: bool,
    /// Tag that must be case-insensitively equal to at least one prompt tag.
    pub tag: Option<String>,
}

impl PromptFilter {
    /// Whether `prompt` passes every active predicate.
    pub fn matches(&self, prompt: &Prompt) -> bool {
        let q = self.query.to_lowercase();
        let text_ok = q.is_empty()
            || prompt.title.to_lowercase().contains(&q)
            || prompt.tags.iter().any(|t| t.to_lowercase().contains(&q));

        let category_ok = match &self.category {
            Some(c) => prompt.category == *c,
            None => true,
        };

        let favorite_ok = !self.favorites_only || prompt.is_favorite;

        let tag_ok = match &self.tag {
            Some(t) => {
                let t = t.to_lowercase();
                prompt.tags.iter().any(|x| x.to_lowercase() == t)
            }
            None => true,
        };

        text_ok && category_ok && favorite_ok && tag_ok
    }
}

/// Returns the prompts passing `filter`, in the order they were given.
/// No I/O and no side effects; the result is always a subset of `prompts`.
pub fn filter_prompts<'a>(prompts: &'a [Prompt], filter: &PromptFilter) -> Vec<&'a Prompt> {
    prompts.iter().filter(|p| filter.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn prompt(title: &str, category: &str, tags: &[&str], favorite: bool) -> Prompt {
        Prompt {
            id: crate::core::utils::random_id(),
            title: title.to_string(),
            content: "Long enough content for the form.".to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            last_modified: Utc::now(),
            is_favorite: favorite,
        }
    }

    fn sample() -> Vec<Prompt> {
        vec![
            prompt("Expert React", "Coding", &["react", "nextjs"], true),
            prompt("Spelling fixes", "Writing", &["correction", "email"], false),
            prompt("Instagram plan", "Marketing", &["instagram", "social"], false),
        ]
    }

    #[test]
    fn empty_filter_excludes_nothing() {
        let prompts = sample();
        let hits = filter_prompts(&prompts, &PromptFilter::default());
        assert_eq!(hits.len(), prompts.len());
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        let prompts = sample();
        let filter = PromptFilter {
            query: "react".to_string(),
            ..Default::default()
        };
        let hits = filter_prompts(&prompts, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Expert React");
    }

    #[test]
    fn query_matches_tags_as_substring() {
        let prompts = sample();
        let filter = PromptFilter {
            query: "next".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_prompts(&prompts, &filter).len(), 1);

        let miss = PromptFilter {
            query: "xyz".to_string(),
            ..Default::default()
        };
        assert!(filter_prompts(&prompts, &miss).is_empty());
    }

    #[test]
    fn category_filter_is_exact_equality() {
        let prompts = sample();
        let filter = PromptFilter {
            category: Some("Coding".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_prompts(&prompts, &filter).len(), 1);

        // Unlike the tag predicate, casing matters here.
        let wrong_case = PromptFilter {
            category: Some("coding".to_string()),
            ..Default::default()
        };
        assert!(filter_prompts(&prompts, &wrong_case).is_empty());
    }

    #[test]
    fn favorites_filter_only_drops_non_favorites() {
        let prompts = sample();
        let filter = PromptFilter {
            favorites_only: true,
            ..Default::default()
        };
        let hits = filter_prompts(&prompts, &filter);
        assert_eq!(hits.len(), 1);
        assert!(hits[0].is_favorite);
    }

    #[test]
    fn tag_filter_requires_whole_tag_equality() {
        let prompts = sample();
        let filter = PromptFilter {
            tag: Some("REACT".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_prompts(&prompts, &filter).len(), 1);

        // "rea" is a substring of a tag but not equal to one.
        let partial = PromptFilter {
            tag: Some("rea".to_string()),
            ..Default::default()
        };
        assert!(filter_prompts(&prompts, &partial).is_empty());
    }

    #[test]
    fn predicates_combine_with_and() {
        let prompts = sample();
        let filter = PromptFilter {
            query: "react".to_string(),
            category: Some("Coding".to_string()),
            favorites_only: true,
            tag: Some("nextjs".to_string()),
        };
        assert_eq!(filter_prompts(&prompts, &filter).len(), 1);

        let conflicting = PromptFilter {
            query: "react".to_string(),
            category: Some("Writing".to_string()),
            ..Default::default()
        };
        assert!(filter_prompts(&prompts, &conflicting).is_empty());
    }

    #[test]
    fn result_preserves_input_order() {
        let prompts = sample();
        let filter = PromptFilter {
            query: "i".to_string(),
            ..Default::default()
        };
        let hits = filter_prompts(&prompts, &filter);
        let titles: Vec<&str> = hits.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Spelling fixes", "Instagram plan"]);
    }
}
