//! Commit classification.
//!
//! Raw commit subjects are grouped by their leading `<category>:` prefix.
//! Subjects without a prefix that mention a version number (release bumps
//! such as `0.19.0` or `Changelog 0.19.0`) go to the hidden
//! [`IGNORED_CATEGORY`]; everything else goes to [`OTHERS_CATEGORY`].

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

/// Category holding version bump commits. Never rendered.
pub const IGNORED_CATEGORY: &str = "Ignore";

/// Catch-all category. Lower case so it sorts after capitalized categories.
pub const OTHERS_CATEGORY: &str = "others";

static CATEGORY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:]+):").expect("invalid regex"));

static VERSION_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(\.[0-9]+)+").expect("invalid regex"));

/// Commit messages to leave out of the changelog.
///
/// Matching is case-insensitive and ignores surrounding whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    entries: HashSet<String>,
}

impl IgnoreSet {
    /// Parses a comma-separated list such as `"wip, hideable commit"`.
    ///
    /// Blank entries are dropped, so a trailing comma (`"wip,"`) never hides
    /// commits with an empty subject.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        list.split(',').collect()
    }

    /// Returns true if the commit message is in the set.
    #[must_use]
    pub fn contains(&self, commit: &str) -> bool {
        self.entries.contains(&normalize(commit))
    }

    /// Returns true if the set has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<S: AsRef<str>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|entry| normalize(entry.as_ref()))
            .filter(|entry| !entry.is_empty())
            .collect();
        Self { entries }
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Commits grouped by category.
///
/// Categories iterate in case-sensitive ordinal order, so `"CSS"` comes
/// before `"Core"` and every capitalized category before `"others"`.
/// Within a category, commits keep the order they were classified in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    categories: BTreeMap<String, Vec<String>>,
}

impl Classification {
    /// Returns the commits of a category.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Iterates over every category, including hidden and empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(category, commits)| (category.as_str(), commits.as_slice()))
    }

    /// Iterates over the categories that belong in rendered output.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.iter()
            .filter(|(category, commits)| *category != IGNORED_CATEGORY && !commits.is_empty())
    }

    /// Returns the number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if no commit was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Upper-cases the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Groups commit subjects by category.
///
/// A category entry is created for every commit seen, even when the commit
/// itself is then dropped by `ignore`, so a category can end up empty.
pub fn classify<S: AsRef<str>>(commits: &[S], ignore: Option<&IgnoreSet>) -> Classification {
    let mut categories: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for commit in commits {
        let (category, text) = split_category(commit.as_ref());
        let entries = categories.entry(category).or_default();

        let text = text.trim();
        if ignore.is_some_and(|set| set.contains(text)) {
            continue;
        }

        entries.push(capitalize(text));
    }

    Classification { categories }
}

fn split_category(commit: &str) -> (String, &str) {
    if let Some(captures) = CATEGORY_PREFIX.captures(commit) {
        let prefix = &captures[1];
        // The prefix plus its colon
        let rest = &commit[prefix.len() + 1..];
        return (capitalize(prefix), rest);
    }

    if VERSION_NUMBER.is_match(commit) {
        return (IGNORED_CATEGORY.to_string(), commit);
    }

    (OTHERS_CATEGORY.to_string(), commit)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMITS: [&str; 7] = [
        "core: Implement global event bus",
        "CSS: IE11 issue",
        "Event: Remove an internal argument",
        "Core: minor tweeks",
        "Another commit",
        "0.19.0",
        "hideable commit",
    ];

    fn categories(classification: &Classification) -> Vec<&str> {
        classification.iter().map(|(category, _)| category).collect()
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("minor tweeks"), "Minor tweeks");
        assert_eq!(capitalize("already Upper"), "Already Upper");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
    }

    #[test]
    fn test_capitalize_only_first_character() {
        assert_eq!(capitalize("css"), "Css");
        assert_eq!(capitalize("bREAKING change"), "BREAKING change");
    }

    #[test]
    fn test_prefix_sets_category() {
        let result = classify(&["fix: handle empty input"], None);
        assert_eq!(result.get("Fix"), Some(&["Handle empty input".to_string()][..]));
    }

    #[test]
    fn test_multi_word_prefix() {
        let result = classify(&["build system: bump toolchain"], None);
        assert_eq!(
            result.get("Build system"),
            Some(&["Bump toolchain".to_string()][..])
        );
    }

    #[test]
    fn test_version_number_goes_to_ignore() {
        let result = classify(&["0.19.0", "Changelog 0.19.0", "0.19.0 Changelog"], None);
        assert_eq!(categories(&result), vec![IGNORED_CATEGORY]);
        assert_eq!(result.get(IGNORED_CATEGORY).unwrap().len(), 3);
    }

    #[test]
    fn test_single_number_is_not_a_version() {
        let result = classify(&["Fix issue 42"], None);
        assert_eq!(categories(&result), vec![OTHERS_CATEGORY]);
    }

    #[test]
    fn test_prefix_wins_over_version_number() {
        let result = classify(&["release: 1.2.3"], None);
        assert_eq!(result.get("Release"), Some(&["1.2.3".to_string()][..]));
        assert!(result.get(IGNORED_CATEGORY).is_none());
    }

    #[test]
    fn test_unprefixed_goes_to_others() {
        let result = classify(&["another commit"], None);
        assert_eq!(
            result.get(OTHERS_CATEGORY),
            Some(&["Another commit".to_string()][..])
        );
    }

    #[test]
    fn test_leading_colon_is_not_a_prefix() {
        let result = classify(&[": nothing before the colon"], None);
        assert_eq!(categories(&result), vec![OTHERS_CATEGORY]);
    }

    #[test]
    fn test_empty_commit_is_kept() {
        let result = classify(&[""], None);
        assert_eq!(result.get(OTHERS_CATEGORY), Some(&[String::new()][..]));
    }

    #[test]
    fn test_insertion_order_within_category() {
        let result = classify(&COMMITS, None);
        assert_eq!(
            result.get("Core").unwrap(),
            &["Implement global event bus", "Minor tweeks"]
        );
    }

    #[test]
    fn test_every_commit_lands_in_one_category() {
        let result = classify(&COMMITS, None);
        let total: usize = result.iter().map(|(_, commits)| commits.len()).sum();
        assert_eq!(total, COMMITS.len());
    }

    #[test]
    fn test_category_order_is_ordinal() {
        let result = classify(&COMMITS, None);
        assert_eq!(
            categories(&result),
            vec!["CSS", "Core", "Event", IGNORED_CATEGORY, OTHERS_CATEGORY]
        );
    }

    #[test]
    fn test_ignore_list_drops_commit() {
        let ignore = IgnoreSet::parse("hideable commit");
        let result = classify(&COMMITS, Some(&ignore));
        assert_eq!(
            result.get(OTHERS_CATEGORY).unwrap(),
            &["Another commit".to_string()]
        );
    }

    #[test]
    fn test_ignore_list_is_case_insensitive_and_trimmed() {
        let ignore = IgnoreSet::parse("  HIDEABLE Commit ,wip");
        assert_eq!(ignore.len(), 2);
        assert!(ignore.contains("hideable commit"));
        assert!(ignore.contains(" WIP "));
        assert!(!ignore.contains("hideable"));
    }

    #[test]
    fn test_ignore_list_skips_blank_entries() {
        let ignore = IgnoreSet::parse(" , ,");
        assert!(ignore.is_empty());
        assert!(!ignore.contains(""));
    }

    #[test]
    fn test_trailing_comma_keeps_empty_subject() {
        let ignore = IgnoreSet::parse("another commit,");
        let result = classify(&["", "Another commit"], Some(&ignore));
        assert_eq!(result.get(OTHERS_CATEGORY), Some(&[String::new()][..]));
    }

    #[test]
    fn test_ignore_matches_after_prefix_strip() {
        let ignore = IgnoreSet::parse("tweak");
        let result = classify(&["style: tweak", "style: reflow"], Some(&ignore));
        assert_eq!(result.get("Style").unwrap(), &["Reflow".to_string()]);
    }

    #[test]
    fn test_ignored_commit_leaves_empty_category() {
        let ignore = IgnoreSet::parse("tweak");
        let result = classify(&["style: tweak"], Some(&ignore));
        assert_eq!(result.get("Style"), Some(&[][..]));
        assert_eq!(result.sections().count(), 0);
    }

    #[test]
    fn test_sections_skip_hidden_and_empty() {
        let ignore = IgnoreSet::parse("hideable commit,css: ie11 issue,ie11 issue");
        let result = classify(&COMMITS, Some(&ignore));
        let sections: Vec<&str> = result.sections().map(|(category, _)| category).collect();
        assert_eq!(sections, vec!["Core", "Event", OTHERS_CATEGORY]);
    }

    #[test]
    fn test_ignore_set_from_iterator() {
        let ignore: IgnoreSet = ["WIP", "  fixup  "].into_iter().collect();
        assert!(ignore.contains("wip"));
        assert!(ignore.contains("Fixup"));
    }
}
