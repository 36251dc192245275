//! Manual word-list input parsing.

/// Parse raw user input into new playable words.
///
/// Entries are split on commas and newlines, uppercased, and stripped of
/// whitespace. Entries shorter than two letters, entries containing
/// anything but ASCII letters, and duplicates (against `existing` or
/// within the batch) are silently dropped rather than reported as errors.
pub fn parse_words(input: &str, existing: &[String]) -> Vec<String> {
    let mut added: Vec<String> = Vec::new();

    for raw in input.split([',', '\n']) {
        let word: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        if word.chars().count() < 2 {
            continue;
        }
        if !word.chars().all(|c| c.is_ascii_alphabetic()) {
            continue;
        }
        if existing.contains(&word) || added.contains(&word) {
            continue;
        }

        added.push(word);
    }

    added
}
