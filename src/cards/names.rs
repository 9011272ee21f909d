//! Card-name normalization and similarity.
//!
//! Typed decklists are full of near-misses: missing apostrophes, wrong
//! hyphenation, outdated spellings. These helpers let a catalog find the
//! intended card without guessing wildly.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Known misspellings and their corrections, applied by substring.
pub const NAME_VARIANTS: &[(&str, &str)] = &[
    ("Snake-eye", "Snake-Eyes"),
    ("Harpies'", "Harpie's"),
    ("Magicians'", "Magician's"),
    ("Magisitus", "Magistus"),
    ("Fiendsmith", "Fiendsmith's"),
    ("Rciela Sinister Soul", "Rciela, Sinister Soul"),
];

/// Normalize a name for comparison.
///
/// Lower-cases, strips apostrophes, quotes, commas and hyphens, folds
/// accents, and collapses whitespace.
///
/// ```
/// use ygo_deck::cards::names::normalize_name;
///
/// assert_eq!(normalize_name("Harpie's  Feather-Duster"), "harpies featherduster");
/// ```
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let stripped: String = fold_accents(&name.to_lowercase())
        .chars()
        .filter(|c| !matches!(c, '\'' | '"' | ',' | '-' | '\u{2019}'))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Common variations of a typed name, the original first. No duplicates.
#[must_use]
pub fn name_variations(name: &str) -> Vec<String> {
    let mut variations = vec![
        name.to_string(),
        name.replace('-', " "),
        name.replace("'s", ""),
        name.replace('\'', ""),
    ];

    for (search, replace) in NAME_VARIANTS {
        if name.contains(search) {
            variations.push(name.replace(search, replace));
        }
    }

    let mut seen = Vec::with_capacity(variations.len());
    for variation in variations {
        if !seen.contains(&variation) {
            seen.push(variation);
        }
    }
    seen
}

/// Words ignored when tokenizing names.
pub const STOP_WORDS: &[&str] = &["the", "of", "a", "an", "in", "and", "to", "with", "by", "from"];

/// Shortest token counted as distinctive.
pub const MIN_DISTINCTIVE_LEN: usize = 3;

/// Decompose and drop combining marks: "Sábado" becomes "Sabado".
#[must_use]
pub fn fold_accents(s: &str) -> String {
    s.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Lower-cased, accent-folded words of a name, stop words removed.
///
/// ```
/// use ygo_deck::cards::names::tokens;
///
/// assert_eq!(tokens("Dogmatika Ecclesia, the Virtuous"), vec!["dogmatika", "ecclesia", "virtuous"]);
/// ```
#[must_use]
pub fn tokens(name: &str) -> Vec<String> {
    fold_accents(&name.to_lowercase())
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty() && !STOP_WORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// Tokens of at least `MIN_DISTINCTIVE_LEN` characters, longest first,
/// without repeats.
#[must_use]
pub fn distinctive_tokens(name: &str) -> Vec<String> {
    let mut distinctive: Vec<String> = Vec::new();
    for token in tokens(name) {
        if token.chars().count() >= MIN_DISTINCTIVE_LEN && !distinctive.contains(&token) {
            distinctive.push(token);
        }
    }
    distinctive.sort_by_key(|t| std::cmp::Reverse(t.chars().count()));
    distinctive
}

/// Similarity in [0, 1] between two card names.
///
/// Weighted blend of bigram overlap, edit distance, and edit distance over
/// alphabetically sorted words (so word order matters less).
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let bigram = strsim::sorensen_dice(&a, &b);
    let edit = strsim::normalized_levenshtein(&a, &b);
    let token = strsim::normalized_levenshtein(&sorted_words(&a), &sorted_words(&b));

    bigram * 0.4 + edit * 0.3 + token * 0.3
}

fn sorted_words(s: &str) -> String {
    let mut words: Vec<&str> = s.split_whitespace().collect();
    words.sort_unstable();
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_name("Ash Blossom & Joyous Spring"), "ash blossom & joyous spring");
        assert_eq!(normalize_name("  Maxx \"C\" "), "maxx c");
        assert_eq!(normalize_name("Rciela, Sinister Soul"), "rciela sinister soul");
    }

    #[test]
    fn test_normalize_folds_accents() {
        assert_eq!(normalize_name("Évolution Pill"), "evolution pill");
        assert_eq!(normalize_name("Pokémon"), normalize_name("Pokemon"));
    }

    #[test]
    fn test_tokens() {
        assert_eq!(tokens("Harpie's Feather Duster"), vec!["harpie", "s", "feather", "duster"]);
        assert_eq!(tokens("Ash Blossom & Joyous Spring"), vec!["ash", "blossom", "joyous", "spring"]);
        assert_eq!(tokens("Él Shaddoll Wendigo"), vec!["el", "shaddoll", "wendigo"]);
        assert!(tokens("  - , ").is_empty());
    }

    #[test]
    fn test_distinctive_tokens_longest_first() {
        assert_eq!(distinctive_tokens("Monk of the Tenyi"), vec!["tenyi", "monk"]);
        assert_eq!(distinctive_tokens("Ash Ash Blossom"), vec!["blossom", "ash"]);
        assert!(distinctive_tokens("D.D. Crow").iter().all(|t| t.len() >= 3));
    }

    #[test]
    fn test_variations_include_known_fix() {
        let variations = name_variations("Snake-eye Ash");
        assert_eq!(variations[0], "Snake-eye Ash");
        assert!(variations.contains(&"Snake-Eyes Ash".to_string()));
        assert!(variations.contains(&"Snake eye Ash".to_string()));
    }

    #[test]
    fn test_variations_deduplicated() {
        let variations = name_variations("Kuriboh");
        assert_eq!(variations, vec!["Kuriboh".to_string()]);
    }

    #[test]
    fn test_similarity_bounds() {
        assert!((similarity("Dark Magician", "dark magician") - 1.0).abs() < 1e-9);
        assert!(similarity("Dark Magician", "Dark Magican") > 0.8);
        assert!(similarity("Dark Magician", "Pot of Greed") < 0.5);
        assert!(similarity("", "Kuriboh") >= 0.0);
    }

    #[test]
    fn test_similarity_word_order() {
        let swapped = similarity("Dragon Stardust", "Stardust Dragon");
        let unrelated = similarity("Dragon Stardust", "Mirror Force");
        assert!(swapped > unrelated);
    }
}
