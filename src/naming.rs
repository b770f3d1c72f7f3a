//! Identifier decomposition and word casing.
//!
//! Identifiers are split into words at upper-case boundaries and then re-cased so
//! they can be dropped into generated prose.

/// Splits an identifier into words.
///
/// A new word starts at every upper-case character that follows a non-empty pending
/// word. Runs of capitals therefore produce one word per capital (`XMLParser` yields
/// `X`, `M`, `L`, `Parser`). The trailing word is always emitted, so the result is never
/// empty.
///
/// # Arguments
///
/// * `name` - The identifier to split
///
/// # Returns
///
/// The words in source order. Concatenating them reproduces `name`.
pub fn split(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for c in name.chars() {
        if c.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
    }

    words.push(current);
    words
}

/// Re-cases split words.
///
/// Every word but the first is lower-cased. The first word is lower-cased only when
/// `first_word_lowercase` is set. When `skip_leading_single_char` is set and the first
/// word is a single character it is dropped altogether.
pub fn normalize_words(
    words: &[String],
    first_word_lowercase: bool,
    skip_leading_single_char: bool,
) -> Vec<String> {
    words
        .iter()
        .enumerate()
        .filter(|(i, word)| {
            !(skip_leading_single_char && *i == 0 && word.chars().count() == 1)
        })
        .map(|(i, word)| {
            if i == 0 && !first_word_lowercase {
                word.clone()
            } else {
                word.to_lowercase()
            }
        })
        .collect()
}

/// Re-cases split words and joins them with single spaces.
///
/// See [`normalize_words`] for the casing rules.
pub fn normalize(
    words: &[String],
    first_word_lowercase: bool,
    skip_leading_single_char: bool,
) -> String {
    normalize_words(words, first_word_lowercase, skip_leading_single_char).join(" ")
}

/// Splits `name` and normalizes the result in one step.
pub fn phrase(name: &str, first_word_lowercase: bool) -> String {
    normalize(&split(name), first_word_lowercase, false)
}

const UNINFLECTED: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would", "is", "has",
    "does", "was", "are", "were",
];

/// Leading words of method names that are not verbs (`ToArray`, `OnClick`, `Main`).
const NON_VERBS: &[&str] = &[
    "to", "on", "as", "from", "with", "without", "for", "by", "in", "into", "of", "at", "if",
    "or", "and", "not", "before", "after", "when", "while", "main", "async", "all", "any",
    "each", "new", "default", "inner", "base", "this", "self", "op",
];

const IRREGULAR: &[(&str, &str)] = &[("be", "is"), ("have", "has"), ("do", "does"), ("go", "goes")];

/// Turns a leading verb into its third-person singular form (`Get` → `Gets`).
///
/// Only plain capitalized or lower-case words are inflected; acronyms, single letters,
/// non-alphabetic words and common non-verb prefixes such as `To` or `On` come back
/// unchanged. The first letter keeps its original case.
pub fn third_person(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest: String = chars.collect();

    if rest.is_empty()
        || !word.chars().all(char::is_alphabetic)
        || rest.chars().any(char::is_uppercase)
    {
        return word.to_string();
    }

    let lower = word.to_lowercase();
    if UNINFLECTED.contains(&lower.as_str()) || NON_VERBS.contains(&lower.as_str()) {
        return word.to_string();
    }

    let inflected = if let Some((_, form)) = IRREGULAR.iter().find(|(base, _)| *base == lower) {
        form.to_string()
    } else if lower.ends_with("ss")
        || lower.ends_with("sh")
        || lower.ends_with("ch")
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with('o')
    {
        format!("{}es", lower)
    } else if lower.ends_with('s') {
        lower
    } else if lower.ends_with('y') && !ends_with_vowel_y(&lower) {
        format!("{}ies", &lower[..lower.len() - 1])
    } else {
        format!("{}s", lower)
    };

    let mut result = String::with_capacity(inflected.len());
    let mut inflected_chars = inflected.chars();
    if let Some(c) = inflected_chars.next() {
        if first.is_uppercase() {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
    }
    result.extend(inflected_chars);
    result
}

fn ends_with_vowel_y(word: &str) -> bool {
    let mut tail = word.chars().rev().skip(1);
    matches!(tail.next(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_split_camel_case() {
        assert_eq!(split("GetValue"), words(&["Get", "Value"]));
        assert_eq!(split("isEnabled"), words(&["is", "Enabled"]));
    }

    #[test]
    fn test_split_single_lower_word() {
        assert_eq!(split("value"), words(&["value"]));
    }

    #[test]
    fn test_split_single_character() {
        assert_eq!(split("T"), words(&["T"]));
        assert_eq!(split("x"), words(&["x"]));
    }

    #[test]
    fn test_split_consecutive_capitals() {
        // Each capital follows a non-empty buffer, so each starts a word.
        assert_eq!(split("XMLParser"), words(&["X", "M", "L", "Parser"]));
        assert_eq!(split("TKey"), words(&["T", "Key"]));
    }

    #[test]
    fn test_split_digits_and_underscores_stay_attached() {
        assert_eq!(split("get_Value2Now"), words(&["get_", "Value2", "Now"]));
    }

    #[test]
    fn test_split_reconstructs_identifier() {
        let names = ["GetValue", "XMLParser", "a", "IEnumerableOfT", "snake_case", "ÄpfelBirnen"];
        for name in names {
            assert_eq!(split(name).concat(), name);
        }
    }

    #[test]
    fn test_normalize_keeps_first_word_casing() {
        assert_eq!(normalize(&split("GetValue"), false, false), "Get value");
        assert_eq!(normalize(&split("XMLParser"), false, false), "X m l parser");
    }

    #[test]
    fn test_normalize_lowercases_first_word() {
        assert_eq!(normalize(&split("IsEnabled"), true, false), "is enabled");
    }

    #[test]
    fn test_normalize_skips_leading_single_char() {
        assert_eq!(normalize(&split("TKey"), true, true), "key");
        assert_eq!(normalize(&split("IFooBar"), true, true), "foo bar");
        // Only a single-character first word is dropped.
        assert_eq!(normalize(&split("KeyT"), true, true), "key t");
        assert_eq!(normalize(&split("T"), true, true), "");
    }

    #[test]
    fn test_third_person_regular_verbs() {
        assert_eq!(third_person("Get"), "Gets");
        assert_eq!(third_person("Process"), "Processes");
        assert_eq!(third_person("Push"), "Pushes");
        assert_eq!(third_person("Fix"), "Fixes");
        assert_eq!(third_person("Try"), "Tries");
        assert_eq!(third_person("Play"), "Plays");
        assert_eq!(third_person("load"), "loads");
    }

    #[test]
    fn test_third_person_irregular_and_modal_verbs() {
        assert_eq!(third_person("Do"), "Does");
        assert_eq!(third_person("Have"), "Has");
        assert_eq!(third_person("Is"), "Is");
        assert_eq!(third_person("Can"), "Can");
        assert_eq!(third_person("Contains"), "Contains");
    }

    #[test]
    fn test_third_person_leaves_non_verbs_alone() {
        assert_eq!(third_person("To"), "To");
        assert_eq!(third_person("On"), "On");
        assert_eq!(third_person("From"), "From");
        assert_eq!(third_person("Main"), "Main");
        assert_eq!(third_person("as"), "as");
    }

    #[test]
    fn test_third_person_leaves_acronyms_alone() {
        assert_eq!(third_person("X"), "X");
        assert_eq!(third_person("IO"), "IO");
        assert_eq!(third_person("get_"), "get_");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_split_reconstructs_generated_identifiers(
                name in "[A-Za-z_][A-Za-z0-9_]{0,24}"
            ) {
                let parts = split(&name);
                prop_assert!(parts
                    .iter()
                    .skip(1)
                    .all(|w| w.chars().next().is_some_and(char::is_uppercase)));
                prop_assert_eq!(parts.concat(), name);
            }

            #[test]
            fn test_split_reconstructs_any_text(name in "\\PC{0,16}") {
                let parts = split(&name);
                prop_assert!(!parts.is_empty());
                prop_assert_eq!(parts.concat(), name);
            }
        }
    }
}
