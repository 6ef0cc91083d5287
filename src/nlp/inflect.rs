//! English noun inflection
//!
//! Regular pluralization rules plus an irregular table, enough to keep a
//! substituted synonym in the same number as the word it replaces.

const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("mouse", "mice"),
    ("person", "people"),
    ("tooth", "teeth"),
    ("woman", "women"),
    ("ox", "oxen"),
];

const UNCOUNTABLE: &[&str] = &["sheep", "fish", "deer", "series", "species", "news"];

/// Plural form of a singular noun
pub fn plural(word: &str) -> String {
    if word.is_empty() || UNCOUNTABLE.contains(&word.to_lowercase().as_str()) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(s, _)| *s == word) {
        return plural.to_string();
    }
    // Compounds inflect their last element.
    if let Some((head, last)) = word.rsplit_once(|c: char| c == '_' || c == ' ') {
        let sep = &word[head.len()..head.len() + 1];
        return format!("{head}{sep}{}", plural(last));
    }

    let lower = word.to_lowercase();
    if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        return format!("{word}es");
    }
    if let Some(stem) = word.strip_suffix('y') {
        if !stem.ends_with(is_vowel) && !stem.is_empty() {
            return format!("{stem}ies");
        }
    }
    format!("{word}s")
}

/// Singular form of a plural noun, or `None` if the word is not plural
pub fn singular_noun(word: &str) -> Option<String> {
    let lower = word.to_lowercase();
    if lower.is_empty() || UNCOUNTABLE.contains(&lower.as_str()) {
        return None;
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, p)| *p == lower) {
        return Some(singular.to_string());
    }
    if IRREGULAR.iter().any(|(s, _)| *s == lower) {
        return None;
    }
    if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        return None;
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return Some(format!("{stem}y"));
        }
    }
    for suffix in ["sses", "xes", "zes", "ches", "shes"] {
        if lower.ends_with(suffix) {
            return Some(word[..word.len() - 2].to_string());
        }
    }
    word.strip_suffix('s')
        .filter(|stem| stem.chars().count() > 1)
        .map(str::to_string)
}

/// Uppercase the first character and lowercase the rest
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural("bank"), "banks");
        assert_eq!(plural("church"), "churches");
        assert_eq!(plural("box"), "boxes");
        assert_eq!(plural("story"), "stories");
        assert_eq!(plural("day"), "days");
        assert_eq!(plural("child"), "children");
        assert_eq!(plural("sheep"), "sheep");
        assert_eq!(plural("bass_fiddle"), "bass_fiddles");
    }

    #[test]
    fn test_singular_noun() {
        assert_eq!(singular_noun("banks").as_deref(), Some("bank"));
        assert_eq!(singular_noun("stories").as_deref(), Some("story"));
        assert_eq!(singular_noun("churches").as_deref(), Some("church"));
        assert_eq!(singular_noun("classes").as_deref(), Some("class"));
        assert_eq!(singular_noun("people").as_deref(), Some("person"));
        assert_eq!(singular_noun("bank"), None);
        assert_eq!(singular_noun("glass"), None);
        assert_eq!(singular_noun("child"), None);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("bank"), "Bank");
        assert_eq!(capitalize("BANK"), "Bank");
        assert_eq!(capitalize(""), "");
    }
}
