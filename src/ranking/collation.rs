use std::cmp::Ordering;
use std::iter;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare display names the way a human-facing list sorts them.
///
/// Letters compare case-insensitively and without accents first ("Émile"
/// next to "Emil", `ё` with `е`), then unaccented before accented, then
/// lowercase before uppercase. Byte order breaks whatever is left so the
/// result is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

fn primary_key(value: &str) -> impl Iterator<Item = char> + '_ {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn secondary_key(value: &str) -> impl Iterator<Item = bool> + '_ {
    value.chars().map(has_diacritic)
}

fn tertiary_key(value: &str) -> impl Iterator<Item = bool> + '_ {
    value.chars().map(char::is_uppercase)
}

fn has_diacritic(c: char) -> bool {
    iter::once(c).nfd().any(is_combining_mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_alphabetical() {
        assert_eq!(compare_names("Alex", "Boris"), Ordering::Less);
        assert_eq!(compare_names("Boris", "Alex"), Ordering::Greater);
    }

    #[test]
    fn test_case_does_not_dominate() {
        assert_eq!(compare_names("alex", "Boris"), Ordering::Less);
        assert_eq!(compare_names("alex", "Alex"), Ordering::Less);
    }

    #[test]
    fn test_cyrillic_yo_sorts_with_ye() {
        assert_eq!(compare_names("Алёна", "Алина"), Ordering::Less);
        assert_eq!(compare_names("Алена", "Алёна"), Ordering::Less);
    }

    #[test]
    fn test_accented_latin_sorts_with_base_letter() {
        assert_eq!(compare_names("Émile", "Zed"), Ordering::Less);
        assert_eq!(compare_names("Ärger", "Bob"), Ordering::Less);
        assert_eq!(compare_names("Émile", "Emilia"), Ordering::Less);
    }

    #[test]
    fn test_unaccented_before_accented() {
        assert_eq!(compare_names("Eva", "Éva"), Ordering::Less);
        assert_eq!(compare_names("Éva", "Eva"), Ordering::Greater);
    }

    #[test]
    fn test_equal_names() {
        assert_eq!(compare_names("Eddy", "Eddy"), Ordering::Equal);
    }
}
