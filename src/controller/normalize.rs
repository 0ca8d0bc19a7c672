use regex::Regex;
use std::sync::LazyLock;

static MULTIPLE_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Canonical league label: embedded link texts removed, whitespace collapsed
/// to single spaces, trimmed.
#[must_use]
pub fn normalize_league<S: AsRef<str>>(raw: &str, link_texts: &[S]) -> String {
    let mut league = raw.to_string();
    for link in link_texts {
        let link = link.as_ref();
        if !link.is_empty() {
            league = league.replace(link, "");
        }
    }

    let league = league.replace('\n', " ");
    MULTIPLE_SPACES.replace_all(&league, " ").trim().to_string()
}

/// Name, channel and time are only trimmed.
#[must_use]
pub fn clean_field(raw: &str) -> String {
    raw.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_links_and_collapses_whitespace() {
        assert_eq!(
            normalize_league("Premier\nLeague  LinkText", &["LinkText"]),
            "Premier League"
        );
    }

    #[test]
    fn removes_every_occurrence_of_each_link() {
        let out = normalize_league("\n  Logo Ligue 1 Logo\t\tFrance  ", &["Logo", "France"]);
        assert_eq!(out, "Ligue 1");
    }

    #[test]
    fn no_newlines_or_double_spaces_remain() {
        let out = normalize_league("  Sverige \n\n Allsvenskan \r\n  2024 ", &[] as &[&str]);
        assert!(!out.contains('\n'));
        assert!(!out.contains("  "));
        assert_eq!(out, "Sverige Allsvenskan 2024");
    }

    #[test]
    fn empty_link_text_is_ignored() {
        assert_eq!(normalize_league("Championship", &[""]), "Championship");
    }

    #[test]
    fn clean_field_only_trims() {
        assert_eq!(clean_field("  20:45\n"), "20:45");
        assert_eq!(clean_field("AIK  -  Djurgården"), "AIK  -  Djurgården");
    }
}
