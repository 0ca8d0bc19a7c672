/// True iff `league` contains at least one entry of `leagues`.
///
/// Plain substring matching: a league named e.g. "Scottish Championship"
/// also passes for "Championship".
#[must_use]
pub fn is_interesting<S: AsRef<str>>(league: &str, leagues: &[S]) -> bool {
    leagues.iter().any(|l| league.contains(l.as_ref()))
}
