/// Fixed campaign-year suffix appended to every referral code.
const YEAR_SUFFIX: &str = "2025";

/// Derives the public referral code from a display name: lowercase, all
/// whitespace removed, year suffix appended. Identical names produce
/// identical codes; the unique constraint on the store rejects the clash.
pub fn referral_code(name: &str) -> String {
    let normalized: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    format!("{normalized}{YEAR_SUFFIX}")
}
