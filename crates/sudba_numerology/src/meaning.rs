//! Static number-meaning table.

/// Returned for numbers outside the meaning table.
pub const FALLBACK_MEANING: &str = "Special meaning";

/// Meanings for the single digits and the master numbers.
pub const NUMBER_MEANINGS: [(u32, &str); 12] = [
    (1, "Leadership, independence, ambition"),
    (2, "Partnership, diplomacy, sensitivity"),
    (3, "Creativity, communication, self-expression"),
    (4, "Stability, practicality, diligence"),
    (5, "Freedom, adventure, change"),
    (6, "Harmony, responsibility, family"),
    (7, "Analysis, spirituality, intuition"),
    (8, "Power, money, success"),
    (9, "Completion, wisdom, humanitarianism"),
    (11, "Intuition, inspiration, spirituality"),
    (22, "Practical spirituality, master builder"),
    (33, "Master teacher, service to humanity"),
];

/// Look up the meaning of `n`, or `None` if it is not in the table.
pub fn lookup_meaning(n: u32) -> Option<&'static str> {
    NUMBER_MEANINGS
        .iter()
        .find(|(k, _)| *k == n)
        .map(|(_, m)| *m)
}

/// Meaning of `n`, falling back to [`FALLBACK_MEANING`].
pub fn meaning_of(n: u32) -> &'static str {
    lookup_meaning(n).unwrap_or(FALLBACK_MEANING)
}
