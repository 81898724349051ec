// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Abbreviations that end with a sentence mark without ending a sentence.

use std::collections::HashSet;

/// Built-in abbreviations (Polish, English, Russian).
///
/// Entries are matched against whole tokens, case-sensitively, so `"Dr."`
/// and `"dr."` are different entries.
pub const BUILTIN_ABBREVIATIONS: &[&str] = &[
    // Polish
    "al.", "cd.", "cdn.", "col.", "cykl.", "cyt.", "cz.", "dosł.", "godz.", "iron.", "itd.",
    "itp.", "jw.", "jęz.", "lic.", "m.in.", "mies.", "mkw.", "muz.", "n.e.", "n.p.m.", "nast.",
    "np.", "nw.", "o.o.", "p.n.e.", "p.o.", "pl.", "pn.", "pt.", "płd.", "płn.", "rys.", "sp.",
    "str.", "tab.", "tj.", "tzn.", "tzw.", "wsch.", "zach.", "zob.", "źr.", "żeń.",
    // English
    "approx.", "appt.", "A.S.A.P.", "B.Y.O.B.", "dept.", "D.I.Y.", "est.", "E.T.A.", "min.",
    "misc.", "R.S.V.P.", "tel.", "temp.", "vet.", "vs.", "Ave.", "Blvd.", "Dr.", "St.", "e.g.",
    "etc.", "i.e.", "n.b.", "P.S.",
    // Russian
    "т. е.", "и т. д.", "и т. п.", "и др.", "и пр.", "см.", "н. э.", "обл.", "гp.", "стр.",
    "акад.", "доц.", "ж. д.", "ж.-д.", "им.", "ин-т", "шт.", "тип.", "укр.", "унив.", "яз.",
    "чл.", "цифр.", "цв.",
];

/// A set of tokens that must not start a new sentence after them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abbreviations {
    entries: HashSet<String>,
}

impl Abbreviations {
    /// Create a set from arbitrary entries, without the built-in list.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Create the built-in set.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_ABBREVIATIONS.iter().copied())
    }

    /// Create the built-in set extended with `extra` and without `exclude`.
    ///
    /// Exclusions win over additions, so an entry listed in both is absent.
    pub fn with_overrides(extra: &[String], exclude: &[String]) -> Self {
        let mut set = Self::builtin();
        set.entries.extend(extra.iter().cloned());
        for entry in exclude {
            set.entries.remove(entry);
        }
        set
    }

    /// Check if a token is an abbreviation.
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains(token)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Abbreviations {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_contains_common_entries() {
        let abbreviations = Abbreviations::builtin();
        for entry in ["np.", "itd.", "etc.", "e.g.", "Dr.", "см.", "approx.", "appt."] {
            assert!(abbreviations.contains(entry), "missing {}", entry);
        }
        assert!(!abbreviations.contains("hello."));
        assert!(!abbreviations.contains("np"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let abbreviations = Abbreviations::builtin();
        assert!(abbreviations.contains("Dr."));
        assert!(!abbreviations.contains("dr."));
    }

    #[test]
    fn test_default_is_builtin() {
        assert_eq!(Abbreviations::default(), Abbreviations::builtin());
        assert_eq!(Abbreviations::builtin().len(), BUILTIN_ABBREVIATIONS.len());
    }

    #[test]
    fn test_custom_set() {
        let abbreviations = Abbreviations::new(["ca.", "ff."]);
        assert_eq!(abbreviations.len(), 2);
        assert!(abbreviations.contains("ca."));
        assert!(!abbreviations.contains("np."));
        assert!(Abbreviations::new(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_overrides() {
        let abbreviations =
            Abbreviations::with_overrides(&["ca.".to_string()], &["min.".to_string()]);
        assert!(abbreviations.contains("ca."));
        assert!(!abbreviations.contains("min."));
        assert!(abbreviations.contains("np."));
    }

    #[test]
    fn test_exclude_wins_over_extra() {
        let both = vec!["ca.".to_string()];
        let abbreviations = Abbreviations::with_overrides(&both, &both);
        assert!(!abbreviations.contains("ca."));
    }
}
