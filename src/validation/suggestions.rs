//! "Did you mean" helpers for rules that point at unknown names in the
//! document (unknown type, unknown field, unknown argument, unknown enum
//! value...). Candidates within edit-distance 2 of the queried name are kept,
//! ranked by distance and then lexically, and capped to a handful so the
//! message stays readable.

const MAX_SUGGESTIONS: usize = 5;

/// Damerau-Levenshtein distance (adjacent transpositions count as a single
/// edit), case-sensitive. Used to rank candidate names by closeness to the
/// name that was actually written in the document.
fn lexical_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (n, m) = (a.len(), b.len());

    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    let mut d = vec![vec![0usize; m + 1]; n + 1];
    for i in 0..=n {
        d[i][0] = i;
    }
    for j in 0..=m {
        d[0][j] = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d[i][j] = d[i][j].min(d[i - 2][j - 2] + cost);
            }
        }
    }

    d[n][m]
}

/// Returns up to `MAX_SUGGESTIONS` candidates close enough to `input` to be
/// worth suggesting, sorted by distance then name.
pub fn suggest_candidates(input: &str, options: impl IntoIterator<Item = impl AsRef<str>>) -> Vec<String> {
    let threshold = (input.chars().count() / 2).max(1);

    let mut scored: Vec<(usize, String)> = options
        .into_iter()
        .filter_map(|candidate| {
            let candidate = candidate.as_ref().to_string();
            if candidate == input {
                return None;
            }
            let distance = lexical_distance(input, &candidate);
            if distance <= threshold {
                Some((distance, candidate))
            } else {
                None
            }
        })
        .collect();

    scored.sort_by(|(da, a), (db, b)| da.cmp(db).then_with(|| a.cmp(b)));
    scored.truncate(MAX_SUGGESTIONS);
    scored.into_iter().map(|(_, name)| name).collect()
}

/// Formats a `" Did you mean X, Y or Z?"` suffix, or an empty string when
/// there is nothing worth suggesting.
pub fn quoted_or_list_suffix(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }

    let quoted: Vec<String> = suggestions.iter().map(|s| format!("\"{}\"", s)).collect();

    let joined = match quoted.len() {
        1 => quoted[0].clone(),
        2 => format!("{} or {}", quoted[0], quoted[1]),
        _ => {
            let (last, rest) = quoted.split_last().unwrap();
            format!("{} or {}", rest.join(", "), last)
        }
    };

    format!(" Did you mean {}?", joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_duplicate_is_not_suggested() {
        let out = suggest_candidates("Dog", vec!["Dog"]);
        assert!(out.is_empty());
    }

    #[test]
    fn close_single_typo_is_suggested() {
        let out = suggest_candidates("Huamn", vec!["Human", "Canine", "Dog"]);
        assert_eq!(out, vec!["Human".to_string()]);
    }

    #[test]
    fn caps_at_five_and_orders_by_distance() {
        let out = suggest_candidates(
            "cat",
            vec!["cats", "bat", "car", "hat", "can", "cot", "cap", "cab"],
        );
        assert!(out.len() <= 5);
        // "cats" is distance 1 (insertion), every other option is distance 1
        // too, so it sorts first lexically only once tied with the rest.
        assert_eq!(out[0], "cats");
    }

    #[test]
    fn far_away_names_are_excluded() {
        let out = suggest_candidates("Dog", vec!["QueryRoot", "SubscriptionRoot"]);
        assert!(out.is_empty());
    }

    #[test]
    fn suffix_formats_single_and_multiple() {
        assert_eq!(quoted_or_list_suffix(&[]), "");
        assert_eq!(
            quoted_or_list_suffix(&["if".to_string()]),
            " Did you mean \"if\"?"
        );
        assert_eq!(
            quoted_or_list_suffix(&["a".to_string(), "b".to_string()]),
            " Did you mean \"a\" or \"b\"?"
        );
        assert_eq!(
            quoted_or_list_suffix(&["a".to_string(), "b".to_string(), "c".to_string()]),
            " Did you mean \"a\", \"b\" or \"c\"?"
        );
    }
}
