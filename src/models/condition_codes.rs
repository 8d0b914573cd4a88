use crate::models::forecast::{Condition, ConditionCategory};

struct ConditionEntry {
    category: ConditionCategory,
    description: &'static str,
    icon: &'static str,
}

const fn entry(
    category: ConditionCategory,
    description: &'static str,
    icon: &'static str,
) -> ConditionEntry {
    ConditionEntry {
        category,
        description,
        icon,
    }
}

// Indexed by the upstream weather code.
const CONDITION_TABLE: [ConditionEntry; 10] = [
    entry(ConditionCategory::Clear, "ensoleillé", "01d"),
    entry(ConditionCategory::Clouds, "peu nuageux", "02d"),
    entry(ConditionCategory::Clouds, "ciel voilé", "02d"),
    entry(ConditionCategory::Clouds, "nuageux", "03d"),
    entry(ConditionCategory::Clouds, "très nuageux", "04d"),
    entry(ConditionCategory::Rain, "pluvieux", "10d"),
    entry(ConditionCategory::Rain, "pluie forte", "10d"),
    entry(ConditionCategory::Snow, "neigeux", "13d"),
    entry(ConditionCategory::Rain, "pluie éparse", "09d"),
    entry(ConditionCategory::Thunderstorm, "orageux", "11d"),
];

/// Maps an upstream weather code to a condition. Unknown or missing codes
/// map to the clear sky condition.
pub fn condition_for_code(code: Option<i64>) -> Condition {
    let entry = code
        .and_then(|code| usize::try_from(code).ok())
        .and_then(|index| CONDITION_TABLE.get(index))
        .unwrap_or(&CONDITION_TABLE[0]);
    Condition::new(entry.category, entry.description, entry.icon)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_codes_match_table() {
        let expected = [
            (ConditionCategory::Clear, "ensoleillé", "01d"),
            (ConditionCategory::Clouds, "peu nuageux", "02d"),
            (ConditionCategory::Clouds, "ciel voilé", "02d"),
            (ConditionCategory::Clouds, "nuageux", "03d"),
            (ConditionCategory::Clouds, "très nuageux", "04d"),
            (ConditionCategory::Rain, "pluvieux", "10d"),
            (ConditionCategory::Rain, "pluie forte", "10d"),
            (ConditionCategory::Snow, "neigeux", "13d"),
            (ConditionCategory::Rain, "pluie éparse", "09d"),
            (ConditionCategory::Thunderstorm, "orageux", "11d"),
        ];
        for (code, (category, description, icon)) in expected.into_iter().enumerate() {
            assert_eq!(
                condition_for_code(Some(code as i64)),
                Condition::new(category, description, icon),
                "code {code}"
            );
        }
    }

    #[test]
    fn unknown_codes_default_to_clear() {
        let clear = condition_for_code(Some(0));
        for code in [-1, 10, 42, i64::MAX, i64::MIN] {
            assert_eq!(condition_for_code(Some(code)), clear, "code {code}");
        }
        assert_eq!(condition_for_code(None), clear);
    }
}
