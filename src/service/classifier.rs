use crate::db::DbUser;
use tracing::warn;

/// What the reconciler should do with the current user table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scenario {
    /// Only the wrong-named account exists.
    Rename { id: String },
    /// Both accounts exist; `remove_id` is the wrong-named one.
    Merge { remove_id: String, keep_id: String },
    /// No wrong-named account.
    Nothing,
}

/// Classify rows against the two names. Matching is exact and checks both
/// `name` and `username`. With several matches the last row wins.
pub fn classify(users: &[DbUser], wrong_name: &str, correct_name: &str) -> Scenario {
    let wrong = last_match(users, wrong_name);
    let Some(wrong) = wrong else {
        return Scenario::Nothing;
    };

    // A row carrying both names is the wrong row itself, not a merge target.
    let correct = users
        .iter()
        .filter(|u| u.id != wrong.id && u.matches(correct_name))
        .next_back();

    match correct {
        Some(correct) => Scenario::Merge {
            remove_id: wrong.id.clone(),
            keep_id: correct.id.clone(),
        },
        None => Scenario::Rename {
            id: wrong.id.clone(),
        },
    }
}

fn last_match<'a>(users: &'a [DbUser], value: &str) -> Option<&'a DbUser> {
    let matches: Vec<&DbUser> = users.iter().filter(|u| u.matches(value)).collect();
    if matches.len() > 1 {
        warn!(
            name = value,
            count = matches.len(),
            "several accounts match; using the last one"
        );
    }
    matches.last().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WRONG: &str = "Jessica Petree";
    const RIGHT: &str = "Jess Petree";

    fn user(id: &str, name: &str, username: Option<&str>) -> DbUser {
        DbUser {
            id: id.to_string(),
            email: Some(format!("{id}@x")),
            name: Some(name.to_string()),
            username: username.map(str::to_string),
            role: Some("user".to_string()),
            created_at: None,
        }
    }

    #[test]
    fn only_wrong_name_is_a_rename() {
        let users = [user("1", WRONG, None), user("2", "Someone Else", None)];
        assert_eq!(
            classify(&users, WRONG, RIGHT),
            Scenario::Rename { id: "1".into() }
        );
    }

    #[test]
    fn wrong_and_correct_is_a_merge() {
        let users = [user("1", WRONG, None), user("2", RIGHT, None)];
        assert_eq!(
            classify(&users, WRONG, RIGHT),
            Scenario::Merge {
                remove_id: "1".into(),
                keep_id: "2".into()
            }
        );
    }

    #[test]
    fn username_field_counts_as_a_match() {
        let users = [
            user("1", "jp", Some(WRONG)),
            user("2", "Other", Some(RIGHT)),
        ];
        assert_eq!(
            classify(&users, WRONG, RIGHT),
            Scenario::Merge {
                remove_id: "1".into(),
                keep_id: "2".into()
            }
        );
    }

    #[test]
    fn correct_name_alone_needs_nothing() {
        let users = [user("2", RIGHT, None)];
        assert_eq!(classify(&users, WRONG, RIGHT), Scenario::Nothing);
        assert_eq!(classify(&[], WRONG, RIGHT), Scenario::Nothing);
    }

    #[test]
    fn single_row_with_both_names_is_renamed_not_merged() {
        let users = [user("1", WRONG, Some(RIGHT))];
        assert_eq!(
            classify(&users, WRONG, RIGHT),
            Scenario::Rename { id: "1".into() }
        );
    }

    #[test]
    fn last_wrong_row_wins() {
        let users = [user("1", WRONG, None), user("3", WRONG, None)];
        assert_eq!(
            classify(&users, WRONG, RIGHT),
            Scenario::Rename { id: "3".into() }
        );
    }
}
