//! Participant list parsing and role cross-validation.
//!
//! Participant identifiers arrive as a comma-delimited multipart field.
//! Parsing and the role check are all-or-nothing: one bad identifier
//! rejects the whole operation, naming every offender.

use uuid::Uuid;

use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_entity::user::{User, UserRole};

/// Split a comma-delimited identifier list into UUIDs.
///
/// Fragments are trimmed and empty fragments dropped; duplicates are
/// collapsed. Fragments that do not parse as a UUID reject the whole
/// list with an error naming them.
pub fn parse_participant_ids(raw: &str) -> AppResult<Vec<Uuid>> {
    let mut ids: Vec<Uuid> = Vec::new();
    let mut invalid: Vec<String> = Vec::new();

    for fragment in raw.split(',') {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        match Uuid::parse_str(fragment) {
            Ok(id) => {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
            Err(_) => invalid.push(fragment.to_string()),
        }
    }

    if invalid.is_empty() {
        Ok(ids)
    } else {
        Err(AppError::validation(format!(
            "Invalid participant identifiers: {}",
            invalid.join(", ")
        )))
    }
}

/// Verify that every requested identifier resolved to a user with role
/// Participant. Identifiers that did not resolve, or resolved to a
/// non-participant, are collected and reported together.
pub fn check_participant_roles(requested: &[Uuid], resolved: &[User]) -> AppResult<()> {
    let offenders: Vec<String> = requested
        .iter()
        .filter(|id| {
            !resolved
                .iter()
                .any(|u| u.id == **id && u.role == UserRole::Participant)
        })
        .map(Uuid::to_string)
        .collect();

    if offenders.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "These identifiers do not belong to registered participants: {}",
            offenders.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use eventhub_core::error::ErrorKind;

    fn user_with_role(id: Uuid, role: UserRole) -> User {
        User {
            id,
            full_name: "Test Person".to_string(),
            email: format!("{id}@example.com"),
            password_hash: "hash".to_string(),
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_parse_splits_trims_and_dedupes() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let raw = format!(" {a} , {b},{a}, ");

        let ids = parse_participant_ids(&raw).expect("should parse");
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn test_parse_empty_string_yields_empty_list() {
        assert!(parse_participant_ids("").unwrap().is_empty());
        assert!(parse_participant_ids(" , ,").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_fragment_naming_it() {
        let a = Uuid::new_v4();
        let err = parse_participant_ids(&format!("{a},not-a-uuid")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("not-a-uuid"));
    }

    #[test]
    fn test_role_check_accepts_all_participants() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let resolved = vec![
            user_with_role(a, UserRole::Participant),
            user_with_role(b, UserRole::Participant),
        ];

        assert!(check_participant_roles(&[a, b], &resolved).is_ok());
    }

    #[test]
    fn test_role_check_rejects_organizer_naming_id() {
        let participant = Uuid::new_v4();
        let organizer = Uuid::new_v4();
        let resolved = vec![
            user_with_role(participant, UserRole::Participant),
            user_with_role(organizer, UserRole::Organizer),
        ];

        let err = check_participant_roles(&[participant, organizer], &resolved).unwrap_err();
        assert!(err.message.contains(&organizer.to_string()));
        assert!(!err.message.contains(&participant.to_string()));
    }

    #[test]
    fn test_role_check_rejects_unresolved_id() {
        let known = Uuid::new_v4();
        let missing = Uuid::new_v4();
        let resolved = vec![user_with_role(known, UserRole::Participant)];

        let err = check_participant_roles(&[known, missing], &resolved).unwrap_err();
        assert!(err.message.contains(&missing.to_string()));
    }

    #[test]
    fn test_role_check_empty_list_is_ok() {
        assert!(check_participant_roles(&[], &[]).is_ok());
    }
}
