//! Record-level validation of a sign-up submission.
//!
//! Every field is validated on its own and all failures are gathered into a
//! single [`FieldErrorSet`]; a [`ValidatedUser`] is only built when that set
//! stays empty.

use log::{debug, info};

use crate::models::{RawFormInput, RawTech, ValidatedUser};
use crate::utils::error_messages::{FieldErrorSet, FormField, ValidationError};
use crate::utils::validation::{
    AvatarInput, EmailInput, NameInput, PasswordInput, TechInput, MIN_TECHS,
};

/// Validates and normalizes a whole submission.
///
/// # Example
/// ```
/// use signup_form::form::validate;
/// use signup_form::models::RawFormInput;
///
/// let errors = validate(RawFormInput::default()).unwrap_err();
/// assert!(errors.contains("avatar"));
/// assert!(errors.contains("techs"));
/// ```
pub fn validate(raw: RawFormInput) -> Result<ValidatedUser, FieldErrorSet> {
    let RawFormInput {
        avatar,
        name,
        email,
        password,
        techs,
    } = raw;

    debug!("Validating submission with {} tech entries", techs.len());

    let mut errors = FieldErrorSet::new();

    let avatar = errors.check(FormField::Avatar, AvatarInput::new(avatar));
    let name = errors.check(FormField::Name, NameInput::new(&name));
    let email = errors.check(FormField::Email, EmailInput::new(&email));
    let password = errors.check(FormField::Password, PasswordInput::new(&password));

    // Collection and entry rules are independent, both always report
    if let Err(error) = validate_techs_count(&techs) {
        errors.insert(FormField::Techs, error);
    }
    let techs = match validate_tech_entries(&techs) {
        Ok(techs) => Some(techs),
        Err(entry_errors) => {
            errors.merge(entry_errors);
            None
        }
    };

    // Entries can all pass while the count rule failed, hence the guard
    match (avatar, name, email, password, techs) {
        (Some(avatar), Some(name), Some(email), Some(password), Some(techs)) if errors.is_empty() => {
            info!("Submission accepted with {} technologies", techs.len());
            Ok(ValidatedUser {
                avatar,
                name,
                email,
                password,
                techs,
            })
        }
        _ => {
            info!("Submission rejected with {} field error(s)", errors.len());
            Err(errors)
        }
    }
}

/// Rejects lists with fewer than `MIN_TECHS` rows
fn validate_techs_count(techs: &[RawTech]) -> Result<(), ValidationError> {
    if techs.len() < MIN_TECHS {
        return Err(ValidationError::CollectionTooSmall);
    }
    Ok(())
}

/// Validates every row, collecting the errors of all failing rows
fn validate_tech_entries(techs: &[RawTech]) -> Result<Vec<TechInput>, FieldErrorSet> {
    let mut errors = FieldErrorSet::new();
    let mut valid = Vec::with_capacity(techs.len());

    for (index, raw) in techs.iter().enumerate() {
        match TechInput::validate(index, raw) {
            Ok(tech) => valid.push(tech),
            Err(row_errors) => errors.merge(row_errors),
        }
    }

    if errors.is_empty() {
        Ok(valid)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileSelection, RawKnowledge, SelectedFile};

    fn tech(title: &str, knowledge: &str) -> RawTech {
        RawTech {
            title: title.to_string(),
            knowledge: RawKnowledge::Text(knowledge.to_string()),
        }
    }

    fn avatar() -> FileSelection {
        FileSelection::single(SelectedFile::new("me.png", 2048, "image/png"))
    }

    fn valid_input() -> RawFormInput {
        RawFormInput {
            avatar: avatar(),
            name: "  ana maria ".to_string(),
            email: "Ana@EMAIL.COM.BR".to_string(),
            password: "123456".to_string(),
            techs: vec![tech("Go", "80"), tech("Rust", "60")],
        }
    }

    #[test]
    fn test_worked_example() {
        let user = validate(valid_input()).unwrap();

        assert_eq!(user.name().as_str(), "Ana Maria");
        assert_eq!(user.email().as_str(), "ana@email.com.br");
        assert_eq!(user.password().as_str(), "123456");
        assert_eq!(user.avatar().file().name, "me.png");

        let techs: Vec<(&str, u8)> = user
            .techs()
            .iter()
            .map(|tech| (tech.title().as_str(), tech.knowledge().value()))
            .collect();
        assert_eq!(techs, vec![("Go", 80), ("Rust", 60)]);
    }

    #[test]
    fn test_serialized_output() {
        let user = validate(valid_input()).unwrap();

        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            serde_json::json!({
                "avatar": { "name": "me.png", "size": 2048, "type": "image/png" },
                "name": "Ana Maria",
                "email": "ana@email.com.br",
                "password": "123456",
                "techs": [
                    { "title": "Go", "knowledge": 80 },
                    { "title": "Rust", "knowledge": 60 }
                ]
            })
        );
    }

    #[test]
    fn test_all_errors_reported_at_once() {
        let input = RawFormInput {
            avatar: FileSelection::default(),
            name: "   ".to_string(),
            techs: vec![tech("Go", "80"), tech("", "60")],
            ..valid_input()
        };

        let errors = validate(input).unwrap_err();

        assert_eq!(errors.len(), 3);
        assert!(errors.contains("avatar"));
        assert!(errors.contains("name"));
        assert_eq!(errors.get("techs.1.title"), Some(&ValidationError::EntryFieldMissing));
    }

    #[test]
    fn test_every_field_failing() {
        let input = RawFormInput {
            avatar: FileSelection::default(),
            name: String::new(),
            email: "ana@example.com".to_string(),
            password: "123".to_string(),
            techs: vec![tech("", "0")],
        };

        let errors = validate(input).unwrap_err();

        let expected = vec![
            ("avatar", ValidationError::RequiredFieldMissing { field: FormField::Avatar }),
            ("name", ValidationError::RequiredFieldMissing { field: FormField::Name }),
            ("email", ValidationError::DomainMismatch),
            ("password", ValidationError::LengthTooShort),
            ("techs", ValidationError::CollectionTooSmall),
            ("techs.0.title", ValidationError::EntryFieldMissing),
            ("techs.0.knowledge", ValidationError::EntryValueOutOfRange),
        ];

        assert_eq!(errors.len(), expected.len());
        for (path, error) in expected {
            assert_eq!(errors.get(path), Some(&error), "Unexpected error at {}", path);
        }
    }

    #[test]
    fn test_too_few_techs_even_if_valid() {
        let lists = vec![vec![], vec![tech("Go", "80")]];

        for techs in lists {
            let input = RawFormInput {
                techs,
                ..valid_input()
            };

            let errors = validate(input).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get("techs"), Some(&ValidationError::CollectionTooSmall));
        }
    }

    #[test]
    fn test_count_and_entry_errors_together() {
        let input = RawFormInput {
            techs: vec![tech("Go", "abc")],
            ..valid_input()
        };

        let errors = validate(input).unwrap_err();
        assert!(errors.contains("techs"));
        assert!(errors.contains("techs.0.knowledge"));
    }

    #[test]
    fn test_out_of_range_knowledge_paths() {
        let input = RawFormInput {
            techs: vec![
                tech("Go", "80"),
                tech("Rust", "101"),
                tech("Zig", "0"),
                tech("C", "not a number"),
            ],
            ..valid_input()
        };

        let errors = validate(input).unwrap_err();

        assert_eq!(errors.len(), 3);
        for index in 1..=3 {
            assert_eq!(
                errors.get(&format!("techs.{index}.knowledge")),
                Some(&ValidationError::EntryValueOutOfRange)
            );
        }
        assert!(!errors.contains("techs.0.knowledge"));
    }

    #[test]
    fn test_email_domain_any_case() {
        for email in vec!["ana@email.com.br", "ANA@EMAIL.COM.BR", "Ana@Email.Com.BR"] {
            let input = RawFormInput {
                email: email.to_string(),
                ..valid_input()
            };
            let user = validate(input).unwrap();
            assert_eq!(user.email().as_str(), "ana@email.com.br");
        }

        let input = RawFormInput {
            email: "ana@email.com.pt".to_string(),
            ..valid_input()
        };
        let errors = validate(input).unwrap_err();
        assert_eq!(errors.get("email"), Some(&ValidationError::DomainMismatch));
    }

    #[test]
    fn test_revalidation_is_idempotent() {
        let first = validate(valid_input()).unwrap();
        let second = validate(RawFormInput::from(&first)).unwrap();
        assert_eq!(first, second);
    }
}
