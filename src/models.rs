//! Form data model: the raw submission as produced by a front-end, and the
//! user record that only the validator can build.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::utils::validation::{
    AvatarInput, EmailInput, NameInput, PasswordInput, TechInput,
};

/// An untrusted form submission. Every field may be missing or malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFormInput {
    pub avatar: FileSelection,
    pub name: String,
    pub email: String,
    pub password: String,
    pub techs: Vec<RawTech>,
}

/// The files picked in the avatar input. May hold zero, one or several files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileSelection {
    files: Vec<SelectedFile>,
}

impl FileSelection {
    pub fn new(files: Vec<SelectedFile>) -> Self {
        Self { files }
    }

    pub fn single(file: SelectedFile) -> Self {
        Self { files: vec![file] }
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub(crate) fn into_files(self) -> Vec<SelectedFile> {
        self.files
    }
}

/// Opaque handle to a file chosen by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("{name}")]
pub struct SelectedFile {
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(rename = "type", default)]
    pub mime_type: String,
}

/// One row of the technologies list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Display)]
#[display("{title} ({knowledge})")]
#[serde(default)]
pub struct RawTech {
    pub title: String,
    pub knowledge: RawKnowledge,
}

/// Knowledge level as typed in a numeric input: either already a number,
/// or the text of the input control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[serde(untagged)]
pub enum RawKnowledge {
    #[display("{_0}")]
    Number(f64),
    #[display("{_0}")]
    Text(String),
}

/// New rows start at zero, which is below the accepted range
impl Default for RawKnowledge {
    fn default() -> Self {
        RawKnowledge::Number(0.0)
    }
}

/// A sign-up that passed every rule, with all normalizations applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedUser {
    pub(crate) avatar: AvatarInput,
    pub(crate) name: NameInput,
    pub(crate) email: EmailInput,
    pub(crate) password: PasswordInput,
    pub(crate) techs: Vec<TechInput>,
}

impl ValidatedUser {
    pub fn avatar(&self) -> &AvatarInput {
        &self.avatar
    }

    pub fn name(&self) -> &NameInput {
        &self.name
    }

    pub fn email(&self) -> &EmailInput {
        &self.email
    }

    pub fn password(&self) -> &PasswordInput {
        &self.password
    }

    pub fn techs(&self) -> &[TechInput] {
        &self.techs
    }
}

/// Turns an accepted record back into a submission, e.g. to pre-fill a form
impl From<&ValidatedUser> for RawFormInput {
    fn from(user: &ValidatedUser) -> Self {
        Self {
            avatar: FileSelection::single(user.avatar.file().clone()),
            name: user.name.to_string(),
            email: user.email.to_string(),
            password: user.password.as_str().to_owned(),
            techs: user
                .techs
                .iter()
                .map(|tech| RawTech {
                    title: tech.title().to_string(),
                    knowledge: RawKnowledge::Number(f64::from(tech.knowledge().value())),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_input_from_json() {
        let raw: RawFormInput = serde_json::from_str(
            r#"{
                "avatar": [{ "name": "me.png", "size": 1024, "type": "image/png" }],
                "name": "ana",
                "techs": [
                    { "title": "Go", "knowledge": "80" },
                    { "title": "Rust", "knowledge": 60 },
                    { "title": "Zig" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(raw.avatar.len(), 1);
        assert_eq!(raw.avatar.files()[0].mime_type, "image/png");
        assert_eq!(raw.name, "ana");
        // Missing keys fall back to empty values
        assert_eq!(raw.email, "");
        assert_eq!(raw.password, "");
        assert_eq!(raw.techs[0].knowledge, RawKnowledge::Text("80".to_string()));
        assert_eq!(raw.techs[1].knowledge, RawKnowledge::Number(60.0));
        assert_eq!(raw.techs[2].knowledge, RawKnowledge::Number(0.0));
    }

    #[test]
    fn test_empty_object_is_empty_submission() {
        let raw: RawFormInput = serde_json::from_str("{}").unwrap();
        assert_eq!(raw, RawFormInput::default());
        assert!(raw.avatar.is_empty());
    }

    #[test]
    fn test_raw_tech_display() {
        let tech = RawTech {
            title: "Rust".to_string(),
            knowledge: RawKnowledge::Number(60.0),
        };
        assert_eq!(tech.to_string(), "Rust (60)");

        let tech = RawTech {
            title: "Go".to_string(),
            knowledge: RawKnowledge::Text("8o".to_string()),
        };
        assert_eq!(tech.to_string(), "Go (8o)");
    }
}
