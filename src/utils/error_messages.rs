//! Represents all possible validation errors of the sign-up form, and the
//! per-field collection they are reported in.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};
use strum_macros::{AsRefStr, EnumIter, EnumString};
use thiserror::Error;

use crate::utils::validation::{
    EMAIL_DOMAIN_SUFFIX, MAX_KNOWLEDGE, MIN_KNOWLEDGE, MIN_PASSWORD_LENGTH, MIN_TECHS,
};

pub const AVATAR_REQUIRED: &str = "Avatar é obrigatório";

pub const NAME_REQUIRED: &str = "Nome é obrigatório";

pub const EMAIL_REQUIRED: &str = "E-mail é obrigatório";

pub const EMAIL_FORMAT_INVALID: &str = "Formato de email inválido!";

pub const TITLE_REQUIRED: &str = "Título é obrigatório";

/// Top-level fields of the form, in the order they are displayed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum FormField {
    Avatar,
    Name,
    Email,
    Password,
    Techs,
}

impl FormField {
    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            FormField::Avatar => "Avatar",
            FormField::Name => "Nome",
            FormField::Email => "E-mail",
            FormField::Password => "Senha",
            FormField::Techs => "Tecnologias",
        }
    }

    fn required_message(self) -> &'static str {
        match self {
            FormField::Avatar => AVATAR_REQUIRED,
            FormField::Name => NAME_REQUIRED,
            FormField::Email => EMAIL_REQUIRED,
            FormField::Password | FormField::Techs => "Campo obrigatório",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Every way a single field of the form can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", .field.required_message())]
    RequiredFieldMissing { field: FormField },

    #[error("{}", EMAIL_FORMAT_INVALID)]
    FormatInvalid,

    #[error("O email precisa terminal com {}", EMAIL_DOMAIN_SUFFIX)]
    DomainMismatch,

    #[error("Senha precisa ter {} caracteres", MIN_PASSWORD_LENGTH)]
    LengthTooShort,

    #[error("Pelo menos {} tecnologias", MIN_TECHS)]
    CollectionTooSmall,

    #[error("{}", TITLE_REQUIRED)]
    EntryFieldMissing,

    #[error("Conhecimento precisa estar entre {} e {}", MIN_KNOWLEDGE, MAX_KNOWLEDGE)]
    EntryValueOutOfRange,
}

/// One step of a field path: a named key or a position in a list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum PathSegment {
    Key(String),
    Index(usize),
}

/// Dotted address of a form field, such as `email` or `techs.1.title`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldPath {
    root: FormField,
    rest: Vec<PathSegment>,
}

impl FieldPath {
    pub fn root(field: FormField) -> Self {
        Self {
            root: field,
            rest: Vec::new(),
        }
    }

    pub fn index(mut self, index: usize) -> Self {
        self.rest.push(PathSegment::Index(index));
        self
    }

    pub fn key(mut self, key: &str) -> Self {
        self.rest.push(PathSegment::Key(key.to_owned()));
        self
    }

    /// Returns the top-level form field this path belongs to
    pub fn field(&self) -> FormField {
        self.root
    }
}

impl From<FormField> for FieldPath {
    fn from(field: FormField) -> Self {
        Self::root(field)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)?;
        for segment in &self.rest {
            match segment {
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, ".{index}")?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field path: {0}")]
pub struct InvalidFieldPath(String);

impl FromStr for FieldPath {
    type Err = InvalidFieldPath;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.split('.');

        let root = segments
            .next()
            .and_then(|root| FormField::from_str(root).ok())
            .ok_or_else(|| InvalidFieldPath(s.to_owned()))?;

        let mut path = FieldPath::root(root);
        for segment in segments {
            if segment.is_empty() {
                return Err(InvalidFieldPath(s.to_owned()));
            }
            path = match segment.parse::<usize>() {
                Ok(index) => path.index(index),
                Err(_) => path.key(segment),
            };
        }
        Ok(path)
    }
}

/// All field errors found while validating one submission.
/// A path holds at most one error: the first one reported for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrorSet {
    errors: BTreeMap<FieldPath, ValidationError>,
}

impl FieldErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for the path unless one is already present
    pub fn insert(&mut self, path: impl Into<FieldPath>, error: ValidationError) {
        self.errors.entry(path.into()).or_insert(error);
    }

    /// Unwraps a field result, recording its error under `path` on failure
    pub fn check<T>(
        &mut self,
        path: impl Into<FieldPath>,
        result: Result<T, ValidationError>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.insert(path, error);
                None
            }
        }
    }

    /// Moves every error of `other` into this set, keeping existing entries
    pub fn merge(&mut self, other: FieldErrorSet) {
        for (path, error) in other.errors {
            self.insert(path, error);
        }
    }

    pub fn get(&self, path: &str) -> Option<&ValidationError> {
        let path = FieldPath::from_str(path).ok()?;
        self.errors.get(&path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &ValidationError)> + '_ {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for FieldErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (path, error) in &self.errors {
            writeln!(f, "{path}: {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrorSet {}

/// Serialized as a flat `{ "techs.0.title": "message" }` object
impl Serialize for FieldErrorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (path, error) in &self.errors {
            map.serialize_entry(&path.to_string(), &error.to_string())?;
        }
        map.end()
    }
}
