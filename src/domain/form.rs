// src/domain/form.rs
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use tracing::{debug, error};

use crate::db::kv::KeyValueStore;
use crate::domain::complaint::{self, Complaint, ComplaintStatus, ComplaintType};
use crate::domain::ids::generate_id_default;
use crate::store::{ComplaintStore, StoreError};

pub const MIN_DESCRIPTION_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Address,
    Type,
    Description,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Address, Field::Type, Field::Description];

    /// Form input name.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Address => "address",
            Field::Type => "type",
            Field::Description => "description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field to message. A field missing from the map has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, &'static str>);

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        f.write_str(&parts.join(", "))
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("invalid form: {0}")]
    Invalid(FormErrors),

    #[error("a submission is already in flight")]
    InFlight,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Raw user input. `kind` is the unparsed select value; "" means not chosen yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplaintDraft {
    pub name: String,
    pub address: String,
    pub kind: String,
    pub description: String,
}

impl ComplaintDraft {
    /// Every rule is evaluated independently.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(Field::Name, "Nome é obrigatório");
        }

        if self.address.trim().is_empty() {
            errors.insert(Field::Address, "Endereço é obrigatório");
        }

        if self.kind.parse::<ComplaintType>().is_err() {
            errors.insert(Field::Type, "Selecione o tipo de problema");
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.insert(Field::Description, "Descrição é obrigatória");
        } else if description.chars().count() < MIN_DESCRIPTION_CHARS {
            errors.insert(
                Field::Description,
                "Descrição deve ter pelo menos 10 caracteres",
            );
        }

        errors
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Address => &mut self.address,
            Field::Type => &mut self.kind,
            Field::Description => &mut self.description,
        }
    }

    /// Builds the record. Only meaningful after `validate` came back empty.
    fn to_complaint(&self, id: String, now: DateTime<Utc>) -> Option<Complaint> {
        Some(Complaint {
            id,
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            kind: self.kind.parse().ok()?,
            description: self.description.trim().to_string(),
            status: ComplaintStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Submission form state: the draft, the errors from the last attempt, and
/// the in-flight flag.
#[derive(Debug, Default)]
pub struct ComplaintForm {
    draft: ComplaintDraft,
    errors: FormErrors,
    submitting: bool,
}

impl ComplaintForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ComplaintDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Editing a field clears that field's error and leaves the others alone.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.draft.slot(field) = value.into();
        self.errors.clear(field);
    }

    /// Back to the empty state.
    pub fn reset(&mut self) {
        self.draft = ComplaintDraft::default();
        self.errors = FormErrors::default();
    }

    pub fn submit<S: KeyValueStore>(
        &mut self,
        store: &ComplaintStore<S>,
    ) -> Result<Complaint, SubmitError> {
        self.submit_with(store, generate_id_default(), complaint::now())
    }

    /// Validates, appends to the store, and resets the form on success.
    /// The draft is kept on any failure so the user can retry.
    pub fn submit_with<S: KeyValueStore>(
        &mut self,
        store: &ComplaintStore<S>,
        id: String,
        now: DateTime<Utc>,
    ) -> Result<Complaint, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }

        self.errors = self.draft.validate();
        if !self.errors.is_empty() {
            debug!(errors = %self.errors, "complaint submission rejected");
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        let complaint = self
            .draft
            .to_complaint(id, now)
            .ok_or_else(|| SubmitError::Invalid(self.draft.validate()))?;

        self.submitting = true;
        let result = store.append(complaint.clone());
        self.submitting = false;

        match result {
            Ok(()) => {
                self.reset();
                Ok(complaint)
            }
            Err(e) => {
                error!(error = %e, "failed to save complaint");
                Err(SubmitError::Store(e))
            }
        }
    }
}
