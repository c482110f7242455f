// src/forms/engine.rs
//
// State machine behind the add-listing page. Pure and synchronous; the
// timed transitions are driven from `forms::session`.

use crate::forms::dependent::DependentOptions;
use crate::forms::schema::{FieldDef, FieldKind, ListingType};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

pub type FieldValues = BTreeMap<&'static str, String>;
pub type FieldErrors = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("no listing type selected")]
    NoTypeSelected,

    #[error("unknown field `{field}` for {listing_type} listings")]
    UnknownField {
        listing_type: &'static str,
        field: String,
    },

    #[error("a submission is already in progress")]
    SubmissionInProgress,

    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
}

/// Snapshot of an accepted form, handed to whoever simulates the upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: u64,
    pub listing_type: ListingType,
    pub values: FieldValues,
}

/// A field as it should be rendered right now.
#[derive(Debug, Clone, Copy)]
pub struct VisibleField<'a> {
    pub def: &'static FieldDef,
    /// Empty for fields that are not selects.
    pub options: &'static [&'static str],
    pub value: &'a str,
    pub error: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct AddListingForm {
    deps: Arc<DependentOptions>,
    selected: Option<ListingType>,
    values: FieldValues,
    errors: FieldErrors,
    phase: SubmitPhase,
    // Monotonic; lets late timer callbacks recognise a superseded submission.
    submissions: u64,
}

impl AddListingForm {
    pub fn new(deps: Arc<DependentOptions>) -> Self {
        Self {
            deps,
            selected: None,
            values: FieldValues::new(),
            errors: FieldErrors::new(),
            phase: SubmitPhase::Editing,
            submissions: 0,
        }
    }

    pub fn selected(&self) -> Option<ListingType> {
        self.selected
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// Activates the schema for `listing_type`, dropping all values and errors.
    pub fn select_type(&mut self, listing_type: ListingType) -> Result<(), FormError> {
        self.ensure_editing()?;
        self.selected = Some(listing_type);
        self.values.clear();
        self.errors.clear();
        debug!(listing_type = listing_type.id(), "listing type selected");
        Ok(())
    }

    /// Back to the type picker.
    pub fn reset(&mut self) {
        self.selected = None;
        self.values.clear();
        self.errors.clear();
        self.phase = SubmitPhase::Editing;
    }

    /// Stores one value. Writing a parent field clears its dependents, and
    /// writing a field drops its current error without re-validating.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let listing_type = self.selected.ok_or(FormError::NoTypeSelected)?;
        self.ensure_editing()?;
        let def = listing_type
            .field(name)
            .ok_or_else(|| FormError::UnknownField {
                listing_type: listing_type.id(),
                field: name.to_string(),
            })?;

        self.values.insert(def.name, value.into());
        for dependent in listing_type.dependents_of(def.name) {
            self.values.remove(dependent.name);
        }
        self.errors.remove(def.name);
        Ok(())
    }

    /// Applies a whole posted form in schema order.
    ///
    /// Unchanged values are skipped so their errors stay visible. When a
    /// parent changes in the batch, the posted dependent value is dropped:
    /// it was chosen against the old parent value.
    pub fn apply(&mut self, posted: &HashMap<String, String>) -> Result<(), FormError> {
        let listing_type = self.selected.ok_or(FormError::NoTypeSelected)?;
        self.ensure_editing()?;

        let mut changed: Vec<&'static str> = Vec::new();
        for def in listing_type.fields() {
            let Some(value) = posted.get(def.name) else {
                continue;
            };
            if self.value(def.name) == value {
                continue;
            }
            if def
                .kind
                .depends_on()
                .is_some_and(|parent| changed.contains(&parent))
            {
                continue;
            }
            self.set_field(def.name, value.as_str())?;
            changed.push(def.name);
        }
        Ok(())
    }

    /// Recomputes the error map from the active schema.
    pub fn validate(&mut self) -> Result<(), FieldErrors> {
        let fields = self.selected.map(ListingType::fields).unwrap_or(&[]);
        self.errors = validate_fields(fields, &self.values);
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors.clone())
        }
    }

    /// Validates and, on success, moves to [`SubmitPhase::Submitting`].
    /// A failed validation leaves the form editable with its errors set.
    pub fn submit(&mut self) -> Result<Submission, FormError> {
        let listing_type = self.selected.ok_or(FormError::NoTypeSelected)?;
        self.ensure_editing()?;
        self.validate().map_err(FormError::Invalid)?;

        self.submissions += 1;
        self.phase = SubmitPhase::Submitting;
        Ok(Submission {
            id: self.submissions,
            listing_type,
            values: self.values.clone(),
        })
    }

    /// Submitting -> Succeeded. Ignored unless `id` is the live submission.
    pub fn complete_submission(&mut self, id: u64) -> bool {
        if self.phase != SubmitPhase::Submitting || self.submissions != id {
            return false;
        }
        self.phase = SubmitPhase::Succeeded;
        true
    }

    /// Succeeded -> initial state. Ignored unless `id` is the live submission.
    pub fn finish_submission(&mut self, id: u64) -> bool {
        if self.phase != SubmitPhase::Succeeded || self.submissions != id {
            return false;
        }
        self.reset();
        true
    }

    /// Options for a conditional select, or `None` while it is hidden.
    pub fn conditional_options(&self, field: &str) -> Option<&'static [&'static str]> {
        let listing_type = self.selected?;
        let def = listing_type.field(field)?;
        let parent = def.kind.depends_on()?;
        let parent_value = self.value(parent);
        if parent_value.is_empty() {
            return None;
        }
        self.deps.resolve(listing_type, def.name, parent, parent_value)
    }

    /// Fields to render, in schema order, skipping hidden conditional selects.
    pub fn visible_fields(&self) -> Vec<VisibleField<'_>> {
        let Some(listing_type) = self.selected else {
            return Vec::new();
        };

        listing_type
            .fields()
            .iter()
            .filter_map(|def| {
                let options = match def.kind {
                    FieldKind::Select(options) => options,
                    FieldKind::ConditionalSelect { .. } => self.conditional_options(def.name)?,
                    _ => &[],
                };
                Some(VisibleField {
                    def,
                    options,
                    value: self.value(def.name),
                    error: self.error(def.name),
                })
            })
            .collect()
    }

    fn ensure_editing(&self) -> Result<(), FormError> {
        match self.phase {
            SubmitPhase::Editing => Ok(()),
            SubmitPhase::Submitting | SubmitPhase::Succeeded => Err(FormError::SubmissionInProgress),
        }
    }
}

/// Required-field check over a field list. Visibility is not considered:
/// a required conditional select is reported even while hidden.
pub fn validate_fields(fields: &[FieldDef], values: &FieldValues) -> FieldErrors {
    fields
        .iter()
        .filter(|f| f.required)
        .filter(|f| values.get(f.name).map_or(true, |v| v.trim().is_empty()))
        .map(|f| (f.name, format!("{} is required", f.label)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB_VALUES: [(&str, &str); 9] = [
        ("title", "Backend Engineer"),
        ("company", "Paystack"),
        ("location", "Lagos"),
        ("jobType", "Full-time"),
        ("industry", "Technology"),
        ("experienceLevel", "Mid Level"),
        ("salaryRange", "₦500k - ₦1M"),
        ("workArrangement", "Hybrid"),
        ("description", "Build payment APIs."),
    ];

    fn form() -> AddListingForm {
        AddListingForm::new(Arc::new(DependentOptions::standard().unwrap()))
    }

    fn job_form_without(skip: Option<&str>) -> AddListingForm {
        let mut form = form();
        form.select_type(ListingType::Job).unwrap();
        for (name, value) in JOB_VALUES {
            if Some(name) != skip {
                form.set_field(name, value).unwrap();
            }
        }
        form
    }

    fn job_errors(form: &AddListingForm) -> usize {
        JOB_VALUES.iter().filter(|(name, _)| form.error(name).is_some()).count()
    }

    fn job_values(form: &AddListingForm) -> usize {
        JOB_VALUES.iter().filter(|(name, _)| !form.value(name).is_empty()).count()
    }

    #[test]
    fn restaurant_resolves_subcategories() {
        let mut form = form();
        form.select_type(ListingType::Place).unwrap();

        assert_eq!(form.conditional_options("subcategory"), None);

        form.set_field("category", "Restaurant").unwrap();
        let options = form.conditional_options("subcategory").unwrap();

        assert!(options.contains(&"Fast Food"));
        assert!(options.contains(&"Fine Dining"));
    }

    #[test]
    fn changing_category_clears_subcategory() {
        let mut form = form();
        form.select_type(ListingType::Place).unwrap();
        form.set_field("category", "Restaurant").unwrap();
        form.set_field("subcategory", "Fine Dining").unwrap();

        form.set_field("category", "Cafe").unwrap();

        assert_eq!(form.value("subcategory"), "");
        assert_eq!(
            form.conditional_options("subcategory").and_then(|o| o.first().copied()),
            Some("Coffee Shop")
        );
    }

    #[test]
    fn hidden_subcategory_is_not_rendered() {
        let mut form = form();
        form.select_type(ListingType::Place).unwrap();

        let names: Vec<_> = form.visible_fields().iter().map(|f| f.def.name).collect();
        assert!(!names.contains(&"subcategory"));

        form.set_field("category", "Shop").unwrap();
        let names: Vec<_> = form.visible_fields().iter().map(|f| f.def.name).collect();
        assert_eq!(names[..3], ["name", "category", "subcategory"]);
    }

    #[test]
    fn complete_job_form_submits() {
        let mut form = job_form_without(None);

        let submission = form.submit().expect("all required fields present");

        assert_eq!(submission.listing_type, ListingType::Job);
        assert_eq!(submission.values.len(), 9);
        assert_eq!(job_errors(&form), 0);
        assert_eq!(form.phase(), SubmitPhase::Submitting);
    }

    #[test]
    fn each_missing_job_field_yields_one_error() {
        for (name, _) in JOB_VALUES {
            let mut form = job_form_without(Some(name));
            let label = ListingType::Job.field(name).unwrap().label;

            let err = form.submit().unwrap_err();

            let FormError::Invalid(errors) = err else {
                panic!("expected validation failure for {name}");
            };
            assert_eq!(errors.len(), 1, "{name}");
            assert_eq!(errors[name], format!("{label} is required"));
            assert_eq!(form.phase(), SubmitPhase::Editing);
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = job_form_without(None);
        form.set_field("company", "   ").unwrap();

        let errors = form.validate().unwrap_err();

        assert_eq!(errors.get("company").map(String::as_str), Some("Company is required"));
    }

    #[test]
    fn setting_a_field_clears_only_its_error() {
        let mut form = form();
        form.select_type(ListingType::Job).unwrap();
        let _ = form.validate();
        assert_eq!(job_errors(&form), 9);

        form.set_field("title", "x").unwrap();

        assert_eq!(form.error("title"), None);
        assert_eq!(job_errors(&form), 8);
        // optimistic: blanking the field again does not bring the error back
        form.set_field("title", "").unwrap();
        assert_eq!(form.error("title"), None);
    }

    #[test]
    fn selecting_a_type_resets_values_and_errors() {
        let mut form = job_form_without(Some("title"));
        let _ = form.validate();

        form.select_type(ListingType::Car).unwrap();

        assert_eq!(form.selected(), Some(ListingType::Car));
        assert_eq!(job_values(&form), 0);
        assert_eq!(form.error("title"), None);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let mut form = form();
        assert_eq!(form.set_field("title", "x"), Err(FormError::NoTypeSelected));

        form.select_type(ListingType::Event).unwrap();
        let err = form.set_field("salary", "x").unwrap_err();

        assert_eq!(
            err,
            FormError::UnknownField {
                listing_type: "event",
                field: "salary".to_string()
            }
        );
    }

    #[test]
    fn validation_ignores_visibility_of_conditional_fields() {
        static FIELDS: [FieldDef; 2] = [
            FieldDef::new(
                "kind",
                "Kind",
                FieldKind::Select(&["Restaurant", "Cafe"]),
            ),
            FieldDef::new(
                "subkind",
                "Sub Kind",
                FieldKind::ConditionalSelect { depends_on: "kind" },
            )
            .required(),
        ];

        // parent unset, so `subkind` would not render, yet it is still reported
        let errors = validate_fields(&FIELDS, &FieldValues::new());

        assert_eq!(errors.len(), 1);
        assert_eq!(errors["subkind"], "Sub Kind is required");
    }

    #[test]
    fn batch_apply_drops_stale_dependent_value() {
        let mut form = form();
        form.select_type(ListingType::Place).unwrap();
        form.set_field("category", "Restaurant").unwrap();
        form.set_field("subcategory", "Buffet").unwrap();

        let posted: HashMap<String, String> = [
            ("name", "Kilimanjaro"),
            ("category", "Cafe"),
            ("subcategory", "Buffet"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        form.apply(&posted).unwrap();

        assert_eq!(form.value("name"), "Kilimanjaro");
        assert_eq!(form.value("category"), "Cafe");
        assert_eq!(form.value("subcategory"), "");
    }

    #[test]
    fn batch_apply_keeps_dependent_when_parent_unchanged() {
        let mut form = form();
        form.select_type(ListingType::Place).unwrap();
        form.set_field("category", "Shop").unwrap();

        let posted: HashMap<String, String> = [("category", "Shop"), ("subcategory", "Pharmacy")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        form.apply(&posted).unwrap();

        assert_eq!(form.value("subcategory"), "Pharmacy");
    }

    #[test]
    fn submission_lifecycle_returns_to_type_picker() {
        let mut form = job_form_without(None);
        let submission = form.submit().unwrap();

        assert_eq!(form.set_field("title", "x"), Err(FormError::SubmissionInProgress));
        assert!(matches!(form.submit(), Err(FormError::SubmissionInProgress)));
        assert!(!form.finish_submission(submission.id));

        assert!(form.complete_submission(submission.id));
        assert_eq!(form.phase(), SubmitPhase::Succeeded);

        assert!(form.finish_submission(submission.id));
        assert_eq!(form.selected(), None);
        assert_eq!(form.phase(), SubmitPhase::Editing);
        assert_eq!(job_values(&form), 0);
    }

    #[test]
    fn stale_submission_ids_are_ignored() {
        let mut form = job_form_without(None);
        let first = form.submit().unwrap();
        form.reset();
        form.select_type(ListingType::Job).unwrap();
        for (name, value) in JOB_VALUES {
            form.set_field(name, value).unwrap();
        }
        let second = form.submit().unwrap();

        assert_ne!(first.id, second.id);
        assert!(!form.complete_submission(first.id));
        assert_eq!(form.phase(), SubmitPhase::Submitting);
        assert!(form.complete_submission(second.id));
    }
}
