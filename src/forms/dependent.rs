// src/forms/dependent.rs
//
// Option lists for conditional selects, keyed by
// (listing type, parent field, parent value) -> dependent field -> options.

use crate::forms::schema::{FieldKind, ListingType, PLACE_CATEGORIES};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use thiserror::Error;

const PLACE_SUBCATEGORIES: &[(&str, &[&str])] = &[
    (
        "Restaurant",
        &[
            "Fast Food",
            "Fine Dining",
            "Casual Dining",
            "Food Truck",
            "Buffet",
            "Cafe Restaurant",
        ],
    ),
    (
        "Cafe",
        &[
            "Coffee Shop",
            "Internet Cafe",
            "Bakery Cafe",
            "Tea House",
            "Juice Bar",
        ],
    ),
    (
        "Shop",
        &[
            "Grocery Store",
            "Clothing Store",
            "Electronics",
            "Pharmacy",
            "Bookstore",
            "Hardware Store",
            "Gift Shop",
        ],
    ),
    (
        "Service",
        &[
            "Beauty Salon",
            "Auto Repair",
            "Laundry",
            "Cleaning Service",
            "Photography",
            "Tutoring",
            "Legal Service",
        ],
    ),
];

/// One row of the dependent-options table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependentRule {
    pub listing_type: ListingType,
    pub parent: &'static str,
    pub parent_value: &'static str,
    pub field: &'static str,
    pub options: &'static [&'static str],
}

/// The rules shipped with the directory.
pub fn standard_rules() -> Vec<DependentRule> {
    debug_assert_eq!(PLACE_SUBCATEGORIES.len(), PLACE_CATEGORIES.len());

    PLACE_SUBCATEGORIES
        .iter()
        .map(|&(category, options)| DependentRule {
            listing_type: ListingType::Place,
            parent: "category",
            parent_value: category,
            field: "subcategory",
            options,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("{listing_type:?}: `{field}` is not a conditional select depending on `{parent}`")]
    NotConditional {
        listing_type: ListingType,
        field: &'static str,
        parent: &'static str,
    },

    #[error("{listing_type:?}: `{field}` depends on `{parent}`, which is not a select field")]
    InvalidParent {
        listing_type: ListingType,
        field: &'static str,
        parent: &'static str,
    },

    #[error("{listing_type:?}: `{parent}` has no option `{parent_value}`")]
    UnknownParentValue {
        listing_type: ListingType,
        parent: &'static str,
        parent_value: &'static str,
    },

    #[error("{listing_type:?}: no options for `{field}` when `{parent}` = `{parent_value}`")]
    MissingOptions {
        listing_type: ListingType,
        field: &'static str,
        parent: &'static str,
        parent_value: &'static str,
    },

    #[error("{listing_type:?}: options for `{field}` when `{parent}` = `{parent_value}` given twice")]
    Duplicate {
        listing_type: ListingType,
        field: &'static str,
        parent: &'static str,
        parent_value: &'static str,
    },
}

type OptionsByField = BTreeMap<&'static str, &'static [&'static str]>;

/// Validated lookup table for conditional selects.
///
/// Construction checks that every option of every parent select has a
/// non-empty option list for each of its dependents, so a visible parent
/// value never leads to a silently missing field.
#[derive(Debug, Clone)]
pub struct DependentOptions {
    table: BTreeMap<(ListingType, &'static str), BTreeMap<&'static str, OptionsByField>>,
}

impl DependentOptions {
    pub fn standard() -> Result<Self, SchemaError> {
        Self::from_rules(standard_rules())
    }

    pub fn from_rules(rules: impl IntoIterator<Item = DependentRule>) -> Result<Self, SchemaError> {
        let mut table: BTreeMap<(ListingType, &'static str), BTreeMap<&'static str, OptionsByField>> =
            BTreeMap::new();

        for rule in rules {
            check_rule(&rule)?;

            let by_field = table
                .entry((rule.listing_type, rule.parent))
                .or_default()
                .entry(rule.parent_value)
                .or_default();
            if by_field.insert(rule.field, rule.options).is_some() {
                return Err(SchemaError::Duplicate {
                    listing_type: rule.listing_type,
                    field: rule.field,
                    parent: rule.parent,
                    parent_value: rule.parent_value,
                });
            }
        }

        let deps = Self { table };
        deps.check_complete()?;
        Ok(deps)
    }

    /// Options for `field` given the parent's current value.
    /// `None` when the parent value is unknown or the list is empty.
    pub fn resolve(
        &self,
        listing_type: ListingType,
        field: &str,
        parent: &'static str,
        parent_value: &str,
    ) -> Option<&'static [&'static str]> {
        self.table
            .get(&(listing_type, parent))?
            .get(parent_value)?
            .get(field)
            .copied()
            .filter(|options| !options.is_empty())
    }

    fn check_complete(&self) -> Result<(), SchemaError> {
        for listing_type in ListingType::iter() {
            for field in listing_type.fields() {
                let Some(parent) = field.kind.depends_on() else {
                    continue;
                };
                let parent_options = parent_options(listing_type, field.name, parent)?;

                for &parent_value in parent_options {
                    if self
                        .resolve(listing_type, field.name, parent, parent_value)
                        .is_none()
                    {
                        return Err(SchemaError::MissingOptions {
                            listing_type,
                            field: field.name,
                            parent,
                            parent_value,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

fn check_rule(rule: &DependentRule) -> Result<(), SchemaError> {
    let is_conditional = rule
        .listing_type
        .field(rule.field)
        .and_then(|f| f.kind.depends_on())
        == Some(rule.parent);
    if !is_conditional {
        return Err(SchemaError::NotConditional {
            listing_type: rule.listing_type,
            field: rule.field,
            parent: rule.parent,
        });
    }

    let options = parent_options(rule.listing_type, rule.field, rule.parent)?;
    if !options.contains(&rule.parent_value) {
        return Err(SchemaError::UnknownParentValue {
            listing_type: rule.listing_type,
            parent: rule.parent,
            parent_value: rule.parent_value,
        });
    }

    if rule.options.is_empty() {
        return Err(SchemaError::MissingOptions {
            listing_type: rule.listing_type,
            field: rule.field,
            parent: rule.parent,
            parent_value: rule.parent_value,
        });
    }
    Ok(())
}

fn parent_options(
    listing_type: ListingType,
    field: &'static str,
    parent: &'static str,
) -> Result<&'static [&'static str], SchemaError> {
    match listing_type.field(parent).map(|f| f.kind) {
        Some(FieldKind::Select(options)) => Ok(options),
        _ => Err(SchemaError::InvalidParent {
            listing_type,
            field,
            parent,
        }),
    }
}
