use crate::forms::{FieldKind, VisibleField};
use maud::{html, Markup};

// Selects re-render the panel so dependent fields appear or reset; every
// other field is carried along by `hx-include`.
const FIELD_ENDPOINT: &str = "/add-listing/field";

pub fn form_field(field: &VisibleField<'_>) -> Markup {
    let def = field.def;
    let id = format!("field-{}", def.name);
    let has_error = field.error.is_some();
    let placeholder = def
        .placeholder
        .map(str::to_string)
        .unwrap_or_else(|| format!("Enter {}", def.label));

    html! {
        div.field.has-error[has_error] {
            label for=(id) {
                (def.label)
                @if def.required { span class="required" { " *" } }
            }

            @match def.kind {
                FieldKind::Select(_) | FieldKind::ConditionalSelect { .. } => {
                    select
                        id=(id)
                        name=(def.name)
                        hx-post=(FIELD_ENDPOINT)
                        hx-trigger="change"
                        hx-target="#add-listing"
                        hx-swap="outerHTML"
                        hx-include="closest form"
                    {
                        option value="" selected[field.value.is_empty()] { "Select " (def.label) }
                        @for option in field.options {
                            option value=(option) selected[*option == field.value] { (option) }
                        }
                    }
                }
                FieldKind::TextArea => {
                    textarea id=(id) name=(def.name) rows="4" placeholder=(placeholder) { (field.value) }
                }
                FieldKind::Number { min, max } => {
                    input
                        type="number"
                        id=(id)
                        name=(def.name)
                        value=(field.value)
                        min=[min]
                        max=[max.map(|m| m.resolve())]
                        placeholder=(placeholder);
                }
                kind => {
                    input
                        type=(kind.input_type())
                        id=(id)
                        name=(def.name)
                        value=(field.value)
                        placeholder=(placeholder);
                }
            }

            @if let Some(error) = field.error {
                p class="field-error" { (error) }
            }
        }
    }
}
