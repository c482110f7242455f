// src/domain/contact.rs

use std::collections::{BTreeMap, HashMap};

/// A validated message from the contact page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub type ContactErrors = BTreeMap<&'static str, String>;

/// Raw values as posted by the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let get = |key: &str| params.get(key).cloned().unwrap_or_default();
        Self {
            name: get("name"),
            email: get("email"),
            message: get("message"),
        }
    }

    /// All three fields are required; the email also needs a plausible shape.
    pub fn validate(&self) -> Result<ContactMessage, ContactErrors> {
        let mut errors = ContactErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert("name", "Name is required".to_string());
        }

        let email = if self.email.trim().is_empty() {
            errors.insert("email", "Email is required".to_string());
            None
        } else {
            let normalized = normalize_email(&self.email);
            if normalized.is_none() {
                errors.insert("email", "Enter a valid email address".to_string());
            }
            normalized
        };

        let message = self.message.trim();
        if message.is_empty() {
            errors.insert("message", "Message is required".to_string());
        }

        match email {
            Some(email) if errors.is_empty() => Ok(ContactMessage {
                name: name.to_string(),
                email,
                message: message.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Option<String> {
    let e = email.trim().to_lowercase();
    if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
        return None;
    }
    Some(e)
}
