use crate::domain::contact::{ContactErrors, ContactForm};
use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup, PreEscaped};

const HIDE_POPUP_JS: &str =
    "setTimeout(function(){var p=document.getElementById('contact-success');if(p)p.remove();},3000);";

const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3963.3662723406884!2d3.379205415316029!3d6.524379295283496!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x103bf50e72f9f3a5%3A0x7c0f123456789abc!2sLagos%2C%20Nigeria!5e0!3m2!1sen!2sng!4v1691061939305!5m2!1sen!2sng";

pub fn contact_page(ctx: &PageContext) -> Markup {
    contact_page_with(&ContactForm::default(), &ContactErrors::new(), false, ctx)
}

/// Full page around a posted form, for browsers without htmx.
pub fn contact_page_with(
    form: &ContactForm,
    errors: &ContactErrors,
    sent: bool,
    ctx: &PageContext,
) -> Markup {
    desktop_layout(
        "Contact",
        ctx,
        html! {
            main class="container contact" {
                h1 { "Get in Touch" }
                div class="grid-2" {
                    div class="card contact-info" {
                        p class="muted" {
                            "Have a question, feedback, or a project idea? We'd love to hear from you."
                        }
                        ul class="contact-lines" {
                            li { "✉ support@contact365.com" }
                            li { "📞 +234 800 123 4567" }
                            li { "📍 Lagos, Nigeria" }
                        }
                        iframe src=(MAP_EMBED) width="100%" height="250" style="border: 0"
                            loading="lazy" referrerpolicy="no-referrer-when-downgrade" {}
                    }
                    (contact_form(form, errors, sent))
                }
            }
        },
    )
}

/// The form block. After a successful send the fields are cleared and a
/// popup is shown for a few seconds.
pub fn contact_form(form: &ContactForm, errors: &ContactErrors, sent: bool) -> Markup {
    html! {
        form id="contact-form" class="card" method="post" action="/contact"
            hx-post="/contact"
            hx-target="#contact-form"
            hx-swap="outerHTML"
            hx-disabled-elt="button"
        {
            (text_input("name", "Name", "text", &form.name, errors))
            (text_input("email", "Email", "email", &form.email, errors))
            div.field.has-error[errors.contains_key("message")] {
                label for="contact-message" { "Message" }
                textarea id="contact-message" name="message" rows="4" { (form.message) }
                @if let Some(error) = errors.get("message") {
                    p class="field-error" { (error) }
                }
            }
            button type="submit" class="btn primary" { "Send Message" }

            @if sent {
                div id="contact-success" class="popup" role="status" {
                    div class="popup-card" {
                        h2 { "Message Sent!" }
                        p { "Thanks for reaching out. We'll get back to you soon." }
                    }
                }
                script { (PreEscaped(HIDE_POPUP_JS)) }
            }
        }
    }
}

fn text_input(name: &str, label: &str, kind: &str, value: &str, errors: &ContactErrors) -> Markup {
    let id = format!("contact-{name}");
    html! {
        div.field.has-error[errors.contains_key(name)] {
            label for=(id) { (label) }
            input type=(kind) id=(id) name=(name) value=(value);
            @if let Some(error) = errors.get(name) {
                p class="field-error" { (error) }
            }
        }
    }
}
