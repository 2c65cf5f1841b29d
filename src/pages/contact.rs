use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::info;
use crate::animation::hooks::use_scroll_to_top;

/// Stand-in for the network round trip.
const SUBMIT_DELAY_MS: u32 = 1_500;
const SUCCESS_VISIBLE_MS: u32 = 5_000;

const CONTACT_INFO: [(&str, &str, &str, Option<&str>); 4] = [
    ("📞", "Phone", "+1 (555) 123-4567", Some("tel:+15551234567")),
    ("✉", "Email", "contact@injuryshield.com", Some("mailto:contact@injuryshield.com")),
    ("📍", "Location", "123 Performance Drive, Suite 100, San Francisco, CA 94105", Some("https://maps.google.com")),
    ("🕘", "Business Hours", "Mon - Fri: 9:00 AM - 6:00 PM", None),
];

const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3153.0947064427673!2d-122.39591788468204!3d37.78779997975772!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x8085807c23cc4ebb%3A0x1c5c46524764a898!2sFinancial%20District%2C%20San%20Francisco%2C%20CA!5e0!3m2!1sen!2sus!4v1645004417945!5m2!1sen!2sus";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "subject" => Some(ContactField::Subject),
            "message" => Some(ContactField::Message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Every field is required; the email only needs to look like one.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|value| !value.trim().is_empty())
            && self.email.contains('@')
    }
}

fn external_link_attrs(link: &str) -> (Option<&'static str>, Option<&'static str>) {
    if link.starts_with("http") {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let is_submitting = use_state(|| false);
    let submit_success = use_state(|| false);

    use_scroll_to_top();

    let on_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let (name, value) = if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                (input.name(), input.value())
            } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                (area.name(), area.value())
            } else {
                return;
            };
            if let Some(field) = ContactField::from_name(&name) {
                let mut next = (*form).clone();
                next.set(field, value);
                form.set(next);
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let submit_success = submit_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting || !form.is_complete() {
                return;
            }
            is_submitting.set(true);

            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let submit_success = submit_success.clone();
            spawn_local(async move {
                TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                info!("Contact form submitted: {}", form.subject);

                is_submitting.set(false);
                submit_success.set(true);
                form.set(ContactForm::default());

                Timeout::new(SUCCESS_VISIBLE_MS, move || submit_success.set(false)).forget();
            });
        })
    };

    html! {
        <div class="contact">
            <section class="contact-hero">
                <div class="container">
                    <h1>{"Get in Touch"}</h1>
                    <p class="muted">
                        {"Have questions? We'd love to hear from you. Send us a message and we'll respond as soon as possible."}
                    </p>
                </div>
            </section>

            <section class="section section-dark">
                <div class="container">
                    <div class="grid-4 contact-info">
                        {
                            CONTACT_INFO.iter().map(|(icon, title, content, link)| html! {
                                <div class="card">
                                    <h3><span class="accent">{*icon}</span>{" "}{*title}</h3>
                                    {
                                        match link {
                                            Some(link) => {
                                                let (target, rel) = external_link_attrs(link);
                                                html! { <a href={*link} class="muted" {target} {rel}>{*content}</a> }
                                            }
                                            None => html! { <p class="muted">{*content}</p> },
                                        }
                                    }
                                </div>
                            }).collect::<Html>()
                        }
                    </div>

                    <div class="contact-grid">
                        <div class="card">
                            <h2>{"Send us a Message"}</h2>
                            <form class="contact-form" onsubmit={on_submit}>
                                <label for="name">{"Your Name"}</label>
                                <input type="text" id="name" name="name" required=true
                                    value={form.name.clone()} oninput={on_input.clone()} />

                                <label for="email">{"Email Address"}</label>
                                <input type="email" id="email" name="email" required=true
                                    value={form.email.clone()} oninput={on_input.clone()} />

                                <label for="subject">{"Subject"}</label>
                                <input type="text" id="subject" name="subject" required=true
                                    value={form.subject.clone()} oninput={on_input.clone()} />

                                <label for="message">{"Message"}</label>
                                <textarea id="message" name="message" rows="6" required=true
                                    value={form.message.clone()} oninput={on_input} />

                                <button type="submit" class="btn-primary" disabled={*is_submitting}>
                                    { if *is_submitting { "Sending..." } else { "➤ Send Message" } }
                                </button>
                                {
                                    if *submit_success {
                                        html! {
                                            <div class="success-message">
                                                {"Message sent successfully! We'll get back to you soon."}
                                            </div>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </form>
                        </div>

                        <div class="card">
                            <h2>{"Our Location"}</h2>
                            <div class="map-frame">
                                <iframe src={MAP_EMBED} width="100%" height="100%" style="border: 0;"
                                    allowfullscreen=true loading="lazy"></iframe>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .contact { padding-top: 5rem; }
                .contact-hero { padding: 5rem 0; text-align: center; }
                .contact-hero h1 { font-size: 3rem; margin-bottom: 1.5rem; }
                .contact-hero p { font-size: 1.25rem; max-width: 48rem; margin: 0 auto; }
                .contact-info { margin-bottom: 3rem; }
                .contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; }
                .contact-form { display: flex; flex-direction: column; gap: 0.5rem; }
                .contact-form label { color: #9ca3af; font-size: 0.875rem; margin-top: 1rem; }
                .contact-form input, .contact-form textarea {
                    background: #374151;
                    color: #fff;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.5rem 1rem;
                    font: inherit;
                }
                .contact-form button { margin-top: 1.5rem; border-radius: 0.5rem; }
                .success-message { color: #22c55e; text-align: center; margin-top: 1rem; }
                .map-frame { height: 400px; border-radius: 0.5rem; overflow: hidden; }
                @media (max-width: 1024px) {
                    .contact-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Alex Morgan".into());
        form.set(ContactField::Email, "alex@club.example".into());
        form.set(ContactField::Subject, "Team pricing".into());
        form.set(ContactField::Message, "We have 40 athletes.".into());
        form
    }

    #[test]
    fn all_fields_are_required() {
        assert!(filled().is_complete());
        assert!(!ContactForm::default().is_complete());

        let mut form = filled();
        form.set(ContactField::Subject, "   ".into());
        assert!(!form.is_complete());
    }

    #[test]
    fn email_needs_an_at_sign() {
        let mut form = filled();
        form.set(ContactField::Email, "alex.club.example".into());
        assert!(!form.is_complete());
    }

    #[test]
    fn field_names_map_to_fields() {
        assert_eq!(ContactField::from_name("message"), Some(ContactField::Message));
        assert_eq!(ContactField::from_name("phone"), None);
    }

    #[test]
    fn only_web_links_open_in_new_tab() {
        assert_eq!(external_link_attrs("https://maps.google.com").0, Some("_blank"));
        assert_eq!(external_link_attrs("tel:+15551234567"), (None, None));
    }
}
