use gloo_console::{log, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::state::contact::{ContactField, ContactForm, MailComposer, ValidationError, SUBJECT_OPTIONS};
use crate::utils::window::hand_off;

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_state(ContactForm::default);
    let error = use_state(|| None::<ValidationError>);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(form.update_field(ContactField::Name, input.value()));
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(form.update_field(ContactField::Email, input.value()));
        })
    };
    let on_subject = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(form.update_field(ContactField::Subject, select.value()));
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(form.update_field(ContactField::Message, textarea.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match MailComposer::from_config().submit(&form) {
                Ok(href) => {
                    log!("Handing contact request to the mail client");
                    error.set(None);
                    hand_off(&href);
                }
                Err(err) => {
                    warn!("Contact form rejected:", err.to_string());
                    error.set(Some(err));
                }
            }
        })
    };

    let field_class = |field: ContactField| {
        classes!(
            "form-control",
            (*error)
                .as_ref()
                .filter(|err| err.is_missing(field))
                .map(|_| "invalid")
        )
    };

    html! {
        <section id="contact" class="contact-section">
            <div class="contact-content">
                <div class="contact-info">
                    <h3 class="section-kicker">{"Contact"}</h3>
                    <h4 class="section-title">{"Parlons de votre Projet"}</h4>
                    <p>{"Nos experts sont disponibles pour analyser vos besoins et vous proposer des solutions techniques optimales."}</p>
                    <div class="contact-item">
                        <i class="fas fa-phone"></i>
                        <div>
                            <p class="contact-item-title">{"Lignes Directes"}</p>
                            {for config::DIRECT_LINES.iter().map(|line| html! {
                                <p><a href={config::tel_href(line)}>{*line}</a></p>
                            })}
                        </div>
                    </div>
                    <div class="contact-item">
                        <i class="fas fa-location-dot"></i>
                        <div>
                            <p class="contact-item-title">{"Siège Social"}</p>
                            {for config::HEAD_OFFICE.iter().map(|line| html! { <p>{*line}</p> })}
                        </div>
                    </div>
                </div>
                <form class="contact-form" onsubmit={onsubmit}>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="contact-name">{ContactField::Name.label()}</label>
                            <input
                                id="contact-name"
                                type="text"
                                required=true
                                class={field_class(ContactField::Name)}
                                value={form.name.clone()}
                                oninput={on_name}
                                placeholder="Jean Dupont"
                            />
                        </div>
                        <div class="form-group">
                            <label for="contact-email">{ContactField::Email.label()}</label>
                            <input
                                id="contact-email"
                                type="email"
                                required=true
                                class={field_class(ContactField::Email)}
                                value={form.email.clone()}
                                oninput={on_email}
                                placeholder="jean@entreprise.com"
                            />
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="contact-subject">{ContactField::Subject.label()}</label>
                        <select id="contact-subject" class="form-control" onchange={on_subject}>
                            {for SUBJECT_OPTIONS.iter().map(|option| html! {
                                <option value={*option} selected={form.subject == *option}>{*option}</option>
                            })}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="contact-message">{ContactField::Message.label()}</label>
                        <textarea
                            id="contact-message"
                            rows="4"
                            required=true
                            class={field_class(ContactField::Message)}
                            value={form.message.clone()}
                            oninput={on_message}
                            placeholder="Décrivez votre besoin en quelques mots..."
                        />
                    </div>
                    if let Some(err) = (*error).as_ref() {
                        <p class="form-error" role="alert">{err.to_string()}</p>
                    }
                    <button type="submit" class="form-submit">{"Envoyer la demande"}</button>
                </form>
            </div>
        </section>
    }
}
