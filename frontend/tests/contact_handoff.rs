use nes_site::state::contact::{ContactField, ContactForm, MailComposer};

fn composer() -> MailComposer<'static> {
    MailComposer::new("contact@nes-sarlu.cd", "NES")
}

fn quote_request() -> ContactForm {
    ContactForm::default()
        .update_field(ContactField::Name, "Jean Dupont")
        .update_field(ContactField::Email, "jean@entreprise.com")
        .update_field(ContactField::Subject, "Demande de cotation")
        .update_field(ContactField::Message, "Besoin d'un devis")
}

/// Splits a handoff link into its decoded subject and body.
fn decode(href: &str) -> (String, String) {
    let query = href.split_once('?').map(|(_, q)| q).expect("query string");
    let (subject, body) = query.split_once('&').expect("two parameters");
    let subject = subject.strip_prefix("subject=").expect("subject first");
    let body = body.strip_prefix("body=").expect("body second");
    (
        urlencoding::decode(subject).expect("valid utf-8").into_owned(),
        urlencoding::decode(body).expect("valid utf-8").into_owned(),
    )
}

#[test]
fn quote_request_handoff() {
    let href = composer().submit(&quote_request()).unwrap();
    assert!(href.starts_with("mailto:contact@nes-sarlu.cd?subject="));
    assert!(href.contains("subject=%5BNES%5D%20Demande%20de%20cotation%20-%20Jean%20Dupont"));

    let (_, body) = decode(&href);
    let name = body.find("Nom: Jean Dupont").unwrap();
    let email = body.find("Email: jean@entreprise.com").unwrap();
    let subject = body.find("Objet: Demande de cotation").unwrap();
    let message = body.find("Message:\nBesoin d'un devis").unwrap();
    assert!(name < email && email < subject && subject < message);
}

#[test]
fn decoding_restores_values_verbatim() {
    let form = ContactForm::default()
        .update_field(ContactField::Name, "  Élodie & Fils ")
        .update_field(ContactField::Email, "e+tag@exemple.cd")
        .update_field(ContactField::Subject, "Support & Maintenance")
        .update_field(ContactField::Message, "Ligne 1\nLigne 2 = 50% ?\n#urgent");
    let (subject, body) = decode(&composer().submit(&form).unwrap());
    assert_eq!(subject, "[NES] Support & Maintenance -   Élodie & Fils ");
    assert_eq!(
        body,
        "Nom:   Élodie & Fils \nEmail: e+tag@exemple.cd\nObjet: Support & Maintenance\n\nMessage:\nLigne 1\nLigne 2 = 50% ?\n#urgent"
    );
}

#[test]
fn submit_is_deterministic() {
    let form = quote_request();
    assert_eq!(composer().submit(&form), composer().submit(&form));
}

#[test]
fn submit_does_not_touch_the_form() {
    let form = quote_request();
    let before = form.clone();
    let _ = composer().submit(&form);
    assert_eq!(form, before);
}

#[test]
fn empty_name_is_rejected() {
    let form = ContactForm {
        name: String::new(),
        email: "a@b.com".to_string(),
        subject: "x".to_string(),
        message: "hi".to_string(),
    };
    let err = composer().submit(&form).unwrap_err();
    assert_eq!(err.missing(), &[ContactField::Name]);
    assert!(err.to_string().contains("Nom Complet"));
}

#[test]
fn each_required_field_is_checked() {
    for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
        let form = quote_request().update_field(field, " \t\n");
        let err = composer().submit(&form).unwrap_err();
        assert!(err.is_missing(field), "{} should be reported", field.key());
    }
}

#[test]
fn free_text_subject_is_accepted() {
    let form = quote_request().update_field(ContactField::Subject, "Visite de chantier");
    let (subject, _) = decode(&composer().submit(&form).unwrap());
    assert_eq!(subject, "[NES] Visite de chantier - Jean Dupont");
}
