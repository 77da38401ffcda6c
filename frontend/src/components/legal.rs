use yew::prelude::*;

use crate::config;

/// Company identity and publisher details.
#[function_component(LegalPanel)]
pub fn legal_panel() -> Html {
    let email = config::get_contact_email();
    html! {
        <section id="legal" class="legal-section">
            <h3 class="section-kicker">{"Informations légales"}</h3>
            <h4 class="section-title">{"Mentions & Conformité"}</h4>
            <dl class="legal-list">
                <dt>{"Raison sociale"}</dt>
                <dd>{config::LEGAL_NAME}</dd>
                <dt>{"Nom commercial"}</dt>
                <dd>{config::SHORT_NAME}</dd>
                <dt>{"Forme juridique"}</dt>
                <dd>{config::LEGAL_FORM}</dd>
                <dt>{"Siège social"}</dt>
                <dd>{config::HEAD_OFFICE.join(", ")}</dd>
                <dt>{"Téléphone"}</dt>
                <dd>{config::DIRECT_LINES.join(" / ")}</dd>
                <dt>{"Email"}</dt>
                <dd><a href={format!("mailto:{}", email)}>{email}</a></dd>
            </dl>
            <p class="legal-note">
                {"Les informations transmises via le formulaire de contact sont envoyées depuis votre propre messagerie et ne sont ni collectées ni conservées par ce site."}
            </p>
        </section>
    }
}
