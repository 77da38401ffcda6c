use yew::prelude::*;

use crate::config;

const VALUES: [(&str, &str, &str); 2] = [
    ("Fiabilité", "Produits certifiés ISO et durables.", "fas fa-shield-halved"),
    ("Expertise", "Techniciens hautement qualifiés.", "fas fa-circle-check"),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about-section">
            <div class="about-content">
                <div class="about-image">
                    <img src="/assets/about-nes.png" alt="Ingénieur NES sur chantier" loading="lazy" />
                    <div class="about-badge">
                        <p class="about-badge-value">{"100%"}</p>
                        <p class="about-badge-label">{"Engagement Qualité"}</p>
                    </div>
                </div>
                <div class="about-text">
                    <h3 class="section-kicker">{"Qui sommes-nous"}</h3>
                    <h4 class="section-title">{"L'Excellence au Service de votre Industrie"}</h4>
                    <p>
                        {format!("{} ({}) s'est imposé comme un acteur incontournable de la fourniture industrielle en République Démocratique du Congo.", config::LEGAL_NAME, config::SHORT_NAME)}
                    </p>
                    <p>
                        {"Notre force réside dans notre capacité à allier réactivité logistique et expertise technique pointue, garantissant à nos partenaires une continuité opérationnelle sans faille."}
                    </p>
                    <div class="about-values">
                        {for VALUES.iter().map(|(title, desc, icon)| html! {
                            <div class="value-card">
                                <i class={*icon}></i>
                                <h5>{*title}</h5>
                                <p>{*desc}</p>
                            </div>
                        })}
                    </div>
                </div>
            </div>
        </section>
    }
}
