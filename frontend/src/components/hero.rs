use yew::prelude::*;

use crate::config;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-background">
                <img src="https://picsum.photos/seed/construction/1280/720?blur=2" alt="" referrerpolicy="no-referrer" />
            </div>
            <div class="hero-content">
                <div class="hero-text">
                    <span class="hero-badge">{"Expertise & Fiabilité en RDC"}</span>
                    <h2 class="hero-title">
                        {"Bâtissons"}<br/>
                        <span class="highlight">{"l'Excellence"}</span><br/>
                        {"Industrielle."}
                    </h2>
                    <p class="hero-subtitle">
                        {format!("{} ({}) redéfinit la fourniture industrielle avec des solutions de haute précision pour les secteurs miniers et civils.", config::LEGAL_NAME, config::SHORT_NAME)}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#services" class="hero-cta">{"Nos Services"}</a>
                        <a href="#contact" class="hero-cta secondary">{"Nous Contacter"}</a>
                    </div>
                </div>
                <div class="hero-image">
                    <img src="/assets/hero-nes.png" alt="Ingénieur NES sur chantier" />
                </div>
            </div>
        </section>
    }
}
