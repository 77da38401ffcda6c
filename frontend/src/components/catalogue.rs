use yew::prelude::*;

use crate::config;

#[function_component(CatalogueSection)]
pub fn catalogue_section() -> Html {
    html! {
        <section id="catalogue" class="catalogue-section">
            <div class="catalogue-text">
                <h3 class="section-kicker">{"Documentation"}</h3>
                <h4 class="section-title">{"Catalogue NES"}</h4>
                <p>
                    {"Consultez notre catalogue complet : pièces de rechange, engins, camions, matériels électriques et solaire, climatisation et génie civil. Téléchargez le PDF pour une consultation hors ligne."}
                </p>
                <a href={config::CATALOGUE_PDF} target="_blank" rel="noopener noreferrer" class="catalogue-download">
                    <i class="fas fa-download"></i>
                    <span>{"Télécharger le catalogue (PDF)"}</span>
                </a>
            </div>
            <div class="catalogue-preview">
                <iframe src={format!("{}#view=fitH", config::CATALOGUE_PDF)} title="Catalogue NES (PDF)"></iframe>
                <p class="catalogue-note">
                    {"Si le document ne s'affiche pas correctement dans votre navigateur, utilisez le bouton ci-dessus pour télécharger le catalogue en PDF."}
                </p>
            </div>
        </section>
    }
}
