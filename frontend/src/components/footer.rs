use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer id="footer" class="site-footer">
            <div class="footer-brand">
                <img src="/assets/logo.png" alt="NES Neema Engineering Supply" />
                <div>
                    <p class="footer-name">{"NEEMA ENGENEERING SUPPLY"}</p>
                    <p class="footer-copy">{format!("© {} - Tous droits réservés", config::COPYRIGHT_YEAR)}</p>
                </div>
            </div>
            <div class="footer-links">
                <a href={format!("mailto:{}", config::get_contact_email())} title="Nous écrire"><i class="fas fa-envelope"></i></a>
                <a href="#contact" title="Contact & Adresse"><i class="fas fa-location-dot"></i></a>
                <a href="#legal" title="Informations légales"><i class="fas fa-scale-balanced"></i></a>
            </div>
        </footer>
    }
}
