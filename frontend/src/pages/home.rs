use yew::prelude::*;

use crate::components::about::About;
use crate::components::catalogue::CatalogueSection;
use crate::components::contact::ContactSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::legal::LegalPanel;
use crate::components::nav::{Nav, PhoneBanner};
use crate::components::realisations::Realisations;
use crate::components::scroll_top::ScrollTopButton;
use crate::components::services::ServicesSection;
use crate::content::projects::PROJECTS;
use crate::content::services::SERVICES;
use crate::utils::window::{scroll_to_top, use_scrolled};

/// Pixels scrolled before the nav turns compact and the back-to-top button shows
const SCROLLED_THRESHOLD: f64 = 20.0;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                scroll_to_top();
                || ()
            },
            (),
        );
    }
    let scrolled = use_scrolled(SCROLLED_THRESHOLD);

    html! {
        <div class="home-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <PhoneBanner />
            <Nav scrolled={scrolled} />
            <Hero />
            <About />
            <ServicesSection services={SERVICES} />
            <CatalogueSection />
            <Realisations services={SERVICES} projects={PROJECTS} />
            <LegalPanel />
            <ContactSection />
            <ScrollTopButton visible={scrolled} />
            <Footer />
        </div>
    }
}
