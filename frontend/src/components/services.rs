use yew::prelude::*;

use crate::models::catalog::ServiceCategory;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub services: &'static [ServiceCategory],
}

#[function_component(ServicesSection)]
pub fn services_section(props: &ServicesProps) -> Html {
    html! {
        <section id="services" class="services-section">
            <div class="section-header">
                <div>
                    <h3 class="section-kicker">{"Notre Expertise"}</h3>
                    <h4 class="section-title">{"Solutions Industrielles sur Mesure"}</h4>
                </div>
                <p class="section-intro">
                    {"Nous combinons savoir-faire technique et logistique de pointe pour répondre aux exigences les plus strictes de vos chantiers."}
                </p>
            </div>
            <div class="services-grid">
                {for props.services.iter().map(|service| html! {
                    <ServiceCard key={service.id} service={*service} />
                })}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: ServiceCategory,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;
    html! {
        <div class="service-card">
            <div class="service-media">
                <img src={service.image} alt={service.title} loading="lazy" referrerpolicy="no-referrer" />
                <div class="service-icon"><i class={service.icon}></i></div>
            </div>
            <div class="service-body">
                <h4>{service.title}</h4>
                <p>{service.description}</p>
                <ul class="service-details">
                    {for service.details.iter().map(|detail| html! { <li>{*detail}</li> })}
                </ul>
            </div>
        </div>
    }
}
