use gloo_console::log;
use yew::prelude::*;

use crate::models::catalog::{category_title, Project, ServiceCategory};
use crate::state::gallery::{filter_label, Gallery, FILTER_BAR};
use crate::state::lightbox::Lightbox;

#[derive(Properties, PartialEq)]
pub struct RealisationsProps {
    pub services: &'static [ServiceCategory],
    pub projects: &'static [Project],
}

/// Portfolio section: filter bar, project cards and the lightbox.
#[function_component(Realisations)]
pub fn realisations(props: &RealisationsProps) -> Html {
    let projects = props.projects;
    let gallery = use_state(move || Gallery::new(projects));
    let lightbox = use_state(Lightbox::closed);

    let on_filter = {
        let gallery = gallery.clone();
        Callback::from(move |category: &'static str| {
            log!("Gallery filter:", category);
            gallery.set(gallery.with_filter(category));
        })
    };
    let on_open = {
        let lightbox = lightbox.clone();
        Callback::from(move |project: &'static Project| {
            let mut next = *lightbox;
            next.select(project);
            lightbox.set(next);
        })
    };
    let on_close = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *lightbox;
            next.clear();
            lightbox.set(next);
        })
    };

    html! {
        <section id="realisations" class="realisations-section">
            <div class="section-header">
                <div>
                    <h3 class="section-kicker">{"Portfolio"}</h3>
                    <h4 class="section-title">{"Nos Réalisations"}</h4>
                </div>
                <div class="gallery-filters">
                    {for FILTER_BAR.iter().copied().map(|category| {
                        let onclick = {
                            let on_filter = on_filter.clone();
                            Callback::from(move |_: MouseEvent| on_filter.emit(category))
                        };
                        html! {
                            <button
                                key={category}
                                type="button"
                                class={classes!("gallery-filter", gallery.is_selected(category).then_some("active"))}
                                onclick={onclick}
                            >
                                {filter_label(props.services, category)}
                            </button>
                        }
                    })}
                </div>
            </div>
            <div class="gallery-grid">
                {for gallery.visible_projects().into_iter().map(|project| {
                    let onclick = {
                        let on_open = on_open.clone();
                        Callback::from(move |_: MouseEvent| on_open.emit(project))
                    };
                    html! {
                        <div key={project.id} class="project-card" onclick={onclick}>
                            <div class="project-media">
                                <img src={project.image} alt={project.title} loading="lazy" referrerpolicy="no-referrer" />
                            </div>
                            <div class="project-info">
                                <span class="project-category">{category_title(props.services, project).unwrap_or_default()}</span>
                                <h4>{project.title}</h4>
                                <p>{project.description}</p>
                            </div>
                        </div>
                    }
                })}
            </div>
            if let Some(project) = lightbox.selected() {
                <ProjectModal
                    project={*project}
                    category={category_title(props.services, project)}
                    on_close={on_close}
                />
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    project: Project,
    category: Option<&'static str>,
    on_close: Callback<MouseEvent>,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let project = &props.project;
    // Clicks inside the dialog must not reach the backdrop
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="lightbox-backdrop" onclick={props.on_close.clone()}>
            <div class="lightbox" onclick={keep_open}>
                <button type="button" class="lightbox-close" aria-label="Fermer" onclick={props.on_close.clone()}>
                    <i class="fas fa-xmark"></i>
                </button>
                <div class="lightbox-media">
                    <img src={project.image} alt={project.title} referrerpolicy="no-referrer" />
                </div>
                <div class="lightbox-info">
                    <span class="project-category">{props.category.unwrap_or_default()}</span>
                    <h4>{project.title}</h4>
                    <p>{project.description}</p>
                    <button type="button" class="lightbox-dismiss" onclick={props.on_close.clone()}>
                        {"Fermer"}
                    </button>
                </div>
            </div>
        </div>
    }
}
