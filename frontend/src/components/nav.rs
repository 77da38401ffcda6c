use yew::prelude::*;

use crate::config;
use crate::utils::window::scroll_to_top;

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("Accueil", "#home"),
    ("À Propos", "#about"),
    ("Services", "#services"),
    ("Catalogue", "#catalogue"),
    ("Réalisations", "#realisations"),
];

#[function_component(PhoneBanner)]
pub fn phone_banner() -> Html {
    html! {
        <div class="phone-banner">
            <span class="phone-banner-label">{"Contact direct :"}</span>
            {for config::BANNER_LINES.iter().enumerate().map(|(idx, line)| html! {
                <>
                    if idx > 0 {
                        <span>{"/"}</span>
                    }
                    <a href={config::tel_href(line)}>{*line}</a>
                </>
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scrolled: bool,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };
    let go_home = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_top();
    });

    html! {
        <nav class={classes!("site-nav", props.scrolled.then_some("scrolled"))}>
            <div class="nav-row">
                <button
                    type="button"
                    class="nav-logo"
                    onclick={toggle_menu}
                    aria-label={if *menu_open { "Fermer le menu de navigation" } else { "Ouvrir le menu de navigation" }}
                >
                    <img src="/assets/logo.png" alt="NES Neema Engineering Supply" />
                </button>
                <a href="#home" class="nav-title" onclick={go_home} aria-label="NES Neema Engineering Supply - Accueil">
                    <span class="nav-title-dark">{"NEEMA ENGENEERING"}</span>{" "}
                    <span class="nav-title-red">{"SUPPLY SARLU"}</span>
                </a>
                <a href="#contact" class="nav-cta">{"S'abonner"}</a>
            </div>
            <div class="nav-links">
                {for NAV_LINKS.iter().map(|(name, href)| html! {
                    <a href={*href}>{*name}</a>
                })}
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    {for NAV_LINKS.iter().map(|(name, href)| html! {
                        <a href={*href} onclick={close_menu.clone()}>{*name}</a>
                    })}
                </div>
            }
        </nav>
    }
}
