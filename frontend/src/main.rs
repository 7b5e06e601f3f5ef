use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

mod booking;
mod config;
mod notice;
mod pages {
    pub mod faq;
    pub mod landing;
    pub mod privacy;
}
mod components {
    pub mod booking_form;
    pub mod contact;
    pub mod footer;
    pub mod services;
    pub mod testimonials;
}

use pages::{
    landing::Landing,
    privacy::{NotFound, PrivacyNotice},
};

/// Scroll offset after which the nav switches to its solid background.
const NAV_SCROLL_THRESHOLD: f64 = 80.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacidad")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyNotice /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

// (anchor, label)
const NAV_LINKS: &[(&str, &str)] = &[
    ("/#servicios", "Servicios"),
    ("/#testimonios", "Testimonios"),
    ("/#preguntas", "Preguntas"),
    ("/#contacto", "Contacto"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().map(|window| {
                    let scroll_callback = Closure::<dyn Fn()>::new(move || {
                        if let Some(scroll_y) = window_scroll_y() {
                            is_scrolled.set(scroll_y > NAV_SCROLL_THRESHOLD);
                        }
                    });
                    if window
                        .add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .is_err()
                    {
                        warn!("Failed to register scroll listener");
                    }
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 100;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                    }
                    .nav-logo {
                        font-weight: 700;
                        font-size: 1.3rem;
                        color: #8e2f56;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        gap: 1.5rem;
                        align-items: center;
                    }
                    .nav-link {
                        color: #444;
                        text-decoration: none;
                    }
                    .nav-cta {
                        padding: 0.5rem 1.25rem;
                        border-radius: 999px;
                        background: #8e2f56;
                        color: #fff;
                        text-decoration: none;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #8e2f56;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            width: 100%;
                            padding: 1rem 0;
                            background: #fff;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Matrona Ginecología"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a key={*href} href={*href} class="nav-link" onclick={close_menu.clone()}>
                            {*label}
                        </a>
                    }) }
                    <a href="/#agendar" class="nav-cta" onclick={close_menu.clone()}>
                        {"Agendar"}
                    </a>
                </div>
            </div>
        </nav>
    }
}

fn window_scroll_y() -> Option<f64> {
    window().and_then(|window| window.scroll_y().ok())
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
