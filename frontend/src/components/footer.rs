use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        padding: 2rem;
                        text-align: center;
                        background: #3d1426;
                        color: rgba(255, 255, 255, 0.7);
                        font-size: 0.9rem;
                    }
                    .site-footer a {
                        color: #f5b6cd;
                        text-decoration: none;
                    }
                "#}
            </style>
            <p>{format!("© {} Matrona Ginecología. Todos los derechos reservados.", year)}</p>
            <Link<Route> to={Route::Privacy}>{"Aviso de privacidad"}</Link<Route>>
        </footer>
    }
}
