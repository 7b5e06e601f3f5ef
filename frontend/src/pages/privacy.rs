use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{CONTACT_EMAIL, WHATSAPP_NUMBER};
use crate::Route;

#[function_component(PrivacyNotice)]
pub fn privacy_notice() -> Html {
    html! {
        <div class="legal-content">
            <style>
                {r#"
                    .legal-content {
                        max-width: 800px;
                        margin: 0 auto;
                        padding: 8rem 2rem 4rem;
                        color: #555;
                        line-height: 1.6;
                    }
                    .legal-content h1, .legal-content h2 {
                        color: #8e2f56;
                    }
                    .legal-links {
                        margin-top: 2rem;
                        text-align: center;
                    }
                "#}
            </style>
            <h1>{"Aviso de privacidad"}</h1>

            <section>
                <h2>{"1. Qué datos pedimos"}</h2>
                <ul>
                    <li>{"Nombre completo"}</li>
                    <li>{"Correo electrónico"}</li>
                    <li>{"Edad"}</li>
                    <li>{"Servicio de interés y motivo de consulta"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. Cómo los usamos"}</h2>
                <p>
                    {format!(
                        "Los datos del formulario no se guardan en este sitio ni se envían a ningún servidor propio. Solo se usan para armar un mensaje que tú envías por WhatsApp al número +{}.",
                        WHATSAPP_NUMBER
                    )}
                </p>
                <p>{"Una vez abierto WhatsApp, el formulario se vacía."}</p>
            </section>

            <section>
                <h2>{"3. Contacto"}</h2>
                <p>{format!("Para consultas sobre tus datos escríbenos a {}.", CONTACT_EMAIL)}</p>
            </section>

            <div class="legal-links">
                <Link<Route> to={Route::Home}>{"Volver al inicio"}</Link<Route>>
            </div>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="legal-content">
            <h1>{"Página no encontrada"}</h1>
            <div class="legal-links">
                <Link<Route> to={Route::Home}>{"Volver al inicio"}</Link<Route>>
            </div>
        </div>
    }
}
