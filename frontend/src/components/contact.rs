use yew::prelude::*;

use crate::config::{self, CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, OPENING_HOURS};

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contacto" class="contact-section">
            <style>
                {r#"
                    .contact-section {
                        padding: 5rem 2rem;
                        text-align: center;
                    }
                    .contact-section h2 {
                        color: #8e2f56;
                        font-size: 2.2rem;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 2rem;
                        max-width: 900px;
                        margin: 2.5rem auto 0;
                        text-align: left;
                    }
                    .contact-grid h3 {
                        color: #8e2f56;
                        margin-bottom: 0.5rem;
                    }
                    .contact-grid p, .contact-grid li {
                        color: #555;
                        line-height: 1.6;
                    }
                    .contact-grid ul {
                        list-style: none;
                        padding: 0;
                    }
                    .whatsapp-link {
                        color: #1ebe5a;
                        font-weight: 600;
                        text-decoration: none;
                    }
                "#}
            </style>
            <h2>{"Contacto"}</h2>
            <div class="contact-grid">
                <div>
                    <h3>{"Dirección"}</h3>
                    <p>{CONTACT_ADDRESS}</p>
                </div>
                <div>
                    <h3>{"Teléfono y correo"}</h3>
                    <p>{CONTACT_PHONE}</p>
                    <p><a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a></p>
                    <p>
                        <a
                            class="whatsapp-link"
                            href={config::whatsapp_chat_url()}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"Escríbenos por WhatsApp"}
                        </a>
                    </p>
                </div>
                <div>
                    <h3>{"Horario de atención"}</h3>
                    <ul>
                        { for OPENING_HOURS.iter().map(|(days, hours)| html! {
                            <li key={*days}>{format!("{}: {}", days, hours)}</li>
                        }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}
