use log::{info, warn};
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::booking::{BookingField, BookingForm, ServiceType};
use crate::config::{MAX_AGE, MIN_AGE};
use crate::notice::{show_notice, Notice};

fn open_in_new_tab(url: &str) {
    match window() {
        Some(window) => {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                warn!("Failed to open WhatsApp: {:?}", e);
            }
        }
        None => warn!("No window available, cannot open WhatsApp"),
    }
}

fn update_field(form: &UseStateHandle<BookingForm>, field: BookingField, value: String) {
    let mut next = (**form).clone();
    next.set(field, value);
    form.set(next);
}

#[function_component(BookingFormView)]
pub fn booking_form_view() -> Html {
    let form = use_state(BookingForm::default);
    let notice = use_state(|| None::<Notice>);

    let input_callback = |field: BookingField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update_field(&form, field, input.value());
        })
    };

    let on_service_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            update_field(&form, BookingField::ServiceType, select.value());
        })
    };

    let on_concern_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            update_field(&form, BookingField::Concern, textarea.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.submit() {
                Ok(url) => {
                    info!("Booking request composed, handing off to WhatsApp");
                    open_in_new_tab(&url);
                    form.set(next);
                    show_notice(&notice, Notice::Sent);
                }
                Err(err) => {
                    warn!("Booking request rejected: {:?}", err);
                    show_notice(&notice, Notice::Rejected(err));
                }
            }
        })
    };

    html! {
        <section id="agendar" class="booking-section">
            <style>
                {r#"
                    .booking-section {
                        padding: 5rem 2rem;
                        background: #fdf4f6;
                    }
                    .booking-card {
                        max-width: 640px;
                        margin: 0 auto;
                        background: #fff;
                        border-radius: 16px;
                        padding: 2.5rem;
                        box-shadow: 0 8px 32px rgba(160, 60, 100, 0.12);
                    }
                    .booking-card h2 {
                        color: #8e2f56;
                        margin-bottom: 0.5rem;
                    }
                    .booking-card .intro {
                        color: #666;
                        margin-bottom: 2rem;
                    }
                    .booking-form label {
                        display: block;
                        font-weight: 600;
                        color: #444;
                        margin-bottom: 0.4rem;
                    }
                    .booking-form .field {
                        margin-bottom: 1.25rem;
                    }
                    .booking-form input,
                    .booking-form select,
                    .booking-form textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border: 1px solid #e3c5d1;
                        border-radius: 8px;
                        font-size: 1rem;
                        box-sizing: border-box;
                    }
                    .booking-form textarea {
                        min-height: 120px;
                        resize: vertical;
                    }
                    .booking-form button {
                        width: 100%;
                        padding: 1rem;
                        border: none;
                        border-radius: 8px;
                        background: #25d366;
                        color: #fff;
                        font-size: 1.1rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }
                    .booking-form button:hover {
                        background: #1ebe5a;
                    }
                    .notice {
                        padding: 1rem;
                        border-radius: 8px;
                        margin-bottom: 1.5rem;
                    }
                    .notice.success {
                        background: #e6f8ec;
                        color: #1b7a3d;
                    }
                    .notice.error {
                        background: #fdeaea;
                        color: #b3261e;
                    }
                "#}
            </style>
            <div class="booking-card">
                <h2>{"Agenda tu hora"}</h2>
                <p class="intro">
                    {format!(
                        "Completa el formulario y te contactaremos por WhatsApp. Atención para personas de {} a {} años.",
                        MIN_AGE, MAX_AGE
                    )}
                </p>
                {
                    if let Some(current) = (*notice).as_ref() {
                        html! { <div class={current.class()}>{current.text()}</div> }
                    } else {
                        html! {}
                    }
                }
                <form class="booking-form" {onsubmit} novalidate={true}>
                    <div class="field">
                        <label for="full-name">{"Nombre completo"}</label>
                        <input
                            id="full-name"
                            type="text"
                            placeholder="Tu nombre y apellido"
                            value={form.full_name.clone()}
                            oninput={input_callback(BookingField::FullName)}
                        />
                    </div>
                    <div class="field">
                        <label for="email">{"Correo electrónico"}</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="tu@correo.cl"
                            value={form.email.clone()}
                            oninput={input_callback(BookingField::Email)}
                        />
                    </div>
                    <div class="field">
                        <label for="age">{"Edad"}</label>
                        <input
                            id="age"
                            type="number"
                            min={MIN_AGE.to_string()}
                            max={MAX_AGE.to_string()}
                            value={form.age.clone()}
                            oninput={input_callback(BookingField::Age)}
                        />
                    </div>
                    <div class="field">
                        <label for="service-type">{"Servicio"}</label>
                        <select id="service-type" onchange={on_service_change}>
                            <option value="" selected={form.service_type.is_empty()}>
                                {"Selecciona un servicio"}
                            </option>
                            { for ServiceType::ALL.iter().map(|service| html! {
                                <option
                                    value={service.label()}
                                    selected={form.service_type == service.label()}
                                >
                                    {service.label()}
                                </option>
                            }) }
                        </select>
                    </div>
                    <div class="field">
                        <label for="concern">{"Motivo de consulta"}</label>
                        <textarea
                            id="concern"
                            placeholder="Cuéntanos brevemente en qué podemos ayudarte"
                            value={form.concern.clone()}
                            oninput={on_concern_input}
                        />
                    </div>
                    <button type="submit">{"Enviar por WhatsApp"}</button>
                </form>
            </div>
        </section>
    }
}
