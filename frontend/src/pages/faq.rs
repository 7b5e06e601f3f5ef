use web_sys::MouseEvent;
use yew::prelude::*;
use yew::{Children, Properties};

use crate::config::{MAX_AGE, MIN_AGE};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id="preguntas" class="faq-section">
            <style>
                {r#"
                    .faq-section {
                        padding: 5rem 2rem;
                        max-width: 800px;
                        margin: 0 auto;
                    }
                    .faq-section h2 {
                        color: #8e2f56;
                        text-align: center;
                        font-size: 2.2rem;
                    }
                    .faq-item {
                        border-bottom: 1px solid #f1dbe4;
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        background: none;
                        border: none;
                        padding: 1.25rem 0;
                        font-size: 1.05rem;
                        color: #333;
                        cursor: pointer;
                        text-align: left;
                    }
                    .faq-answer {
                        display: none;
                        color: #666;
                        line-height: 1.6;
                        padding-bottom: 1rem;
                    }
                    .faq-item.open .faq-answer {
                        display: block;
                    }
                "#}
            </style>
            <h2>{"Preguntas frecuentes"}</h2>

            <FaqItem question="¿Cómo agendo una hora?">
                <p>
                    {"Completa el formulario de esta página. Al enviarlo se abrirá WhatsApp con tu solicitud lista para enviar, y te confirmaremos el horario por ese mismo medio."}
                </p>
            </FaqItem>

            <FaqItem question="¿Quiénes pueden atenderse?">
                <p>
                    {format!("Por ahora la atención está orientada a personas entre {} y {} años.", MIN_AGE, MAX_AGE)}
                </p>
            </FaqItem>

            <FaqItem question="¿Mis datos quedan guardados en la página?">
                <p>
                    {"No. La información del formulario solo se usa para armar el mensaje de WhatsApp y se borra del formulario una vez enviada."}
                </p>
            </FaqItem>

            <FaqItem question="¿Necesito orden médica?">
                <p>
                    {"No necesitas orden médica para consultar con matrona. Si tienes exámenes previos, tráelos a tu hora."}
                </p>
            </FaqItem>
        </section>
    }
}
