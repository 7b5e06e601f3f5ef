use yew::prelude::*;

// (patient, context, quote)
const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "Camila R.",
        "Control Ginecológico",
        "Me sentí escuchada desde el primer minuto. Me explicó todo con calma y sin apuro.",
    ),
    (
        "Valentina S.",
        "Anticoncepción",
        "Por fin encontré un método que me acomoda. El seguimiento por WhatsApp fue muy práctico.",
    ),
    (
        "Javiera M.",
        "Consejería en Salud Sexual",
        "Un espacio seguro y sin juicios. La recomiendo a todas mis amigas.",
    ),
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="testimonios" class="testimonials-section">
            <style>
                {r#"
                    .testimonials-section {
                        padding: 5rem 2rem;
                        background: #8e2f56;
                        color: #fff;
                        text-align: center;
                    }
                    .testimonials-grid {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1.5rem;
                        max-width: 1100px;
                        margin: 3rem auto 0;
                    }
                    .testimonial {
                        flex: 1 1 280px;
                        max-width: 340px;
                        background: rgba(255, 255, 255, 0.1);
                        border-radius: 12px;
                        padding: 2rem;
                    }
                    .testimonial blockquote {
                        font-style: italic;
                        line-height: 1.6;
                        margin: 0 0 1rem;
                    }
                    .testimonial .author {
                        font-weight: 600;
                    }
                    .testimonial .context {
                        opacity: 0.7;
                        font-size: 0.9rem;
                    }
                "#}
            </style>
            <h2>{"Lo que dicen nuestras pacientes"}</h2>
            <div class="testimonials-grid">
                { for TESTIMONIALS.iter().map(|(author, context, quote)| html! {
                    <div class="testimonial" key={*author}>
                        <blockquote>{format!("“{}”", quote)}</blockquote>
                        <div class="author">{*author}</div>
                        <div class="context">{*context}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}
