use yew::prelude::*;

use crate::components::{
    booking_form::BookingFormView, contact::Contact, footer::Footer, services::Services,
    testimonials::Testimonials,
};
use crate::pages::faq::Faq;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .hero {
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 6rem 2rem 4rem;
                        background: linear-gradient(135deg, #fdf4f6 0%, #f7d6e3 100%);
                    }
                    .hero h1 {
                        font-size: 3rem;
                        color: #8e2f56;
                        margin-bottom: 1rem;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #555;
                        max-width: 640px;
                        margin: 0 auto 2rem;
                        line-height: 1.6;
                    }
                    .hero-cta {
                        display: inline-block;
                        padding: 1rem 2.5rem;
                        border-radius: 999px;
                        background: #8e2f56;
                        color: #fff;
                        font-weight: 600;
                        text-decoration: none;
                        transition: background 0.3s ease;
                    }
                    .hero-cta:hover {
                        background: #a93d69;
                    }
                    .about-section {
                        padding: 5rem 2rem;
                        max-width: 800px;
                        margin: 0 auto;
                        text-align: center;
                        line-height: 1.7;
                        color: #555;
                    }
                    .about-section h2 {
                        color: #8e2f56;
                        font-size: 2.2rem;
                    }
                    @media (max-width: 768px) {
                        .hero h1 {
                            font-size: 2.2rem;
                        }
                    }
                "#}
            </style>
            <header class="hero">
                <div class="hero-content">
                    <h1>{"Matrona Ginecología"}</h1>
                    <p class="hero-subtitle">
                        {"Acompañamiento profesional en tu salud ginecológica y sexual, con atención personalizada y un trato cercano."}
                    </p>
                    <a href="#agendar" class="hero-cta">{"Agenda tu hora"}</a>
                </div>
            </header>

            <section id="sobre-mi" class="about-section">
                <h2>{"Sobre mí"}</h2>
                <p>
                    {"Soy matrona con experiencia en atención ginecológica, anticoncepción y salud sexual. Mi objetivo es que cada consulta sea un espacio de confianza, donde puedas resolver tus dudas y tomar decisiones informadas sobre tu cuerpo."}
                </p>
            </section>

            <Services />
            <Testimonials />
            <BookingFormView />
            <Faq />
            <Contact />
            <Footer />
        </div>
    }
}
