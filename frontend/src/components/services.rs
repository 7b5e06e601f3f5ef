use yew::prelude::*;

use crate::booking::ServiceType;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="servicios" class="services-section">
            <style>
                {r#"
                    .services-section {
                        padding: 5rem 2rem;
                        text-align: center;
                    }
                    .services-section h2 {
                        color: #8e2f56;
                        font-size: 2.2rem;
                        margin-bottom: 0.5rem;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                        max-width: 1100px;
                        margin: 3rem auto 0;
                    }
                    .service-card {
                        background: #fff;
                        border: 1px solid #f1dbe4;
                        border-radius: 12px;
                        padding: 2rem;
                        text-align: left;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .service-card:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 8px 24px rgba(160, 60, 100, 0.12);
                    }
                    .service-card h3 {
                        color: #8e2f56;
                        margin-bottom: 0.75rem;
                    }
                    .service-card p {
                        color: #666;
                        line-height: 1.6;
                    }
                "#}
            </style>
            <h2>{"Servicios"}</h2>
            <p>{"Atención cercana, respetuosa y basada en evidencia."}</p>
            <div class="services-grid">
                { for ServiceType::ALL.iter().map(|service| html! {
                    <div class="service-card" key={service.label()}>
                        <h3>{service.label()}</h3>
                        <p>{service.description()}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
