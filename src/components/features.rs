use yew::prelude::*;

use crate::content::{Feature, FEATURES, FEATURES_TITLE};
use crate::motion::{use_in_view, STAGGER_SECS};

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    feature: Feature,
    index: usize,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let delay = format!("animation-delay: {:.1}s;", props.index as f64 * STAGGER_SECS);

    html! {
        <div class="feature-card" style={delay}>
            <h3>{props.feature.title}</h3>
            <p>{props.feature.description}</p>
        </div>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    let grid_ref = use_node_ref();
    let revealed = use_in_view(grid_ref.clone());

    html! {
        <section id="solutions" class="features">
            <style>
                {r#"
                    .features { padding: 5rem 0; background: #ffffff; }
                    .dark .features { background: #111827; }
                    .features-inner { max-width: 80rem; margin: 0 auto; padding: 0 1rem; }
                    @keyframes featuresTitleIn {
                        from { opacity: 0; transform: translateY(-20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .features h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        text-align: center;
                        color: #15803d;
                        margin-bottom: 2.5rem;
                        animation: featuresTitleIn 0.5s ease-out both;
                    }
                    .dark .features h2 { color: #86efac; }
                    .features-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @keyframes cardRise {
                        from { opacity: 0; transform: translateY(50px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .feature-card {
                        min-height: 300px;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        background: #f9fafb;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        transition: box-shadow 0.2s;
                        opacity: 0;
                    }
                    .feature-card:hover { box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
                    .dark .feature-card { background: #1f2937; }
                    .features-grid.revealed .feature-card {
                        animation-name: cardRise;
                        animation-duration: 0.5s;
                        animation-fill-mode: both;
                    }
                    .feature-card h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #1f2937;
                        margin-bottom: 0.5rem;
                    }
                    .feature-card p { color: #4b5563; }
                    .dark .feature-card h3 { color: #e5e7eb; }
                    .dark .feature-card p { color: #9ca3af; }
                    @media (min-width: 768px) {
                        .features-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .features-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                "#}
            </style>
            <div class="features-inner">
                <h2>{FEATURES_TITLE}</h2>
                <div ref={grid_ref} class={classes!("features-grid", revealed.then(|| "revealed"))}>
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <FeatureCard key={index} feature={feature.clone()} index={index} />
                    }) }
                </div>
            </div>
        </section>
    }
}
