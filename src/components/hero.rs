use yew::prelude::*;
use gloo_timers::callback::Interval;

use crate::content::{HEADLINES, HERO_SUBTITLE};
use crate::motion::{scatter_particles, scroll_transform, use_scroll_y, PARTICLE_COUNT};

const HEADLINE_ROTATE_MS: u32 = 4000;

// Scroll distance over which the parallax plays out
const PARALLAX_RANGE: (f64, f64) = (0.0, 300.0);

#[function_component(Hero)]
pub fn hero() -> Html {
    let particles = use_state(|| scatter_particles(&mut rand::thread_rng(), PARTICLE_COUNT));
    let headline = use_state(|| 0usize);
    let scroll_y = use_scroll_y();

    {
        let headline = headline.clone();
        use_effect_with_deps(
            move |_| {
                let mut current = 0;
                let interval = Interval::new(HEADLINE_ROTATE_MS, move || {
                    current = (current + 1) % HEADLINES.len();
                    headline.set(current);
                });
                move || drop(interval)
            },
            (),
        );
    }

    let text_offset = scroll_transform(scroll_y, PARALLAX_RANGE, (0.0, -50.0));
    let buttons_offset = scroll_transform(scroll_y, PARALLAX_RANGE, (0.0, 20.0));

    html! {
        <section id="about" class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        overflow: hidden;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding-top: 5rem;
                        background: #dcfce7;
                    }
                    .dark .hero { background: #1f2937; }
                    @keyframes gradientDrift {
                        0%, 100% { opacity: 0.3; transform: translateX(-50px); }
                        50% { opacity: 0.5; transform: translateX(50px); }
                    }
                    .hero-gradient {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right, rgba(187, 247, 208, 0.3), transparent);
                        animation: gradientDrift 10s ease-in-out infinite;
                    }
                    @keyframes particleFloat {
                        0%, 100% { opacity: 0.5; transform: translateY(0); }
                        50% { opacity: 1; transform: translateY(-20px); }
                    }
                    .hero-particle {
                        position: absolute;
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: #4ade80;
                        animation-name: particleFloat;
                        animation-timing-function: ease-in-out;
                        animation-iteration-count: infinite;
                    }
                    .dark .hero-particle { background: #86efac; }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        text-align: center;
                    }
                    @keyframes heroDrop {
                        from { opacity: 0; translate: 0 -50px; }
                        to { opacity: 1; translate: 0 0; }
                    }
                    @keyframes heroFade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    .hero-title {
                        font-size: 3.75rem;
                        font-weight: 700;
                        color: #15803d;
                        margin-bottom: 1.5rem;
                        animation: heroDrop 1s ease-out both;
                    }
                    .dark .hero-title { color: #86efac; }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #4b5563;
                        margin-bottom: 2rem;
                        animation: heroFade 1s ease-out 0.5s both;
                    }
                    .dark .hero-subtitle { color: #d1d5db; }
                    .hero-cta-group {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                        animation: heroFade 1s ease-out 1s both;
                    }
                    .hero-cta, .hero-demo {
                        padding: 0.75rem 1.5rem;
                        border-radius: 0.375rem;
                        cursor: pointer;
                        transition: transform 0.2s, box-shadow 0.2s;
                    }
                    .hero-cta { background: #16a34a; color: #ffffff; border: none; }
                    .hero-demo { background: transparent; color: #16a34a; border: 1px solid #16a34a; }
                    .dark .hero-demo { color: #86efac; border-color: #86efac; }
                    .hero-cta:hover, .hero-demo:hover {
                        transform: scale(1.05);
                        box-shadow: 0 0 8px rgba(0, 0, 0, 0.2);
                    }
                    .hero-cta:active, .hero-demo:active { transform: scale(0.95); }
                "#}
            </style>
            <div class="hero-gradient"></div>
            { for particles.iter().map(|particle| html! {
                <div key={particle.id} class="hero-particle" style={particle.style()}></div>
            }) }
            <div class="hero-content">
                <h1 class="hero-title" style={format!("transform: translateY({:.1}px);", text_offset)}>
                    {HEADLINES[*headline]}
                </h1>
                <p class="hero-subtitle">{HERO_SUBTITLE}</p>
                <div class="hero-cta-group" style={format!("transform: translateY({:.1}px);", buttons_offset)}>
                    <button class="hero-cta">{"Get Started"}</button>
                    <button class="hero-demo">{"Watch Demo"}</button>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn first_paint_shows_first_headline_and_particles() {
        let html = ServerRenderer::<Hero>::new().render().await;

        assert!(html.contains(HEADLINES[0]));
        assert!(!html.contains(HEADLINES[1]));
        assert_eq!(html.matches("class=\"hero-particle\"").count(), PARTICLE_COUNT);
        assert!(html.contains("Watch Demo"));
        assert!(html.contains("transform: translateY(0.0px);"));
    }
}
