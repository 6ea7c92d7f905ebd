use yew::prelude::*;

use crate::components::{features::Features, hero::Hero};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="page-main">
            <Hero />
            <Features />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn hero_comes_before_features() {
        let html = ServerRenderer::<Home>::new().render().await;

        let hero = html.find("class=\"hero\"").unwrap();
        let features = html.find("class=\"features\"").unwrap();
        assert!(hero < features);
    }
}
