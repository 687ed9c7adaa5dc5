use yew::prelude::*;

mod components;
mod hooks;
mod services;
mod store;

use components::{Footer, Header, ModalHost, NoticeBanner};
use hooks::use_current_path;
use services::api::ApiClient;
use store::StoreProvider;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let current_path = use_current_path();

    html! {
        <StoreProvider>
            <ContextProvider<ApiClient> context={(*api_client).clone()}>
                <Header current_path={current_path.clone()} />
                <NoticeBanner />
                <main class="main">
                    <div class="container">
                        <section class="hero">
                            <h1>{"Share the books you've read, find the ones you haven't"}</h1>
                            <p>{"Bookti is a book exchange for readers nearby."}</p>
                        </section>
                    </div>
                </main>
                <Footer current_path={current_path} />
                <ModalHost />
            </ContextProvider<ApiClient>>
        </StoreProvider>
    }
}

fn main() {
    services::logging::Logger::info_with_component(
        "app",
        &format!("Starting against {}", ApiClient::new().base_url()),
    );
    yew::Renderer::<App>::new().render();
}
