use yew::prelude::*;

use super::navigation::Navigation;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or_default]
    pub current_path: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="footer">
            <div class="container">
                <span class="footer-logo">{"Bookti"}</span>
                <Navigation footer=true current_path={props.current_path.clone()} />
            </div>
        </footer>
    }
}
