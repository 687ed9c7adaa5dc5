use shared::{NavVariant, NAV_ITEMS};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    #[prop_or_default]
    pub mobile: bool,
    #[prop_or_default]
    pub footer: bool,
    /// Marks the matching link active
    #[prop_or_default]
    pub current_path: AttrValue,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let variant = NavVariant::from_flags(props.mobile, props.footer);
    let classes = variant.classes();

    html! {
        <nav class={classes.nav}>
            <ul class={classes.list}>
                {for NAV_ITEMS.iter().map(|item| {
                    let link_class = classes!(
                        classes.link,
                        item.is_active(&props.current_path).then_some("active")
                    );

                    html! {
                        <li key={item.path} class={classes.item}>
                            <a class={link_class} href={item.path}>
                                {if variant.shows_icons() {
                                    html! {
                                        <img class="mobile-nav-list-item-link-icon" src={item.icon} alt="icon" />
                                    }
                                } else {
                                    html! {}
                                }}
                                {item.label}
                            </a>
                        </li>
                    }
                })}
            </ul>
        </nav>
    }
}
