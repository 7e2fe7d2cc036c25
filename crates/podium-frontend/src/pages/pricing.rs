use yew::prelude::*;

use podium::session::Page;

use crate::hooks::use_report_page;

const PLANS: [(&str, &str, &str); 3] = [
    ("Free", "$0", "Three decks, public sharing"),
    ("Pro", "$8/mo", "Unlimited decks, private sharing"),
    ("Team", "$20/mo", "Shared workspaces and brand kits"),
];

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub set_page: Callback<Page>,
}

#[function_component(PricingPage)]
pub fn pricing_page(props: &PricingProps) -> Html {
    use_report_page(Page::Pricing, &props.set_page);

    html! {
        <div class="podium-page">
            <h1>{ "Pricing" }</h1>
            <ul>
                { for PLANS.iter().map(|(name, price, blurb)| html! {
                    <li><strong>{ *name }</strong>{ format!(" {price}: {blurb}") }</li>
                }) }
            </ul>
        </div>
    }
}
