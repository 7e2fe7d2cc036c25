use yew::prelude::*;

use podium::session::Page;

use crate::hooks::use_report_page;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub set_page: Callback<Page>,
}

#[function_component(AboutPage)]
pub fn about_page(props: &AboutProps) -> Html {
    use_report_page(Page::About, &props.set_page);

    html! {
        <div class="podium-page">
            <h1>{ "About Podium" }</h1>
            <p>{ "Podium turns your notes and assets into presentations you can share with a link." }</p>
        </div>
    }
}
