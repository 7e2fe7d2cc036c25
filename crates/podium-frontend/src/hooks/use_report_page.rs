use yew::prelude::*;

use podium::session::Page;

/// Report `page` through `set_page` once the calling page has mounted.
#[hook]
pub fn use_report_page(page: Page, set_page: &Callback<Page>) {
    let set_page = set_page.clone();
    use_effect_with(page, move |page| set_page.emit(*page));
}
