use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, window};
use yew::prelude::*;

use podium::log::warn;

/// Brand colors, exposed to stylesheets as `--podium-*` custom properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub error: &'static str,
    pub background: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#ff148a",
            secondary: "#ffffff",
            error: "#ff295e",
            background: "#000000",
        }
    }
}

impl Palette {
    fn properties(&self) -> [(&'static str, &'static str); 4] {
        [
            ("--podium-primary", self.primary),
            ("--podium-secondary", self.secondary),
            ("--podium-error", self.error),
            ("--podium-background", self.background),
        ]
    }

    fn apply(&self) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };

        let style = root.style();
        for (name, value) in self.properties() {
            if style.set_property(name, value).is_err() {
                warn!("Failed to set {name}");
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PaletteProviderProps {
    #[prop_or_default]
    pub palette: Palette,
    pub children: Children,
}

#[function_component(PaletteProvider)]
pub fn palette_provider(props: &PaletteProviderProps) -> Html {
    use_effect_with(props.palette, |palette| palette.apply());

    html! {
        <ContextProvider<Palette> context={props.palette}>
            {props.children.clone()}
        </ContextProvider<Palette>>
    }
}

#[hook]
pub fn use_palette() -> Palette {
    use_context::<Palette>().unwrap_or_default()
}
