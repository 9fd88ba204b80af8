use cairo::Context;
use gtk::gdk;
use gtk4 as gtk;
use kreis_core::colors;
use kreis_core::task::Category;
use palette::Srgba;
use strum::IntoEnumIterator;

pub struct ThemeColors {
    pub background: Srgba<f64>,
    pub track: Srgba<f64>,
    pub progress: Srgba<f64>,
    pub ink: Srgba<f64>,
    pub minor_tick: Srgba<f64>,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            background: colors::BACKGROUND,
            track: colors::TRACK,
            progress: colors::PROGRESS,
            ink: colors::INK,
            minor_tick: colors::MINOR_TICK,
        }
    }
}

pub fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn css_rgba(color: Srgba<f64>) -> String {
    let (r, g, b, a) = color.into_components();
    let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("rgba({}, {}, {}, {:.2})", byte(r), byte(g), byte(b), a)
}

pub fn category_class(category: Category) -> String {
    format!("kreis-category-{}", category.as_ref())
}

fn build_css() -> String {
    let mut css = format!(
        "
.kreis-window {{
    background-color: {background};
}}
.kreis-heading {{
    font-family: Futura, sans-serif;
    font-weight: bold;
    font-size: 24px;
    color: {ink};
}}
.kreis-caption {{
    font-family: Futura, sans-serif;
    font-weight: bold;
    font-size: 14px;
    color: {caption};
}}
.kreis-title-entry {{
    font-size: 20px;
    border: none;
    border-bottom: 2px solid {ink};
    border-radius: 0;
    background: none;
    box-shadow: none;
}}
.kreis-title-entry.error {{
    border-bottom-color: {red};
}}
.kreis-category {{
    min-width: 44px;
    min-height: 44px;
    border-radius: 22px;
    border: 3px solid transparent;
    background-image: none;
}}
.kreis-category:checked {{
    border-color: {ink};
}}
.kreis-save {{
    background: {ink};
    color: white;
    font-weight: bold;
    border-radius: 12px;
    min-height: 56px;
}}
",
        background = css_rgba(colors::BACKGROUND),
        ink = css_rgba(colors::INK),
        caption = css_rgba(colors::MINOR_TICK),
        red = css_rgba(colors::RED),
    );

    for category in Category::iter() {
        css.push_str(&format!(
            ".{} {{ background-color: {}; }}\n",
            category_class(category),
            css_rgba(category.color())
        ));
    }
    css
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    provider.load_from_data(&build_css());

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
