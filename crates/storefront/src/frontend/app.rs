//! Leptos components mirroring the view-tree renderers.

use chrono::{DateTime, Utc};
use leptos::*;

use shoegrid_catalog::{Catalog, Shoe};

use crate::card::{IMAGE_SPACING_PX, ShoeCard as CardModel};
use crate::grid::{GRID_GAP_PX, ShoeGrid as GridModel};
use crate::theme::Theme;
use crate::view::{Attributes, is_valid_attr_name};

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let shoes = match Catalog::from_json(crate::SAMPLE_CATALOG) {
        Ok(catalog) => catalog.shoes().to_vec(),
        Err(e) => {
            logging::error!("failed to load sample catalog: {e}");
            Vec::new()
        }
    };

    view! {
        <main class="app">
            <ShoeGrid shoes=shoes now=Utc::now() theme=Theme::default()/>
        </main>
    }
}

/// One card per shoe, keyed by slug, in input order.
#[component]
pub fn ShoeGrid(shoes: Vec<Shoe>, now: DateTime<Utc>, theme: Theme) -> impl IntoView {
    let card_attrs = GridModel::card_attributes();

    view! {
        <div
            class="shoe-grid"
            style=format!("display: flex; flex-wrap: wrap; gap: {GRID_GAP_PX}px")
        >
            <For
                each=move || shoes.clone()
                key=|shoe| shoe.slug.clone()
                children=move |shoe| {
                    view! {
                        <ShoeCard shoe=shoe now=now theme=theme.clone() attrs=card_attrs.clone()/>
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn ShoeCard(
    shoe: Shoe,
    now: DateTime<Utc>,
    theme: Theme,
    /// Merged onto the root link.
    #[prop(optional)]
    attrs: Attributes,
) -> impl IntoView {
    let card = CardModel::new(&shoe, now);

    let banner = card.banner().map(|text| {
        let style = theme.banner_style(card.variant).unwrap_or_default();
        view! { <span class=format!("banner banner--{}", card.variant) style=style>{text}</span> }
    });

    let struck = card.sale_price.is_some();
    let sale_price = card.sale_price.clone().map(|sale| {
        view! {
            <span class="shoe-card__sale-price" style=theme.sale_price_style()>{sale}</span>
        }
    });

    let row_style = "position: relative; font-size: 1rem; display: flex; justify-content: space-between";
    let spacer_style = format!(
        "display: block; width: {IMAGE_SPACING_PX}px; min-width: {IMAGE_SPACING_PX}px; \
         height: {IMAGE_SPACING_PX}px; min-height: {IMAGE_SPACING_PX}px"
    );

    let body = view! {
        <article class="shoe-card__wrapper" style="border-radius: 16px">
            <div class="shoe-card__image" style="position: relative">
                <img
                    alt=""
                    src=card.image_src.clone()
                    style="width: 100%; border-radius: 16px 16px 4px 4px"
                />
                {banner}
            </div>
            <span class="spacer" style=spacer_style></span>
            <div class="shoe-card__row" style=row_style>
                <h3 class="shoe-card__name" style=theme.name_style()>{card.name.clone()}</h3>
                {sale_price}
                <span class="shoe-card__price" style=theme.price_style(struck)>
                    {card.price.clone()}
                </span>
            </div>
            <div class="shoe-card__row" style=row_style>
                <p class="shoe-card__colors" style=theme.color_info_style()>{card.colors.clone()}</p>
            </div>
        </article>
    };

    let mut root = html::a();
    for (name, value) in card.root_attributes(&attrs).iter() {
        if is_valid_attr_name(name) {
            root = root.attr(name.to_string(), value.to_string());
        }
    }
    root.child(body)
}
