//! A single shoe card.

use chrono::{DateTime, Utc};

use shoegrid_catalog::{Shoe, Variant};

use crate::format::{format_price, pluralize};
use crate::theme::Theme;
use crate::view::{Attributes, Element};

/// Vertical gap between the image and the text rows, in px.
pub const IMAGE_SPACING_PX: u32 = 12;

/// Display-ready data for one shoe.
///
/// Holds everything the card shows, already classified and formatted, so any
/// renderer (the view tree here, the Leptos components on wasm) emits the same
/// content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoeCard {
    pub slug: String,
    pub href: String,
    pub name: String,
    pub image_src: String,
    pub variant: Variant,
    pub price: String,
    /// Present only for `Variant::OnSale`.
    pub sale_price: Option<String>,
    pub colors: String,
}

impl ShoeCard {
    pub fn new(shoe: &Shoe, now: DateTime<Utc>) -> Self {
        let variant = shoe.variant(now);
        let sale_price = match variant {
            Variant::OnSale => shoe.sale_price.map(format_price),
            Variant::NewRelease | Variant::Default => None,
        };

        Self {
            slug: shoe.slug.to_string(),
            href: shoe.href(),
            name: shoe.name.clone(),
            image_src: shoe.image_src.clone(),
            variant,
            price: format_price(shoe.price),
            sale_price,
            colors: pluralize("Color", u64::from(shoe.num_of_colors)),
        }
    }

    pub fn banner(&self) -> Option<&'static str> {
        self.variant.banner_text()
    }

    /// Build the card's view tree. `delegated` is merged onto the root link.
    pub fn render(&self, theme: &Theme, delegated: &Attributes) -> Element {
        let banner = self.banner().map(|text| {
            let mut el = Element::new("span")
                .class(format!("banner banner--{}", self.variant))
                .child(text);
            if let Some(style) = theme.banner_style(self.variant) {
                el = el.style(style);
            }
            el
        });

        let image = Element::new("div")
            .class("shoe-card__image")
            .style("position: relative")
            .child(
                Element::new("img")
                    .attr("alt", "")
                    .attr("src", self.image_src.as_str())
                    .style("width: 100%; border-radius: 16px 16px 4px 4px"),
            )
            .child_opt(banner);

        let sale_price = self.sale_price.as_deref().map(|sale| {
            Element::new("span")
                .class("shoe-card__sale-price")
                .style(theme.sale_price_style())
                .child(sale)
        });

        let price = Element::new("span")
            .class("shoe-card__price")
            .style(theme.price_style(sale_price.is_some()))
            .child(self.price.as_str());

        let row_style = "position: relative; font-size: 1rem; display: flex; justify-content: space-between";

        let price_row = Element::new("div")
            .class("shoe-card__row")
            .style(row_style)
            .child(
                Element::new("h3")
                    .class("shoe-card__name")
                    .style(theme.name_style())
                    .child(self.name.as_str()),
            )
            .child_opt(sale_price)
            .child(price);

        let colors_row = Element::new("div")
            .class("shoe-card__row")
            .style(row_style)
            .child(
                Element::new("p")
                    .class("shoe-card__colors")
                    .style(theme.color_info_style())
                    .child(self.colors.as_str()),
            );

        let wrapper = Element::new("article")
            .class("shoe-card__wrapper")
            .style("border-radius: 16px")
            .child(image)
            .child(spacer(IMAGE_SPACING_PX))
            .child(price_row)
            .child(colors_row);

        let mut root = Element::new("a").key(self.slug.as_str()).child(wrapper);
        root.attrs = self.root_attributes(delegated);
        root
    }

    /// Attributes of the root link with `delegated` merged on top.
    pub fn root_attributes(&self, delegated: &Attributes) -> Attributes {
        let mut attrs = Attributes::new()
            .with("class", "shoe-card")
            .with("href", self.href.as_str())
            .with("style", "text-decoration: none; color: inherit");
        attrs.merge(delegated);
        attrs
    }
}

fn spacer(size: u32) -> Element {
    Element::new("span").class("spacer").style(format!(
        "display: block; width: {size}px; min-width: {size}px; height: {size}px; min-height: {size}px"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use shoegrid_core::Cents;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap()
    }

    fn shoe(sale_price: Option<u64>, age_days: i64) -> Shoe {
        Shoe {
            slug: "pegasus".parse().unwrap(),
            name: "Pegasus".to_string(),
            image_src: "/assets/pegasus.jpg".to_string(),
            price: Cents(12000),
            sale_price: sale_price.map(Cents),
            release_date: now() - Duration::days(age_days),
            num_of_colors: 3,
        }
    }

    fn render(shoe: &Shoe) -> Element {
        ShoeCard::new(shoe, now()).render(&Theme::default(), &Attributes::new())
    }

    #[test]
    fn on_sale_card_shows_both_prices() {
        let card = ShoeCard::new(&shoe(Some(9500), 200), now());
        assert_eq!(card.variant, Variant::OnSale);
        assert_eq!(card.price, "$120.00");
        assert_eq!(card.sale_price.as_deref(), Some("$95.00"));
        assert_eq!(card.colors, "3 Colors");

        let tree = card.render(&Theme::default(), &Attributes::new());
        let price = tree.find_by_class("shoe-card__price");
        assert!(price[0].attrs.get("style").unwrap().contains("line-through"));
        assert_eq!(tree.find_by_class("shoe-card__sale-price")[0].text(), "$95.00");
    }

    #[test]
    fn plain_price_is_not_struck() {
        let tree = render(&shoe(None, 200));
        let price = tree.find_by_class("shoe-card__price");
        assert!(!price[0].attrs.get("style").unwrap().contains("line-through"));
        assert!(tree.find_by_class("shoe-card__sale-price").is_empty());
    }

    #[test]
    fn banners_follow_variant() {
        let sale = render(&shoe(Some(9500), 1));
        let banners = sale.find_by_class("banner");
        assert_eq!(banners.len(), 1);
        assert_eq!(banners[0].text(), "Sale");

        let fresh = render(&shoe(None, 1));
        let banners = fresh.find_by_class("banner");
        assert_eq!(banners.len(), 1);
        assert_eq!(banners[0].text(), "Just Released!");

        let plain = render(&shoe(None, 45));
        assert!(plain.find_by_class("banner").is_empty());
    }

    #[test]
    fn root_links_to_detail_page_and_takes_delegated_attrs() {
        let delegated = Attributes::new()
            .with("style", "flex: 1; min-width: 340px")
            .with("data-position", "0");
        let tree = ShoeCard::new(&shoe(None, 45), now()).render(&Theme::default(), &delegated);

        assert_eq!(tree.tag, "a");
        assert_eq!(tree.key.as_deref(), Some("pegasus"));
        assert_eq!(tree.attrs.get("href"), Some("/shoe/pegasus"));
        assert_eq!(tree.attrs.get("data-position"), Some("0"));
        let style = tree.attrs.get("style").unwrap();
        assert!(style.starts_with("text-decoration: none"));
        assert!(style.ends_with("min-width: 340px"));
    }

    #[test]
    fn zero_sale_price_is_still_shown() {
        let mut s = shoe(Some(0), 200);
        s.price = Cents(100);
        let card = ShoeCard::new(&s, now());
        assert_eq!(card.variant, Variant::OnSale);
        assert_eq!(card.sale_price.as_deref(), Some("$0.00"));

        let tree = card.render(&Theme::default(), &Attributes::new());
        assert_eq!(tree.find_by_class("shoe-card__sale-price")[0].text(), "$0.00");
        let price = tree.find_by_class("shoe-card__price");
        assert_eq!(price[0].text(), "$1.00");
        assert!(price[0].attrs.get("style").unwrap().contains("line-through"));
        assert_eq!(tree.find_by_class("banner")[0].text(), "Sale");
    }

    #[test]
    fn root_attributes_match_rendered_root() {
        let card = ShoeCard::new(&shoe(None, 45), now());
        let delegated = crate::grid::ShoeGrid::card_attributes();
        let attrs = card.root_attributes(&delegated);

        assert_eq!(attrs.get("class"), Some("shoe-card shoe-grid__item"));
        assert_eq!(attrs.get("href"), Some("/shoe/pegasus"));
        assert_eq!(card.render(&Theme::default(), &delegated).attrs, attrs);
    }

    #[test]
    fn image_has_empty_alt() {
        let tree = render(&shoe(None, 45));
        let wrapper = &tree.find_by_class("shoe-card__image")[0];
        match &wrapper.children[0] {
            crate::view::Node::Element(img) => {
                assert_eq!(img.tag, "img");
                assert_eq!(img.attrs.get("alt"), Some(""));
                assert_eq!(img.attrs.get("src"), Some("/assets/pegasus.jpg"));
            }
            other => panic!("Expected img element, got {other:?}"),
        }
    }

    #[test]
    fn single_color_is_singular() {
        let mut s = shoe(None, 45);
        s.num_of_colors = 1;
        assert_eq!(ShoeCard::new(&s, now()).colors, "1 Color");
        s.num_of_colors = 0;
        assert_eq!(ShoeCard::new(&s, now()).colors, "0 Colors");
    }
}
