//! HTML serialization of the view tree.

use crate::view::{Element, Node, is_valid_attr_name};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["area", "br", "col", "hr", "img", "input", "link", "meta", "source", "wbr"];

pub fn render(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

/// Wrap `body` in a minimal standalone document.
pub fn render_document(title: &str, body: &Element) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str("<title>");
    escape_text(title, &mut out);
    out.push_str("</title>\n</head>\n<body>\n");
    write_element(body, &mut out);
    out.push_str("\n</body>\n</html>\n");
    out
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag);
    for (name, value) in element.attrs.iter() {
        if !is_valid_attr_name(name) {
            tracing::warn!(tag = element.tag, attribute = name, "dropping attribute with invalid name");
            continue;
        }
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_attr(value, out);
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag) {
        return;
    }

    for child in &element.children {
        match child {
            Node::Element(el) => write_element(el, out),
            Node::Text(text) => escape_text(text, out),
        }
    }

    out.push_str("</");
    out.push_str(element.tag);
    out.push('>');
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_attributes_sorted_and_escaped() {
        let el = Element::new("a")
            .attr("title", "\"Tom\" & <Jerry>")
            .attr("href", "/shoe/x")
            .child("Fish & Chips <3");
        assert_eq!(
            render(&el),
            "<a href=\"/shoe/x\" title=\"&quot;Tom&quot; &amp; &lt;Jerry&gt;\">Fish &amp; Chips &lt;3</a>"
        );
    }

    #[test]
    fn drops_attributes_with_invalid_names() {
        let el = Element::new("a")
            .attr("href", "/shoe/x")
            .attr("x\" onclick=\"alert(1)", "y")
            .attr("data-ok", "1");
        assert_eq!(render(&el), "<a data-ok=\"1\" href=\"/shoe/x\"></a>");
    }

    #[test]
    fn delegated_card_attributes_cannot_inject_markup() {
        use chrono::{TimeZone, Utc};
        use shoegrid_catalog::Shoe;
        use shoegrid_core::Cents;

        use crate::card::ShoeCard;
        use crate::theme::Theme;
        use crate::view::Attributes;

        let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let shoe = Shoe {
            slug: "x".parse().unwrap(),
            name: "X".to_string(),
            image_src: "/x.jpg".to_string(),
            price: Cents(100),
            sale_price: None,
            release_date: now,
            num_of_colors: 1,
        };
        let delegated = Attributes::new().with("x\" onclick=\"alert(1)", "y");
        let markup = render(&ShoeCard::new(&shoe, now).render(&Theme::default(), &delegated));
        assert!(!markup.contains("onclick"));
        assert!(markup.starts_with("<a class=\"shoe-card\" href=\"/shoe/x\""));
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let el = Element::new("div").child(Element::new("img").attr("alt", "").attr("src", "/a.jpg"));
        assert_eq!(render(&el), "<div><img alt=\"\" src=\"/a.jpg\"></div>");
    }

    #[test]
    fn key_is_not_serialized() {
        let el = Element::new("span").key("abc");
        assert_eq!(render(&el), "<span></span>");
    }

    #[test]
    fn document_wraps_body() {
        let doc = render_document("Shoes & more", &Element::new("main"));
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Shoes &amp; more</title>"));
        assert!(doc.contains("<main></main>"));
    }
}
