use std::collections::HashMap;

use shoegrid_core::{DomainError, DomainResult, Slug};

use crate::shoe::Shoe;

/// An ordered, validated list of shoes with unique slugs.
///
/// Order is whatever the data source supplied; nothing here sorts or filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    shoes: Vec<Shoe>,
    index: HashMap<Slug, usize>,
}

impl Catalog {
    pub fn new(shoes: Vec<Shoe>) -> DomainResult<Self> {
        let mut index = HashMap::with_capacity(shoes.len());
        for (position, shoe) in shoes.iter().enumerate() {
            shoe.validate()?;
            if index.insert(shoe.slug.clone(), position).is_some() {
                return Err(DomainError::conflict(format!("duplicate slug {}", shoe.slug)));
            }
        }
        Ok(Self { shoes, index })
    }

    /// Parse a JSON array of shoe records.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let shoes: Vec<Shoe> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("catalog JSON: {e}")))?;
        Self::new(shoes)
    }

    pub fn get(&self, slug: &Slug) -> DomainResult<&Shoe> {
        self.index
            .get(slug)
            .map(|&i| &self.shoes[i])
            .ok_or_else(DomainError::not_found)
    }

    pub fn shoes(&self) -> &[Shoe] {
        &self.shoes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shoe> {
        self.shoes.iter()
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Shoe;
    type IntoIter = std::slice::Iter<'a, Shoe>;

    fn into_iter(self) -> Self::IntoIter {
        self.shoes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shoegrid_core::Cents;

    fn shoe(slug: &str) -> Shoe {
        Shoe {
            slug: slug.parse().unwrap(),
            name: slug.to_uppercase(),
            image_src: format!("/assets/{slug}.jpg"),
            price: Cents(10000),
            sale_price: None,
            release_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            num_of_colors: 2,
        }
    }

    #[test]
    fn keeps_input_order() {
        let catalog = Catalog::new(vec![shoe("c"), shoe("a"), shoe("b")]).unwrap();
        let slugs: Vec<&str> = catalog.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["c", "a", "b"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let err = Catalog::new(vec![shoe("a"), shoe("b"), shoe("a")]).unwrap_err();
        match err {
            DomainError::Conflict(msg) => assert!(msg.contains("a")),
            other => panic!("Expected Conflict, got {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_shoe() {
        let mut bad = shoe("a");
        bad.sale_price = Some(Cents(20000));
        assert!(Catalog::new(vec![bad]).is_err());
    }

    #[test]
    fn lookup_by_slug() {
        let catalog = Catalog::new(vec![shoe("a"), shoe("b")]).unwrap();
        let b: Slug = "b".parse().unwrap();
        assert_eq!(catalog.get(&b).unwrap().name, "B");

        let missing: Slug = "z".parse().unwrap();
        assert_eq!(catalog.get(&missing).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn empty_catalog_is_fine() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn malformed_json_is_a_validation_error() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(DomainError::Validation(_))
        ));
    }
}
