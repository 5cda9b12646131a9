use crate::domain::{ListingRecord, MISSING_FIELD};
use crate::scraper::{ParseError, SelectorMap};
use scraper::{ElementRef, Html, Selector};

/// Turns a listing page into records using a compiled [`SelectorMap`].
pub struct ListingExtractor {
    container: Selector,
    fields: [Selector; 7],
}

impl ListingExtractor {
    /// Compiles every selector up front so a typo fails before any fetch.
    pub fn new(map: &SelectorMap) -> Result<Self, ParseError> {
        let container = compile("container", &map.container)?;

        let ordered = map.fields.ordered();
        let mut fields = Vec::with_capacity(ordered.len());
        for (name, selector) in ordered {
            fields.push(compile(name, selector)?);
        }

        let fields: [Selector; 7] = fields
            .try_into()
            .unwrap_or_else(|_| unreachable!("FieldSelectors::ordered yields 7 entries"));

        Ok(Self { container, fields })
    }

    /// One record per container, in document order. No containers, no records.
    pub fn extract(&self, html: &str) -> Vec<ListingRecord> {
        let document = Html::parse_document(html);

        let records: Vec<ListingRecord> = document
            .select(&self.container)
            .map(|item| self.read_listing(item))
            .collect();

        tracing::info!("Extracted {} property listings", records.len());
        records
    }

    fn read_listing(&self, item: ElementRef<'_>) -> ListingRecord {
        let fields = self.fields.each_ref().map(|selector| {
            item.select(selector)
                .next()
                .map(stripped_text)
                .unwrap_or_else(|| MISSING_FIELD.to_string())
        });
        ListingRecord::from(fields)
    }
}

impl Default for ListingExtractor {
    fn default() -> Self {
        Self::new(&SelectorMap::default())
            .unwrap_or_else(|e| unreachable!("built-in selectors are valid: {e}"))
    }
}

fn compile(field: &'static str, selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::InvalidSelector {
        field,
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Every text node trimmed, empties dropped, glued back together.
fn stripped_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ListingExtractor {
        ListingExtractor::default()
    }

    #[test]
    fn no_containers_is_empty_not_error() {
        let html = "<html><body><div class='other'>nothing here</div></body></html>";
        assert!(extractor().extract(html).is_empty());
        assert!(extractor().extract("").is_empty());
    }

    #[test]
    fn missing_fields_get_sentinel() {
        let html = r#"
            <div class="search-list-item">
                <div class="property-type">Rækkehus</div>
                <div class="address">Vestergade 3, 8000 Aarhus</div>
            </div>"#;

        let records = extractor().extract(html);
        assert_eq!(records.len(), 1);

        let r = &records[0];
        assert_eq!(r.property_type, "Rækkehus");
        assert_eq!(r.address, "Vestergade 3, 8000 Aarhus");
        for missing in [&r.rooms, &r.size, &r.price, &r.energy_mark, &r.listing_date] {
            assert_eq!(missing, MISSING_FIELD);
        }
    }

    #[test]
    fn text_is_stripped_per_node() {
        let html = r#"
            <div class="search-list-item">
                <div class="price">
                    2.500.000 <span> kr. </span>
                </div>
                <div class="size"></div>
            </div>"#;

        let r = &extractor().extract(html)[0];
        assert_eq!(r.price, "2.500.000kr.");
        // Present but empty is not missing.
        assert_eq!(r.size, "");
    }

    #[test]
    fn keeps_document_order() {
        let html = r#"
            <div class="search-list-item"><div class="address">first</div></div>
            <section>
                <div class="search-list-item"><div class="address">second</div></div>
            </section>
            <div class="search-list-item"><div class="address">third</div></div>"#;

        let addresses: Vec<String> = extractor()
            .extract(html)
            .into_iter()
            .map(|r| r.address)
            .collect();
        assert_eq!(addresses, ["first", "second", "third"]);
    }

    #[test]
    fn invalid_selector_names_the_field() {
        let mut map = SelectorMap::default();
        map.fields.energy_mark = "div[[".to_string();

        match ListingExtractor::new(&map) {
            Err(ParseError::InvalidSelector { field, selector, .. }) => {
                assert_eq!(field, "energy_mark");
                assert_eq!(selector, "div[[");
            }
            other => panic!("expected InvalidSelector, got {:?}", other.err()),
        }
    }

    #[test]
    fn custom_map_changes_markup_without_code() {
        let mut map = SelectorMap::default();
        map.container = "li.card".to_string();
        map.fields.price = "span.amount".to_string();

        let html = r#"<ul><li class="card"><span class="amount">995.000</span></li></ul>"#;
        let records = ListingExtractor::new(&map).unwrap().extract(html);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].price, "995.000");
        assert_eq!(records[0].rooms, MISSING_FIELD);
    }
}
