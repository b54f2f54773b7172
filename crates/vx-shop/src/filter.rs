//! Catalog filtering.
//!
//! A [`ProductFilter`] is an AND of optional predicates. Filters arrive
//! either from the builder methods or deserialised from a tool-call
//! argument object, which is why the price bounds also answer to the
//! `from`/`min` and `to`/`max` spellings.

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::{Catalog, Product};

const PHONE_WORDS: &[&str] = &["phone", "phones", "mobile", "mobiles"];

/// Map spoken category synonyms onto catalog categories.
///
/// Unknown categories come back lower-cased and otherwise untouched.
pub fn normalize_category(category: &str) -> String {
    let cat = category.trim().to_lowercase();
    match cat.as_str() {
        "phone" | "phones" | "mobile" | "mobile phone" | "mobiles" => "mobile".to_string(),
        "tshirt" | "t-shirts" | "tees" | "tee" => "tshirt".to_string(),
        _ => cat,
    }
}

/// Loose two-way category comparison: equal, or either contains the other.
///
/// This deliberately lets `"mobile phone case"` match `"mobile"`.
pub fn category_matches(product_category: &str, wanted: &str) -> bool {
    let pcat = product_category.to_lowercase();
    pcat == wanted || pcat.contains(wanted) || wanted.contains(pcat.as_str())
}

/// Whether the text mentions a phone.
pub fn mentions_phone(text: &str) -> bool {
    let text = text.to_lowercase();
    PHONE_WORDS.iter().any(|w| text.contains(w))
}

fn category_for_word(word: &str, categories: &[&str]) -> Option<String> {
    let normalized = normalize_category(word);
    categories
        .iter()
        .find(|c| **c == normalized || format!("{c}s") == normalized)
        .map(|c| c.to_string())
}

/// Tool-argument names for the same field, in precedence order.
pub const ALIASED_KEYS: &[&[&str]] = &[
    &["q", "query"],
    &["min_price", "from", "min"],
    &["max_price", "to", "max"],
];

/// Optional, AND-combined product predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductFilter {
    /// Free-text query over name and description.
    #[serde(rename = "q", alias = "query", skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Category or category synonym.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Inclusive lower price bound.
    #[serde(
        alias = "from",
        alias = "min",
        deserialize_with = "lenient_price",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_price: Option<u64>,
    /// Inclusive upper price bound.
    #[serde(
        alias = "to",
        alias = "max",
        deserialize_with = "lenient_price",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_price: Option<u64>,
    /// Color name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Required size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl ProductFilter {
    /// An empty filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a tool-call argument object.
    ///
    /// When a field arrives under more than one of its names, the first
    /// non-null one in [`ALIASED_KEYS`] order is used and the rest dropped.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut args: serde_json::Value = serde_json::from_str(json)?;
        if let Some(obj) = args.as_object_mut() {
            for keys in ALIASED_KEYS {
                let winner = keys
                    .iter()
                    .position(|k| obj.get(*k).is_some_and(|v| !v.is_null()));
                for (i, key) in keys.iter().enumerate() {
                    if winner != Some(i) {
                        obj.remove(*key);
                    }
                }
            }
        }
        serde_json::from_value(args)
    }

    /// Free-text query.
    pub fn query(mut self, q: impl Into<String>) -> Self {
        self.query = Some(q.into());
        self
    }

    /// Category (synonyms accepted).
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Inclusive lower bound.
    pub fn min_price(mut self, price: u64) -> Self {
        self.min_price = Some(price);
        self
    }

    /// Inclusive upper bound.
    pub fn max_price(mut self, price: u64) -> Self {
        self.max_price = Some(price);
        self
    }

    /// Color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Size.
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Whether no predicate is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Pull structure out of a free-text query, as the catalog tool does.
    ///
    /// Only applies when no category was given. A query word naming a
    /// category (a synonym or plural counts) becomes the category, a word
    /// naming a catalog color becomes the color, and the leftover words stay
    /// the query. A phone query keeps its full text, since that already
    /// restricts matches to mobiles.
    pub fn refine(mut self, catalog: &Catalog) -> Self {
        if non_blank(&self.category).is_some() {
            return self;
        }
        let Some(q) = non_blank(&self.query).map(|q| q.trim().to_lowercase()) else {
            return self;
        };

        let categories = catalog.categories();
        let mut rest = Vec::new();
        for word in q.split_whitespace() {
            if self.category.is_none()
                && let Some(category) = category_for_word(word, &categories)
            {
                self.category = Some(category);
            } else if non_blank(&self.color).is_none()
                && catalog.products().iter().any(|p| p.color == word)
            {
                self.color = Some(word.to_string());
            } else {
                rest.push(word);
            }
        }

        self.query = match (rest.is_empty(), mentions_phone(&q)) {
            (true, _) => None,
            (false, true) => Some(q.clone()),
            (false, false) => Some(rest.join(" ")),
        };

        tracing::debug!(
            query = %q,
            category = ?self.category,
            color = ?self.color,
            "refined catalog query"
        );
        self
    }

    /// Whether a product satisfies every set predicate.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = non_blank(&self.category)
            && !category_matches(&product.category, &normalize_category(category))
        {
            return false;
        }

        // Zero bounds are treated as unset.
        if let Some(max) = self.max_price.filter(|p| *p > 0)
            && product.price > max
        {
            return false;
        }
        if let Some(min) = self.min_price.filter(|p| *p > 0)
            && product.price < min
        {
            return false;
        }

        if let Some(color) = non_blank(&self.color)
            && !product.color.is_empty()
            && !product.color.eq_ignore_ascii_case(color.trim())
        {
            return false;
        }

        if let Some(size) = non_blank(&self.size)
            && !product.has_size(size.trim())
        {
            return false;
        }

        if let Some(q) = non_blank(&self.query) {
            let q = q.trim().to_lowercase();
            if mentions_phone(&q) {
                if product.category != "mobile" {
                    return false;
                }
            } else if !product.name.to_lowercase().contains(&q)
                && !product.description.to_lowercase().contains(&q)
            {
                return false;
            }
        }

        true
    }

    /// Matching products in catalog order.
    pub fn apply<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Product> {
        catalog
            .products()
            .iter()
            .filter(|p| self.matches(p))
            .collect()
    }
}

impl Catalog {
    /// Products matching a filter, in catalog order.
    pub fn list(&self, filter: &ProductFilter) -> Vec<&Product> {
        filter.apply(self)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Accept prices as numbers or numeric strings; anything else is ignored.
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}
