//! Resolution of spoken product references.
//!
//! "The second phone", "black hoodie", "mug-001" and "number 3" all have to
//! land on a catalog product. Resolution first narrows the candidates by any
//! category the reference mentions, then tries an ordered cascade of stages;
//! the first stage to produce a product wins.

use strsim::jaro_winkler;

use crate::catalog::{Catalog, Product};
use crate::filter::mentions_phone;

/// A single matching strategy.
pub type ProductStage = for<'c> fn(&Reference<'c>) -> Option<&'c Product>;

/// The cascade, in the order the stages are tried.
pub const PRODUCT_STAGES: &[(&str, ProductStage)] = &[
    ("ordinal", ordinal_in_narrowed),
    ("id", exact_id),
    ("color_category", color_and_category),
    ("name", name_tokens),
    ("number", spoken_number),
    ("ordinal_any", ordinal_in_all),
];

const ORDINALS: &[(&str, usize)] = &[("first", 0), ("second", 1), ("third", 2), ("fourth", 3)];

/// Tokens shorter than this are ignored by the name stage.
const MIN_TOKEN_LEN: usize = 3;

/// A normalised reference together with its candidate lists.
#[derive(Debug, Clone)]
pub struct Reference<'c> {
    text: String,
    all: Vec<&'c Product>,
    narrowed: Vec<&'c Product>,
}

impl<'c> Reference<'c> {
    /// Normalise the text and narrow the candidates.
    ///
    /// A reference mentioning a phone narrows to mobiles, falling back to
    /// every candidate when there are none.
    pub fn new(text: &str, candidates: &[&'c Product]) -> Self {
        let text = text.trim().to_lowercase();
        let all = candidates.to_vec();
        let mut narrowed = all.clone();
        if mentions_phone(&text) {
            let mobiles: Vec<_> = all.iter().copied().filter(|p| p.category == "mobile").collect();
            if !mobiles.is_empty() {
                narrowed = mobiles;
            }
        }
        Self {
            text,
            all,
            narrowed,
        }
    }

    /// The lower-cased, trimmed reference.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn tokens(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }

    fn name_tokens(&self) -> Vec<&str> {
        self.tokens()
            .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
            .collect()
    }
}

/// Resolve a reference against the whole catalog.
pub fn resolve_product<'c>(catalog: &'c Catalog, reference: &str) -> Option<&'c Product> {
    let all: Vec<&Product> = catalog.products().iter().collect();
    resolve_among(&all, reference)
}

/// Resolve a reference against an explicit candidate list, e.g. the products
/// the customer was just shown.
pub fn resolve_among<'c>(candidates: &[&'c Product], reference: &str) -> Option<&'c Product> {
    resolve_with_stage(candidates, reference).map(|(_, product)| product)
}

/// Resolve a reference and report which stage matched.
pub fn resolve_with_stage<'c>(
    candidates: &[&'c Product],
    reference: &str,
) -> Option<(&'static str, &'c Product)> {
    let reference = Reference::new(reference, candidates);
    if reference.text().is_empty() {
        return None;
    }

    PRODUCT_STAGES.iter().find_map(|(name, stage)| {
        stage(&reference).map(|product| {
            tracing::debug!(stage = *name, product = %product.id, "resolved product");
            (*name, product)
        })
    })
}

/// Ordinal word, indexing the narrowed candidates.
pub fn ordinal_in_narrowed<'c>(r: &Reference<'c>) -> Option<&'c Product> {
    ordinal(r, &r.narrowed)
}

/// Exact id, case-insensitive, over every candidate.
pub fn exact_id<'c>(r: &Reference<'c>) -> Option<&'c Product> {
    r.all.iter().copied().find(|p| p.id.to_lowercase() == r.text)
}

/// Both the color and the category are mentioned.
pub fn color_and_category<'c>(r: &Reference<'c>) -> Option<&'c Product> {
    r.all.iter().copied().find(|p| {
        !p.color.is_empty()
            && !p.category.is_empty()
            && r.text.contains(&p.color.to_lowercase())
            && r.text.contains(&p.category.to_lowercase())
    })
}

/// Name tokens: a narrowed product whose name holds every token, else any
/// product whose name holds one of them.
///
/// With no token long enough to count, every name holds all of them, so the
/// first narrowed product matches.
pub fn name_tokens<'c>(r: &Reference<'c>) -> Option<&'c Product> {
    let tokens = r.name_tokens();
    r.narrowed
        .iter()
        .copied()
        .find(|p| {
            let name = p.name.to_lowercase();
            tokens.iter().all(|t| name.contains(t))
        })
        .or_else(|| {
            r.all.iter().copied().find(|p| {
                let name = p.name.to_lowercase();
                tokens.iter().any(|t| name.contains(t))
            })
        })
}

/// A bare number is a 1-based position in the narrowed candidates.
pub fn spoken_number<'c>(r: &Reference<'c>) -> Option<&'c Product> {
    r.tokens()
        .filter(|t| t.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|t| t.parse::<usize>().ok())
        .find_map(|n| n.checked_sub(1).and_then(|i| r.narrowed.get(i).copied()))
}

/// Ordinal word, indexing every candidate.
pub fn ordinal_in_all<'c>(r: &Reference<'c>) -> Option<&'c Product> {
    ordinal(r, &r.all)
}

fn ordinal<'c>(r: &Reference<'c>, list: &[&'c Product]) -> Option<&'c Product> {
    ORDINALS
        .iter()
        .filter(|(word, _)| r.text.contains(word))
        .find_map(|(_, i)| list.get(*i).copied())
}

/// Suggest products whose id or name resembles the input.
pub fn suggest_products<'c>(catalog: &'c Catalog, partial: &str, limit: usize) -> Vec<&'c Product> {
    let partial = partial.trim().to_lowercase();
    if partial.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(&Product, f64)> = catalog
        .products()
        .iter()
        .filter_map(|p| {
            let name = p.name.to_lowercase();
            if name.starts_with(&partial) || p.id.starts_with(&partial) {
                Some((p, 2.0))
            } else if name.contains(&partial) {
                Some((p, 1.0))
            } else {
                let score = jaro_winkler(&partial, &name).max(jaro_winkler(&partial, &p.id));
                (score >= 0.75).then_some((p, score))
            }
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().take(limit).map(|(p, _)| p).collect()
}
