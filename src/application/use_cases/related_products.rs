use crate::domain::Product;

/// Upper bound on products attached to a single reply.
pub const MAX_RELATED_PRODUCTS: usize = 3;

/// Keyword that, together with a niche mention in the user's message, pulls in
/// every product of that niche.
const RECOMMEND_KEYWORD: &str = "recommend";

/// Picks the products a generated answer is about.
///
/// A product matches when its exact name occurs in `generated`, or when the
/// lowercased `message` contains the product's niche label (as stored, not
/// lowercased) and the lowercased `generated` text contains "recommend".
/// Matches are taken in catalog order and capped at [`MAX_RELATED_PRODUCTS`].
/// This is substring matching only; there is no ranking.
pub fn match_related_products(message: &str, generated: &str, catalog: &[Product]) -> Vec<Product> {
    let message_lower = message.to_lowercase();
    let recommends = generated.to_lowercase().contains(RECOMMEND_KEYWORD);

    catalog
        .iter()
        .filter(|product| {
            generated.contains(product.name.as_str())
                || (recommends && message_lower.contains(product.niche.as_str()))
        })
        .take(MAX_RELATED_PRODUCTS)
        .cloned()
        .collect()
}
