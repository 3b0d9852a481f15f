use crate::domain::Product;

/// Persona and house rules sent ahead of the inventory on every turn.
pub const ASSISTANT_PREAMBLE: &str = "\
You are the AI assistant for OWSCORP, a futuristic e-commerce platform.
Your tone should be helpful, professional, and slightly futuristic/tech-savvy.

Instructions:
1. Answer the user's question based ONLY on the provided inventory if possible.
2. If they ask for recommendations, suggest specific products from the list.
3. If they ask about support (returns, shipping), give general e-commerce advice but mention checking their dashboard.
4. Keep responses concise (under 3-4 sentences/bullets).
5. Format currency in INR (₹).";

/// One catalog entry as the model sees it.
pub fn inventory_line(product: &Product) -> String {
    format!(
        "- {} ({}): ₹{}. {}",
        product.name, product.niche, product.price, product.short_description
    )
}

/// The whole catalog, one line per product in catalog order. No truncation.
pub fn inventory_block(products: &[Product]) -> String {
    products
        .iter()
        .map(inventory_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full prompt for a single chat turn: preamble, inventory, then the user's
/// message in double quotes.
pub fn build_prompt(message: &str, products: &[Product]) -> String {
    format!(
        "{ASSISTANT_PREAMBLE}\n\nHere is our current product inventory:\n{}\n\nUser Query: \"{}\"",
        inventory_block(products),
        message
    )
}
