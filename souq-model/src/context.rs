//! Prompt assembly: product grounding and photo attachments.

use souq_catalog::Product;

/// Append the matched products to the user text as a grounding block.
///
/// The block embeds the products as pretty-printed JSON and instructs the
/// model to quote real names and prices instead of inventing stock. With no
/// products the text passes through unchanged.
pub fn grounded_user_text(text: &str, products: &[Product]) -> String {
    if products.is_empty() {
        return text.to_string();
    }

    let products_json =
        serde_json::to_string_pretty(products).unwrap_or_else(|_| String::from("[]"));

    format!(
        "{text}\n\n[System Context: The following products are available in the store and match \
         the user's query. Use this data to provide specific prices and names. Do not invent \
         products not in this list if the user is asking for specific stock:\n{products_json}\n]"
    )
}

/// Split a base64 data URL into its mime type and raw base64 payload.
///
/// Camera uploads arrive as `data:<mime>;base64,<payload>`. Handling is
/// permissive: a missing header falls back to `image/jpeg` with the whole
/// input as payload, so a malformed attachment never fails the turn.
pub fn split_data_url(data_url: &str) -> (String, String) {
    let Some((header, payload)) = data_url.split_once(',') else {
        return (String::from("image/jpeg"), data_url.to_string());
    };

    let mime = header
        .strip_prefix("data:")
        .and_then(|rest| rest.split(';').next())
        .filter(|mime| !mime.is_empty())
        .unwrap_or("image/jpeg");

    (mime.to_string(), payload.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, price: f64) -> Product {
        Product { id, name: name.into(), price, ..Product::default() }
    }

    #[test]
    fn grounding_block_embeds_products_and_user_text() {
        let text = grounded_user_text("عندكم سماعات؟", &[product(1, "سماعة لاسلكية", 150.0)]);

        assert!(text.starts_with("عندكم سماعات؟"));
        assert!(text.contains("[System Context:"));
        assert!(text.contains("سماعة لاسلكية"));
        assert!(text.contains("150"));
        assert!(text.trim_end().ends_with(']'));
    }

    #[test]
    fn no_products_leaves_text_unchanged() {
        assert_eq!(grounded_user_text("مرحبا بكم", &[]), "مرحبا بكم");
    }

    #[test]
    fn data_url_with_header_splits_mime_and_payload() {
        let (mime, payload) = split_data_url("data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(mime, "image/png");
        assert_eq!(payload, "iVBORw0KGgo=");
    }

    #[test]
    fn bare_base64_defaults_to_jpeg() {
        let (mime, payload) = split_data_url("/9j/4AAQSkZJRg==");
        assert_eq!(mime, "image/jpeg");
        assert_eq!(payload, "/9j/4AAQSkZJRg==");
    }

    #[test]
    fn empty_header_defaults_to_jpeg() {
        let (mime, payload) = split_data_url("data:;base64,AAAA");
        assert_eq!(mime, "image/jpeg");
        assert_eq!(payload, "AAAA");
    }
}
