//! WhatsApp contact links for the product detail page.

use crate::{config::storefront::BranchConfig, errors::Result};
use serde::Serialize;
use url::Url;

/// One call-to-action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhatsAppLink {
    /// Branch the message is addressed to
    pub branch: String,
    /// `https://wa.me/<phone>?text=<message>`
    pub url: String,
}

/// The pre-filled message sent to a branch about one product.
#[must_use]
pub fn contact_message(product_name: &str, product_url: &str, branch_name: &str) -> String {
    format!(
        "Halo, ka, aku tertarik dengan produk ini, minta infonya dong\n\n\
         Nama produk : *{product_name}*\n\
         Link produk : {product_url}\n\n\
         Cabang {branch_name}"
    )
}

/// Builds a `wa.me` deep link with the message url-encoded into `text`.
pub fn whatsapp_link(phone: &str, message: &str) -> Result<Url> {
    Ok(Url::parse_with_params(
        &format!("https://wa.me/{phone}"),
        &[("text", message)],
    )?)
}

/// One link per configured branch, in configuration order.
pub fn contact_links(
    branches: &[BranchConfig],
    product_name: &str,
    product_url: &str,
) -> Result<Vec<WhatsAppLink>> {
    branches
        .iter()
        .map(|branch| {
            let message = contact_message(product_name, product_url, &branch.name);
            Ok(WhatsAppLink {
                branch: branch.name.clone(),
                url: whatsapp_link(&branch.phone, &message)?.to_string(),
            })
        })
        .collect()
}
