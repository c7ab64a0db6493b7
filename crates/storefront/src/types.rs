//! Domain types for the mock storefront.
//!
//! These are the tagged records persisted in the data file and exposed
//! through the GraphQL schema. Field names serialize in camelCase so the
//! document on disk reads the same as the API (`priceV2`,
//! `subtotalPriceV2`, ...). Connection-valued fields (`images`, `variants`,
//! `lineItems`) are skipped by the derives here and resolved in
//! [`crate::graphql::objects`].

use async_graphql::{ID, InputObject, SimpleObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mockfront_core::{CursorKeyed, Identifiable, Money};

// =============================================================================
// Catalog Types
// =============================================================================

/// A product image.
///
/// Images have no id of their own; they are cursor-keyed by source URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Image URL.
    pub original_src: String,
    /// Alt text for accessibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    /// Image width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    /// Image height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
}

impl CursorKeyed for Image {
    fn cursor_key(&self) -> &str {
        &self.original_src
    }
}

/// Selected option on a product variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct SelectedOption {
    /// Option name (e.g., "Size", "Color").
    pub name: String,
    /// Selected value (e.g., "Large", "Blue").
    pub value: String,
}

/// Product option definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    /// Option ID.
    pub id: ID,
    /// Option name (e.g., "Size").
    pub name: String,
    /// Available values (e.g., `["Small", "Medium", "Large"]`).
    pub values: Vec<String>,
}

/// Price range across a product's variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    /// Minimum price among all variants.
    pub min_variant_price: Money,
    /// Maximum price among all variants.
    pub max_variant_price: Money,
}

/// A product variant (specific combination of options).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Variant {
    /// Variant ID.
    pub id: ID,
    /// Variant title (combination of option values).
    pub title: String,
    /// SKU code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Selected options for this variant.
    #[serde(default)]
    pub selected_options: Vec<SelectedOption>,
    /// Current price.
    pub price_v2: Money,
    /// Compare-at price (original price if on sale).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at_price_v2: Option<Money>,
    /// Denormalized copy of the owning product's primary image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Handle of the owning product (denormalized back-reference).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[graphql(skip)]
    pub product_handle: Option<String>,
}

impl Identifiable for Variant {
    fn node_id(&self) -> &str {
        self.id.as_str()
    }
}

impl CursorKeyed for Variant {
    fn cursor_key(&self) -> &str {
        self.node_id()
    }
}

/// A product in the catalog.
///
/// Products own their variants and images; nothing outside the product
/// references them except by denormalized copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Product {
    /// Product ID.
    pub id: ID,
    /// Product title.
    pub title: String,
    /// URL handle (unique, human-readable slug).
    pub handle: String,
    /// Vendor name.
    pub vendor: String,
    /// Plain text description.
    pub description: String,
    /// HTML description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    /// Price range across all variants.
    pub price_range: PriceRange,
    /// Option definitions (e.g., Size with its values).
    #[serde(default)]
    pub options: Vec<ProductOption>,
    /// Product images, in display order.
    #[serde(default)]
    #[graphql(skip)]
    pub images: Vec<Image>,
    /// Variants, in display order.
    #[serde(default)]
    #[graphql(skip)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// The product's primary (first) image, if any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&Image> {
        self.images.first()
    }

    /// Look up one of this product's variants by id.
    #[must_use]
    pub fn variant(&self, variant_id: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id.as_str() == variant_id)
    }

    /// Variants with the back-reference and primary image filled in.
    ///
    /// The stored catalog may omit both; resolution always hands out
    /// variants that carry the owning handle and the primary image.
    #[must_use]
    pub fn enriched_variants(&self) -> Vec<Variant> {
        self.variants
            .iter()
            .map(|variant| {
                let mut variant = variant.clone();
                variant.image = self.primary_image().cloned();
                variant.product_handle = Some(self.handle.clone());
                variant
            })
            .collect()
    }
}

impl Identifiable for Product {
    fn node_id(&self) -> &str {
        self.id.as_str()
    }
}

impl CursorKeyed for Product {
    fn cursor_key(&self) -> &str {
        self.node_id()
    }
}

// =============================================================================
// Checkout Types
// =============================================================================

/// One quantity-bearing entry in a checkout.
///
/// Everything except `quantity` is denormalized from the catalog at add
/// time; later catalog changes never affect existing line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct LineItem {
    /// Line item ID, derived from the variant id.
    pub id: ID,
    /// Quantity, always >= 1 while the item is present.
    pub quantity: i32,
    /// Owning product's title at add time.
    pub title: String,
    /// Variant price at add time.
    pub unit_price: Money,
    /// Denormalized copy of the catalog variant.
    pub variant: Variant,
}

impl Identifiable for LineItem {
    fn node_id(&self) -> &str {
        self.id.as_str()
    }
}

impl CursorKeyed for LineItem {
    fn cursor_key(&self) -> &str {
        self.node_id()
    }
}

/// The single shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Checkout {
    /// Checkout ID.
    pub id: ID,
    /// Web checkout URL.
    pub web_url: String,
    /// Subtotal. Equals the total; tax is never computed.
    pub subtotal_price_v2: Money,
    /// Total tax. Always the template's zero value.
    pub total_tax_v2: Money,
    /// Total price.
    pub total_price_v2: Money,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Completion timestamp; never set by this API.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Whether taxes are included in the prices.
    pub taxes_included: bool,
    /// Line items, in insertion order.
    #[serde(default)]
    #[graphql(skip)]
    pub line_items: Vec<LineItem>,
}

impl Identifiable for Checkout {
    fn node_id(&self) -> &str {
        self.id.as_str()
    }
}

/// A user-correctable checkout error, reported as data rather than as a
/// request failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutUserError {
    /// Input field the error refers to.
    pub field: Option<String>,
    /// Human-readable message.
    pub message: String,
}

/// Result of every checkout mutation.
#[derive(Debug, Clone, SimpleObject)]
pub struct CheckoutPayload {
    /// The checkout after the mutation.
    pub checkout: Checkout,
    /// User-correctable errors. Empty on success.
    pub checkout_user_errors: Vec<CheckoutUserError>,
}

// =============================================================================
// Mutation Inputs
// =============================================================================

/// A variant to add to the checkout.
#[derive(Debug, Clone, InputObject)]
#[graphql(name = "CheckoutLineItemInput")]
pub struct LineItemInput {
    /// Catalog variant id.
    pub variant_id: ID,
    /// Requested quantity.
    pub quantity: i32,
}

/// A quantity change for an existing line item.
#[derive(Debug, Clone, InputObject)]
#[graphql(name = "CheckoutLineItemUpdateInput")]
pub struct LineItemUpdateInput {
    /// Line item id.
    pub id: ID,
    /// New quantity; 0 removes the item.
    pub quantity: i32,
}

/// Input for `checkoutCreate`. The id is accepted for API compatibility
/// and ignored; there is exactly one checkout.
#[derive(Debug, Clone, InputObject)]
pub struct CheckoutCreateInput {
    /// Ignored.
    pub id: Option<ID>,
}

// =============================================================================
// Document
// =============================================================================

/// The root aggregate persisted by the store: the whole catalog plus the
/// singleton checkout. `checkout: None` means "never created".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Seed/static catalog; never mutated by the API.
    #[serde(default)]
    pub products: Vec<Product>,
    /// The cart, once `checkoutCreate` has run.
    #[serde(default)]
    pub checkout: Option<Checkout>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockfront_core::CurrencyCode;
    use rust_decimal::Decimal;

    fn variant(id: &str, cents: i64) -> Variant {
        Variant {
            id: ID::from(id),
            title: "Default".to_string(),
            sku: None,
            selected_options: Vec::new(),
            price_v2: Money::new(Decimal::new(cents, 2), CurrencyCode::EUR),
            compare_at_price_v2: None,
            image: None,
            product_handle: None,
        }
    }

    fn product() -> Product {
        Product {
            id: ID::from("gid://mockfront/Product/1"),
            title: "Test Product".to_string(),
            handle: "test-product".to_string(),
            vendor: "Mockfront".to_string(),
            description: String::new(),
            description_html: None,
            price_range: PriceRange {
                min_variant_price: Money::new(Decimal::new(1000, 2), CurrencyCode::EUR),
                max_variant_price: Money::new(Decimal::new(1000, 2), CurrencyCode::EUR),
            },
            options: Vec::new(),
            images: vec![Image {
                original_src: "https://cdn.mockfront.local/images/test.jpg".to_string(),
                alt_text: Some("Test".to_string()),
                width: Some(1024),
                height: Some(1024),
            }],
            variants: vec![variant("gid://mockfront/ProductVariant/11", 1000)],
        }
    }

    #[test]
    fn test_document_serializes_camel_case() {
        let document = Document {
            products: vec![product()],
            checkout: None,
        };
        let json = serde_json::to_value(&document).expect("serialize");
        let first = &json["products"][0];
        assert_eq!(first["priceRange"]["minVariantPrice"]["amount"], "10.00");
        assert_eq!(first["variants"][0]["priceV2"]["currencyCode"], "EUR");
        assert!(json["checkout"].is_null());
    }

    #[test]
    fn test_enriched_variants_carry_handle_and_primary_image() {
        let product = product();
        let enriched = product.enriched_variants();
        assert_eq!(enriched.len(), 1);
        let first = enriched.first().expect("variant");
        assert_eq!(first.product_handle.as_deref(), Some("test-product"));
        assert_eq!(
            first.image.as_ref().map(|i| i.original_src.as_str()),
            Some("https://cdn.mockfront.local/images/test.jpg")
        );
    }

    #[test]
    fn test_variant_lookup_by_id() {
        let product = product();
        assert!(product.variant("gid://mockfront/ProductVariant/11").is_some());
        assert!(product.variant("gid://mockfront/ProductVariant/99").is_none());
    }

    #[test]
    fn test_document_load_tolerates_missing_optional_fields() {
        let json = r#"{
            "products": [{
                "id": "p1",
                "title": "Bare",
                "handle": "bare",
                "vendor": "Mockfront",
                "description": "",
                "priceRange": {
                    "minVariantPrice": {"amount": "1.00", "currencyCode": "EUR"},
                    "maxVariantPrice": {"amount": "1.00", "currencyCode": "EUR"}
                }
            }]
        }"#;
        let document: Document = serde_json::from_str(json).expect("deserialize");
        let first = document.products.first().expect("product");
        assert!(first.variants.is_empty());
        assert!(first.images.is_empty());
        assert!(document.checkout.is_none());
    }
}
