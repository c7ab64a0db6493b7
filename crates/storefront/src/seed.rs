//! Default data: the empty-cart template and the sample catalog.
//!
//! The catalog stands in for a real product feed; it is written to the
//! data file by `mf-cli seed` and loaded directly by tests. Ids follow the
//! `gid://` convention so cursors over them look like real storefront
//! cursors.

use async_graphql::ID;
use chrono::Utc;
use rust_decimal::Decimal;

use mockfront_core::{CurrencyCode, Money};

use crate::types::{
    Checkout, Image, PriceRange, Product, ProductOption, SelectedOption, Variant,
};

/// Id of the one checkout the system models.
pub const DEFAULT_CHECKOUT_ID: &str = "gid://mockfront/Checkout/1";

/// The fixed empty-cart template persisted by the first `checkoutCreate`.
#[must_use]
pub fn default_checkout() -> Checkout {
    Checkout {
        id: ID::from(DEFAULT_CHECKOUT_ID),
        web_url: "https://mockfront.local/checkout/1".to_string(),
        subtotal_price_v2: Money::zero(CurrencyCode::EUR),
        total_tax_v2: Money::zero(CurrencyCode::EUR),
        total_price_v2: Money::zero(CurrencyCode::EUR),
        created_at: Utc::now(),
        completed_at: None,
        taxes_included: true,
        line_items: Vec::new(),
    }
}

/// A small deterministic catalog: three products with images, options and
/// one or two variants each.
#[must_use]
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product {
            id: ID::from("gid://mockfront/Product/1"),
            title: "Granite Enamel Mug".to_string(),
            handle: "granite-enamel-mug".to_string(),
            vendor: "Mockfront Supply Co.".to_string(),
            description: "A 350ml speckled enamel mug for camp and desk alike.".to_string(),
            description_html: Some(
                "<p>A 350ml speckled enamel mug for camp and desk alike.</p>".to_string(),
            ),
            price_range: PriceRange {
                min_variant_price: money(1000),
                max_variant_price: money(1000),
            },
            options: vec![option("gid://mockfront/ProductOption/1", "Color", &["Granite"])],
            images: vec![image("granite-enamel-mug", "Speckled enamel mug")],
            variants: vec![variant(
                "gid://mockfront/ProductVariant/11",
                "Granite",
                "MUG-GRA-350",
                1000,
                None,
                &[("Color", "Granite")],
            )],
        },
        Product {
            id: ID::from("gid://mockfront/Product/2"),
            title: "Harbor Wool Beanie".to_string(),
            handle: "harbor-wool-beanie".to_string(),
            vendor: "Mockfront Supply Co.".to_string(),
            description: "Ribbed merino beanie, one size.".to_string(),
            description_html: Some("<p>Ribbed merino beanie, one size.</p>".to_string()),
            price_range: PriceRange {
                min_variant_price: money(1850),
                max_variant_price: money(1850),
            },
            options: vec![option(
                "gid://mockfront/ProductOption/2",
                "Color",
                &["Navy", "Moss"],
            )],
            images: vec![image("harbor-wool-beanie", "Folded wool beanie")],
            variants: vec![
                variant(
                    "gid://mockfront/ProductVariant/21",
                    "Navy",
                    "BEA-NVY-OS",
                    1850,
                    None,
                    &[("Color", "Navy")],
                ),
                variant(
                    "gid://mockfront/ProductVariant/22",
                    "Moss",
                    "BEA-MOS-OS",
                    1850,
                    Some(2200),
                    &[("Color", "Moss")],
                ),
            ],
        },
        Product {
            id: ID::from("gid://mockfront/Product/3"),
            title: "Alpine Trail Jacket".to_string(),
            handle: "alpine-trail-jacket".to_string(),
            vendor: "Northbound Outfitters".to_string(),
            description: "Three-layer shell jacket with taped seams.".to_string(),
            description_html: Some(
                "<p>Three-layer shell jacket with taped seams.</p>".to_string(),
            ),
            price_range: PriceRange {
                min_variant_price: money(12900),
                max_variant_price: money(13400),
            },
            options: vec![option(
                "gid://mockfront/ProductOption/3",
                "Size",
                &["M", "L"],
            )],
            images: vec![
                image("alpine-trail-jacket", "Shell jacket, front"),
                image("alpine-trail-jacket-back", "Shell jacket, back"),
            ],
            variants: vec![
                variant(
                    "gid://mockfront/ProductVariant/31",
                    "M",
                    "JKT-ALP-M",
                    12900,
                    None,
                    &[("Size", "M")],
                ),
                variant(
                    "gid://mockfront/ProductVariant/32",
                    "L",
                    "JKT-ALP-L",
                    13400,
                    None,
                    &[("Size", "L")],
                ),
            ],
        },
    ]
}

fn money(cents: i64) -> Money {
    Money::new(Decimal::new(cents, 2), CurrencyCode::EUR)
}

fn image(slug: &str, alt: &str) -> Image {
    Image {
        original_src: format!("https://cdn.mockfront.local/images/{slug}.jpg"),
        alt_text: Some(alt.to_string()),
        width: Some(1024),
        height: Some(1024),
    }
}

fn option(id: &str, name: &str, values: &[&str]) -> ProductOption {
    ProductOption {
        id: ID::from(id),
        name: name.to_string(),
        values: values.iter().map(ToString::to_string).collect(),
    }
}

fn variant(
    id: &str,
    title: &str,
    sku: &str,
    cents: i64,
    compare_at_cents: Option<i64>,
    selected: &[(&str, &str)],
) -> Variant {
    Variant {
        id: ID::from(id),
        title: title.to_string(),
        sku: Some(sku.to_string()),
        selected_options: selected
            .iter()
            .map(|(name, value)| SelectedOption {
                name: (*name).to_string(),
                value: (*value).to_string(),
            })
            .collect(),
        price_v2: money(cents),
        compare_at_price_v2: compare_at_cents.map(money),
        image: None,
        product_handle: None,
    }
}
