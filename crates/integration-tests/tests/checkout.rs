//! End-to-end checkout mutation tests.

use mockfront_integration_tests::TestContext;
use mockfront_storefront::seed;
use mockfront_storefront::store::DocumentStore;

/// The sample catalog's first variant: Granite Enamel Mug at 10.00 EUR.
fn mug_variant_id() -> String {
    seed::sample_catalog()
        .first()
        .and_then(|p| p.variants.first())
        .map(|v| v.id.to_string())
        .expect("sample catalog has variants")
}

const CHECKOUT_FIELDS: &str = "checkout { id webUrl taxesIncluded \
     subtotalPriceV2 { amount currencyCode } \
     totalTaxV2 { amount } \
     totalPriceV2 { amount currencyCode } \
     lineItems(first: 250) { totalCount edges { node { id title quantity \
       unitPrice { amount } variant { id priceV2 { amount } } } } } } \
     checkoutUserErrors { field message }";

fn create_mutation() -> String {
    format!("mutation {{ checkoutCreate {{ {CHECKOUT_FIELDS} }} }}")
}

fn add_mutation(variant_id: &str, quantity: i32) -> String {
    format!(
        r#"mutation {{ checkoutLineItemsAdd(checkoutId: "anything", lineItems: [{{variantId: "{variant_id}", quantity: {quantity}}}]) {{ {CHECKOUT_FIELDS} }} }}"#
    )
}

fn update_mutation(line_item_id: &str, quantity: i32) -> String {
    format!(
        r#"mutation {{ checkoutLineItemsUpdate(checkoutId: "anything", lineItems: [{{id: "{line_item_id}", quantity: {quantity}}}]) {{ {CHECKOUT_FIELDS} }} }}"#
    )
}

fn remove_mutation(line_item_id: &str) -> String {
    format!(
        r#"mutation {{ checkoutLineItemsRemove(checkoutId: "anything", lineItemIds: ["{line_item_id}"]) {{ {CHECKOUT_FIELDS} }} }}"#
    )
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_returns_the_empty_cart_template() {
    let ctx = TestContext::new();
    let data = ctx.execute_ok(&create_mutation()).await;

    let checkout = &data["checkoutCreate"]["checkout"];
    assert_eq!(checkout["id"], seed::DEFAULT_CHECKOUT_ID);
    assert_eq!(checkout["totalPriceV2"]["amount"], "0");
    assert_eq!(checkout["totalPriceV2"]["currencyCode"], "EUR");
    assert_eq!(checkout["taxesIncluded"], true);
    assert_eq!(checkout["lineItems"]["totalCount"], 0);
    assert_eq!(
        data["checkoutCreate"]["checkoutUserErrors"]
            .as_array()
            .map(Vec::len),
        Some(0)
    );
}

#[tokio::test]
async fn test_create_twice_keeps_the_cart_contents() {
    let ctx = TestContext::new();
    ctx.execute_ok(&create_mutation()).await;
    ctx.execute_ok(&add_mutation(&mug_variant_id(), 1)).await;

    let data = ctx.execute_ok(&create_mutation()).await;
    let checkout = &data["checkoutCreate"]["checkout"];
    assert_eq!(checkout["lineItems"]["totalCount"], 1);
    assert_eq!(checkout["totalPriceV2"]["amount"], "10.00");
}

// ============================================================================
// Add
// ============================================================================

#[tokio::test]
async fn test_add_one_item_totals_ten() {
    let ctx = TestContext::new();
    ctx.execute_ok(&create_mutation()).await;

    let variant_id = mug_variant_id();
    let data = ctx.execute_ok(&add_mutation(&variant_id, 1)).await;

    let checkout = &data["checkoutLineItemsAdd"]["checkout"];
    let edges = checkout["lineItems"]["edges"].as_array().expect("edges");
    assert_eq!(edges.len(), 1);

    let item = &edges[0]["node"];
    assert_eq!(item["id"], format!("{variant_id}__LI"));
    assert_eq!(item["quantity"], 1);
    assert_eq!(item["title"], "Granite Enamel Mug");
    assert_eq!(item["unitPrice"]["amount"], "10.00");
    assert_eq!(checkout["subtotalPriceV2"]["amount"], "10.00");
    assert_eq!(checkout["totalPriceV2"]["amount"], "10.00");
    // Tax stays at the template's zero; it is never computed.
    assert_eq!(checkout["totalTaxV2"]["amount"], "0");
}

#[tokio::test]
async fn test_adding_the_same_variant_again_increments_by_one() {
    let ctx = TestContext::new();
    ctx.execute_ok(&create_mutation()).await;
    let variant_id = mug_variant_id();

    ctx.execute_ok(&add_mutation(&variant_id, 1)).await;
    // The requested quantity of 5 is ignored by the merge.
    let data = ctx.execute_ok(&add_mutation(&variant_id, 5)).await;

    let checkout = &data["checkoutLineItemsAdd"]["checkout"];
    let edges = checkout["lineItems"]["edges"].as_array().expect("edges");
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0]["node"]["quantity"], 2);
    assert_eq!(checkout["totalPriceV2"]["amount"], "20.00");
}

#[tokio::test]
async fn test_add_before_create_is_a_hard_failure() {
    let ctx = TestContext::new();
    let response = ctx.execute(&add_mutation(&mug_variant_id(), 1)).await;
    assert!(!response.errors.is_empty());
    assert!(
        response.errors[0]
            .message
            .contains("checkout has not been created")
    );
}

#[tokio::test]
async fn test_add_unknown_variant_is_a_hard_failure() {
    let ctx = TestContext::new();
    ctx.execute_ok(&create_mutation()).await;

    let response = ctx
        .execute(&add_mutation("gid://mockfront/ProductVariant/999", 1))
        .await;
    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("not in the catalog"));

    // The failed add must not have touched the stored checkout.
    let document = ctx.store().load().await.expect("load");
    assert!(
        document
            .checkout
            .map(|c| c.line_items.is_empty())
            .unwrap_or(false)
    );
}

// ============================================================================
// Update & Remove
// ============================================================================

#[tokio::test]
async fn test_update_to_zero_removes_the_item() {
    let ctx = TestContext::new();
    ctx.execute_ok(&create_mutation()).await;
    let variant_id = mug_variant_id();
    ctx.execute_ok(&add_mutation(&variant_id, 1)).await;

    let data = ctx
        .execute_ok(&update_mutation(&format!("{variant_id}__LI"), 0))
        .await;
    let checkout = &data["checkoutLineItemsUpdate"]["checkout"];
    assert_eq!(checkout["lineItems"]["totalCount"], 0);
    assert_eq!(checkout["totalPriceV2"]["amount"], "0");
}

#[tokio::test]
async fn test_update_quantity_recomputes_totals() {
    let ctx = TestContext::new();
    ctx.execute_ok(&create_mutation()).await;
    let variant_id = mug_variant_id();
    ctx.execute_ok(&add_mutation(&variant_id, 1)).await;

    let data = ctx
        .execute_ok(&update_mutation(&format!("{variant_id}__LI"), 3))
        .await;
    let checkout = &data["checkoutLineItemsUpdate"]["checkout"];
    assert_eq!(checkout["totalPriceV2"]["amount"], "30.00");
    assert_eq!(checkout["subtotalPriceV2"]["amount"], "30.00");
}

#[tokio::test]
async fn test_update_unknown_line_item_is_a_silent_no_op() {
    let ctx = TestContext::new();
    ctx.execute_ok(&create_mutation()).await;
    ctx.execute_ok(&add_mutation(&mug_variant_id(), 1)).await;

    let data = ctx.execute_ok(&update_mutation("missing__LI", 9)).await;
    let checkout = &data["checkoutLineItemsUpdate"]["checkout"];
    assert_eq!(checkout["lineItems"]["totalCount"], 1);
    assert_eq!(checkout["totalPriceV2"]["amount"], "10.00");
}

#[tokio::test]
async fn test_remove_the_only_item_empties_the_cart() {
    let ctx = TestContext::new();
    ctx.execute_ok(&create_mutation()).await;
    let variant_id = mug_variant_id();
    ctx.execute_ok(&add_mutation(&variant_id, 1)).await;

    let data = ctx
        .execute_ok(&remove_mutation(&format!("{variant_id}__LI")))
        .await;
    let checkout = &data["checkoutLineItemsRemove"]["checkout"];
    assert_eq!(checkout["lineItems"]["totalCount"], 0);
    assert_eq!(checkout["totalPriceV2"]["amount"], "0");
}

#[tokio::test]
async fn test_totals_track_a_whole_session() {
    let ctx = TestContext::new();
    ctx.execute_ok(&create_mutation()).await;

    let catalog = seed::sample_catalog();
    let mug = mug_variant_id();
    let beanie = catalog
        .get(1)
        .and_then(|p| p.variants.first())
        .map(|v| v.id.to_string())
        .expect("beanie variant");

    ctx.execute_ok(&add_mutation(&mug, 1)).await; // 10.00
    let data = ctx.execute_ok(&add_mutation(&beanie, 2)).await; // + 2 x 18.50
    let checkout = &data["checkoutLineItemsAdd"]["checkout"];
    assert_eq!(checkout["totalPriceV2"]["amount"], "47.00");

    let data = ctx
        .execute_ok(&update_mutation(&format!("{beanie}__LI"), 1))
        .await;
    let checkout = &data["checkoutLineItemsUpdate"]["checkout"];
    assert_eq!(checkout["totalPriceV2"]["amount"], "28.50");

    let data = ctx.execute_ok(&remove_mutation(&format!("{mug}__LI"))).await;
    let checkout = &data["checkoutLineItemsRemove"]["checkout"];
    assert_eq!(checkout["totalPriceV2"]["amount"], "18.50");
}
