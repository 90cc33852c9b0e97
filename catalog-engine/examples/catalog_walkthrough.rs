//! Catalog walkthrough - authoring and resolving variants end to end
//!
//! Drives the whole engine through the service facade:
//! 1. Login through the static auth gateway
//! 2. Create products in the in-memory store
//! 3. Author attributes/variants (simple mode) and resolve a selection
//! 4. Author explicit combinations and resolve full/partial selections
//! 5. Filter, paginate and summarize the catalog
//!
//! Run: cargo run -p catalog-engine --example catalog_walkthrough

use catalog_engine::auth::{AuthGateway, StaticAuthGateway, StaticUser};
use catalog_engine::core::CatalogConfig;
use catalog_engine::resolver::{Selection, SelectionOutcome};
use catalog_engine::service::CatalogService;
use shared::models::{
    AttributeCreate, AttributeType, AttributeValueRef, CategoryRef, CombinationCreate,
    ProductCreate, ShopRef, VariantCreate,
};
use shared::query::{ProductQuery, StatusFilter};
use shared::session::Credentials;

fn product_payload(name: &str, sku: &str, price: f64, stock: u32) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        description: format!("{name} from the walkthrough"),
        price,
        original_price: None,
        stock,
        sku: sku.to_string(),
        category: CategoryRef {
            id: "cat-apparel".to_string(),
            name: "Apparel".to_string(),
        },
        sub_category: None,
        shop: ShopRef {
            id: "shop-loom".to_string(),
            name: "Loom & Co".to_string(),
            logo: "loom.png".to_string(),
        },
        is_active: true,
        is_featured: false,
        has_variants: None,
        attributes: vec![],
        variant_combinations: vec![],
        tags: vec![],
    }
}

fn variant_payload(name: &str, value: &str, sku: &str, delta: Option<f64>, stock: u32) -> VariantCreate {
    VariantCreate {
        name: name.to_string(),
        value: value.to_string(),
        price: delta,
        stock,
        sku: sku.to_string(),
        images: None,
        is_default: false,
        hex_color: None,
        dimensions: None,
        weight: None,
    }
}

fn describe_outcome(outcome: &SelectionOutcome) {
    match outcome {
        SelectionOutcome::Resolved(quote) => println!(
            "   Resolved: price {:.2}, stock {}, sellable: {}",
            quote.price,
            quote.stock,
            quote.sellable()
        ),
        SelectionOutcome::Candidates(list) => {
            let names: Vec<&str> = list.iter().map(|c| c.name.as_str()).collect();
            println!("   Candidates ({}): {}", list.len(), names.join(", "));
        }
        SelectionOutcome::Unavailable => println!("   Unavailable (cell was never authored)"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Catalog Walkthrough ===\n");

    // === 1. Login ===
    println!("1. Logging in...");
    let gateway = StaticAuthGateway::new()
        .with_user(StaticUser::new("admin", "changeme", "admin"));
    let session = gateway.login(&Credentials::new("admin", "changeme")).await?;
    println!("   Session for {} issued at {}\n", session.user.username, session.issued_at);

    // === 2. Create products ===
    println!("2. Creating products...");
    let service = CatalogService::in_memory(CatalogConfig::from_env());

    let shirt = service
        .create_product(product_payload("Linen Shirt", "SHIRT-BASE", 120.0, 40))
        .await?;
    let phone = service
        .create_product(product_payload("Aster Phone", "PH-BASE", 699.0, 60))
        .await?;
    let mut featured = product_payload("Wool Scarf", "SCARF-1", 35.0, 3);
    featured.is_featured = true;
    service.create_product(featured).await?;
    println!("   Created 3 products, among them {} and {}\n", shirt.name, phone.name);

    // === 3. Simple mode: one attribute, additive deltas ===
    println!("3. Authoring a size attribute on the shirt...");
    let shirt = service
        .add_attribute(
            &shirt.id,
            AttributeCreate {
                name: "size".to_string(),
                attribute_type: AttributeType::Size,
                display_name: "Size".to_string(),
                is_required: true,
                variants: vec![
                    variant_payload("Small", "S", "SHIRT-S", None, 10),
                    variant_payload("Medium", "M", "SHIRT-M", Some(15.0), 3),
                ],
            },
        )
        .await?;
    let size_attr = &shirt.attributes[0];

    let preselect = service.default_selection(&shirt.id).await?;
    println!("   Default selection resolves to:");
    describe_outcome(&service.resolve(&shirt.id, &preselect).await?);

    let medium = Selection::new().pick(&size_attr.id, &size_attr.variants[1].id);
    println!("   Picking Medium (+15):");
    describe_outcome(&service.resolve(&shirt.id, &medium).await?);
    println!();

    // === 4. Combination mode: the authored grid is authoritative ===
    println!("4. Authoring color on the phone plus an explicit combination...");
    let phone = service
        .add_attribute(
            &phone.id,
            AttributeCreate {
                name: "color".to_string(),
                attribute_type: AttributeType::Color,
                display_name: "Color".to_string(),
                is_required: true,
                variants: vec![
                    variant_payload("Red", "red", "PH-RED", None, 30),
                    variant_payload("Black", "black", "PH-BLACK", None, 30),
                ],
            },
        )
        .await?;
    let color_attr = &phone.attributes[0];
    let red_id = color_attr.variants[0].id.clone();
    let black_id = color_attr.variants[1].id.clone();

    let phone = service
        .add_combination(
            &phone.id,
            CombinationCreate {
                name: "Red".to_string(),
                attribute_values: vec![AttributeValueRef::new(color_attr.id.clone(), red_id.clone())],
                price: 749.0,
                stock: 5,
                sku: "PH-R".to_string(),
                images: None,
                is_available: true,
                weight: None,
                dimensions: None,
            },
        )
        .await?;
    let color_id = phone.attributes[0].id.clone();

    println!("   Red (authored at 749):");
    describe_outcome(&service.resolve(&phone.id, &Selection::new().pick(&color_id, &red_id)).await?);
    println!("   Black (never authored):");
    describe_outcome(&service.resolve(&phone.id, &Selection::new().pick(&color_id, &black_id)).await?);
    println!("   Nothing picked yet:");
    describe_outcome(&service.resolve(&phone.id, &Selection::new()).await?);
    println!();

    // === 5. Query layer ===
    println!("5. Listing and summarizing...");
    let page = service.list_products(&ProductQuery::all()).await?;
    println!("   All products: {} across {} page(s)", page.total_count, page.total_pages);

    let low = service
        .list_products(&ProductQuery::all().with_status(StatusFilter::LowStock))
        .await?;
    println!("   Low stock: {}", low.total_count);

    let summary = service.summary().await?;
    println!(
        "   Summary: {} total, {} active, {} featured, {} out of stock",
        summary.total, summary.active, summary.featured, summary.out_of_stock
    );

    // === 6. Logout ===
    gateway.logout(&session).await?;
    println!("\n=== Walkthrough Complete ===");

    Ok(())
}
