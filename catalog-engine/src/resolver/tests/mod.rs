use super::*;
use crate::catalog::{add_attribute, add_combination};
use shared::models::{
    Attribute, AttributeType, AttributeValueRef, CategoryRef, ShopRef, Variant,
};

fn make_variant(id: &str, sku: &str, delta: Option<f64>, stock: u32) -> Variant {
    Variant {
        id: id.to_string(),
        name: id.to_uppercase(),
        value: id.to_string(),
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

fn make_attribute(id: &str, required: bool, variants: Vec<Variant>) -> Attribute {
    Attribute {
        id: id.to_string(),
        name: id.trim_start_matches("attr-").to_string(),
        attribute_type: AttributeType::Other,
        display_name: id.to_string(),
        is_required: required,
        variants,
    }
}

fn make_combination(
    id: &str,
    sku: &str,
    pairs: &[(&str, &str)],
    price: f64,
    stock: u32,
    available: bool,
) -> VariantCombination {
    VariantCombination {
        id: id.to_string(),
        name: id.to_string(),
        attribute_values: pairs
            .iter()
            .map(|(a, v)| AttributeValueRef::new(*a, *v))
            .collect(),
        price,
        stock,
        sku: sku.to_string(),
        images: None,
        is_available: available,
        weight: None,
        dimensions: None,
    }
}

fn bare_product(id: &str, name: &str, price: f64, stock: u32, sku: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        price,
        original_price: None,
        stock,
        sku: sku.to_string(),
        category: CategoryRef {
            id: "cat-electronics".to_string(),
            name: "Electronics".to_string(),
        },
        sub_category: None,
        shop: ShopRef {
            id: "shop-volt".to_string(),
            name: "Volt Supply".to_string(),
            logo: "volt.png".to_string(),
        },
        is_active: true,
        is_featured: false,
        has_variants: false,
        attributes: vec![],
        variant_combinations: vec![],
        tags: vec![],
        views: 0,
        sales: 0,
        rating: 0.0,
        review_count: 0,
        created_at: None,
        updated_at: None,
    }
}

// ========================================================================
// Fixture: combination-mode phone
//
// color x storage grid with the black/256 cell never authored and the
// 512 storage option referenced by no combination at all. The 256
// variant carries a +50 delta that deliberately disagrees with the
// authored combination prices.
// ========================================================================

fn phone() -> Product {
    let mut p = bare_product("prod-phone", "Aster Phone", 699.0, 60, "PH-BASE");
    add_attribute(
        &mut p,
        make_attribute(
            "attr-color",
            true,
            vec![
                make_variant("v-red", "PH-RED", None, 30),
                make_variant("v-black", "PH-BLACK", None, 30),
            ],
        ),
    )
    .unwrap();
    add_attribute(
        &mut p,
        make_attribute(
            "attr-storage",
            true,
            vec![
                make_variant("v-128", "PH-128", None, 40),
                make_variant("v-256", "PH-256", Some(50.0), 15),
                make_variant("v-512", "PH-512", Some(120.0), 5),
            ],
        ),
    )
    .unwrap();
    for combination in [
        make_combination(
            "comb-red-256",
            "PH-R256",
            &[("attr-color", "v-red"), ("attr-storage", "v-256")],
            799.0,
            5,
            true,
        ),
        make_combination(
            "comb-red-128",
            "PH-R128",
            &[("attr-color", "v-red"), ("attr-storage", "v-128")],
            699.0,
            10,
            true,
        ),
        make_combination(
            "comb-black-128",
            "PH-B128",
            &[("attr-color", "v-black"), ("attr-storage", "v-128")],
            699.0,
            3,
            false,
        ),
    ] {
        add_combination(&mut p, combination).unwrap();
    }
    p
}

// ========================================================================
// Fixture: simple-mode shirt
//
// required size (S plain, M at +15) and optional fit (slim at +5)
// ========================================================================

fn shirt() -> Product {
    let mut p = bare_product("prod-shirt", "Linen Shirt", 120.0, 40, "SHIRT-BASE");
    add_attribute(
        &mut p,
        make_attribute(
            "attr-size",
            true,
            vec![
                make_variant("v-s", "SHIRT-S", None, 10),
                make_variant("v-m", "SHIRT-M", Some(15.0), 3),
            ],
        ),
    )
    .unwrap();
    add_attribute(
        &mut p,
        make_attribute(
            "attr-fit",
            false,
            vec![make_variant("v-slim", "SHIRT-SLIM", Some(5.0), 7)],
        ),
    )
    .unwrap();
    p
}

mod test_combination;
mod test_simple;
mod test_validation;
