use super::*;

#[test]
fn test_plain_product_quotes_its_own_price_and_stock() {
    let p = bare_product("prod-mug", "Mug", 12.5, 4, "MUG-01");
    let outcome = resolve(&p, &Selection::new()).unwrap();
    let quote = outcome.quote().unwrap();
    assert_eq!(quote.price, 12.5);
    assert_eq!(quote.stock, 4);
    assert!(quote.available);
    assert!(quote.combination.is_none());
}

#[test]
fn test_price_is_base_plus_selected_deltas() {
    let p = shirt();
    let selection = Selection::new().pick("attr-size", "v-m");
    let outcome = resolve(&p, &selection).unwrap();
    assert_eq!(outcome.quote().unwrap().price, 135.0);

    let both = selection.pick("attr-fit", "v-slim");
    let outcome = resolve(&p, &both).unwrap();
    assert_eq!(outcome.quote().unwrap().price, 140.0);
}

#[test]
fn test_variant_without_delta_adds_nothing() {
    let p = shirt();
    let selection = Selection::new().pick("attr-size", "v-s");
    let outcome = resolve(&p, &selection).unwrap();
    assert_eq!(outcome.quote().unwrap().price, 120.0);
}

#[test]
fn test_stock_is_minimum_over_selected_variants() {
    let p = shirt();
    let selection = Selection::new()
        .pick("attr-size", "v-m")
        .pick("attr-fit", "v-slim");
    let quote_stock = resolve(&p, &selection).unwrap().quote().unwrap().stock;
    assert_eq!(quote_stock, 3);
}

#[test]
fn test_missing_required_attribute_quotes_zero_stock() {
    let p = shirt();
    let selection = Selection::new().pick("attr-fit", "v-slim");
    let outcome = resolve(&p, &selection).unwrap();
    let quote = outcome.quote().unwrap();
    assert_eq!(quote.stock, 0);
    assert!(!quote.sellable());
    // The price still reflects what was picked so far
    assert_eq!(quote.price, 125.0);
}

#[test]
fn test_simple_mode_never_produces_candidates() {
    let p = shirt();
    let outcome = resolve(&p, &Selection::new().pick("attr-size", "v-s")).unwrap();
    assert!(matches!(outcome, SelectionOutcome::Resolved(_)));
}

#[test]
fn test_resolution_is_repeatable() {
    let p = shirt();
    let selection = Selection::new()
        .pick("attr-size", "v-m")
        .pick("attr-fit", "v-slim");
    let first = resolve(&p, &selection).unwrap();
    let second = resolve(&p, &selection).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_delta_accumulation_stays_exact() {
    // Ten 0.1 deltas over a 0.5 base must land on 1.5, not 1.4999...
    let mut p = bare_product("prod-bead", "Bead", 0.5, 100, "BEAD-0");
    for i in 0..10 {
        add_attribute(
            &mut p,
            make_attribute(
                &format!("attr-{i}"),
                false,
                vec![make_variant(
                    &format!("v-{i}"),
                    &format!("BEAD-{i}"),
                    Some(0.1),
                    50,
                )],
            ),
        )
        .unwrap();
    }
    let mut selection = Selection::new();
    for i in 0..10 {
        selection.set(format!("attr-{i}"), format!("v-{i}"));
    }
    let outcome = resolve(&p, &selection).unwrap();
    assert_eq!(outcome.quote().unwrap().price, 1.5);
}
