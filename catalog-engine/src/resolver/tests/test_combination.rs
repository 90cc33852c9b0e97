use super::*;

#[test]
fn test_full_selection_resolves_single_combination() {
    let p = phone();
    let selection = Selection::new()
        .pick("attr-color", "v-red")
        .pick("attr-storage", "v-128");
    let outcome = resolve(&p, &selection).unwrap();
    let quote = outcome.quote().unwrap();
    assert_eq!(quote.price, 699.0);
    assert_eq!(quote.stock, 10);
    assert!(quote.sellable());
    assert_eq!(
        quote.combination.as_ref().map(|c| c.id.as_str()),
        Some("comb-red-128")
    );
}

#[test]
fn test_stored_price_wins_over_delta_arithmetic() {
    // The 256 variant carries a +50 delta, which would predict 749.
    // The authored combination says 799 and that is the answer.
    let p = phone();
    let selection = Selection::new()
        .pick("attr-color", "v-red")
        .pick("attr-storage", "v-256");
    let outcome = resolve(&p, &selection).unwrap();
    assert_eq!(outcome.quote().unwrap().price, 799.0);
}

#[test]
fn test_unauthored_cell_is_unavailable_not_an_error() {
    let p = phone();
    let selection = Selection::new()
        .pick("attr-color", "v-black")
        .pick("attr-storage", "v-256");
    let outcome = resolve(&p, &selection).unwrap();
    assert!(outcome.is_unavailable());
}

#[test]
fn test_disabled_combination_keeps_its_stored_flag() {
    let p = phone();
    let selection = Selection::new()
        .pick("attr-color", "v-black")
        .pick("attr-storage", "v-128");
    let outcome = resolve(&p, &selection).unwrap();
    let quote = outcome.quote().unwrap();
    assert!(!quote.available);
    assert!(!quote.sellable());
    // Stock is still reported as stored
    assert_eq!(quote.stock, 3);
}

#[test]
fn test_duplicate_cell_resolves_to_first_authored() {
    let mut p = phone();
    // Author a second combination for the red/128 cell at another price
    let dup = make_combination(
        "comb-red-128-late",
        "PH-R128-B",
        &[("attr-color", "v-red"), ("attr-storage", "v-128")],
        649.0,
        2,
        true,
    );
    add_combination(&mut p, dup).unwrap();

    let selection = Selection::new()
        .pick("attr-color", "v-red")
        .pick("attr-storage", "v-128");
    let outcome = resolve(&p, &selection).unwrap();
    assert_eq!(outcome.quote().unwrap().price, 699.0);
}

#[test]
fn test_resolved_quote_is_stable_across_calls() {
    let p = phone();
    let selection = Selection::new()
        .pick("attr-color", "v-red")
        .pick("attr-storage", "v-256");
    assert_eq!(resolve(&p, &selection), resolve(&p, &selection));
}
