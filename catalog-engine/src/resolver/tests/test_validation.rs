use super::*;
use shared::error::ErrorCode;

#[test]
fn test_unknown_attribute_rejected() {
    let p = phone();
    let selection = Selection::new().pick("attr-carrier", "v-red");
    assert_eq!(
        resolve(&p, &selection),
        Err(SelectionError::InvalidAttributeReference {
            attribute_id: "attr-carrier".to_string(),
            variant_id: "v-red".to_string(),
        })
    );
}

#[test]
fn test_unknown_variant_on_known_attribute_rejected() {
    let p = phone();
    let selection = Selection::new().pick("attr-color", "v-teal");
    assert_eq!(
        resolve(&p, &selection),
        Err(SelectionError::InvalidAttributeReference {
            attribute_id: "attr-color".to_string(),
            variant_id: "v-teal".to_string(),
        })
    );
}

#[test]
fn test_variant_must_belong_to_the_named_attribute() {
    // v-128 exists, but under attr-storage, not attr-color
    let p = phone();
    let selection = Selection::new().pick("attr-color", "v-128");
    assert!(resolve(&p, &selection).is_err());
}

#[test]
fn test_rejection_is_eager_before_matching() {
    // One valid pair plus one bad pair: the bad pair wins even though
    // matching with just the valid pair would have produced candidates
    let p = phone();
    let selection = Selection::new()
        .pick("attr-color", "v-red")
        .pick("attr-storage", "v-1024");
    assert_eq!(
        resolve(&p, &selection),
        Err(SelectionError::InvalidAttributeReference {
            attribute_id: "attr-storage".to_string(),
            variant_id: "v-1024".to_string(),
        })
    );
}

#[test]
fn test_any_selection_on_plain_product_rejected() {
    // A product without attributes owns no pairs at all
    let p = bare_product("prod-mug", "Mug", 12.5, 4, "MUG-01");
    let selection = Selection::new().pick("attr-size", "v-s");
    assert!(resolve(&p, &selection).is_err());
}

#[test]
fn test_empty_selection_is_always_valid() {
    let p = bare_product("prod-mug", "Mug", 12.5, 4, "MUG-01");
    assert!(resolve(&p, &Selection::new()).is_ok());
    assert!(resolve(&phone(), &Selection::new()).is_ok());
}

#[test]
fn test_selection_error_converts_to_catalog_error() {
    let err = SelectionError::InvalidAttributeReference {
        attribute_id: "attr-color".to_string(),
        variant_id: "v-teal".to_string(),
    };
    let catalog_err: shared::error::CatalogError = err.into();
    assert_eq!(catalog_err.code, ErrorCode::InvalidAttributeReference);
    assert!(catalog_err.message.contains("attr-color"));
}
