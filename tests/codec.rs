use serde_json::json;
use wishlist_api::{
    codec::{self, ValidationError},
    models::{Item, Wishlist},
};

#[test]
fn wishlist_round_trip_keeps_fields_and_null_id() {
    let payload = json!({ "customer_id": 1, "wishlist_name": "subscription" });

    let wishlist = codec::wishlist_from_value(&payload).expect("valid wishlist");
    assert_eq!(
        wishlist,
        Wishlist {
            id: None,
            customer_id: 1,
            wishlist_name: "subscription".into(),
        }
    );

    let serialized = serde_json::to_value(&wishlist).expect("serializable");
    assert_eq!(
        serialized,
        json!({ "id": null, "customer_id": 1, "wishlist_name": "subscription" })
    );
}

#[test]
fn wishlist_ignores_client_supplied_id() {
    let payload = json!({ "id": 12, "customer_id": 3, "wishlist_name": "books" });

    let wishlist = codec::wishlist_from_value(&payload).expect("valid wishlist");
    assert_eq!(wishlist.id, None);
}

#[test]
fn non_object_payloads_are_rejected() {
    for payload in [json!([1, 2, 3]), json!("grocery"), json!(5), json!(null)] {
        assert!(matches!(
            codec::wishlist_from_value(&payload),
            Err(ValidationError::InvalidPayloadShape(_))
        ));
        assert!(matches!(
            codec::item_from_value(&payload, 1),
            Err(ValidationError::InvalidPayloadShape(_))
        ));
    }
}

#[test]
fn missing_required_fields_are_named() {
    assert_eq!(
        codec::wishlist_from_value(&json!({ "wishlist_name": "grocery" })),
        Err(ValidationError::MissingField("customer_id"))
    );
    assert_eq!(
        codec::wishlist_from_value(&json!({ "customer_id": 1, "wishlist_name": null })),
        Err(ValidationError::MissingField("wishlist_name"))
    );
    assert_eq!(
        codec::item_from_value(&json!({ "name": "toothpaste" }), 1),
        Err(ValidationError::MissingField("product_id"))
    );
    assert_eq!(
        codec::item_from_value(&json!({ "product_id": 1 }), 1),
        Err(ValidationError::MissingField("name"))
    );
}

#[test]
fn integer_fields_are_coerced() {
    for customer_id in [json!(4), json!("4"), json!(" 4 "), json!(4.0)] {
        let payload = json!({ "customer_id": customer_id, "wishlist_name": "grocery" });
        let wishlist = codec::wishlist_from_value(&payload).expect("coercible customer_id");
        assert_eq!(wishlist.customer_id, 4);
    }
}

#[test]
fn non_coercible_integers_are_rejected() {
    for customer_id in [
        json!(4.5),
        json!("four"),
        json!(true),
        json!([4]),
        json!(i64::from(i32::MAX) + 1),
    ] {
        let payload = json!({ "customer_id": customer_id, "wishlist_name": "grocery" });
        assert!(matches!(
            codec::wishlist_from_value(&payload),
            Err(ValidationError::InvalidPayloadShape(_))
        ));
    }
}

#[test]
fn string_fields_must_be_strings() {
    let payload = json!({ "customer_id": 1, "wishlist_name": 42 });
    assert!(matches!(
        codec::wishlist_from_value(&payload),
        Err(ValidationError::InvalidPayloadShape(_))
    ));
}

#[test]
fn length_limits_count_characters() {
    let at_limit = json!({ "customer_id": 1, "wishlist_name": "é".repeat(40) });
    assert!(codec::wishlist_from_value(&at_limit).is_ok());

    let over_limit = json!({ "customer_id": 1, "wishlist_name": "é".repeat(41) });
    assert_eq!(
        codec::wishlist_from_value(&over_limit),
        Err(ValidationError::FieldTooLong {
            field: "wishlist_name",
            max: 40
        })
    );

    let long_name = json!({ "product_id": 1, "name": "n".repeat(64) });
    assert_eq!(
        codec::item_from_value(&long_name, 1),
        Err(ValidationError::FieldTooLong {
            field: "name",
            max: 63
        })
    );
}

#[test]
fn item_takes_wishlist_from_caller_and_defaults_description() {
    let payload = json!({ "wishlist_id": 99, "product_id": 2, "name": "toothbrush" });

    let item = codec::item_from_value(&payload, 7).expect("valid item");
    assert_eq!(
        item,
        Item {
            id: None,
            wishlist_id: 7,
            product_id: 2,
            name: "toothbrush".into(),
            description: None,
        }
    );
    assert_eq!(
        serde_json::to_value(&item).expect("serializable"),
        json!({
            "id": null,
            "wishlist_id": 7,
            "product_id": 2,
            "name": "toothbrush",
            "description": null
        })
    );
}

#[test]
fn nested_items_are_optional_lists() {
    let without = json!({ "customer_id": 1, "wishlist_name": "grocery" });
    assert_eq!(codec::nested_items(&without), Ok(None));

    let with = json!({ "customer_id": 1, "wishlist_name": "grocery", "items": [{ "name": "x" }] });
    assert_eq!(codec::nested_items(&with).map(|items| items.map(|list| list.len())), Ok(Some(1)));

    let wrong = json!({ "customer_id": 1, "wishlist_name": "grocery", "items": {} });
    assert!(matches!(
        codec::nested_items(&wrong),
        Err(ValidationError::InvalidPayloadShape(_))
    ));
}
