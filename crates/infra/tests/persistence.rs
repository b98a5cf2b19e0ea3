//! End-to-end: ledger operations persisted to a directory store and reloaded.

use stockroom_core::{DomainError, ProductId, SystemClock};
use stockroom_infra::{
    DirectoryStore, HISTORY_KEY, KeyValueStore, PRODUCTS_KEY, PersistedLedger, StoreConfig,
};
use stockroom_inventory::{HistoryFilter, MovementType, NewProduct, StockStatus};

fn keyboard_stand() -> NewProduct {
    NewProduct {
        id: ProductId::from_raw("O-512"),
        name: "Keyboard stand".to_string(),
        category: "office".to_string(),
        location: "C-1-1".to_string(),
        stock_quantity: 12,
        min_stock_level: 5,
        max_stock_level: 40,
        optimal_stock_level: Some(20),
    }
}

#[test]
fn state_survives_restart() {
    stockroom_observability::init();
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        data_dir: dir.path().join("ledger"),
        seed_on_empty: true,
    };

    {
        let mut ledger = PersistedLedger::from_config(&config).unwrap();
        let product = ledger.register_product(keyboard_stand()).unwrap();
        assert_eq!(product.stock_status, StockStatus::Normal);
        ledger
            .record_outbound(&ProductId::from_raw("O-512"), 10, "Park", Some("desk setup".into()))
            .unwrap();
        assert!(ledger.delete_product(&ProductId::from_raw("D-205")));
    }

    let reopened = PersistedLedger::from_config(&config).unwrap();
    let ledger = reopened.ledger();

    let stand = ledger.product(&ProductId::from_raw("O-512")).unwrap();
    assert_eq!(stand.stock_quantity, 2);
    assert_eq!(stand.stock_status, StockStatus::Low);
    assert_eq!(stand.optimal_stock_level, Some(20));
    assert!(ledger.product(&ProductId::from_raw("D-205")).is_none());

    // 4 seed entries + registration + outbound.
    assert_eq!(ledger.history().len(), 6);
    let outbound: Vec<_> = ledger
        .query_history(
            HistoryFilter::new()
                .movement_type(MovementType::Outbound)
                .product_id(ProductId::from_raw("O-512")),
        )
        .to_vec();
    assert_eq!(outbound.len(), 1);
    assert_eq!(outbound[0].note.as_deref(), Some("desk setup"));

    let summary = ledger.stock_summary();
    assert_eq!(summary.total, 4);
    assert_eq!(summary.low, 3);
}

#[test]
fn corrupt_history_falls_back_but_keeps_products() {
    let dir = tempfile::tempdir().unwrap();
    let store = DirectoryStore::open(dir.path()).unwrap();

    {
        let mut ledger = PersistedLedger::open(store.clone(), SystemClock, true);
        ledger.register_product(keyboard_stand()).unwrap();
    }
    store.set(HISTORY_KEY, "[{\"id\": 7}]").unwrap();

    let ledger = PersistedLedger::open(store.clone(), SystemClock, true);
    assert_eq!(ledger.ledger().products().len(), 5);
    // History fell back to the sample entries.
    assert_eq!(ledger.ledger().history().len(), 4);
    assert!(store.get(PRODUCTS_KEY).unwrap().is_some());
}

#[test]
fn duplicate_registration_is_rejected_and_not_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let store = DirectoryStore::open(dir.path()).unwrap();
    let mut ledger = PersistedLedger::open(store.clone(), SystemClock, false);

    ledger.register_product(keyboard_stand()).unwrap();
    let before = store.get(PRODUCTS_KEY).unwrap();

    let err = ledger.register_product(keyboard_stand()).unwrap_err();
    assert_eq!(err, DomainError::DuplicateId("O-512".to_string()));
    assert_eq!(store.get(PRODUCTS_KEY).unwrap(), before);
}
