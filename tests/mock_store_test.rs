use marketplace_cart::framework::mock::MockCartClient;
use marketplace_cart::framework::{CartError, CartStore};
use marketplace_cart::model::{CartItem, ProductId};
use marketplace_cart::storage::StorageError;

/// Consumer logic under test: the "remove" button on a cart row. It drains the
/// line by decrementing until it is gone, which takes one call more than the
/// quantity because a line only disappears once it is already at zero.
async fn remove_line(store: &impl CartStore, id: &ProductId) -> Result<usize, CartError> {
    let quantity = store
        .products()
        .await?
        .into_iter()
        .find(|item| &item.id == id)
        .map(|item| item.quantity);

    let Some(quantity) = quantity else {
        return Ok(0);
    };
    let calls = quantity.max(0) as usize + 1;
    for _ in 0..calls {
        store.decrement(id.clone()).await?;
    }
    Ok(calls)
}

/// Pattern 0: consumer logic against a mocked cart.
#[tokio::test]
async fn test_remove_line_decrements_past_zero() {
    let mut mock = MockCartClient::new();
    mock.expect_products()
        .return_ok(vec![CartItem::new("p1", "Mug", "", 10.0, 2)]);
    for _ in 0..3 {
        mock.expect_decrement("p1".into()).return_ok(());
    }

    let calls = remove_line(&mock.client(), &"p1".into()).await.unwrap();

    assert_eq!(calls, 3);
    mock.verify();
}

#[tokio::test]
async fn test_remove_line_skips_missing_product() {
    let mut mock = MockCartClient::new();
    mock.expect_products().return_ok(Vec::new());

    let calls = remove_line(&mock.client(), &"p1".into()).await.unwrap();

    assert_eq!(calls, 0);
    mock.verify();
}

#[tokio::test]
async fn test_remove_line_stops_on_persistence_failure() {
    let mut mock = MockCartClient::new();
    mock.expect_products()
        .return_ok(vec![CartItem::new("p1", "Mug", "", 10.0, 1)]);
    mock.expect_decrement("p1".into())
        .return_err(CartError::Persistence(StorageError::Backend(
            "quota exceeded".to_string(),
        )));

    let result = remove_line(&mock.client(), &"p1".into()).await;

    assert!(matches!(result, Err(CartError::Persistence(_))));
    mock.verify();
}

#[tokio::test]
async fn test_add_to_cart_expectation() {
    let mut mock = MockCartClient::new();
    mock.expect_add_to_cart().return_ok(());
    mock.expect_increment("p1".into()).return_ok(());

    let store = mock.client();
    store
        .add_to_cart(CartItem::new("p1", "Mug", "", 10.0, 0))
        .await
        .unwrap();
    store.increment("p1".into()).await.unwrap();

    mock.verify();
}

#[tokio::test]
async fn test_quantity_of_answered_by_item_expectation() {
    let mut mock = MockCartClient::new();
    mock.expect_item("p1".into())
        .return_ok(Some(CartItem::new("p1", "Mug", "", 10.0, 3)));
    mock.expect_item("p2".into()).return_ok(None);

    let store = mock.client();
    assert_eq!(store.quantity_of(&"p1".into()).await.unwrap(), Some(3));
    assert_eq!(store.quantity_of(&"p2".into()).await.unwrap(), None);

    mock.verify();
}
