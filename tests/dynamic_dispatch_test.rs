use paysplit::domain::money::{Money, Rate};
use paysplit::domain::obligation::Obligation;
use paysplit::domain::ports::ObligationStoreBox;
use paysplit::infrastructure::in_memory::InMemoryObligationStore;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_store_as_trait_object() {
    let store: ObligationStoreBox = Box::new(InMemoryObligationStore::new());

    let obligation = Obligation::new(
        1,
        Money::new(dec!(938)),
        Money::new(dec!(18750)),
        Rate::new(dec!(24.99)),
    );

    // Verify Send + Sync by spawning a task
    let handle = tokio::spawn(async move {
        store.store(obligation).await.unwrap();
        store.get_all().await.unwrap()
    });

    let all = handle.await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, 1);
}
