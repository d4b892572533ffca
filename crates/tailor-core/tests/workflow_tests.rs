use std::sync::Arc;

use rust_decimal::Decimal;
use tailor_core::{
    models::{Department, OrderFilter, OrderStatus},
    params::RecordAdvance,
    queue::QueueQuery,
    store::OrderStore,
    NotificationOutcome, ShopError,
};

mod common;
use common::{
    create_memory_workshop, create_test_workshop, dispatched_order, order_params, worker,
    RecordingNotifier,
};

async fn queue_ids(workshop: &tailor_core::Workshop, department: Department) -> Vec<u64> {
    workshop
        .list_queue(&QueueQuery::new(department))
        .await
        .expect("Failed to list queue")
        .iter()
        .map(|order| order.id)
        .collect()
}

#[tokio::test]
async fn test_blouse_order_walks_every_department() {
    let notifier = Arc::new(RecordingNotifier::default());
    let (_store, workshop) = create_memory_workshop(notifier.clone()).await;

    let order = dispatched_order(&workshop, &["Blouse"]).await;
    assert_eq!(order.status, OrderStatus::Cutting);
    assert_eq!(queue_ids(&workshop, Department::Cutting).await, vec![order.id]);

    let stations = [
        (Department::Cutting, OrderStatus::Stitching),
        (Department::BlouseStitching, OrderStatus::Finishing),
        (Department::Finishing, OrderStatus::Ironing),
        (Department::Ironing, OrderStatus::Completed),
    ];

    for (station, expected) in stations {
        let actor = worker(station.as_str(), station);
        let claimed = workshop.claim_order(order.id, &actor).await.unwrap();
        assert!(claimed.is_held_by(&actor.id));
        assert_eq!(claimed.status, station.stage());

        let outcome = workshop.complete_order(order.id, &actor).await.unwrap();
        assert_eq!(outcome.order.status, expected);
        assert!(outcome.order.assignment.is_none());
        assert!(queue_ids(&workshop, station).await.is_empty());
    }

    assert!(queue_ids(&workshop, Department::DressStitching).await.is_empty());
    assert_eq!(notifier.notified(), vec![order.id]);

    let stored = workshop.get_order(order.id).await.unwrap().unwrap();
    assert_eq!(stored.status, OrderStatus::Completed);
    assert!(stored.completed_at.is_some());
    for department in Department::ALL {
        assert!(queue_ids(&workshop, department).await.is_empty());
    }
}

#[tokio::test]
async fn test_saree_order_skips_cutting_and_stitching() {
    let (_temp_dir, workshop) = create_test_workshop().await;

    let order = dispatched_order(&workshop, &["Saree"]).await;
    assert_eq!(order.status, OrderStatus::Finishing);
    assert!(queue_ids(&workshop, Department::Cutting).await.is_empty());
    assert_eq!(queue_ids(&workshop, Department::Finishing).await, vec![order.id]);

    let finisher = worker("f1", Department::Finishing);
    workshop.claim_order(order.id, &finisher).await.unwrap();
    let outcome = workshop.complete_order(order.id, &finisher).await.unwrap();
    assert_eq!(outcome.order.status, OrderStatus::Ironing);
    assert_eq!(outcome.notification, NotificationOutcome::NotRequired);
}

#[tokio::test]
async fn test_dress_order_goes_to_dress_stitching() {
    let (_temp_dir, workshop) = create_test_workshop().await;
    let order = dispatched_order(&workshop, &["Kurti", "Pant"]).await;

    let cutter = worker("c1", Department::Cutting);
    workshop.claim_order(order.id, &cutter).await.unwrap();
    workshop.complete_order(order.id, &cutter).await.unwrap();

    assert_eq!(queue_ids(&workshop, Department::DressStitching).await, vec![order.id]);
    assert!(queue_ids(&workshop, Department::BlouseStitching).await.is_empty());

    let wrong_station = worker("b1", Department::BlouseStitching);
    assert!(matches!(
        workshop.claim_order(order.id, &wrong_station).await,
        Err(ShopError::WrongDepartment { .. })
    ));
}

#[tokio::test]
async fn test_complete_requires_claim_and_writes_nothing() {
    let notifier = Arc::new(RecordingNotifier::default());
    let (store, workshop) = create_memory_workshop(notifier).await;
    let order = dispatched_order(&workshop, &["Kurti"]).await;
    let before = store.load_orders().unwrap();

    let cutter = worker("c1", Department::Cutting);
    assert!(matches!(
        workshop.complete_order(order.id, &cutter).await,
        Err(ShopError::NotAssigned { .. })
    ));
    assert_eq!(store.load_orders().unwrap(), before);
}

#[tokio::test]
async fn test_completed_order_is_terminal_without_write() {
    let notifier = Arc::new(RecordingNotifier::default());
    let (store, workshop) = create_memory_workshop(notifier.clone()).await;
    let order = dispatched_order(&workshop, &["Saree"]).await;

    let finisher = worker("f1", Department::Finishing);
    let ironer = worker("i1", Department::Ironing);
    workshop.claim_order(order.id, &finisher).await.unwrap();
    workshop.complete_order(order.id, &finisher).await.unwrap();
    workshop.claim_order(order.id, &ironer).await.unwrap();
    workshop.complete_order(order.id, &ironer).await.unwrap();

    let before = store.load_orders().unwrap();
    assert!(matches!(
        workshop.complete_order(order.id, &ironer).await,
        Err(ShopError::TerminalState { .. })
    ));
    assert!(matches!(
        workshop.claim_order(order.id, &ironer).await,
        Err(ShopError::TerminalState { .. })
    ));
    assert_eq!(store.load_orders().unwrap(), before);
    assert_eq!(notifier.notified().len(), 1);
}

#[tokio::test]
async fn test_notifier_failure_keeps_completion() {
    let notifier = Arc::new(RecordingNotifier::failing());
    let (_store, workshop) = create_memory_workshop(notifier.clone()).await;
    let order = dispatched_order(&workshop, &["Saree"]).await;

    let finisher = worker("f1", Department::Finishing);
    let ironer = worker("i1", Department::Ironing);
    workshop.claim_order(order.id, &finisher).await.unwrap();
    workshop.complete_order(order.id, &finisher).await.unwrap();
    workshop.claim_order(order.id, &ironer).await.unwrap();
    let outcome = workshop.complete_order(order.id, &ironer).await.unwrap();

    assert!(matches!(
        outcome.notification,
        NotificationOutcome::Failed { ref reason } if reason.contains("SMS gateway")
    ));
    let stored = workshop.get_order(order.id).await.unwrap().unwrap();
    assert_eq!(stored.status, OrderStatus::Completed);
    assert_eq!(notifier.notified(), vec![order.id]);
}

#[tokio::test]
async fn test_release_returns_order_unclaimed() {
    let (_temp_dir, workshop) = create_test_workshop().await;
    let order = dispatched_order(&workshop, &["Jacket"]).await;

    let first = worker("c1", Department::Cutting);
    let second = worker("c2", Department::Cutting);
    workshop.claim_order(order.id, &first).await.unwrap();

    assert!(matches!(
        workshop.release_order(order.id, &second).await,
        Err(ShopError::Conflict { .. })
    ));

    let released = workshop.release_order(order.id, &first).await.unwrap();
    assert_eq!(released.status, OrderStatus::Cutting);
    assert!(released.assignment.is_none());

    let claimed = workshop.claim_order(order.id, &second).await.unwrap();
    assert!(claimed.is_held_by("c2"));
}

#[tokio::test]
async fn test_create_order_validation_and_balance_carry() {
    let (_temp_dir, workshop) = create_test_workshop().await;

    let nameless = order_params("  ", "9000000001", &["Blouse"]);
    assert!(matches!(
        workshop.create_order(&nameless).await,
        Err(ShopError::Validation { field, .. }) if field == "customer_name"
    ));
    assert!(workshop
        .list_orders(&OrderFilter::default())
        .await
        .unwrap()
        .is_empty());

    let mut first = order_params("Priya", "9000000001", &["Blouse", "Kurti"]);
    first.advance = Decimal::from(300);
    let first = workshop.create_order(&first).await.unwrap();
    assert_eq!(first.bill_no, "ST000001");
    assert_eq!(first.financials.total_amount, Decimal::from(1000));
    assert_eq!(first.financials.balance, Decimal::from(700));

    let second = workshop
        .create_order(&order_params("Priya", "9000000001", &["Saree"]))
        .await
        .unwrap();
    assert_eq!(second.financials.previous_balance, Decimal::from(700));
    assert_eq!(second.financials.total_amount, Decimal::from(1200));

    let customer = workshop.find_customer("9000000001").await.unwrap().unwrap();
    assert_eq!(customer.bills, vec![first.id, second.id]);
    assert_eq!(customer.previous_balance, Decimal::from(1200));
}

#[tokio::test]
async fn test_create_order_rejects_totals_that_overflow() {
    let (_temp_dir, workshop) = create_test_workshop().await;

    let mut huge = order_params("Meena", "9876543210", &["Blouse"]);
    huge.items[0].qty = u32::MAX;
    huge.items[0].rate = Decimal::MAX;
    assert!(matches!(
        workshop.create_order(&huge).await,
        Err(ShopError::Validation { field, .. }) if field == "items"
    ));

    let mut near_limit = order_params("Meena", "9876543210", &["Blouse"]);
    near_limit.previous_balance = Some(Decimal::MAX - Decimal::from(500));
    let first = workshop.create_order(&near_limit).await.unwrap();
    assert_eq!(first.financials.balance, Decimal::MAX);

    let carried = order_params("Meena", "9876543210", &["Saree"]);
    assert!(matches!(
        workshop.create_order(&carried).await,
        Err(ShopError::Validation { field, .. }) if field == "items"
    ));

    let stored = workshop.list_orders(&OrderFilter::default()).await.unwrap();
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn test_record_advance_recomputes_balance() {
    let (_temp_dir, workshop) = create_test_workshop().await;
    let order = dispatched_order(&workshop, &["Blouse"]).await;

    let updated = workshop
        .record_advance(&RecordAdvance {
            order_id: order.id,
            advance: Decimal::from(450),
        })
        .await
        .unwrap();
    assert_eq!(updated.financials.balance, Decimal::from(50));
    assert_eq!(updated.status, OrderStatus::Cutting);

    assert!(workshop
        .record_advance(&RecordAdvance {
            order_id: order.id,
            advance: Decimal::from(-1),
        })
        .await
        .is_err());
}

#[tokio::test]
async fn test_dispatch_refuses_non_pending() {
    let (_temp_dir, workshop) = create_test_workshop().await;
    let order = dispatched_order(&workshop, &["Kurti"]).await;

    assert!(matches!(
        workshop.dispatch_order(order.id).await,
        Err(ShopError::Validation { field, .. }) if field == "status"
    ));
    assert!(matches!(
        workshop.dispatch_order(999).await,
        Err(ShopError::OrderNotFound { id: 999 })
    ));
}

#[tokio::test]
async fn test_list_orders_filters() {
    let (_temp_dir, workshop) = create_test_workshop().await;
    let cutting = dispatched_order(&workshop, &["Kurti"]).await;
    let finishing = dispatched_order(&workshop, &["Saree"]).await;

    let by_status = workshop
        .list_orders(&OrderFilter::with_status(OrderStatus::Finishing))
        .await
        .unwrap();
    assert_eq!(by_status.len(), 1);
    assert_eq!(by_status[0].id, finishing.id);

    let cutter = worker("c1", Department::Cutting);
    workshop.claim_order(cutting.id, &cutter).await.unwrap();
    let held = workshop
        .list_orders(&OrderFilter {
            worker_id: Some("c1".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(held.len(), 1);
    assert_eq!(held[0].id, cutting.id);
}
