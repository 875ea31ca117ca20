//! Cooking pipeline integration tests.
//!
//! Verifies the snapshot sequence a cooking task produces and the station
//! admission behavior, using the paused tokio clock so timing is exact.

use std::time::Duration;

use brigade_core::{
    kitchen::{Kitchen, KitchenConfig},
    order::OrderStatus,
    testing::fixtures,
};

#[tokio::test(start_paused = true)]
async fn test_two_second_order_produces_eleven_snapshots() {
    let kitchen = Kitchen::new(KitchenConfig::default());
    let mut rx = kitchen.cook(fixtures::pending_order(1, 2000));

    let mut snapshots = Vec::new();
    while let Some(snapshot) = rx.recv().await {
        snapshots.push(snapshot);
    }

    // One initial Cooking at 0.0, nine intermediates, one final Ready.
    assert_eq!(snapshots.len(), 11);

    assert_eq!(snapshots[0].status, OrderStatus::Cooking);
    assert_eq!(snapshots[0].progress, 0.0);

    for (i, snapshot) in snapshots.iter().take(10).enumerate().skip(1) {
        assert_eq!(snapshot.status, OrderStatus::Cooking);
        assert!((snapshot.progress - i as f32 / 10.0).abs() < f32::EPSILON);
    }

    let last = snapshots.last().unwrap();
    assert_eq!(last.status, OrderStatus::Ready);
    assert_eq!(last.progress, 1.0);
}

#[tokio::test(start_paused = true)]
async fn test_progress_is_monotonic_and_never_delivered() {
    let kitchen = Kitchen::new(KitchenConfig::default());
    let mut rx = kitchen.cook(fixtures::pending_order(9, 3700));

    let mut last_progress = -1.0f32;
    while let Some(snapshot) = rx.recv().await {
        assert!(snapshot.progress >= last_progress);
        assert_ne!(snapshot.status, OrderStatus::Delivered);
        last_progress = snapshot.progress;
    }
    assert_eq!(last_progress, 1.0);
}

#[tokio::test(start_paused = true)]
async fn test_only_three_orders_admitted_at_once() {
    let kitchen = Kitchen::new(KitchenConfig::default());
    assert_eq!(kitchen.available_stations(), 3);

    let mut streams: Vec<_> = (1..=5)
        .map(|id| kitchen.cook(fixtures::pending_order(id, 1000)))
        .collect();

    // Let the spawned tasks race for stations.
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(kitchen.available_stations(), 0);

    // Exactly three tasks got a station and produced their initial
    // snapshot; the other two are still waiting for admission.
    let mut admitted = 0;
    for rx in &mut streams {
        if rx.try_recv().is_ok() {
            admitted += 1;
        }
    }
    assert_eq!(admitted, 3);

    // Drain every stream concurrently; the waiters get admitted as
    // stations free up and all five orders finish.
    let mut collectors = Vec::new();
    for mut rx in streams {
        collectors.push(tokio::spawn(async move {
            let mut last = None;
            while let Some(snapshot) = rx.recv().await {
                last = Some(snapshot);
            }
            last
        }));
    }

    let mut ready = 0;
    for collector in collectors {
        let last = collector.await.unwrap().expect("stream produced nothing");
        assert_eq!(last.status, OrderStatus::Ready);
        assert_eq!(last.progress, 1.0);
        ready += 1;
    }
    assert_eq!(ready, 5);

    // All stations are back once the tasks are done.
    tokio::time::timeout(Duration::from_secs(10), async {
        while kitchen.available_stations() < 3 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("stations were not all released");
}

#[tokio::test(start_paused = true)]
async fn test_waiting_order_starts_only_after_a_station_frees() {
    let kitchen = Kitchen::new(KitchenConfig::default().with_stations(1));

    let mut first = kitchen.cook(fixtures::pending_order(1, 500));
    let mut second = kitchen.cook(fixtures::pending_order(2, 500));

    // The first order holds the only station.
    assert_eq!(first.recv().await.unwrap().progress, 0.0);
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert!(second.try_recv().is_err());

    // Finish the first order; the second gets admitted.
    while first.recv().await.is_some() {}
    let started = second.recv().await.unwrap();
    assert_eq!(started.id, 2);
    assert_eq!(started.status, OrderStatus::Cooking);
    while second.recv().await.is_some() {}
}
