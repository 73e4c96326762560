use std::time::Duration;

use canvas::config::ControllerConfig;
use canvas::geometry::{Point, Size};

use super::*;

fn fast_controller(tick_interval_ms: u64) -> CanvasController {
    let mut config = ControllerConfig::default();
    config.motion.tick_interval_ms = tick_interval_ms;
    let mut controller = CanvasController::new(config);
    controller.set_document_size(Size::new(2000.0, 1500.0));
    controller.resize(Size::new(800.0, 600.0));
    controller
}

async fn flick_right(handle: &ControllerHandle) {
    handle.send(ControllerEvent::DragStart).await.unwrap();
    handle
        .send(ControllerEvent::DragMove { prev: Point::new(100.0, 100.0), cur: Point::new(50.0, 100.0) })
        .await
        .unwrap();
    handle.send(ControllerEvent::DragEnd).await.unwrap();
}

// =============================================================================
// Event delivery
// =============================================================================

#[tokio::test]
async fn events_are_applied_before_snapshot() {
    let (handle, _task) = spawn_controller_task(fast_controller(1000), 8);
    handle.send(ControllerEvent::SetOffset { offset: Point::new(30.0, 40.0) }).await.unwrap();
    handle.send(ControllerEvent::ScrollBy { dx: 5.0, dy: -10.0 }).await.unwrap();

    let snap = handle.snapshot().await.unwrap();
    assert_eq!(snap.viewport.offset, Point::new(35.0, 30.0));
    assert!(!snap.ticking);
}

#[tokio::test]
async fn drag_end_reports_ticking_and_drag_start_pauses() {
    let (handle, _task) = spawn_controller_task(fast_controller(1000), 8);
    flick_right(&handle).await;
    assert!(handle.snapshot().await.unwrap().ticking);

    handle.send(ControllerEvent::DragStart).await.unwrap();
    let snap = handle.snapshot().await.unwrap();
    assert!(!snap.ticking);
    assert!(snap.dragging);
}

#[tokio::test]
async fn queue_capacity_of_zero_is_usable() {
    let (handle, _task) = spawn_controller_task(fast_controller(1000), 0);
    handle.send(ControllerEvent::ZoomIn { center: None }).await.unwrap();
    let snap = handle.snapshot().await.unwrap();
    assert!((snap.zoom - std::f64::consts::SQRT_2).abs() < 1e-9);
}

// =============================================================================
// Timer
// =============================================================================

#[tokio::test]
async fn ticks_keep_the_document_moving_after_release() {
    let (handle, _task) = spawn_controller_task(fast_controller(5), 8);
    flick_right(&handle).await;
    let released = handle.snapshot().await.unwrap().viewport.offset;
    assert_eq!(released, Point::new(50.0, 0.0));

    tokio::time::sleep(Duration::from_millis(80)).await;
    let later = handle.snapshot().await.unwrap();
    assert!(later.viewport.offset.x > released.x, "offset should coast: {:?}", later.viewport.offset);
    assert!(later.velocity.x > 0.0);
}

#[tokio::test]
async fn no_ticks_while_paused() {
    let (handle, _task) = spawn_controller_task(fast_controller(5), 8);
    handle.send(ControllerEvent::SetOffset { offset: Point::new(10.0, 10.0) }).await.unwrap();

    tokio::time::sleep(Duration::from_millis(40)).await;
    let snap = handle.snapshot().await.unwrap();
    assert_eq!(snap.viewport.offset, Point::new(10.0, 10.0));
    assert_eq!(snap.velocity, Point::ZERO);
}

#[tokio::test]
async fn first_tick_waits_a_full_period() {
    let (handle, _task) = spawn_controller_task(fast_controller(60_000), 8);
    flick_right(&handle).await;
    tokio::time::sleep(Duration::from_millis(20)).await;
    let snap = handle.snapshot().await.unwrap();
    assert_eq!(snap.viewport.offset, Point::new(50.0, 0.0));
    assert_eq!(snap.velocity, Point::ZERO);
}

// =============================================================================
// Lifecycle
// =============================================================================

#[tokio::test]
async fn dropping_every_handle_returns_the_controller() {
    let (handle, task) = spawn_controller_task(fast_controller(1000), 8);
    let other = handle.clone();
    handle.send(ControllerEvent::SetOffset { offset: Point::new(7.0, 8.0) }).await.unwrap();
    drop(handle);
    drop(other);

    let controller = task.await.unwrap();
    assert_eq!(controller.offset(), Point::new(7.0, 8.0));
}

#[tokio::test]
async fn send_after_task_exit_is_channel_closed() {
    let (handle, task) = spawn_controller_task(fast_controller(1000), 8);
    task.abort();
    assert!(matches!(task.await, Err(e) if e.is_cancelled()));

    let err = handle.send(ControllerEvent::DragStart).await.unwrap_err();
    assert!(matches!(err, HostError::ChannelClosed));
    let err = handle.snapshot().await.unwrap_err();
    assert!(matches!(err, HostError::ChannelClosed));
}
