use canvas::controller::CanvasController;
use canvas::geometry::{Point, Size};
use canvas::input::Pinch;

use super::*;
use crate::services::controller::spawn_controller_task;

// =============================================================================
// parse_line
// =============================================================================

#[test]
fn parse_line_decodes_tagged_event() {
    let event = parse_line(r#"{"type":"scroll_by","dx":3.0,"dy":-4.0}"#).unwrap();
    assert_eq!(event, Some(ControllerEvent::ScrollBy { dx: 3.0, dy: -4.0 }));
}

#[test]
fn parse_line_decodes_pinch_payload() {
    let line = r#"{"type":"pinch_updated","center":{"x":1.0,"y":2.0},"scale_factor":1.2,"last_scale_factor":1.1}"#;
    let event = parse_line(line).unwrap();
    let pinch = Pinch { center: Point::new(1.0, 2.0), scale_factor: 1.2, last_scale_factor: 1.1 };
    assert_eq!(event, Some(ControllerEvent::PinchUpdated(pinch)));
}

#[test]
fn parse_line_skips_blank_lines() {
    assert_eq!(parse_line("   ").unwrap(), None);
    assert_eq!(parse_line("").unwrap(), None);
}

#[test]
fn parse_line_rejects_unknown_type() {
    let err = parse_line(r#"{"type":"teleport"}"#).unwrap_err();
    assert!(matches!(err, HostError::Parse(_)));
}

// =============================================================================
// pump
// =============================================================================

#[tokio::test]
async fn pump_forwards_valid_lines_and_skips_bad_ones() {
    let mut controller = CanvasController::default();
    controller.set_document_size(Size::new(2000.0, 1500.0));
    controller.resize(Size::new(800.0, 600.0));
    let (handle, _task) = spawn_controller_task(controller, 4);

    let input = concat!(
        "{\"type\":\"set_offset\",\"offset\":{\"x\":10.0,\"y\":20.0}}\n",
        "not json at all\n",
        "\n",
        "{\"type\":\"scroll_by\",\"dx\":5.0,\"dy\":5.0}\n",
    );
    let forwarded = pump(input.as_bytes(), &handle).await.unwrap();
    assert_eq!(forwarded, 2);

    let snap = handle.snapshot().await.unwrap();
    assert_eq!(snap.viewport.offset, Point::new(15.0, 25.0));
}

#[tokio::test]
async fn pump_skips_non_utf8_lines() {
    let (handle, _task) = spawn_controller_task(CanvasController::default(), 4);

    let mut input = b"\xff\xfe garbage\n".to_vec();
    input.extend_from_slice(b"{\"type\":\"scroll_by\",\"dx\":1.0,\"dy\":2.0}");
    let forwarded = pump(input.as_slice(), &handle).await.unwrap();
    assert_eq!(forwarded, 1);

    let snap = handle.snapshot().await.unwrap();
    assert_eq!(snap.viewport.offset, Point::new(1.0, 2.0));
}

#[tokio::test]
async fn pump_reports_closed_controller() {
    let (handle, task) = spawn_controller_task(CanvasController::default(), 4);
    task.abort();
    assert!(task.await.is_err());

    let err = pump("{\"type\":\"drag_start\"}\n".as_bytes(), &handle).await.unwrap_err();
    assert!(matches!(err, HostError::ChannelClosed));
}
