//! Tests for window clamping and numbering

use linedump::window::LineWindow;

#[test]
fn given_sequence_longer_than_window_when_clamping_then_full_range() {
    // Arrange
    let window = LineWindow::new(1800, 1850);

    // Act / Assert
    assert_eq!(window.clamp(2000), 1800..1850);
}

#[test]
fn given_sequence_ending_inside_window_when_clamping_then_truncated_range() {
    let window = LineWindow::new(1800, 1850);
    assert_eq!(window.clamp(1830), 1800..1830);
}

#[test]
fn given_sequence_ending_before_window_when_clamping_then_empty_range() {
    let window = LineWindow::new(1800, 1850);
    assert!(window.clamp(1800).is_empty());
    assert!(window.clamp(42).is_empty());
    assert!(window.clamp(0).is_empty());
}

#[test]
fn given_sequence_ending_exactly_at_window_end_when_clamping_then_full_range() {
    let window = LineWindow::new(1800, 1850);
    assert_eq!(window.clamp(1850), 1800..1850);
}

#[test]
fn given_zero_based_window_when_asking_first_line_number_then_one_based() {
    assert_eq!(LineWindow::new(1800, 1850).first_line_number(), 1801);
    assert_eq!(LineWindow::new(0, 10).first_line_number(), 1);
}
