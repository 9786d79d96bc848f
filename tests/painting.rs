use image::{Rgb, RgbImage};
use imagepainter::{PaintCanvas, SnapshotHistory, flood_fill};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const RED: Rgb<u8> = Rgb([255, 0, 0]);
const BLUE: Rgb<u8> = Rgb([0, 0, 255]);

// A white 16×16 buffer with a black frame splitting inside from outside,
// the shape every fill test here works against
fn framed_image() -> RgbImage {
    let mut img = RgbImage::from_pixel(16, 16, WHITE);
    for i in 4..12 {
        img.put_pixel(i, 4, BLACK);
        img.put_pixel(i, 11, BLACK);
        img.put_pixel(4, i, BLACK);
        img.put_pixel(11, i, BLACK);
    }
    img
}

#[test]
fn fill_stays_inside_the_frame() {
    let mut img = framed_image();
    let filled = flood_fill(&mut img, 7, 7, RED);

    // 7×7 interior minus nothing: the frame is drawn on rows/cols 4..12
    assert_eq!(filled, 6 * 6);
    assert_eq!(*img.get_pixel(5, 5), RED);
    assert_eq!(*img.get_pixel(10, 10), RED);
    // Frame and exterior untouched
    assert_eq!(*img.get_pixel(4, 4), BLACK);
    assert_eq!(*img.get_pixel(0, 0), WHITE);
    assert_eq!(*img.get_pixel(15, 15), WHITE);
}

#[test]
fn fill_then_undo_restores_the_exact_buffer() {
    let mut canvas = PaintCanvas::new(framed_image());
    let mut history = SnapshotHistory::new();
    let pristine = canvas.snapshot();

    history.push(canvas.snapshot());
    let filled = flood_fill(canvas.image_mut(), 7, 7, RED);
    assert!(filled > 0);
    assert_ne!(canvas.image().as_raw(), pristine.as_raw());

    let snapshot = history.undo(canvas.image()).expect("one snapshot pushed");
    canvas.restore(snapshot);
    assert_eq!(canvas.image().as_raw(), pristine.as_raw());
}

#[test]
fn undo_redo_walks_the_edit_sequence() {
    let mut canvas = PaintCanvas::new(framed_image());
    let mut history = SnapshotHistory::new();

    // Edit 1: fill the interior red
    history.push(canvas.snapshot());
    flood_fill(canvas.image_mut(), 7, 7, RED);
    let after_fill = canvas.snapshot();

    // Edit 2: a brush stroke across the exterior
    history.push(canvas.snapshot());
    canvas.stroke_segment((0.0, 1.0), (16.0, 1.0), BLUE, 2);
    let after_stroke = canvas.snapshot();

    // Undo the stroke, then the fill
    let s = history.undo(canvas.image()).unwrap();
    canvas.restore(s);
    assert_eq!(canvas.image().as_raw(), after_fill.as_raw());

    let s = history.undo(canvas.image()).unwrap();
    canvas.restore(s);
    assert_eq!(canvas.image().as_raw(), framed_image().as_raw());
    assert!(!history.can_undo());

    // Redo both edits
    let s = history.redo(canvas.image()).unwrap();
    canvas.restore(s);
    assert_eq!(canvas.image().as_raw(), after_fill.as_raw());

    let s = history.redo(canvas.image()).unwrap();
    canvas.restore(s);
    assert_eq!(canvas.image().as_raw(), after_stroke.as_raw());
    assert!(!history.can_redo());
}

#[test]
fn new_edit_after_undo_discards_the_redo_branch() {
    let mut canvas = PaintCanvas::new(framed_image());
    let mut history = SnapshotHistory::new();

    history.push(canvas.snapshot());
    flood_fill(canvas.image_mut(), 7, 7, RED);

    let s = history.undo(canvas.image()).unwrap();
    canvas.restore(s);
    assert!(history.can_redo());

    // A different edit forks the timeline
    history.push(canvas.snapshot());
    flood_fill(canvas.image_mut(), 7, 7, BLUE);
    assert!(!history.can_redo());
    assert_eq!(*canvas.image().get_pixel(7, 7), BLUE);
}

#[test]
fn refill_with_a_new_color_replaces_the_region() {
    let mut img = framed_image();
    let first = flood_fill(&mut img, 7, 7, RED);
    let second = flood_fill(&mut img, 7, 7, BLUE);
    assert_eq!(first, second);
    assert_eq!(*img.get_pixel(5, 5), BLUE);
    assert_eq!(*img.get_pixel(0, 0), WHITE);
}
