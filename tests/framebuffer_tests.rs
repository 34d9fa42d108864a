use pixel_gallery::framebuffer::Framebuffer;
use pixel_gallery::types::{Color, PixelImage, Rect};

fn rgba(color: Color) -> [u8; 4] {
    [color.r, color.g, color.b, color.a]
}

#[test]
fn fill_rect_covers_exactly_its_region() {
    let mut fb = Framebuffer::new(8, 8);
    fb.clear(Color::BLACK);
    fb.fill_rect(Rect::new(2, 3, 4, 2), Color::RED);

    for y in 0..8 {
        for x in 0..8 {
            let inside = (2..6).contains(&x) && (3..5).contains(&y);
            let expected = if inside { Color::RED } else { Color::BLACK };
            assert_eq!(fb.pixel(x, y), rgba(expected), "pixel ({x}, {y})");
        }
    }
}

#[test]
fn fill_rect_clips_against_every_edge() {
    let mut fb = Framebuffer::new(4, 4);
    fb.fill_rect(Rect::new(-2, -2, 10, 10), Color::GREEN);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(fb.pixel(x, y), rgba(Color::GREEN));
        }
    }

    // Entirely off-target rectangles draw nothing.
    let mut fb = Framebuffer::new(4, 4);
    fb.fill_rect(Rect::new(10, 10, 5, 5), Color::GREEN);
    fb.fill_rect(Rect::new(-9, -9, 5, 5), Color::GREEN);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(fb.pixel(x, y), [0, 0, 0, 0]);
        }
    }
}

#[test]
fn outline_rect_draws_only_the_border() {
    let mut fb = Framebuffer::new(8, 8);
    fb.outline_rect(Rect::new(1, 1, 5, 4), Color::BLUE);

    // Corners and edges.
    assert_eq!(fb.pixel(1, 1), rgba(Color::BLUE));
    assert_eq!(fb.pixel(5, 1), rgba(Color::BLUE));
    assert_eq!(fb.pixel(1, 4), rgba(Color::BLUE));
    assert_eq!(fb.pixel(5, 4), rgba(Color::BLUE));
    assert_eq!(fb.pixel(3, 1), rgba(Color::BLUE));
    assert_eq!(fb.pixel(1, 2), rgba(Color::BLUE));

    // Interior stays untouched.
    assert_eq!(fb.pixel(2, 2), [0, 0, 0, 0]);
    assert_eq!(fb.pixel(4, 3), [0, 0, 0, 0]);
    // Outside too.
    assert_eq!(fb.pixel(6, 1), [0, 0, 0, 0]);
    assert_eq!(fb.pixel(0, 0), [0, 0, 0, 0]);
}

#[test]
fn horizontal_line_spans_both_endpoints() {
    let mut fb = Framebuffer::new(8, 4);
    fb.draw_line(1, 2, 6, 2, Color::BLUE);
    for x in 1..=6 {
        assert_eq!(fb.pixel(x, 2), rgba(Color::BLUE));
    }
    assert_eq!(fb.pixel(0, 2), [0, 0, 0, 0]);
    assert_eq!(fb.pixel(7, 2), [0, 0, 0, 0]);
}

#[test]
fn diagonal_line_hits_its_endpoints() {
    let mut fb = Framebuffer::new(8, 8);
    fb.draw_line(0, 0, 7, 7, Color::YELLOW);
    assert_eq!(fb.pixel(0, 0), rgba(Color::YELLOW));
    assert_eq!(fb.pixel(7, 7), rgba(Color::YELLOW));
    assert_eq!(fb.pixel(3, 3), rgba(Color::YELLOW));
}

#[test]
fn line_with_swapped_endpoints_draws_the_same_pixels() {
    let mut a = Framebuffer::new(8, 8);
    let mut b = Framebuffer::new(8, 8);
    a.draw_line(1, 6, 6, 2, Color::RED);
    b.draw_line(6, 2, 1, 6, Color::RED);
    assert_eq!(a.pixels(), b.pixels());
}

#[test]
fn line_clips_outside_the_target() {
    let mut fb = Framebuffer::new(4, 4);
    fb.draw_line(-4, 1, 8, 1, Color::RED);
    for x in 0..4 {
        assert_eq!(fb.pixel(x, 1), rgba(Color::RED));
    }
}

#[test]
fn blit_copies_at_an_offset() {
    let image = PixelImage::solid(2, 2, Color::GREEN);
    let mut fb = Framebuffer::new(6, 6);
    fb.blit(&image, 3, 2);

    assert_eq!(fb.pixel(3, 2), rgba(Color::GREEN));
    assert_eq!(fb.pixel(4, 3), rgba(Color::GREEN));
    assert_eq!(fb.pixel(2, 2), [0, 0, 0, 0]);
    assert_eq!(fb.pixel(5, 4), [0, 0, 0, 0]);
}

#[test]
fn blit_clips_at_the_edges() {
    let image = PixelImage::solid(4, 4, Color::RED);
    let mut fb = Framebuffer::new(4, 4);
    fb.blit(&image, 2, -2);

    assert_eq!(fb.pixel(2, 0), rgba(Color::RED));
    assert_eq!(fb.pixel(3, 1), rgba(Color::RED));
    assert_eq!(fb.pixel(1, 0), [0, 0, 0, 0]);
    assert_eq!(fb.pixel(2, 2), [0, 0, 0, 0]);
}

#[test]
fn blit_preserves_source_pixels() {
    // 2x1 image: red then blue.
    let image = PixelImage::from_rgba8(
        2,
        1,
        vec![0xFF, 0x00, 0x00, 0xFF, 0x00, 0x00, 0xFF, 0xFF],
    )
    .unwrap();
    let mut fb = Framebuffer::new(4, 1);
    fb.blit(&image, 1, 0);

    assert_eq!(fb.pixel(1, 0), rgba(Color::RED));
    assert_eq!(fb.pixel(2, 0), rgba(Color::BLUE));
}

#[test]
fn scaled_blit_stretches_with_nearest_neighbor() {
    // 2x2 checkerboard blown up to 4x4: each source pixel becomes a 2x2 block.
    let image = PixelImage::from_rgba8(
        2,
        2,
        vec![
            0xFF, 0x00, 0x00, 0xFF, // red
            0x00, 0xFF, 0x00, 0xFF, // green
            0x00, 0x00, 0xFF, 0xFF, // blue
            0xFF, 0xFF, 0x00, 0xFF, // yellow
        ],
    )
    .unwrap();
    let mut fb = Framebuffer::new(4, 4);
    fb.blit_scaled(&image, Rect::new(0, 0, 4, 4));

    for (x, y, expected) in [
        (0, 0, Color::RED),
        (1, 1, Color::RED),
        (2, 0, Color::GREEN),
        (3, 1, Color::GREEN),
        (0, 2, Color::BLUE),
        (1, 3, Color::BLUE),
        (2, 2, Color::YELLOW),
        (3, 3, Color::YELLOW),
    ] {
        assert_eq!(fb.pixel(x, y), rgba(expected), "pixel ({x}, {y})");
    }
}

#[test]
fn scaled_blit_respects_a_destination_subrect() {
    let image = PixelImage::solid(2, 2, Color::RED);
    let mut fb = Framebuffer::new(8, 8);
    fb.blit_scaled(&image, Rect::new(2, 2, 4, 4));

    assert_eq!(fb.pixel(2, 2), rgba(Color::RED));
    assert_eq!(fb.pixel(5, 5), rgba(Color::RED));
    assert_eq!(fb.pixel(1, 1), [0, 0, 0, 0]);
    assert_eq!(fb.pixel(6, 6), [0, 0, 0, 0]);
}

#[test]
fn scaled_blit_downscales() {
    let image = PixelImage::solid(8, 8, Color::GREEN);
    let mut fb = Framebuffer::new(2, 2);
    fb.blit_scaled(&image, Rect::new(0, 0, 2, 2));
    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(fb.pixel(x, y), rgba(Color::GREEN));
        }
    }
}
