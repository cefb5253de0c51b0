//! End-to-end page behavior against the shipped fixture: build, scroll the
//! whole document, and check what each section reports along the way.

use scrollkit::{Page, SiteContent, Viewport};

const DT: f64 = 1.0 / 60.0;

fn build_page() -> Page {
    let content = SiteContent::from_json_str(include_str!("data/site.json")).unwrap();
    Page::new(content, Viewport::new(1280.0, 800.0).unwrap()).unwrap()
}

#[test]
fn full_scroll_run_hits_every_section() {
    let mut page = build_page();
    assert!(page.document_height() > 0.0);

    let mut saw_hero_revealed = false;
    let mut grid_firings = 0;
    let mut max_rotation_y: f64 = 0.0;
    let mut saw_pin = false;

    for _ in 0..6000 {
        page.wheel(25.0);
        let frame = page.advance(DT);

        if frame.hero.as_ref().is_some_and(|h| !h.decoding) {
            saw_hero_revealed = true;
        }
        if let Some(showcase) = &frame.showcase {
            max_rotation_y = max_rotation_y.max(showcase.params.rotation_y);
            saw_pin |= showcase.pin_offset.is_some();
        }
        if frame.gallery.as_ref().is_some_and(|g| g.grid_cues.is_some()) {
            grid_firings += 1;
        }
        assert!(frame.footer.is_some());
        assert!(frame.schedule.is_none(), "disabled section leaked a frame");
    }

    assert!(saw_hero_revealed);
    assert!(saw_pin, "showcase never pinned during the run");
    assert!(
        max_rotation_y > std::f64::consts::PI,
        "cube barely rotated: {max_rotation_y}"
    );
    assert_eq!(grid_firings, 1, "grid entrance must fire exactly once");
}

#[test]
fn parallax_rows_diverge_with_scroll() {
    let mut page = build_page();

    let rest = page.advance(DT).gallery.unwrap().offsets;
    assert_eq!(rest.top_x, 0.0);
    assert!(rest.bottom_x < 0.0, "bottom row starts pre-offset");

    page.scroll_to_section("projects");
    let mut last = rest;
    for _ in 0..2000 {
        last = page.advance(DT).gallery.unwrap().offsets;
    }
    assert!(last.top_x < rest.top_x);
    assert!(last.bottom_x > rest.bottom_x);
}

#[test]
fn nav_scrolling_is_eased_not_instant() {
    let mut page = build_page();
    assert!(page.scroll_to_section("projects"));

    let first = page.advance(DT);
    assert!(first.scroll_y > 0.0);
    assert!(!first.settled);

    let mut y = first.scroll_y;
    for _ in 0..2000 {
        y = page.advance(DT).scroll_y;
    }
    assert!(page.is_settled());
    assert!(y > first.scroll_y);
}

#[test]
fn fast_scroll_blurs_the_showcase() {
    let mut page = build_page();

    let mut max_blur: f64 = 0.0;
    let mut max_spacing: f64 = 0.0;
    // Hammer the wheel so the viewport tears through the pinned showcase.
    for _ in 0..1200 {
        page.wheel(4000.0);
        let frame = page.advance(DT);
        if let Some(showcase) = &frame.showcase {
            max_blur = max_blur.max(showcase.params.blur_px);
            max_spacing = max_spacing.max(showcase.params.letter_spacing_px);
        }
    }

    assert!(max_blur > 0.5, "blur stayed invisible: {max_blur}");
    assert!(max_spacing > 2.0, "spacing stayed invisible: {max_spacing}");
    assert!(max_blur <= 8.0 + 1e-9);
    assert!(max_spacing <= 30.0 + 1e-9);
}

#[test]
fn asset_failure_degrades_to_no_first_paint() {
    let mut page = build_page();
    let textures: Vec<String> = page.content().showcase.cube_textures.clone();

    for url in &textures[..5] {
        page.mark_asset_ready(url);
    }
    page.mark_asset_failed(&textures[5]);

    // A failed texture leaves the cube blank forever, but nothing errors.
    let frame = page.advance(DT);
    assert!(!frame.showcase.unwrap().first_paint);
}

#[test]
fn frame_stream_serializes_as_json_lines() {
    let mut page = build_page();
    for _ in 0..5 {
        let frame = page.advance(DT);
        let line = serde_json::to_string(&frame).unwrap();
        assert!(line.starts_with('{'));
        assert!(line.contains("\"scroll_y\""));
    }
}
