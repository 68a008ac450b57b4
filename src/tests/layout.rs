use crate::components::star_positions;
use crate::utils::section::{ AUTO_SECTION_PADDING, DEFAULT_NAVBAR_HEIGHT, TITLE_GAP };
use crate::utils::LayoutVariant;
use crate::views::banner_class;

#[test]
fn test_full_sections_fill_the_viewport() {
    let class = LayoutVariant::Full.class();
    assert!(class.contains("h-screen"));
    assert!(class.contains("overflow-hidden"));
    assert!(class.contains("justify-center"));
}

#[test]
fn test_auto_sections_keep_natural_height() {
    let class = LayoutVariant::Auto.class();
    assert!(!class.split_whitespace().any(|token| token.contains("screen")));
    assert!(!LayoutVariant::Auto.style(DEFAULT_NAVBAR_HEIGHT).contains("vh"));
    assert!(class.contains("overflow-visible"));
}

#[test]
fn test_reserved_offset_follows_navbar_height() {
    for height in [DEFAULT_NAVBAR_HEIGHT, 64.0, 80.0, 112.5] {
        let full = LayoutVariant::Full.style(height);
        assert!(full.contains(&format!("padding-top: {}px", height + TITLE_GAP)), "{}", full);

        let auto = LayoutVariant::Auto.style(height);
        assert!(auto.contains(&format!("padding-top: {}px", height + AUTO_SECTION_PADDING)), "{}", auto);
        assert!(auto.contains(&format!("padding-bottom: {}px", AUTO_SECTION_PADDING)));
    }
}

#[test]
fn test_negative_height_is_clamped() {
    assert!(LayoutVariant::Full.style(-10.0).contains(&format!("padding-top: {}px", TITLE_GAP)));
}

#[test]
fn test_starfield_is_deterministic_and_in_bounds() {
    let first = star_positions(64);
    assert_eq!(first, star_positions(64));
    assert_eq!(first.len(), 64);

    for star in first {
        assert!((0.0..100.0).contains(&star.left));
        assert!((0.0..100.0).contains(&star.top));
        assert!((1.0..2.5).contains(&star.size));
    }
}

#[test]
fn test_banner_class_by_outcome() {
    assert!(banner_class(Some(true), false).contains("green"));
    assert!(banner_class(Some(true), true).contains("green"));
    assert!(banner_class(Some(false), false).contains("red"));
    assert!(banner_class(None, true).contains("red"));
}
