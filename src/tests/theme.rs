use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::tests::common::mocks::ManualScheduler;
use crate::utils::animation::Rgb;
use crate::utils::scheduler::SchedulerHandle;
use crate::utils::{ use_theme_provider, LogoVariant, ThemeState, ThemeStore };
use crate::views::{ Projects, Study };
use crate::utils::theme_state::{ DARK_BACKGROUND, DARK_BACKGROUND_SCROLLED, LIGHT_BACKGROUND, LIGHT_TEXT };

#[test]
fn test_default_theme_is_light() {
    assert!(!ThemeState::default().is_dark);
}

#[test]
fn test_toggle_parity() {
    for initial in [false, true] {
        let mut state = ThemeState { is_dark: initial };
        for n in 1..=9 {
            state.toggle();
            assert_eq!(state.is_dark, initial ^ (n % 2 == 1), "after {} toggles", n);
        }
    }
}

#[test]
fn test_navbar_colors_follow_theme_and_scroll() {
    let light = ThemeState { is_dark: false };
    let dark = ThemeState { is_dark: true };

    assert_eq!(light.navbar(false).background, LIGHT_BACKGROUND);
    assert_eq!(light.navbar(true).background, LIGHT_BACKGROUND);
    assert_eq!(dark.navbar(false).background, DARK_BACKGROUND);
    assert_eq!(dark.navbar(true).background, DARK_BACKGROUND_SCROLLED);

    assert_eq!(light.navbar(false).text, LIGHT_TEXT);
    assert_eq!(dark.navbar(true).logo, LogoVariant::OnDark);
    assert_eq!(light.navbar(true).logo, LogoVariant::OnLight);
}

#[test]
fn test_appearance_tracks_every_toggle() {
    let mut state = ThemeState::default();
    for _ in 0..4 {
        let before = state.navbar(false);
        state.toggle();
        let after = state.navbar(false);
        assert_ne!(before.background, after.background);
        assert_ne!(before.text, after.text);
        assert_ne!(before.logo, after.logo);
        assert_eq!(after, state.navbar(false));
    }
}

#[test]
fn test_hero_background_uses_theme_base() {
    let accent = Rgb::new(0x13, 0xFF, 0xAA);
    let dark = ThemeState { is_dark: true }.hero_background(accent);
    let light = ThemeState { is_dark: false }.hero_background(accent);

    assert!(dark.contains("#020617 50%, #13FFAA"));
    assert!(light.contains("#ffffff 50%, #13FFAA"));
}

#[derive(Clone)]
struct ReadersProps {
    store: Rc<Cell<Option<ThemeStore>>>,
}

fn two_readers(props: ReadersProps) -> Element {
    let store = use_theme_provider(ThemeState::default());
    use_context_provider(|| SchedulerHandle(Rc::new(ManualScheduler::default())));
    props.store.set(Some(store));

    rsx! {
        Projects {}
        Study {}
    }
}

#[test]
fn test_toggle_rerenders_every_reader() {
    let slot = Rc::new(Cell::new(None));
    let mut dom = VirtualDom::new_with_props(two_readers, ReadersProps { store: slot.clone() });

    let first = format!("{:?}", dom.rebuild_to_vec().edits);
    assert!(first.contains("text-[#06071f]"), "{}", first);

    let store = slot.get().expect("store provided on first render");
    dom.in_runtime(|| store.toggle());
    let after = format!("{:?}", dom.render_immediate_to_vec().edits);

    assert!(dom.in_runtime(|| store.state()).is_dark);
    // Study's section and the Projects grid both pick up the dark text class.
    assert!(after.matches("text-white").count() >= 2, "{}", after);

    dom.in_runtime(|| store.toggle());
    let back = format!("{:?}", dom.render_immediate_to_vec().edits);
    assert!(!dom.in_runtime(|| store.state()).is_dark);
    assert!(back.contains("text-[#06071f]"), "{}", back);
}
