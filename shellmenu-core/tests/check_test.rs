mod common;

use common::view_with;
use shellmenu_core::menu::MenuItem;
use shellmenu_core::ContentConfig;

fn alignment_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new("align:radio:left", "Left").with_checkable(true),
        MenuItem::new("align:radio:right", "Right").with_checkable(false),
    ]
}

#[test]
fn test_check_moves_radio_selection() {
    let mut view = view_with(ContentConfig::popup(), alignment_items());

    view.check(1);
    assert!(!view.is_checked(0));
    assert!(view.is_checked(1));
    assert_eq!(
        view.host().activations(),
        vec![("align:radio:right".to_string(), true)]
    );
}

#[test]
fn test_activating_radio_item_checks_and_closes() {
    let mut view = view_with(ContentConfig::popup(), alignment_items());

    view.set_highlight(Some(1));
    assert!(view.activate_current());
    assert!(!view.is_checked(0));
    assert!(view.is_checked(1));
    assert_eq!(view.host().close_count(), 1);
}

#[test]
fn test_sole_checked_radio_cannot_be_unchecked() {
    let mut view = view_with(ContentConfig::popup(), alignment_items());

    view.set_highlight(Some(0));
    view.activate_current();
    assert!(view.is_checked(0));
    assert_eq!(
        view.host().activations(),
        vec![("align:radio:left".to_string(), true)]
    );

    view.uncheck(0);
    assert!(view.is_checked(0));
}

#[test]
fn test_radio_with_two_checked_can_uncheck() {
    let mut view = view_with(ContentConfig::popup(), alignment_items());
    view.host_mut().overrides.set_checked("align:radio:right", true);

    view.uncheck(0);
    assert!(!view.is_checked(0));
    assert!(view.is_checked(1));
    assert_eq!(
        view.host().activations(),
        vec![("align:radio:left".to_string(), false)]
    );
}

#[test]
fn test_check_leaves_exactly_one_radio_member_checked() {
    // every initial checked pattern of a four member group
    for pattern in 0u32..16 {
        for target in 0..4 {
            let items = (0..4)
                .map(|i| {
                    MenuItem::new(format!("zoom:radio:{}", i), format!("Zoom {}", i))
                        .with_checkable(pattern & (1 << i) != 0)
                })
                .chain(std::iter::once(
                    MenuItem::new("grid:check", "Grid").with_checkable(true),
                ))
                .collect();
            let mut view = view_with(ContentConfig::dock(), items);

            view.check(target);
            for other in 0..4 {
                assert_eq!(view.is_checked(other), other == target);
            }
            assert!(view.is_checked(4));
        }
    }
}

#[test]
fn test_malformed_and_plain_ids_toggle_independently() {
    let mut view = view_with(
        ContentConfig::popup(),
        vec![
            MenuItem::new("align:", "Broken").with_checkable(true),
            MenuItem::new("wrap", "Word Wrap").with_checkable(true),
        ],
    );

    view.uncheck(0);
    view.uncheck(1);
    assert!(!view.is_checked(0));
    assert!(!view.is_checked(1));
    assert_eq!(
        view.host().activations(),
        vec![("align:".to_string(), false), ("wrap".to_string(), false)]
    );
}

#[test]
fn test_checked_state_outlives_the_view() {
    let mut view = view_with(ContentConfig::popup(), alignment_items());
    view.check(1);
    let overrides = view.host().overrides.clone();

    let mut reopened = view_with(ContentConfig::popup(), alignment_items());
    reopened.host_mut().overrides = overrides;
    assert!(!reopened.is_checked(0));
    assert!(reopened.is_checked(1));
}
