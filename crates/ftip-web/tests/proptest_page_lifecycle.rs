#![forbid(unsafe_code)]

//! Property tests for tooltips driven by random host activity.
//!
//! # Invariants tested
//!
//! 1. The document holds exactly the listener set of the current mode.
//! 2. `is_shown` agrees with the phase and with the popup's visibility.
//! 3. A tooltip is in the showing registry exactly while displayed and not
//!    hiding.
//! 4. Teardown leaves no listeners, no timers, and a popup disposed once
//!    that receives no further calls; `on_destroy` fires once and last.

use std::cell::RefCell;
use std::rc::Rc;

use ftip_core::{DomEvent, EventName, KeyCode, KeyEvent, TriggerMode};
use ftip_web::Page;
use ftip_widgets::tooltip::{Phase, TooltipCallbacks, TooltipConfig};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Event(EventName),
    Escape,
    Show,
    Hide,
    Toggle,
    Update(bool),
    Mode(TriggerMode),
    Advance(u16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        proptest::sample::select(EventName::ALL.to_vec()).prop_map(Op::Event),
        Just(Op::Escape),
        Just(Op::Show),
        Just(Op::Hide),
        Just(Op::Toggle),
        any::<bool>().prop_map(Op::Update),
        proptest::sample::select(TriggerMode::ALL.to_vec()).prop_map(Op::Mode),
        (0u16..400).prop_map(Op::Advance),
    ]
}

fn config() -> impl Strategy<Value = TooltipConfig> {
    (
        proptest::sample::select(TriggerMode::ALL.to_vec()),
        prop_oneof![Just(0u64), 1u64..300],
        prop_oneof![Just(0u64), 1u64..800],
        any::<bool>(),
    )
        .prop_map(|(mode, delay, duration, delay_on_change)| {
            TooltipConfig::new("tip")
                .event(mode)
                .delay(delay)
                .duration(duration)
                .delay_on_change(delay_on_change)
        })
}

proptest! {
    #[test]
    fn random_activity_never_leaks(
        first in config(),
        second in config(),
        ops in proptest::collection::vec((any::<bool>(), op()), 1..60),
    ) {
        let log: Rc<RefCell<Vec<&'static str>>> = Rc::default();
        let mut page = Page::new();
        let doc = page.document_mut();
        let body = doc.create_element(None, None);
        let a_target = doc.create_element(None, Some(body));
        let b_target = doc.create_element(None, Some(body));
        let a_root = doc.create_element(None, Some(a_target));
        let b_root = doc.create_element(None, Some(b_target));

        let destroy_log = Rc::clone(&log);
        let show_log = Rc::clone(&log);
        let a = page
            .mount(
                a_root,
                first,
                TooltipCallbacks::new()
                    .on_show(move |_| show_log.borrow_mut().push("show"))
                    .on_destroy(move |_| destroy_log.borrow_mut().push("destroy")),
            )
            .expect("mount a");
        let b = page
            .mount(b_root, second, TooltipCallbacks::new())
            .expect("mount b");

        for (pick_a, op) in ops {
            let (id, target) = if pick_a { (a, a_target) } else { (b, b_target) };
            match op {
                Op::Event(name) => {
                    page.dispatch(target, DomEvent::new(name));
                }
                Op::Escape => {
                    page.dispatch(target, DomEvent::key_down(KeyEvent::new(KeyCode::Escape)));
                }
                Op::Show => page.show(id).expect("show"),
                Op::Hide => page.hide(id).expect("hide"),
                Op::Toggle => page.toggle(id).expect("toggle"),
                Op::Update(shown) => page.update(id, shown).expect("update"),
                Op::Mode(mode) => page.set_trigger_mode(id, mode).expect("mode"),
                Op::Advance(ms) => page.advance_ms(u64::from(ms)),
            }

            for (id, target) in [(a, a_target), (b, b_target)] {
                let tooltip = page.tooltip(id).expect("mounted");
                let wired: Vec<EventName> = tooltip
                    .config()
                    .event
                    .bindings()
                    .iter()
                    .map(|binding| binding.event)
                    .collect();
                prop_assert_eq!(tooltip.listeners().event_names(), wired.clone());
                prop_assert_eq!(page.document().listeners_owned_by(id), wired.len());
                prop_assert!(
                    page.document()
                        .registrations()
                        .iter()
                        .filter(|r| r.listener.owner == id)
                        .all(|r| r.target == target)
                );

                let phase = tooltip.phase();
                let shown = tooltip.visibility().is_shown;
                match phase {
                    Phase::Hidden => prop_assert!(!shown),
                    Phase::Showing | Phase::Shown | Phase::PendingHide | Phase::Hiding => {
                        prop_assert!(shown, "phase {:?}", phase);
                    }
                    // A re-show while displayed waits out the delay again.
                    Phase::PendingShow => {}
                }
                let popup = page.positioner().popup_for(id).expect("popup");
                prop_assert_eq!(popup.visible, shown);
                prop_assert_eq!(page.showing().contains(id), shown && phase != Phase::Hiding);
            }
        }

        page.unmount(a).expect("unmount a");
        page.unmount(b).expect("unmount b");
        page.advance_ms(10_000);

        prop_assert_eq!(page.document().listener_count(), 0);
        prop_assert_eq!(page.pending_timers(), 0);
        prop_assert!(page.showing().is_empty());
        prop_assert_eq!(page.positioner().created(), 2);
        for popup in page.positioner().popups() {
            prop_assert_eq!(popup.disposals, 1);
            prop_assert_eq!(popup.calls_after_dispose, 0);
        }
        let log = log.borrow();
        prop_assert_eq!(log.iter().filter(|e| **e == "destroy").count(), 1);
        prop_assert_eq!(log.last().copied(), Some("destroy"));
    }
}
