//! End-to-end overlay scenarios against the in-memory host: the drawer
//! keyboard walk, modal-over-drawer layering, and the escape hatch.

use scrim::{KeyCode, KeyEvent, OverlayKind, OverlayManager};
use scrim_core::{Host, MemoryHost, NodeId};

struct Page {
    host: MemoryHost,
    burger: NodeId,
    drawer_panel: NodeId,
    drawer_close: NodeId,
    drawer_links: Vec<NodeId>,
    modal_card: NodeId,
    modal_close: NodeId,
    lang_menu: NodeId,
}

fn page() -> Page {
    let mut host = MemoryHost::new();
    let body = host.container(None);
    let burger = host.focusable(body);
    let lang_menu = host.container(Some(body));

    let drawer_panel = host.container(Some(body));
    let drawer_close = host.focusable(drawer_panel);
    let drawer_links = (0..2).map(|_| host.focusable(drawer_panel)).collect();

    let modal_card = host.container(Some(body));
    let modal_close = host.focusable(modal_card);
    let _modal_link = host.focusable(modal_card);

    host.set_focus(burger);
    Page {
        host,
        burger,
        drawer_panel,
        drawer_close,
        drawer_links,
        modal_card,
        modal_close,
        lang_menu,
    }
}

#[test]
fn drawer_keyboard_walk() {
    // Drawer opens with three focusables (close button + two links), focus
    // lands on the close button, Shift+Tab wraps to the last link, Escape
    // closes and hands focus back to the burger.
    let mut page = page();
    let mut overlays = OverlayManager::new();

    overlays.open(
        &mut page.host,
        OverlayKind::Drawer,
        page.drawer_panel,
        Some(page.drawer_close),
    );
    assert!(page.host.scroll_locked());
    assert_eq!(page.host.active_focus(), Some(page.drawer_close));

    let consumed = overlays.handle_key(&mut page.host, &KeyEvent::shift_press(KeyCode::Tab));
    assert!(consumed);
    assert_eq!(page.host.active_focus(), Some(page.drawer_links[1]));

    let consumed = overlays.handle_key(&mut page.host, &KeyEvent::press(KeyCode::Escape));
    assert!(consumed);
    assert!(!overlays.any_open());
    assert!(!page.host.scroll_locked());
    assert_eq!(page.host.active_focus(), Some(page.burger));
}

#[test]
fn modal_over_drawer_reference_counted_lock() {
    let mut page = page();
    let mut overlays = OverlayManager::new();

    overlays.open(&mut page.host, OverlayKind::Drawer, page.drawer_panel, None);
    overlays.open(
        &mut page.host,
        OverlayKind::Modal,
        page.modal_card,
        Some(page.modal_close),
    );
    assert_eq!(overlays.depth(), 2);
    assert_eq!(overlays.trap_root(), Some(page.modal_card));

    overlays.close(&mut page.host, OverlayKind::Modal);

    // The drawer keeps the page locked and its trap becomes active again.
    assert!(page.host.scroll_locked());
    assert_eq!(overlays.trap_root(), Some(page.drawer_panel));
    assert_eq!(page.host.active_focus(), Some(page.drawer_close));

    overlays.close(&mut page.host, OverlayKind::Drawer);
    assert!(!page.host.scroll_locked());
    assert_eq!(page.host.active_focus(), Some(page.burger));
}

#[test]
fn tab_inside_modal_only_cycles_modal_content() {
    let mut page = page();
    let mut overlays = OverlayManager::new();

    overlays.open(&mut page.host, OverlayKind::Drawer, page.drawer_panel, None);
    overlays.open(&mut page.host, OverlayKind::Modal, page.modal_card, None);

    // Shift+Tab on the modal's first focusable wraps within the modal, not
    // into the drawer below it.
    assert_eq!(page.host.active_focus(), Some(page.modal_close));
    let consumed = overlays.handle_key(&mut page.host, &KeyEvent::shift_press(KeyCode::Tab));
    assert!(consumed);
    let landed = page.host.active_focus().unwrap();
    assert!(page
        .host
        .focusable_descendants(page.modal_card)
        .contains(&landed));
}

#[test]
fn escape_clears_popover_then_overlays() {
    let mut page = page();
    let mut overlays = OverlayManager::new();

    overlays.popovers_mut().toggle(page.lang_menu);
    overlays.open(&mut page.host, OverlayKind::Drawer, page.drawer_panel, None);
    overlays.open(&mut page.host, OverlayKind::Modal, page.modal_card, None);

    // First press: popover gone, modal gone, drawer survives.
    assert!(overlays.handle_escape(&mut page.host));
    assert_eq!(overlays.popovers().open(), None);
    assert!(overlays.is_open(OverlayKind::Drawer));
    assert!(page.host.scroll_locked());

    // Second press: drawer gone, lock released, focus back on the burger.
    assert!(overlays.handle_escape(&mut page.host));
    assert!(!overlays.any_open());
    assert!(!page.host.scroll_locked());
    assert_eq!(page.host.active_focus(), Some(page.burger));

    // Third press: nothing left to dismiss.
    assert!(!overlays.handle_escape(&mut page.host));
}

#[test]
fn trigger_removed_while_drawer_open() {
    // The element that opened the drawer disappears (e.g. responsive layout
    // swap). Closing must release the lock and skip restoration silently.
    let mut page = page();
    let mut overlays = OverlayManager::new();

    overlays.open(&mut page.host, OverlayKind::Drawer, page.drawer_panel, None);
    page.host.detach(page.burger);

    overlays.close(&mut page.host, OverlayKind::Drawer);
    assert!(!page.host.scroll_locked());
    // Focus stayed wherever the host left it; nothing was stolen.
    assert_ne!(page.host.active_focus(), Some(page.burger));
}
