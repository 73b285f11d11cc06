use super::*;

#[test]
fn regions_start_unpainted() {
    let surface = HeadlessSurface::new(["091", "049"]);
    assert_eq!(surface.regions().len(), 2);
    assert!(surface.regions().iter().all(|r| r.style().fill.is_none()));
    assert_eq!(surface.fill_of("091"), None);
}

#[test]
fn set_fill_rewrites_slot_in_place() {
    let mut surface = HeadlessSurface::new(["091"]);
    let region = &mut surface.regions_mut()[0];
    region.set_fill(Rgb::new(1, 2, 3));
    region.set_fill(Rgb::new(4, 5, 6));
    assert_eq!(surface.fill_of("091"), Some(Rgb::new(4, 5, 6)));
}

#[test]
fn handler_registration_is_tracked_per_id() {
    let mut surface = HeadlessSurface::new(Vec::<String>::new());
    let a = surface.register_frame_handler();
    let b = surface.register_frame_handler();
    assert_ne!(a, b);
    assert_eq!(surface.frame_handler_count(), 2);

    surface.unregister_frame_handler(a);
    assert!(!surface.is_frame_handler_registered(a));
    assert!(surface.is_frame_handler_registered(b));

    surface.unregister_frame_handler(a);
    assert_eq!(surface.frame_handler_count(), 1);
}

#[test]
fn repaint_counters_are_separate() {
    let mut surface = HeadlessSurface::default();
    surface.force_repaint().unwrap();
    surface.request_repaint().unwrap();
    surface.request_repaint().unwrap();
    assert_eq!(surface.forced_repaint_count(), 1);
    assert_eq!(surface.repaint_count(), 2);
}
