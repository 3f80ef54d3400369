//! End-to-end runs of the polling pipeline over TOML snapshots.

use std::time::Instant;

use relics_core::enumerate::{RelicLockerItems, find_locker_container};
use relics_core::{
    Address, HighlightState, ItemEnumerator, PanelState, RecordingPainter, Rect, RelicHighlighter,
    RelicsSettings, StaticSnapshot, UPDATE_INTERVAL, detect,
};

const RELIC_LOCKER: &str = include_str!("fixtures/relic_locker.toml");
const STASH: &str = include_str!("fixtures/stash.toml");

fn run_once(ui: &StaticSnapshot) -> RelicHighlighter {
    let start = Instant::now();
    let mut highlighter = RelicHighlighter::starting_at(start, &RelicsSettings::default());
    assert!(highlighter.tick_at(ui, start + UPDATE_INTERVAL));
    highlighter
}

#[test]
fn test_relic_locker_fixture() {
    let ui = StaticSnapshot::from_toml_str(RELIC_LOCKER).unwrap();
    assert_eq!(detect(&ui), PanelState::RelicLockerOpen);
    assert_eq!(find_locker_container(&ui), Some(Address(0x1400)));

    let items = RelicLockerItems.enumerate(&ui);
    let addresses: Vec<u64> = items.iter().map(|item| item.address.0).collect();
    assert_eq!(addresses, vec![0x2001, 0x2004, 0x2007]);

    let highlighter = run_once(&ui);
    assert_eq!(highlighter.state(), HighlightState::Populated);
    let rects: Vec<Rect> = highlighter.frames().iter().map(|f| f.rect).collect();
    assert_eq!(
        rects,
        vec![
            Rect::new(83.0, 83.0, 52.0, 52.0),
            Rect::new(263.0, 83.0, 52.0, 52.0),
            Rect::new(443.0, 83.0, 52.0, 52.0),
        ]
    );

    let mut painter = RecordingPainter::new();
    assert_eq!(highlighter.render(&ui, &mut painter), 3);
}

#[test]
fn test_stash_fixture() {
    let ui = StaticSnapshot::from_toml_str(STASH).unwrap();
    assert_eq!(detect(&ui), PanelState::StashOpen);

    let highlighter = run_once(&ui);
    let rects: Vec<Rect> = highlighter.frames().iter().map(|f| f.rect).collect();
    assert_eq!(
        rects,
        vec![
            Rect::new(103.0, 103.0, 46.0, 46.0),
            Rect::new(259.0, 103.0, 46.0, 46.0),
        ]
    );
}

#[test]
fn test_fixtures_load_from_disk() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let ui = StaticSnapshot::load(&dir.join("relic_locker.toml")).unwrap();
    assert_eq!(detect(&ui), PanelState::RelicLockerOpen);
    assert!(StaticSnapshot::load(&dir.join("missing.toml")).is_err());
}
