//! CardsState tests: per-card identity and render-generation staleness.

use courseshelf::app::CardsState;
use std::path::PathBuf;

#[test]
fn records_sharing_a_name_keep_distinct_card_identities() {
    let mut cards = CardsState::default();
    // Two records both named "a.pdf" still get their own cards.
    let first = cards.push_id();
    let second = cards.push_id();
    assert_ne!(first, second);
    assert_eq!(cards.ids(), &[first, second]);

    cards
        .thumbnails
        .insert(first, PathBuf::from("a.pdf-1-1.png"));
    cards
        .thumbnails
        .insert(second, PathBuf::from("a.pdf-2-2.png"));
    assert_ne!(cards.thumbnails[&first], cards.thumbnails[&second]);
}

#[test]
fn rerender_invalidates_the_earlier_generation() {
    let mut cards = CardsState::default();
    let card = cards.push_id();
    let first = cards.bump_generation(card);
    let second = cards.bump_generation(card);
    assert_ne!(first, second);

    // The install gate: only the latest stamp may land its result.
    assert_ne!(cards.generations.get(&card), Some(&first));
    assert_eq!(cards.generations.get(&card), Some(&second));
}

#[test]
fn forget_invalidates_inflight_renders() {
    let mut cards = CardsState::default();
    let card = cards.push_id();
    let generation = cards.bump_generation(card);
    cards.thumbnails.insert(card, PathBuf::from("doc-1-1.png"));

    let removed = cards.forget(card);
    assert_eq!(removed, Some(PathBuf::from("doc-1-1.png")));
    assert!(cards.ids().is_empty());
    // An in-flight render for the removed card no longer matches.
    assert_ne!(cards.generations.get(&card), Some(&generation));
}

#[test]
fn forget_leaves_other_cards_untouched() {
    let mut cards = CardsState::default();
    let first = cards.push_id();
    let second = cards.push_id();
    let second_generation = cards.bump_generation(second);
    cards.thumbnails.insert(second, PathBuf::from("two.png"));

    cards.forget(first);
    assert_eq!(cards.ids(), &[second]);
    assert_eq!(cards.generations.get(&second), Some(&second_generation));
    assert_eq!(cards.thumbnails.get(&second), Some(&PathBuf::from("two.png")));
}

#[test]
fn forget_all_returns_every_thumbnail_for_cleanup() {
    let mut cards = CardsState::default();
    let first = cards.push_id();
    let second = cards.push_id();
    cards.bump_generation(first);
    cards.thumbnails.insert(first, PathBuf::from("one.png"));
    cards.thumbnails.insert(second, PathBuf::from("two.png"));

    let mut paths = cards.forget_all();
    paths.sort();
    assert_eq!(
        paths,
        vec![PathBuf::from("one.png"), PathBuf::from("two.png")]
    );
    assert!(cards.ids().is_empty());
    assert!(cards.generations.is_empty());
}
