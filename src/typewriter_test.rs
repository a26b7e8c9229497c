use super::*;

const TIMING: Timing = Timing { type_ms: 100, delete_ms: 50, full_pause_ms: 2_000, empty_pause_ms: 500 };

fn writer(phrases: &[&str]) -> TypeWriter {
    TypeWriter::new(phrases.iter().map(|p| (*p).to_owned()).collect(), TIMING).unwrap()
}

fn tick(text: &str, delay_ms: u32, phase: Phase) -> Tick {
    Tick { text: text.to_owned(), delay_ms, phase }
}

#[test]
fn full_cycle_over_one_phrase() {
    let mut tw = writer(&["ab", "xyz"]);
    assert_eq!(tw.tick(), tick("a", 100, Phase::Typing));
    assert_eq!(tw.tick(), tick("ab", 2_000, Phase::PausingAtFull));
    assert_eq!(tw.tick(), tick("a", 50, Phase::Deleting));
    assert_eq!(tw.tick(), tick("", 500, Phase::PausingAtEmpty));
    assert_eq!(tw.current_phrase(), 1);
    assert_eq!(tw.tick(), tick("x", 100, Phase::Typing));
}

#[test]
fn wraps_back_to_first_phrase() {
    let mut tw = writer(&["a", "b"]);
    // "a": type, delete. "b": type, delete.
    for _ in 0..4 {
        tw.tick();
    }
    assert_eq!(tw.current_phrase(), 0);
    assert_eq!(tw.tick().text, "a");
}

#[test]
fn deleting_is_faster_than_typing() {
    let mut tw = writer(&["hello"]);
    let typing = tw.tick().delay_ms;
    while tw.tick().phase != Phase::PausingAtFull {}
    let deleting = tw.tick().delay_ms;
    assert!(deleting < typing);
}

#[test]
fn multibyte_phrases_type_whole_characters() {
    let mut tw = writer(&["héé"]);
    assert_eq!(tw.tick().text, "h");
    assert_eq!(tw.tick().text, "hé");
    assert_eq!(tw.tick(), tick("héé", 2_000, Phase::PausingAtFull));
}

#[test]
fn empty_phrases_are_skipped() {
    let mut tw = writer(&["", "ok", ""]);
    assert_eq!(tw.tick().text, "o");
}

#[test]
fn no_typeable_phrase_yields_none() {
    assert!(TypeWriter::new(Vec::new(), TIMING).is_none());
    assert!(TypeWriter::new(vec![String::new()], TIMING).is_none());
}

#[test]
fn from_config_uses_default_phrases_and_timing() {
    let mut tw = TypeWriter::from_config(&TypeWriterConfig::default()).unwrap();
    assert_eq!(tw.tick(), tick("F", 100, Phase::Typing));
}
