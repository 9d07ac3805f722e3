//! Integration tests for the session controller over file storage.

use tempfile::TempDir;

use slideprompt::catalog::DefaultCatalog;
use slideprompt::models::ColorChannel;
use slideprompt::session::Session;
use slideprompt::storage::FileStorage;
use slideprompt::store::CustomizationStore;

fn open_session(dir: &TempDir) -> Session {
    let storage = FileStorage::open(dir.path().join("state")).expect("Failed to open storage");
    Session::new(CustomizationStore::new(
        DefaultCatalog::load().expect("Failed to load catalog"),
        Box::new(storage),
    ))
}

#[test]
fn test_customizations_survive_restart() {
    let dir = TempDir::new().unwrap();

    let mut session = open_session(&dir);
    session.set_color(ColorChannel::Background, "#123456").unwrap();
    let palette_id = session.add_palette("House Style").unwrap();
    let style_id = session
        .add_style("Moodboard", "Collage-like visual direction.")
        .unwrap();
    session.toggle_option("mood", "Luxury").unwrap();
    session.toggle_option("character-theme", "Elegant Premium").unwrap();
    drop(session);

    let session = open_session(&dir);
    assert_eq!(session.state().selected_palette_id, palette_id);
    assert_eq!(session.state().selected_style_id, style_id);
    assert_eq!(session.state().colors.background, "#123456");
    assert_eq!(session.state().selections["mood"], vec!["Luxury"]);
    assert_eq!(
        session.state().selections["character-theme"],
        vec!["Elegant Premium"]
    );
    assert_eq!(session.recent_colors()[0], "#123456");
}

#[test]
fn test_delete_selected_palette_resets_on_disk_too() {
    let dir = TempDir::new().unwrap();

    let mut session = open_session(&dir);
    let palette_id = session.add_palette("Short Lived").unwrap();
    session.delete_palette(&palette_id).unwrap();
    drop(session);

    let session = open_session(&dir);
    let first = &session.state().palettes[0];
    assert_eq!(session.state().selected_palette_id, first.id);
    assert_eq!(&session.state().colors, &first.colors);
    assert!(session.state().palettes.iter().all(|p| p.id != palette_id));
}

#[test]
fn test_custom_category_round_trip_with_selection() {
    let dir = TempDir::new().unwrap();

    let mut session = open_session(&dir);
    let category_id = session.add_category("Layout", true).unwrap();
    session.add_option(&category_id, "Split Screen").unwrap();
    session.add_option(&category_id, "Full Bleed").unwrap();
    session.toggle_option(&category_id, "Full Bleed").unwrap();
    drop(session);

    let mut session = open_session(&dir);
    assert_eq!(
        session.state().selections[&category_id],
        vec!["Full Bleed"]
    );

    // Removing the selected option also purges the persisted selection
    session.remove_option(&category_id, "Full Bleed").unwrap();
    drop(session);

    let session = open_session(&dir);
    assert!(session.state().selections[&category_id].is_empty());
}

#[test]
fn test_default_category_rename_applies_in_session() {
    let dir = TempDir::new().unwrap();

    let mut session = open_session(&dir);
    session.rename_category("mood", "Vibe").unwrap();
    session.toggle_option("mood", "Calm").unwrap();

    let prompt = session.prompt_preview("en").unwrap();
    assert!(prompt.contains("Vibe: Calm"));
}

#[test]
fn test_reset_returns_to_baseline_on_disk() {
    let dir = TempDir::new().unwrap();

    let mut session = open_session(&dir);
    session.add_palette("Gone Soon").unwrap();
    session.toggle_option("purpose", "Pitch").unwrap();
    session.reset_all();
    drop(session);

    let session = open_session(&dir);
    assert!(session.state().palettes.iter().all(|p| !p.is_custom));
    assert!(session.state().selections.values().all(Vec::is_empty));
    assert_eq!(session.state().selected_palette_id, "palette-default-1");
}

#[test]
fn test_prompt_preview_localized() {
    let dir = TempDir::new().unwrap();

    let mut session = open_session(&dir);
    session.toggle_option("mood", "Calm").unwrap();

    let prompt = session.prompt_preview("ja").unwrap();
    assert!(prompt.contains("出力言語: ja"));
    assert!(prompt.contains("パレット: Garnet Sunrise"));
    // Category names come from the working state, not the copy record
    assert!(prompt.contains("Mood: Calm"));
}
