use super::*;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

fn zip_with_dir() -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    zip.add_directory("a/", options).unwrap();
    zip.start_file("a/b.lua", options).unwrap();
    zip.write_all(b"hi").unwrap();
    zip.finish().unwrap().into_inner()
}

fn tree(entries: &[(&str, &str)]) -> FileTree {
    entries.iter().copied().collect()
}

fn state_with_template() -> ProjectsState {
    let mut state = ProjectsState::default();
    state.instantiate_template("WTZ Base").unwrap();
    state
}

#[test]
fn starts_empty() {
    let state = ProjectsState::default();
    assert_eq!(state.phase(), ProjectPhase::Empty);
    assert_eq!(state.current_project(), None);
    assert!(state.working_copy().is_empty());
    assert!(!state.has_unsaved_changes());
}

#[test]
fn template_scenario_round_trips_through_commit() {
    let mut state = ProjectsState::default();

    let handle = state.instantiate_template("WTZ Base").unwrap();
    assert_eq!(handle.name, "WTZ Base (template)");
    assert_eq!(state.working_copy().len(), 5);
    assert!(state.working_copy().iter().all(|(_, c)| c.is_empty()));

    assert_eq!(state.open("config.lua").unwrap(), "");
    assert!(state.edit("config.lua", "x=1"));
    assert!(state.commit());

    state.select_project("WTZ Base (template)").unwrap();
    assert_eq!(state.working_copy().get("config.lua"), Some("x=1"));
}

#[test]
fn unknown_template_fails() {
    let mut state = ProjectsState::default();
    let err = state.instantiate_template("Nope").unwrap_err();
    assert!(matches!(err, ProjectError::UnknownTemplate(id) if id == "Nope"));
    assert_eq!(state.phase(), ProjectPhase::Empty);
}

#[test]
fn reinstantiating_template_overwrites_without_duplicating_name() {
    let mut state = state_with_template();
    state.open("config.lua").unwrap();
    state.edit("config.lua", "x=1");
    state.commit();

    state.instantiate_template("WTZ Base").unwrap();

    assert_eq!(state.project_names().count(), 1);
    assert_eq!(
        state.snapshot("WTZ Base (template)").unwrap().get("config.lua"),
        Some("")
    );
}

#[test]
fn import_skips_directory_entries() {
    let mut state = ProjectsState::default();

    let handle = state.import_archive("resource.zip", &zip_with_dir()).unwrap();

    assert_eq!(handle.name, "resource");
    assert_eq!(state.working_copy(), &tree(&[("a/b.lua", "hi")]));
    assert_eq!(state.snapshot("resource"), Some(&tree(&[("a/b.lua", "hi")])));
    assert_eq!(state.phase(), ProjectPhase::Viewing);
}

#[test]
fn import_failure_leaves_state_untouched() {
    let mut state = state_with_template();
    state.open("config.lua").unwrap();
    state.edit("config.lua", "draft");
    let generation = state.generation();

    let err = state.import_archive("broken.zip", b"not a zip").unwrap_err();

    assert!(matches!(err, ProjectError::Decode(_)));
    assert_eq!(state.current_project(), Some("WTZ Base (template)"));
    assert_eq!(state.generation(), generation);
    assert_eq!(state.open_file().unwrap().content, "draft");
    assert!(!state.contains_project("broken"));
}

#[test]
fn import_over_existing_name_replaces_snapshot() {
    let mut state = ProjectsState::default();
    state.import_archive("res.zip", &zip_with_dir()).unwrap();

    let replacement = archive::encode(&tree(&[("other.lua", "1")])).unwrap();
    state.import_archive("res.ZIP", &replacement).unwrap();

    assert_eq!(state.project_names().collect::<Vec<_>>(), vec!["res"]);
    assert_eq!(state.snapshot("res"), Some(&tree(&[("other.lua", "1")])));
}

#[test]
fn select_unknown_project_fails() {
    let mut state = state_with_template();
    let err = state.select_project("ghost").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(state.current_project(), Some("WTZ Base (template)"));
}

#[test]
fn switching_projects_discards_uncommitted_edits() {
    let mut state = state_with_template();
    state.instantiate_template("Drug System Template").unwrap();

    state.select_project("WTZ Base (template)").unwrap();
    state.open("config.lua").unwrap();
    state.edit("config.lua", "lost");
    assert!(state.has_unsaved_changes());

    state.select_project("Drug System Template (template)").unwrap();
    state.select_project("WTZ Base (template)").unwrap();

    assert_eq!(state.working_copy().get("config.lua"), Some(""));
    assert!(!state.has_unsaved_changes());
}

#[test]
fn select_clears_open_file_and_bumps_generation() {
    let mut state = state_with_template();
    state.open("config.lua").unwrap();
    assert_eq!(state.phase(), ProjectPhase::Editing);
    let generation = state.generation();

    let handle = state.select_project("WTZ Base (template)").unwrap();

    assert_eq!(state.phase(), ProjectPhase::Viewing);
    assert!(state.open_file().is_none());
    assert_eq!(handle.generation, generation + 1);
}

#[test]
fn open_missing_file_keeps_selection() {
    let mut state = state_with_template();
    state.open("config.lua").unwrap();

    let err = state.open("missing.lua").unwrap_err();

    assert!(matches!(err, ProjectError::FileNotFound(p) if p == "missing.lua"));
    assert_eq!(state.open_file().unwrap().path, "config.lua");
}

#[test]
fn edit_requires_matching_open_file() {
    let mut state = state_with_template();
    assert!(!state.edit("config.lua", "x"));

    state.open("fxmanifest.lua").unwrap();
    assert!(!state.edit("config.lua", "x"));
    assert_eq!(state.working_copy().get("config.lua"), Some(""));
}

#[test]
fn edit_does_not_touch_registry() {
    let mut state = state_with_template();
    state.open("config.lua").unwrap();
    state.edit("config.lua", "x=1");

    assert_eq!(
        state.snapshot("WTZ Base (template)").unwrap().get("config.lua"),
        Some("")
    );
}

#[test]
fn commit_without_project_is_noop() {
    let mut state = ProjectsState::default();
    assert!(!state.commit());
    assert_eq!(state.project_names().count(), 0);
}

#[test]
fn commit_writes_whole_working_copy() {
    let mut state = state_with_template();
    state.open("config.lua").unwrap();
    state.edit("config.lua", "a");
    state.open("fxmanifest.lua").unwrap();
    state.edit("fxmanifest.lua", "b");

    state.commit();

    let snapshot = state.snapshot("WTZ Base (template)").unwrap();
    assert_eq!(snapshot.get("config.lua"), Some("a"));
    assert_eq!(snapshot.get("fxmanifest.lua"), Some("b"));
    assert!(!state.has_unsaved_changes());
}

#[test]
fn export_without_project_produces_nothing() {
    let state = ProjectsState::default();
    assert_eq!(state.export_archive().unwrap(), None);
}

#[test]
fn export_includes_uncommitted_edits() {
    let mut state = state_with_template();
    state.open("config.lua").unwrap();
    state.edit("config.lua", "unsaved");

    let exported = state.export_archive().unwrap().unwrap();

    assert_eq!(exported.file_name, "WTZ Base (template).zip");
    let decoded = archive::decode(&exported.bytes).unwrap();
    assert_eq!(decoded.get("config.lua"), Some("unsaved"));
    assert_eq!(decoded.len(), 5);
}

#[test]
fn merge_new_files_win_over_updates() {
    let mut state = state_with_template();
    let result = AssistantResponse {
        updates: Some(tree(&[("a.lua", "X")])),
        new_files: Some(tree(&[("a.lua", "Y")])),
        ..Default::default()
    };

    let outcome = state.merge_assistant_result(&result);

    assert_eq!(state.working_copy().get("a.lua"), Some("Y"));
    assert_eq!(outcome.files_written, 1);
}

#[test]
fn merge_counts_each_distinct_path() {
    let mut state = state_with_template();
    let result = AssistantResponse {
        updates: Some(tree(&[("config.lua", "Config = {}"), ("server/main.lua", "--")])),
        new_files: Some(tree(&[("config.lua", "Config = { x = 1 }"), ("server/garage.lua", "")])),
        ..Default::default()
    };

    let outcome = state.merge_assistant_result(&result);

    assert_eq!(outcome.files_written, 3);
    assert_eq!(state.working_copy().get("config.lua"), Some("Config = { x = 1 }"));
}

#[test]
fn merge_refreshes_open_file_and_does_not_commit() {
    let mut state = state_with_template();
    state.open("config.lua").unwrap();
    let result = AssistantResponse {
        updates: Some(tree(&[("config.lua", "Config = {}")])),
        ..Default::default()
    };

    let outcome = state.merge_assistant_result(&result);

    assert!(outcome.open_file_changed);
    assert_eq!(state.open_file().unwrap().content, "Config = {}");
    assert!(state.has_unsaved_changes());
    assert_eq!(
        state.snapshot("WTZ Base (template)").unwrap().get("config.lua"),
        Some("")
    );
}

#[test]
fn merge_leaves_untouched_open_file_alone() {
    let mut state = state_with_template();
    state.open("config.lua").unwrap();
    state.edit("config.lua", "mine");
    let result = AssistantResponse {
        new_files: Some(tree(&[("server/extra.lua", "--")])),
        ..Default::default()
    };

    let outcome = state.merge_assistant_result(&result);

    assert!(!outcome.open_file_changed);
    assert_eq!(state.open_file().unwrap().content, "mine");
    assert_eq!(state.working_copy().len(), 6);
}

#[test]
fn project_names_keep_first_registration_order() {
    let mut state = ProjectsState::default();
    state.instantiate_template("Drug System Template").unwrap();
    state.import_archive("b.zip", &zip_with_dir()).unwrap();
    state.instantiate_template("Drug System Template").unwrap();

    assert_eq!(
        state.project_names().collect::<Vec<_>>(),
        vec!["Drug System Template (template)", "b"]
    );
}
