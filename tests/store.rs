use meatycapture::error::Error;
use meatycapture::store::{
    ConfigStore, FieldStore, LocalConfigStore, LocalFieldStore, LocalProjectStore, ProjectStore,
};
use meatycapture::types::{ConfigKey, NewFieldOption, NewProject, ProjectPatch, Scope};
use tempfile::TempDir;

fn new_project(id: &str) -> NewProject {
    NewProject {
        id: id.to_string(),
        name: format!("Project {id}"),
        default_path: format!("/tmp/{id}"),
        repo_url: None,
        enabled: None,
    }
}

#[test]
fn create_then_get_has_defaults() {
    let dir = TempDir::new().unwrap();
    let store = LocalProjectStore::new(dir.path());

    store
        .create(NewProject {
            id: "docs".to_string(),
            name: "Docs".to_string(),
            default_path: "/tmp/docs".to_string(),
            repo_url: None,
            enabled: None,
        })
        .unwrap();

    let project = store.get("docs").unwrap().expect("project exists");
    assert!(project.enabled);
    assert_eq!(project.created_at, project.updated_at);
    assert_eq!(project.name, "Docs");
}

#[test]
fn get_missing_is_none_not_error() {
    let dir = TempDir::new().unwrap();
    let store = LocalProjectStore::new(dir.path());
    assert!(store.get("nope").unwrap().is_none());
}

#[test]
fn duplicate_create_conflicts_without_mutation() {
    let dir = TempDir::new().unwrap();
    let store = LocalProjectStore::new(dir.path());

    store.create(new_project("docs")).unwrap();

    let mut dup = new_project("docs");
    dup.name = "Other Name".to_string();
    match store.create(dup) {
        Err(Error::Conflict(_)) => {}
        other => panic!("expected Conflict, got {other:?}"),
    }

    let existing = store.get("docs").unwrap().unwrap();
    assert_eq!(existing.name, "Project docs");
}

#[test]
fn create_rejects_bad_slug() {
    let dir = TempDir::new().unwrap();
    let store = LocalProjectStore::new(dir.path());
    assert!(matches!(
        store.create(new_project("Not A Slug")),
        Err(Error::Validation(_))
    ));
}

#[test]
fn update_merges_patch_and_bumps_updated_at() {
    let dir = TempDir::new().unwrap();
    let store = LocalProjectStore::new(dir.path());

    let created = store.create(new_project("docs")).unwrap();

    let updated = store
        .update(
            "docs",
            ProjectPatch {
                name: Some("Renamed".to_string()),
                ..ProjectPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.default_path, created.default_path);
    assert!(updated.enabled);
    assert!(updated.updated_at >= created.updated_at);

    let read_back = store.get("docs").unwrap().unwrap();
    assert_eq!(read_back, updated);
}

#[test]
fn enable_twice_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = LocalProjectStore::new(dir.path());
    store.create(new_project("docs")).unwrap();

    let patch = ProjectPatch {
        enabled: Some(true),
        ..ProjectPatch::default()
    };
    let first = store.update("docs", patch.clone()).unwrap();
    let second = store.update("docs", patch).unwrap();

    assert!(first.enabled);
    assert!(second.enabled);
    assert!(second.updated_at >= first.updated_at);
}

#[test]
fn update_missing_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = LocalProjectStore::new(dir.path());
    assert!(matches!(
        store.update("ghost", ProjectPatch::default()),
        Err(Error::NotFound)
    ));
}

#[test]
fn remove_deletes_and_missing_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = LocalProjectStore::new(dir.path());
    store.create(new_project("docs")).unwrap();

    store.remove("docs").unwrap();
    assert!(store.get("docs").unwrap().is_none());
    assert!(matches!(store.remove("docs"), Err(Error::NotFound)));
}

#[test]
fn list_preserves_insertion_order() {
    let dir = TempDir::new().unwrap();
    let store = LocalProjectStore::new(dir.path());

    for id in ["zulu", "alpha", "mike"] {
        store.create(new_project(id)).unwrap();
    }

    let ids: Vec<String> = store.list().unwrap().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, ["zulu", "alpha", "mike"]);
}

#[test]
fn config_get_without_file_returns_defaults_without_writing() {
    let dir = TempDir::new().unwrap();
    let store = LocalConfigStore::new(dir.path());

    let doc = store.get().unwrap();
    assert!(doc.default_project.is_none());
    assert!(doc.api_url.is_none());
    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn config_set_persists_and_empty_value_clears() {
    let dir = TempDir::new().unwrap();
    let store = LocalConfigStore::new(dir.path());

    let doc = store
        .set(ConfigKey::ApiUrl, "https://capture.example.com")
        .unwrap();
    assert_eq!(doc.api_url.as_deref(), Some("https://capture.example.com"));
    assert!(dir.path().join("config.json").exists());

    let cleared = store.set(ConfigKey::ApiUrl, "").unwrap();
    assert!(cleared.api_url.is_none());
    assert!(cleared.updated_at >= doc.updated_at);

    let read_back = store.get().unwrap();
    assert!(read_back.api_url.is_none());
}

#[test]
fn config_rejects_relative_api_url() {
    let dir = TempDir::new().unwrap();
    let store = LocalConfigStore::new(dir.path());
    assert!(matches!(
        store.set(ConfigKey::ApiUrl, "capture.example.com"),
        Err(Error::Validation(_))
    ));
}

#[test]
fn unknown_config_key_is_validation_error() {
    assert!(matches!(
        "retention_days".parse::<ConfigKey>(),
        Err(Error::Validation(_))
    ));
}

#[test]
fn global_fields_seed_once_and_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = LocalFieldStore::new(dir.path());

    let first = store.global().unwrap();
    assert!(!first.is_empty());
    assert!(dir.path().join("fields.json").exists());

    let second = store.global().unwrap();
    assert_eq!(first, second);
}

#[test]
fn project_scope_is_empty_without_seeding() {
    let dir = TempDir::new().unwrap();
    let projects = LocalProjectStore::new(dir.path());
    let fields = LocalFieldStore::new(dir.path());
    projects.create(new_project("docs")).unwrap();

    assert!(fields.for_project("docs").unwrap().is_empty());
    assert!(!dir.path().join("fields.docs.json").exists());
}

#[test]
fn add_project_option_requires_existing_project() {
    let dir = TempDir::new().unwrap();
    let fields = LocalFieldStore::new(dir.path());

    let result = fields.add(NewFieldOption {
        field: "status".to_string(),
        value: "shipped".to_string(),
        scope: Scope::Project,
        project_id: Some("ghost".to_string()),
    });
    assert!(matches!(result, Err(Error::NotFound)));
}

#[test]
fn global_option_must_not_carry_project_id() {
    let dir = TempDir::new().unwrap();
    let fields = LocalFieldStore::new(dir.path());

    let result = fields.add(NewFieldOption {
        field: "status".to_string(),
        value: "shipped".to_string(),
        scope: Scope::Global,
        project_id: Some("docs".to_string()),
    });
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn add_global_option_keeps_seeded_defaults() {
    let dir = TempDir::new().unwrap();
    let fields = LocalFieldStore::new(dir.path());

    let seeded = fields.global().unwrap().len();
    let option = fields
        .add(NewFieldOption {
            field: "status".to_string(),
            value: "blocked".to_string(),
            scope: Scope::Global,
            project_id: None,
        })
        .unwrap();

    let all = fields.global().unwrap();
    assert_eq!(all.len(), seeded + 1);
    assert!(all.iter().any(|o| o.id == option.id));
}

#[test]
fn remove_option_found_only_in_project_scope() {
    let dir = TempDir::new().unwrap();
    let projects = LocalProjectStore::new(dir.path());
    let fields = LocalFieldStore::new(dir.path());
    projects.create(new_project("docs")).unwrap();

    let option = fields
        .add(NewFieldOption {
            field: "status".to_string(),
            value: "shipped".to_string(),
            scope: Scope::Project,
            project_id: Some("docs".to_string()),
        })
        .unwrap();

    // The global catalog never held this id.
    assert!(!fields.global().unwrap().iter().any(|o| o.id == option.id));

    fields.remove(&option.id).unwrap();
    assert!(fields.for_project("docs").unwrap().is_empty());
}

#[test]
fn remove_unknown_option_is_not_found() {
    let dir = TempDir::new().unwrap();
    let fields = LocalFieldStore::new(dir.path());
    assert!(matches!(fields.remove("no-such-id"), Err(Error::NotFound)));
}

#[test]
fn store_files_keep_one_backup_generation() {
    let dir = TempDir::new().unwrap();
    let store = LocalProjectStore::new(dir.path());

    store.create(new_project("one")).unwrap();
    store.create(new_project("two")).unwrap();

    let backup = dir.path().join("projects.json.bak");
    assert!(backup.exists());
    let previous = std::fs::read_to_string(&backup).unwrap();
    assert!(previous.contains("\"one\""));
    assert!(!previous.contains("\"two\""));
}
