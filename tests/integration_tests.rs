use relatos::{LocalStorage, Report, ReportDraft, ReportService, ReportStore};
use tempfile::TempDir;

fn data_file(dir: &TempDir) -> String {
    dir.path().join("relatos.txt").to_str().unwrap().to_string()
}

fn open_service(path: &str) -> ReportService<LocalStorage> {
    let store = ReportStore::load(LocalStorage::new(), path).unwrap();
    ReportService::new(store)
}

fn draft(name: &str, email: &str, lat: f64, lon: f64) -> ReportDraft {
    ReportDraft {
        name: name.to_string(),
        email: email.to_string(),
        disaster_type: "Flood".to_string(),
        description: "River overflow".to_string(),
        latitude: lat,
        longitude: lon,
    }
}

#[test]
fn test_end_to_end_register_query_sort() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir);
    let mut service = open_service(&path);

    // first report appears at index 1
    service
        .create_report(draft("Ana", "ana@x.com", -23.5, -46.6))
        .unwrap();
    assert_eq!(service.list_all().len(), 1);
    assert_eq!(service.list_all()[0].name, "Ana");

    // second report at the same coordinates: both match with distance 0
    service
        .create_report(draft("Ben", "ben@x.com", -23.5, -46.6))
        .unwrap();
    let matches = service.query_by_radius(-23.5, -46.6, 10.0).unwrap();
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|(_, d)| *d == 0.0));

    // third and fourth, then sort: Ana, Ana2, Ben
    service
        .create_report(draft("Ana2", "ana2@x.com", 10.0, 10.0))
        .unwrap();
    service.sort_by_name().unwrap();
    let names: Vec<&str> = service.list_all().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Ana", "Ana2", "Ben"]);
}

#[test]
fn test_reports_survive_a_restart() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir);

    {
        let mut service = open_service(&path);
        service
            .create_report(draft("Ana", "ana@x.com", -23.550520, -46.633308))
            .unwrap();
        service
            .create_report(draft("Ben", "ben@x.com", 51.507351, -0.127758))
            .unwrap();
    }

    // a fresh process sees the same records, field for field
    let service = open_service(&path);
    let reports: &[Report] = service.list_all();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].name, "Ana");
    assert_eq!(reports[0].email, "ana@x.com");
    assert_eq!(reports[0].disaster_type, "Flood");
    assert!((reports[0].latitude - -23.550520).abs() < 1e-6);
    assert!((reports[0].longitude - -46.633308).abs() < 1e-6);
    assert_eq!(reports[1].name, "Ben");
    assert!((reports[1].latitude - 51.507351).abs() < 1e-6);
}

#[test]
fn test_rejected_report_is_not_persisted() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir);

    {
        let mut service = open_service(&path);
        service
            .create_report(draft("Ana", "ana@x.com", 0.0, 0.0))
            .unwrap();
        assert!(service.create_report(draft("Bob", "bob@x.org", 0.0, 0.0)).is_err());
        assert_eq!(service.len(), 1);
    }

    let service = open_service(&path);
    assert_eq!(service.len(), 1);
    assert_eq!(service.list_all()[0].name, "Ana");
}

#[test]
fn test_sort_order_is_persisted() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir);

    {
        let mut service = open_service(&path);
        service.create_report(draft("Cid", "cid@x.com", 0.0, 0.0)).unwrap();
        service.create_report(draft("Ana", "ana@x.com", 0.0, 0.0)).unwrap();
        service.create_report(draft("Ben", "ben@x.com", 0.0, 0.0)).unwrap();
        service.sort_by_name().unwrap();
    }

    let service = open_service(&path);
    let names: Vec<&str> = service.list_all().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Ana", "Ben", "Cid"]);
}

#[test]
fn test_hand_written_legacy_file_loads() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir);
    std::fs::write(
        &path,
        "Maria;maria@mail.com;Earthquake;Strong tremor downtown;-23.500000;-46.600000\n\
         broken line without delimiters\n\
         Jo\u{e3}o;joao@mail.com;Flood;Street flooded;-23.501000;-46.601000\n",
    )
    .unwrap();

    let service = open_service(&path);
    assert_eq!(service.len(), 2);
    assert_eq!(service.list_all()[0].name, "Maria");
    assert_eq!(service.list_all()[1].name, "Jo\u{e3}o");

    // both records sit well inside 10 km of the first one
    let matches = service.query_by_radius(-23.5, -46.6, 10.0).unwrap();
    assert_eq!(matches.len(), 2);
}
