use price_machine::{Catalog, CatalogError, LoadOptions, SchemaErrorPolicy, Session};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_listing(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn products(catalog: &Catalog) -> Vec<&str> {
    catalog
        .entries()
        .iter()
        .map(|e| e.product.as_str())
        .collect()
}

#[test]
fn test_load_merges_files_sorted_by_unit_price() {
    let temp_dir = TempDir::new().unwrap();
    write_listing(
        temp_dir.path(),
        "price_1.csv",
        "товар,цена,вес\nЯблоко,100,2\n",
    );
    write_listing(
        temp_dir.path(),
        "price_2.csv",
        "наименование,розница,масса\nГруша,90,3\n",
    );

    let mut catalog = Catalog::new();
    let summary = catalog.load(temp_dir.path()).unwrap();

    assert_eq!(summary.files_loaded, 2);
    assert_eq!(summary.entries_loaded, 2);
    assert_eq!(products(&catalog), vec!["Груша", "Яблоко"]);
    assert_eq!(catalog.entries()[0].unit_price, 30.0);
    assert_eq!(catalog.entries()[0].source_file, "price_2.csv");
    assert_eq!(catalog.entries()[1].unit_price, 50.0);
}

#[test]
fn test_load_ignores_non_listing_files() {
    let temp_dir = TempDir::new().unwrap();
    write_listing(temp_dir.path(), "price_1.csv", "товар,цена,вес\nЯблоко,100,2\n");
    // would fail both schema and parsing if it were read
    write_listing(temp_dir.path(), "summary.csv", "итого\nмного\n");
    write_listing(temp_dir.path(), "price_notes.txt", "не таблица\n");

    let mut catalog = Catalog::new();
    let summary = catalog.load(temp_dir.path()).unwrap();

    assert_eq!(summary.files_loaded, 1);
    assert_eq!(products(&catalog), vec!["Яблоко"]);
}

#[test]
fn test_catalog_properties_hold_after_load() {
    let temp_dir = TempDir::new().unwrap();
    write_listing(
        temp_dir.path(),
        "price_a.csv",
        "название,цена,фасовка\nСоль,50,0\nРис,90,1\nХлеб,40\nСахар,70,0.5\n",
    );
    write_listing(
        temp_dir.path(),
        "price_b.csv",
        "фасовка,продукт,цена\n2,Мука,80\n0.25,Перец,60\n",
    );

    let mut catalog = Catalog::new();
    let summary = catalog.load(temp_dir.path()).unwrap();

    assert_eq!(summary.rows_skipped, 1);
    assert_eq!(catalog.len(), 5);
    assert!(catalog
        .entries()
        .windows(2)
        .all(|pair| pair[0].unit_price <= pair[1].unit_price));
    assert!(catalog
        .entries()
        .iter()
        .filter(|e| e.weight == 0.0)
        .all(|e| e.unit_price == 0.0));
    assert!(!products(&catalog).contains(&"Хлеб"));
}

#[test]
fn test_search_scenario() {
    let temp_dir = TempDir::new().unwrap();
    write_listing(
        temp_dir.path(),
        "price_1.csv",
        "товар,цена,вес\nЯблоко,100,2\nСоль,50,0\n",
    );

    let mut catalog = Catalog::new();
    catalog.load(temp_dir.path()).unwrap();

    let found = catalog.search("ябл");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].product, "Яблоко");
    assert_eq!(catalog.search("").len(), 2);
    assert!(catalog.search("сыр").is_empty());
}

#[test]
fn test_schema_error_aborts_by_default() {
    let temp_dir = TempDir::new().unwrap();
    write_listing(temp_dir.path(), "price_1.csv", "товар,цена,вес\nЯблоко,100,2\n");
    write_listing(temp_dir.path(), "price_2.csv", "товар,стоимость,вес\nГруша,90,3\n");

    let mut catalog = Catalog::new();
    let err = catalog.load(temp_dir.path()).unwrap_err();

    match err {
        CatalogError::SchemaError { file, missing } => {
            assert_eq!(file, "price_2.csv");
            assert_eq!(missing, "price");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(catalog.is_empty());
}

#[test]
fn test_schema_error_skipped_when_configured() {
    let temp_dir = TempDir::new().unwrap();
    write_listing(temp_dir.path(), "price_1.csv", "товар,стоимость,вес\nГруша,90,3\n");
    write_listing(temp_dir.path(), "price_2.csv", "товар,цена,вес\nЯблоко,100,2\n");

    let options = LoadOptions {
        on_schema_error: SchemaErrorPolicy::Skip,
        ..LoadOptions::default()
    };
    let mut catalog = Catalog::new();
    let summary = catalog.load_with(temp_dir.path(), &options).unwrap();

    assert_eq!(summary.files_loaded, 1);
    assert_eq!(summary.files_skipped, 1);
    assert_eq!(products(&catalog), vec!["Яблоко"]);
}

#[test]
fn test_parse_error_aborts_even_when_skipping_schema_errors() {
    let temp_dir = TempDir::new().unwrap();
    write_listing(temp_dir.path(), "price_1.csv", "товар,цена,вес\nЯблоко,сто,2\n");

    let options = LoadOptions {
        on_schema_error: SchemaErrorPolicy::Skip,
        ..LoadOptions::default()
    };
    let mut catalog = Catalog::new();
    let err = catalog.load_with(temp_dir.path(), &options).unwrap_err();

    assert!(matches!(err, CatalogError::ParseError { line: 2, .. }));
    assert!(catalog.is_empty());
}

#[test]
fn test_missing_directory_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let mut catalog = Catalog::new();
    let err = catalog.load(temp_dir.path().join("price")).unwrap_err();
    assert!(matches!(err, CatalogError::DirectoryRead { .. }));
}

#[test]
fn test_end_to_end_session_exports_html() {
    let temp_dir = TempDir::new().unwrap();
    let listings = temp_dir.path().join("price");
    fs::create_dir(&listings).unwrap();
    write_listing(&listings, "price_1.csv", "товар,цена,вес\nЯблоко,100,2\n");
    write_listing(&listings, "price_2.csv", "название,розница,фасовка\nГруша,90,3\n");

    let mut catalog = Catalog::new();
    catalog.load(&listings).unwrap();

    let export_path = temp_dir.path().join("output.html");
    let session = Session::new(&catalog, &export_path);
    let mut output = Vec::new();
    let message = session
        .run("груш\nexit\n".as_bytes(), &mut output)
        .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("1. Груша - 90.0 руб., 3.0 кг., price_2.csv, 30.00 руб./кг."));
    assert_eq!(
        message,
        format!("Данные прайс-листов выгружены в {}", export_path.display())
    );

    let html = fs::read_to_string(&export_path).unwrap();
    let first = html
        .find("<tr><td>1</td><td>Груша</td><td>90.0</td><td>3.0</td><td>price_2.csv</td><td>30.00</td></tr>")
        .unwrap();
    let second = html
        .find("<tr><td>2</td><td>Яблоко</td><td>100.0</td><td>2.0</td><td>price_1.csv</td><td>50.00</td></tr>")
        .unwrap();
    assert!(first < second);

    // re-export is byte-identical
    catalog.export_html(&export_path).unwrap();
    assert_eq!(fs::read_to_string(&export_path).unwrap(), html);
}
