use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{HEADER, NEW_YEAR_2024, read_csv, rtw, temp_table, write_csv};

#[test]
fn init_creates_empty_table() {
    let table = temp_table("cli_init", "csv");
    let store = table.to_string_lossy().to_string();

    rtw("cli_init")
        .args(["--store", &store, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Table initialized"));

    assert_eq!(fs::read_to_string(&table).unwrap().trim_end(), HEADER);

    // second init leaves it alone
    rtw("cli_init")
        .args(["--store", &store, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("already present"));
}

#[test]
fn run_reports_statuses() {
    let table = temp_table("cli_run", "csv");
    write_csv(
        &table,
        HEADER,
        &["1,ana,01/01/2099 00:00:00,,", "2,bia,01/01/2020 00:00:00,,"],
    );

    rtw("cli_run")
        .args([
            "--store",
            &table.to_string_lossy(),
            "--now",
            NEW_YEAR_2024,
            "run",
        ])
        .assert()
        .success()
        .stdout(contains("Expired").and(contains("Within time")))
        .stdout(contains("2 rows: 1 within time, 1 expired"));

    let rows = read_csv(&table);
    assert_eq!(rows[2][4], "35064:00:00");
}

#[test]
fn bad_row_is_reported_and_batch_continues() {
    let table = temp_table("cli_bad_row", "csv");
    write_csv(
        &table,
        HEADER,
        &["1,ana,not-a-date,,", "2,bia,01/01/2020 00:00:00,,"],
    );

    rtw("cli_bad_row")
        .args([
            "--store",
            &table.to_string_lossy(),
            "--now",
            NEW_YEAR_2024,
            "run",
        ])
        .assert()
        .success()
        .stderr(contains("Bad value in your data").and(contains("row 2: not-a-date")));

    let rows = read_csv(&table);
    assert_eq!(rows[1][3], "");
    assert_eq!(rows[2][3], "Expired");
}

#[test]
fn unreadable_table_fails_the_run() {
    let table = temp_table("cli_corrupt", "xlsx");
    fs::write(&table, "garbage").unwrap();

    rtw("cli_corrupt")
        .args(["--store", &table.to_string_lossy(), "run"])
        .assert()
        .failure()
        .stderr(contains("The file could not be processed"))
        .stdout(contains("Check that the file has the columns"));
}

#[test]
fn unsupported_extension_fails() {
    rtw("cli_ods")
        .args(["--store", "/tmp/whatever.ods", "run"])
        .assert()
        .failure()
        .stderr(contains("Unsupported table format"))
        .stdout(contains("Check that the file has the columns").not());
}

#[test]
fn bad_timezone_fails() {
    let table = temp_table("cli_bad_tz", "csv");

    rtw("cli_bad_tz")
        .args(["--store", &table.to_string_lossy(), "--tz", "Mars/Base", "run"])
        .assert()
        .failure()
        .stderr(contains("Invalid timezone"));
}

#[test]
fn watch_survives_a_broken_table() {
    let table = temp_table("cli_watch_broken", "xlsx");
    fs::write(&table, "garbage").unwrap();

    rtw("cli_watch_broken")
        .args([
            "--store",
            &table.to_string_lossy(),
            "watch",
            "--cycles",
            "2",
            "--interval",
            "1",
        ])
        .assert()
        .success()
        .stderr(contains("The file could not be processed"));
}

#[test]
fn watch_runs_the_requested_cycles() {
    let table = temp_table("cli_watch", "csv");
    write_csv(&table, HEADER, &["1,ana,01/01/2020 00:00:00,,"]);

    let out = rtw("cli_watch")
        .args([
            "--store",
            &table.to_string_lossy(),
            "--now",
            NEW_YEAR_2024,
            "watch",
            "--cycles",
            "2",
            "--interval",
            "1",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&out);
    assert_eq!(text.matches("Updated at").count(), 2);
    assert!(text.contains("every 1 s"));
}

#[test]
fn show_json_reads_without_recomputing() {
    let table = temp_table("cli_show", "csv");
    write_csv(&table, HEADER, &["7,ana,10:00:00,Expired,00:30:00"]);

    rtw("cli_show")
        .args(["--store", &table.to_string_lossy(), "show", "--json"])
        .assert()
        .success()
        .stdout(contains("\"remaining\": \"Expired\"").and(contains("\"exceeded\": \"00:30:00\"")));
}

#[test]
fn load_then_export() {
    let src = temp_table("cli_load_src", "csv");
    write_csv(&src, "Item,Operador,Termino", &["1,ana,01/01/2020 00:00:00"]);
    let store = temp_table("cli_load_store", "xlsx");
    let out = temp_table("cli_load_out", "xlsx");

    rtw("cli_load")
        .args([
            "--store",
            &store.to_string_lossy(),
            "load",
            "--file",
            &src.to_string_lossy(),
        ])
        .assert()
        .success()
        .stdout(contains("File loaded successfully: 1 rows"));

    rtw("cli_load")
        .args([
            "--store",
            &store.to_string_lossy(),
            "--now",
            NEW_YEAR_2024,
            "run",
        ])
        .assert()
        .success()
        .stdout(contains("Highlight rule on D2:D2"));

    rtw("cli_load")
        .args([
            "--store",
            &store.to_string_lossy(),
            "export",
            "--file",
            &out.to_string_lossy(),
            "--force",
        ])
        .assert()
        .success();

    assert_eq!(fs::read(&store).unwrap(), fs::read(&out).unwrap());
}

#[test]
fn export_failure_names_the_destination() {
    let store = temp_table("cli_export_dest_store", "csv");
    write_csv(&store, HEADER, &["1,ana,10:00:00,,"]);
    let dest = std::env::temp_dir()
        .join("rtimewatch_no_such_dir")
        .join("out.csv");
    fs::remove_dir_all(dest.parent().unwrap()).ok();

    rtw("cli_export_dest")
        .args([
            "--store",
            &store.to_string_lossy(),
            "export",
            "--file",
            &dest.to_string_lossy(),
        ])
        .assert()
        .failure()
        .stderr(contains("Cannot write table").and(contains(dest.to_string_lossy().to_string())));
}

#[test]
fn load_rejects_table_without_deadline() {
    let src = temp_table("cli_load_bad_src", "csv");
    write_csv(&src, "Item,Operador", &["1,ana"]);
    let store = temp_table("cli_load_bad_store", "csv");
    write_csv(&store, HEADER, &["1,ana,10:00:00,,"]);
    let before = fs::read(&store).unwrap();

    rtw("cli_load_bad")
        .args([
            "--store",
            &store.to_string_lossy(),
            "load",
            "--file",
            &src.to_string_lossy(),
        ])
        .assert()
        .failure()
        .stderr(contains("has no 'Termino' column"));

    assert_eq!(fs::read(&store).unwrap(), before);
}

#[test]
fn config_print_shows_defaults() {
    rtw("cli_config")
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("timezone: America/Sao_Paulo").and(contains("refresh_interval: 60")));
}
