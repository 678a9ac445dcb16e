use fuel_core::Body;
use fuel_export::history::{ExportFormat, export, write_csv};
use fuel_propulsion::{Maneuver, Route};
use fuel_server::{CallInput, CallRecord, CallerId};

fn sample_records() -> Vec<CallRecord> {
    vec![
        CallRecord {
            caller: CallerId::new("apollo-11"),
            timestamp: 1_700_000_000,
            input: CallInput {
                mass: 28_801,
                route: Route::new(vec![Maneuver::launch(Body::Earth), Maneuver::land(Body::Moon)]),
            },
            output: 42_000,
        },
        CallRecord {
            caller: CallerId::new("mars-one"),
            timestamp: 1_700_000_005,
            input: CallInput {
                mass: 14_606,
                route: Route::new(vec![Maneuver::land(Body::Mars)]),
            },
            output: 1_234,
        },
    ]
}

#[test]
fn csv_rows_follow_history_order() {
    let mut buffer: Vec<u8> = Vec::new();
    write_csv(&sample_records(), &mut buffer).expect("csv export");
    let text = String::from_utf8(buffer).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "caller,timestamp,mass,route,fuel");
    assert_eq!(
        lines[1],
        "apollo-11,1700000000,28801,launch:9.807|land:1.62,42000"
    );
    assert_eq!(lines[2], "mars-one,1700000005,14606,land:3.711,1234");
    assert_eq!(lines.len(), 3);
}

#[test]
fn empty_history_still_writes_header() {
    let mut buffer: Vec<u8> = Vec::new();
    write_csv(&[], &mut buffer).expect("csv export");
    assert_eq!(String::from_utf8(buffer).unwrap().trim(), "caller,timestamp,mass,route,fuel");
}

#[test]
fn json_export_round_trips_through_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("history.json");
    let records = sample_records();
    export(&records, &path, ExportFormat::Json).expect("json export");

    let contents = std::fs::read_to_string(&path).expect("read export");
    let parsed: Vec<CallRecord> = serde_json::from_str(&contents).expect("parse export");
    assert_eq!(parsed, records);
}
