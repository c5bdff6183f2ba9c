//! Tests for the quick-xml event driver

use crate::app::services::csv_writer::RowWriter;
use crate::app::services::extractor::{extract_file, extract_stream};
use crate::config::Config;
use crate::Error;
use std::io::Cursor;

fn config() -> Config {
    Config::default().with_mission_type_name("Referanseflåten-Kyst")
}

fn run(document: &str) -> (Vec<String>, crate::app::services::extractor::ExtractStats) {
    let mut writer = RowWriter::new(Vec::new()).unwrap();
    let stats = extract_stream(&config(), Cursor::new(document), &mut writer, "test.xml").unwrap();
    let output = String::from_utf8(writer.into_inner()).unwrap();
    (output.lines().map(str::to_string).collect(), stats)
}

const TWO_SAMPLE_MISSION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<missions xmlns="http://www.imr.no/formats/nmdbiotic/v3">
  <mission missiontype="11">
    <missiontypename>Referanseflåten-Kyst</missiontypename>
    <fishstation serialnumber="42">
      <stationstartdate>2015-03-07</stationstartdate>
      <catchsample species="164712">
        <commonname>cod</commonname>
        <catchcount>10</catchcount>
      </catchsample>
      <catchsample species="161722">
        <commonname>herring</commonname>
        <catchweight>3.5</catchweight>
        <stationcomment>rough;seas</stationcomment>
      </catchsample>
    </fishstation>
  </mission>
</missions>
"#;

#[test]
fn two_sample_mission_emits_two_rows() {
    let (lines, stats) = run(TWO_SAMPLE_MISSION);

    assert_eq!(stats.stations, 1);
    assert_eq!(stats.accepted, 2);
    assert_eq!(stats.skipped, 0);
    assert_eq!(lines.len(), 3); // header + 2 rows

    let row_a: Vec<&str> = lines[1].split(';').collect();
    let row_b: Vec<&str> = lines[2].split(';').collect();
    assert_eq!(row_a.len(), 21);
    assert_eq!(row_b.len(), 21);

    // Both rows share the station serial and start date.
    assert_eq!(row_a[2], "42");
    assert_eq!(row_b[2], "42");
    assert_eq!(row_a[3], "2015-03-07");
    assert_eq!(row_b[3], "2015-03-07");

    assert_eq!(row_a[15], "cod");
    assert_eq!(row_a[17], "10");
    assert_eq!(row_b[15], "herring");
    assert_eq!(row_b[16], "3.5");

    // Semicolon in the comment was sanitized to a colon.
    assert_eq!(row_b[14], "rough:seas");
    // All absent schema fields render as NA.
    assert_eq!(row_a[0], "NA");
    assert_eq!(row_a[14], "NA");
    assert_eq!(row_b[20], "NA");
}

#[test]
fn other_mission_types_emit_nothing() {
    let document = r#"<missions>
  <mission>
    <missiontypename>Økosystemtokt</missiontypename>
    <fishstation serialnumber="7">
      <catchsample>
        <commonname>cod</commonname>
        <catchcount>3</catchcount>
      </catchsample>
    </fishstation>
  </mission>
</missions>"#;

    let (lines, stats) = run(document);
    assert_eq!(lines.len(), 1); // header only
    assert_eq!(stats.stations, 0);
    assert_eq!(stats.accepted, 0);
}

#[test]
fn incomplete_sample_counts_as_skipped() {
    let document = r#"<missions>
  <mission>
    <missiontypename>Referanseflåten-Kyst</missiontypename>
    <fishstation>
      <catchsample>
        <commonname>cod</commonname>
      </catchsample>
    </fishstation>
  </mission>
</missions>"#;

    let (lines, stats) = run(document);
    assert_eq!(lines.len(), 1);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.accepted, 0);
}

#[test]
fn second_mission_of_other_type_is_ignored() {
    let document = r#"<missions>
  <mission>
    <missiontypename>Referanseflåten-Kyst</missiontypename>
    <fishstation serialnumber="1">
      <catchsample>
        <commonname>cod</commonname>
        <catchcount>5</catchcount>
      </catchsample>
    </fishstation>
  </mission>
  <mission>
    <missiontypename>Referanseflåten-Hav</missiontypename>
    <fishstation serialnumber="2">
      <catchsample>
        <commonname>saithe</commonname>
        <catchcount>8</catchcount>
      </catchsample>
    </fishstation>
  </mission>
</missions>"#;

    let (lines, stats) = run(document);
    assert_eq!(lines.len(), 2);
    assert_eq!(stats.stations, 1);
    assert_eq!(lines[1].split(';').nth(2), Some("1"));
}

#[test]
fn self_closing_catchsample_is_a_skip() {
    let document = r#"<missions>
  <mission>
    <missiontypename>Referanseflåten-Kyst</missiontypename>
    <fishstation serialnumber="1">
      <catchsample/>
    </fishstation>
  </mission>
</missions>"#;

    let (_, stats) = run(document);
    assert_eq!(stats.skipped, 1);
}

#[test]
fn escaped_text_is_decoded() {
    let document = r#"<missions>
  <mission>
    <missiontypename>Referanseflåten-Kyst</missiontypename>
    <fishstation serialnumber="1">
      <stationcomment>net &amp; line</stationcomment>
      <catchsample>
        <commonname>cod</commonname>
        <catchcount>1</catchcount>
      </catchsample>
    </fishstation>
  </mission>
</missions>"#;

    let (lines, _) = run(document);
    assert_eq!(lines[1].split(';').nth(14), Some("net & line"));
}

#[test]
fn cdata_text_is_captured_literally() {
    let document = r#"<missions>
  <mission>
    <missiontypename>Referanseflåten-Kyst</missiontypename>
    <fishstation serialnumber="1">
      <stationcomment><![CDATA[rough;seas]]></stationcomment>
      <catchsample>
        <commonname><![CDATA[cod & saithe]]></commonname>
        <catchcount>1</catchcount>
      </catchsample>
    </fishstation>
  </mission>
</missions>"#;

    let (lines, stats) = run(document);
    assert_eq!(stats.accepted, 1);
    let row: Vec<&str> = lines[1].split(';').collect();
    // CDATA comment text is captured and sanitized like any other text.
    assert_eq!(row[14], "rough:seas");
    // Entity references inside CDATA stay literal.
    assert_eq!(row[15], "cod & saithe");
}

#[test]
fn cdata_mission_type_opens_the_gate() {
    let document = r#"<missions>
  <mission>
    <missiontypename><![CDATA[Referanseflåten-Kyst]]></missiontypename>
    <fishstation serialnumber="2">
      <catchsample>
        <commonname>cod</commonname>
        <catchcount>4</catchcount>
      </catchsample>
    </fishstation>
  </mission>
</missions>"#;

    let (lines, stats) = run(document);
    assert_eq!(stats.accepted, 1);
    assert_eq!(lines.len(), 2);
}

#[test]
fn malformed_xml_is_a_surfaced_error() {
    let document = "<missions><mission></broken></missions>";
    let mut writer = RowWriter::new(Vec::new()).unwrap();
    let result = extract_stream(
        &config(),
        Cursor::new(document),
        &mut writer,
        "biotic_bad.xml",
    );

    match result {
        Err(Error::XmlParse { file, .. }) => assert_eq!(file, "biotic_bad.xml"),
        other => panic!("expected XmlParse error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn extract_file_writes_derived_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("biotic_2015.xml");
    std::fs::write(&input, TWO_SAMPLE_MISSION).unwrap();

    let summary = extract_file(&config(), &input).unwrap();

    assert_eq!(summary.output_path, dir.path().join("biotic_2015.csv"));
    assert_eq!(summary.stations, 1);
    assert_eq!(summary.accepted, 2);
    assert_eq!(summary.skipped, 0);

    let output = std::fs::read_to_string(summary.output_path).unwrap();
    assert_eq!(output.lines().count(), 3);
    assert!(output.starts_with("platformname;callsignal;serial;"));
}

#[test]
fn extract_file_missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = extract_file(&config(), &dir.path().join("absent.xml"));
    assert!(matches!(result, Err(Error::Io { .. })));
}
