use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn windrose() -> Command {
    Command::new(env!("CARGO_BIN_EXE_windrose"))
}

fn station_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"date_time,direction,speed_knots\n2000-01-04 12:00,200,2\n")
        .unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn missing_column_exits_with_failure_and_lists_headers() {
    let file = station_csv();
    let output = windrose()
        .arg("-f")
        .arg(file.path())
        .args(["-y", "2000", "-p", "Alert", "-r", "wspd", "-d", "direction"])
        .args(["-l", "knots", "-s", "unsectioned"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("speed_knots"), "{stderr}");
}

#[test]
fn unknown_scheme_exits_with_failure() {
    let file = station_csv();
    let output = windrose()
        .arg("-f")
        .arg(file.path())
        .args(["-y", "2000", "-p", "Alert", "-l", "knots"])
        .args(["-r", "speed_knots", "-d", "direction", "-s", "weekly"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn help_exits_cleanly() {
    let output = windrose().arg("-h").output().unwrap();
    assert_eq!(output.status.code(), Some(0));
}
