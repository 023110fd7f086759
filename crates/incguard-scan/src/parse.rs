use crate::ScanError;
use incguard_domain::model::{HeaderEntry, HeaderModel};
use incguard_types::{RepoPath, SCHEMA_SCAN_V1};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct ScanFile {
    #[serde(default)]
    schema: Option<String>,
    #[serde(default)]
    headers: Vec<ScanHeader>,
}

#[derive(Debug, Deserialize)]
struct ScanHeader {
    #[serde(default)]
    path: String,
    /// Kept untyped: anything but a string counts as "no guard found".
    #[serde(default)]
    guard: Value,
    #[serde(default)]
    line: Option<u32>,
}

/// Parse the host scanner's `incguard.scan.v1` JSON into a header model.
///
/// Headers come back sorted by normalized path. **Never panics** on any input.
pub fn parse_scan_json(text: &str) -> Result<HeaderModel, ScanError> {
    let scan: ScanFile = serde_json::from_str(text)?;

    if let Some(schema) = scan.schema
        && schema != SCHEMA_SCAN_V1
    {
        return Err(ScanError::UnsupportedSchema(schema));
    }

    let mut headers = Vec::with_capacity(scan.headers.len());
    for (index, raw) in scan.headers.into_iter().enumerate() {
        if raw.path.trim().is_empty() {
            return Err(ScanError::EmptyPath { index });
        }
        let path = RepoPath::new(raw.path.trim());
        let observed_guard = match raw.guard {
            Value::String(guard) => Some(guard),
            Value::Null => None,
            other => {
                tracing::warn!(
                    header = %path,
                    guard = %other,
                    "non-string guard in scan, treating header as unguarded"
                );
                None
            }
        };
        headers.push(HeaderEntry {
            path,
            observed_guard,
            line: raw.line,
        });
    }

    // Stable order.
    headers.sort_by(|a, b| a.path.cmp(&b.path));
    if let Some(dup) = headers.windows(2).find(|w| w[0].path == w[1].path) {
        return Err(ScanError::DuplicateHeader {
            path: dup[0].path.to_string(),
        });
    }

    Ok(HeaderModel { headers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    struct BufferWriter(Arc<Mutex<Vec<u8>>>);

    impl<'a> MakeWriter<'a> for SharedBuffer {
        type Writer = BufferWriter;

        fn make_writer(&'a self) -> Self::Writer {
            BufferWriter(Arc::clone(&self.0))
        }
    }

    impl io::Write for BufferWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let mut guard = self
                .0
                .lock()
                .map_err(|_| io::Error::other("lock poisoned"))?;
            guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn parse_capturing_logs(text: &str) -> (Result<HeaderModel, ScanError>, String) {
        let sink = SharedBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(sink.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || parse_scan_json(text));

        let bytes = sink.0.lock().expect("lock output").clone();
        (result, String::from_utf8(bytes).expect("utf8 log output"))
    }

    #[test]
    fn parses_guards_absences_and_lines() {
        let model = parse_scan_json(
            r#"{
  "schema": "incguard.scan.v1",
  "headers": [
    { "path": "src/app/driver/adc-driver.h", "guard": "ADC_DRIVER_H", "line": 3 },
    { "path": "./src/app/bms.h", "guard": null },
    { "path": "src\\app\\can.h" }
  ]
}"#,
        )
        .expect("parse");

        let paths: Vec<&str> = model.headers.iter().map(|h| h.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["src/app/bms.h", "src/app/can.h", "src/app/driver/adc-driver.h"]
        );
        assert_eq!(model.headers[0].observed_guard, None);
        assert_eq!(model.headers[1].observed_guard, None);
        assert_eq!(
            model.headers[2].observed_guard.as_deref(),
            Some("ADC_DRIVER_H")
        );
        assert_eq!(model.headers[2].line, Some(3));
    }

    #[test]
    fn schema_is_optional() {
        let model = parse_scan_json(r#"{"headers":[{"path":"a.h","guard":"FOXBMS__A_H_"}]}"#)
            .expect("parse");
        assert_eq!(model.headers.len(), 1);
    }

    #[test]
    fn empty_object_is_an_empty_scan() {
        let model = parse_scan_json("{}").expect("parse");
        assert!(model.headers.is_empty());
    }

    #[test]
    fn non_string_guard_is_treated_as_absent() {
        let model = parse_scan_json(r#"{"headers":[{"path":"a.h","guard":42}]}"#).expect("parse");
        assert_eq!(model.headers[0].observed_guard, None);
    }

    #[test]
    fn non_string_guard_logs_a_warning() {
        let (result, logs) =
            parse_capturing_logs(r#"{"headers":[{"path":"src/a.h","guard":["A_H"]}]}"#);
        assert_eq!(result.expect("parse").headers[0].observed_guard, None);
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("non-string guard in scan"), "{logs}");
        assert!(logs.contains("header=src/a.h"), "{logs}");
    }

    #[test]
    fn string_and_null_guards_log_nothing() {
        let (result, logs) = parse_capturing_logs(
            r#"{"headers":[{"path":"a.h","guard":"FOXBMS__A_H_"},{"path":"b.h","guard":null}]}"#,
        );
        assert_eq!(result.expect("parse").headers.len(), 2);
        assert!(logs.is_empty(), "{logs}");
    }

    #[test]
    fn rejects_foreign_schema() {
        let err = parse_scan_json(r#"{"schema":"other.scan.v9","headers":[]}"#).unwrap_err();
        assert!(matches!(err, ScanError::UnsupportedSchema(ref s) if s == "other.scan.v9"));
    }

    #[test]
    fn rejects_empty_path() {
        let err = parse_scan_json(r#"{"headers":[{"path":"a.h"},{"path":"  "}]}"#).unwrap_err();
        assert!(matches!(err, ScanError::EmptyPath { index: 1 }));
    }

    #[test]
    fn rejects_duplicate_headers_after_normalization() {
        let err =
            parse_scan_json(r#"{"headers":[{"path":"src/a.h"},{"path":"./src/a.h"}]}"#).unwrap_err();
        assert_eq!(err.to_string(), "header listed more than once: src/a.h");
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            parse_scan_json("not json").unwrap_err(),
            ScanError::Json(_)
        ));
    }
}
